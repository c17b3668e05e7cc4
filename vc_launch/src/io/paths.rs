//! Derived paths under the training output root.
//!
//! Plain `/` concatenation, not platform joins: the results are flag text
//! consumed verbatim by the synthesis program.

/// Checkpoint file path: `<output_root>/checkpoints/<ckpt_name>`.
pub fn checkpoint_path(output_root: &str, ckpt_name: &str) -> String {
    format!("{output_root}/checkpoints/{ckpt_name}")
}

/// Synthesis output directory: `<output_root>/vc_syn`.
pub fn synthesis_output_dir(output_root: &str) -> String {
    format!("{output_root}/vc_syn")
}
