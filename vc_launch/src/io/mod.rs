pub mod paths;

/// The five positional launch parameters, in invocation order.
///
/// Values are forwarded to the synthesis program verbatim: no existence,
/// type, or content checks happen here. An empty string is a legal value and
/// substitutes as-is.
#[derive(Debug, Clone, Default)]
pub struct LaunchArgs {
    /// Acoustic model configuration file
    pub config: String,

    /// Training output root; `checkpoints/` and `vc_syn/` live under it
    pub output_root: String,

    /// Checkpoint filename under `<output_root>/checkpoints/`
    pub ckpt_name: String,

    /// Speaker-embedding (GE2E) parameter file
    pub embed_params: String,

    /// Directory of reference audio to clone from
    pub ref_audio_dir: String,
}
