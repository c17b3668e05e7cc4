use clap::Parser;
use std::path::PathBuf;
use vc_launch::LaunchArgs;

/// Entry-point name of the external synthesis program.
pub const SYNTHESIS_PROGRAM: &str = "voice_cloning";

/// Voice-cloning synthesis launcher.
///
/// Forwards the five positional parameters to the external synthesis
/// program as flags and exits with the program's own status. Missing
/// positionals substitute as empty strings, exactly as the downstream
/// program would receive them.
#[derive(Parser, Debug)]
#[command(name = "vc-launch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Acoustic model configuration file
    #[arg(value_name = "CONFIG_PATH", default_value = "")]
    pub config: String,

    /// Training output root (checkpoints/ and vc_syn/ live under it)
    #[arg(value_name = "OUTPUT_PATH", default_value = "")]
    pub output_root: String,

    /// Checkpoint filename under <OUTPUT_PATH>/checkpoints/
    #[arg(value_name = "CKPT_NAME", default_value = "")]
    pub ckpt_name: String,

    /// Speaker-embedding (GE2E) parameter file
    #[arg(value_name = "EMBED_PARAMS_PATH", default_value = "")]
    pub embed_params: String,

    /// Directory of reference audio to clone from
    #[arg(value_name = "REF_AUDIO_DIR", default_value = "")]
    pub ref_audio_dir: String,

    /// Directory containing the synthesis entry point
    #[arg(long, env = "BIN_DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Explicit synthesis program path (overrides --bin-dir)
    #[arg(long)]
    pub program: Option<PathBuf>,

    /// JSON file overriding the fixed flag values
    #[arg(long)]
    pub defaults: Option<PathBuf>,

    /// Enable tracing output (debug logs). Use RUST_LOG env var to filter levels.
    #[arg(long)]
    pub tracing: bool,
}

impl Cli {
    pub fn to_launch_args(&self) -> LaunchArgs {
        LaunchArgs {
            config: self.config.clone(),
            output_root: self.output_root.clone(),
            ckpt_name: self.ckpt_name.clone(),
            embed_params: self.embed_params.clone(),
            ref_audio_dir: self.ref_audio_dir.clone(),
        }
    }

    /// Resolve the synthesis program: explicit path, bin-dir entry, or a
    /// bare name left to PATH lookup.
    pub fn resolve_program(&self) -> PathBuf {
        if let Some(ref program) = self.program {
            return program.clone();
        }
        if let Some(ref bin_dir) = self.bin_dir {
            return bin_dir.join(SYNTHESIS_PROGRAM);
        }
        PathBuf::from(SYNTHESIS_PROGRAM)
    }
}
