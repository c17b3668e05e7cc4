//! The synthesis invocation: program, environment, ordered flags.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::SynthesisDefaults;
use crate::io::paths::{checkpoint_path, synthesis_output_dir};
use crate::io::LaunchArgs;
use crate::launch::env::runtime_env;

/// A fully built synthesis invocation.
///
/// Construction is pure: nothing is validated and nothing on disk is
/// touched. Every positional parameter lands in its flag verbatim.
#[derive(Debug, Clone)]
pub struct SynthesisCommand {
    program: PathBuf,
    flags: Vec<String>,
}

impl SynthesisCommand {
    pub fn new(program: PathBuf, args: &LaunchArgs, defaults: &SynthesisDefaults) -> Self {
        let flags = vec![
            format!("--fastspeech2-config={}", args.config),
            format!(
                "--fastspeech2-checkpoint={}",
                checkpoint_path(&args.output_root, &args.ckpt_name)
            ),
            format!("--fastspeech2-stat={}", defaults.fastspeech2_stat),
            format!("--pwg-config={}", defaults.pwg_config),
            format!("--pwg-checkpoint={}", defaults.pwg_ckpt),
            format!("--pwg-stat={}", defaults.pwg_stat),
            format!("--ge2e_params_path={}", args.embed_params),
            format!("--text={}", defaults.text),
            format!("--input-dir={}", args.ref_audio_dir),
            format!("--output-dir={}", synthesis_output_dir(&args.output_root)),
            format!("--phones-dict={}", defaults.phones_dict),
        ];
        Self { program, flags }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Flag strings in invocation order.
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    /// Build the `std::process::Command` with the runtime env pairs applied.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.flags);
        for (key, value) in runtime_env() {
            command.env(key, value);
        }
        command
    }
}
