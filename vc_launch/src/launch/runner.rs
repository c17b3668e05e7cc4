//! Runs the synthesis command and passes its exit status through.

use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::launch::command::SynthesisCommand;

/// Spawn the synthesis program, block until it terminates, and return its
/// exit code. stdout/stderr are inherited, so the child's own diagnostics
/// reach the user unmodified. The only launcher-owned error is a failed
/// spawn (program not found, not executable).
pub fn run(command: &SynthesisCommand) -> Result<i32> {
    tracing::info!(
        program = %command.program().display(),
        flags = command.flags().len(),
        "Launching synthesis"
    );

    let status = command
        .to_command()
        .status()
        .with_context(|| format!("Failed to launch synthesis program {:?}", command.program()))?;

    if !status.success() {
        tracing::warn!(%status, "Synthesis program reported failure");
    }
    Ok(exit_code(status))
}

/// The child's exit code verbatim; on Unix, death by signal N maps to 128+N.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SynthesisDefaults;
    use crate::io::LaunchArgs;
    use std::path::PathBuf;

    #[cfg(unix)]
    fn sh_status(script: &str) -> ExitStatus {
        std::process::Command::new("sh")
            .args(["-c", script])
            .status()
            .expect("run sh")
    }

    #[cfg(unix)]
    #[test]
    fn exit_code_passes_through_normal_exit() {
        assert_eq!(exit_code(sh_status("exit 0")), 0);
        assert_eq!(exit_code(sh_status("exit 7")), 7);
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_maps_to_128_plus_signal() {
        assert_eq!(exit_code(sh_status("kill -TERM $$")), 128 + 15);
    }

    #[test]
    fn run_fails_when_program_is_missing() {
        let command = SynthesisCommand::new(
            PathBuf::from("/nonexistent/voice_cloning"),
            &LaunchArgs::default(),
            &SynthesisDefaults::default(),
        );
        let err = run(&command).expect_err("spawn should fail");
        assert!(err.to_string().contains("voice_cloning"));
    }
}
