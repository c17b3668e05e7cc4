//! Command-line launcher for voice-cloning synthesis.
//!
//! # Usage
//!
//! ```bash
//! # Launch synthesis against a trained acoustic model
//! vc-launch conf/default.yaml exp/default snapshot_iter_96400.pdz \
//!     ge2e_ckpt_0.3/step-3000000.pdz ref_audio \
//!     --bin-dir /opt/tts/bin
//!
//! # The entry point can also come from the BIN_DIR environment variable
//! BIN_DIR=/opt/tts/bin vc-launch conf/default.yaml exp/default \
//!     snapshot_iter_96400.pdz ge2e_ckpt_0.3/step-3000000.pdz ref_audio
//!
//! # Swap the vocoder checkpoint without touching the launcher
//! vc-launch conf/default.yaml exp/default snapshot_iter_96400.pdz \
//!     ge2e_ckpt_0.3/step-3000000.pdz ref_audio --defaults vocoder.json
//! ```
//!
//! The launcher exits with the synthesis program's own status; all of its
//! output passes through untouched.

mod args;

use anyhow::Result;
use clap::Parser;
use vc_launch::launch::runner;
use vc_launch::{SynthesisCommand, SynthesisDefaults};

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber if --tracing flag is passed
    if cli.tracing {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let defaults = match cli.defaults {
        Some(ref path) => SynthesisDefaults::from_json_file(path)?,
        None => SynthesisDefaults::default(),
    };

    let launch_args = cli.to_launch_args();
    tracing::debug!(
        config = %launch_args.config,
        output_root = %launch_args.output_root,
        ckpt_name = %launch_args.ckpt_name,
        embed_params = %launch_args.embed_params,
        ref_audio_dir = %launch_args.ref_audio_dir,
        "Launch parameters"
    );

    let command = SynthesisCommand::new(cli.resolve_program(), &launch_args, &defaults);
    let code = runner::run(&command)?;
    std::process::exit(code);
}
