//! Launcher for FastSpeech2 voice-cloning synthesis.
//!
//! Builds the command line for an external synthesis program from five
//! positional parameters, sets the numeric runtime's allocator-strategy and
//! GPU-memory-fraction environment variables on the child process, runs it,
//! and passes its exit status through untouched. Synthesis itself (acoustic
//! model, vocoder, speaker-embedding extraction) happens entirely inside the
//! invoked program.

pub mod config;
pub mod io;
pub mod launch;

pub use config::SynthesisDefaults;
pub use io::LaunchArgs;
pub use launch::command::SynthesisCommand;
