//! Library exports for tcurls-cli.
//!
//! Exposes the CLI structure so tests can validate the clap definitions
//! without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
