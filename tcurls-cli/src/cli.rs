//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, OperationsCommand, UrlCommand, VariantCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for building canonical Taskcluster URLs.
#[derive(Parser)]
#[command(name = "tcurls")]
#[command(version, about = "Build canonical Taskcluster URLs", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Root URL of the Taskcluster deployment
    #[arg(long, value_name = "URL", global = true, env = "TASKCLUSTER_ROOT_URL")]
    pub root_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the URL produced by an operation
    Url(UrlCommand),

    /// List the available operations and their arguments
    Operations(OperationsCommand),

    /// Show which deployment variant the root URL selects
    Variant(VariantCommand),

    /// Run a conformance fixture against the URL rules
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
