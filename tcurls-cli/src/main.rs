//! Main entry point for the tcurls CLI.
//!
//! This is the command-line interface for building Taskcluster URLs:
//! - `url`: Print the URL produced by a named operation
//! - `operations`: List the available operations
//! - `variant`: Show which deployment variant a root URL selects
//! - `check`: Run a conformance fixture
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = tcurls::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        root_url: cli.root_url,
        logger,
    };

    let result = match cli.command {
        cli::Command::Url(cmd) => cmd.execute(&global),
        cli::Command::Operations(cmd) => cmd.execute(&global),
        cli::Command::Variant(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
