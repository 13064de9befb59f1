//! Build script for tcurls-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is restated here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("tcurls")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build canonical Taskcluster URLs")
        .long_about(
            "Command-line tool for building canonical Taskcluster URLs for legacy and \
             self-hosted deployments",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root-url")
                .long("root-url")
                .help("Root URL of the Taskcluster deployment")
                .value_name("URL")
                .global(true)
                .env("TASKCLUSTER_ROOT_URL"),
        )
        .subcommands(vec![
            Command::new("url")
                .about("Print the URL produced by an operation")
                .long_about("Print the URL a named operation produces for the root URL"),
            Command::new("operations")
                .about("List the available operations and their arguments")
                .long_about("List every URL operation with its positional parameters"),
            Command::new("variant")
                .about("Show which deployment variant the root URL selects")
                .long_about("Print legacy or generic followed by the effective root URL"),
            Command::new("check")
                .about("Run a conformance fixture against the URL rules")
                .long_about("Evaluate every case of a YAML conformance fixture and report mismatches"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("tcurls.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
