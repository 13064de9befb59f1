//! Shell completion generation command.
//!
//! Generates completion scripts for bash, zsh, fish, PowerShell and elvish.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "tcurls";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Generating {} completion script", self.shell);
                eprintln!("# {hint}");
                eprintln!();
            }
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("eval \"$(tcurls completions bash)\""),
        Shell::Zsh => Some("tcurls completions zsh > ~/.zsh/completions/_tcurls"),
        Shell::Fish => Some("tcurls completions fish | source"),
        Shell::PowerShell => Some("tcurls completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}
