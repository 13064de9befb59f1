//! Command to print the URL produced by an operation.

use crate::error::CliError;
use crate::utils::{build_provider, GlobalOptions};
use clap::Args;
use tcurls::Operation;

/// Print the URL produced by an operation for the configured root URL.
#[derive(Args)]
pub struct UrlCommand {
    /// Operation name, e.g. `api` or `apiReference`
    #[arg(value_name = "OPERATION")]
    pub operation: String,

    /// Positional arguments for the operation; put `--` before any that start with `-`
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl UrlCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let operation: Operation = self.operation.parse()?;
        let provider = build_provider(global)?;

        let url = operation.invoke(&provider, &self.args)?;
        println!("{url}");
        Ok(())
    }
}
