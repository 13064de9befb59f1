//! Command to list the available operations.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use tcurls::Operation;

/// List every operation with its positional parameters.
#[derive(Args)]
pub struct OperationsCommand {}

impl OperationsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for op in Operation::ALL {
            println!("{}", signature(op));
        }
        Ok(())
    }
}

/// Render `name(param, ...)` for an operation.
fn signature(op: Operation) -> String {
    format!("{}({})", op.name(), op.parameters().join(", "))
}
