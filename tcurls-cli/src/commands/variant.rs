//! Command to show the deployment variant selected by the root URL.

use crate::error::CliError;
use crate::utils::{build_provider, GlobalOptions};
use clap::Args;

/// Show whether the root URL selects the legacy or generic layout.
#[derive(Args)]
pub struct VariantCommand {}

impl VariantCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let provider = build_provider(global)?;
        println!("{} {}", provider.variant_name(), provider.root_url());
        Ok(())
    }
}
