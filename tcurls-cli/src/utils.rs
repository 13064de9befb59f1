//! Utility functions for CLI operations.

use crate::error::CliError;
use tcurls::{provider, Logger, Provider};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Flags are folded into `logger` in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Root URL from `--root-url` or `TASKCLUSTER_ROOT_URL`.
    pub root_url: Option<String>,

    /// Logger resolved from the verbosity flags.
    pub logger: Logger,
}

/// Return the configured root URL, treating an empty value as unset.
pub fn require_root_url(global: &GlobalOptions) -> Result<&str, CliError> {
    match global.root_url.as_deref() {
        Some(root_url) if !root_url.is_empty() => Ok(root_url),
        _ => Err(CliError::NoRootUrl),
    }
}

/// Build the provider for the configured root URL.
pub fn build_provider(global: &GlobalOptions) -> Result<Provider, CliError> {
    let root_url = require_root_url(global)?;
    let selected = provider(root_url);

    global.logger.debug(&format!(
        "using {} provider rooted at {}",
        selected.variant_name(),
        selected.root_url()
    ));

    Ok(selected)
}
