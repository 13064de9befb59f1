//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `url`: Print the URL produced by a named operation
//! - `operations`: List the available operations and their arguments
//! - `variant`: Show which deployment variant the root URL selects
//! - `check`: Run a conformance fixture
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod operations;
pub mod url;
pub mod variant;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use operations::OperationsCommand;
pub use url::UrlCommand;
pub use variant::VariantCommand;
