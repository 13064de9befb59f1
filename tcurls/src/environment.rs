//! Root URL configuration from the environment.
//!
//! Taskcluster clients locate their deployment through the
//! `TASKCLUSTER_ROOT_URL` environment variable.

use std::env;

use crate::error::{Error, Result};
use crate::provider::{provider, Provider};

/// Environment variable holding the deployment root URL.
pub const ROOT_URL_ENV: &str = "TASKCLUSTER_ROOT_URL";

/// Reads the root URL from `TASKCLUSTER_ROOT_URL`.
///
/// The value is returned as-is; trailing slashes are handled by the providers.
///
/// # Errors
///
/// Returns [`Error::MissingRootUrl`] if the variable is unset, empty, or not
/// valid Unicode.
///
/// # Examples
///
/// ```no_run
/// let root_url = tcurls::root_url_from_env().unwrap();
/// println!("deployment: {root_url}");
/// ```
pub fn root_url_from_env() -> Result<String> {
    non_empty(env::var(ROOT_URL_ENV).ok())
}

/// Builds the provider for the deployment named by `TASKCLUSTER_ROOT_URL`.
///
/// # Errors
///
/// Returns [`Error::MissingRootUrl`] under the same conditions as
/// [`root_url_from_env`].
pub fn provider_from_env() -> Result<Provider> {
    root_url_from_env().map(|root_url| provider(&root_url))
}

fn non_empty(value: Option<String>) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingRootUrl {
            variable: ROOT_URL_ENV,
        })
}
