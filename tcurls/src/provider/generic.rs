//! Provider for deployments addressed by an arbitrary root URL.

use super::UrlProvider;
use crate::clean::{clean_path, clean_url};

/// Builds URLs under a single deployment root URL.
///
/// Every resource family sits under a fixed path prefix of the root
/// (`api/`, `references/`, `docs/`, `schemas/`), except UI pages, which
/// are served directly from the root.
///
/// # Examples
///
/// ```
/// use tcurls::{GenericProvider, UrlProvider};
///
/// let p = GenericProvider::new("https://tc.example.com/");
/// assert_eq!(p.root_url(), "https://tc.example.com");
/// assert_eq!(
///     p.schema("queue", "v1/task.json"),
///     "https://tc.example.com/schemas/queue/v1/task.json"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericProvider {
    root_url: String,
}

impl GenericProvider {
    /// Creates a provider for `root_url`, dropping any trailing slashes.
    ///
    /// No other validation happens; a malformed root yields malformed URLs.
    #[must_use]
    pub fn new(root_url: impl AsRef<str>) -> Self {
        Self {
            root_url: clean_url(root_url.as_ref()).to_string(),
        }
    }

    /// Returns the stored root URL.
    #[must_use]
    pub fn root_url(&self) -> &str {
        &self.root_url
    }
}

impl UrlProvider for GenericProvider {
    fn api(&self, service: &str, version: &str, path: &str) -> String {
        format!(
            "{}/api/{service}/{version}/{}",
            self.root_url,
            clean_path(path)
        )
    }

    fn api_reference(&self, service: &str, version: &str) -> String {
        format!("{}/references/{service}/{version}/api.json", self.root_url)
    }

    fn docs(&self, path: &str) -> String {
        format!("{}/docs/{}", self.root_url, clean_path(path))
    }

    fn exchange_reference(&self, service: &str, version: &str) -> String {
        format!(
            "{}/references/{service}/{version}/exchanges.json",
            self.root_url
        )
    }

    fn schema(&self, service: &str, schema_path: &str) -> String {
        format!(
            "{}/schemas/{service}/{}",
            self.root_url,
            clean_path(schema_path)
        )
    }

    fn ui(&self, path: &str) -> String {
        format!("{}/{}", self.root_url, clean_path(path))
    }

    fn api_manifest(&self) -> String {
        format!("{}/references/manifest.json", self.root_url)
    }
}
