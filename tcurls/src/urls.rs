//! One-shot URL functions taking the root URL as their first argument.
//!
//! Each function builds the provider for `root_url` and calls the matching
//! [`UrlProvider`] operation. Callers producing many URLs for the same
//! deployment should hold on to a [`provider`](crate::provider()) instead.
//!
//! ```
//! use tcurls::urls;
//!
//! assert_eq!(
//!     urls::api("https://tc.example.com", "queue", "v1", "task/123"),
//!     "https://tc.example.com/api/queue/v1/task/123"
//! );
//! assert_eq!(
//!     urls::schema("https://taskcluster.net", "queue", "v1/task.json"),
//!     "https://schemas.taskcluster.net/queue/v1/task.json"
//! );
//! ```

use crate::provider::{provider, UrlProvider};

/// See [`UrlProvider::api`].
#[must_use]
pub fn api(root_url: &str, service: &str, version: &str, path: &str) -> String {
    provider(root_url).api(service, version, path)
}

/// See [`UrlProvider::api_reference`].
#[must_use]
pub fn api_reference(root_url: &str, service: &str, version: &str) -> String {
    provider(root_url).api_reference(service, version)
}

/// See [`UrlProvider::docs`].
#[must_use]
pub fn docs(root_url: &str, path: &str) -> String {
    provider(root_url).docs(path)
}

/// See [`UrlProvider::exchange_reference`].
#[must_use]
pub fn exchange_reference(root_url: &str, service: &str, version: &str) -> String {
    provider(root_url).exchange_reference(service, version)
}

/// See [`UrlProvider::schema`].
#[must_use]
pub fn schema(root_url: &str, service: &str, schema_path: &str) -> String {
    provider(root_url).schema(service, schema_path)
}

/// See [`UrlProvider::api_reference_schema`].
#[must_use]
pub fn api_reference_schema(root_url: &str, version: &str) -> String {
    provider(root_url).api_reference_schema(version)
}

/// See [`UrlProvider::exchanges_reference_schema`].
#[must_use]
pub fn exchanges_reference_schema(root_url: &str, version: &str) -> String {
    provider(root_url).exchanges_reference_schema(version)
}

/// See [`UrlProvider::api_manifest_schema`].
#[must_use]
pub fn api_manifest_schema(root_url: &str, version: &str) -> String {
    provider(root_url).api_manifest_schema(version)
}

/// See [`UrlProvider::metadata_metaschema`].
#[must_use]
pub fn metadata_metaschema(root_url: &str) -> String {
    provider(root_url).metadata_metaschema()
}

/// See [`UrlProvider::ui`].
#[must_use]
pub fn ui(root_url: &str, path: &str) -> String {
    provider(root_url).ui(path)
}

/// See [`UrlProvider::api_manifest`].
#[must_use]
pub fn api_manifest(root_url: &str) -> String {
    provider(root_url).api_manifest()
}
