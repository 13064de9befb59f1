//! Provider for the legacy `taskcluster.net` deployment.

use super::UrlProvider;
use crate::clean::clean_path;

/// Builds URLs for the legacy deployment.
///
/// Each service and each document family lives on its own subdomain of
/// `taskcluster.net`, so this provider carries no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegacyProvider;

impl UrlProvider for LegacyProvider {
    fn api(&self, service: &str, version: &str, path: &str) -> String {
        format!(
            "https://{service}.taskcluster.net/{version}/{}",
            clean_path(path)
        )
    }

    fn api_reference(&self, service: &str, version: &str) -> String {
        format!("https://references.taskcluster.net/{service}/{version}/api.json")
    }

    fn docs(&self, path: &str) -> String {
        format!("https://docs.taskcluster.net/{}", clean_path(path))
    }

    fn exchange_reference(&self, service: &str, version: &str) -> String {
        format!("https://references.taskcluster.net/{service}/{version}/exchanges.json")
    }

    fn schema(&self, service: &str, schema_path: &str) -> String {
        format!(
            "https://schemas.taskcluster.net/{service}/{}",
            clean_path(schema_path)
        )
    }

    // UI pages live on the tools subdomain, unlike the generic layout.
    fn ui(&self, path: &str) -> String {
        format!("https://tools.taskcluster.net/{}", clean_path(path))
    }

    fn api_manifest(&self) -> String {
        "https://references.taskcluster.net/manifest.json".to_string()
    }
}
