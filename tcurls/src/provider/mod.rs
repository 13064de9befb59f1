//! URL providers for the two deployment variants.
//!
//! A deployment is addressed by its root URL. The original deployment at
//! [`LEGACY_ROOT_URL`] hosts each service on its own subdomain; every other
//! deployment serves everything under path prefixes of a single root.
//!
//! # Examples
//!
//! ```
//! use tcurls::{provider, UrlProvider};
//!
//! let legacy = provider("https://taskcluster.net/");
//! assert!(legacy.is_legacy());
//! assert_eq!(legacy.ui("tasks/123"), "https://tools.taskcluster.net/tasks/123");
//!
//! let generic = provider("https://tc.example.com");
//! assert!(!generic.is_legacy());
//! assert_eq!(
//!     generic.api_manifest(),
//!     "https://tc.example.com/references/manifest.json"
//! );
//! ```

mod generic;
mod legacy;

use crate::clean::clean_url;

pub use generic::GenericProvider;
pub use legacy::LegacyProvider;

/// Root URL of the legacy fixed-domain deployment.
pub const LEGACY_ROOT_URL: &str = "https://taskcluster.net";

/// Conventional root URL for client test suites.
///
/// It selects the generic variant and never resolves to a live deployment.
pub const TEST_ROOT_URL: &str = "https://tc-tests.example.com";

/// The URL-construction operations every deployment variant supports.
///
/// All operations are pure: they only concatenate the provider's base
/// addresses with their arguments. Leading slashes are stripped from path
/// arguments; nothing else is validated or escaped.
///
/// The four schema shortcuts are provided in terms of [`UrlProvider::schema`].
pub trait UrlProvider {
    /// URL of an API endpoint of `service`.
    fn api(&self, service: &str, version: &str, path: &str) -> String;

    /// URL of the API reference document (`api.json`) of `service`.
    fn api_reference(&self, service: &str, version: &str) -> String;

    /// URL of a documentation page.
    fn docs(&self, path: &str) -> String;

    /// URL of the exchange reference document (`exchanges.json`) of `service`.
    fn exchange_reference(&self, service: &str, version: &str) -> String;

    /// URL of a schema file in the namespace of `service`.
    fn schema(&self, service: &str, schema_path: &str) -> String;

    /// URL of a UI page.
    fn ui(&self, path: &str) -> String;

    /// URL of the deployment-wide API manifest.
    fn api_manifest(&self) -> String;

    /// URL of the schema for API reference documents.
    fn api_reference_schema(&self, version: &str) -> String {
        self.schema("common", &format!("api-reference-{version}.json"))
    }

    /// URL of the schema for exchange reference documents.
    fn exchanges_reference_schema(&self, version: &str) -> String {
        self.schema("common", &format!("exchanges-reference-{version}.json"))
    }

    /// URL of the schema for the API manifest.
    fn api_manifest_schema(&self, version: &str) -> String {
        self.schema("common", &format!("manifest-{version}.json"))
    }

    /// URL of the metadata metaschema.
    fn metadata_metaschema(&self) -> String {
        self.schema("common", "metadata-metaschema.json")
    }
}

/// A provider for one of the two deployment variants.
///
/// The variant is chosen once by [`provider`] and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provider {
    /// The legacy `taskcluster.net` deployment.
    Legacy(LegacyProvider),
    /// Any other deployment.
    Generic(GenericProvider),
}

impl Provider {
    /// Returns `true` for the legacy variant.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy(_))
    }

    /// Returns the root URL this provider builds on, without trailing slashes.
    #[must_use]
    pub fn root_url(&self) -> &str {
        match self {
            Self::Legacy(_) => LEGACY_ROOT_URL,
            Self::Generic(generic) => generic.root_url(),
        }
    }

    /// Short name of the variant: `legacy` or `generic`.
    #[must_use]
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Legacy(_) => "legacy",
            Self::Generic(_) => "generic",
        }
    }
}

impl UrlProvider for Provider {
    fn api(&self, service: &str, version: &str, path: &str) -> String {
        match self {
            Self::Legacy(p) => p.api(service, version, path),
            Self::Generic(p) => p.api(service, version, path),
        }
    }

    fn api_reference(&self, service: &str, version: &str) -> String {
        match self {
            Self::Legacy(p) => p.api_reference(service, version),
            Self::Generic(p) => p.api_reference(service, version),
        }
    }

    fn docs(&self, path: &str) -> String {
        match self {
            Self::Legacy(p) => p.docs(path),
            Self::Generic(p) => p.docs(path),
        }
    }

    fn exchange_reference(&self, service: &str, version: &str) -> String {
        match self {
            Self::Legacy(p) => p.exchange_reference(service, version),
            Self::Generic(p) => p.exchange_reference(service, version),
        }
    }

    fn schema(&self, service: &str, schema_path: &str) -> String {
        match self {
            Self::Legacy(p) => p.schema(service, schema_path),
            Self::Generic(p) => p.schema(service, schema_path),
        }
    }

    fn ui(&self, path: &str) -> String {
        match self {
            Self::Legacy(p) => p.ui(path),
            Self::Generic(p) => p.ui(path),
        }
    }

    fn api_manifest(&self) -> String {
        match self {
            Self::Legacy(p) => p.api_manifest(),
            Self::Generic(p) => p.api_manifest(),
        }
    }
}

/// Returns the provider for `root_url`.
///
/// The legacy variant is selected when `root_url`, with trailing slashes
/// removed, equals [`LEGACY_ROOT_URL`]; everything else, malformed input
/// included, gets a [`GenericProvider`]. This never fails.
///
/// # Examples
///
/// ```
/// use tcurls::{provider, UrlProvider};
///
/// let p = provider("https://tc.example.com");
/// assert_eq!(
///     p.api("queue", "v1", "/task/123"),
///     "https://tc.example.com/api/queue/v1/task/123"
/// );
/// ```
#[must_use]
pub fn provider(root_url: &str) -> Provider {
    if clean_url(root_url) == LEGACY_ROOT_URL {
        log::debug!("using legacy provider for root URL {root_url:?}");
        Provider::Legacy(LegacyProvider)
    } else {
        log::debug!("using generic provider for root URL {root_url:?}");
        Provider::Generic(GenericProvider::new(root_url))
    }
}

impl From<&str> for Provider {
    fn from(root_url: &str) -> Self {
        provider(root_url)
    }
}
