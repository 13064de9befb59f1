//! Name-based dispatch over the URL-construction operations.
//!
//! Conformance fixtures and the command line refer to operations by their
//! canonical camelCase names and pass arguments positionally. This module
//! maps those names onto [`UrlProvider`] calls.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::provider::UrlProvider;

/// One of the eleven URL-construction operations.
///
/// # Examples
///
/// ```
/// use tcurls::{provider, Operation};
///
/// let op: Operation = "apiReference".parse().unwrap();
/// assert_eq!(op.arity(), 2);
///
/// let url = op.invoke(&provider("https://tc.example.com"), &["auth", "v1"]).unwrap();
/// assert_eq!(url, "https://tc.example.com/references/auth/v1/api.json");
///
/// assert!("nope".parse::<Operation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`UrlProvider::api`]
    Api,
    /// [`UrlProvider::api_reference`]
    ApiReference,
    /// [`UrlProvider::docs`]
    Docs,
    /// [`UrlProvider::exchange_reference`]
    ExchangeReference,
    /// [`UrlProvider::schema`]
    Schema,
    /// [`UrlProvider::api_reference_schema`]
    ApiReferenceSchema,
    /// [`UrlProvider::exchanges_reference_schema`]
    ExchangesReferenceSchema,
    /// [`UrlProvider::api_manifest_schema`]
    ApiManifestSchema,
    /// [`UrlProvider::metadata_metaschema`]
    MetadataMetaschema,
    /// [`UrlProvider::ui`]
    Ui,
    /// [`UrlProvider::api_manifest`]
    ApiManifest,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Api,
        Self::ApiReference,
        Self::Docs,
        Self::ExchangeReference,
        Self::Schema,
        Self::ApiReferenceSchema,
        Self::ExchangesReferenceSchema,
        Self::ApiManifestSchema,
        Self::MetadataMetaschema,
        Self::Ui,
        Self::ApiManifest,
    ];

    /// The canonical name shared by every client implementation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::ApiReference => "apiReference",
            Self::Docs => "docs",
            Self::ExchangeReference => "exchangeReference",
            Self::Schema => "schema",
            Self::ApiReferenceSchema => "apiReferenceSchema",
            Self::ExchangesReferenceSchema => "exchangesReferenceSchema",
            Self::ApiManifestSchema => "apiManifestSchema",
            Self::MetadataMetaschema => "metadataMetaschema",
            Self::Ui => "ui",
            Self::ApiManifest => "apiManifest",
        }
    }

    /// Names of the positional parameters, in order.
    #[must_use]
    pub const fn parameters(self) -> &'static [&'static str] {
        match self {
            Self::Api => &["service", "version", "path"],
            Self::ApiReference | Self::ExchangeReference => &["service", "version"],
            Self::Docs | Self::Ui => &["path"],
            Self::Schema => &["service", "schemaPath"],
            Self::ApiReferenceSchema | Self::ExchangesReferenceSchema | Self::ApiManifestSchema => {
                &["version"]
            }
            Self::MetadataMetaschema | Self::ApiManifest => &[],
        }
    }

    /// Number of positional arguments the operation takes.
    #[must_use]
    pub const fn arity(self) -> usize {
        self.parameters().len()
    }

    /// Invokes the operation on `provider` with positional `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentCount`] if `args` does not match the
    /// operation's arity.
    pub fn invoke<P, S>(self, provider: &P, args: &[S]) -> Result<String>
    where
        P: UrlProvider + ?Sized,
        S: AsRef<str>,
    {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        let url = match (self, args.as_slice()) {
            (Self::Api, [service, version, path]) => provider.api(service, version, path),
            (Self::ApiReference, [service, version]) => provider.api_reference(service, version),
            (Self::Docs, [path]) => provider.docs(path),
            (Self::ExchangeReference, [service, version]) => {
                provider.exchange_reference(service, version)
            }
            (Self::Schema, [service, schema_path]) => provider.schema(service, schema_path),
            (Self::ApiReferenceSchema, [version]) => provider.api_reference_schema(version),
            (Self::ExchangesReferenceSchema, [version]) => {
                provider.exchanges_reference_schema(version)
            }
            (Self::ApiManifestSchema, [version]) => provider.api_manifest_schema(version),
            (Self::MetadataMetaschema, []) => provider.metadata_metaschema(),
            (Self::Ui, [path]) => provider.ui(path),
            (Self::ApiManifest, []) => provider.api_manifest(),
            _ => {
                return Err(Error::ArgumentCount {
                    operation: self.name(),
                    expected: self.arity(),
                    found: args.len(),
                })
            }
        };

        Ok(url)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnsupportedOperation { name: s.to_string() })
    }
}
