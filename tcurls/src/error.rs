//! Error types for the tcurls library.
//!
//! URL construction itself never fails. Errors only arise around it: when an
//! operation is looked up by name, when a root URL is read from the
//! environment, and when a conformance fixture is loaded or evaluated.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tcurls error.
///
/// # Examples
///
/// ```
/// use tcurls::{Operation, Result};
///
/// fn lookup(name: &str) -> Result<Operation> {
///     name.parse()
/// }
///
/// assert!(lookup("apiManifest").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tcurls library.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation name did not match any URL-construction operation.
    #[error("unsupported operation '{name}'")]
    UnsupportedOperation {
        /// The unrecognized name.
        name: String,
    },

    /// An operation was invoked with the wrong number of arguments.
    #[error("operation '{operation}' takes {expected} argument(s), got {found}")]
    ArgumentCount {
        /// Name of the operation.
        operation: &'static str,
        /// Number of arguments the operation takes.
        expected: usize,
        /// Number of arguments supplied.
        found: usize,
    },

    /// A conformance test case has no expected value for a deployment.
    #[error("test case for '{function}' has no expected value for deployment '{deployment}'")]
    MissingExpectation {
        /// The function under test.
        function: String,
        /// The deployment key lacking an expectation.
        deployment: String,
    },

    /// No root URL was configured.
    #[error("root URL not configured: set {variable}")]
    MissingRootUrl {
        /// The environment variable that was consulted.
        variable: &'static str,
    },

    /// A file could not be read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be read.
        path: PathBuf,
        /// The reason the read failed.
        reason: String,
    },

    /// A conformance fixture is not valid YAML for the fixture format.
    #[error("fixture error: {0}")]
    Fixture(#[from] serde_yaml::Error),
}

impl Error {
    /// Check if the error was caused by bad operation input (name or arity).
    ///
    /// # Examples
    ///
    /// ```
    /// use tcurls::Error;
    ///
    /// let err = Error::UnsupportedOperation { name: "bogus".to_string() };
    /// assert!(err.is_invalid_invocation());
    /// ```
    #[must_use]
    pub fn is_invalid_invocation(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOperation { .. } | Self::ArgumentCount { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_operation_error() {
        let err = Error::UnsupportedOperation {
            name: "apiRefrence".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("unsupported operation"));
        assert!(display.contains("apiRefrence"));
    }

    #[test]
    fn test_argument_count_error() {
        let err = Error::ArgumentCount {
            operation: "api",
            expected: 3,
            found: 1,
        };
        assert_eq!(format!("{err}"), "operation 'api' takes 3 argument(s), got 1");
        assert!(err.is_invalid_invocation());
    }

    #[test]
    fn test_missing_expectation_error() {
        let err = Error::MissingExpectation {
            function: "docs".to_string(),
            deployment: "generic".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("docs"));
        assert!(display.contains("generic"));
        assert!(!err.is_invalid_invocation());
    }

    #[test]
    fn test_missing_root_url_error() {
        let err = Error::MissingRootUrl {
            variable: "TASKCLUSTER_ROOT_URL",
        };
        assert!(format!("{err}").contains("TASKCLUSTER_ROOT_URL"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/missing/spec.yml"),
            reason: "not found".to_string(),
        };
        let display = format!("{err}").replace(std::path::MAIN_SEPARATOR, "/");
        assert!(display.contains("/missing/spec.yml"));
        assert!(display.contains("not found"));
    }

    #[test]
    fn test_fixture_error_conversion() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("{").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").starts_with("fixture error"));
    }
}
