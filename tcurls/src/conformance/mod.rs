//! Cross-language conformance fixtures.
//!
//! Every Taskcluster client validates its URL rules against the same YAML
//! fixture. The fixture lists, per deployment key, root URLs that must all
//! behave identically, and a set of test cases naming an operation, its
//! argument sets, and the expected URL per deployment key:
//!
//! ```yaml
//! rootURLs:
//!   legacy:
//!     - https://taskcluster.net
//!   generic:
//!     - https://tc.example.com
//! tests:
//!   - function: docs
//!     argSets:
//!       - [manual]
//!       - [/manual]
//!     expected:
//!       legacy: https://docs.taskcluster.net/manual
//!       generic: https://tc.example.com/docs/manual
//! ```
//!
//! # Examples
//!
//! ```
//! use tcurls::conformance::{self, Specification};
//!
//! let yaml = r"
//! rootURLs:
//!   legacy:
//!     - https://taskcluster.net/
//! tests:
//!   - function: apiManifest
//!     argSets:
//!       - []
//!     expected:
//!       legacy: https://references.taskcluster.net/manifest.json
//! ";
//!
//! let spec = Specification::from_yaml(yaml).unwrap();
//!
//! let report = conformance::run(&spec).unwrap();
//! assert!(report.is_success());
//! assert_eq!(report.checked, 1);
//! ```

mod fixture;
mod runner;

pub use fixture::{Specification, TestCase};
pub use runner::{run, ConformanceReport, Mismatch};
