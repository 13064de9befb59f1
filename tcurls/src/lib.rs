#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tcurls
//!
//! A library for building canonical Taskcluster URLs.
//!
//! Every Taskcluster client, whatever its language, must produce the same URL
//! for the same inputs. This crate implements those rules for both the legacy
//! `https://taskcluster.net` deployment and arbitrary self-hosted deployments
//! addressed by a root URL.
//!
//! ## Core Types
//!
//! - [`UrlProvider`]: The eleven URL-construction operations
//! - [`Provider`], [`LegacyProvider`] and [`GenericProvider`]: The two deployment variants
//! - [`provider`]: Selects the variant for a root URL
//! - [`Operation`]: Name-based dispatch over the operations
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Progress reporting for the CLI
//!
//! ## Examples
//!
//! ```
//! use tcurls::{provider, UrlProvider};
//!
//! let legacy = provider("https://taskcluster.net");
//! assert_eq!(
//!     legacy.api("queue", "v1", "task/123"),
//!     "https://queue.taskcluster.net/v1/task/123"
//! );
//!
//! let generic = provider("https://tc.example.com/");
//! assert_eq!(generic.ui("tasks/123"), "https://tc.example.com/tasks/123");
//! ```

pub mod clean;
pub mod conformance;
pub mod environment;
pub mod error;
pub mod logging;
pub mod operation;
pub mod provider;
pub mod urls;

// Re-export key types at crate root for convenience
pub use clean::{clean_path, clean_url};
pub use conformance::{ConformanceReport, Mismatch, Specification, TestCase};
pub use environment::{provider_from_env, root_url_from_env, ROOT_URL_ENV};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operation::Operation;
pub use provider::{
    provider, GenericProvider, LegacyProvider, Provider, UrlProvider, LEGACY_ROOT_URL,
    TEST_ROOT_URL,
};
