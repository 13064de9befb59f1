//! Fixture schema and loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A parsed conformance fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Specification {
    /// Root URLs per deployment key; every URL under a key must behave alike.
    #[serde(rename = "rootURLs")]
    pub root_urls: BTreeMap<String, Vec<String>>,

    /// Test cases, in fixture order.
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// A single conformance test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TestCase {
    /// Canonical name of the operation under test.
    pub function: String,

    /// Expected URL per deployment key.
    #[serde(default)]
    pub expected: BTreeMap<String, String>,

    /// Positional argument lists, each expected to produce the same URL.
    #[serde(rename = "argSets", default)]
    pub arg_sets: Vec<Vec<String>>,
}

impl Specification {
    /// Parses a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fixture`] if the text is not a valid fixture.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Loads and parses a fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the file cannot be read and
    /// [`Error::Fixture`] if its contents are not a valid fixture.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read fixture file: {e}"),
        })?;

        Self::from_yaml(&contents)
    }
}
