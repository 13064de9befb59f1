//! Evaluation of a fixture against the providers.

use serde::Serialize;

use super::fixture::{Specification, TestCase};
use crate::error::{Error, Result};
use crate::operation::Operation;
use crate::provider::provider;

/// A generated URL that differed from the fixture's expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Operation name.
    pub function: String,
    /// Deployment key.
    pub deployment: String,
    /// Root URL the provider was built from.
    pub root_url: String,
    /// Arguments passed to the operation.
    pub args: Vec<String>,
    /// URL the fixture expects.
    pub expected: String,
    /// URL actually produced.
    pub actual: String,
}

/// Outcome of running a fixture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConformanceReport {
    /// Number of generated URLs compared.
    pub checked: usize,
    /// Every comparison that failed, in evaluation order.
    pub mismatches: Vec<Mismatch>,
}

impl ConformanceReport {
    /// Returns `true` if every generated URL matched.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs every test case of `spec`.
///
/// Each case is evaluated for every argument set, every deployment key and
/// every root URL under that key. A case without argument sets is invoked
/// once with no arguments.
///
/// # Errors
///
/// Fails on fixture defects rather than recording them as mismatches:
/// [`Error::UnsupportedOperation`] for an unknown function,
/// [`Error::ArgumentCount`] for an argument set of the wrong length, and
/// [`Error::MissingExpectation`] when a deployment key has no expected URL.
pub fn run(spec: &Specification) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::default();

    for case in &spec.tests {
        run_case(spec, case, &mut report)?;
    }

    log::debug!(
        "conformance run checked {} URL(s), {} mismatch(es)",
        report.checked,
        report.mismatches.len()
    );

    Ok(report)
}

fn run_case(spec: &Specification, case: &TestCase, report: &mut ConformanceReport) -> Result<()> {
    let operation: Operation = case.function.parse()?;
    let no_args = [Vec::new()];
    let arg_sets: &[Vec<String>] = if case.arg_sets.is_empty() {
        &no_args
    } else {
        &case.arg_sets
    };

    for (deployment, root_urls) in &spec.root_urls {
        let expected = case
            .expected
            .get(deployment)
            .ok_or_else(|| Error::MissingExpectation {
                function: case.function.clone(),
                deployment: deployment.clone(),
            })?;

        for root_url in root_urls {
            let target = provider(root_url);

            for args in arg_sets {
                let actual = operation.invoke(&target, args)?;
                report.checked += 1;

                if actual != *expected {
                    report.mismatches.push(Mismatch {
                        function: case.function.clone(),
                        deployment: deployment.clone(),
                        root_url: root_url.clone(),
                        args: args.clone(),
                        expected: expected.clone(),
                        actual,
                    });
                }
            }
        }
    }

    Ok(())
}
