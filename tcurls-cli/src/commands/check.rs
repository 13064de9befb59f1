//! Command to run a conformance fixture.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tcurls::conformance::{self, ConformanceReport, Mismatch, Specification};

/// Output format for the conformance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One line per mismatch plus a summary
    Human,
    /// The full report as JSON
    Json,
}

/// Run a conformance fixture against the URL rules.
#[derive(Args)]
pub struct CheckCommand {
    /// Fixture file to run
    #[arg(value_name = "FIXTURE")]
    pub fixture: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.fixture.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.fixture.display()
            )));
        }

        let spec = Specification::load_file(&self.fixture)?;
        global.logger.info(&format!(
            "loaded {} test case(s) across {} deployment(s) from {}",
            spec.tests.len(),
            spec.root_urls.len(),
            self.fixture.display()
        ));
        if spec.tests.is_empty() {
            global.logger.warn("fixture contains no test cases");
        }

        let report = conformance::run(&spec)?;

        match self.format {
            ReportFormat::Human => print_human(&report),
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
                println!("{json}");
            }
        }

        if report.is_success() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} conformance mismatch(es)",
                report.mismatches.len()
            )))
        }
    }
}

fn print_human(report: &ConformanceReport) {
    for mismatch in &report.mismatches {
        println!("{}", describe(mismatch));
    }
    println!(
        "{} URL(s) checked, {} mismatch(es)",
        report.checked,
        report.mismatches.len()
    );
}

fn describe(mismatch: &Mismatch) -> String {
    format!(
        "FAIL {}({}) [{} {}]\n  expected: {}\n  actual:   {}",
        mismatch.function,
        mismatch.args.join(", "),
        mismatch.deployment,
        mismatch.root_url,
        mismatch.expected,
        mismatch.actual
    )
}
