//! Progress reporting for the `tcurls` command line tool.
//!
//! URL generation itself never prints anything; provider selection and
//! conformance runs emit `log` records. The CLI reports what it is doing
//! (which provider a root URL selected, how many fixture cases were loaded)
//! through the stderr [`Logger`] built by [`init_logger`].

use std::env;

/// Environment variable selecting the log mode when no flag is given.
pub const LOG_MODE_ENV: &str = "TCURLS_LOG_MODE";

/// How much progress output `tcurls` writes to stderr.
///
/// ```
/// use tcurls::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!(LogLevel::from_mode("Verbose"), Some(LogLevel::Verbose));
/// assert_eq!(LogLevel::from_mode("loud"), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but the command's own output and errors.
    Quiet,
    /// Warnings about suspicious input, such as an empty fixture.
    #[default]
    Normal,
    /// Provider selection and fixture loading details as well.
    Verbose,
}

impl LogLevel {
    /// Maps a `TCURLS_LOG_MODE` value to a level, ignoring case.
    #[must_use]
    pub fn from_mode(mode: &str) -> Option<Self> {
        match mode.to_ascii_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            _ => None,
        }
    }
}

/// Writes `tcurls` progress messages to stderr.
///
/// Warnings show at `Normal`; info and debug lines only at `Verbose`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger printing messages up to `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Returns `true` if messages needing `required` are printed.
    #[must_use]
    pub fn enabled(&self, required: LogLevel) -> bool {
        self.level >= required
    }

    /// Reports suspicious input that does not stop the command.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "warning", message);
    }

    /// Reports what a command loaded or is about to do.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "info", message);
    }

    /// Reports resolved configuration, such as the selected provider.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "debug", message);
    }

    fn emit(&self, required: LogLevel, tag: &str, message: &str) {
        if self.enabled(required) {
            eprintln!("{tag}: {message}");
        }
    }
}

/// Builds the CLI logger.
///
/// `--verbose` wins over `--quiet`; without either flag a valid
/// `TCURLS_LOG_MODE` decides, and anything else means `Normal`.
///
/// ```
/// use tcurls::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| LogLevel::from_mode(&mode))
            .unwrap_or_default()
    };

    Logger::new(level)
}
