//! CLI error types.
//!
//! [`CliError`] is what a command returns. Its `Display` says what failed;
//! [`CliError::hint`] says what to change in the input file or the command
//! line, and `main` prints it on its own `hint:` line.

use std::io;

use momentum_ta::Error as IndicatorFailure;
use thiserror::Error;

use crate::csv_parser::{CLOSE_HEADERS, DATE_HEADERS, TIMESTAMP_FORMATS};

/// Everything that can stop a `momentum-ta` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input or writing the output failed.
    #[error(
        "I/O error{}: {source}",
        .path.as_deref().map(|p| format!(" on '{p}'")).unwrap_or_default()
    )]
    Io {
        /// The underlying I/O error.
        source: io::Error,
        /// File involved, if known.
        path: Option<String>,
    },

    /// The input CSV could not be turned into price bars.
    #[error(
        "CSV parse error{}: {message}",
        .line.map(|l| format!(" on line {l}")).unwrap_or_default()
    )]
    Csv {
        /// What was wrong with the record.
        message: String,
        /// 1-based line number; line 1 is the header row.
        line: Option<usize>,
    },

    /// The indicator rejected the parsed history or the periods.
    #[error("indicator failed: {source}")]
    Indicator {
        /// The library error.
        #[from]
        source: IndicatorFailure,
    },

    /// A command-line value could not be used.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the argument.
        argument: String,
        /// Why it was rejected.
        reason: String,
        /// Example of an accepted value.
        suggestion: Option<String>,
    },
}

impl CliError {
    /// Returns a remedy for the failure, if one is known.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Io { path: Some(p), .. } => Some(format!(
                "check that '{p}' exists and that you have permission to use it"
            )),
            Self::Io { path: None, .. } => None,
            Self::Csv { line: Some(1), .. } => Some(format!(
                "the header row must name a date column ({}) and a close column ({})",
                DATE_HEADERS.join(", "),
                CLOSE_HEADERS.join(", ")
            )),
            Self::Csv { .. } => Some(format!(
                "dates may be written as {}; prices must be decimal numbers",
                TIMESTAMP_FORMATS.join(", ")
            )),
            Self::Indicator { source } => indicator_hint(source),
            Self::InvalidArgument { suggestion, .. } => suggestion.clone(),
        }
    }
}

fn indicator_hint(source: &IndicatorFailure) -> Option<String> {
    match source {
        IndicatorFailure::InsufficientHistory {
            required,
            recommended,
            ..
        } => Some(format!(
            "supply at least {required} bars ({recommended} for converged values) \
             or pass shorter periods with --params"
        )),
        IndicatorFailure::InvalidParameter {
            parameter: "lookback",
            ..
        } => Some("--lookback must be at least 1".to_string()),
        IndicatorFailure::InvalidParameter { .. } => Some(
            "--params takes time_period >= 2, smoothing_period >= 1 and signal_period >= 1, \
             for example 35,20,10"
                .to_string(),
        ),
        IndicatorFailure::DuplicateTimestamp { timestamp } => Some(format!(
            "remove or merge the repeated rows dated {timestamp}"
        )),
        IndicatorFailure::ArithmeticOverflow { .. } => Some(
            "check the close column for prices at or near zero next to much larger ones"
                .to_string(),
        ),
        IndicatorFailure::NumericConversion { .. } => None,
    }
}

impl From<io::Error> for CliError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, path: None }
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        let line = err
            .position()
            .and_then(|p| usize::try_from(p.line()).ok());
        Self::Csv {
            message: err.to_string(),
            line,
        }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
