//! CLI argument parsing module.
//!
//! The CLI follows the pattern: `momentum-ta <indicator> <input.csv> [params] [-o output]`
//!
//! # Examples
//!
//! ```bash
//! # PMO with default periods (35,20,10)
//! momentum-ta pmo prices.csv
//!
//! # PMO with custom periods, JSON to a file
//! momentum-ta pmo prices.csv 20,10,5 --format json -o pmo.json
//!
//! # Keep the warm-up rows in the output
//! momentum-ta pmo prices.csv --all-rows
//!
//! # Five-period rate of change with debug logging
//! momentum-ta -v roc prices.csv 5
//! ```

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::error::{CliError, Result};

/// momentum-ta: Price Momentum Oscillator from CSV price bars
#[derive(Parser, Debug)]
#[command(name = "momentum-ta")]
#[command(author, version, about = "Price Momentum Oscillator for CSV price data")]
#[command(long_about = "momentum-ta reads dated price bars from a CSV file and computes \
    the DecisionPoint Price Momentum Oscillator or a plain rate of change. Output is \
    written as CSV or JSON to a file or stdout.")]
pub struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The indicator to compute
    #[command(subcommand)]
    pub command: Command,
}

/// Output encoding.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Comma-separated values with a header row
    #[default]
    Csv,
    /// A JSON array of result records
    Json,
}

/// Available indicator commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Price Momentum Oscillator
    #[command(about = "Price Momentum Oscillator (PMO) with signal line")]
    Pmo {
        /// Input CSV file
        input: String,

        /// Parameters: time_period,smoothing_period,signal_period (e.g., 35,20,10)
        #[arg(default_value = "35,20,10")]
        params: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        /// Keep the warm-up rows that have no PMO value yet
        #[arg(long)]
        all_rows: bool,
    },

    /// Rate of Change
    #[command(about = "Rate of Change (ROC) in percent")]
    Roc {
        /// Input CSV file
        input: String,

        /// Number of bars to look back
        #[arg(default_value = "1")]
        lookback: usize,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the input file path from the command.
    #[must_use]
    pub fn input_path(&self) -> &str {
        match &self.command {
            Command::Pmo { input, .. } | Command::Roc { input, .. } => input,
        }
    }

    /// Get the output file path from the command, if specified.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Pmo { output, .. } | Command::Roc { output, .. } => output.as_deref(),
        }
    }

    /// Get the requested output format.
    #[must_use]
    pub fn format(&self) -> OutputFormat {
        match &self.command {
            Command::Pmo { format, .. } | Command::Roc { format, .. } => *format,
        }
    }

    /// Default log filter for the verbosity flag.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Parse PMO parameters from string "time,smoothing,signal".
///
/// Only the shape is checked here; period ranges are validated by the
/// indicator so the CLI and library report the same errors.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if there are not exactly three
/// comma-separated fields or a field is not an unsigned integer.
pub fn parse_pmo_params(params: &str) -> Result<(usize, usize, usize)> {
    let parts: Vec<&str> = params.split(',').collect();
    if parts.len() != 3 {
        return Err(CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: format!("PMO requires 3 parameters, got {}", parts.len()),
            suggestion: Some(
                "Use format: time_period,smoothing_period,signal_period (e.g., 35,20,10)"
                    .to_string(),
            ),
        });
    }

    let parse = |name: &str, raw: &str, example: usize| {
        raw.trim()
            .parse::<usize>()
            .map_err(|_| CliError::InvalidArgument {
                argument: name.to_string(),
                reason: format!("cannot parse '{raw}' as integer"),
                suggestion: Some(format!("Use a positive integer like {example}")),
            })
    };

    let time_period = parse("time_period", parts[0], 35)?;
    let smoothing_period = parse("smoothing_period", parts[1], 20)?;
    let signal_period = parse("signal_period", parts[2], 10)?;

    Ok((time_period, smoothing_period, signal_period))
}
