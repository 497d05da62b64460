//! Output module for writing indicator results as CSV or JSON.
//!
//! # CSV row semantics
//!
//! - PMO rows before the first PMO value are dropped unless `all_rows` is set
//! - ROC output keeps every row
//! - Absent values inside the kept rows are written as empty cells
//!
//! Dates print as `YYYY-MM-DD` for midnight timestamps and
//! `YYYY-MM-DD HH:MM:SS` otherwise. JSON output is the serde form of the
//! result records, with absent values as `null`.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::{NaiveDateTime, Timelike};
use momentum_ta::indicators::{PmoResult, RocPoint};
use serde::Serialize;
use tracing::debug;

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Build a destination from an optional `-o` path.
    #[must_use]
    pub fn from_path(path: Option<&str>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` carrying the path if the file cannot be
    /// created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(BufWriter::new(io::stdout()))),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::Io {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// Format a bar timestamp for CSV output.
#[must_use]
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    if timestamp.num_seconds_from_midnight() == 0 && timestamp.nanosecond() == 0 {
        timestamp.format("%Y-%m-%d").to_string()
    } else {
        timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

fn cell<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(String::new, ToString::to_string)
}

/// Write PMO results as CSV with header `index,date,roc_ema,pmo,signal`.
///
/// Rows before the first PMO value are dropped unless `all_rows` is set.
///
/// # Errors
///
/// Returns `CliError::Io` if the destination cannot be opened, written or
/// flushed.
pub fn write_pmo_csv<T: Display>(
    results: &[PmoResult<T>],
    all_rows: bool,
    dest: &OutputDest,
) -> Result<()> {
    let mut writer = dest.writer()?;
    writeln!(writer, "index,date,roc_ema,pmo,signal")?;

    let start = if all_rows {
        0
    } else {
        results
            .iter()
            .position(|r| r.pmo.is_some())
            .unwrap_or(results.len())
    };
    debug!(rows = results.len() - start, skipped = start, "writing PMO rows");

    for r in &results[start..] {
        writeln!(
            writer,
            "{},{},{},{},{}",
            r.index,
            format_timestamp(&r.timestamp),
            cell(r.roc_ema.as_ref()),
            cell(r.pmo.as_ref()),
            cell(r.signal.as_ref()),
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write ROC points as CSV with header `index,date,roc`.
///
/// # Errors
///
/// Returns `CliError::Io` if the destination cannot be opened, written or
/// flushed.
pub fn write_roc_csv<T: Display>(points: &[RocPoint<T>], dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    writeln!(writer, "index,date,roc")?;

    for p in points {
        writeln!(
            writer,
            "{},{},{}",
            p.index,
            format_timestamp(&p.timestamp),
            cell(p.roc.as_ref()),
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write any serializable result set as pretty-printed JSON.
///
/// # Errors
///
/// Returns `CliError::Io` if the destination cannot be opened or written,
/// including serializer failures, which surface as I/O errors.
pub fn write_json<S: Serialize + ?Sized>(value: &S, dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    serde_json::to_writer_pretty(&mut writer, value).map_err(io::Error::from)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
