//! CSV parsing module for reading dated price bars.
//!
//! # Column Detection
//!
//! Columns are detected from header names (case-insensitive):
//! - `date`, `time`, `datetime`, `timestamp`, `dt` → bar timestamp (required)
//! - `close`, `price`, `adj close`, `adjusted close` → close prices (required)
//! - `open`, `high`, `low` → optional, default to the close
//! - `volume`, `vol` → optional, defaults to zero
//!
//! # Timestamps
//!
//! Accepted formats are `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`,
//! `YYYY-MM-DDTHH:MM:SS` and RFC 3339 (converted to UTC).
//!
//! Prices are parsed as `Decimal` so published PMO values are reproduced
//! exactly.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use momentum_ta::quote::Bar;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{CliError, Result};

pub(crate) const DATE_HEADERS: &[&str] = &["date", "time", "datetime", "timestamp", "dt"];
pub(crate) const CLOSE_HEADERS: &[&str] = &["close", "price", "adj close", "adjusted close"];
const VOLUME_HEADERS: &[&str] = &["volume", "vol"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Timestamp layouts [`parse_timestamp`] accepts, as shown to users.
pub(crate) const TIMESTAMP_FORMATS: &[&str] = &[
    "YYYY-MM-DD",
    "YYYY-MM-DD HH:MM:SS",
    "YYYY-MM-DDTHH:MM:SS",
    "RFC 3339",
];

/// Positions of the recognised columns in a CSV header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Timestamp column.
    pub date: usize,
    /// Close price column.
    pub close: usize,
    /// Open price column, if present.
    pub open: Option<usize>,
    /// High price column, if present.
    pub high: Option<usize>,
    /// Low price column, if present.
    pub low: Option<usize>,
    /// Volume column, if present.
    pub volume: Option<usize>,
}

impl ColumnMap {
    /// Locate columns from a header row.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Csv` on line 1 if the date or close
    /// column is missing.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |names: &[&str]| normalized.iter().position(|h| names.contains(&h.as_str()));

        let date = find(DATE_HEADERS).ok_or_else(|| CliError::Csv {
            message: "no date column found (expected 'date', 'time', 'datetime' or 'timestamp')"
                .to_string(),
            line: Some(1),
        })?;
        let close = find(CLOSE_HEADERS).ok_or_else(|| CliError::Csv {
            message: "no close price column found (expected 'close', 'price' or 'adj close')"
                .to_string(),
            line: Some(1),
        })?;

        Ok(Self {
            date,
            close,
            open: find(&["open"]),
            high: find(&["high"]),
            low: find(&["low"]),
            volume: find(VOLUME_HEADERS),
        })
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Parse a timestamp cell in any of the accepted formats.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse a numeric cell as `Decimal`, accepting scientific notation.
fn parse_value(value: &str, column: &str) -> std::result::Result<Decimal, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("empty {column} value"));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| format!("cannot parse '{trimmed}' as number in {column} column"))
}

fn cell<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn parse_row(record: &StringRecord, columns: &ColumnMap) -> std::result::Result<Bar<Decimal>, String> {
    let raw_date = cell(record, columns.date);
    let timestamp = parse_timestamp(raw_date)
        .ok_or_else(|| format!("cannot parse '{}' as a date", raw_date.trim()))?;

    let close = parse_value(cell(record, columns.close), "close")?;
    let optional = |idx: Option<usize>, name: &str, default: Decimal| {
        idx.map_or(Ok(default), |i| parse_value(cell(record, i), name))
    };

    Ok(Bar::new(
        timestamp,
        optional(columns.open, "open", close)?,
        optional(columns.high, "high", close)?,
        optional(columns.low, "low", close)?,
        close,
        optional(columns.volume, "volume", Decimal::ZERO)?,
    ))
}

/// Parse a CSV file into price bars.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read, or
/// `CliError::Csv` if the CSV is malformed.
pub fn parse_bars<P: AsRef<Path>>(path: P) -> Result<Vec<Bar<Decimal>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::Io {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    parse_bars_from_reader(BufReader::new(file))
}

/// Parse price bars from a reader.
///
/// Rows keep their file order; ordering by timestamp happens in the
/// indicator.
///
/// # Errors
///
/// Returns `CliError::Csv` with the offending line number.
pub fn parse_bars_from_reader<R: Read>(reader: R) -> Result<Vec<Bar<Decimal>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CliError::Csv {
            message: e.to_string(),
            line: Some(1),
        })?
        .clone();
    let columns = ColumnMap::from_headers(&headers)?;
    debug!(?columns, "detected CSV columns");

    let mut bars = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        // +2 for the header row and 0-indexing
        let line = row_idx + 2;
        let record = result.map_err(|e| CliError::Csv {
            message: e.to_string(),
            line: Some(line),
        })?;
        let bar = parse_row(&record, &columns).map_err(|message| CliError::Csv {
            message,
            line: Some(line),
        })?;
        bars.push(bar);
    }

    debug!(rows = bars.len(), "parsed price bars");
    Ok(bars)
}
