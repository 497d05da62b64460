//! Price bars and history preparation.
//!
//! Indicators work on a clean history: ascending timestamps, no duplicates,
//! and a 1-based ordinal `index` on every bar. [`prepare_history`] produces
//! that view from bars in any order without touching the caller's slice.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// A single OHLCV price bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar<T> {
    /// Bar open time.
    pub timestamp: NaiveDateTime,
    /// Opening price.
    pub open: T,
    /// Highest price.
    pub high: T,
    /// Lowest price.
    pub low: T,
    /// Closing price.
    pub close: T,
    /// Traded volume.
    pub volume: T,
}

impl<T: SeriesElement> Bar<T> {
    /// Creates a bar from its OHLCV fields.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, open: T, high: T, low: T, close: T, volume: T) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Creates a bar when only the close is known.
    ///
    /// Open, high and low are set to the close and volume to zero.
    #[must_use]
    pub fn from_close(timestamp: NaiveDateTime, close: T) -> Self {
        Self::new(timestamp, close, close, close, close, T::zero())
    }
}

/// A bar with its 1-based position in the prepared history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexedBar<T> {
    /// 1-based ordinal position.
    pub index: usize,
    /// The underlying bar.
    pub bar: Bar<T>,
}

/// Orders bars by timestamp and assigns 1-based indices.
///
/// The sort is stable, so already-ordered input keeps its order exactly.
///
/// # Errors
///
/// Returns `Error::DuplicateTimestamp` if two bars share a timestamp.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use momentum_ta::quote::{prepare_history, Bar};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let bars = vec![Bar::from_close(day(2), 11.0_f64), Bar::from_close(day(1), 10.0)];
///
/// let history = prepare_history(&bars).unwrap();
/// assert_eq!(history[0].index, 1);
/// assert_eq!(history[0].bar.close, 10.0);
/// ```
pub fn prepare_history<T: SeriesElement>(bars: &[Bar<T>]) -> Result<Vec<IndexedBar<T>>> {
    let mut ordered: Vec<Bar<T>> = bars.to_vec();
    ordered.sort_by_key(|bar| bar.timestamp);

    if let Some(pair) = ordered
        .windows(2)
        .find(|pair| pair[0].timestamp == pair[1].timestamp)
    {
        return Err(Error::DuplicateTimestamp {
            timestamp: pair[1].timestamp,
        });
    }

    trace!(bars = ordered.len(), "prepared price history");

    Ok(ordered
        .into_iter()
        .enumerate()
        .map(|(i, bar)| IndexedBar { index: i + 1, bar })
        .collect())
}
