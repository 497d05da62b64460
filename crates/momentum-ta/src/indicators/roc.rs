//! Rate of Change (ROC) over a price history.
//!
//! # Formula
//!
//! ```text
//! ROC[i] = 100 * (close[i] - close[i - n]) / close[i - n]
//! ```
//!
//! # Lookback
//!
//! The first `n` points have no ROC value. A zero back close also yields no
//! value instead of an infinity. A ratio too large for the element type, as
//! from a near-zero back close in `Decimal`, is an error.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::quote::{prepare_history, Bar};
use crate::traits::{checked, validate_min_history, validate_period, SeriesElement};

/// One rate-of-change observation, aligned with the bar it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint<T> {
    /// 1-based position in the prepared history.
    pub index: usize,
    /// Timestamp of the bar.
    pub timestamp: NaiveDateTime,
    /// Percentage change versus `lookback` bars earlier.
    pub roc: Option<T>,
}

/// Computes the lookback period for ROC.
#[inline]
#[must_use]
pub const fn roc_lookback(lookback: usize) -> usize {
    lookback
}

/// Returns the minimum input length required for ROC calculation.
#[inline]
#[must_use]
pub const fn roc_min_len(lookback: usize) -> usize {
    lookback.saturating_add(1)
}

/// Computes ROC (Rate of Change) for every bar.
///
/// Bars are ordered by timestamp first, so the output is in ascending
/// timestamp order with one point per input bar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use momentum_ta::indicators::roc;
/// use momentum_ta::quote::Bar;
/// use rust_decimal_macros::dec;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let bars = vec![
///     Bar::from_close(day(1), dec!(100)),
///     Bar::from_close(day(2), dec!(102)),
///     Bar::from_close(day(3), dec!(104)),
/// ];
///
/// let points = roc(&bars, 2).unwrap();
/// assert_eq!(points[1].roc, None);
/// // ((104 - 100) / 100) * 100 = 4
/// assert_eq!(points[2].roc, Some(dec!(4)));
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `lookback` is zero (`Error::InvalidParameter`)
/// - There are fewer than `lookback + 1` bars (`Error::InsufficientHistory`)
/// - Two bars share a timestamp (`Error::DuplicateTimestamp`)
/// - A ratio does not fit `T` (`Error::ArithmeticOverflow`)
pub fn roc<T: SeriesElement>(bars: &[Bar<T>], lookback: usize) -> Result<Vec<RocPoint<T>>> {
    validate_period("lookback", lookback, 1, "must be greater than 0")?;
    let min_len = roc_min_len(lookback);
    validate_min_history("roc", bars.len(), min_len, min_len)?;

    let history = prepare_history(bars)?;
    let hundred = T::hundred()?;

    history
        .iter()
        .enumerate()
        .map(|(i, current)| {
            let roc = if i < roc_lookback(lookback) {
                None
            } else {
                let back = history[i - lookback].bar.close;
                if back == T::zero() {
                    None
                } else {
                    let ratio = current
                        .bar
                        .close
                        .try_sub(back)
                        .and_then(|change| hundred.try_mul(change))
                        .and_then(|scaled| scaled.try_div(back));
                    Some(checked(ratio, "rate of change")?)
                }
            };
            Ok(RocPoint {
                index: current.index,
                timestamp: current.bar.timestamp,
                roc,
            })
        })
        .collect()
}
