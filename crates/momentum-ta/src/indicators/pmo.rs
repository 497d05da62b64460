//! Price Momentum Oscillator (PMO).
//!
//! PMO is a double-smoothed rate of change with a signal line. It runs three
//! seeded exponential smoothing stages over a one-period ROC series:
//!
//! 1. **ROC EMA**: ROC smoothed over `time_period`, reported times 10
//! 2. **PMO**: ROC EMA smoothed over `smoothing_period`
//! 3. **Signal**: PMO smoothed over `signal_period`
//!
//! # Formula
//!
//! Indices are 1-based positions in the prepared history.
//!
//! ```text
//! a1 = 2 / time_period
//! a2 = 2 / smoothing_period
//! a3 = 2 / (signal_period + 1)
//!
//! raw[t+1]   = mean(ROC over the last time_period points)
//! raw[i]     = ROC[i] * a1 + raw[i-1] * (1 - a1)
//! ROC_EMA[i] = 10 * raw[i]
//!
//! PMO[t+s]   = mean(ROC_EMA over the last smoothing_period points)
//! PMO[i]     = (ROC_EMA[i] - PMO[i-1]) * a2 + PMO[i-1]
//!
//! SIG[t+s+g-1] = mean(PMO over the last signal_period points)
//! SIG[i]       = (PMO[i] - SIG[i-1]) * a3 + SIG[i-1]
//! ```
//!
//! The stage-1 recursion runs on the unscaled value; only the reported
//! `roc_ema` is multiplied by 10. Stage 2 uses `2 / period` while stage 3
//! uses the textbook `2 / (period + 1)`; published PMO values depend on both.
//!
//! # Lookback
//!
//! - `roc_ema`: first `time_period` values are absent
//! - `pmo`: first `time_period + smoothing_period - 1` values are absent
//! - `signal`: first `time_period + smoothing_period + signal_period - 2`
//!   values are absent
//!
//! The hard minimum history is `time_period + smoothing_period`, which does
//! not cover the signal line. Shorter-than-signal histories succeed with an
//! absent signal throughout.
//!
//! # Example
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use momentum_ta::indicators::pmo;
//! use momentum_ta::quote::Bar;
//! use rust_decimal::Decimal;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let bars: Vec<Bar<Decimal>> = (0..80)
//!     .map(|i| Bar::from_close(start + Duration::days(i), Decimal::from(100 + (i % 7))))
//!     .collect();
//!
//! let results = pmo(&bars, 35, 20, 10).unwrap();
//! assert_eq!(results.len(), 80);
//! assert!(results[34].roc_ema.is_none());
//! assert!(results[35].roc_ema.is_some());
//! assert!(results[54].pmo.is_some());
//! assert!(results[63].signal.is_some());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::indicators::roc::{roc, RocPoint};
use crate::kernels::seeded_ema::{Recurrence, SeededEma};
use crate::quote::Bar;
use crate::traits::{checked, validate_min_history, validate_period, SeriesElement};

/// Default ROC smoothing period.
pub const DEFAULT_TIME_PERIOD: usize = 35;

/// Default PMO smoothing period.
pub const DEFAULT_SMOOTHING_PERIOD: usize = 20;

/// Default signal line period.
pub const DEFAULT_SIGNAL_PERIOD: usize = 10;

/// Bars beyond the signal warm-up recommended for converged values.
pub const RECOMMENDED_EXTRA_HISTORY: usize = 250;

/// Scale applied to the reported ROC EMA.
const ROC_EMA_SCALE: usize = 10;

/// One PMO output record, aligned with its input bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PmoResult<T> {
    /// 1-based position in the prepared history.
    pub index: usize,
    /// Timestamp of the bar.
    pub timestamp: NaiveDateTime,
    /// Smoothed one-period ROC, times 10.
    pub roc_ema: Option<T>,
    /// Price Momentum Oscillator.
    pub pmo: Option<T>,
    /// Signal line.
    pub signal: Option<T>,
}

/// Number of leading absent `roc_ema` values.
#[inline]
#[must_use]
pub const fn pmo_roc_ema_lookback(time_period: usize) -> usize {
    time_period
}

/// Number of leading absent `pmo` values.
///
/// Saturates at `usize::MAX`; [`validate_pmo`] rejects periods that large.
#[inline]
#[must_use]
pub const fn pmo_lookback(time_period: usize, smoothing_period: usize) -> usize {
    time_period.saturating_add(smoothing_period).saturating_sub(1)
}

/// Number of leading absent `signal` values.
#[inline]
#[must_use]
pub const fn pmo_signal_lookback(
    time_period: usize,
    smoothing_period: usize,
    signal_period: usize,
) -> usize {
    time_period
        .saturating_add(smoothing_period)
        .saturating_add(signal_period)
        .saturating_sub(2)
}

/// Returns the minimum history length PMO accepts.
#[inline]
#[must_use]
pub const fn pmo_min_len(time_period: usize, smoothing_period: usize) -> usize {
    time_period.saturating_add(smoothing_period)
}

/// Returns the history length recommended for converged PMO values.
#[inline]
#[must_use]
pub const fn pmo_recommended_len(
    time_period: usize,
    smoothing_period: usize,
    signal_period: usize,
) -> usize {
    pmo_min_len(time_period, smoothing_period)
        .saturating_add(signal_period)
        .saturating_add(RECOMMENDED_EXTRA_HISTORY)
}

/// Validates PMO parameters against a history of `len` bars.
///
/// # Errors
///
/// - `Error::InvalidParameter` if `time_period <= 1`, `smoothing_period == 0`
///   or `signal_period == 0`
/// - `Error::InvalidParameter` if the summed periods or the recommended
///   history length do not fit in `usize`
/// - `Error::InsufficientHistory` if `len < time_period + smoothing_period`
pub fn validate_pmo(
    len: usize,
    time_period: usize,
    smoothing_period: usize,
    signal_period: usize,
) -> Result<()> {
    validate_period("time_period", time_period, 2, "must be greater than 1")?;
    validate_period("smoothing_period", smoothing_period, 1, "must be greater than 0")?;
    validate_period("signal_period", signal_period, 1, "must be greater than 0")?;

    let required = time_period
        .checked_add(smoothing_period)
        .ok_or(Error::InvalidParameter {
            parameter: "smoothing_period",
            value: smoothing_period,
            reason: "time_period + smoothing_period overflows usize",
        })?;
    let recommended = required
        .checked_add(signal_period)
        .and_then(|n| n.checked_add(RECOMMENDED_EXTRA_HISTORY))
        .ok_or(Error::InvalidParameter {
            parameter: "signal_period",
            value: signal_period,
            reason: "recommended history length overflows usize",
        })?;
    validate_min_history("pmo", len, required, recommended)
}

/// Computes the Price Momentum Oscillator.
///
/// Bars are ordered by timestamp and a one-period ROC is taken before the
/// three smoothing stages run. The output has one record per bar, in
/// ascending timestamp order.
///
/// # Arguments
///
/// * `bars` - Price history
/// * `time_period` - ROC smoothing period (typically 35)
/// * `smoothing_period` - PMO smoothing period (typically 20)
/// * `signal_period` - Signal line period (typically 10)
///
/// # Errors
///
/// Returns an error if:
/// - Any period is out of range (`Error::InvalidParameter`)
/// - There are fewer than `time_period + smoothing_period` bars
///   (`Error::InsufficientHistory`)
/// - Two bars share a timestamp (`Error::DuplicateTimestamp`)
/// - An intermediate value does not fit `T` (`Error::ArithmeticOverflow`)
pub fn pmo<T: SeriesElement>(
    bars: &[Bar<T>],
    time_period: usize,
    smoothing_period: usize,
    signal_period: usize,
) -> Result<Vec<PmoResult<T>>> {
    validate_pmo(bars.len(), time_period, smoothing_period, signal_period)?;
    let points = roc(bars, 1)?;
    smooth(&points, time_period, smoothing_period, signal_period)
}

/// Computes PMO from an existing one-period ROC series.
///
/// `points` must be the ROC series of a prepared history: position `i`
/// holds index `i + 1`, as [`roc`] produces.
///
/// # Errors
///
/// - Same parameter and history checks as [`pmo`], applied to `points.len()`
/// - `Error::InvalidParameter` naming `index` if a point's index is not its
///   1-based position
/// - `Error::ArithmeticOverflow` if an intermediate value does not fit `T`
pub fn pmo_from_roc<T: SeriesElement>(
    points: &[RocPoint<T>],
    time_period: usize,
    smoothing_period: usize,
    signal_period: usize,
) -> Result<Vec<PmoResult<T>>> {
    validate_pmo(points.len(), time_period, smoothing_period, signal_period)?;
    if let Some((_, point)) = points
        .iter()
        .enumerate()
        .find(|(position, point)| point.index != position + 1)
    {
        return Err(Error::InvalidParameter {
            parameter: "index",
            value: point.index,
            reason: "ROC points must be contiguous with 1-based indices",
        });
    }
    smooth(points, time_period, smoothing_period, signal_period)
}

fn smooth<T: SeriesElement>(
    points: &[RocPoint<T>],
    time_period: usize,
    smoothing_period: usize,
    signal_period: usize,
) -> Result<Vec<PmoResult<T>>> {
    let recommended = pmo_recommended_len(time_period, smoothing_period, signal_period);
    debug!(
        bars = points.len(),
        time_period, smoothing_period, signal_period, "computing pmo"
    );
    if points.len() < recommended {
        warn!(
            bars = points.len(),
            recommended, "pmo history is shorter than recommended; early values may not have converged"
        );
    }

    let roc_values: Vec<Option<T>> = points.iter().map(|p| p.roc).collect();

    // Stage 1: recursion on the raw value, reported times 10
    let alpha = T::two() / T::from_count(time_period)?;
    let stage = SeededEma::new(
        time_period,
        pmo_roc_ema_lookback(time_period),
        alpha,
        Recurrence::Weighted,
    )?;
    debug!(stage = "roc_ema", seed_index = stage.seed_position() + 1, alpha = ?alpha, "stage ready");
    let scale = T::from_count(ROC_EMA_SCALE)?;
    let roc_ema: Vec<Option<T>> = stage
        .apply(&roc_values)
        .map(|raw| {
            raw?.map(|v| checked(v.try_mul(scale), "roc ema scaling"))
                .transpose()
        })
        .collect::<Result<_>>()?;

    // Stage 2: non-standard 2 / period constant
    let alpha = T::two() / T::from_count(smoothing_period)?;
    let stage = SeededEma::new(
        smoothing_period,
        pmo_lookback(time_period, smoothing_period),
        alpha,
        Recurrence::Incremental,
    )?;
    debug!(stage = "pmo", seed_index = stage.seed_position() + 1, alpha = ?alpha, "stage ready");
    let pmo_values: Vec<Option<T>> = stage.apply(&roc_ema).collect::<Result<_>>()?;

    // Stage 3: standard 2 / (period + 1) constant
    let alpha = T::two() / T::from_count(signal_period.saturating_add(1))?;
    let stage = SeededEma::new(
        signal_period,
        pmo_signal_lookback(time_period, smoothing_period, signal_period),
        alpha,
        Recurrence::Incremental,
    )?;
    debug!(stage = "signal", seed_index = stage.seed_position() + 1, alpha = ?alpha, "stage ready");
    let signal_values: Vec<Option<T>> = stage.apply(&pmo_values).collect::<Result<_>>()?;

    Ok(points
        .iter()
        .zip(roc_ema.iter())
        .zip(pmo_values.iter())
        .zip(signal_values)
        .map(|(((point, &roc_ema), &pmo), signal)| PmoResult {
            index: point.index,
            timestamp: point.timestamp,
            roc_ema,
            pmo,
            signal,
        })
        .collect())
}

// ==================== Configuration Type ====================

/// PMO configuration with fluent builder API.
///
/// Defaults to the conventional (35, 20, 10) periods.
///
/// # Example
///
/// ```
/// use chrono::{Duration, NaiveDate};
/// use momentum_ta::indicators::pmo::Pmo;
/// use momentum_ta::quote::Bar;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let bars: Vec<Bar<f64>> = (0..40)
///     .map(|i| Bar::from_close(start + Duration::days(i), 50.0 + (i as f64).sin()))
///     .collect();
///
/// let results = Pmo::new()
///     .time_period(10)
///     .smoothing_period(5)
///     .signal_period(3)
///     .compute(&bars)
///     .unwrap();
/// assert!(results[14].pmo.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pmo {
    time_period: usize,
    smoothing_period: usize,
    signal_period: usize,
}

impl Default for Pmo {
    /// Creates a PMO configuration with standard parameters (35, 20, 10).
    fn default() -> Self {
        Self {
            time_period: DEFAULT_TIME_PERIOD,
            smoothing_period: DEFAULT_SMOOTHING_PERIOD,
            signal_period: DEFAULT_SIGNAL_PERIOD,
        }
    }
}

impl Pmo {
    /// Creates a new PMO configuration with standard parameters (35, 20, 10).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ROC smoothing period.
    ///
    /// Default: 35
    #[must_use]
    pub const fn time_period(mut self, time_period: usize) -> Self {
        self.time_period = time_period;
        self
    }

    /// Sets the PMO smoothing period.
    ///
    /// Default: 20
    #[must_use]
    pub const fn smoothing_period(mut self, smoothing_period: usize) -> Self {
        self.smoothing_period = smoothing_period;
        self
    }

    /// Sets the signal line period.
    ///
    /// Default: 10
    #[must_use]
    pub const fn signal_period(mut self, signal_period: usize) -> Self {
        self.signal_period = signal_period;
        self
    }

    /// Returns the configured `(time, smoothing, signal)` periods.
    #[must_use]
    pub const fn periods(&self) -> (usize, usize, usize) {
        (self.time_period, self.smoothing_period, self.signal_period)
    }

    /// Returns the minimum history length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        pmo_min_len(self.time_period, self.smoothing_period)
    }

    /// Returns the recommended history length for this configuration.
    #[must_use]
    pub const fn recommended_len(&self) -> usize {
        pmo_recommended_len(self.time_period, self.smoothing_period, self.signal_period)
    }

    /// Computes PMO over `bars` using the configured periods.
    ///
    /// # Errors
    ///
    /// See [`pmo`].
    pub fn compute<T: SeriesElement>(&self, bars: &[Bar<T>]) -> Result<Vec<PmoResult<T>>> {
        pmo(bars, self.time_period, self.smoothing_period, self.signal_period)
    }

    /// Computes PMO over an existing one-period ROC series.
    ///
    /// # Errors
    ///
    /// See [`pmo_from_roc`].
    pub fn compute_roc_points<T: SeriesElement>(
        &self,
        points: &[RocPoint<T>],
    ) -> Result<Vec<PmoResult<T>>> {
        pmo_from_roc(
            points,
            self.time_period,
            self.smoothing_period,
            self.signal_period,
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;
    use chrono::{Duration, NaiveDate};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn bars_from<T: SeriesElement>(closes: &[T]) -> Vec<Bar<T>> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::from_close(start() + Duration::days(i as i64), c))
            .collect()
    }

    fn exact_closes() -> Vec<Decimal> {
        // One-period ROC: 25, -20, 50, -50, 100, 10, -20, 25, 100, -50, 20, -50
        [100, 125, 100, 150, 75, 150, 165, 132, 165, 330, 165, 198, 99]
            .iter()
            .map(|&c| Decimal::from(c))
            .collect()
    }

    // ==================== Lookback ====================

    #[test]
    fn test_lookbacks_default_periods() {
        assert_eq!(pmo_roc_ema_lookback(35), 35);
        assert_eq!(pmo_lookback(35, 20), 54);
        assert_eq!(pmo_signal_lookback(35, 20, 10), 63);
        assert_eq!(pmo_min_len(35, 20), 55);
        assert_eq!(pmo_recommended_len(35, 20, 10), 315);
    }

    #[test]
    fn test_lookbacks_saturate_on_huge_periods() {
        assert_eq!(pmo_lookback(usize::MAX, 2), usize::MAX - 1);
        assert_eq!(pmo_signal_lookback(2, usize::MAX, 2), usize::MAX - 2);
        assert_eq!(pmo_min_len(usize::MAX, 2), usize::MAX);
        assert_eq!(pmo_recommended_len(35, 20, usize::MAX), usize::MAX);
    }

    // ==================== Validation ====================

    #[test]
    fn test_validate_time_period() {
        let result = validate_pmo(100, 1, 20, 10);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                parameter: "time_period",
                value: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_validate_smoothing_period() {
        let result = validate_pmo(100, 35, 0, 10);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                parameter: "smoothing_period",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_signal_period() {
        let result = validate_pmo(100, 35, 20, 0);
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                parameter: "signal_period",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_period_sum_overflow() {
        assert!(matches!(
            validate_pmo(10, usize::MAX, 2, 2),
            Err(Error::InvalidParameter {
                parameter: "smoothing_period",
                value: 2,
                ..
            })
        ));
        assert!(matches!(
            validate_pmo(10, 35, 20, usize::MAX - 100),
            Err(Error::InvalidParameter {
                parameter: "signal_period",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_parameters_before_history() {
        // Bad parameter wins over a short history
        let result = validate_pmo(0, 1, 20, 10);
        assert!(matches!(result, Err(Error::InvalidParameter { .. })));
    }

    #[test]
    fn test_validate_history_ignores_signal_period() {
        assert!(validate_pmo(55, 35, 20, 10).is_ok());
        assert!(validate_pmo(55, 35, 20, 500).is_ok());
        assert_eq!(
            validate_pmo(54, 35, 20, 10),
            Err(Error::InsufficientHistory {
                indicator: "pmo",
                actual: 54,
                required: 55,
                recommended: 315,
            })
        );
    }

    // ==================== Exact Decimal Values ====================

    #[test]
    fn test_pmo_exact_decimal_values() {
        let bars = bars_from(&exact_closes());
        let results = pmo(&bars, 4, 4, 4).unwrap();

        assert_eq!(results.len(), 13);
        for r in &results[..4] {
            assert_eq!(r.roc_ema, None);
        }
        let roc_ema: Vec<Option<Decimal>> = results[4..].iter().map(|r| r.roc_ema).collect();
        assert_eq!(
            roc_ema,
            vec![
                Some(dec!(12.5)),
                Some(dec!(506.25)),
                Some(dec!(303.125)),
                Some(dec!(51.5625)),
                Some(dec!(150.78125)),
                Some(dec!(575.390625)),
                Some(dec!(37.6953125)),
                Some(dec!(118.84765625)),
                Some(dec!(-190.576171875)),
            ]
        );

        for r in &results[..7] {
            assert_eq!(r.pmo, None);
        }
        let pmo_values: Vec<Option<Decimal>> = results[7..].iter().map(|r| r.pmo).collect();
        assert_eq!(
            pmo_values,
            vec![
                Some(dec!(218.359375)),
                Some(dec!(184.5703125)),
                Some(dec!(379.98046875)),
                Some(dec!(208.837890625)),
                Some(dec!(163.8427734375)),
                Some(dec!(-13.36669921875)),
            ]
        );

        for r in &results[..10] {
            assert_eq!(r.signal, None);
        }
        let signal: Vec<Option<Decimal>> = results[10..].iter().map(|r| r.signal).collect();
        assert_eq!(
            signal,
            vec![
                Some(dec!(247.93701171875)),
                Some(dec!(214.29931640625)),
                Some(dec!(123.23291015625)),
            ]
        );
    }

    #[test]
    fn test_roc_ema_recursion_uses_unscaled_value() {
        let bars = bars_from(&exact_closes());
        let results = pmo(&bars, 4, 4, 4).unwrap();
        // raw seed 1.25, next raw = 100 * 0.5 + 1.25 * 0.5 = 50.625
        assert_eq!(results[5].roc_ema, Some(dec!(506.25)));
        // Recursing on the scaled 12.5 would give 562.5
        assert_ne!(results[5].roc_ema, Some(dec!(562.5)));
    }

    // ==================== Scenario ====================

    #[test]
    fn test_sixty_bars_never_reach_signal() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0).collect();
        let bars = bars_from(&closes);
        let results = pmo(&bars, 35, 20, 10).unwrap();

        assert_eq!(results.len(), 60);
        assert!(results[34].roc_ema.is_none());
        assert!(results[35].roc_ema.is_some());
        assert_eq!(results[35].index, 36);
        assert!(results[53].pmo.is_none());
        assert!(results[54].pmo.is_some());
        assert_eq!(results[54].index, 55);
        assert!(results.iter().all(|r| r.signal.is_none()));
    }

    #[test]
    fn test_minimum_history_exactly_reaches_pmo() {
        let closes: Vec<f64> = (0..55).map(|i| 50.0 + i as f64).collect();
        let results = pmo(&bars_from(&closes), 35, 20, 10).unwrap();
        assert_eq!(results.len(), 55);
        assert!(results[54].pmo.is_some());
        assert!(results[..54].iter().all(|r| r.pmo.is_none()));
    }

    #[test]
    fn test_pmo_constant_price_is_zero() {
        let closes = vec![dec!(42); 30];
        let results = pmo(&bars_from(&closes), 5, 4, 3).unwrap();
        for r in &results[5..] {
            assert_eq!(r.roc_ema, Some(Decimal::ZERO));
        }
        for r in &results[10..] {
            assert_eq!(r.signal, Some(Decimal::ZERO));
        }
    }

    #[test]
    fn test_pmo_from_roc_matches_pmo() {
        let bars = bars_from(&exact_closes());
        let points = roc(&bars, 1).unwrap();
        assert_eq!(
            pmo_from_roc(&points, 4, 4, 4).unwrap(),
            pmo(&bars, 4, 4, 4).unwrap()
        );
    }

    #[test]
    fn test_pmo_from_roc_rejects_gapped_indices() {
        let bars = bars_from(&exact_closes());
        let mut points = roc(&bars, 1).unwrap();
        points[6].index = 9;
        assert_eq!(
            pmo_from_roc(&points, 4, 4, 4),
            Err(Error::InvalidParameter {
                parameter: "index",
                value: 9,
                reason: "ROC points must be contiguous with 1-based indices",
            })
        );
    }

    #[test]
    fn test_pmo_from_roc_rejects_zero_based_indices() {
        let bars = bars_from(&exact_closes());
        let points: Vec<RocPoint<Decimal>> = roc(&bars, 1)
            .unwrap()
            .into_iter()
            .map(|p| RocPoint {
                index: p.index - 1,
                ..p
            })
            .collect();
        assert!(matches!(
            pmo_from_roc(&points, 4, 4, 4),
            Err(Error::InvalidParameter {
                parameter: "index",
                value: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_pmo_from_roc_overflow_in_smoothing() {
        let bars = bars_from(&exact_closes());
        let mut points = roc(&bars, 1).unwrap();
        // Seed mean of four MAX values overflows the running sum
        for p in &mut points[1..5] {
            p.roc = Some(Decimal::MAX);
        }
        assert_eq!(
            pmo_from_roc(&points, 4, 4, 4),
            Err(Error::ArithmeticOverflow {
                operation: "seed window sum"
            })
        );
    }

    #[test]
    fn test_pmo_near_zero_close_is_overflow_error() {
        let mut closes = vec![dec!(0.000000000000000000000000001)];
        closes.extend(std::iter::repeat(dec!(1)).take(11));
        let result = pmo(&bars_from(&closes), 4, 4, 4);
        assert!(matches!(result, Err(Error::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_pmo_idempotent() {
        let bars = bars_from(&exact_closes());
        assert_eq!(pmo(&bars, 4, 4, 4).unwrap(), pmo(&bars, 4, 4, 4).unwrap());
    }

    #[test]
    fn test_pmo_f32() {
        let closes: Vec<f32> = (0..40).map(|i| 20.0 + (i % 5) as f32).collect();
        let results = pmo(&bars_from(&closes), 10, 5, 3).unwrap();
        assert_eq!(results.len(), 40);
        assert!(results[16].signal.is_some());
        assert!(results[15].signal.is_none());
    }

    // ==================== Configuration Type ====================

    #[test]
    fn test_pmo_config_defaults() {
        let config = Pmo::default();
        assert_eq!(config.periods(), (35, 20, 10));
        assert_eq!(config.min_len(), 55);
        assert_eq!(config.recommended_len(), 315);
        assert_eq!(Pmo::new(), config);
    }

    #[test]
    fn test_pmo_config_builder_matches_function() {
        let bars = bars_from(&exact_closes());
        let config = Pmo::new().time_period(4).smoothing_period(4).signal_period(4);
        assert_eq!(config.compute(&bars).unwrap(), pmo(&bars, 4, 4, 4).unwrap());

        let points = roc(&bars, 1).unwrap();
        assert_eq!(
            config.compute_roc_points(&points).unwrap(),
            pmo(&bars, 4, 4, 4).unwrap()
        );
    }

    #[test]
    fn test_pmo_config_propagates_errors() {
        let bars = bars_from(&exact_closes());
        let result = Pmo::new().compute(&bars);
        assert!(matches!(result, Err(Error::InsufficientHistory { .. })));
    }
}
