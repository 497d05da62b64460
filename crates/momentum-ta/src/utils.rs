//! Utility functions for momentum-ta.
//!
//! # Comparing Results
//!
//! `Decimal` results can be compared with `==`. Float results accumulate
//! rounding error through the smoothing cascade, so they are compared with a
//! tolerance. Absent values compare equal to each other and unequal to any
//! present value.
//!
//! # Example
//!
//! ```
//! use momentum_ta::utils::{approx_eq_option, EPSILON};
//!
//! assert!(approx_eq_option(Some(1.0 / 3.0), Some(0.333333333333333), EPSILON));
//! assert!(approx_eq_option::<f64>(None, None, EPSILON));
//! assert!(!approx_eq_option(None, Some(0.0), EPSILON));
//! ```

use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons after many accumulated operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for series values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other.
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    let diff = if a > b { a - b } else { b - a };
    diff < tolerance
}

/// Approximate equality check for optional series values.
///
/// Two absent values are equal; an absent and a present value are not.
#[inline]
#[must_use]
pub fn approx_eq_option<T: SeriesElement>(a: Option<T>, b: Option<T>, tolerance: T) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => approx_eq(a, b, tolerance),
        _ => false,
    }
}

/// Count the number of absent values at the beginning of a series.
///
/// This is useful for verifying the lookback period of indicator outputs.
///
/// # Example
///
/// ```
/// use momentum_ta::utils::count_absent_prefix;
///
/// let data = [None, None, Some(1.0), None];
/// assert_eq!(count_absent_prefix(&data), 2);
/// ```
#[inline]
#[must_use]
pub fn count_absent_prefix<T>(data: &[Option<T>]) -> usize {
    data.iter().take_while(|x| x.is_none()).count()
}
