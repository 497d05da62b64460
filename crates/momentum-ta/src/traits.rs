//! Core traits for momentum-ta numeric operations.
//!
//! The primary trait is [`SeriesElement`], the element type every indicator
//! is generic over. It is satisfied by `f32`, `f64` and
//! [`rust_decimal::Decimal`]. `Decimal` gives base-10 results that match
//! published indicator values digit for digit; the float types trade that
//! exactness for speed.
//!
//! Arithmetic inside the indicators goes through [`CheckedArithmetic`], so a
//! result that does not fit the element type becomes
//! `Error::ArithmeticOverflow` instead of a panic or an infinity.
//!
//! The module also holds the two validation helpers shared by the
//! indicators: [`validate_period`] and [`validate_min_history`].
//!
//! # Example
//!
//! ```
//! use momentum_ta::traits::SeriesElement;
//! use rust_decimal::Decimal;
//!
//! fn mean<T: SeriesElement>(data: &[T]) -> momentum_ta::Result<T> {
//!     let sum = data.iter().fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / T::from_count(data.len())?)
//! }
//!
//! assert_eq!(mean(&[Decimal::ONE, Decimal::TWO]).unwrap(), Decimal::new(15, 1));
//! assert!((mean(&[1.0_f64, 2.0]).unwrap() - 1.5).abs() < 1e-12);
//! ```

use std::fmt::Debug;

use num_traits::{FromPrimitive, Num};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Overflow-aware arithmetic.
///
/// Each operation returns `None` when the result cannot be represented:
/// `Decimal` overflow or division by zero, or a non-finite float.
pub trait CheckedArithmetic: Sized {
    /// `self + rhs`
    fn try_add(self, rhs: Self) -> Option<Self>;
    /// `self - rhs`
    fn try_sub(self, rhs: Self) -> Option<Self>;
    /// `self * rhs`
    fn try_mul(self, rhs: Self) -> Option<Self>;
    /// `self / rhs`
    fn try_div(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_checked_float {
    ($($t:ty),*) => {
        $(
            impl CheckedArithmetic for $t {
                #[inline]
                fn try_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs).filter(|v| v.is_finite())
                }

                #[inline]
                fn try_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs).filter(|v| v.is_finite())
                }

                #[inline]
                fn try_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs).filter(|v| v.is_finite())
                }

                #[inline]
                fn try_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs).filter(|v| v.is_finite())
                }
            }
        )*
    };
}

impl_checked_float!(f32, f64);

impl CheckedArithmetic for Decimal {
    #[inline]
    fn try_add(self, rhs: Self) -> Option<Self> {
        Decimal::checked_add(self, rhs)
    }

    #[inline]
    fn try_sub(self, rhs: Self) -> Option<Self> {
        Decimal::checked_sub(self, rhs)
    }

    #[inline]
    fn try_mul(self, rhs: Self) -> Option<Self> {
        Decimal::checked_mul(self, rhs)
    }

    #[inline]
    fn try_div(self, rhs: Self) -> Option<Self> {
        Decimal::checked_div(self, rhs)
    }
}

/// Maps a `None` from [`CheckedArithmetic`] to `Error::ArithmeticOverflow`.
///
/// # Errors
///
/// Returns `Error::ArithmeticOverflow` naming `operation` if `value` is `None`.
#[inline]
pub fn checked<T>(value: Option<T>, operation: &'static str) -> Result<T> {
    value.ok_or(Error::ArithmeticOverflow { operation })
}

/// A trait for types that can be used as elements in a data series.
///
/// # Type Bounds
///
/// - `Num`: zero, one and the four arithmetic operators
/// - `FromPrimitive`: conversion of period counts into the element type
/// - `CheckedArithmetic`: overflow reported as an error, never a panic
/// - `PartialOrd + Debug + Copy`: comparisons, diagnostics and cheap copies
/// - `Send + Sync + 'static`: results can move freely between threads
pub trait SeriesElement:
    Num + FromPrimitive + CheckedArithmetic + PartialOrd + Debug + Copy + Send + Sync + 'static
{
    /// Creates a series element from a `usize` count or period.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_count(value: usize) -> Result<Self> {
        <Self as FromPrimitive>::from_usize(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Returns the constant 2 as this type.
    ///
    /// Every EMA smoothing constant in this crate is `2 / divisor`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if 100 is not representable.
    #[inline]
    fn hundred() -> Result<Self> {
        Self::from_count(100)
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T> SeriesElement for T where
    T: Num + FromPrimitive + CheckedArithmetic + PartialOrd + Debug + Copy + Send + Sync + 'static
{
}

/// Validates that a period parameter is at least `minimum`.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` naming `parameter` if `value < minimum`.
#[inline]
pub const fn validate_period(
    parameter: &'static str,
    value: usize,
    minimum: usize,
    reason: &'static str,
) -> Result<()> {
    if value < minimum {
        Err(Error::InvalidParameter {
            parameter,
            value,
            reason,
        })
    } else {
        Ok(())
    }
}

/// Validates that a history of `actual` bars meets the hard minimum.
///
/// # Errors
///
/// Returns `Error::InsufficientHistory` if `actual < required`.
#[inline]
pub const fn validate_min_history(
    indicator: &'static str,
    actual: usize,
    required: usize,
    recommended: usize,
) -> Result<()> {
    if actual < required {
        Err(Error::InsufficientHistory {
            indicator,
            actual,
            required,
            recommended,
        })
    } else {
        Ok(())
    }
}
