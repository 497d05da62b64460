//! Seeded exponential smoothing over a sparse series.
//!
//! Each PMO stage follows the same shape: nothing until a fixed seed
//! position, an unweighted mean of the trailing window at the seed, and an
//! EMA recurrence after it. [`SeededEma`] captures that shape once; the stage
//! supplies the window width, seed position, smoothing constant and
//! recurrence form.
//!
//! # Absent values
//!
//! Inputs and outputs are `Option<T>`. The seed mean averages only the
//! present values of its window and is absent if none are present. After the
//! seed, an absent input or an absent previous output makes the output
//! absent, and that absence carries forward.
//!
//! # Overflow
//!
//! Every step uses checked arithmetic. The first result that does not fit
//! the element type is yielded as `Err(Error::ArithmeticOverflow)` and ends
//! the sequence.
//!
//! # Example
//!
//! ```
//! use momentum_ta::kernels::seeded_ema::{Recurrence, SeededEma};
//! use rust_decimal_macros::dec;
//!
//! let source = [None, Some(dec!(2)), Some(dec!(4)), Some(dec!(8))];
//! // Mean of positions 1..=2 at position 2, then (x - prev) * 0.5 + prev
//! let kernel = SeededEma::new(2, 2, dec!(0.5), Recurrence::Incremental).unwrap();
//! let out: Vec<_> = kernel.apply(&source).collect::<Result<_, _>>().unwrap();
//!
//! assert_eq!(out, vec![None, None, Some(dec!(3)), Some(dec!(5.5))]);
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::traits::{checked, SeriesElement};

/// The algebraic form of the EMA step.
///
/// Both forms are the same recurrence, but they round differently in
/// decimal and binary arithmetic, so the form is chosen per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// `current * alpha + previous * (1 - alpha)`
    Weighted,
    /// `(current - previous) * alpha + previous`
    Incremental,
}

impl Recurrence {
    /// Applies one smoothing step.
    ///
    /// # Errors
    ///
    /// Returns `Error::ArithmeticOverflow` if an intermediate result does not
    /// fit `T`.
    #[inline]
    pub fn step<T: SeriesElement>(self, current: T, previous: T, alpha: T) -> Result<T> {
        let value = match self {
            Self::Weighted => {
                let carried = T::one()
                    .try_sub(alpha)
                    .and_then(|decay| previous.try_mul(decay));
                current
                    .try_mul(alpha)
                    .zip(carried)
                    .and_then(|(fresh, carried)| fresh.try_add(carried))
            }
            Self::Incremental => current
                .try_sub(previous)
                .and_then(|delta| delta.try_mul(alpha))
                .and_then(|step| step.try_add(previous)),
        };
        checked(value, "exponential smoothing")
    }
}

/// A bootstrap-then-recurse exponential smoother.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededEma<T> {
    width: usize,
    seed_position: usize,
    alpha: T,
    recurrence: Recurrence,
}

impl<T: SeriesElement> SeededEma<T> {
    /// Creates a smoother.
    ///
    /// # Arguments
    ///
    /// * `width` - Number of trailing values averaged at the seed
    /// * `seed_position` - 0-based position of the first output value
    /// * `alpha` - Smoothing constant used after the seed
    /// * `recurrence` - Form of the EMA step
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` if `width` is zero or the seed window
    /// would start before position 0.
    pub fn new(
        width: usize,
        seed_position: usize,
        alpha: T,
        recurrence: Recurrence,
    ) -> Result<Self> {
        if width == 0 {
            return Err(Error::InvalidParameter {
                parameter: "width",
                value: width,
                reason: "must be greater than 0",
            });
        }
        if width > seed_position.saturating_add(1) {
            return Err(Error::InvalidParameter {
                parameter: "width",
                value: width,
                reason: "seed window must fit before the seed position",
            });
        }
        Ok(Self {
            width,
            seed_position,
            alpha,
            recurrence,
        })
    }

    /// Returns the 0-based position of the first output value.
    #[must_use]
    pub const fn seed_position(&self) -> usize {
        self.seed_position
    }

    /// Returns the seed window width.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the smoothing constant.
    #[must_use]
    pub fn alpha(&self) -> T {
        self.alpha
    }

    /// Smooths `source`, yielding exactly one value per input position.
    ///
    /// The sequence is lazy. When `source` is shorter than the seed position
    /// every yielded value is `Ok(None)`. After an `Err` the sequence ends, so
    /// collecting into `Result<Vec<_>>` sees the overflow and nothing past it.
    pub fn apply<'a>(
        &'a self,
        source: &'a [Option<T>],
    ) -> impl Iterator<Item = Result<Option<T>>> + 'a {
        // outer None: a previous step failed
        source.iter().enumerate().scan(
            Some(None),
            move |state: &mut Option<Option<T>>, (position, &current)| {
                let previous = (*state)?;
                let value = match position.cmp(&self.seed_position) {
                    Ordering::Less => Ok(None),
                    Ordering::Equal => {
                        let start = self.seed_position - (self.width - 1);
                        window_mean(&source[start..=self.seed_position])
                    }
                    Ordering::Greater => match (current, previous) {
                        (Some(x), Some(prev)) => {
                            self.recurrence.step(x, prev, self.alpha).map(Some)
                        }
                        _ => Ok(None),
                    },
                };
                *state = value.as_ref().ok().copied();
                Some(value)
            },
        )
    }
}

/// Unweighted mean of the present values in `window`.
///
/// Returns `Ok(None)` if the window holds no present value.
///
/// # Errors
///
/// Returns `Error::ArithmeticOverflow` if the running sum does not fit `T`,
/// or `Error::NumericConversion` if the count cannot be represented.
pub fn window_mean<T: SeriesElement>(window: &[Option<T>]) -> Result<Option<T>> {
    let mut sum = T::zero();
    let mut count = 0_usize;
    for &x in window.iter().flatten() {
        sum = checked(sum.try_add(x), "seed window sum")?;
        count += 1;
    }
    if count == 0 {
        return Ok(None);
    }
    let n = T::from_count(count)?;
    checked(sum.try_div(n), "seed window mean").map(Some)
}
