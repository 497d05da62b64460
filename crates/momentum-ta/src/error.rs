//! Error types for momentum-ta.
//!
//! Parameter and history failures are detected before any smoothing work
//! starts. Arithmetic overflow can only surface during smoothing, and it
//! aborts the whole computation. A returned error never comes with partial
//! output.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for momentum-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A period or lookback parameter is outside its allowed range.
    ///
    /// This is not retryable: the caller has to change the call.
    #[error("invalid parameter {parameter}={value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter (e.g. `time_period`).
        parameter: &'static str,
        /// The value that was provided.
        value: usize,
        /// Description of the bound that was violated.
        reason: &'static str,
    },

    /// The price history is shorter than the indicator's hard minimum.
    ///
    /// `recommended` is informational only. It is the history length at which
    /// the smoothing cascade has converged enough for precise values.
    #[error(
        "insufficient history for {indicator}: provided {actual} periods when at least \
         {required} are required; since this uses several smoothing operations, \
         at least {recommended} data points are recommended for maximum precision"
    )]
    InsufficientHistory {
        /// Indicator that rejected the history.
        indicator: &'static str,
        /// Number of bars provided.
        actual: usize,
        /// Hard minimum number of bars.
        required: usize,
        /// Recommended number of bars.
        recommended: usize,
    },

    /// Two bars share the same timestamp.
    #[error("duplicate timestamp {timestamp} in price history")]
    DuplicateTimestamp {
        /// The repeated timestamp.
        timestamp: NaiveDateTime,
    },

    /// An intermediate result does not fit the element type.
    ///
    /// Raised for `Decimal` overflow (for example a ROC over a near-zero
    /// close) and for non-finite float results.
    #[error("arithmetic overflow in {operation}: result does not fit the element type")]
    ArithmeticOverflow {
        /// The computation that overflowed.
        operation: &'static str,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This occurs when a `usize` period cannot be represented in the series
    /// element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },
}

/// Convenience type alias for Results using the momentum-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
