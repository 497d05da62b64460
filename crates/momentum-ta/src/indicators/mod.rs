//! Technical analysis indicators.
//!
//! # Momentum Indicators
//!
//! - [`roc`] - Rate of Change: percentage change versus `n` bars earlier
//! - [`pmo`] - Price Momentum Oscillator: double-smoothed ROC with a signal line
//!
//! # Absent Values
//!
//! Indicators return one record per input bar. Values that are not yet
//! defined (warm-up) are `None`, never a NaN sentinel, so decimal and float
//! element types behave the same way.
//!
//! # Error Handling
//!
//! Indicators return [`Result<T, Error>`](crate::error::Error) to handle:
//!
//! - Out-of-range periods ([`InvalidParameter`](crate::error::Error::InvalidParameter))
//! - Histories shorter than the hard minimum
//!   ([`InsufficientHistory`](crate::error::Error::InsufficientHistory))
//! - Repeated bar timestamps
//!   ([`DuplicateTimestamp`](crate::error::Error::DuplicateTimestamp))

pub mod pmo;
pub mod roc;

pub use pmo::{
    pmo, pmo_from_roc, pmo_lookback, pmo_min_len, pmo_recommended_len, pmo_roc_ema_lookback,
    pmo_signal_lookback, validate_pmo, Pmo, PmoResult,
};
pub use roc::{roc, roc_lookback, roc_min_len, RocPoint};
