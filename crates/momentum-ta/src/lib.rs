//! momentum-ta: Price Momentum Oscillator for technical analysis
//!
//! This crate computes the Price Momentum Oscillator (PMO), a three-stage
//! cascade of seeded exponential moving averages over a one-period rate of
//! change, together with the ROC it is built on.
//!
//! # Features
//!
//! - **Exactness**: Generic over `rust_decimal::Decimal` for base-10 results
//!   that reproduce published values, or `f64`/`f32` for speed
//! - **Alignment**: One output record per input bar, warm-up values are `None`
//! - **Purity**: Every call recomputes from the full history; no state is
//!   shared between calls
//! - **Safety**: Typed errors for out-of-range periods and short histories
//!
//! # Quick Start
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use momentum_ta::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let bars: Vec<Bar<Decimal>> = (0..60)
//!     .map(|i| Bar::from_close(start + Duration::days(i), Decimal::from(200 - i)))
//!     .collect();
//!
//! let results = pmo(&bars, 35, 20, 10).unwrap();
//! assert_eq!(results.len(), 60);
//! assert_eq!(results[35].index, 36);
//! assert!(results[35].roc_ema.is_some());
//! // 60 bars never reach the signal line with the default periods
//! assert!(results.iter().all(|r| r.signal.is_none()));
//! ```
//!
//! # Error Handling
//!
//! ```
//! use momentum_ta::prelude::*;
//!
//! let bars: Vec<Bar<f64>> = vec![];
//! assert!(matches!(pmo(&bars, 1, 20, 10), Err(Error::InvalidParameter { .. })));
//! assert!(matches!(pmo(&bars, 35, 20, 10), Err(Error::InsufficientHistory { .. })));
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events (`debug` for stage setup, `warn` for
//! histories shorter than recommended) and never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod quote;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use indicators::{pmo, Pmo, PmoResult};
pub use quote::Bar;
pub use traits::SeriesElement;
pub use utils::{approx_eq, approx_eq_option, count_absent_prefix, EPSILON, LOOSE_EPSILON};
