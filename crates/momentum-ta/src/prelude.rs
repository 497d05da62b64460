//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use momentum_ta::prelude::*;
//!
//! let config = Pmo::default();
//! assert_eq!(config.min_len(), pmo_min_len(35, 20));
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{CheckedArithmetic, SeriesElement};

// Input types
pub use crate::quote::{prepare_history, Bar, IndexedBar};

// Indicator functions
pub use crate::indicators::{pmo, pmo_from_roc, roc, validate_pmo};

// Output types
pub use crate::indicators::{PmoResult, RocPoint};

// Configuration types
pub use crate::indicators::Pmo;

// Lookback functions
pub use crate::indicators::{
    pmo_lookback, pmo_min_len, pmo_recommended_len, pmo_roc_ema_lookback, pmo_signal_lookback,
    roc_lookback, roc_min_len,
};
