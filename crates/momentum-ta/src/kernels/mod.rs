//! Reusable computational kernels.
//!
//! - [`seeded_ema`]: bootstrap-then-recurse exponential smoothing shared by
//!   every PMO stage

pub mod seeded_ema;

pub use seeded_ema::{window_mean, Recurrence, SeededEma};
