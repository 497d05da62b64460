//! Shared test utilities for momentum-ta tests.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use momentum_ta::quote::Bar;
use momentum_ta::SeriesElement;

/// Timestamp of the first generated bar.
#[allow(dead_code)]
pub fn start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Daily close-only bars starting at [`start`].
#[allow(dead_code)]
pub fn daily_bars<T: SeriesElement>(closes: &[T]) -> Vec<Bar<T>> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::from_close(start() + Duration::days(i as i64), c))
        .collect()
}

/// Deterministic, strictly positive price path.
#[allow(dead_code)]
pub fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut price = 100.0;
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = f64::max(price, 10.0);
        data.push(price);
    }
    data
}
