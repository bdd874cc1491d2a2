//! Period-over-period deltas.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentage change from `previous` to `current`.
///
/// A zero baseline yields 100 when `current` is positive and 0 otherwise,
/// so the result is always finite.
pub fn percentage_delta(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    let delta = (current - previous) / previous * 100.0;
    if delta.is_finite() {
        delta
    } else {
        0.0
    }
}

/// A KPI value in the current window next to its comparison value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiComparison<T> {
    pub current: T,
    pub previous: T,
    pub delta_percentage: f64,
}

impl KpiComparison<Decimal> {
    pub fn from_decimals(current: Decimal, previous: Decimal) -> Self {
        Self {
            current,
            previous,
            delta_percentage: percentage_delta(as_f64(current), as_f64(previous)),
        }
    }
}

impl KpiComparison<usize> {
    pub fn from_counts(current: usize, previous: usize) -> Self {
        Self {
            current,
            previous,
            delta_percentage: percentage_delta(current as f64, previous as f64),
        }
    }
}

pub(crate) fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
