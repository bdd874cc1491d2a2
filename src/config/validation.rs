//! Configuration validation.
//!
//! All violations are collected before reporting, so a single run shows
//! every problem in the file.

use rust_decimal::Decimal;

use super::AnalyticsConfig;
use crate::errors::{AnalyticsError, Result};

/// Every constraint the configuration violates, in field order.
pub fn collect_violations(config: &AnalyticsConfig) -> Vec<String> {
    let a = config.classification.a_threshold;
    let b = config.classification.b_threshold;

    [
        check(
            a.is_finite() && a > 0.0 && a <= 100.0,
            || format!("classification.a_threshold: expected 0 < value <= 100, got {}", a),
        ),
        check(
            b.is_finite() && b > 0.0 && b <= 100.0,
            || format!("classification.b_threshold: expected 0 < value <= 100, got {}", b),
        ),
        check(a <= b, || {
            format!(
                "classification: a_threshold ({}) must not exceed b_threshold ({})",
                a, b
            )
        }),
        check(config.ranking.default_top_n >= 1, || {
            "ranking.default_top_n: must be at least 1".to_string()
        }),
        check(config.metrics.monthly_goal >= Decimal::ZERO, || {
            format!(
                "metrics.monthly_goal: must not be negative, got {}",
                config.metrics.monthly_goal
            )
        }),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// `Ok` when the configuration is consistent, otherwise a
/// [`AnalyticsError::Validation`] carrying all violations.
pub fn validate_config(config: &AnalyticsConfig) -> Result<()> {
    let violations = collect_violations(config);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AnalyticsError::Validation(violations))
    }
}

fn check(ok: bool, message: impl FnOnce() -> String) -> Option<String> {
    (!ok).then(message)
}
