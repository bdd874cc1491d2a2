use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::classification::AbcThresholds;
use crate::period::PeriodSelector;

/// Root configuration structure, read from `.sales-analytics.toml`.
///
/// Every section is optional in the file; missing sections and fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyticsConfig {
    /// ABC/Pareto tier boundaries
    #[serde(default)]
    pub classification: ClassificationConfig,

    /// Top-N ranking configuration
    #[serde(default)]
    pub ranking: RankingConfig,

    /// KPI configuration
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Customer positivation configuration
    #[serde(default)]
    pub positivation: PositivationConfig,

    /// Period selection configuration
    #[serde(default)]
    pub period: PeriodConfig,
}

impl AnalyticsConfig {
    /// Tier boundaries, `None` when the configured pair is inconsistent.
    pub fn abc_thresholds(&self) -> Option<AbcThresholds> {
        AbcThresholds::new(
            self.classification.a_threshold,
            self.classification.b_threshold,
        )
    }

    /// The configured default selector, parsed without a custom range.
    pub fn default_period(&self) -> PeriodSelector {
        PeriodSelector::parse(Some(&self.period.default_selector), None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    /// Cumulative percentage up to which keys are tier A (inclusive)
    #[serde(default = "default_a_threshold")]
    pub a_threshold: f64,

    /// Cumulative percentage up to which keys are tier B (inclusive)
    #[serde(default = "default_b_threshold")]
    pub b_threshold: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            a_threshold: default_a_threshold(),
            b_threshold: default_b_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MetricsConfig {
    /// Sales goal for goal attainment; zero disables it
    #[serde(default)]
    pub monthly_goal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PositivationConfig {
    /// Size of the customer base; absent means self-referential positivation
    #[serde(default)]
    pub total_customers: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodConfig {
    #[serde(default = "default_selector")]
    pub default_selector: String,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            default_selector: default_selector(),
        }
    }
}

pub fn default_a_threshold() -> f64 {
    80.0
}

pub fn default_b_threshold() -> f64 {
    95.0
}

pub fn default_top_n() -> usize {
    10
}

pub fn default_selector() -> String {
    "30".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_documented_values() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.classification.a_threshold, 80.0);
        assert_eq!(config.classification.b_threshold, 95.0);
        assert_eq!(config.ranking.default_top_n, 10);
        assert_eq!(config.metrics.monthly_goal, Decimal::ZERO);
        assert_eq!(config.positivation.total_customers, None);
        assert_eq!(
            config.default_period(),
            PeriodSelector::LastDays { days: 30 }
        );
        assert_eq!(config.abc_thresholds(), Some(AbcThresholds::default()));
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let config: AnalyticsConfig = toml::from_str("[classification]\na_threshold = 70.0\n").unwrap();
        assert_eq!(config.classification.a_threshold, 70.0);
        assert_eq!(config.classification.b_threshold, 95.0);
        assert_eq!(config.ranking, RankingConfig::default());
    }
}
