//! Configuration for the analytics engine.
//!
//! Sources, lowest to highest precedence: built-in defaults, the nearest
//! `.sales-analytics.toml` at or above the working directory, and the
//! `SALES_ANALYTICS_*` environment variables.
//!
//! ```toml
//! [classification]
//! a_threshold = 80.0
//! b_threshold = 95.0
//!
//! [ranking]
//! default_top_n = 10
//!
//! [metrics]
//! monthly_goal = 150000
//!
//! [positivation]
//! total_customers = 420
//!
//! [period]
//! default_selector = "current_month"
//! ```

mod core;
mod loader;
pub mod validation;

use std::sync::OnceLock;

pub use self::core::{
    default_a_threshold, default_b_threshold, default_selector, default_top_n, AnalyticsConfig,
    ClassificationConfig, MetricsConfig, PeriodConfig, PositivationConfig, RankingConfig,
};
pub use loader::{
    apply_env_overrides, directory_ancestors, discover_config, load_config,
    load_config_from_path, parse_config, CONFIG_FILE_NAME, ENV_A_THRESHOLD, ENV_B_THRESHOLD,
    ENV_MONTHLY_GOAL, ENV_TOP_N,
};
pub use validation::validate_config;

static CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Process-wide configuration, loaded on first access.
pub fn get_config() -> &'static AnalyticsConfig {
    CONFIG.get_or_init(load_config)
}
