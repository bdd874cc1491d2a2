use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use super::validation::validate_config;
use super::AnalyticsConfig;
use crate::errors::{AnalyticsError, Result};

/// Name of the configuration file searched for in the directory hierarchy.
pub const CONFIG_FILE_NAME: &str = ".sales-analytics.toml";

pub const ENV_TOP_N: &str = "SALES_ANALYTICS_TOP_N";
pub const ENV_MONTHLY_GOAL: &str = "SALES_ANALYTICS_MONTHLY_GOAL";
pub const ENV_A_THRESHOLD: &str = "SALES_ANALYTICS_A_THRESHOLD";
pub const ENV_B_THRESHOLD: &str = "SALES_ANALYTICS_B_THRESHOLD";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read the whole config file into a string.
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(contents: &str) -> Result<AnalyticsConfig> {
    let config = toml::from_str::<AnalyticsConfig>(contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load one specific file, failing on any problem.
pub fn load_config_from_path(path: &Path) -> Result<AnalyticsConfig> {
    let contents = read_config_file(path).map_err(|e| {
        AnalyticsError::config_with_path(format!("Failed to read {}: {}", path.display(), e), path)
    })?;
    parse_config(&contents)
}

/// Lenient variant of [`load_config_from_path`]: problems are logged and
/// yield `None`.
fn try_load_config_from_path(config_path: &Path) -> Option<AnalyticsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // A missing file is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        parent.pop().then_some(parent)
    })
    .take(max_depth)
}

/// Find the nearest config file at or above `start`, or defaults.
pub fn discover_config(start: &Path) -> AnalyticsConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            AnalyticsConfig::default()
        })
}

/// Overlay environment values on top of `config`.
///
/// `lookup` abstracts the environment so callers and tests can supply
/// their own source. Unparseable values are logged and skipped. If the
/// overridden configuration fails validation the overrides are discarded.
pub fn apply_env_overrides<F>(config: AnalyticsConfig, lookup: F) -> AnalyticsConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut overridden = config.clone();

    if let Some(top_n) = parse_env::<usize, _>(&lookup, ENV_TOP_N) {
        overridden.ranking.default_top_n = top_n;
    }
    if let Some(goal) = parse_env::<Decimal, _>(&lookup, ENV_MONTHLY_GOAL) {
        overridden.metrics.monthly_goal = goal;
    }
    if let Some(a) = parse_env::<f64, _>(&lookup, ENV_A_THRESHOLD) {
        overridden.classification.a_threshold = a;
    }
    if let Some(b) = parse_env::<f64, _>(&lookup, ENV_B_THRESHOLD) {
        overridden.classification.b_threshold = b;
    }

    match validate_config(&overridden) {
        Ok(()) => overridden,
        Err(e) => {
            log::warn!("Ignoring environment overrides: {}", e);
            config
        }
    }
}

fn parse_env<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring {}={:?}: not a valid value", name, raw);
            None
        }
    }
}

/// Load configuration for the current process: nearest config file at or
/// above the working directory, then environment overrides.
pub fn load_config() -> AnalyticsConfig {
    let file_config = match std::env::current_dir() {
        Ok(dir) => discover_config(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AnalyticsConfig::default()
        }
    };

    apply_env_overrides(file_config, |name| std::env::var(name).ok())
}
