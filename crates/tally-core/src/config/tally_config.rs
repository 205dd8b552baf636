//! Top-level Tally configuration with layered resolution.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CacheConfig, CostConfig, EstimateConfig, NumericConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the root passed to `load`.
pub const PROJECT_CONFIG_FILE: &str = "tally.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TALLY_*`)
/// 2. Project config (`tally.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TallyConfig {
    pub numeric: NumericConfig,
    pub estimate: EstimateConfig,
    pub cache: CacheConfig,
    /// Named pricing tables, e.g. `[cost_configs.payroll]`.
    pub cost_configs: BTreeMap<String, CostConfig>,
}

impl TallyConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        tracing::debug!(
            root = %root.display(),
            cost_configs = config.cost_configs.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Look up a named pricing table.
    pub fn cost_config(&self, name: &str) -> Option<&CostConfig> {
        self.cost_configs.get(name)
    }

    /// Validate the configuration values.
    pub fn validate(config: &TallyConfig) -> Result<(), ConfigError> {
        let low = config.estimate.effective_low_quantile();
        let high = config.estimate.effective_high_quantile();
        for (field, q) in [("estimate.low_quantile", low), ("estimate.high_quantile", high)] {
            if !(q > 0.0 && q < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        if low >= high {
            return Err(ConfigError::ValidationFailed {
                field: "estimate.low_quantile".to_string(),
                message: "must be less than estimate.high_quantile".to_string(),
            });
        }

        let tolerance = config.numeric.effective_bisection_tolerance();
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "numeric.bisection_tolerance".to_string(),
                message: "must be finite and greater than 0".to_string(),
            });
        }
        let counts = [
            (
                "numeric.max_bisection_iterations",
                config.numeric.effective_max_bisection_iterations() as u64,
            ),
            (
                "numeric.max_bracket_doublings",
                config.numeric.effective_max_bracket_doublings() as u64,
            ),
            (
                "numeric.convolution_atoms",
                config.numeric.effective_convolution_atoms() as u64,
            ),
            (
                "numeric.tabulation_knots",
                config.numeric.effective_tabulation_knots() as u64,
            ),
            ("cache.memo_capacity", config.cache.effective_memo_capacity()),
        ];
        for (field, value) in counts {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        for (name, cost_config) in &config.cost_configs {
            cost_config
                .validate()
                .map_err(|e| match e {
                    ConfigError::ValidationFailed { field, message } => {
                        ConfigError::ValidationFailed {
                            field: format!("cost_configs.{name}.{field}"),
                            message,
                        }
                    }
                    other => other,
                })?;
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut TallyConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TallyConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut TallyConfig, other: &TallyConfig) {
        // Numeric
        if other.numeric.bisection_tolerance.is_some() {
            base.numeric.bisection_tolerance = other.numeric.bisection_tolerance;
        }
        if other.numeric.max_bisection_iterations.is_some() {
            base.numeric.max_bisection_iterations = other.numeric.max_bisection_iterations;
        }
        if other.numeric.max_bracket_doublings.is_some() {
            base.numeric.max_bracket_doublings = other.numeric.max_bracket_doublings;
        }
        if other.numeric.convolution_atoms.is_some() {
            base.numeric.convolution_atoms = other.numeric.convolution_atoms;
        }
        if other.numeric.tabulation_knots.is_some() {
            base.numeric.tabulation_knots = other.numeric.tabulation_knots;
        }

        // Estimate
        if other.estimate.low_quantile.is_some() {
            base.estimate.low_quantile = other.estimate.low_quantile;
        }
        if other.estimate.high_quantile.is_some() {
            base.estimate.high_quantile = other.estimate.high_quantile;
        }

        // Cache
        if other.cache.memo_capacity.is_some() {
            base.cache.memo_capacity = other.cache.memo_capacity;
        }

        // Pricing tables are merged by name.
        for (name, cost_config) in &other.cost_configs {
            base.cost_configs.insert(name.clone(), cost_config.clone());
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TALLY_CONVOLUTION_ATOMS`, `TALLY_MEMO_CAPACITY`, etc.
    fn apply_env_overrides(config: &mut TallyConfig) {
        if let Ok(val) = std::env::var("TALLY_BISECTION_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.numeric.bisection_tolerance = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TALLY_MAX_BISECTION_ITERATIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.numeric.max_bisection_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TALLY_CONVOLUTION_ATOMS") {
            if let Ok(v) = val.parse::<usize>() {
                config.numeric.convolution_atoms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TALLY_TABULATION_KNOTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.numeric.tabulation_knots = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TALLY_MEMO_CAPACITY") {
            if let Ok(v) = val.parse::<u64>() {
                config.cache.memo_capacity = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
