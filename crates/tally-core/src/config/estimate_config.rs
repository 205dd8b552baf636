//! Estimate-expression configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which quantiles the two values of a `(low-high)` estimate pin down.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EstimateConfig {
    /// "10% chance it is as low as this". Default: 0.10.
    pub low_quantile: Option<f64>,
    /// "75% chance it is no higher than this". Default: 0.75.
    pub high_quantile: Option<f64>,
}

impl EstimateConfig {
    pub fn effective_low_quantile(&self) -> f64 {
        self.low_quantile.unwrap_or(constants::DEFAULT_LOW_QUANTILE)
    }

    pub fn effective_high_quantile(&self) -> f64 {
        self.high_quantile.unwrap_or(constants::DEFAULT_HIGH_QUANTILE)
    }
}
