//! Estimate expressions: the boundary format human-authored estimates use.
//!
//! `(V)` is a cost known exactly. `(V1-V2)` is a range read as "10% chance
//! it is as low as V1, 75% chance it is no higher than V2" and is fitted
//! with a [`LogLogistic`] curve.

use std::str::FromStr;

use tally_core::config::EstimateConfig;
use tally_core::constants::{DEFAULT_HIGH_QUANTILE, DEFAULT_LOW_QUANTILE};
use tally_core::errors::{DistributionError, EstimateError};

use crate::{AnyDistribution, LogLogistic, PointDistribution};

/// A parsed estimate expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    Exact(f64),
    Range { low: f64, high: f64 },
}

impl FromStr for Estimate {
    type Err = EstimateError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let inner = input
            .trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| EstimateError::MissingParentheses {
                input: input.to_string(),
            })?;

        let tokens: Vec<&str> = inner.split('-').map(str::trim).collect();
        let values = tokens
            .iter()
            .map(|token| {
                token.parse::<f64>().map_err(|_| EstimateError::InvalidNumber {
                    input: input.to_string(),
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, _>>();

        match tokens.len() {
            1 => Ok(Self::Exact(values?[0])),
            2 => {
                let values = values?;
                Ok(Self::Range {
                    low: values[0],
                    high: values[1],
                })
            }
            count => Err(EstimateError::TooManyValues {
                input: input.to_string(),
                count,
            }),
        }
    }
}

impl Estimate {
    /// Build the distribution this estimate describes.
    pub fn to_distribution(
        &self,
        config: &EstimateConfig,
    ) -> Result<AnyDistribution, EstimateError> {
        match *self {
            Self::Exact(value) => Ok(PointDistribution::certain(value)?.into()),
            Self::Range { low, high } => Ok(LogLogistic::fit(
                config.effective_low_quantile(),
                low,
                config.effective_high_quantile(),
                high,
            )?
            .into()),
        }
    }
}

/// Log-logistic curve through the given 10% and 75% quantile values.
pub fn fit_curve(value_10: f64, value_75: f64) -> Result<LogLogistic, DistributionError> {
    LogLogistic::fit(DEFAULT_LOW_QUANTILE, value_10, DEFAULT_HIGH_QUANTILE, value_75)
}

/// Parse an estimate expression such as `(40)` or `(10-75)` into its
/// distribution, with the default quantiles.
pub fn make_distribution(data: &str) -> Result<AnyDistribution, EstimateError> {
    data.parse::<Estimate>()?.to_distribution(&EstimateConfig::default())
}
