//! Distribution construction and evaluation errors.

use super::error_code::{self, TallyErrorCode};

/// Errors raised while building or querying a distribution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistributionError {
    #[error("probability {p} is outside (0, 1)")]
    InvalidProbability { p: f64 },

    #[error("value {value} must be finite and greater than 0")]
    NonPositiveValue { value: f64 },

    #[error("cannot fit a curve through two quantiles at the same value {value}")]
    DegenerateFit { value: f64 },

    #[error("fit values are inverted: low {low} exceeds high {high}")]
    InvertedFit { low: f64, high: f64 },

    #[error("fit quantiles must satisfy 0 < p1 < p2 < 1, got p1={p1}, p2={p2}")]
    InvalidFitQuantiles { p1: f64, p2: f64 },

    #[error("scale factor {factor} must be finite and greater than 0")]
    InvalidScaleFactor { factor: f64 },

    #[error("invalid point mass: value {value}, weight {weight}")]
    InvalidPointMass { value: f64, weight: f64 },

    #[error("point distribution has no masses")]
    EmptyPointDistribution,

    #[error("no upper bracket for quantile {p} after {doublings} doublings")]
    BracketNotFound { p: f64, doublings: u32 },
}

impl TallyErrorCode for DistributionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidProbability { .. } => error_code::INVALID_PROBABILITY,
            Self::NonPositiveValue { .. }
            | Self::DegenerateFit { .. }
            | Self::InvertedFit { .. }
            | Self::InvalidFitQuantiles { .. } => error_code::INVALID_FIT,
            Self::InvalidScaleFactor { .. } => error_code::INVALID_SCALE_FACTOR,
            Self::InvalidPointMass { .. } | Self::EmptyPointDistribution => {
                error_code::INVALID_POINT_MASS
            }
            Self::BracketNotFound { .. } => error_code::SOLVER_ERROR,
        }
    }
}
