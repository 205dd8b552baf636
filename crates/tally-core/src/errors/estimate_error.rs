//! Estimate-expression parse errors.

use super::error_code::{self, TallyErrorCode};
use super::DistributionError;

/// Errors raised while turning an estimate string like `(10-75)` into a
/// distribution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    #[error("estimate {input:?} must be wrapped in parentheses")]
    MissingParentheses { input: String },

    #[error("estimate {input:?} contains a non-numeric value {token:?}")]
    InvalidNumber { input: String, token: String },

    #[error("estimate {input:?} has {count} values; expected one or a low-high pair")]
    TooManyValues { input: String, count: usize },

    #[error("estimate curve fit failed: {0}")]
    Fit(#[from] DistributionError),
}

impl TallyErrorCode for EstimateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Fit(e) => e.error_code(),
            _ => error_code::ESTIMATE_PARSE_ERROR,
        }
    }
}
