//! Stable string codes for every error, for callers that report errors
//! across a process or language boundary.

/// Maps an error to a stable, machine-readable code.
pub trait TallyErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const INVALID_PROBABILITY: &str = "INVALID_PROBABILITY";
pub const INVALID_FIT: &str = "INVALID_FIT";
pub const INVALID_SCALE_FACTOR: &str = "INVALID_SCALE_FACTOR";
pub const INVALID_POINT_MASS: &str = "INVALID_POINT_MASS";
pub const SOLVER_ERROR: &str = "SOLVER_ERROR";
pub const ESTIMATE_PARSE_ERROR: &str = "ESTIMATE_PARSE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TREE_ERROR: &str = "TREE_ERROR";
