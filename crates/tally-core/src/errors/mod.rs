//! Error handling for Tally.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod distribution_error;
pub mod error_code;
pub mod estimate_error;
pub mod tree_error;

pub use config_error::ConfigError;
pub use distribution_error::DistributionError;
pub use error_code::TallyErrorCode;
pub use estimate_error::EstimateError;
pub use tree_error::TreeError;
