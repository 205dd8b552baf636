//! # tally-core
//!
//! Foundation crate for the Tally cost estimator.
//! Defines the `Distribution` contract, errors, config, constants, the
//! generic quantile solver, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod numeric;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CostConfig, TallyConfig};
pub use errors::{ConfigError, DistributionError, EstimateError, TallyErrorCode, TreeError};
pub use traits::Distribution;
