//! Configuration system for Tally.
//! TOML-based, layered resolution: env > project > defaults.

pub mod cache_config;
pub mod cost_config;
pub mod estimate_config;
pub mod numeric_config;
pub mod tally_config;

pub use cache_config::CacheConfig;
pub use cost_config::CostConfig;
pub use estimate_config::EstimateConfig;
pub use numeric_config::NumericConfig;
pub use tally_config::TallyConfig;
