//! Resource pricing for cost aggregation.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A unit name plus a per-resource cost multiplier.
///
/// Resources missing from the map, or mapped to a multiplier `<= 0`, are
/// *excluded* under this config. That is not the same as costing zero: an
/// excluded subtree contributes nothing at all to a parent's total.
///
/// Equality and hashing are defined on content. The map is ordered and
/// multipliers compare by bit pattern (with `-0.0` folded into `0.0`), so two
/// configs built from the same pairs in any order share one memo entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostConfig {
    unit_name: String,
    #[serde(default)]
    resource_costs: BTreeMap<String, f64>,
}

impl CostConfig {
    /// Build a config. Later duplicates of a resource replace earlier ones.
    pub fn new<I, K>(unit_name: impl Into<String>, resource_costs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let config = Self {
            unit_name: unit_name.into(),
            resource_costs: resource_costs
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Display label for the cost unit, e.g. "dollars". Not used in
    /// computation.
    pub fn unit_name(&self) -> &str {
        &self.unit_name
    }

    pub fn resource_costs(&self) -> &BTreeMap<String, f64> {
        &self.resource_costs
    }

    /// Multiplier for `resource`, 0 when unlisted.
    pub fn multiplier(&self, resource: &str) -> f64 {
        self.resource_costs.get(resource).copied().unwrap_or(0.0)
    }

    /// Whether `resource` counts toward totals under this config.
    pub fn counts(&self, resource: &str) -> bool {
        self.multiplier(resource) > 0.0
    }

    /// Reject non-finite multipliers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (resource, cost) in &self.resource_costs {
            if !cost.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("resource_costs.{resource}"),
                    message: format!("multiplier {cost} must be finite"),
                });
            }
        }
        Ok(())
    }
}

fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for CostConfig {
    fn eq(&self, other: &Self) -> bool {
        self.unit_name == other.unit_name
            && self.resource_costs.len() == other.resource_costs.len()
            && self
                .resource_costs
                .iter()
                .zip(&other.resource_costs)
                .all(|((ka, va), (kb, vb))| ka == kb && canonical_bits(*va) == canonical_bits(*vb))
    }
}

impl Eq for CostConfig {}

impl Hash for CostConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unit_name.hash(state);
        self.resource_costs.len().hash(state);
        for (resource, cost) in &self.resource_costs {
            resource.hash(state);
            canonical_bits(*cost).hash(state);
        }
    }
}
