use tally_core::errors::DistributionError;
use tally_core::numeric::BisectionSettings;
use tally_core::Distribution;

use crate::AnyDistribution;

/// The degenerate distribution with all mass at 0: "no cost".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

/// Shared zero-cost distribution.
pub const ZERO: AnyDistribution = AnyDistribution::Zero(Zero);

impl Distribution for Zero {
    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else {
            1.0
        }
    }

    fn pdf(&self, _x: f64) -> f64 {
        0.0
    }

    fn point_on_curve(&self) -> f64 {
        0.0
    }

    fn contains_point_masses(&self) -> bool {
        true
    }

    fn quantile_with(&self, _p: f64, _: &BisectionSettings) -> Result<f64, DistributionError> {
        Ok(0.0)
    }
}
