//! Weighted point masses: costs that are known exactly.

use tally_core::errors::DistributionError;
use tally_core::numeric::BisectionSettings;
use tally_core::Distribution;

/// Slack when comparing cumulative weights against a target probability,
/// so that e.g. 0.1 + 0.2 still reaches 0.3.
const CUMULATIVE_EPSILON: f64 = 1e-12;

/// One exact value and its probability weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    pub value: f64,
    pub weight: f64,
}

/// A finite set of exact values, each with a probability weight.
///
/// Masses are kept sorted by value with duplicates merged. Weights are not
/// normalized; callers supply weights that sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PointDistribution {
    masses: Vec<PointMass>,
}

impl PointDistribution {
    /// Build from `(value, weight)` pairs. Values must be finite and
    /// non-negative, weights finite and non-negative. Zero-weight pairs are
    /// dropped; at least one positive weight is required.
    pub fn new<I>(masses: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut collected = Vec::new();
        for (value, weight) in masses {
            if !(value.is_finite() && value >= 0.0 && weight.is_finite() && weight >= 0.0) {
                return Err(DistributionError::InvalidPointMass { value, weight });
            }
            if weight > 0.0 {
                collected.push(PointMass { value, weight });
            }
        }
        if collected.is_empty() {
            return Err(DistributionError::EmptyPointDistribution);
        }
        Ok(Self::from_unsorted(collected))
    }

    /// A cost known with certainty: `{value: 1.0}`.
    pub fn certain(value: f64) -> Result<Self, DistributionError> {
        Self::new([(value, 1.0)])
    }

    /// Sort and merge masses that were already validated.
    pub(crate) fn from_unsorted(mut masses: Vec<PointMass>) -> Self {
        masses.sort_by(|a, b| {
            a.value
                .total_cmp(&b.value)
                .then(a.weight.total_cmp(&b.weight))
        });
        let mut merged: Vec<PointMass> = Vec::with_capacity(masses.len());
        for mass in masses {
            match merged.last_mut() {
                Some(last) if last.value == mass.value => last.weight += mass.weight,
                _ => merged.push(mass),
            }
        }
        Self { masses: merged }
    }

    pub fn masses(&self) -> &[PointMass] {
        &self.masses
    }

    pub fn total_weight(&self) -> f64 {
        self.masses.iter().map(|m| m.weight).sum()
    }

    /// Distribution of `factor * X`. `factor` is validated by the caller.
    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self::from_unsorted(
            self.masses
                .iter()
                .map(|m| PointMass {
                    value: m.value * factor,
                    weight: m.weight,
                })
                .collect(),
        )
    }

    /// Exact distribution of `X + Y` for independent point distributions:
    /// every pair of values, weighted by the product of weights, with equal
    /// sums merged.
    pub(crate) fn sum(&self, other: &Self) -> Self {
        let mut masses = Vec::with_capacity(self.masses.len() * other.masses.len());
        for a in &self.masses {
            for b in &other.masses {
                masses.push(PointMass {
                    value: a.value + b.value,
                    weight: a.weight * b.weight,
                });
            }
        }
        Self::from_unsorted(masses)
    }
}

impl Distribution for PointDistribution {
    fn cdf(&self, x: f64) -> f64 {
        self.masses
            .iter()
            .take_while(|m| m.value <= x)
            .map(|m| m.weight)
            .sum()
    }

    /// Point masses have no finite density.
    fn pdf(&self, _x: f64) -> f64 {
        0.0
    }

    fn point_on_curve(&self) -> f64 {
        self.masses
            .iter()
            .max_by(|a, b| a.weight.total_cmp(&b.weight))
            .map(|m| m.value)
            .unwrap_or(0.0)
    }

    fn contains_point_masses(&self) -> bool {
        true
    }

    /// Smallest value whose cumulative weight reaches `p`. Accepts the
    /// closed interval [0, 1].
    fn quantile_with(&self, p: f64, _: &BisectionSettings) -> Result<f64, DistributionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::InvalidProbability { p });
        }
        let mut cumulative = 0.0;
        for mass in &self.masses {
            cumulative += mass.weight;
            if cumulative + CUMULATIVE_EPSILON >= p {
                return Ok(mass.value);
            }
        }
        Ok(self.masses.last().map(|m| m.value).unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_values_are_merged() {
        let d = PointDistribution::new([(5.0, 0.25), (1.0, 0.5), (5.0, 0.25)]).unwrap();
        assert_eq!(
            d.masses(),
            &[
                PointMass { value: 1.0, weight: 0.5 },
                PointMass { value: 5.0, weight: 0.5 },
            ]
        );
    }

    #[test]
    fn sum_collapses_equal_totals() {
        let a = PointDistribution::new([(1.0, 0.5), (2.0, 0.5)]).unwrap();
        let b = PointDistribution::new([(1.0, 0.5), (2.0, 0.5)]).unwrap();
        let s = a.sum(&b);
        let values: Vec<f64> = s.masses().iter().map(|m| m.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(s.masses()[1].weight, 0.5);
    }
}
