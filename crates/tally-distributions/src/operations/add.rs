//! Sum of two independent random variables.
//!
//! Exact where a closed form exists:
//! - `Zero + X = X` (additive identity)
//! - `Point + Point` is the point distribution over all pairwise sums
//!
//! Everything else is convolved numerically. Each operand is reduced to
//! weighted atoms (point masses stay exact, continuous shapes become
//! equal-weight atoms at mid-quantiles), every pair of atoms contributes
//! its sum with the product of weights, and the result is resampled into a
//! [`Tabulated`] CDF. The result is deterministic, monotone, supported on
//! `[0, inf)`, and identical whichever operand comes first.

use tally_core::config::NumericConfig;
use tally_core::numeric::BisectionSettings;
use tally_core::tracing_setup::names;
use tally_core::Distribution;
use tracing::debug;

use crate::{AnyDistribution, PointDistribution, PointMass, Tabulated};

/// `add_with` using the default numeric resolution.
pub fn add(a: &AnyDistribution, b: &AnyDistribution) -> AnyDistribution {
    add_with(a, b, &NumericConfig::default())
}

/// Distribution of `X + Y` for independent `X ~ a`, `Y ~ b`.
pub fn add_with(
    a: &AnyDistribution,
    b: &AnyDistribution,
    numeric: &NumericConfig,
) -> AnyDistribution {
    match (a, b) {
        (AnyDistribution::Zero(_), other) | (other, AnyDistribution::Zero(_)) => other.clone(),
        (AnyDistribution::Point(x), AnyDistribution::Point(y)) => x.sum(y).into(),
        _ => convolve(a, b, numeric),
    }
}

fn convolve(a: &AnyDistribution, b: &AnyDistribution, numeric: &NumericConfig) -> AnyDistribution {
    let atoms = numeric.effective_convolution_atoms();
    let knots = numeric.effective_tabulation_knots();
    let _span = tracing::debug_span!(names::CONVOLVE, atoms, knots).entered();
    let settings = numeric.bisection_settings();
    let left = discretize(a, atoms, &settings);
    let right = discretize(b, atoms, &settings);

    let mut samples = Vec::with_capacity(left.len() * right.len());
    for &(va, wa) in &left {
        for &(vb, wb) in &right {
            samples.push((va + vb, wa * wb));
        }
    }
    debug!(
        left = a.variant_name(),
        right = b.variant_name(),
        samples = samples.len(),
        knots,
        "numerical convolution"
    );

    // All pairwise sums landed on one value: that is a point mass.
    let fallback = samples.first().map(|&(value, _)| value);
    let total_weight: f64 = samples.iter().map(|s| s.1).sum();
    match Tabulated::from_weighted_samples(samples, knots) {
        Some(tabulated) => tabulated.into(),
        None => PointDistribution::from_unsorted(vec![PointMass {
            value: fallback.unwrap_or(0.0),
            weight: total_weight,
        }])
        .into(),
    }
}

/// Weighted atoms approximating `dist`.
fn discretize(
    dist: &AnyDistribution,
    atoms: usize,
    settings: &BisectionSettings,
) -> Vec<(f64, f64)> {
    match dist {
        AnyDistribution::Zero(_) => vec![(0.0, 1.0)],
        AnyDistribution::Point(d) => d.masses().iter().map(|m| (m.value, m.weight)).collect(),
        AnyDistribution::LogLogistic(_) | AnyDistribution::Tabulated(_) => {
            let atoms = atoms.max(1);
            let weight = 1.0 / atoms as f64;
            (0..atoms)
                .filter_map(|i| {
                    let p = (i as f64 + 0.5) / atoms as f64;
                    dist.quantile_with(p, settings).ok().map(|value| (value, weight))
                })
                .collect()
        }
    }
}
