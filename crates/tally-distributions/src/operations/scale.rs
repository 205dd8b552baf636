use tally_core::errors::DistributionError;

use crate::AnyDistribution;

/// Distribution of `factor * X` for `X ~ dist`.
///
/// `CDF'(x) = CDF(x / factor)` and `Q'(p) = factor * Q(p)`; the point-mass
/// flag is preserved. `factor` must be finite and greater than 0.
pub fn scale(dist: &AnyDistribution, factor: f64) -> Result<AnyDistribution, DistributionError> {
    if !(factor.is_finite() && factor > 0.0) {
        return Err(DistributionError::InvalidScaleFactor { factor });
    }
    Ok(match dist {
        AnyDistribution::Zero(z) => AnyDistribution::Zero(*z),
        AnyDistribution::Point(d) => d.scaled(factor).into(),
        AnyDistribution::LogLogistic(d) => d.scaled(factor).into(),
        AnyDistribution::Tabulated(d) => d.scaled(factor).into(),
    })
}
