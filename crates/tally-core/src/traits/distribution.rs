//! The capability contract every cost distribution implements.

use std::fmt::Debug;

use crate::errors::DistributionError;
use crate::numeric::{self, BisectionSettings};

/// A non-negative random variable of some resource (hours, dollars, ...).
///
/// Implementations must uphold, for every `x`:
/// - `cdf` is monotonically non-decreasing, 0 for `x < 0`, and approaches 1
///   at its upper limit.
/// - `pdf` is everywhere non-negative, 0 for `x < 0`, and approaches 0 at
///   its upper limit.
///
/// Distributions are immutable once constructed.
pub trait Distribution: Debug + Send + Sync {
    /// Fraction of the distribution that is `<= x`.
    fn cdf(&self, x: f64) -> f64;

    /// Probability-per-unit density at `x`. Approximated or discretized
    /// variants may report the closest reasonable analogue.
    fn pdf(&self, x: f64) -> f64;

    /// Any point `t` with `pdf(t) > 0`, used to seed solvers.
    fn point_on_curve(&self) -> f64;

    /// True when the distribution holds Dirac point masses. Such a
    /// distribution's `pdf` is not meaningful at the mass points; only
    /// `cdf` is.
    fn contains_point_masses(&self) -> bool {
        false
    }

    /// Resource level at cumulative probability `p`; `quantile(0.5)` is the
    /// median. Uses the default solver bounds.
    fn quantile(&self, p: f64) -> Result<f64, DistributionError> {
        self.quantile_with(p, &BisectionSettings::default())
    }

    /// [`quantile`](Self::quantile) with explicit solver bounds.
    ///
    /// The default is the slow bracket-and-bisect solver. Variants with a
    /// closed form override this and ignore `settings`.
    fn quantile_with(
        &self,
        p: f64,
        settings: &BisectionSettings,
    ) -> Result<f64, DistributionError> {
        numeric::quantile_by_bisection(|x| self.cdf(x), p, settings)
    }
}

impl<D: Distribution + ?Sized> Distribution for std::sync::Arc<D> {
    fn cdf(&self, x: f64) -> f64 {
        (**self).cdf(x)
    }

    fn pdf(&self, x: f64) -> f64 {
        (**self).pdf(x)
    }

    fn point_on_curve(&self) -> f64 {
        (**self).point_on_curve()
    }

    fn contains_point_masses(&self) -> bool {
        (**self).contains_point_masses()
    }

    fn quantile_with(
        &self,
        p: f64,
        settings: &BisectionSettings,
    ) -> Result<f64, DistributionError> {
        (**self).quantile_with(p, settings)
    }
}
