//! Log-logistic (Fisk) distribution, fitted from two quantiles.
//!
//! ```text
//! CDF(x) = 1 / (1 + (x / alpha)^-beta)      x > 0
//! Q(p)   = alpha * (1/p - 1)^(-1/beta)
//! ```
//!
//! Two `(quantile, value)` pairs pin `alpha` and `beta` down exactly: with
//! `L(p) = ln(1/p - 1)` the CDF equations are linear in log space,
//! `L(p) = -beta * (ln x - ln alpha)`.

use tally_core::errors::DistributionError;
use tally_core::numeric::{check_open_probability, BisectionSettings};
use tally_core::tracing_setup::names;
use tally_core::Distribution;

/// Smooth, unimodal, heavy-right-tailed distribution over (0, inf) with
/// scale `alpha` and shape `beta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLogistic {
    alpha: f64,
    beta: f64,
}

/// Log-odds of the upper tail: `ln(1/p - 1)`.
fn tail_log_odds(p: f64) -> f64 {
    (1.0 / p - 1.0).ln()
}

impl LogLogistic {
    pub fn new(alpha: f64, beta: f64) -> Result<Self, DistributionError> {
        for value in [alpha, beta] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DistributionError::NonPositiveValue { value });
            }
        }
        Ok(Self { alpha, beta })
    }

    /// Solve for the curve with `cdf(x1) == p1` and `cdf(x2) == p2`.
    ///
    /// Requires `0 < p1 < p2 < 1` and `0 < x1 < x2`.
    pub fn fit(p1: f64, x1: f64, p2: f64, x2: f64) -> Result<Self, DistributionError> {
        if !(p1 > 0.0 && p1 < p2 && p2 < 1.0) {
            return Err(DistributionError::InvalidFitQuantiles { p1, p2 });
        }
        for value in [x1, x2] {
            if !(value.is_finite() && value > 0.0) {
                return Err(DistributionError::NonPositiveValue { value });
            }
        }
        if x1 == x2 {
            return Err(DistributionError::DegenerateFit { value: x1 });
        }
        if x1 > x2 {
            return Err(DistributionError::InvertedFit { low: x1, high: x2 });
        }

        let (l1, l2) = (tail_log_odds(p1), tail_log_odds(p2));
        let beta = (l2 - l1) / (x1.ln() - x2.ln());
        let alpha = (x1.ln() + l1 / beta).exp();

        tracing::debug!(
            target: names::FIT,
            p1,
            x1,
            p2,
            x2,
            alpha,
            beta,
            "fitted log-logistic curve"
        );
        Self::new(alpha, beta)
    }

    /// Scale parameter; also the median.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Shape parameter; larger means a tighter spread.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Distribution of `factor * X`: only `alpha` moves.
    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            alpha: self.alpha * factor,
            beta: self.beta,
        }
    }
}

impl Distribution for LogLogistic {
    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        1.0 / (1.0 + (x / self.alpha).powf(-self.beta))
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let z = (x / self.alpha).powf(self.beta);
        if z == 0.0 || !z.is_finite() {
            return 0.0;
        }
        self.beta * z / (x * (1.0 + z) * (1.0 + z))
    }

    fn point_on_curve(&self) -> f64 {
        self.alpha
    }

    fn quantile_with(&self, p: f64, _: &BisectionSettings) -> Result<f64, DistributionError> {
        check_open_probability(p)?;
        Ok(self.alpha * (1.0 / p - 1.0).powf(-1.0 / self.beta))
    }
}
