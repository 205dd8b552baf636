//! Generic root finding for distributions without a closed-form quantile.
//!
//! The solver first finds an upper bracket by doubling a candidate endpoint
//! (1, 2, 4, ...) until `cdf(end) > p`, then bisects `[0, end]`. It only
//! terminates correctly if `cdf` is monotonic and tends to 1, which is part
//! of the `Distribution` contract and is not re-checked here.

use crate::constants;
use crate::errors::DistributionError;

/// Iteration and tolerance bounds for [`quantile_by_bisection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionSettings {
    /// Stop once `hi - lo <= tolerance * max(1, hi)`.
    pub tolerance: f64,
    /// Maximum number of halvings.
    pub max_iterations: u32,
    /// Maximum number of bracket doublings before giving up.
    pub max_doublings: u32,
}

impl Default for BisectionSettings {
    fn default() -> Self {
        Self {
            tolerance: constants::DEFAULT_BISECTION_TOLERANCE,
            max_iterations: constants::DEFAULT_MAX_BISECTION_ITERATIONS,
            max_doublings: constants::DEFAULT_MAX_BRACKET_DOUBLINGS,
        }
    }
}

/// Check that `p` lies in the open interval (0, 1).
pub fn check_open_probability(p: f64) -> Result<(), DistributionError> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(DistributionError::InvalidProbability { p })
    }
}

/// Find the smallest `x >= 0` (to within tolerance) with `cdf(x) >= p`.
pub fn quantile_by_bisection<F>(
    cdf: F,
    p: f64,
    settings: &BisectionSettings,
) -> Result<f64, DistributionError>
where
    F: Fn(f64) -> f64,
{
    check_open_probability(p)?;

    // Mass at (or below) zero already covers p.
    if cdf(0.0) >= p {
        return Ok(0.0);
    }

    let mut hi = 1.0_f64;
    let mut doublings = 0;
    while cdf(hi) <= p {
        if doublings >= settings.max_doublings || !hi.is_finite() {
            return Err(DistributionError::BracketNotFound { p, doublings });
        }
        hi *= 2.0;
        doublings += 1;
    }

    // Invariant: cdf(lo) < p < cdf(hi).
    let mut lo = 0.0_f64;
    for _ in 0..settings.max_iterations {
        if hi - lo <= settings.tolerance * hi.max(1.0) {
            break;
        }
        let mid = lo + (hi - lo) / 2.0;
        if cdf(mid) < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(hi)
}
