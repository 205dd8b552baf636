//! Piecewise-linear CDF, the representation numerical `add` resamples into.

use tally_core::errors::DistributionError;
use tally_core::numeric::{check_open_probability, BisectionSettings};
use tally_core::Distribution;

/// One vertex of a tabulated CDF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knot {
    pub value: f64,
    pub cumulative: f64,
}

/// CDF given by straight lines between knots.
///
/// Knot values are strictly increasing and non-negative; cumulatives are
/// strictly increasing and end at exactly 1. `CDF(x) = 0` below the first
/// knot, so a first cumulative above 0 is a point mass at the lowest value.
#[derive(Debug, Clone, PartialEq)]
pub struct Tabulated {
    knots: Vec<Knot>,
}

impl Tabulated {
    /// Resample weighted samples into `knot_count + 1` knots at evenly spaced
    /// probability levels.
    ///
    /// Each sample sits at the middle of its own probability band, and the
    /// weighted quantile interpolates linearly between neighbouring samples.
    /// Returns `None` when fewer than two distinct values carry weight.
    pub fn from_weighted_samples(mut samples: Vec<(f64, f64)>, knot_count: usize) -> Option<Self> {
        samples.retain(|&(v, w)| v.is_finite() && w.is_finite() && w > 0.0);
        samples.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
        let (first, last) = (samples.first()?.0, samples.last()?.0);
        if first == last {
            return None;
        }

        let total: f64 = samples.iter().map(|s| s.1).sum();
        let mut positions = Vec::with_capacity(samples.len());
        let mut before = 0.0;
        for &(_, w) in &samples {
            positions.push((before + w / 2.0) / total);
            before += w;
        }

        let weighted_quantile = |q: f64| -> f64 {
            let k = positions.partition_point(|&pos| pos <= q);
            if k == 0 {
                return first;
            }
            if k == samples.len() {
                return last;
            }
            let (p0, p1) = (positions[k - 1], positions[k]);
            let (v0, v1) = (samples[k - 1].0, samples[k].0);
            v0 + (q - p0) / (p1 - p0) * (v1 - v0)
        };

        let knot_count = knot_count.max(1);
        let mut knots: Vec<Knot> = Vec::with_capacity(knot_count + 1);
        for j in 0..=knot_count {
            let cumulative = j as f64 / knot_count as f64;
            let value = if j == 0 {
                first
            } else if j == knot_count {
                last
            } else {
                weighted_quantile(cumulative)
            };
            match knots.last_mut() {
                // Equal values fold into one knot holding the higher level.
                Some(prev) if value <= prev.value => prev.cumulative = cumulative,
                _ => knots.push(Knot { value, cumulative }),
            }
        }
        Some(Self { knots })
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Lowest and highest values with non-zero probability.
    pub fn support(&self) -> (f64, f64) {
        (self.first().value, self.last().value)
    }

    fn first(&self) -> &Knot {
        &self.knots[0]
    }

    fn last(&self) -> &Knot {
        &self.knots[self.knots.len() - 1]
    }

    /// Knots bounding the segment that contains `x`; `x` must lie in
    /// `[first, last)`.
    fn segment(&self, x: f64) -> (&Knot, &Knot) {
        let k = self.knots.partition_point(|kn| kn.value <= x);
        (&self.knots[k - 1], &self.knots[k])
    }

    /// Distribution of `factor * X`. `factor` is validated by the caller.
    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            knots: self
                .knots
                .iter()
                .map(|k| Knot {
                    value: k.value * factor,
                    cumulative: k.cumulative,
                })
                .collect(),
        }
    }
}

impl Distribution for Tabulated {
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.first().value {
            return 0.0;
        }
        if x >= self.last().value {
            return 1.0;
        }
        let (a, b) = self.segment(x);
        a.cumulative + (b.cumulative - a.cumulative) * (x - a.value) / (b.value - a.value)
    }

    fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        if x < self.first().value || x >= self.last().value {
            return 0.0;
        }
        let (a, b) = self.segment(x);
        (b.cumulative - a.cumulative) / (b.value - a.value)
    }

    fn point_on_curve(&self) -> f64 {
        self.quantile(0.5).unwrap_or(self.first().value)
    }

    fn contains_point_masses(&self) -> bool {
        self.first().cumulative > 0.0
    }

    fn quantile_with(&self, p: f64, _: &BisectionSettings) -> Result<f64, DistributionError> {
        check_open_probability(p)?;
        if p <= self.first().cumulative {
            return Ok(self.first().value);
        }
        let k = self.knots.partition_point(|kn| kn.cumulative < p);
        let (a, b) = (&self.knots[k - 1], &self.knots[k]);
        Ok(a.value + (p - a.cumulative) / (b.cumulative - a.cumulative) * (b.value - a.value))
    }
}
