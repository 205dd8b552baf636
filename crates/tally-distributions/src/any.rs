//! Closed set of the distribution variants the operations understand.

use tally_core::errors::DistributionError;
use tally_core::numeric::BisectionSettings;
use tally_core::Distribution;

use crate::{LogLogistic, PointDistribution, Tabulated, Zero};

/// Any distribution this crate can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDistribution {
    Zero(Zero),
    Point(PointDistribution),
    LogLogistic(LogLogistic),
    Tabulated(Tabulated),
}

impl AnyDistribution {
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero(_))
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Zero(_) => "zero",
            Self::Point(_) => "point",
            Self::LogLogistic(_) => "log_logistic",
            Self::Tabulated(_) => "tabulated",
        }
    }

    fn inner(&self) -> &dyn Distribution {
        match self {
            Self::Zero(d) => d,
            Self::Point(d) => d,
            Self::LogLogistic(d) => d,
            Self::Tabulated(d) => d,
        }
    }
}

impl Distribution for AnyDistribution {
    fn cdf(&self, x: f64) -> f64 {
        self.inner().cdf(x)
    }

    fn pdf(&self, x: f64) -> f64 {
        self.inner().pdf(x)
    }

    fn point_on_curve(&self) -> f64 {
        self.inner().point_on_curve()
    }

    fn contains_point_masses(&self) -> bool {
        self.inner().contains_point_masses()
    }

    fn quantile_with(
        &self,
        p: f64,
        settings: &BisectionSettings,
    ) -> Result<f64, DistributionError> {
        self.inner().quantile_with(p, settings)
    }
}

impl From<Zero> for AnyDistribution {
    fn from(d: Zero) -> Self {
        Self::Zero(d)
    }
}

impl From<PointDistribution> for AnyDistribution {
    fn from(d: PointDistribution) -> Self {
        Self::Point(d)
    }
}

impl From<LogLogistic> for AnyDistribution {
    fn from(d: LogLogistic) -> Self {
        Self::LogLogistic(d)
    }
}

impl From<Tabulated> for AnyDistribution {
    fn from(d: Tabulated) -> Self {
        Self::Tabulated(d)
    }
}
