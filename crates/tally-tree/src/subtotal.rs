//! The result of aggregating one subtree under one config.

use std::sync::Arc;

use tally_core::config::NumericConfig;
use tally_distributions::{add_with, AnyDistribution, ZERO};

/// Either a cost, or "nothing in this subtree counts under this config".
///
/// `Absent` is the identity of [`combine`](Self::combine) and is distinct
/// from a present zero cost.
#[derive(Debug, Clone)]
pub enum Subtotal {
    Present(Arc<AnyDistribution>),
    Absent,
}

impl Subtotal {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Absent + X = X; otherwise the independent sum.
    pub fn combine(self, other: Subtotal, numeric: &NumericConfig) -> Subtotal {
        match (self, other) {
            (Self::Absent, other) => other,
            (this, Self::Absent) => this,
            (Self::Present(a), Self::Present(b)) => {
                Self::Present(Arc::new(add_with(&a, &b, numeric)))
            }
        }
    }

    /// The reported value: absence becomes [`ZERO`].
    pub fn into_distribution(self) -> Arc<AnyDistribution> {
        match self {
            Self::Present(d) => d,
            Self::Absent => Arc::new(ZERO),
        }
    }
}
