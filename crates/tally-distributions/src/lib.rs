//! # tally-distributions
//!
//! Concrete cost distributions and the arithmetic that combines them.
//!
//! | Variant | Shape |
//! |---------|-------|
//! | [`Zero`] | all mass at 0; the additive identity |
//! | [`PointDistribution`] | finite set of exact values with weights |
//! | [`LogLogistic`] | smooth, heavy-right-tailed curve fitted from two quantiles |
//! | [`Tabulated`] | piecewise-linear CDF produced by numerical `add` |
//!
//! [`AnyDistribution`] closes over all four so [`operations::scale`] and
//! [`operations::add`] can take exact shortcuts where one exists.

pub mod any;
pub mod estimate;
pub mod log_logistic;
pub mod operations;
pub mod point;
pub mod tabulated;
pub mod zero;

pub use any::AnyDistribution;
pub use estimate::{fit_curve, make_distribution, Estimate};
pub use log_logistic::LogLogistic;
pub use operations::{add, add_with, scale};
pub use point::{PointDistribution, PointMass};
pub use tabulated::{Knot, Tabulated};
pub use zero::{Zero, ZERO};
