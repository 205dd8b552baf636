//! Numerical resolution and solver bounds.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::numeric::BisectionSettings;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NumericConfig {
    /// Relative bracket width at which bisection stops. Default: 1e-12.
    pub bisection_tolerance: Option<f64>,
    /// Maximum bisection halvings. Default: 200.
    pub max_bisection_iterations: Option<u32>,
    /// Maximum bracket doublings. Default: 1024.
    pub max_bracket_doublings: Option<u32>,
    /// Atoms sampled from each continuous operand of `add`. Default: 256.
    pub convolution_atoms: Option<usize>,
    /// Knots kept in a numerically-added result. Default: 512.
    pub tabulation_knots: Option<usize>,
}

impl NumericConfig {
    pub fn effective_bisection_tolerance(&self) -> f64 {
        self.bisection_tolerance
            .unwrap_or(constants::DEFAULT_BISECTION_TOLERANCE)
    }

    pub fn effective_max_bisection_iterations(&self) -> u32 {
        self.max_bisection_iterations
            .unwrap_or(constants::DEFAULT_MAX_BISECTION_ITERATIONS)
    }

    pub fn effective_max_bracket_doublings(&self) -> u32 {
        self.max_bracket_doublings
            .unwrap_or(constants::DEFAULT_MAX_BRACKET_DOUBLINGS)
    }

    pub fn effective_convolution_atoms(&self) -> usize {
        self.convolution_atoms
            .unwrap_or(constants::DEFAULT_CONVOLUTION_ATOMS)
    }

    pub fn effective_tabulation_knots(&self) -> usize {
        self.tabulation_knots
            .unwrap_or(constants::DEFAULT_TABULATION_KNOTS)
    }

    /// Solver settings for the generic quantile fallback.
    pub fn bisection_settings(&self) -> BisectionSettings {
        BisectionSettings {
            tolerance: self.effective_bisection_tolerance(),
            max_iterations: self.effective_max_bisection_iterations(),
            max_doublings: self.effective_max_bracket_doublings(),
        }
    }
}
