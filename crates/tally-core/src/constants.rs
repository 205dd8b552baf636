/// Tally version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Quantile pinned by the low value of a `(low-high)` estimate.
pub const DEFAULT_LOW_QUANTILE: f64 = 0.10;

/// Quantile pinned by the high value of a `(low-high)` estimate.
pub const DEFAULT_HIGH_QUANTILE: f64 = 0.75;

/// Bisection stops once the bracket is narrower than this, relative to
/// `max(1, upper_bound)`.
pub const DEFAULT_BISECTION_TOLERANCE: f64 = 1e-12;

/// Hard cap on bisection steps. 200 halvings exhaust f64 precision.
pub const DEFAULT_MAX_BISECTION_ITERATIONS: u32 = 200;

/// Hard cap on bracket doublings. 2^1024 overflows f64.
pub const DEFAULT_MAX_BRACKET_DOUBLINGS: u32 = 1024;

/// Equal-weight atoms taken from each continuous operand of `add`.
pub const DEFAULT_CONVOLUTION_ATOMS: usize = 256;

/// Knots in a numerically-added result.
pub const DEFAULT_TABULATION_KNOTS: usize = 512;

/// Maximum memoized subtotals held per tree.
pub const DEFAULT_MEMO_CAPACITY: u64 = 100_000;

/// Width of a rendered outline line, in columns.
pub const OUTLINE_WIDTH: usize = 78;
