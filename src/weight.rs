//! Tolerant comparisons for physical weights.
//!
//! Weights are real-world values with limited precision, so two totals closer
//! than [`EPSILON`] are the same weight. Every deduplication and ordering
//! decision in the crate goes through these helpers instead of `==`.

/// Two weights closer than this are considered equal.
pub const EPSILON: f64 = 1e-4;

#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// `a <= b`, treating approximately equal values as equal.
#[must_use]
pub fn approx_le(a: f64, b: f64) -> bool {
    a < b || approx_eq(a, b)
}

/// `a >= b`, treating approximately equal values as equal.
#[must_use]
pub fn approx_ge(a: f64, b: f64) -> bool {
    a > b || approx_eq(a, b)
}
