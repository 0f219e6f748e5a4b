//! Basic types: points, the brute-force result, and numeric settings.

use nalgebra::Vector2;

/// A point in the plane. Copy semantics make it immutable once placed in a set.
pub type Point = Vector2<f64>;

/// Closest pair found by brute force: `a` and `b` in scan order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub distance: f64,
    pub a: Point,
    pub b: Point,
}

impl ClosestPair {
    /// True if `{a, b}` equals `{p, q}` as an unordered pair.
    pub fn is_pair(&self, p: Point, q: Point) -> bool {
        (self.a == p && self.b == q) || (self.a == q && self.b == p)
    }
}

/// Numeric settings for comparing and reporting distances.
#[derive(Clone, Copy, Debug)]
pub struct PairCfg {
    /// Absolute tolerance when checking that both algorithms agree.
    pub eps_agree: f64,
    /// Decimal digits kept when printing distances.
    pub report_decimals: u32,
}

impl Default for PairCfg {
    fn default() -> Self {
        Self {
            eps_agree: 1e-9,
            report_decimals: 2,
        }
    }
}

impl PairCfg {
    #[inline]
    pub fn agrees(&self, lhs: f64, rhs: f64) -> bool {
        lhs == rhs || (lhs - rhs).abs() <= self.eps_agree
    }
}
