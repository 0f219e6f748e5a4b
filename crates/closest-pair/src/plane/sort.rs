//! Axis-ordered copies of a point set.

use std::cmp::Ordering;

use super::types::Point;

/// Coordinate used as the primary sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn keys(self, p: &Point) -> (f64, f64) {
        match self {
            Axis::X => (p.x, p.y),
            Axis::Y => (p.y, p.x),
        }
    }

    /// Ascending on this axis, ties broken by the other coordinate.
    #[inline]
    pub fn order(self, a: &Point, b: &Point) -> Ordering {
        let (a0, a1) = self.keys(a);
        let (b0, b1) = self.keys(b);
        a0.total_cmp(&b0).then_with(|| a1.total_cmp(&b1))
    }
}

/// Return a new sequence ordered by `axis`; the input is left untouched.
pub fn sort_by_axis(points: &[Point], axis: Axis) -> Vec<Point> {
    let mut out = points.to_vec();
    out.sort_by(|a, b| axis.order(a, b));
    out
}

/// Permutation of `0..points.len()` listing indices in `axis` order (stable on full ties).
pub fn order_by_axis(points: &[Point], axis: Axis) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..points.len()).collect();
    idx.sort_by(|&i, &j| axis.order(&points[i], &points[j]));
    idx
}
