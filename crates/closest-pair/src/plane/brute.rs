//! Brute-force closest pair, O(n²).
//!
//! Contract
//! - Visit index pairs (i, j), i < j, row-major.
//! - Replace the best only on a strictly smaller distance, so the first pair
//!   reaching the minimum wins ties.
//! - Return the points by value as `(points[i], points[j])`.

use super::distance::distance;
use super::types::{ClosestPair, Point};
use crate::error::ClosestPairError;

/// Closest pair by exhaustive scan. Fails with `InvalidInput` when `points.len() < 2`.
pub fn brute_force(points: &[Point]) -> Result<ClosestPair, ClosestPairError> {
    ClosestPairError::require_pair(points.len())?;
    scan_pairs(points).ok_or(ClosestPairError::InvalidInput { len: points.len() })
}

/// Unchecked scan shared with the divide-and-conquer base case; `None` for fewer than two points.
pub(super) fn scan_pairs(points: &[Point]) -> Option<ClosestPair> {
    let mut best: Option<ClosestPair> = None;
    for (i, &p) in points.iter().enumerate() {
        for &q in &points[i + 1..] {
            let d = distance(p, q);
            if best.map_or(true, |b| d < b.distance) {
                best = Some(ClosestPair {
                    distance: d,
                    a: p,
                    b: q,
                });
            }
        }
    }
    best
}
