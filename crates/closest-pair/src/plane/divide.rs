//! Divide-and-conquer closest-pair distance, O(n log n).
//!
//! Recursion contract
//! - Input: the x-sorted points of the current range plus the same points'
//!   y order, given as ranks into the global x-sorted view.
//! - n ≤ 3: brute force over the x-sorted range (n ≤ 1 yields +∞).
//! - Split at ⌈n/2⌉; the y order is partitioned by rank so points sharing the
//!   dividing x-coordinate land on the same side as in the x split.
//! - `best = min(left, right)`; the strip holds every point of the range with
//!   `|x - x_mid| < best`, in y order, and is scanned over a `STRIP_WINDOW` lookback.
//!
//! Any pair closer than `best` that is not inside one half straddles the
//! dividing line, so both of its points are within `best` of it.

use super::brute::scan_pairs;
use super::sort::{order_by_axis, sort_by_axis, Axis};
use super::strip::{scan_window, STRIP_WINDOW};
use super::types::Point;
use crate::error::ClosestPairError;

/// Largest subproblem solved by brute force.
const BRUTE_FORCE_MAX: usize = 3;

/// Minimum pairwise distance. Fails with `InvalidInput` when `points.len() < 2`.
pub fn closest_pair_distance(points: &[Point]) -> Result<f64, ClosestPairError> {
    distance_with_window(points, STRIP_WINDOW)
}

fn distance_with_window(points: &[Point], window: usize) -> Result<f64, ClosestPairError> {
    ClosestPairError::require_pair(points.len())?;
    let by_x = sort_by_axis(points, Axis::X);
    let by_y = order_by_axis(&by_x, Axis::Y);
    Ok(solve(&by_x, 0, &by_y, window))
}

/// `by_x` is the range starting at global rank `lo`; `by_y` lists exactly its ranks in y order.
fn solve(by_x: &[Point], lo: usize, by_y: &[usize], window: usize) -> f64 {
    debug_assert_eq!(by_x.len(), by_y.len());
    let n = by_x.len();
    if n <= BRUTE_FORCE_MAX {
        return scan_pairs(by_x).map_or(f64::INFINITY, |p| p.distance);
    }

    let mid = n.div_ceil(2);
    let split = lo + mid;
    let (left_y, right_y): (Vec<usize>, Vec<usize>) =
        by_y.iter().copied().partition(|&r| r < split);
    let left = solve(&by_x[..mid], lo, &left_y, window);
    let right = solve(&by_x[mid..], split, &right_y, window);
    let best = left.min(right);

    let x_mid = by_x[mid].x;
    let strip: Vec<Point> = by_y
        .iter()
        .map(|&r| by_x[r - lo])
        .filter(|p| (p.x - x_mid).abs() < best)
        .collect();
    scan_window(&strip, best, window)
}
