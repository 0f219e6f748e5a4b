//! Strip merge for the divide-and-conquer step.
//!
//! Points in the strip lie within `best` of the dividing line and are sorted
//! by y. Packing bounds the number of points in a `best × 2·best` box, so
//! each point only needs to be checked against the `STRIP_WINDOW` points
//! preceding it in y order.

use super::distance::distance;
use super::types::Point;

/// Number of preceding strip points compared against each point.
pub const STRIP_WINDOW: usize = 6;

/// Minimum of `current_best` and any pair distance found within the lookback window.
///
/// Returns `current_best` unchanged when the strip holds fewer than two points.
pub fn strip_min_distance(strip_by_y: &[Point], current_best: f64) -> f64 {
    scan_window(strip_by_y, current_best, STRIP_WINDOW)
}

/// Same scan with an explicit lookback width.
pub(super) fn scan_window(strip_by_y: &[Point], current_best: f64, window: usize) -> f64 {
    let mut best = current_best;
    for (i, &p) in strip_by_y.iter().enumerate() {
        for &q in &strip_by_y[i.saturating_sub(window)..i] {
            let d = distance(p, q);
            if d < best {
                best = d;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn short_strip_keeps_bound() {
        assert_eq!(strip_min_distance(&[], 3.0), 3.0);
        assert_eq!(strip_min_distance(&[vector![0.0, 0.0]], 3.0), 3.0);
    }

    #[test]
    fn never_exceeds_bound() {
        let strip = [vector![0.0, 0.0], vector![0.0, 10.0]];
        assert_eq!(strip_min_distance(&strip, 2.0), 2.0);
        assert_eq!(strip_min_distance(&strip, f64::INFINITY), 10.0);
    }

    #[test]
    fn pairs_among_the_first_points_are_checked() {
        // The closest pair sits at indices 0 and 1 of a longer strip.
        let strip: Vec<Point> = [
            (0.0, 0.0),
            (0.1, 0.05),
            (5.0, 1.0),
            (-5.0, 2.0),
            (5.0, 3.0),
            (-5.0, 4.0),
            (5.0, 5.0),
            (-5.0, 6.0),
        ]
        .iter()
        .map(|&(x, y)| vector![x, y])
        .collect();
        let d = strip_min_distance(&strip, 20.0);
        assert!((d - distance(strip[0], strip[1])).abs() < 1e-15);
    }

    #[test]
    fn window_reaches_six_back() {
        // Closest pair at strip positions 0 and 6; the five points between are
        // mutually farther apart than 1.0 and farther than 1.0 from both ends.
        let strip: Vec<Point> = [
            (0.0, 0.0),
            (-3.0, 0.2),
            (3.0, 0.4),
            (-6.0, 0.5),
            (6.0, 0.6),
            (9.0, 0.8),
            (0.0, 1.0),
        ]
        .iter()
        .map(|&(x, y)| vector![x, y])
        .collect();
        assert_eq!(strip_min_distance(&strip, 20.0), 1.0);
        // A five-wide window misses it.
        assert!(scan_window(&strip, 20.0, 5) > 1.0);
    }
}
