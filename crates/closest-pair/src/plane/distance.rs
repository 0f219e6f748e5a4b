use super::types::Point;

/// Euclidean distance `sqrt((p.x-q.x)² + (p.y-q.y)²)` at full `f64` precision.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (p - q).norm()
}

/// Digits beyond this are below `f64` resolution for typical distances.
const MAX_REPORT_DECIMALS: u32 = 15;

/// Round a distance to `decimals` digits for printing. Never feed the result back into comparisons.
///
/// `decimals` is capped at 15; values too large to scale are returned unchanged.
pub fn round_report(d: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_REPORT_DECIMALS) as i32);
    let scaled = d * scale;
    if !scaled.is_finite() {
        return d;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn three_four_five() {
        assert_eq!(distance(vector![0.0, 0.0], vector![3.0, 4.0]), 5.0);
    }

    #[test]
    fn self_distance_is_zero() {
        let p = vector![-2.5, 7.25];
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn rounding_is_presentation_only() {
        let d = std::f64::consts::SQRT_2;
        assert_eq!(round_report(d, 2), 1.41);
        assert_eq!(round_report(d, 0), 1.0);
        assert_eq!(round_report(0.0, 2), 0.0);
        assert_eq!(round_report(1.5, u32::MAX), 1.5);
        assert_eq!(round_report(1e300, 10), 1e300);
        // 1.414 and 1.406 collapse to the same printed value but still compare distinctly.
        assert_eq!(round_report(1.414, 2), round_report(1.406, 2));
    }
}
