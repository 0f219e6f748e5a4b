//! Curated entry points.
//!
//! Both reject point sets with fewer than two points with
//! `ClosestPairError::InvalidInput`.

pub use crate::error::ClosestPairError;
pub use crate::plane::rand::{draw_points, Bounds2, GeneratorError, ReplayToken, SampleCfg};
pub use crate::plane::{compare, round_report, ClosestPair, Comparison, PairCfg, Point};

/// Brute-force closest pair: minimum distance plus the first witnessing pair in scan order.
pub fn brute_force_closest_pair(points: &[Point]) -> Result<ClosestPair, ClosestPairError> {
    crate::plane::brute_force(points)
}

/// Divide-and-conquer minimum distance.
pub fn closest_pair_distance(points: &[Point]) -> Result<f64, ClosestPairError> {
    crate::plane::closest_pair_distance(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn entry_points_agree_on_small_set() {
        let pts = [vector![0.0, 0.0], vector![3.0, 4.0], vector![1.0, 1.0]];
        let bf = brute_force_closest_pair(&pts).unwrap();
        let dc = closest_pair_distance(&pts).unwrap();
        assert!((bf.distance - dc).abs() < 1e-12);
        assert_eq!(round_report(dc, 2), 1.41);
    }

    #[test]
    fn entry_points_reject_single_point() {
        let pts = [vector![0.0, 0.0]];
        assert_eq!(
            brute_force_closest_pair(&pts).unwrap_err(),
            ClosestPairError::InvalidInput { len: 1 }
        );
        assert_eq!(
            closest_pair_distance(&pts).unwrap_err(),
            ClosestPairError::InvalidInput { len: 1 }
        );
    }
}
