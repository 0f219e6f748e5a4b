//! Closest pair of points in the plane.
//!
//! Two algorithms over the same input:
//! - `plane::brute_force`: O(n²) scan over all index pairs, returns the pair.
//! - `plane::closest_pair_distance`: O(n log n) divide and conquer with a
//!   strip merge, returns the distance only.
//!
//! API Policy
//! - The curated surface lives in `api`; everything under `plane` may change.
//! - Distances are full-precision `f64`. Round with `plane::round_report`
//!   only when printing.

pub mod api;
pub mod error;
pub mod plane;

pub use error::ClosestPairError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Points are plain nalgebra column vectors.
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::ClosestPairError;
    pub use crate::plane::rand::{draw_points, Bounds2, GeneratorError, ReplayToken, SampleCfg};
    pub use crate::plane::{
        brute_force, closest_pair_distance, compare, distance, round_report, sort_by_axis, Axis,
        ClosestPair, Comparison, PairCfg, Point,
    };
    pub use nalgebra::Vector2 as Vec2;
}
