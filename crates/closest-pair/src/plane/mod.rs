//! Planar closest-pair algorithms.
//!
//! Purpose
//! - Brute force baseline (`brute`) and O(n log n) divide and conquer
//!   (`divide`) over the same `&[Point]` input.
//! - Keep comparisons at full `f64` precision; rounding lives at the
//!   reporting boundary (`round_report`).
//!
//! Layout (leaf to root)
//! - `distance`: Euclidean distance and report rounding.
//! - `sort`: axis-ordered copies of a point set.
//! - `brute`: all-pairs scan with first-found tie-break.
//! - `strip`: bounded lookback scan over a y-sorted strip.
//! - `divide`: recursive split, strip merge, brute force at n ≤ 3.
//! - `compare`: runs and times both algorithms on one input.
//! - `rand`: seedable point sampler for experiments and benches.

mod brute;
mod compare;
mod distance;
mod divide;
pub mod rand;
mod sort;
mod strip;
mod types;

pub use brute::brute_force;
pub use compare::{compare, Comparison};
pub use distance::{distance, round_report};
pub use divide::closest_pair_distance;
pub use sort::{order_by_axis, sort_by_axis, Axis};
pub use strip::{strip_min_distance, STRIP_WINDOW};
pub use types::{ClosestPair, PairCfg, Point};
