//! Run both algorithms on one input and time them.

use std::time::{Duration, Instant};

use super::brute::brute_force;
use super::distance::round_report;
use super::divide::closest_pair_distance;
use super::types::{ClosestPair, PairCfg, Point};
use crate::error::ClosestPairError;

/// Side-by-side result of brute force and divide and conquer.
#[derive(Clone, Copy, Debug)]
pub struct Comparison {
    pub brute: ClosestPair,
    pub divide: f64,
    pub brute_time: Duration,
    pub divide_time: Duration,
    /// Both distances equal within `PairCfg::eps_agree`.
    pub agree: bool,
    pub cfg: PairCfg,
}

impl Comparison {
    pub fn rounded_brute(&self) -> f64 {
        round_report(self.brute.distance, self.cfg.report_decimals)
    }

    pub fn rounded_divide(&self) -> f64 {
        round_report(self.divide, self.cfg.report_decimals)
    }
}

/// Run brute force then divide and conquer over `points`.
pub fn compare(points: &[Point], cfg: PairCfg) -> Result<Comparison, ClosestPairError> {
    let start = Instant::now();
    let brute = brute_force(points)?;
    let brute_time = start.elapsed();

    let start = Instant::now();
    let divide = closest_pair_distance(points)?;
    let divide_time = start.elapsed();

    Ok(Comparison {
        brute,
        divide,
        brute_time,
        divide_time,
        agree: cfg.agrees(brute.distance, divide),
        cfg,
    })
}
