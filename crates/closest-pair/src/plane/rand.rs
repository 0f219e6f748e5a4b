//! Random point sets in 2D (uniform box + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for tests, benches and the CLI. Every draw is fully
//!   determined by `(SampleCfg, ReplayToken)`.
//!
//! Model
//! - `count` points uniform in `[lo, hi)²`; with `integer` set, coordinates
//!   are drawn from the integers in `[lo, hi)` (defaults: 100 points on the
//!   integer grid `[1, 50)`).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Error for inconsistent sampler settings.
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Half-open coordinate range `[lo, hi)` applied to both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub lo: f64,
    pub hi: f64,
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub bounds: Bounds2,
    /// Snap coordinates to integers in `[lo, hi)`.
    pub integer: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 100,
            bounds: Bounds2 { lo: 1.0, hi: 50.0 },
            integer: true,
        }
    }
}

impl SampleCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.count == 0 {
            return Err(GeneratorError::invalid("count must be > 0"));
        }
        let Bounds2 { lo, hi } = self.bounds;
        if !(lo.is_finite() && hi.is_finite()) {
            return Err(GeneratorError::invalid("bounds must be finite"));
        }
        if lo >= hi {
            return Err(GeneratorError::invalid("lo < hi required"));
        }
        if !(hi - lo).is_finite() {
            return Err(GeneratorError::invalid("bounds span must be finite"));
        }
        // 2^63, the magnitude of i64::MIN.
        let int_span = -(i64::MIN as f64);
        if self.integer && (lo < -int_span || hi > int_span) {
            return Err(GeneratorError::invalid("integer bounds must fit in i64"));
        }
        if self.integer && lo.ceil() >= hi {
            return Err(GeneratorError::invalid("no integer in [lo, hi)"));
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points for `tok`.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let Bounds2 { lo, hi } = cfg.bounds;
    let pts = (0..cfg.count)
        .map(|_| {
            if cfg.integer {
                // `hi` may itself be an integer; the range stays half-open.
                let (a, b) = (lo.ceil() as i64, hi.ceil() as i64);
                Vector2::new(rng.gen_range(a..b) as f64, rng.gen_range(a..b) as f64)
            } else {
                Vector2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi))
            }
        })
        .collect();
    Ok(pts)
}
