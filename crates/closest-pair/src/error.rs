//! Error type shared by both closest-pair entry points.

use std::fmt;

/// Errors returned by `brute_force` and `closest_pair_distance`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClosestPairError {
    /// Fewer than two points: no pair exists.
    InvalidInput { len: usize },
}

impl ClosestPairError {
    /// Check the `n >= 2` precondition.
    pub(crate) fn require_pair(len: usize) -> Result<(), Self> {
        if len < 2 {
            return Err(Self::InvalidInput { len });
        }
        Ok(())
    }
}

impl fmt::Display for ClosestPairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { len } => {
                write!(f, "invalid input: need at least 2 points, got {len}")
            }
        }
    }
}

impl std::error::Error for ClosestPairError {}
