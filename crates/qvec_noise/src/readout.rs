//! Classical readout error
//!
//! A 2x2 row-stochastic flip matrix per qubit: after the ideal
//! measurement draw, each classical output bit is flipped independently
//! with a probability that depends on its true value.

use qvec_core::{Probability, QvecResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row-stochastic readout flip matrix for a single qubit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadoutError {
    /// P(observe 1 | true 0)
    p01: f64,
    /// P(observe 0 | true 1)
    p10: f64,
}

impl ReadoutError {
    /// Create with validation of both flip probabilities
    pub fn new(p01: f64, p10: f64) -> QvecResult<Self> {
        Ok(Self {
            p01: Probability::new(p01)?.value(),
            p10: Probability::new(p10)?.value(),
        })
    }

    /// Symmetric flip: P(observe 1 | true 0) = P(observe 0 | true 1) = p
    pub fn symmetric(p: f64) -> QvecResult<Self> {
        Self::new(p, p)
    }

    /// P(observe 1 | true 0)
    pub fn p01(&self) -> f64 {
        self.p01
    }

    /// P(observe 0 | true 1)
    pub fn p10(&self) -> f64 {
        self.p10
    }

    /// Flip probability given the true bit value
    #[inline]
    pub fn flip_probability(&self, true_bit: bool) -> f64 {
        if true_bit {
            self.p10
        } else {
            self.p01
        }
    }

    /// Whether this error can actually flip anything
    pub fn is_trivial(&self) -> bool {
        self.p01 == 0.0 && self.p10 == 0.0
    }
}

impl fmt::Display for ReadoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReadoutError(p01={:.4}, p10={:.4})", self.p01, self.p10)
    }
}

// ============================================================================
// Tests
// ============================================================================
