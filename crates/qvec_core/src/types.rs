//! Core types for qvec
//!
//! Fundamental type aliases and validated wrapper types used throughout
//! the workspace.

use crate::error::{QvecError, QvecResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Qubit identifier (0-indexed; qubit 0 is the least-significant bit)
pub type QubitId = usize;

/// Rotation angle in radians
pub type Angle = f64;

/// Measurement counts: bitstring -> count
pub type Counts = HashMap<String, u64>;

// ============================================================================
// Probability (Validated Wrapper)
// ============================================================================

/// Probability value in range [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probability(f64);

impl Probability {
    /// Create a new Probability with validation
    pub fn new(value: f64) -> QvecResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(QvecError::InvalidProbability(value));
        }
        Ok(Self(value))
    }

    /// Get the probability value
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the complement (1 - p)
    #[inline]
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }

    /// Zero probability
    pub const ZERO: Self = Self(0.0);

    /// Certainty (p = 1)
    pub const ONE: Self = Self(1.0);
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

impl TryFrom<f64> for Probability {
    type Error = QvecError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// ============================================================================
// Bitstring
// ============================================================================

/// Bitstring for secrets and measurement results.
///
/// Display order is MSB-first: the rightmost character is qubit 0. This
/// matches the convention used for measurement outcome strings, where the
/// basis index `i` renders as `i` in binary with qubit `n-1` leftmost.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bitstring {
    bits: Vec<bool>,
}

impl Bitstring {
    /// Create from string (e.g. "1010")
    pub fn parse(s: &str) -> QvecResult<Self> {
        if s.is_empty() {
            return Err(QvecError::InvalidBitstring(s.to_string()));
        }
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(QvecError::InvalidBitstring(s.to_string())),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// Get the number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit value seen by a given qubit (qubit 0 = rightmost character).
    ///
    /// Panics if `qubit >= len()`.
    pub fn qubit_bit(&self, qubit: QubitId) -> bool {
        self.bits[self.bits.len() - 1 - qubit]
    }

    /// Basis-state index of this bitstring (MSB-first)
    pub fn to_index(&self) -> usize {
        self.bits
            .iter()
            .fold(0usize, |acc, &b| (acc << 1) | usize::from(b))
    }

    /// Count number of 1s (Hamming weight)
    pub fn popcount(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
