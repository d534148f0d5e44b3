//! Error types for qvec
//!
//! All validation happens before any simulation work begins: every
//! constructor and circuit operation returns `QvecResult` so that a
//! malformed input can never leave partially mutated state behind.

// Error variant fields are self-documenting via error messages
#![allow(missing_docs)]

use thiserror::Error;

/// Main error type for qvec
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QvecError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// Probability value out of range [0, 1]
    #[error("Invalid probability {0}: must be in range [0, 1]")]
    InvalidProbability(f64),

    /// Bitstring contains characters other than '0' and '1'
    #[error("Invalid bitstring '{0}': must contain only '0' and '1'")]
    InvalidBitstring(String),

    /// Qubit index out of range for the circuit
    #[error("Qubit {qubit} out of range: circuit has {num_qubits} qubits")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Same qubit listed twice in one operation
    #[error("Qubit {qubit} appears more than once in a single operation")]
    DuplicateQubit { qubit: usize },

    /// Qubit used both as target and control
    #[error("Qubit {qubit} is both a target and a control")]
    TargetControlOverlap { qubit: usize },

    /// Sub-circuit qubit count does not match the compose mapping
    #[error("Sub-circuit has {subcircuit_qubits} qubits but mapping covers {mapping_len}")]
    SubcircuitMismatch {
        subcircuit_qubits: usize,
        mapping_len: usize,
    },

    /// Attempt to modify a finalized circuit
    #[error("Circuit is finalized: op sequence is locked")]
    CircuitFinalized,

    /// Shot count must be positive
    #[error("Invalid shot count {0}: must be at least 1")]
    InvalidShots(u64),

    /// Initial amplitude vector has a bad length
    #[error("Invalid amplitude vector length {0}: must be a power of two >= 2")]
    InvalidAmplitudes(usize),

    /// Initial amplitude vector is not L2-normalized
    #[error("Amplitude vector is not normalized: squared norm is {0}")]
    NotNormalized(f64),

    /// Unitary dimension does not match the target count
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    // ========================================================================
    // Resource Errors
    // ========================================================================
    /// Requested register exceeds the simulation ceiling (memory is O(2^n))
    #[error("Requested {requested} qubits exceeds the simulator limit of {max}")]
    QubitLimitExceeded { requested: usize, max: usize },

    // ========================================================================
    // Gate Errors
    // ========================================================================
    /// Gate name not present in the gate library
    #[error("Unsupported gate '{0}'")]
    UnsupportedGate(String),
}

/// Result type alias for qvec operations
pub type QvecResult<T> = Result<T, QvecError>;

impl QvecError {
    /// Check if error is a validation error (bad caller input)
    pub fn is_validation_error(&self) -> bool {
        !matches!(
            self,
            QvecError::QubitLimitExceeded { .. } | QvecError::UnsupportedGate(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
