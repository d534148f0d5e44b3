//! # qvec Core
//!
//! Gate library, circuit model, and foundation types for the qvec
//! state-vector simulator.
//!
//! ## Quick Start
//!
//! ```rust
//! use qvec_core::prelude::*;
//!
//! // Build a GHZ-style circuit
//! let circuit = CircuitBuilder::new(3)
//!     .h(0)
//!     .cnot(0, 1)
//!     .cnot(1, 2)
//!     .measure_all()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(circuit.gate_count(), 3);
//! assert!(circuit.is_finalized());
//! ```
//!
//! ## Sub-circuit composition
//!
//! ```rust
//! use qvec_core::prelude::*;
//!
//! // Reusable block, composed onto a larger register
//! let bell = CircuitBuilder::with_name(2, "bell")
//!     .h(0)
//!     .cnot(0, 1)
//!     .into_block()
//!     .unwrap();
//!
//! let circuit = CircuitBuilder::new(4)
//!     .compose(&bell, &[2, 3])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(circuit.ops()[1], GateOp::cnot(2, 3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Core type aliases and validated wrappers
pub mod types;

/// Shared numeric constants
pub mod constants;

/// Error types
pub mod error;

/// Gate kinds and operations
pub mod gate;

/// Gate library unitary matrices
pub mod unitary;

/// Circuit structure
pub mod circuit;

/// Fluent circuit builder
pub mod builder;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::CircuitBuilder;
pub use circuit::Circuit;
pub use constants::{analysis, sim};
pub use error::{QvecError, QvecResult};
pub use gate::{is_known_name, known_names, GateKind, GateOp};
pub use types::{Angle, Bitstring, Counts, Probability, QubitId};
pub use unitary::{base_unitary, unitary_for, Unitary};

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases
    //!
    //! ```rust
    //! use qvec_core::prelude::*;
    //! ```

    pub use crate::builder::CircuitBuilder;
    pub use crate::circuit::Circuit;
    pub use crate::constants::{analysis, sim};
    pub use crate::error::{QvecError, QvecResult};
    pub use crate::gate::{GateKind, GateOp};
    pub use crate::types::{Angle, Bitstring, Counts, Probability, QubitId};
    pub use crate::unitary::{base_unitary, unitary_for, Unitary};
}

// ============================================================================
// Integration Tests
// ============================================================================
