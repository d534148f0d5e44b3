//! # qvec Backend
//!
//! State-vector execution for qvec circuits: the amplitude engine, the
//! measurement sampler, and the simulator that ties them to a noise
//! model.
//!
//! ## Quick Start
//!
//! ```rust
//! use qvec_backend::Simulator;
//! use qvec_core::prelude::*;
//!
//! let circuit = CircuitBuilder::new(2)
//!     .h(0)
//!     .cnot(0, 1)
//!     .measure_all()
//!     .build()
//!     .unwrap();
//!
//! let result = Simulator::ideal().with_seed(7).run(&circuit, 1000).unwrap();
//! assert_eq!(result.total_counts(), 1000);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Run results and outcome analysis
pub mod execution;

/// Shot sampling and readout
pub mod sampler;

/// Circuit simulator
pub mod simulator;

/// Complex amplitude engine
pub mod state_vector;

// ============================================================================
// Re-exports
// ============================================================================

pub use execution::{RunMetadata, RunResult};
pub use simulator::Simulator;
pub use state_vector::StateVector;

// ============================================================================
// Prelude
// ============================================================================

pub mod prelude {
    //! Convenient imports for common use cases

    pub use crate::execution::{RunMetadata, RunResult};
    pub use crate::simulator::Simulator;
    pub use crate::state_vector::StateVector;
}

// ============================================================================
// Integration Tests
// ============================================================================
