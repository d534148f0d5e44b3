//! # qvec Noise
//!
//! Noise configuration for the qvec simulator: per-gate-kind
//! depolarizing probabilities and per-qubit readout error matrices.
//!
//! ```rust
//! use qvec_noise::{NoiseModel, ReadoutError};
//!
//! let model = NoiseModel::depolarizing(0.02)
//!     .unwrap()
//!     .with_readout_error(ReadoutError::symmetric(0.02).unwrap());
//!
//! assert!(model.has_gate_noise());
//! assert!(model.has_readout_noise());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Depolarizing noise configuration
pub mod noise_model;

/// Classical readout flip errors
pub mod readout;

pub use noise_model::NoiseModel;
pub use readout::ReadoutError;
