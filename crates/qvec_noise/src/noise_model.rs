//! Noise model for qvec
//!
//! Maps gate kinds to depolarizing probabilities and attaches optional
//! readout error matrices, uniformly or per qubit. The model is pure
//! configuration: the backend decides when and how to draw from it.

use crate::readout::ReadoutError;
use qvec_core::{gate, Probability, QubitId, QvecError, QvecResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Gate names carrying single-qubit depolarizing noise
const GATES_1Q: &[&str] = &["h", "x", "z"];

/// Gate names carrying multi-qubit depolarizing noise
const GATES_MULTI: &[&str] = &["cx", "cp", "mcx"];

/// Depolarizing + readout noise configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoiseModel {
    /// Gate name -> depolarizing probability
    gate_errors: HashMap<String, f64>,

    /// Readout error applied to every qubit unless overridden
    uniform_readout: Option<ReadoutError>,

    /// Per-qubit readout overrides
    qubit_readout: HashMap<QubitId, ReadoutError>,
}

impl NoiseModel {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Noiseless model
    pub fn ideal() -> Self {
        Self::default()
    }

    /// Uniform depolarizing noise: probability `p` on every gate kind in
    /// the library, single- and multi-qubit alike
    pub fn depolarizing(p: f64) -> QvecResult<Self> {
        let model = Self::ideal();
        let model = GATES_1Q
            .iter()
            .chain(GATES_MULTI)
            .try_fold(model, |m, name| m.with_gate_error(name, p))?;
        Ok(model)
    }

    // ========================================================================
    // Builder Methods
    // ========================================================================

    /// Attach a depolarizing probability to one gate kind by name.
    /// Unknown names are rejected with `UnsupportedGate`.
    pub fn with_gate_error(mut self, name: &str, p: f64) -> QvecResult<Self> {
        let name = name.to_lowercase();
        if !gate::is_known_name(&name) {
            return Err(QvecError::UnsupportedGate(name));
        }
        let p = Probability::new(p)?.value();
        self.gate_errors.insert(name, p);
        Ok(self)
    }

    /// Attach a readout error to every qubit
    pub fn with_readout_error(mut self, error: ReadoutError) -> Self {
        self.uniform_readout = Some(error);
        self
    }

    /// Override the readout error for one qubit
    pub fn with_qubit_readout_error(mut self, qubit: QubitId, error: ReadoutError) -> Self {
        self.qubit_readout.insert(qubit, error);
        self
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Depolarizing probability for a gate name (0.0 when unmodeled)
    pub fn gate_error(&self, name: &str) -> f64 {
        self.gate_errors.get(name).copied().unwrap_or(0.0)
    }

    /// Readout error seen by a qubit, if any
    pub fn readout_for(&self, qubit: QubitId) -> Option<&ReadoutError> {
        self.qubit_readout
            .get(&qubit)
            .or(self.uniform_readout.as_ref())
    }

    /// Whether any gate carries a nonzero depolarizing probability
    pub fn has_gate_noise(&self) -> bool {
        self.gate_errors.values().any(|&p| p > 0.0)
    }

    /// Whether any qubit carries a nontrivial readout error
    pub fn has_readout_noise(&self) -> bool {
        self.uniform_readout.map_or(false, |r| !r.is_trivial())
            || self.qubit_readout.values().any(|r| !r.is_trivial())
    }
}

impl fmt::Display for NoiseModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.gate_errors.keys().map(String::as_str).collect();
        names.sort_unstable();
        write!(f, "NoiseModel(gates: [")?;
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={:.4}", name, self.gate_errors[*name])?;
        }
        write!(
            f,
            "], readout: {})",
            if self.has_readout_noise() { "yes" } else { "no" }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ideal_model() {
        let model = NoiseModel::ideal();
        assert!(!model.has_gate_noise());
        assert!(!model.has_readout_noise());
        assert_eq!(model.gate_error("h"), 0.0);
    }

    #[test]
    fn test_depolarizing_covers_gate_set() {
        let model = NoiseModel::depolarizing(0.02).unwrap();
        for name in ["h", "x", "z", "cx", "cp", "mcx"] {
            assert!((model.gate_error(name) - 0.02).abs() < 1e-12, "{name}");
        }
        assert!(model.has_gate_noise());
    }

    #[test]
    fn test_depolarizing_zero_is_noiseless() {
        // p = 0 must take the exact noiseless path
        let model = NoiseModel::depolarizing(0.0).unwrap();
        assert!(!model.has_gate_noise());
    }

    #[test]
    fn test_gate_error_validation() {
        assert_eq!(
            NoiseModel::ideal().with_gate_error("ecr", 0.01),
            Err(QvecError::UnsupportedGate("ecr".into()))
        );
        assert_eq!(
            NoiseModel::ideal().with_gate_error("h", 1.5),
            Err(QvecError::InvalidProbability(1.5))
        );
    }

    #[test]
    fn test_readout_lookup() {
        let uniform = ReadoutError::symmetric(0.01).unwrap();
        let special = ReadoutError::new(0.1, 0.2).unwrap();
        let model = NoiseModel::ideal()
            .with_readout_error(uniform)
            .with_qubit_readout_error(2, special);

        assert_eq!(model.readout_for(0), Some(&uniform));
        assert_eq!(model.readout_for(2), Some(&special));
        assert!(model.has_readout_noise());
    }

    #[test]
    fn test_no_readout_by_default() {
        assert_eq!(NoiseModel::ideal().readout_for(0), None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let model = NoiseModel::depolarizing(0.02)
            .unwrap()
            .with_readout_error(ReadoutError::symmetric(0.01).unwrap());
        let json = serde_json::to_string(&model).unwrap();
        let back: NoiseModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, back);
    }
}
