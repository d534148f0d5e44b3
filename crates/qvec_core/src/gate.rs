//! Quantum gate operations for qvec
//!
//! The gate set is a closed tagged enum: every kind the simulator can
//! execute is listed here, so dispatch is exhaustively checked at compile
//! time. External gate names (e.g. in noise configuration) are validated
//! against [`is_known_name`] and rejected with `UnsupportedGate`.

use crate::types::{Angle, QubitId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum gate kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate
    H,
    /// Pauli-X gate (NOT)
    X,
    /// Pauli-Z gate
    Z,
    /// Controlled-NOT
    Cnot,
    /// Multi-controlled X (identity with the final basis pair swapped)
    Mcx,
    /// Controlled phase: diag(1, e^{i*angle}) on the target
    ControlledPhase(Angle),
}

/// All gate names the library recognizes
const KNOWN_NAMES: &[&str] = &["h", "x", "z", "cx", "mcx", "cp"];

/// Check whether an external gate name is in the closed gate set
pub fn is_known_name(name: &str) -> bool {
    KNOWN_NAMES.contains(&name.to_lowercase().as_str())
}

/// The full list of recognized gate names
pub fn known_names() -> &'static [&'static str] {
    KNOWN_NAMES
}

impl GateKind {
    /// Lowercase wire name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Z => "z",
            GateKind::Cnot => "cx",
            GateKind::Mcx => "mcx",
            GateKind::ControlledPhase(_) => "cp",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// GateOp
// ============================================================================

/// One gate operation: a kind applied to ordered targets, guarded by a
/// set of control qubits. Targets and controls must be disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateOp {
    kind: GateKind,
    targets: Vec<QubitId>,
    controls: Vec<QubitId>,
}

impl GateOp {
    /// Hadamard on one qubit
    pub fn h(qubit: QubitId) -> Self {
        Self {
            kind: GateKind::H,
            targets: vec![qubit],
            controls: Vec::new(),
        }
    }

    /// Pauli-X on one qubit
    pub fn x(qubit: QubitId) -> Self {
        Self {
            kind: GateKind::X,
            targets: vec![qubit],
            controls: Vec::new(),
        }
    }

    /// Pauli-Z on one qubit
    pub fn z(qubit: QubitId) -> Self {
        Self {
            kind: GateKind::Z,
            targets: vec![qubit],
            controls: Vec::new(),
        }
    }

    /// Controlled-NOT
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        Self {
            kind: GateKind::Cnot,
            targets: vec![target],
            controls: vec![control],
        }
    }

    /// Multi-controlled X. With an empty control set this is plain X.
    pub fn mcx(controls: Vec<QubitId>, target: QubitId) -> Self {
        Self {
            kind: GateKind::Mcx,
            targets: vec![target],
            controls,
        }
    }

    /// Controlled phase rotation of `angle` radians on `target`
    pub fn controlled_phase(control: QubitId, target: QubitId, angle: Angle) -> Self {
        Self {
            kind: GateKind::ControlledPhase(angle),
            targets: vec![target],
            controls: vec![control],
        }
    }

    /// Assemble an op from raw parts (used by circuit composition, which
    /// validates the result before appending)
    pub(crate) fn from_parts(
        kind: GateKind,
        targets: Vec<QubitId>,
        controls: Vec<QubitId>,
    ) -> Self {
        Self {
            kind,
            targets,
            controls,
        }
    }

    /// Gate kind
    pub fn kind(&self) -> &GateKind {
        &self.kind
    }

    /// Target qubits, in order (target 0 is the least-significant
    /// sub-index bit when a matrix is applied)
    pub fn targets(&self) -> &[QubitId] {
        &self.targets
    }

    /// Control qubits
    pub fn controls(&self) -> &[QubitId] {
        &self.controls
    }

    /// All qubits involved (targets then controls)
    pub fn qubits(&self) -> Vec<QubitId> {
        let mut qs = self.targets.clone();
        qs.extend_from_slice(&self.controls);
        qs
    }

    /// Total number of qubits involved
    pub fn arity(&self) -> usize {
        self.targets.len() + self.controls.len()
    }

    /// Check if this op touches more than one qubit
    pub fn is_multi_qubit(&self) -> bool {
        self.arity() > 1
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.name())?;
        if let GateKind::ControlledPhase(angle) = self.kind {
            write!(f, "({angle})")?;
        }
        for c in &self.controls {
            write!(f, " c{c}")?;
        }
        for t in &self.targets {
            write!(f, " q{t}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_qubits() {
        assert_eq!(GateOp::h(0).qubits(), vec![0]);
        assert_eq!(GateOp::cnot(0, 1).qubits(), vec![1, 0]);
        assert_eq!(GateOp::mcx(vec![0, 1, 2], 3).qubits(), vec![3, 0, 1, 2]);
    }

    #[test]
    fn test_gate_arity() {
        assert_eq!(GateOp::x(2).arity(), 1);
        assert!(!GateOp::x(2).is_multi_qubit());
        assert_eq!(GateOp::cnot(0, 1).arity(), 2);
        assert_eq!(GateOp::mcx(vec![0, 1, 2], 3).arity(), 4);
        assert!(GateOp::mcx(vec![0, 1, 2], 3).is_multi_qubit());
    }

    #[test]
    fn test_known_names() {
        assert!(is_known_name("h"));
        assert!(is_known_name("CX"));
        assert!(is_known_name("mcx"));
        assert!(!is_known_name("ecr"));
        assert!(!is_known_name("swap"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(GateOp::cnot(0, 1).kind().name(), "cx");
        assert_eq!(
            GateOp::controlled_phase(0, 1, 0.5).kind().name(),
            "cp"
        );
        for op in [GateOp::h(0), GateOp::x(0), GateOp::z(0), GateOp::mcx(vec![1], 0)] {
            assert!(is_known_name(op.kind().name()));
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let op = GateOp::controlled_phase(2, 0, std::f64::consts::FRAC_PI_4);
        let json = serde_json::to_string(&op).unwrap();
        let back: GateOp = serde_json::from_str(&json).unwrap();
        assert_eq!(op, back);
    }
}
