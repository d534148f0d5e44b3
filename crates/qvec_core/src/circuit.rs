//! Quantum circuit structure for qvec
//!
//! A `Circuit` is an ordered sequence of gate operations over a fixed
//! register. It is built once, optionally composed from sub-circuit
//! blocks, then finalized; once finalized the op sequence is locked and
//! the circuit is consumed read-only by the engine.

use crate::error::{QvecError, QvecResult};
use crate::gate::GateOp;
use crate::types::QubitId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum circuit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits (fixed at build time)
    num_qubits: usize,

    /// Number of classical bits (set when measurement is requested)
    num_clbits: usize,

    /// Gate sequence
    ops: Vec<GateOp>,

    /// All qubits marked for sampling
    measure_all: bool,

    /// Op sequence locked
    finalized: bool,

    /// Optional circuit name
    name: Option<String>,
}

impl Circuit {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new empty circuit
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            num_clbits: 0,
            ops: Vec::new(),
            measure_all: false,
            finalized: false,
            name: None,
        }
    }

    /// Create a circuit with a name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        let mut c = Self::new(num_qubits);
        c.name = Some(name.into());
        c
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Append a gate operation, validating its qubit indices
    pub fn push(&mut self, op: GateOp) -> QvecResult<()> {
        if self.finalized {
            return Err(QvecError::CircuitFinalized);
        }
        self.validate_op(&op)?;
        self.ops.push(op);
        Ok(())
    }

    /// Append a sub-circuit, remapping its local qubit indices through
    /// `mapping` (`mapping[local] = parent qubit`). The sub-circuit is
    /// never mutated; composition is a pure append.
    pub fn compose(&mut self, sub: &Circuit, mapping: &[QubitId]) -> QvecResult<()> {
        if self.finalized {
            return Err(QvecError::CircuitFinalized);
        }
        if mapping.len() != sub.num_qubits {
            return Err(QvecError::SubcircuitMismatch {
                subcircuit_qubits: sub.num_qubits,
                mapping_len: mapping.len(),
            });
        }
        // Validate everything before appending anything
        let mut remapped = Vec::with_capacity(sub.ops.len());
        for op in &sub.ops {
            let targets = op.targets().iter().map(|&q| mapping[q]).collect();
            let controls = op.controls().iter().map(|&q| mapping[q]).collect();
            let op = GateOp::from_parts(op.kind().clone(), targets, controls);
            self.validate_op(&op)?;
            remapped.push(op);
        }
        self.ops.append(&mut remapped);
        Ok(())
    }

    /// Mark all qubits for sampling
    pub fn measure_all(&mut self) {
        self.measure_all = true;
        self.num_clbits = self.num_qubits;
    }

    /// Lock the op sequence
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    fn validate_op(&self, op: &GateOp) -> QvecResult<()> {
        let mut seen = vec![false; self.num_qubits];
        for &q in op.targets() {
            if q >= self.num_qubits {
                return Err(QvecError::QubitOutOfRange {
                    qubit: q,
                    num_qubits: self.num_qubits,
                });
            }
            if seen[q] {
                return Err(QvecError::DuplicateQubit { qubit: q });
            }
            seen[q] = true;
        }
        for &q in op.controls() {
            if q >= self.num_qubits {
                return Err(QvecError::QubitOutOfRange {
                    qubit: q,
                    num_qubits: self.num_qubits,
                });
            }
            if op.targets().contains(&q) {
                return Err(QvecError::TargetControlOverlap { qubit: q });
            }
            if seen[q] {
                return Err(QvecError::DuplicateQubit { qubit: q });
            }
            seen[q] = true;
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of classical bits
    pub fn num_clbits(&self) -> usize {
        self.num_clbits
    }

    /// Gate operations in order
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Whether all qubits are marked for sampling
    pub fn measures_all(&self) -> bool {
        self.measure_all
    }

    /// Whether the op sequence is locked
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Circuit name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check if circuit has no ops
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // ========================================================================
    // Analysis
    // ========================================================================

    /// Total gate count
    pub fn gate_count(&self) -> usize {
        self.ops.len()
    }

    /// Count single-qubit operations
    pub fn count_1q(&self) -> usize {
        self.ops.iter().filter(|op| !op.is_multi_qubit()).count()
    }

    /// Count multi-qubit operations
    pub fn count_multi_qubit(&self) -> usize {
        self.ops.iter().filter(|op| op.is_multi_qubit()).count()
    }

    /// Circuit depth: longest chain of ops sharing a qubit
    pub fn depth(&self) -> usize {
        let mut qubit_depths = vec![0usize; self.num_qubits];
        for op in &self.ops {
            let qubits = op.qubits();
            let max_depth = qubits
                .iter()
                .filter_map(|&q| qubit_depths.get(q))
                .max()
                .copied()
                .unwrap_or(0);
            for &q in &qubits {
                if q < self.num_qubits {
                    qubit_depths[q] = max_depth + 1;
                }
            }
        }
        qubit_depths.into_iter().max().unwrap_or(0)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} ops{})",
            self.num_qubits,
            self.ops.len(),
            if self.measure_all { ", measured" } else { "" }
        )?;
        writeln!(f, "  Depth: {}", self.depth())?;
        writeln!(f, "  1Q ops: {}", self.count_1q())?;
        writeln!(f, "  Multi-qubit ops: {}", self.count_multi_qubit())?;
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
    fn test_circuit_new() {
        let c = Circuit::new(4);
        assert_eq!(c.num_qubits(), 4);
        assert_eq!(c.num_clbits(), 0);
        assert!(c.is_empty());
        assert!(!c.is_finalized());
    }

    #[test]
    fn test_push_and_counts() {
        let mut c = Circuit::new(3);
        c.push(GateOp::h(0)).unwrap();
        c.push(GateOp::cnot(0, 1)).unwrap();
        c.push(GateOp::mcx(vec![0, 1], 2)).unwrap();
        assert_eq!(c.gate_count(), 3);
        assert_eq!(c.count_1q(), 1);
        assert_eq!(c.count_multi_qubit(), 2);
    }

    #[test]
    fn test_push_out_of_range() {
        let mut c = Circuit::new(3);
        assert_eq!(
            c.push(GateOp::h(5)),
            Err(QvecError::QubitOutOfRange {
                qubit: 5,
                num_qubits: 3
            })
        );
        // Failed push leaves no partial state
        assert!(c.is_empty());
    }

    #[test]
    fn test_push_overlap_and_duplicates() {
        let mut c = Circuit::new(3);
        assert!(matches!(
            c.push(GateOp::cnot(1, 1)),
            Err(QvecError::TargetControlOverlap { qubit: 1 })
        ));
        assert!(matches!(
            c.push(GateOp::mcx(vec![0, 0], 1)),
            Err(QvecError::DuplicateQubit { qubit: 0 })
        ));
    }

    #[test]
    fn test_finalize_locks() {
        let mut c = Circuit::new(2);
        c.push(GateOp::h(0)).unwrap();
        c.finalize();
        assert_eq!(c.push(GateOp::h(1)), Err(QvecError::CircuitFinalized));
        assert_eq!(c.gate_count(), 1);
    }

    #[test]
    fn test_measure_all_sets_clbits() {
        let mut c = Circuit::new(4);
        c.measure_all();
        assert!(c.measures_all());
        assert_eq!(c.num_clbits(), 4);
    }

    #[test]
    fn test_compose_remaps() {
        let mut sub = Circuit::with_name(2, "block");
        sub.push(GateOp::h(0)).unwrap();
        sub.push(GateOp::cnot(0, 1)).unwrap();

        let mut parent = Circuit::new(4);
        parent.compose(&sub, &[2, 3]).unwrap();

        assert_eq!(parent.gate_count(), 2);
        assert_eq!(parent.ops()[0], GateOp::h(2));
        assert_eq!(parent.ops()[1], GateOp::cnot(2, 3));
        // Sub-circuit untouched
        assert_eq!(sub.gate_count(), 2);
        assert_eq!(sub.ops()[0], GateOp::h(0));
    }

    #[test]
    fn test_compose_mapping_mismatch() {
        let sub = Circuit::new(3);
        let mut parent = Circuit::new(4);
        assert_eq!(
            parent.compose(&sub, &[0, 1]),
            Err(QvecError::SubcircuitMismatch {
                subcircuit_qubits: 3,
                mapping_len: 2
            })
        );
    }

    #[test]
    fn test_compose_rejects_bad_mapping_before_append() {
        let mut sub = Circuit::new(2);
        sub.push(GateOp::h(0)).unwrap();
        sub.push(GateOp::h(1)).unwrap();

        let mut parent = Circuit::new(2);
        // Second op maps out of range; nothing must be appended
        assert!(parent.compose(&sub, &[0, 5]).is_err());
        assert!(parent.is_empty());
    }

    #[test]
    fn test_depth() {
        let mut c = Circuit::new(3);
        c.push(GateOp::h(0)).unwrap();
        c.push(GateOp::h(1)).unwrap();
        c.push(GateOp::cnot(0, 1)).unwrap();
        c.push(GateOp::h(2)).unwrap();
        assert_eq!(c.depth(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut c = Circuit::with_name(2, "bell");
        c.push(GateOp::h(0)).unwrap();
        c.push(GateOp::cnot(0, 1)).unwrap();
        c.measure_all();
        c.finalize();

        let json = serde_json::to_string(&c).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
        assert!(back.is_finalized());
    }
}
