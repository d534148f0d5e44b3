//! Circuit builder for qvec
//!
//! Fluent consuming-self builder. Validation errors are deferred: the
//! first failing operation is recorded and surfaced by `build` /
//! `into_block`, so chains stay readable while nothing invalid can reach
//! the engine.

use crate::circuit::Circuit;
use crate::error::{QvecError, QvecResult};
use crate::gate::GateOp;
use crate::types::{Angle, QubitId};

/// Fluent circuit builder
pub struct CircuitBuilder {
    circuit: Circuit,
    error: Option<QvecError>,
}

impl CircuitBuilder {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a new builder for `num_qubits` qubits
    pub fn new(num_qubits: usize) -> Self {
        Self {
            circuit: Circuit::new(num_qubits),
            error: None,
        }
    }

    /// Create with a circuit name
    pub fn with_name(num_qubits: usize, name: impl Into<String>) -> Self {
        Self {
            circuit: Circuit::with_name(num_qubits, name),
            error: None,
        }
    }

    fn push(mut self, op: GateOp) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.circuit.push(op) {
                self.error = Some(e);
            }
        }
        self
    }

    // ========================================================================
    // Gates
    // ========================================================================

    /// Add Hadamard gate
    pub fn h(self, qubit: QubitId) -> Self {
        self.push(GateOp::h(qubit))
    }

    /// Add Pauli-X gate
    pub fn x(self, qubit: QubitId) -> Self {
        self.push(GateOp::x(qubit))
    }

    /// Add Pauli-Z gate
    pub fn z(self, qubit: QubitId) -> Self {
        self.push(GateOp::z(qubit))
    }

    /// Add CNOT gate
    pub fn cnot(self, control: QubitId, target: QubitId) -> Self {
        self.push(GateOp::cnot(control, target))
    }

    /// Alias for cnot
    pub fn cx(self, control: QubitId, target: QubitId) -> Self {
        self.cnot(control, target)
    }

    /// Add multi-controlled X gate
    pub fn mcx(self, controls: Vec<QubitId>, target: QubitId) -> Self {
        self.push(GateOp::mcx(controls, target))
    }

    /// Add controlled phase rotation
    pub fn cp(self, control: QubitId, target: QubitId, angle: Angle) -> Self {
        self.push(GateOp::controlled_phase(control, target, angle))
    }

    // ========================================================================
    // Layers
    // ========================================================================

    /// Hadamard on every qubit
    pub fn h_layer(mut self) -> Self {
        for q in 0..self.circuit.num_qubits() {
            self = self.h(q);
        }
        self
    }

    /// Pauli-X on every qubit
    pub fn x_layer(mut self) -> Self {
        for q in 0..self.circuit.num_qubits() {
            self = self.x(q);
        }
        self
    }

    // ========================================================================
    // Composition and Measurement
    // ========================================================================

    /// Compose a sub-circuit through a qubit mapping
    pub fn compose(mut self, sub: &Circuit, mapping: &[QubitId]) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.circuit.compose(sub, mapping) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Mark all qubits for sampling
    pub fn measure_all(mut self) -> Self {
        self.circuit.measure_all();
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Finalize and return the circuit, or the first deferred error
    pub fn build(mut self) -> QvecResult<Circuit> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.circuit.finalize();
        Ok(self.circuit)
    }

    /// Return the circuit unfinalized, for use as a composable block
    pub fn into_block(self) -> QvecResult<Circuit> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Ok(self.circuit)
    }

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.circuit.num_qubits()
    }
}

// ============================================================================
// Tests
// ============================================================================
