//! Gate library: canonical unitary matrices for the closed gate set
//!
//! Stateless and side-effect-free. Single-qubit kinds map to 2x2
//! matrices; controlled kinds expand to `2^(k+1) x 2^(k+1)` identities
//! whose final 2x2 block carries the target action. For X that expansion
//! is the identity with the final basis pair swapped, i.e. the MCX matrix.

use crate::gate::{GateKind, GateOp};
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

/// Dense square complex matrix, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Unitary {
    dim: usize,
    data: Vec<Complex64>,
}

impl Unitary {
    /// Build from row-major data. `data.len()` must equal `dim * dim`.
    pub fn from_rows(dim: usize, data: Vec<Complex64>) -> Self {
        debug_assert_eq!(data.len(), dim * dim);
        Self { dim, data }
    }

    /// Identity matrix of the given dimension
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![Complex64::new(0.0, 0.0); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        Self { dim, data }
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    /// Expand a single-qubit action into a k-controlled matrix: identity
    /// of dimension 2^(k+1) with the final 2x2 block (all controls 1)
    /// replaced by `base`. Control bits occupy the high sub-index bits.
    pub fn controlled(base: &Unitary, num_controls: usize) -> Self {
        debug_assert_eq!(base.dim, 2);
        let dim = 1 << (num_controls + 1);
        let mut m = Self::identity(dim);
        for r in 0..2 {
            for c in 0..2 {
                m.data[(dim - 2 + r) * dim + (dim - 2 + c)] = base.get(r, c);
            }
        }
        m
    }

    /// Check U * U^dagger = I within a tolerance (test helper)
    pub fn is_unitary(&self, tol: f64) -> bool {
        for r in 0..self.dim {
            for c in 0..self.dim {
                let mut acc = Complex64::new(0.0, 0.0);
                for k in 0..self.dim {
                    acc += self.get(r, k) * self.get(c, k).conj();
                }
                let expected = if r == c { 1.0 } else { 0.0 };
                if (acc.re - expected).abs() > tol || acc.im.abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

// ============================================================================
// Library Lookup
// ============================================================================

/// The 2x2 action a gate kind applies to its target qubit
pub fn base_unitary(kind: &GateKind) -> Unitary {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    match kind {
        GateKind::H => {
            let h = Complex64::new(FRAC_1_SQRT_2, 0.0);
            Unitary::from_rows(2, vec![h, h, h, -h])
        }
        // Cnot and Mcx are X on the target, gated by controls
        GateKind::X | GateKind::Cnot | GateKind::Mcx => {
            Unitary::from_rows(2, vec![zero, one, one, zero])
        }
        GateKind::Z => Unitary::from_rows(2, vec![one, zero, zero, -one]),
        GateKind::ControlledPhase(angle) => {
            let phase = Complex64::from_polar(1.0, *angle);
            Unitary::from_rows(2, vec![one, zero, zero, phase])
        }
    }
}

/// Full matrix of an operation including its controls: 2x2 for
/// uncontrolled single-qubit gates, 4x4 for CNOT and controlled phase,
/// 2^(k+1) x 2^(k+1) for a k-controlled MCX.
pub fn unitary_for(op: &GateOp) -> Unitary {
    let base = base_unitary(op.kind());
    if op.controls().is_empty() {
        base
    } else {
        Unitary::controlled(&base, op.controls().len())
    }
}

// ============================================================================
// Tests
// ============================================================================
