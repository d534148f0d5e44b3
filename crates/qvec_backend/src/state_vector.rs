//! State-vector engine for qvec
//!
//! A register of n qubits is a 2^n complex amplitude vector; qubit q is
//! bit q of the basis index. Gates are applied through coset-indexed
//! local updates: for a k-target gate the 2^n indices split into 2^(n-k)
//! cosets that agree on every bit except the target bits, and each coset
//! is gathered, left-multiplied by the gate unitary, and scattered back.
//! Controlled operations restrict the update to cosets whose control
//! bits are all 1. Every application is O(2^n) regardless of arity; the
//! full 2^n x 2^n operator is never materialized.

use num_complex::Complex64;
use qvec_core::{base_unitary, sim, GateKind, GateOp, QubitId, QvecError, QvecResult, Unitary};

/// Complex amplitude vector over the computational basis
#[derive(Debug, Clone)]
pub struct StateVector {
    num_qubits: usize,
    amps: Vec<Complex64>,
    drift_corrections: u64,
}

impl StateVector {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// The |00...0> state on `num_qubits` qubits
    pub fn zero(num_qubits: usize) -> Self {
        let mut amps = vec![Complex64::new(0.0, 0.0); 1 << num_qubits];
        amps[0] = Complex64::new(1.0, 0.0);
        Self {
            num_qubits,
            amps,
            drift_corrections: 0,
        }
    }

    /// Load an arbitrary pre-normalized amplitude vector. The length
    /// must be a power of two >= 2 and the squared norm within
    /// `sim::NORM_TOLERANCE` of 1.
    pub fn from_amplitudes(amps: Vec<Complex64>) -> QvecResult<Self> {
        let len = amps.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(QvecError::InvalidAmplitudes(len));
        }
        let norm_sq: f64 = amps.iter().map(|a| a.norm_sqr()).sum();
        if (norm_sq - 1.0).abs() > sim::NORM_TOLERANCE {
            return Err(QvecError::NotNormalized(norm_sq));
        }
        Ok(Self {
            num_qubits: len.trailing_zeros() as usize,
            amps,
            drift_corrections: 0,
        })
    }

    /// Load a normalized real-valued signal as initial amplitudes
    pub fn from_real_signal(signal: &[f64]) -> QvecResult<Self> {
        Self::from_amplitudes(signal.iter().map(|&x| Complex64::new(x, 0.0)).collect())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitudes over the computational basis
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amps
    }

    /// Measurement probability per basis index
    pub fn probabilities(&self) -> Vec<f64> {
        self.amps.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Squared L2 norm (1 up to floating drift)
    pub fn norm_squared(&self) -> f64 {
        self.amps.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Number of drift corrections applied so far
    pub fn drift_corrections(&self) -> u64 {
        self.drift_corrections
    }

    // ========================================================================
    // Gate Application
    // ========================================================================

    /// Apply one gate operation
    pub fn apply(&mut self, op: &GateOp) -> QvecResult<()> {
        self.validate_qubits(op.targets(), op.controls())?;
        match op.kind() {
            // MCX reduces to a conditional amplitude-pair swap
            GateKind::Mcx => {
                self.apply_mcx(op.controls(), op.targets()[0]);
                Ok(())
            }
            // Controlled phase is diagonal: a single multiply per index
            GateKind::ControlledPhase(angle) => {
                self.apply_controlled_phase(op.controls()[0], op.targets()[0], *angle);
                Ok(())
            }
            // Everything else goes through the coset update with the
            // library's 2x2 target action, restricted by the controls
            _ => self.apply_unitary(&base_unitary(op.kind()), op.targets(), op.controls()),
        }
    }

    /// Coset-indexed application of a k-target unitary, restricted to
    /// cosets whose control bits are all 1.
    pub fn apply_unitary(
        &mut self,
        unitary: &Unitary,
        targets: &[QubitId],
        controls: &[QubitId],
    ) -> QvecResult<()> {
        self.validate_qubits(targets, controls)?;
        let k = targets.len();
        let block = 1usize << k;
        if unitary.dim() != block {
            return Err(QvecError::DimensionMismatch {
                expected: block,
                got: unitary.dim(),
            });
        }

        let target_mask: usize = targets.iter().map(|&t| 1usize << t).sum();
        let control_mask: usize = controls.iter().map(|&c| 1usize << c).sum();

        // Sub-index j addresses targets in order: bit b of j is target b
        let index_of = |base: usize, j: usize| -> usize {
            let mut idx = base;
            for (b, &t) in targets.iter().enumerate() {
                if j & (1 << b) != 0 {
                    idx |= 1 << t;
                }
            }
            idx
        };

        let mut gathered = vec![Complex64::new(0.0, 0.0); block];
        for base in 0..self.amps.len() {
            // One representative per coset: all target bits clear
            if base & target_mask != 0 {
                continue;
            }
            // Control-unsatisfied cosets pass through unchanged
            if base & control_mask != control_mask {
                continue;
            }
            for (j, slot) in gathered.iter_mut().enumerate() {
                *slot = self.amps[index_of(base, j)];
            }
            for r in 0..block {
                let mut acc = Complex64::new(0.0, 0.0);
                for (c, &amp) in gathered.iter().enumerate() {
                    acc += unitary.get(r, c) * amp;
                }
                self.amps[index_of(base, r)] = acc;
            }
        }
        Ok(())
    }

    fn apply_mcx(&mut self, controls: &[QubitId], target: QubitId) {
        let control_mask: usize = controls.iter().map(|&c| 1usize << c).sum();
        let target_mask = 1usize << target;
        for i in 0..self.amps.len() {
            if i & control_mask == control_mask && i & target_mask == 0 {
                self.amps.swap(i, i | target_mask);
            }
        }
    }

    fn apply_controlled_phase(&mut self, control: QubitId, target: QubitId, angle: f64) {
        let phase = Complex64::from_polar(1.0, angle);
        let mask = (1usize << control) | (1usize << target);
        for (i, amp) in self.amps.iter_mut().enumerate() {
            if i & mask == mask {
                *amp *= phase;
            }
        }
    }

    // ========================================================================
    // Pauli Perturbations (noise channel support)
    // ========================================================================

    /// Pauli-X on one qubit
    pub fn pauli_x(&mut self, qubit: QubitId) {
        self.for_each_pair(qubit, |a, b| (b, a));
    }

    /// Pauli-Y on one qubit
    pub fn pauli_y(&mut self, qubit: QubitId) {
        self.for_each_pair(qubit, |a, b| {
            (b * Complex64::new(0.0, -1.0), a * Complex64::new(0.0, 1.0))
        });
    }

    /// Pauli-Z on one qubit
    pub fn pauli_z(&mut self, qubit: QubitId) {
        self.for_each_pair(qubit, |a, b| (a, -b));
    }

    fn for_each_pair<F>(&mut self, qubit: QubitId, f: F)
    where
        F: Fn(Complex64, Complex64) -> (Complex64, Complex64),
    {
        debug_assert!(qubit < self.num_qubits);
        let mask = 1usize << qubit;
        for i in 0..self.amps.len() {
            if i & mask == 0 {
                let j = i | mask;
                let (new_i, new_j) = f(self.amps[i], self.amps[j]);
                self.amps[i] = new_i;
                self.amps[j] = new_j;
            }
        }
    }

    // ========================================================================
    // Drift Correction
    // ========================================================================

    /// Renormalize if accumulated floating drift moved the squared norm
    /// further than `sim::NORM_TOLERANCE` from 1. Self-healing, never an
    /// error; returns whether a correction was applied.
    pub fn renormalize_if_drifted(&mut self) -> bool {
        let norm_sq = self.norm_squared();
        if (norm_sq - 1.0).abs() <= sim::NORM_TOLERANCE {
            return false;
        }
        let inv = 1.0 / norm_sq.sqrt();
        for amp in &mut self.amps {
            *amp *= inv;
        }
        self.drift_corrections += 1;
        true
    }

    fn validate_qubits(&self, targets: &[QubitId], controls: &[QubitId]) -> QvecResult<()> {
        let mut seen = vec![false; self.num_qubits];
        for &q in targets.iter().chain(controls) {
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
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
