//! Circuit simulator
//!
//! Orchestrates state-vector evolution and shot sampling under an
//! optional noise model. Depolarizing noise is unraveled as Monte-Carlo
//! trajectories: after each ideal gate the simulator draws once against
//! the gate's error probability and, on a hit, perturbs the affected
//! qubits with a uniformly random non-identity Pauli string. With no
//! gate noise the state is evolved once and all shots are sampled from
//! the same analytic distribution; a model built with probability zero
//! everywhere takes that exact path, so it is bit-identical to the
//! noiseless simulator under the same seed.

use crate::execution::{RunMetadata, RunResult};
use crate::sampler;
use crate::state_vector::StateVector;
use qvec_core::{sim, Circuit, QubitId, QvecError, QvecResult};
use qvec_noise::NoiseModel;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// State-vector simulator with optional noise
#[derive(Debug, Clone)]
pub struct Simulator {
    noise: NoiseModel,
    qubit_limit: usize,
    seed: Option<u64>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::ideal()
    }
}

impl Simulator {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Noiseless simulator
    pub fn ideal() -> Self {
        Self::with_noise(NoiseModel::ideal())
    }

    /// Simulator with the given noise model
    pub fn with_noise(noise: NoiseModel) -> Self {
        Self {
            noise,
            qubit_limit: sim::DEFAULT_QUBIT_LIMIT,
            seed: None,
        }
    }

    /// Fix the RNG seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the register size admission limit
    pub fn with_qubit_limit(mut self, limit: usize) -> Self {
        self.qubit_limit = limit;
        self
    }

    /// The active noise model
    pub fn noise(&self) -> &NoiseModel {
        &self.noise
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Run a circuit from |00...0> and sample `shots` outcomes
    pub fn run(&self, circuit: &Circuit, shots: u64) -> QvecResult<RunResult> {
        self.admit(circuit, shots)?;
        self.sample(circuit, StateVector::zero(circuit.num_qubits()), shots)
    }

    /// Run a circuit from a caller-supplied initial state
    pub fn run_from(
        &self,
        circuit: &Circuit,
        initial: StateVector,
        shots: u64,
    ) -> QvecResult<RunResult> {
        self.admit(circuit, shots)?;
        self.check_initial(circuit, &initial)?;
        self.sample(circuit, initial, shots)
    }

    /// Evolve a circuit from |00...0> without noise or sampling
    pub fn statevector(&self, circuit: &Circuit) -> QvecResult<StateVector> {
        self.admit(circuit, 1)?;
        let mut state = StateVector::zero(circuit.num_qubits());
        Self::evolve_ideal(&mut state, circuit)?;
        Ok(state)
    }

    /// Evolve a circuit from a caller-supplied state without noise
    pub fn statevector_from(
        &self,
        circuit: &Circuit,
        mut initial: StateVector,
    ) -> QvecResult<StateVector> {
        self.admit(circuit, 1)?;
        self.check_initial(circuit, &initial)?;
        Self::evolve_ideal(&mut initial, circuit)?;
        Ok(initial)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn sample(&self, circuit: &Circuit, initial: StateVector, shots: u64) -> QvecResult<RunResult> {
        let num_qubits = circuit.num_qubits();
        let mut rng = self.make_rng();
        let mut drift = 0u64;

        let counts = if self.noise.has_gate_noise() {
            // One trajectory per shot: re-evolve with fresh noise draws
            let mut counts = qvec_core::Counts::new();
            for _ in 0..shots {
                let mut state = initial.clone();
                self.evolve_noisy(&mut state, circuit, &mut rng)?;
                drift += state.drift_corrections();
                let probs = state.probabilities();
                let outcome = sampler::sample_shot(&probs, num_qubits, &self.noise, &mut rng);
                *counts.entry(outcome).or_insert(0) += 1;
            }
            counts
        } else {
            // Analytic path: evolve once, sample every shot from it
            let mut state = initial;
            Self::evolve_ideal(&mut state, circuit)?;
            drift = state.drift_corrections();
            let probs = state.probabilities();
            sampler::sample_counts(&probs, num_qubits, shots, &self.noise, &mut rng)
        };

        Ok(RunResult::new(
            counts,
            shots,
            RunMetadata {
                seed: self.seed,
                noisy: self.noise.has_gate_noise() || self.noise.has_readout_noise(),
                drift_corrections: drift,
            },
        ))
    }

    fn evolve_ideal(state: &mut StateVector, circuit: &Circuit) -> QvecResult<()> {
        for op in circuit.ops() {
            state.apply(op)?;
        }
        state.renormalize_if_drifted();
        Ok(())
    }

    fn evolve_noisy<R: Rng>(
        &self,
        state: &mut StateVector,
        circuit: &Circuit,
        rng: &mut R,
    ) -> QvecResult<()> {
        for op in circuit.ops() {
            state.apply(op)?;
            let p = self.noise.gate_error(op.kind().name());
            // Short-circuit keeps p = 0 from consuming a draw
            if p > 0.0 && rng.gen::<f64>() < p {
                Self::apply_random_pauli(state, &op.qubits(), rng);
            }
        }
        state.renormalize_if_drifted();
        Ok(())
    }

    /// Uniformly random non-identity Pauli string on the given qubits.
    /// The 4^k - 1 candidates are indexed by base-4 digits, digit 0
    /// reserved for the all-identity string that is never drawn.
    fn apply_random_pauli<R: Rng>(state: &mut StateVector, qubits: &[QubitId], rng: &mut R) {
        let k = qubits.len();
        let r = rng.gen_range(1..(1usize << (2 * k)));
        for (i, &qubit) in qubits.iter().enumerate() {
            match (r >> (2 * i)) & 3 {
                1 => state.pauli_x(qubit),
                2 => state.pauli_y(qubit),
                3 => state.pauli_z(qubit),
                _ => {}
            }
        }
    }

    fn admit(&self, circuit: &Circuit, shots: u64) -> QvecResult<()> {
        if shots == 0 {
            return Err(QvecError::InvalidShots(shots));
        }
        if circuit.num_qubits() > self.qubit_limit {
            return Err(QvecError::QubitLimitExceeded {
                requested: circuit.num_qubits(),
                max: self.qubit_limit,
            });
        }
        Ok(())
    }

    fn check_initial(&self, circuit: &Circuit, initial: &StateVector) -> QvecResult<()> {
        if initial.num_qubits() != circuit.num_qubits() {
            return Err(QvecError::DimensionMismatch {
                expected: 1 << circuit.num_qubits(),
                got: initial.amplitudes().len(),
            });
        }
        Ok(())
    }

    fn make_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
