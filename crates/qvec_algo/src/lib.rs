//! # qvec Algorithms
//!
//! Circuit constructors for Grover search and the quantum Fourier
//! transform, built purely on the qvec circuit model. Constructors
//! return composable blocks or finalized circuits; execution belongs to
//! the backend.
//!
//! ## Quick Start
//!
//! ```rust
//! use qvec_algo::grover;
//!
//! let iterations = grover::optimal_iterations(4);
//! let circuit = grover::search_circuit("1010", iterations).unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// ============================================================================
// Module Declarations
// ============================================================================

/// Grover search circuits
pub mod grover;

/// Quantum Fourier transform circuits
pub mod qft;

pub use qft::qft_circuit;

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{grover, qft};
    use approx::assert_relative_eq;
    use qvec_backend::{Simulator, StateVector};
    use qvec_noise::{NoiseModel, ReadoutError};

    #[test]
    fn test_grover_success_follows_closed_form() {
        // p(j) = sin^2((2j+1) * asin(2^(-n/2))) for n = 4: rises to the
        // optimum at 3 iterations, then falls
        let n = 4;
        let theta = (0.25f64).asin();
        for j in 0..=8u64 {
            let circuit = grover::search_circuit("1010", j).unwrap();
            let sv = Simulator::ideal().statevector(&circuit).unwrap();
            let p = sv.probabilities()[0b1010];
            let expected = ((2 * j + 1) as f64 * theta).sin().powi(2);
            assert_relative_eq!(p, expected, epsilon = 1e-9);
        }
        assert_eq!(grover::optimal_iterations(n), 3);
    }

    #[test]
    fn test_grover_sampled_run() {
        let circuit = grover::search_circuit("1010", 3).unwrap();
        let result = Simulator::ideal().with_seed(42).run(&circuit, 2048).unwrap();
        assert_eq!(result.total_counts(), 2048);
        assert!(result.success_probability("1010") > 0.9);
        assert_eq!(result.most_frequent().map(|(k, _)| k), Some("1010"));
    }

    #[test]
    fn test_grover_survives_moderate_noise() {
        let circuit = grover::search_circuit("1010", 3).unwrap();
        let noise = NoiseModel::depolarizing(0.02)
            .unwrap()
            .with_readout_error(ReadoutError::symmetric(0.02).unwrap());
        let result = Simulator::with_noise(noise)
            .with_seed(42)
            .run(&circuit, 2048)
            .unwrap();

        // Heavily degraded (the circuit has ~80 noisy gates) but the
        // secret still dominates the uniform error floor
        let p = result.success_probability("1010");
        assert!(p < 0.9, "noise had no effect: p = {p}");
        assert!(p > 0.1, "noise overwhelmed the search: p = {p}");
        assert_eq!(result.most_frequent().map(|(k, _)| k), Some("1010"));
        assert!(result.top_outcomes(5).len() > 1);
    }

    #[test]
    fn test_qft_spectrum_peak() {
        // The windowed activity signal peaks at the zero-frequency bin
        let raw = [2.2, 0.0, 1.4, 0.9, 0.4, 0.6, 0.0, 0.9];
        let norm: f64 = raw.iter().map(|x| x * x).sum::<f64>().sqrt();
        let signal: Vec<f64> = raw.iter().map(|x| x / norm).collect();

        let block = qft::qft_circuit(3, true).unwrap();
        let initial = StateVector::from_real_signal(&signal).unwrap();
        let probs = Simulator::ideal()
            .statevector_from(&block, initial)
            .unwrap()
            .probabilities();

        let peak = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k);
        assert_eq!(peak, Some(0));
        assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_qft_sampled_histogram() {
        let raw = [2.2, 0.0, 1.4, 0.9, 0.4, 0.6, 0.0, 0.9];
        let norm: f64 = raw.iter().map(|x| x * x).sum::<f64>().sqrt();
        let signal: Vec<f64> = raw.iter().map(|x| x / norm).collect();

        let mut circuit = qft::qft_circuit(3, true).unwrap();
        circuit.measure_all();
        circuit.finalize();

        let initial = StateVector::from_real_signal(&signal).unwrap();
        let result = Simulator::ideal()
            .with_seed(7)
            .run_from(&circuit, initial, 1024)
            .unwrap();
        assert_eq!(result.total_counts(), 1024);
        assert_eq!(result.most_frequent().map(|(k, _)| k), Some("000"));
    }
}
