//! Quantum Fourier transform circuits
//!
//! Constructs the QFT as H plus controlled-phase cascades. Applied to a
//! normalized signal loaded as initial amplitudes, the output
//! probabilities are the squared DFT magnitudes, which makes the block
//! usable for spectral analysis of classical signals.

use qvec_core::prelude::*;
use std::f64::consts::PI;

/// QFT block on `n` qubits, |j> -> (1/sqrt(N)) sum_k e^{2 pi i jk / N} |k>.
///
/// Per qubit i from most significant down: H(i), then for each lower
/// qubit j a phase of pi / 2^(i-j) controlled by j targeting i. The
/// gate set has no primitive SWAP, so with `do_swaps` the trailing
/// bit-reversal network is realized as CNOT triples; without it the
/// outputs stay in bit-reversed index order and the caller tracks the
/// convention. Returned as an unfinalized composable block.
pub fn qft_circuit(n: usize, do_swaps: bool) -> QvecResult<Circuit> {
    let mut builder = CircuitBuilder::with_name(n, "qft");
    for i in (0..n).rev() {
        builder = builder.h(i);
        for j in (0..i).rev() {
            builder = builder.cp(j, i, PI / (1u64 << (i - j)) as f64);
        }
    }
    if do_swaps {
        for i in 0..n / 2 {
            builder = swap(builder, i, n - 1 - i);
        }
    }
    builder.into_block()
}

/// SWAP(a, b) as three CNOTs
fn swap(builder: CircuitBuilder, a: QubitId, b: QubitId) -> CircuitBuilder {
    builder.cnot(a, b).cnot(b, a).cnot(a, b)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use num_complex::Complex64;
    use qvec_backend::{Simulator, StateVector};

    fn evolve(circuit: &Circuit, initial: StateVector) -> StateVector {
        Simulator::ideal()
            .statevector_from(circuit, initial)
            .unwrap()
    }

    fn dft_probabilities(signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        (0..n)
            .map(|k| {
                let y: Complex64 = signal
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        Complex64::from_polar(x, 2.0 * PI * (j * k) as f64 / n as f64)
                    })
                    .sum();
                (y / (n as f64).sqrt()).norm_sqr()
            })
            .collect()
    }

    #[test]
    fn test_single_qubit_is_hadamard() {
        let qft = qft_circuit(1, true).unwrap();
        assert_eq!(qft.ops(), &[GateOp::h(0)]);
    }

    #[test]
    fn test_two_qubit_basis_state() {
        // QFT|01> = (1/2)(|00> + i|01> - |10> - i|11>)
        let qft = qft_circuit(2, true).unwrap();
        let mut initial = StateVector::zero(2);
        initial.apply(&GateOp::x(0)).unwrap();
        let sv = evolve(&qft, initial);

        let half = 0.5;
        let expected = [
            Complex64::new(half, 0.0),
            Complex64::new(0.0, half),
            Complex64::new(-half, 0.0),
            Complex64::new(0.0, -half),
        ];
        for (amp, want) in sv.amplitudes().iter().zip(&expected) {
            assert_relative_eq!(amp.re, want.re, epsilon = 1e-12);
            assert_relative_eq!(amp.im, want.im, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matches_direct_dft() {
        let raw = [2.2, 0.0, 1.4, 0.9, 0.4, 0.6, 0.0, 0.9];
        let norm: f64 = raw.iter().map(|x| x * x).sum::<f64>().sqrt();
        let signal: Vec<f64> = raw.iter().map(|x| x / norm).collect();

        let qft = qft_circuit(3, true).unwrap();
        let initial = StateVector::from_real_signal(&signal).unwrap();
        let probs = evolve(&qft, initial).probabilities();

        for (p, want) in probs.iter().zip(dft_probabilities(&signal)) {
            assert_relative_eq!(*p, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_no_swaps_is_bit_reversed() {
        let raw = [0.1, 0.5, 0.3, 0.2, 0.4, 0.1, 0.6, 0.2];
        let norm: f64 = raw.iter().map(|x| x * x).sum::<f64>().sqrt();
        let signal: Vec<f64> = raw.iter().map(|x| x / norm).collect();

        let with_swaps = evolve(
            &qft_circuit(3, true).unwrap(),
            StateVector::from_real_signal(&signal).unwrap(),
        )
        .probabilities();
        let without = evolve(
            &qft_circuit(3, false).unwrap(),
            StateVector::from_real_signal(&signal).unwrap(),
        )
        .probabilities();

        let reverse3 = |k: usize| ((k & 1) << 2) | (k & 2) | (k >> 2);
        for k in 0..8 {
            assert_relative_eq!(without[reverse3(k)], with_swaps[k], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_complex_tone_concentrates() {
        // x_j = e^{-2 pi i j k0 / N} / sqrt(N) transforms to exactly |k0>
        let n = 3;
        let size = 1 << n;
        let k0 = 5;
        let amps: Vec<Complex64> = (0..size)
            .map(|j| {
                Complex64::from_polar(
                    1.0 / (size as f64).sqrt(),
                    -2.0 * PI * (j * k0) as f64 / size as f64,
                )
            })
            .collect();

        let sv = evolve(
            &qft_circuit(n, true).unwrap(),
            StateVector::from_amplitudes(amps).unwrap(),
        );
        let probs = sv.probabilities();
        assert_relative_eq!(probs[k0], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_block_is_composable() {
        let qft = qft_circuit(2, false).unwrap();
        assert!(!qft.is_finalized());
        let circuit = CircuitBuilder::new(4)
            .compose(&qft, &[1, 3])
            .build()
            .unwrap();
        assert_eq!(circuit.gate_count(), qft.gate_count());
    }
}
