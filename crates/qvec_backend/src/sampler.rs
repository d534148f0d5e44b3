//! Measurement sampler
//!
//! Converts a probability vector into shot outcomes. Each shot draws one
//! uniform variate, walks the cumulative distribution to pick a basis
//! index, pushes the index through the readout error channel, and
//! renders it as a bitstring. Qubit 0 is the least significant bit, so
//! it appears as the rightmost character.

use qvec_core::Counts;
use qvec_noise::NoiseModel;
use rand::Rng;

/// Draw one basis index from a probability vector.
///
/// The cumulative sum may fall short of 1 by floating drift; a draw past
/// the end lands on the last index.
pub fn sample_index<R: Rng>(probs: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.gen();
    let mut acc = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        acc += p;
        if r < acc {
            return i;
        }
    }
    probs.len() - 1
}

/// Render a basis index as a bitstring of `num_qubits` characters
pub fn index_to_bitstring(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

/// Push a measured index through the readout error channel. Each qubit
/// with a configured readout error is flipped independently, in qubit
/// order, with the probability matching its true bit value.
pub fn apply_readout<R: Rng>(
    mut index: usize,
    num_qubits: usize,
    noise: &NoiseModel,
    rng: &mut R,
) -> usize {
    for qubit in 0..num_qubits {
        if let Some(readout) = noise.readout_for(qubit) {
            let bit = (index >> qubit) & 1 == 1;
            if rng.gen::<f64>() < readout.flip_probability(bit) {
                index ^= 1 << qubit;
            }
        }
    }
    index
}

/// One full shot: index draw, readout channel, bitstring rendering
pub fn sample_shot<R: Rng>(
    probs: &[f64],
    num_qubits: usize,
    noise: &NoiseModel,
    rng: &mut R,
) -> String {
    let index = sample_index(probs, rng);
    let index = apply_readout(index, num_qubits, noise, rng);
    index_to_bitstring(index, num_qubits)
}

/// Repeat `shots` draws over a fixed probability vector and accumulate
/// an outcome histogram
pub fn sample_counts<R: Rng>(
    probs: &[f64],
    num_qubits: usize,
    shots: u64,
    noise: &NoiseModel,
    rng: &mut R,
) -> Counts {
    let mut counts = Counts::new();
    for _ in 0..shots {
        let outcome = sample_shot(probs, num_qubits, noise, rng);
        *counts.entry(outcome).or_insert(0) += 1;
    }
    counts
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use qvec_noise::ReadoutError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_index_to_bitstring_qubit_order() {
        // Index 10 = 0b1010: qubit 0 (LSB) is the rightmost character
        assert_eq!(index_to_bitstring(10, 4), "1010");
        assert_eq!(index_to_bitstring(1, 4), "0001");
        assert_eq!(index_to_bitstring(0, 3), "000");
    }

    #[test]
    fn test_sample_index_degenerate() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let probs = [0.0, 0.0, 1.0, 0.0];
        for _ in 0..100 {
            assert_eq!(sample_index(&probs, &mut rng), 2);
        }
    }

    #[test]
    fn test_sample_index_short_cumulative_lands_last() {
        // Mass slightly below 1: draws past the end fall on the last index
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let probs = [0.0, 0.0];
        assert_eq!(sample_index(&probs, &mut rng), 1);
    }

    #[test]
    fn test_sample_index_approximates_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let probs = [0.25, 0.75];
        let trials = 20_000;
        let ones = (0..trials)
            .filter(|_| sample_index(&probs, &mut rng) == 1)
            .count();
        let frac = ones as f64 / trials as f64;
        assert!((frac - 0.75).abs() < 0.02, "fraction {frac}");
    }

    #[test]
    fn test_readout_certain_flip() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let noise =
            NoiseModel::ideal().with_readout_error(ReadoutError::symmetric(1.0).unwrap());
        // Every bit flips with certainty
        assert_eq!(apply_readout(0b101, 3, &noise, &mut rng), 0b010);
    }

    #[test]
    fn test_readout_absent_is_identity() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let noise = NoiseModel::ideal();
        assert_eq!(apply_readout(0b101, 3, &noise, &mut rng), 0b101);
    }

    #[test]
    fn test_readout_asymmetric() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        // Only 1 -> 0 flips are possible
        let noise =
            NoiseModel::ideal().with_readout_error(ReadoutError::new(0.0, 1.0).unwrap());
        assert_eq!(apply_readout(0b11, 2, &noise, &mut rng), 0b00);
        assert_eq!(apply_readout(0b00, 2, &noise, &mut rng), 0b00);
    }

    #[test]
    fn test_sample_counts_total() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let probs = [0.5, 0.0, 0.0, 0.5];
        let counts = sample_counts(&probs, 2, 500, &NoiseModel::ideal(), &mut rng);
        let total: u64 = counts.values().sum();
        assert_eq!(total, 500);
        for key in counts.keys() {
            assert!(key == "00" || key == "11", "unexpected outcome {key}");
        }
    }
}
