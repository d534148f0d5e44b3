//! Spectral analysis of a windowed activity signal via the QFT.
//!
//! A 90-sample weighted event stream is compressed into 8 bins,
//! L2-normalized, loaded as initial amplitudes, and Fourier-transformed.
//! The analytic spectrum is printed without the trailing swap network
//! (bit-reversed bin order), then a measured run with swaps samples the
//! same spectrum as a histogram.
//!
//! Run with: cargo run -p qvec_algo --example qft_spectrum

use qvec_algo::qft_circuit;
use qvec_backend::{Simulator, StateVector};
use qvec_core::QvecResult;

const BINS: usize = 8;

fn windowed_signal() -> Vec<f64> {
    // (sample index, weight) event stream over 90 samples
    let events = [
        (6, 0.9),
        (7, 0.3),
        (10, 1.0),
        (26, 0.4),
        (27, 1.0),
        (43, 0.9),
        (46, 0.4),
        (55, 0.6),
        (79, 0.9),
    ];
    // 11-sample windows, 8 bins covering the stream
    let mut bins = vec![0.0; BINS];
    for (t, weight) in events {
        bins[(t / 11).min(BINS - 1)] += weight;
    }
    bins
}

fn normalize(signal: &[f64]) -> Vec<f64> {
    let norm: f64 = signal.iter().map(|x| x * x).sum::<f64>().sqrt();
    signal.iter().map(|x| x / norm).collect()
}

fn main() -> QvecResult<()> {
    let signal = normalize(&windowed_signal());
    println!("normalized signal: {signal:.4?}\n");

    // Analytic spectrum, bit-reversed bin order
    let block = qft_circuit(3, false)?;
    let state = Simulator::ideal().statevector_from(&block, StateVector::from_real_signal(&signal)?)?;
    println!("analytic spectrum (bit-reversed order):");
    for (index, p) in state.probabilities().iter().enumerate() {
        println!("  bin {index:03b}: {p:.4} {}", "#".repeat((p * 40.0) as usize));
    }

    // Sampled spectrum with the swap network, natural order
    let mut circuit = qft_circuit(3, true)?;
    circuit.measure_all();
    circuit.finalize();
    let result = Simulator::ideal()
        .with_seed(7)
        .run_from(&circuit, StateVector::from_real_signal(&signal)?, 1024)?;

    println!("\nsampled spectrum, {} shots:", result.shots());
    for (outcome, count) in result.top_outcomes(BINS) {
        println!("  bin {outcome}: {count}");
    }

    Ok(())
}
