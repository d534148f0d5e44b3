//! Grover search over a 4-bit secret, noiseless and noisy.
//!
//! Run with: cargo run -p qvec_algo --example grover_demo

use qvec_algo::grover;
use qvec_backend::{RunResult, Simulator};
use qvec_core::{analysis, QvecResult};
use qvec_noise::{NoiseModel, ReadoutError};

const SECRET: &str = "1010";
const SHOTS: u64 = 2048;

fn report(label: &str, result: &RunResult) {
    println!("--- {label} ---");
    println!("success probability for {SECRET}: {:.4}", result.success_probability(SECRET));
    println!("top outcomes:");
    for (outcome, count) in result.top_outcomes(analysis::DEFAULT_TOP_K) {
        println!("  {outcome}: {count}");
    }
    println!();
}

fn main() -> QvecResult<()> {
    let n = SECRET.len();
    let iterations = grover::optimal_iterations(n);
    println!("secret {SECRET}, {n} qubits, {iterations} iterations, {SHOTS} shots\n");

    let circuit = grover::search_circuit(SECRET, iterations)?;

    let ideal = Simulator::ideal().with_seed(42).run(&circuit, SHOTS)?;
    report("noiseless", &ideal);

    let noise = NoiseModel::depolarizing(0.02)?
        .with_readout_error(ReadoutError::symmetric(0.02)?);
    let noisy = Simulator::with_noise(noise).with_seed(42).run(&circuit, SHOTS)?;
    report("depolarizing 2% + readout 2%", &noisy);

    Ok(())
}
