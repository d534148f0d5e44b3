//! Grover search circuits
//!
//! Circuit constructors for amplitude-amplification search over an
//! n-bit secret: a phase oracle marking the secret basis state, the
//! inversion-about-the-mean diffuser, and the full search circuit that
//! interleaves them for a chosen number of iterations.

use qvec_core::prelude::*;
use std::f64::consts::FRAC_PI_4;

/// Phase oracle flipping the sign of exactly the secret state.
///
/// X gates map the secret onto |11...1>, an H / MCX / H sandwich on the
/// last qubit turns the multi-controlled X into a controlled-Z, and the
/// X gates are undone. Returned as an unfinalized composable block.
pub fn marking_oracle(secret: &Bitstring) -> QvecResult<Circuit> {
    let n = secret.len();
    let mut builder = CircuitBuilder::with_name(n, "oracle");
    for qubit in 0..n {
        if !secret.qubit_bit(qubit) {
            builder = builder.x(qubit);
        }
    }
    builder = builder
        .h(n - 1)
        .mcx((0..n - 1).collect(), n - 1)
        .h(n - 1);
    for qubit in 0..n {
        if !secret.qubit_bit(qubit) {
            builder = builder.x(qubit);
        }
    }
    builder.into_block()
}

/// Legacy per-bit oracle: Z on each qubit whose secret bit is 1.
///
/// Flips the phase of every state with odd overlap against the secret,
/// not just the secret itself, so amplification only isolates the
/// secret in special cases (for instance a single set bit). Kept for
/// comparison against [`marking_oracle`].
pub fn phase_flip_oracle(secret: &Bitstring) -> QvecResult<Circuit> {
    let n = secret.len();
    let mut builder = CircuitBuilder::with_name(n, "phase-flip-oracle");
    for qubit in 0..n {
        if secret.qubit_bit(qubit) {
            builder = builder.z(qubit);
        }
    }
    builder.into_block()
}

/// Inversion-about-the-mean diffuser on `n` qubits
pub fn diffuser(n: usize) -> QvecResult<Circuit> {
    if n == 0 {
        return Err(QvecError::QubitOutOfRange {
            qubit: 0,
            num_qubits: 0,
        });
    }
    CircuitBuilder::with_name(n, "diffuser")
        .h_layer()
        .x_layer()
        .h(n - 1)
        .mcx((0..n - 1).collect(), n - 1)
        .h(n - 1)
        .x_layer()
        .h_layer()
        .into_block()
}

/// Iteration count maximizing success probability: round((pi/4) * sqrt(2^n))
pub fn optimal_iterations(num_qubits: usize) -> u64 {
    (FRAC_PI_4 * ((1u64 << num_qubits) as f64).sqrt()).round() as u64
}

/// Full search circuit: uniform superposition, `iterations` repetitions
/// of oracle then diffuser, measured and finalized. The secret is
/// validated before any circuit is built.
pub fn search_circuit(secret: &str, iterations: u64) -> QvecResult<Circuit> {
    let secret = Bitstring::parse(secret)?;
    let n = secret.len();
    let oracle = marking_oracle(&secret)?;
    let diffuser = diffuser(n)?;
    let identity: Vec<QubitId> = (0..n).collect();

    let mut builder = CircuitBuilder::with_name(n, "grover").h_layer();
    for _ in 0..iterations {
        builder = builder
            .compose(&oracle, &identity)
            .compose(&diffuser, &identity);
    }
    builder.measure_all().build()
}

// ============================================================================
// Tests
// ============================================================================
