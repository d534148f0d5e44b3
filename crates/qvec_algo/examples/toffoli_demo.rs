//! MCX with two controls acting as a Toffoli gate.
//!
//! Qubits 0 and 1 are put in superposition, flipped, and used as
//! controls; qubit 2 flips only on the branch where both controls end
//! up 1.
//!
//! Run with: cargo run -p qvec_algo --example toffoli_demo

use qvec_backend::Simulator;
use qvec_core::prelude::*;

fn main() -> QvecResult<()> {
    let circuit = CircuitBuilder::new(3)
        .h(0)
        .h(1)
        .x(0)
        .x(1)
        .mcx(vec![0, 1], 2)
        .measure_all()
        .build()?;

    let state = Simulator::ideal().statevector(&circuit)?;
    println!("statevector before measurement:");
    for (index, amp) in state.amplitudes().iter().enumerate() {
        if amp.norm_sqr() > 1e-12 {
            println!("  |{index:03b}>: {:.4} {:+.4}i", amp.re, amp.im);
        }
    }

    let result = Simulator::ideal().with_seed(3).run(&circuit, sim::DEFAULT_SHOTS)?;
    println!("\ncounts over {} shots:", result.shots());
    for (outcome, count) in result.top_outcomes(8) {
        println!("  {outcome}: {count}");
    }

    Ok(())
}
