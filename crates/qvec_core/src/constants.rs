//! Shared constants for qvec

/// Simulation constants
pub mod sim {
    /// Tolerance on the state-vector norm invariant (sum of squared
    /// amplitude magnitudes must stay within this distance of 1)
    pub const NORM_TOLERANCE: f64 = 1e-9;

    /// Default qubit ceiling: a register of n qubits costs 2^n complex
    /// amplitudes, so admission is checked up front
    pub const DEFAULT_QUBIT_LIMIT: usize = 24;

    /// Default shot count
    pub const DEFAULT_SHOTS: u64 = 1024;
}

/// Result analysis constants
pub mod analysis {
    /// Default number of ranked outcomes reported
    pub const DEFAULT_TOP_K: usize = 5;
}
