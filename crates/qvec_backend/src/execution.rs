//! Run results and outcome analysis
//!
//! A finished run is an outcome histogram plus metadata describing how
//! it was produced. Analysis helpers turn the histogram into empirical
//! probabilities and ranked outcome lists.

use qvec_core::Counts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a run was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMetadata {
    /// Seed the RNG was started from, if fixed
    pub seed: Option<u64>,

    /// Whether any gate or readout noise was active
    pub noisy: bool,

    /// Number of numerical drift corrections applied during evolution
    pub drift_corrections: u64,
}

/// Outcome histogram from a sampled run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    counts: Counts,
    shots: u64,
    metadata: RunMetadata,
}

impl RunResult {
    pub(crate) fn new(counts: Counts, shots: u64, metadata: RunMetadata) -> Self {
        Self {
            counts,
            shots,
            metadata,
        }
    }

    /// Outcome histogram keyed by bitstring
    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Number of shots requested
    pub fn shots(&self) -> u64 {
        self.shots
    }

    /// Run provenance
    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    /// Sum over the histogram (equals `shots` for any completed run)
    pub fn total_counts(&self) -> u64 {
        self.counts.values().sum()
    }

    // ========================================================================
    // Analysis
    // ========================================================================

    /// Empirical probability of one outcome
    pub fn probability(&self, outcome: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(outcome).copied().unwrap_or(0) as f64 / self.shots as f64
    }

    /// Empirical probability of hitting a search target
    pub fn success_probability(&self, target: &str) -> f64 {
        self.probability(target)
    }

    /// Most frequent outcome. Ties break toward the lexicographically
    /// smaller bitstring.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .map(|(k, &v)| (k.as_str(), v))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }

    /// The `k` most frequent outcomes, count descending, ties broken by
    /// bitstring ascending
    pub fn top_outcomes(&self, k: usize) -> Vec<(String, u64)> {
        let mut ranked: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(key, &count)| (key.clone(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(k);
        ranked
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RunResult({} shots, {} distinct outcomes",
            self.shots,
            self.counts.len()
        )?;
        if let Some((outcome, count)) = self.most_frequent() {
            write!(f, ", mode {} x{}", outcome, count)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn result_from(pairs: &[(&str, u64)]) -> RunResult {
        let counts: Counts = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        let shots = counts.values().sum();
        RunResult::new(
            counts,
            shots,
            RunMetadata {
                seed: Some(0),
                noisy: false,
                drift_corrections: 0,
            },
        )
    }

    #[test]
    fn test_probability() {
        let result = result_from(&[("00", 250), ("11", 750)]);
        assert!((result.probability("11") - 0.75).abs() < 1e-12);
        assert!((result.probability("00") - 0.25).abs() < 1e-12);
        assert_eq!(result.probability("01"), 0.0);
        assert_eq!(result.total_counts(), 1000);
    }

    #[test]
    fn test_most_frequent() {
        let result = result_from(&[("1010", 900), ("0000", 50), ("1111", 50)]);
        assert_eq!(result.most_frequent(), Some(("1010", 900)));
    }

    #[test]
    fn test_most_frequent_tie_breaks_ascending() {
        let result = result_from(&[("11", 100), ("00", 100), ("01", 50)]);
        assert_eq!(result.most_frequent(), Some(("00", 100)));
    }

    #[test]
    fn test_top_outcomes_ranking() {
        let result = result_from(&[
            ("0001", 10),
            ("0010", 40),
            ("0100", 40),
            ("1000", 200),
            ("1111", 5),
            ("0000", 1),
        ]);
        let top = result.top_outcomes(5);
        assert_eq!(
            top,
            vec![
                ("1000".to_string(), 200),
                ("0010".to_string(), 40),
                ("0100".to_string(), 40),
                ("0001".to_string(), 10),
                ("1111".to_string(), 5),
            ]
        );
    }

    #[test]
    fn test_top_outcomes_shorter_than_k() {
        let result = result_from(&[("0", 3), ("1", 7)]);
        let top = result.top_outcomes(5);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "1");
    }

    #[test]
    fn test_empty_result() {
        let result = RunResult::new(
            Counts::new(),
            0,
            RunMetadata {
                seed: None,
                noisy: false,
                drift_corrections: 0,
            },
        );
        assert_eq!(result.most_frequent(), None);
        assert_eq!(result.probability("0"), 0.0);
        assert!(result.top_outcomes(5).is_empty());
    }
}
