//! Execution results and measurement histograms.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Histogram of measured bitstrings.
///
/// Bitstring convention: classical bit 0 is the rightmost character, so
/// the integer value of a bitstring equals the measured basis-state
/// index ("01" on two qubits is state 1).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add occurrences of a bitstring, accumulating with existing counts.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Occurrences of a bitstring (0 when never measured).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Total occurrences across all bitstrings.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct bitstrings observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcome was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (bitstring, count) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The most frequent outcome, ties broken by bitstring order so the
    /// result is deterministic.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Empirical probability of a single bitstring.
    pub fn probability(&self, bitstring: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(bitstring) as f64 / total as f64
    }

    /// Combined empirical probability of a set of bitstrings.
    pub fn combined_probability<'a>(&self, bitstrings: impl IntoIterator<Item = &'a str>) -> f64 {
        bitstrings
            .into_iter()
            .map(|bits| self.probability(bits))
            .sum()
    }

    /// All outcomes sorted by descending count, ties by bitstring order.
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bits, count) in iter {
            counts.insert(bits, count);
        }
        counts
    }
}

/// The outcome of executing a circuit on a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement histogram.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if the backend reports
    /// it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result from a histogram and shot count.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
