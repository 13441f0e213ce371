//! Backend capability descriptions.

use serde::{Deserialize, Serialize};

/// What a backend can execute.
///
/// Cached at backend construction time; [`crate::Backend::capabilities`]
/// returns a reference without I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Maximum circuit width.
    pub num_qubits: u32,
    /// Maximum shots per job.
    pub max_shots: u32,
    /// Whether the backend is a simulator.
    pub is_simulator: bool,
    /// Names of supported standard gates.
    pub supported_gates: Vec<String>,
    /// Whether opaque unitary blocks can be executed directly.
    pub supports_unitary_blocks: bool,
}

impl Capabilities {
    /// Capabilities of a statevector simulator with the given width.
    pub fn simulator(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            max_shots: 1_000_000,
            is_simulator: true,
            supported_gates: [
                "id", "x", "y", "z", "h", "s", "sdg", "t", "tdg", "cx", "cz", "swap", "ccx",
                "mcx",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            supports_unitary_blocks: true,
        }
    }

    /// Whether a standard gate with this name is supported.
    pub fn supports_gate(&self, name: &str) -> bool {
        self.supported_gates.iter().any(|g| g == name)
    }

    /// Whether a circuit of the given width fits.
    pub fn supports_width(&self, num_qubits: usize) -> bool {
        num_qubits <= self.num_qubits as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulator_capabilities() {
        let caps = Capabilities::simulator(20);
        assert!(caps.is_simulator);
        assert_eq!(caps.num_qubits, 20);
        assert!(caps.supports_gate("mcx"));
        assert!(!caps.supports_gate("rx"));
        assert!(caps.supports_width(20));
        assert!(!caps.supports_width(21));
        assert!(caps.supports_unitary_blocks);
    }
}
