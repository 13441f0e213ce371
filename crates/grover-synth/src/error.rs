//! Error types for circuit synthesis.
//!
//! Two classes of failure exist. Invalid arguments are rejected during
//! validation, before any construction starts, and always pass through
//! unwrapped. Everything that goes wrong after validation is a
//! construction failure and wraps the underlying IR error as its cause.

use grover_ir::IrError;
use thiserror::Error;

/// Errors produced by Grover circuit synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Qubit count must be a positive integer.
    #[error("qubit count must be at least 1, got {0}")]
    InvalidQubitCount(u32),

    /// The dense oracle matrix makes large search spaces impractical.
    #[error("qubit count {got} exceeds the dense-oracle limit of {max} qubits")]
    QubitCountExceedsLimit {
        /// The requested qubit count.
        got: u32,
        /// The largest supported qubit count.
        max: u32,
    },

    /// At least one marked index is required.
    #[error("solution list is empty, at least one marked index is required")]
    EmptySolutions,

    /// A marked index falls outside the search space.
    #[error("solution index {index} is outside [0, {max}] for a {num_qubits}-qubit search space")]
    SolutionOutOfRange {
        /// The offending index.
        index: u64,
        /// The largest valid index (2^n - 1).
        max: u64,
        /// The qubit count defining the space.
        num_qubits: u32,
    },

    /// Construction failed after validation passed. The IR-level cause is
    /// preserved.
    #[error("circuit construction failed: {0}")]
    Construction(#[from] IrError),
}

impl SynthError {
    /// Whether this error was raised by input validation (as opposed to a
    /// failure while constructing the circuit).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, SynthError::Construction(_))
    }
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
