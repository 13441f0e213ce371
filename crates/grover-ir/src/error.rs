//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit:?} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit not found in circuit.
    #[error("Classical bit {clbit:?} not found in circuit{}", format_gate_context(.gate_name))]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit:?} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Unitary block matrix has the wrong number of entries.
    #[error("Unitary '{gate_name}' expects a matrix of {expected} entries, got {got}")]
    MatrixShape {
        /// Name of the unitary block.
        gate_name: String,
        /// Expected entry count (dim²).
        expected: usize,
        /// Actual entry count.
        got: usize,
    },

    /// Composite body references a local qubit outside the block width.
    #[error("Composite '{gate_name}' is {num_qubits} qubits wide but its body uses {qubit:?}")]
    LocalQubitOutOfRange {
        /// The offending local qubit.
        qubit: QubitId,
        /// Width of the block.
        num_qubits: u32,
        /// Name of the block.
        gate_name: String,
    },

    /// Composite bodies are unitary; measurement is not allowed inside.
    #[error("Composite '{gate_name}' contains a measurement")]
    MeasureInComposite {
        /// Name of the block.
        gate_name: String,
    },

    /// Measurement operand lists have mismatched lengths.
    #[error("Measurement maps {qubits} qubits to {clbits} classical bits")]
    MeasureShape {
        /// Number of measured qubits.
        qubits: usize,
        /// Number of classical bits.
        clbits: usize,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
