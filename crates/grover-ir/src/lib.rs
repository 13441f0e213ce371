//! Grover Circuit Intermediate Representation
//!
//! Core data structures for representing the quantum circuits built and
//! simulated in this workspace.
//!
//! # Core Components
//!
//! - **Qubits and Classical Bits**: [`QubitId`], [`ClbitId`] for addressing
//!   quantum and classical registers
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, MCX, ...),
//!   [`UnitaryGate`] for opaque matrix blocks, and [`CompositeGate`] for
//!   named sub-sequences that render as a single box in diagrams
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder API over a flat
//!   instruction list
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use grover_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2, 2);
//!
//! // (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert!(circuit.depth() >= 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `Sdg`, `T`, `Tdg` | 1 | Phase-family gates |
//! | `CX`, `CZ` | 2 | Controlled-NOT and controlled-Z |
//! | `Swap` | 2 | SWAP gate |
//! | `CCX` | 3 | Toffoli (CCNOT) gate |
//! | `Mcx` | k+1 | Multi-controlled NOT with k controls |
//! | unitary block | k | Opaque 2^k × 2^k matrix, e.g. a phase oracle |
//! | composite block | k | Named instruction sub-sequence |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CompositeGate, Gate, GateKind, StandardGate, UnitaryGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
