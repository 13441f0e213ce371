//! Grover search circuit synthesis.
//!
//! Turns a search problem (qubit count n, list of marked indices) into a
//! `grover_ir::Circuit` implementing Grover's algorithm:
//!
//! - **[`PhaseOracle`]**: the diagonal phase-flip transform over the
//!   2^n-state search space, embedded as an opaque "Oracle" block
//! - **[`DiffusionOperator`]**: the fixed inversion-about-the-mean
//!   reflection (always 4n+3 gates from {h, x, mcx})
//! - **[`optimal_iterations`]**: the ⌊(π/4)·√(N/M)⌋ iteration count
//! - **[`GroverSearch`]**: validation plus assembly of the full circuit
//!
//! The resulting circuits are backend-agnostic and can be handed to any
//! `grover_hal::Backend` implementation for execution.
//!
//! # Quick start
//!
//! ```rust
//! use grover_synth::GroverSearch;
//!
//! // Search 16 states for the three marked indices {1, 3, 7}.
//! let search = GroverSearch::new(4, vec![1, 3, 7]).unwrap();
//! assert_eq!(search.iterations(), 1);
//!
//! let circuit = search.circuit().unwrap();
//! assert_eq!(circuit.num_qubits(), 4);
//! assert_eq!(circuit.count_ops().get("grover_q"), Some(&1));
//! ```

pub mod diffusion;
pub mod error;
pub mod iterations;
pub mod oracle;
pub mod search;

pub use diffusion::DiffusionOperator;
pub use error::{SynthError, SynthResult};
pub use iterations::optimal_iterations;
pub use oracle::{MAX_DENSE_QUBITS, PhaseOracle};
pub use search::GroverSearch;
