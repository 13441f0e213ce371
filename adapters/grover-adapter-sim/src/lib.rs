//! Local Statevector Simulator Backend
//!
//! Exact statevector simulation for testing, development and small
//! searches. Memory-bound: the state takes 2^n complex amplitudes, which
//! caps practical use around 20-25 qubits.
//!
//! # Features
//!
//! - All standard gates from `grover-ir`, including multi-controlled NOT
//! - Opaque unitary blocks (dense matrix application), so synthesized
//!   phase oracles run directly
//! - Named composite blocks with recursive qubit remapping
//! - Probabilistic measurement sampling with configurable shots
//!
//! # Example
//!
//! ```ignore
//! use grover_adapter_sim::SimulatorBackend;
//! use grover_hal::Backend;
//! use grover_synth::GroverSearch;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SimulatorBackend::new();
//!
//!     let circuit = GroverSearch::new(4, vec![7])?.circuit()?;
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     // Expect "0111" to dominate the histogram.
//!     println!("{:?}", result.counts.most_frequent());
//!     Ok(())
//! }
//! ```

mod simulator;
mod statevector;

pub use simulator::SimulatorBackend;
pub use statevector::Statevector;
