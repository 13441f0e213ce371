//! Grover Hardware Abstraction Layer
//!
//! A unified interface between the circuit-synthesis core and whatever
//! executes the circuits. The synthesis code never touches a concrete
//! simulator; it hands a finished [`grover_ir::Circuit`] plus a shot
//! count to a [`Backend`] and gets back a bitstring histogram.
//!
//! # Overview
//!
//! - A common [`Backend`] trait for job submission and management
//! - [`Capabilities`] to describe backend constraints
//! - Unified result handling via [`ExecutionResult`] and [`Counts`]
//! - [`Job`]/[`JobId`]/[`JobStatus`] lifecycle types
//!
//! # Example: Running a Circuit
//!
//! ```ignore
//! use grover_hal::Backend;
//! use grover_adapter_sim::SimulatorBackend;
//! use grover_ir::Circuit;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let circuit = Circuit::bell()?;
//!     let backend = SimulatorBackend::new();
//!
//!     let job_id = backend.submit(&circuit, 1000).await?;
//!     let result = backend.wait(&job_id).await?;
//!
//!     if let Some((bitstring, count)) = result.counts.most_frequent() {
//!         println!("Most frequent: {bitstring} ({count} times)");
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod job;
pub mod result;

pub use backend::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, ValidationResult,
};
pub use capability::Capabilities;
pub use error::{HalError, HalResult};
pub use job::{Job, JobId, JobStatus};
pub use result::{Counts, ExecutionResult};
