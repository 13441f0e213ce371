//! Simulator backend implementation.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};
use uuid::Uuid;

use grover_hal::{
    Backend, BackendAvailability, BackendConfig, BackendFactory, Capabilities, Counts,
    ExecutionResult, HalError, HalResult, Job, JobId, JobStatus, ValidationResult,
};
use grover_ir::{Circuit, GateKind, InstructionKind};

use crate::statevector::Statevector;

/// Job data for the simulator.
struct SimJob {
    job: Job,
    result: Option<ExecutionResult>,
}

/// Local statevector simulator backend.
///
/// Executes circuits synchronously at submit time; jobs are `Completed`
/// as soon as `submit` returns. Supports circuits up to `max_qubits`
/// (memory-bound).
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    /// Capabilities, cached at construction.
    capabilities: Capabilities,
    /// Finished jobs by ID.
    jobs: Arc<Mutex<FxHashMap<String, SimJob>>>,
}

impl SimulatorBackend {
    /// Default circuit-width limit.
    const DEFAULT_MAX_QUBITS: u32 = 20;

    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::with_max_qubits(Self::DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with a custom width limit.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            config: BackendConfig::new("simulator"),
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        }
    }

    /// Collect reasons a circuit cannot run here.
    fn rejection_reasons(&self, circuit: &Circuit) -> Vec<String> {
        let mut reasons = vec![];
        if !self.capabilities.supports_width(circuit.num_qubits()) {
            reasons.push(format!(
                "circuit has {} qubits but the simulator supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            ));
        }
        for inst in circuit.instructions() {
            if let InstructionKind::Gate(gate) = &inst.kind {
                self.gate_issues(&gate.kind, &mut reasons);
            }
        }
        reasons
    }

    fn gate_issues(&self, gate: &GateKind, reasons: &mut Vec<String>) {
        match gate {
            GateKind::Standard(g) => {
                if !self.capabilities.supports_gate(g.name()) {
                    reasons.push(format!("unsupported gate '{}'", g.name()));
                }
            }
            GateKind::Unitary(block) => {
                if !self.capabilities.supports_unitary_blocks {
                    reasons.push(format!("unitary block '{}' not supported", block.name));
                }
            }
            GateKind::Composite(block) => {
                for inst in &block.instructions {
                    if let InstructionKind::Gate(gate) = &inst.kind {
                        self.gate_issues(&gate.kind, reasons);
                    }
                }
            }
        }
    }

    /// Run the simulation synchronously.
    ///
    /// The gate sequence is applied once; with terminal-only measurement
    /// every shot is an independent sample from the same final
    /// distribution, so shots only repeat the sampling step.
    #[instrument(skip(self, circuit))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        let num_clbits = circuit.num_clbits();
        debug!(num_qubits, shots, "starting simulation");

        let mut sv = Statevector::new(num_qubits);
        let mut measure_map: Vec<(usize, usize)> = vec![];

        for inst in circuit.instructions() {
            match &inst.kind {
                InstructionKind::Measure => {
                    for (q, c) in inst.qubits.iter().zip(&inst.clbits) {
                        measure_map.push((q.0 as usize, c.0 as usize));
                    }
                }
                InstructionKind::Gate(_) => sv.apply(inst),
                InstructionKind::Barrier => {}
            }
        }

        let mut counts = Counts::new();
        for _ in 0..shots {
            let outcome = sv.sample();
            counts.insert(render_bitstring(outcome, &measure_map, num_clbits), 1);
        }

        let elapsed = start.elapsed();
        debug!(?elapsed, "simulation completed");

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }

    fn lock_jobs(&self) -> std::sync::MutexGuard<'_, FxHashMap<String, SimJob>> {
        self.jobs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// Render a sampled basis-state index as a classical bitstring.
///
/// Classical bit c takes the value of the qubit measured into it;
/// bit 0 is the rightmost character, so the string reads as the binary
/// representation of the measured value.
fn render_bitstring(outcome: usize, measure_map: &[(usize, usize)], num_clbits: usize) -> String {
    let mut bits = vec![b'0'; num_clbits];
    for &(qubit, clbit) in measure_map {
        if (outcome >> qubit) & 1 == 1 {
            bits[num_clbits - 1 - clbit] = b'1';
        }
    }
    bits.into_iter().map(char::from).collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    async fn availability(&self) -> HalResult<BackendAvailability> {
        Ok(BackendAvailability::always_available())
    }

    async fn validate(&self, circuit: &Circuit) -> HalResult<ValidationResult> {
        let reasons = self.rejection_reasons(circuit);
        if reasons.is_empty() {
            Ok(ValidationResult::Valid)
        } else {
            Ok(ValidationResult::Invalid { reasons })
        }
    }

    #[instrument(skip(self, circuit))]
    async fn submit(&self, circuit: &Circuit, shots: u32) -> HalResult<JobId> {
        if circuit.num_qubits() > self.capabilities.num_qubits as usize {
            return Err(HalError::CircuitTooLarge(format!(
                "circuit has {} qubits but the simulator supports {}",
                circuit.num_qubits(),
                self.capabilities.num_qubits
            )));
        }
        if shots == 0 || shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "shots must be in [1, {}], got {shots}",
                self.capabilities.max_shots
            )));
        }
        let reasons = self.rejection_reasons(circuit);
        if !reasons.is_empty() {
            return Err(HalError::InvalidCircuit(reasons.join("; ")));
        }

        let job_id = JobId::new(Uuid::new_v4().to_string());
        debug!(%job_id, "submitted job");

        // The simulator completes synchronously; the job is stored
        // already terminal.
        let result = self.run_simulation(circuit, shots);
        let job = Job::new(job_id.clone(), shots)
            .with_backend(self.config.name.clone())
            .with_status(JobStatus::Completed);

        self.lock_jobs().insert(
            job_id.0.clone(),
            SimJob {
                job,
                result: Some(result),
            },
        );

        Ok(job_id)
    }

    async fn status(&self, job_id: &JobId) -> HalResult<JobStatus> {
        self.lock_jobs()
            .get(&job_id.0)
            .map(|j| j.job.status.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn result(&self, job_id: &JobId) -> HalResult<ExecutionResult> {
        self.lock_jobs()
            .get(&job_id.0)
            .and_then(|j| j.result.clone())
            .ok_or_else(|| HalError::JobNotFound(job_id.0.clone()))
    }

    async fn cancel(&self, job_id: &JobId) -> HalResult<()> {
        let mut jobs = self.lock_jobs();
        if let Some(sim_job) = jobs.get_mut(&job_id.0) {
            if !sim_job.job.status.is_terminal() {
                sim_job.job = sim_job.job.clone().with_status(JobStatus::Cancelled);
            }
            Ok(())
        } else {
            Err(HalError::JobNotFound(job_id.0.clone()))
        }
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = config
            .extra
            .get("max_qubits")
            .and_then(serde_json::value::Value::as_u64)
            .map_or(Self::DEFAULT_MAX_QUBITS, |v| v as u32);

        Ok(Self {
            config,
            capabilities: Capabilities::simulator(max_qubits),
            jobs: Arc::new(Mutex::new(FxHashMap::default())),
        })
    }
}
