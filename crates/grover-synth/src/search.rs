//! Grover circuit assembly.
//!
//! Composes superposition initialization, k repetitions of the combined
//! oracle + diffusion operator, and measurement into one executable
//! circuit. Validation runs first and its errors pass through unwrapped;
//! once it has passed, the only remaining error class is construction
//! failure with the IR cause attached.

use serde::{Deserialize, Serialize};
use tracing::debug;

use grover_ir::{Circuit, CompositeGate, Gate, Instruction, QubitId};

use crate::diffusion::DiffusionOperator;
use crate::error::SynthResult;
use crate::iterations::optimal_iterations;
use crate::oracle::{PhaseOracle, validate_search_space};

/// A Grover search problem: qubit count plus marked indices.
///
/// Construction validates the inputs; every assembly method on a value of
/// this type can then only fail with a construction error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroverSearch {
    num_qubits: u32,
    solutions: Vec<u64>,
}

impl GroverSearch {
    /// Define a search over `num_qubits` qubits for the given marked
    /// indices.
    ///
    /// Fails with an invalid-argument error when `num_qubits` is zero or
    /// beyond the dense-oracle limit, the list is empty, or any index
    /// falls outside [0, 2^n - 1].
    pub fn new(num_qubits: u32, solutions: impl Into<Vec<u64>>) -> SynthResult<Self> {
        let solutions = solutions.into();
        validate_search_space(num_qubits, &solutions)?;
        Ok(Self {
            num_qubits,
            solutions,
        })
    }

    /// The qubit count.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The marked indices, as given.
    pub fn solutions(&self) -> &[u64] {
        &self.solutions
    }

    /// The search space size N = 2^n.
    pub fn space_size(&self) -> u64 {
        1u64 << self.num_qubits
    }

    /// The number of distinct marked states M.
    ///
    /// Duplicates in the input are counted once so they cannot skew the
    /// iteration count.
    pub fn num_solutions(&self) -> u64 {
        let mut distinct = self.solutions.clone();
        distinct.sort_unstable();
        distinct.dedup();
        distinct.len() as u64
    }

    /// The optimal iteration count k for this problem.
    pub fn iterations(&self) -> u64 {
        optimal_iterations(self.space_size(), self.num_solutions())
    }

    /// One full Grover iteration as a single composite block: apply the
    /// oracle, then the diffusion operator.
    pub fn operator(&self) -> SynthResult<Gate> {
        let oracle = PhaseOracle::from_solutions(self.num_qubits, &self.solutions)?;
        let diffusion = DiffusionOperator::new(self.num_qubits)?;

        let locals: Vec<QubitId> = (0..self.num_qubits).map(QubitId).collect();
        let body = vec![
            Instruction::gate(oracle.to_gate()?, locals.clone()),
            Instruction::gate(diffusion.to_gate()?, locals),
        ];
        let block = CompositeGate::new("grover_q", self.num_qubits, body)?;
        Ok(Gate::composite(block).with_label("Q"))
    }

    /// Assemble the executable circuit: Hadamard on every qubit, k
    /// applications of the Grover operator, then measurement of every
    /// qubit into a same-sized classical register.
    pub fn circuit(&self) -> SynthResult<Circuit> {
        let n = self.num_qubits;
        let k = self.iterations();
        debug!(
            num_qubits = n,
            marked = self.num_solutions(),
            iterations = k,
            "assembling Grover circuit"
        );

        let mut circuit = Circuit::new("grover");
        let qreg = circuit.add_qreg("q", n);
        let creg = circuit.add_creg("c", n);

        for &q in &qreg {
            circuit.h(q)?;
        }

        let operator = self.operator()?;
        for _ in 0..k {
            circuit.gate(operator.clone(), qreg.iter().copied())?;
        }

        circuit.apply(Instruction::measure_all(qreg, creg)?)?;
        Ok(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SynthError;
    use grover_ir::GateKind;

    #[test]
    fn circuit_shape_for_single_solution() {
        let search = GroverSearch::new(2, vec![1]).unwrap();
        assert_eq!(search.iterations(), 1);

        let circuit = search.circuit().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);

        let counts = circuit.count_ops();
        assert_eq!(counts.get("h"), Some(&2));
        assert_eq!(counts.get("grover_q"), Some(&1));
        assert_eq!(counts.get("measure"), Some(&1));
    }

    #[test]
    fn iteration_count_matches_calculator() {
        // N = 64, M = 1: k = 6 composite applications.
        let search = GroverSearch::new(6, vec![36]).unwrap();
        assert_eq!(search.iterations(), 6);
        let circuit = search.circuit().unwrap();
        assert_eq!(circuit.count_ops().get("grover_q"), Some(&6));

        // N = 8, M = 2: k = 1.
        let search = GroverSearch::new(3, vec![2, 5]).unwrap();
        assert_eq!(search.iterations(), 1);
        let circuit = search.circuit().unwrap();
        assert_eq!(circuit.count_ops().get("grover_q"), Some(&1));
    }

    #[test]
    fn circuit_starts_with_superposition_layer() {
        let search = GroverSearch::new(4, vec![1, 3, 7]).unwrap();
        let circuit = search.circuit().unwrap();

        let ops = circuit.instructions();
        assert!(ops[..4].iter().all(|inst| inst.name() == "h"));
        assert_eq!(ops.last().unwrap().name(), "measure");
        assert_eq!(ops.last().unwrap().qubits.len(), 4);
        assert_eq!(ops.last().unwrap().clbits.len(), 4);
    }

    #[test]
    fn operator_contains_oracle_then_diffusion() {
        let search = GroverSearch::new(3, vec![5]).unwrap();
        let operator = search.operator().unwrap();

        let GateKind::Composite(block) = &operator.kind else {
            panic!("Grover operator should be a composite block");
        };
        assert_eq!(block.name, "grover_q");
        assert_eq!(block.instructions.len(), 2);
        assert_eq!(block.instructions[0].name(), "oracle");
        assert_eq!(block.instructions[1].name(), "diffusion");
    }

    #[test]
    fn duplicates_do_not_skew_iterations() {
        let deduped = GroverSearch::new(4, vec![1]).unwrap();
        let duplicated = GroverSearch::new(4, vec![1, 1, 1]).unwrap();
        assert_eq!(deduped.iterations(), duplicated.iterations());
    }

    #[test]
    fn validation_errors_surface_unwrapped() {
        let err = GroverSearch::new(4, vec![16]).unwrap_err();
        assert!(err.is_invalid_argument());

        let err = GroverSearch::new(0, vec![0]).unwrap_err();
        assert!(matches!(err, SynthError::InvalidQubitCount(0)));

        let err = GroverSearch::new(4, Vec::<u64>::new()).unwrap_err();
        assert!(matches!(err, SynthError::EmptySolutions));
    }

    #[test]
    fn registers_are_named() {
        let search = GroverSearch::new(2, vec![1]).unwrap();
        let circuit = search.circuit().unwrap();
        assert_eq!(circuit.qubits()[0].register.as_deref(), Some("q"));
        assert_eq!(circuit.clbits()[1].register.as_deref(), Some("c"));
    }
}
