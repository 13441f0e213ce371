//! Diffusion (inversion-about-the-mean) operator.
//!
//! The canonical reflection 2|s⟩⟨s| - I, where |s⟩ is the uniform
//! superposition. Realized as H on every qubit, X on every qubit, a
//! controlled phase flip on the last qubit conditioned on all others
//! (H, multi-controlled NOT, H), X on every qubit, H on every qubit.
//! The body is always exactly 4n+3 gates drawn from {h, x, mcx}.

use serde::{Deserialize, Serialize};

use grover_ir::{CompositeGate, Gate, Instruction, QubitId, StandardGate};

use crate::error::{SynthError, SynthResult};

/// The amplitude-amplification reflection operator for n qubits.
///
/// Parameterized only by the qubit count; stateless and reusable, and two
/// instances with the same n produce structurally identical gate
/// sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffusionOperator {
    num_qubits: u32,
}

impl DiffusionOperator {
    /// Create the operator for `num_qubits >= 1` qubits.
    pub fn new(num_qubits: u32) -> SynthResult<Self> {
        if num_qubits == 0 {
            return Err(SynthError::InvalidQubitCount(0));
        }
        Ok(Self { num_qubits })
    }

    /// The qubit count the operator acts on.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The gate sequence, over local qubits 0..n.
    ///
    /// Exactly 4n+3 instructions: n H, n X, H on the last qubit, one
    /// multi-controlled NOT targeting the last qubit, H on the last
    /// qubit, n X, n H. For n = 1 the NOT has zero controls and acts as
    /// a plain X.
    pub fn instructions(&self) -> Vec<Instruction> {
        let n = self.num_qubits;
        let target = QubitId(n - 1);
        let mut body = Vec::with_capacity(4 * n as usize + 3);

        for q in 0..n {
            body.push(Instruction::single_qubit_gate(StandardGate::H, QubitId(q)));
        }
        for q in 0..n {
            body.push(Instruction::single_qubit_gate(StandardGate::X, QubitId(q)));
        }

        body.push(Instruction::single_qubit_gate(StandardGate::H, target));
        let mut operands: Vec<QubitId> = (0..n - 1).map(QubitId).collect();
        let mcx = StandardGate::Mcx { controls: n - 1 };
        operands.push(target);
        body.push(Instruction::gate(mcx, operands));
        body.push(Instruction::single_qubit_gate(StandardGate::H, target));

        for q in 0..n {
            body.push(Instruction::single_qubit_gate(StandardGate::X, QubitId(q)));
        }
        for q in 0..n {
            body.push(Instruction::single_qubit_gate(StandardGate::H, QubitId(q)));
        }

        body
    }

    /// Wrap the sequence as a composite block tagged "Diffusion".
    pub fn to_gate(&self) -> SynthResult<Gate> {
        let block = CompositeGate::new("diffusion", self.num_qubits, self.instructions())?;
        Ok(Gate::composite(block).with_label("Diffusion"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn body_length_is_4n_plus_3() {
        for n in 1..=8 {
            let diffusion = DiffusionOperator::new(n).unwrap();
            assert_eq!(
                diffusion.instructions().len(),
                4 * n as usize + 3,
                "wrong body length for n = {n}"
            );
        }
    }

    #[test]
    fn gate_set_is_h_x_mcx() {
        let diffusion = DiffusionOperator::new(4).unwrap();
        let names: BTreeSet<_> = diffusion
            .instructions()
            .iter()
            .map(|inst| inst.name().to_string())
            .collect();
        let expected: BTreeSet<_> = ["h", "x", "mcx"].iter().map(ToString::to_string).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn mcx_conditions_on_all_other_qubits() {
        let n = 5;
        let diffusion = DiffusionOperator::new(n).unwrap();
        let body = diffusion.instructions();
        let mcx = body
            .iter()
            .find(|inst| inst.name() == "mcx")
            .expect("body contains an mcx");

        // Controls 0..n-1 in order, then the last qubit as target.
        let expected: Vec<_> = (0..n).map(QubitId).collect();
        assert_eq!(mcx.qubits, expected);
    }

    #[test]
    fn deterministic_across_builds() {
        let a = DiffusionOperator::new(3).unwrap();
        let b = DiffusionOperator::new(3).unwrap();
        assert_eq!(a.instructions(), b.instructions());
    }

    #[test]
    fn single_qubit_body() {
        let diffusion = DiffusionOperator::new(1).unwrap();
        let body = diffusion.instructions();
        assert_eq!(body.len(), 7);
        // The degenerate mcx has a single operand.
        let mcx = body.iter().find(|inst| inst.name() == "mcx").unwrap();
        assert_eq!(mcx.qubits, vec![QubitId(0)]);
    }

    #[test]
    fn rejects_zero_qubits() {
        assert!(matches!(
            DiffusionOperator::new(0),
            Err(SynthError::InvalidQubitCount(0))
        ));
    }

    #[test]
    fn wraps_as_labeled_composite() {
        let gate = DiffusionOperator::new(3).unwrap().to_gate().unwrap();
        assert_eq!(gate.name(), "diffusion");
        assert_eq!(gate.label.as_deref(), Some("Diffusion"));
        assert_eq!(gate.num_qubits(), 3);
    }
}
