//! High-level circuit builder API.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// A quantum circuit.
///
/// Instructions are kept as a flat, ordered list. There are no compiler
/// passes in this workspace, and everything downstream (simulation, op
/// counting, diagram listing) consumes the sequence in program order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit.
    clbits: Vec<Clbit>,
    /// Instructions in program order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.qubits.len() as u32);
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = QubitId(self.qubits.len() as u32);
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.clbits.len() as u32);
        self.clbits.push(Clbit::new(id));
        id
    }

    /// Add a classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = ClbitId(self.clbits.len() as u32);
            self.clbits.push(Clbit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Append an instruction, validating its operands.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<()> {
        let gate_name = || Some(instruction.name().to_string());

        for q in &instruction.qubits {
            if q.0 as usize >= self.qubits.len() {
                return Err(IrError::QubitNotFound {
                    qubit: *q,
                    gate_name: gate_name(),
                });
            }
        }
        for c in &instruction.clbits {
            if c.0 as usize >= self.clbits.len() {
                return Err(IrError::ClbitNotFound {
                    clbit: *c,
                    gate_name: gate_name(),
                });
            }
        }
        // Repeated operands are only legal on barriers (where they are moot).
        if !instruction.is_barrier() {
            for (i, q) in instruction.qubits.iter().enumerate() {
                if instruction.qubits[..i].contains(q) {
                    return Err(IrError::DuplicateQubit {
                        qubit: *q,
                        gate_name: gate_name(),
                    });
                }
            }
        }
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }
        if matches!(instruction.kind, InstructionKind::Measure)
            && instruction.qubits.len() != instruction.clbits.len()
        {
            return Err(IrError::MeasureShape {
                qubits: instruction.qubits.len(),
                clbits: instruction.clbits.len(),
            });
        }

        self.instructions.push(instruction);
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Y, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Z, qubit))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::T, qubit))?;
        Ok(self)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Tdg, qubit))?;
        Ok(self)
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))?;
        Ok(self)
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CZ, control, target))?;
        Ok(self)
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))?;
        Ok(self)
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(StandardGate::CCX, [c1, c2, target]))?;
        Ok(self)
    }

    /// Apply a multi-controlled NOT: all of `controls`, then `target`.
    ///
    /// An empty control list degenerates to a plain X on the target.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = QubitId>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        let mut qubits: Vec<_> = controls.into_iter().collect();
        let gate = StandardGate::Mcx {
            controls: qubits.len() as u32,
        };
        qubits.push(target);
        self.apply(Instruction::gate(gate, qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply an arbitrary gate (standard, unitary block, or composite).
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(gate, qubits))?;
        Ok(self)
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))?;
        Ok(self)
    }

    /// Measure all qubits to corresponding classical bits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        // Grow the classical register to match the qubit count if needed.
        while self.clbits.len() < self.qubits.len() {
            self.add_clbit();
        }

        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        let clbits: Vec<_> = self.clbits.iter().map(|c| c.id).take(qubits.len()).collect();

        self.apply(Instruction::measure_all(qubits, clbits)?)?;
        Ok(self)
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier(qubits))?;
        Ok(self)
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        self.apply(Instruction::barrier(qubits))?;
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Get the instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the number of instructions (barriers included).
    pub fn num_ops(&self) -> usize {
        self.instructions.len()
    }

    /// Count top-level instructions by name.
    ///
    /// Composite blocks count once under their own name; their bodies are
    /// not expanded.
    pub fn count_ops(&self) -> FxHashMap<String, usize> {
        let mut counts = FxHashMap::default();
        for inst in &self.instructions {
            *counts.entry(inst.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Circuit depth: the longest chain of gates and measurements over any
    /// wire. Barriers do not contribute.
    pub fn depth(&self) -> usize {
        let mut qubit_level = vec![0usize; self.qubits.len()];
        let mut clbit_level = vec![0usize; self.clbits.len()];
        let mut max_level = 0;

        for inst in &self.instructions {
            if inst.is_barrier() {
                continue;
            }
            let level = 1 + inst
                .qubits
                .iter()
                .map(|q| qubit_level[q.0 as usize])
                .chain(inst.clbits.iter().map(|c| clbit_level[c.0 as usize]))
                .max()
                .unwrap_or(0);
            for q in &inst.qubits {
                qubit_level[q.0 as usize] = level;
            }
            for c in &inst.clbits {
                clbit_level[c.0 as usize] = level;
            }
            max_level = max_level.max(level);
        }
        max_level
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits in the circuit.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2, 2);
        circuit
            .h(QubitId(0))?
            .cx(QubitId(0), QubitId(1))?
            .measure(QubitId(0), ClbitId(0))?
            .measure(QubitId(1), ClbitId(1))?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        if n == 0 {
            return Ok(Self::new("ghz_0"));
        }
        let mut circuit = Self::with_size("ghz", n, n);
        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }
        Ok(circuit)
    }
}

/// Text listing of the instruction sequence, one operation per line.
/// This is the structure handed to external diagram renderers.
impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} qubits, {} clbits",
            self.name,
            self.qubits.len(),
            self.clbits.len()
        )?;
        for inst in &self.instructions {
            let qubits = inst
                .qubits
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            match &inst.kind {
                InstructionKind::Measure => {
                    let clbits = inst
                        .clbits
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    writeln!(f, "  measure {qubits} -> {clbits}")?;
                }
                InstructionKind::Gate(g) => match &g.label {
                    Some(label) => writeln!(f, "  {} [{label}] {qubits}", g.name())?,
                    None => writeln!(f, "  {} {qubits}", g.name())?,
                },
                InstructionKind::Barrier => writeln!(f, "  barrier {qubits}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_circuit() {
        let circuit = Circuit::new("test");
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 0);
        assert_eq!(circuit.num_clbits(), 0);
    }

    #[test]
    fn circuit_with_size() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
    }

    #[test]
    fn add_registers() {
        let mut circuit = Circuit::new("test");
        let qreg = circuit.add_qreg("q", 4);
        let creg = circuit.add_creg("c", 4);

        assert_eq!(qreg.len(), 4);
        assert_eq!(creg.len(), 4);
        assert_eq!(circuit.num_qubits(), 4);
        assert_eq!(circuit.num_clbits(), 4);
    }

    #[test]
    fn unknown_qubit_rejected() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        let err = circuit.h(QubitId(1)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { .. }));
    }

    #[test]
    fn duplicate_operand_rejected() {
        let mut circuit = Circuit::with_size("test", 2, 0);
        let err = circuit.cx(QubitId(0), QubitId(0)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn arity_checked() {
        let mut circuit = Circuit::with_size("test", 3, 0);
        let err = circuit
            .apply(Instruction::gate(StandardGate::CX, [QubitId(0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch { expected: 2, got: 1, .. }
        ));
    }

    #[test]
    fn mcx_builder() {
        let mut circuit = Circuit::with_size("test", 4, 0);
        circuit
            .mcx([QubitId(0), QubitId(1), QubitId(2)], QubitId(3))
            .unwrap();
        let inst = &circuit.instructions()[0];
        assert_eq!(inst.name(), "mcx");
        assert_eq!(inst.qubits.len(), 4);
    }

    #[test]
    fn mcx_without_controls() {
        let mut circuit = Circuit::with_size("test", 1, 0);
        circuit.mcx([], QubitId(0)).unwrap();
        assert_eq!(circuit.instructions()[0].name(), "mcx");
        assert_eq!(circuit.instructions()[0].qubits.len(), 1);
    }

    #[test]
    fn bell_state() {
        let circuit = Circuit::bell().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 2);
        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
    }

    #[test]
    fn ghz_state() {
        let circuit = Circuit::ghz(5).unwrap();
        assert_eq!(circuit.num_qubits(), 5);
        assert_eq!(circuit.num_clbits(), 5);
    }

    #[test]
    fn count_ops_by_name() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .h(QubitId(1))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure_all()
            .unwrap();

        let counts = circuit.count_ops();
        assert_eq!(counts.get("h"), Some(&2));
        assert_eq!(counts.get("cx"), Some(&1));
        assert_eq!(counts.get("measure"), Some(&1));
    }

    #[test]
    fn display_lists_operations() {
        let circuit = Circuit::bell().unwrap();
        let listing = circuit.to_string();
        assert!(listing.contains("h q0"));
        assert!(listing.contains("cx q0, q1"));
        assert!(listing.contains("measure q0 -> c0"));
    }

    #[test]
    fn fluent_api() {
        let mut circuit = Circuit::with_size("test", 2, 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .measure(QubitId(0), ClbitId(0))
            .unwrap()
            .measure(QubitId(1), ClbitId(1))
            .unwrap();

        assert_eq!(circuit.depth(), 3); // H, CX, parallel measures
    }
}
