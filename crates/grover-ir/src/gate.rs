//! Quantum gate types.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::instruction::{Instruction, InstructionKind};

/// Standard gates with fixed semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// Toffoli gate (CCX).
    CCX,
    /// Multi-controlled NOT with an arbitrary number of controls.
    ///
    /// Operands are the control qubits followed by the single target.
    /// Zero controls degenerates to a plain X.
    Mcx {
        /// Number of control qubits.
        controls: u32,
    },
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::CX => "cx",
            StandardGate::CZ => "cz",
            StandardGate::Swap => "swap",
            StandardGate::CCX => "ccx",
            StandardGate::Mcx { .. } => "mcx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg => 1,

            StandardGate::CX | StandardGate::CZ | StandardGate::Swap => 2,

            StandardGate::CCX => 3,

            StandardGate::Mcx { controls } => controls + 1,
        }
    }
}

/// An opaque unitary block with an explicit matrix.
///
/// The matrix is row-major over the computational basis of the gate's
/// qubits, with operand qubit `t` contributing bit `t` of the basis index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitaryGate {
    /// The name of the block.
    pub name: String,
    /// The number of qubits it operates on.
    pub num_qubits: u32,
    /// Row-major 2^n × 2^n matrix.
    pub matrix: Vec<Complex64>,
}

impl UnitaryGate {
    /// Create a unitary block, checking the matrix shape.
    pub fn new(
        name: impl Into<String>,
        num_qubits: u32,
        matrix: Vec<Complex64>,
    ) -> IrResult<Self> {
        let name = name.into();
        let dim = 1usize << num_qubits;
        if matrix.len() != dim * dim {
            return Err(IrError::MatrixShape {
                gate_name: name,
                expected: dim * dim,
                got: matrix.len(),
            });
        }
        Ok(Self {
            name,
            num_qubits,
            matrix,
        })
    }

    /// The dimension of the block's basis (2^num_qubits).
    pub fn dim(&self) -> usize {
        1usize << self.num_qubits
    }
}

/// A named sub-sequence of instructions acting as a single gate.
///
/// Instructions inside the block address local qubits `0..num_qubits`;
/// applying the block to a circuit maps local qubit `t` to the t-th
/// operand. Blocks may nest, but may not contain measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeGate {
    /// The name of the block.
    pub name: String,
    /// The number of qubits it operates on.
    pub num_qubits: u32,
    /// The body, over local qubit indices.
    pub instructions: Vec<Instruction>,
}

impl CompositeGate {
    /// Create a composite block, checking that the body only touches
    /// local qubits and contains no measurements.
    pub fn new(
        name: impl Into<String>,
        num_qubits: u32,
        instructions: Vec<Instruction>,
    ) -> IrResult<Self> {
        let name = name.into();
        for inst in &instructions {
            if matches!(inst.kind, InstructionKind::Measure) {
                return Err(IrError::MeasureInComposite { gate_name: name });
            }
            for q in &inst.qubits {
                if q.0 >= num_qubits {
                    return Err(IrError::LocalQubitOutOfRange {
                        qubit: *q,
                        num_qubits,
                        gate_name: name,
                    });
                }
            }
        }
        Ok(Self {
            name,
            num_qubits,
            instructions,
        })
    }

    /// Number of instructions in the body (non-recursive).
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the body is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// A quantum gate: standard, opaque unitary, or named composite block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// A standard gate with fixed semantics.
    Standard(StandardGate),
    /// An opaque unitary block.
    Unitary(UnitaryGate),
    /// A named composite block.
    Composite(CompositeGate),
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::Standard(g) => g.name(),
            GateKind::Unitary(g) => &g.name,
            GateKind::Composite(g) => &g.name,
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::Standard(g) => g.num_qubits(),
            GateKind::Unitary(g) => g.num_qubits,
            GateKind::Composite(g) => g.num_qubits,
        }
    }
}

/// A gate with associated metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional label, used by diagram renderers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            kind: GateKind::Standard(gate),
            label: None,
        }
    }

    /// Create a gate from a unitary block.
    pub fn unitary(gate: UnitaryGate) -> Self {
        Self {
            kind: GateKind::Unitary(gate),
            label: None,
        }
    }

    /// Create a gate from a composite block.
    pub fn composite(gate: CompositeGate) -> Self {
        Self {
            kind: GateKind::Composite(gate),
            label: None,
        }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}

impl From<UnitaryGate> for Gate {
    fn from(gate: UnitaryGate) -> Self {
        Gate::unitary(gate)
    }
}

impl From<CompositeGate> for Gate {
    fn from(gate: CompositeGate) -> Self {
        Gate::composite(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qubit::QubitId;

    #[test]
    fn standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);
        assert_eq!(StandardGate::Mcx { controls: 5 }.num_qubits(), 6);
        assert_eq!(StandardGate::Mcx { controls: 0 }.num_qubits(), 1);
        assert_eq!(StandardGate::Mcx { controls: 3 }.name(), "mcx");
    }

    #[test]
    fn unitary_gate_shape_checked() {
        let eye2 = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
        ];
        let g = UnitaryGate::new("block", 1, eye2).unwrap();
        assert_eq!(g.dim(), 2);

        let bad = UnitaryGate::new("block", 2, vec![Complex64::new(1.0, 0.0); 7]);
        assert!(matches!(bad, Err(IrError::MatrixShape { expected: 16, got: 7, .. })));
    }

    #[test]
    fn composite_gate_validates_body() {
        let body = vec![
            Instruction::single_qubit_gate(StandardGate::H, QubitId(0)),
            Instruction::two_qubit_gate(StandardGate::CX, QubitId(0), QubitId(1)),
        ];
        let g = CompositeGate::new("pair", 2, body.clone()).unwrap();
        assert_eq!(g.len(), 2);

        let out_of_range = CompositeGate::new("pair", 1, body);
        assert!(matches!(
            out_of_range,
            Err(IrError::LocalQubitOutOfRange { .. })
        ));
    }

    #[test]
    fn composite_gate_rejects_measurement() {
        use crate::qubit::ClbitId;
        let body = vec![Instruction::measure(QubitId(0), ClbitId(0))];
        assert!(matches!(
            CompositeGate::new("bad", 1, body),
            Err(IrError::MeasureInComposite { .. })
        ));
    }

    #[test]
    fn gate_labels() {
        let g = Gate::standard(StandardGate::H).with_label("init");
        assert_eq!(g.name(), "h");
        assert_eq!(g.label.as_deref(), Some("init"));
    }
}
