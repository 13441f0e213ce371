//! Statevector simulation engine.

use std::f64::consts::PI;

use num_complex::Complex64;

use grover_ir::{GateKind, Instruction, InstructionKind, StandardGate};

/// A statevector representing a quantum state.
///
/// Basis-state index i holds the amplitude of |i⟩, with qubit q
/// contributing bit q of i.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Amplitude of basis state i.
    pub fn amplitude(&self, i: usize) -> Complex64 {
        self.amplitudes[i]
    }

    /// Probability of measuring basis state i.
    pub fn probability(&self, i: usize) -> f64 {
        self.amplitudes[i].norm_sqr()
    }

    /// Apply an instruction to the statevector.
    ///
    /// Measurements and barriers leave the state untouched; sampling is
    /// the caller's concern (this IR only has terminal measurement).
    pub fn apply(&mut self, instruction: &Instruction) {
        if let InstructionKind::Gate(gate) = &instruction.kind {
            let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.0 as usize).collect();
            self.apply_gate(&gate.kind, &qubits);
        }
    }

    /// Apply a gate to specific (global) qubits.
    fn apply_gate(&mut self, gate: &GateKind, qubits: &[usize]) {
        match gate {
            GateKind::Standard(std_gate) => self.apply_standard_gate(std_gate, qubits),
            GateKind::Unitary(block) => self.apply_unitary(&block.matrix, qubits),
            GateKind::Composite(block) => {
                // Local qubit t of the body maps to the t-th operand.
                for inst in &block.instructions {
                    if let InstructionKind::Gate(gate) = &inst.kind {
                        let mapped: Vec<_> =
                            inst.qubits.iter().map(|q| qubits[q.0 as usize]).collect();
                        self.apply_gate(&gate.kind, &mapped);
                    }
                }
            }
        }
    }

    /// Apply a standard gate.
    fn apply_standard_gate(&mut self, gate: &StandardGate, qubits: &[usize]) {
        match gate {
            StandardGate::I => {}
            StandardGate::X => self.apply_mcx(&[], qubits[0]),
            StandardGate::Y => self.apply_y(qubits[0]),
            StandardGate::Z => self.apply_z(qubits[0]),
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::S => self.apply_phase(qubits[0], PI / 2.0),
            StandardGate::Sdg => self.apply_phase(qubits[0], -PI / 2.0),
            StandardGate::T => self.apply_phase(qubits[0], PI / 4.0),
            StandardGate::Tdg => self.apply_phase(qubits[0], -PI / 4.0),
            StandardGate::CX => self.apply_mcx(&qubits[..1], qubits[1]),
            StandardGate::CZ => self.apply_cz(qubits[0], qubits[1]),
            StandardGate::Swap => self.apply_swap(qubits[0], qubits[1]),
            StandardGate::CCX => self.apply_mcx(&qubits[..2], qubits[2]),
            StandardGate::Mcx { .. } => {
                let (target, controls) = qubits.split_last().expect("mcx has a target");
                self.apply_mcx(controls, *target);
            }
        }
    }

    // =========================================================================
    // Gate kernels
    // =========================================================================

    /// NOT on `target` conditioned on every qubit in `controls`. An empty
    /// control list is a plain X.
    fn apply_mcx(&mut self, controls: &[usize], target: usize) {
        let ctrl_mask: usize = controls.iter().map(|&q| 1usize << q).sum();
        let tgt_mask = 1usize << target;
        for i in 0..self.amplitudes.len() {
            if i & ctrl_mask == ctrl_mask && i & tgt_mask == 0 {
                let j = i | tgt_mask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    fn apply_y(&mut self, qubit: usize) {
        let mask = 1usize << qubit;
        let i_val = Complex64::new(0.0, 1.0);
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let tmp = self.amplitudes[i];
                self.amplitudes[i] = -i_val * self.amplitudes[j];
                self.amplitudes[j] = i_val * tmp;
            }
        }
    }

    fn apply_z(&mut self, qubit: usize) {
        let mask = 1usize << qubit;
        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_h(&mut self, qubit: usize) {
        let mask = 1usize << qubit;
        let sqrt2_inv = 1.0 / 2.0_f64.sqrt();
        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = sqrt2_inv * (a + b);
                self.amplitudes[j] = sqrt2_inv * (a - b);
            }
        }
    }

    fn apply_phase(&mut self, qubit: usize, theta: f64) {
        let mask = 1usize << qubit;
        let phase = Complex64::from_polar(1.0, theta);
        for i in 0..self.amplitudes.len() {
            if i & mask != 0 {
                self.amplitudes[i] *= phase;
            }
        }
    }

    fn apply_cz(&mut self, control: usize, target: usize) {
        let both = (1usize << control) | (1usize << target);
        for i in 0..self.amplitudes.len() {
            if i & both == both {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = 1usize << q1;
        let mask2 = 1usize << q2;
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Apply a dense 2^k × 2^k row-major matrix to k qubits.
    ///
    /// Local basis bit t corresponds to the t-th entry of `qubits`. For
    /// each assignment of the remaining qubits the 2^k-dimensional
    /// subspace is gathered, multiplied through the matrix, and written
    /// back.
    fn apply_unitary(&mut self, matrix: &[Complex64], qubits: &[usize]) {
        let dim = 1usize << qubits.len();
        debug_assert_eq!(matrix.len(), dim * dim);

        let masks: Vec<usize> = qubits.iter().map(|&q| 1usize << q).collect();
        let union: usize = masks.iter().sum();

        let spread = |base: usize, local: usize| {
            let mut idx = base;
            for (t, mask) in masks.iter().enumerate() {
                if (local >> t) & 1 == 1 {
                    idx |= mask;
                }
            }
            idx
        };

        let mut scratch = vec![Complex64::new(0.0, 0.0); dim];
        for base in 0..self.amplitudes.len() {
            if base & union != 0 {
                continue;
            }
            for (local, slot) in scratch.iter_mut().enumerate() {
                *slot = self.amplitudes[spread(base, local)];
            }
            for row in 0..dim {
                let mut acc = Complex64::new(0.0, 0.0);
                for (col, &amp) in scratch.iter().enumerate() {
                    acc += matrix[row * dim + col] * amp;
                }
                self.amplitudes[spread(base, row)] = acc;
            }
        }
    }

    /// Sample a measurement outcome from the current distribution.
    pub fn sample(&self) -> usize {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        let r: f64 = rng.r#gen();

        let mut cumulative = 0.0;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            cumulative += amp.norm_sqr();
            if r < cumulative {
                return i;
            }
        }

        // Fallback (shouldn't happen with normalized states)
        self.amplitudes.len() - 1
    }
}
