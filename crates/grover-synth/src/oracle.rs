//! Phase oracle construction.
//!
//! The oracle is the diagonal transform that flips the sign of every
//! marked basis state and leaves the rest untouched. It is built as a
//! dense 2^n × 2^n matrix and embedded into circuits as an opaque unitary
//! block, so diagram renderers show a single "Oracle" box instead of a
//! gate decomposition.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use grover_ir::{Gate, UnitaryGate};

use crate::error::{SynthError, SynthResult};

/// Largest qubit count for which a dense oracle matrix is built. Beyond
/// this the 2^n × 2^n allocation stops being reasonable; larger spaces
/// need a sparse phase-flip representation (see [`PhaseOracle::solutions`]).
pub const MAX_DENSE_QUBITS: u32 = 12;

/// A phase-flip oracle over an n-qubit search space.
///
/// Built fresh from a solution list and immutable afterwards. Basis-state
/// index s corresponds to the computational state |s⟩ with qubit `t`
/// holding bit `t` of s.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseOracle {
    num_qubits: u32,
    solutions: Vec<u64>,
    matrix: Array2<Complex64>,
}

impl PhaseOracle {
    /// Build the oracle for the given marked indices.
    ///
    /// Validates that `num_qubits >= 1`, that the list is non-empty, and
    /// that every index lies in [0, 2^n - 1]. Duplicate indices are
    /// tolerated; flipping a diagonal entry to -1 twice is idempotent.
    pub fn from_solutions(num_qubits: u32, solutions: &[u64]) -> SynthResult<Self> {
        validate_search_space(num_qubits, solutions)?;

        let size = 1usize << num_qubits;
        let mut matrix = Array2::<Complex64>::eye(size);
        for &s in solutions {
            matrix[(s as usize, s as usize)] = Complex64::new(-1.0, 0.0);
        }

        debug!(num_qubits, marked = solutions.len(), "built phase oracle");
        Ok(Self {
            num_qubits,
            solutions: solutions.to_vec(),
            matrix,
        })
    }

    /// The qubit count of the search space.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The marked indices, as given (duplicates preserved).
    ///
    /// This is the sparse view of the transform: implementations targeting
    /// spaces beyond [`MAX_DENSE_QUBITS`] can apply the phase flips from
    /// this list without materializing the matrix.
    pub fn solutions(&self) -> &[u64] {
        &self.solutions
    }

    /// The dense diagonal matrix.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Embed the transform as an opaque unitary block tagged "Oracle".
    pub fn to_gate(&self) -> SynthResult<Gate> {
        let flat: Vec<Complex64> = self.matrix.iter().copied().collect();
        let block = UnitaryGate::new("oracle", self.num_qubits, flat)?;
        Ok(Gate::unitary(block).with_label("Oracle"))
    }
}

/// Validate an (n, solutions) pair describing a search problem.
///
/// Checked before any construction starts; every violation maps to an
/// invalid-argument error naming the offending value and the valid range.
pub(crate) fn validate_search_space(num_qubits: u32, solutions: &[u64]) -> SynthResult<()> {
    if num_qubits == 0 {
        return Err(SynthError::InvalidQubitCount(0));
    }
    if num_qubits > MAX_DENSE_QUBITS {
        return Err(SynthError::QubitCountExceedsLimit {
            got: num_qubits,
            max: MAX_DENSE_QUBITS,
        });
    }
    if solutions.is_empty() {
        return Err(SynthError::EmptySolutions);
    }
    let max = (1u64 << num_qubits) - 1;
    for &s in solutions {
        if s > max {
            return Err(SynthError::SolutionOutOfRange {
                index: s,
                max,
                num_qubits,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grover_ir::GateKind;

    fn re(matrix: &Array2<Complex64>, i: usize, j: usize) -> f64 {
        matrix[(i, j)].re
    }

    #[test]
    fn diagonal_flips_marked_entries() {
        let oracle = PhaseOracle::from_solutions(2, &[1, 3]).unwrap();
        let m = oracle.matrix();

        assert_eq!(re(m, 0, 0), 1.0);
        assert_eq!(re(m, 1, 1), -1.0);
        assert_eq!(re(m, 2, 2), 1.0);
        assert_eq!(re(m, 3, 3), -1.0);
        // Off-diagonal stays zero.
        assert_eq!(re(m, 0, 1), 0.0);
        assert_eq!(re(m, 3, 0), 0.0);
    }

    #[test]
    fn duplicates_are_idempotent() {
        let once = PhaseOracle::from_solutions(3, &[5]).unwrap();
        let twice = PhaseOracle::from_solutions(3, &[5, 5]).unwrap();
        assert_eq!(once.matrix(), twice.matrix());
    }

    #[test]
    fn rejects_out_of_range_index() {
        let err = PhaseOracle::from_solutions(4, &[16]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            SynthError::SolutionOutOfRange { index: 16, max: 15, num_qubits: 4 }
        ));
    }

    #[test]
    fn rejects_zero_qubits() {
        let err = PhaseOracle::from_solutions(0, &[0]).unwrap_err();
        assert!(matches!(err, SynthError::InvalidQubitCount(0)));
    }

    #[test]
    fn rejects_empty_solutions() {
        let err = PhaseOracle::from_solutions(4, &[]).unwrap_err();
        assert!(matches!(err, SynthError::EmptySolutions));
    }

    #[test]
    fn rejects_oversized_space() {
        let err = PhaseOracle::from_solutions(MAX_DENSE_QUBITS + 1, &[0]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, SynthError::QubitCountExceedsLimit { .. }));
    }

    #[test]
    fn embeds_as_labeled_unitary_block() {
        let oracle = PhaseOracle::from_solutions(2, &[1]).unwrap();
        let gate = oracle.to_gate().unwrap();

        assert_eq!(gate.name(), "oracle");
        assert_eq!(gate.label.as_deref(), Some("Oracle"));
        match &gate.kind {
            GateKind::Unitary(block) => {
                assert_eq!(block.num_qubits, 2);
                assert_eq!(block.matrix.len(), 16);
                assert_eq!(block.matrix[5], Complex64::new(-1.0, 0.0)); // (1,1)
            }
            other => panic!("expected unitary block, got {other:?}"),
        }
    }
}
