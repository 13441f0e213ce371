//! Optimal Grover iteration count.
//!
//! One Grover iteration rotates the state vector toward the marked
//! subspace by θ ≈ 2·arcsin(√(M/N)). The iteration count k must bring the
//! total rotation close to π/2 without overshooting the amplitude peak,
//! which gives k = ⌊(π/4)·√(N/M)⌋. The floor is deliberate: rounding up
//! can rotate past the peak and lower the success probability.

use std::f64::consts::FRAC_PI_4;

/// Compute the optimal number of Grover iterations for a search space of
/// `space_size` states with `num_solutions` marked states.
///
/// Returns 1 when `num_solutions >= space_size`: with every state (or
/// more) marked there is nothing to amplify and the ratio degenerates.
/// The result is clamped to a minimum of 1 so the operator is always
/// applied at least once.
pub fn optimal_iterations(space_size: u64, num_solutions: u64) -> u64 {
    if num_solutions == 0 || num_solutions >= space_size {
        return 1;
    }
    let ratio = space_size as f64 / num_solutions as f64;
    let k = (FRAC_PI_4 * ratio.sqrt()).floor() as u64;
    k.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_solution_counts() {
        assert_eq!(optimal_iterations(4, 1), 1); // π/4·2 ≈ 1.57 → 1
        assert_eq!(optimal_iterations(8, 1), 2); // π/4·2.83 ≈ 2.22 → 2
        assert_eq!(optimal_iterations(16, 1), 3); // π/4·4 ≈ 3.14 → 3
        assert_eq!(optimal_iterations(64, 1), 6); // π/4·8 ≈ 6.28 → 6
    }

    #[test]
    fn multiple_solution_counts() {
        assert_eq!(optimal_iterations(8, 2), 1);
        assert_eq!(optimal_iterations(16, 3), 1);
        assert_eq!(optimal_iterations(16, 7), 1);
        assert_eq!(optimal_iterations(64, 3), 3);
        assert_eq!(optimal_iterations(64, 7), 2);
    }

    #[test]
    fn floor_never_rounds_up() {
        // π/4·√(32) ≈ 4.44: must floor to 4, not round to 4.44 → 5.
        assert_eq!(optimal_iterations(32, 1), 4);
        // π/4·√(2) ≈ 1.11: floors to 1.
        assert_eq!(optimal_iterations(2, 1), 1);
    }

    #[test]
    fn saturated_space_returns_one() {
        assert_eq!(optimal_iterations(16, 16), 1);
        assert_eq!(optimal_iterations(16, 20), 1);
        assert_eq!(optimal_iterations(2, 2), 1);
    }

    #[test]
    fn degenerate_zero_solutions_returns_one() {
        // Callers validate non-emptiness first; the function itself stays
        // total to avoid a division by zero.
        assert_eq!(optimal_iterations(16, 0), 1);
    }
}
