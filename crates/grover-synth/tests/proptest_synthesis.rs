//! Property-based tests for the synthesis building blocks.

use proptest::prelude::*;
use std::f64::consts::FRAC_PI_4;

use grover_synth::{DiffusionOperator, GroverSearch, optimal_iterations};

/// (n, m) with 1 <= m < 2^n.
fn arb_undersubscribed_space() -> impl Strategy<Value = (u32, u64)> {
    (1u32..=16).prop_flat_map(|n| (Just(n), 1u64..(1u64 << n)))
}

proptest! {
    /// For M < N the count follows the closed formula, clamped to >= 1.
    #[test]
    fn iteration_formula_holds((n, m) in arb_undersubscribed_space()) {
        let space = 1u64 << n;
        let expected = ((FRAC_PI_4 * (space as f64 / m as f64).sqrt()).floor() as u64).max(1);
        prop_assert_eq!(optimal_iterations(space, m), expected);
    }

    /// Saturated or oversubscribed spaces always take exactly one pass.
    #[test]
    fn saturated_space_is_one_iteration(n in 1u32..=16, extra in 0u64..=1000) {
        let space = 1u64 << n;
        prop_assert_eq!(optimal_iterations(space, space + extra), 1);
    }

    /// More marked states never means more iterations.
    #[test]
    fn iterations_monotone_in_solutions((n, m) in arb_undersubscribed_space()) {
        let space = 1u64 << n;
        prop_assert!(optimal_iterations(space, m + 1) <= optimal_iterations(space, m));
    }

    /// The diffusion body is always 4n+3 gates from {h, x, mcx}.
    #[test]
    fn diffusion_shape(n in 1u32..=10) {
        let body = DiffusionOperator::new(n).unwrap().instructions();
        prop_assert_eq!(body.len(), 4 * n as usize + 3);
        for inst in &body {
            prop_assert!(matches!(inst.name(), "h" | "x" | "mcx"));
        }
    }

    /// Assembled circuits repeat the Grover operator exactly k times.
    #[test]
    fn circuit_repeats_operator(n in 1u32..=6, raw_solution in 0u64..64) {
        let solution = raw_solution % (1u64 << n);
        let search = GroverSearch::new(n, vec![solution]).unwrap();
        let circuit = search.circuit().unwrap();

        let counts = circuit.count_ops();
        prop_assert_eq!(counts.get("grover_q").copied().unwrap_or(0) as u64, search.iterations());
        prop_assert_eq!(counts.get("h").copied().unwrap_or(0), n as usize);
        prop_assert_eq!(counts.get("measure").copied(), Some(1));
    }
}
