use approx::assert_abs_diff_eq;
use ndarray::array;
use proptest::prelude::*;

use integration_tests::{
    problems::{dominant_system, textbook_system},
    strategies::{dominant_matrices, dominant_systems, vectors},
};
use numera_core::matrix;
use numera_solvers::linear::{
    gauss_seidel, jacobi, lu,
    splitting::{self, Method},
    stationary,
};

#[test]
fn lu_solves_textbook_system() {
    let (a, b) = textbook_system();

    let x = lu::solve(&a, &b).unwrap();

    assert_abs_diff_eq!(x, array![3.0, 4.0, -2.0], epsilon = 1e-12);
}

#[test]
fn dominant_system_converges_with_both_iterations() {
    let (a, b) = dominant_system();
    let direct = lu::solve(&a, &b).unwrap();
    let config = stationary::Config::default();

    let jacobi = jacobi::solve_unobserved(&a, &b, array![1.0, 1.0, 1.0], &config).unwrap();
    let seidel = gauss_seidel::solve_unobserved(&a, &b, array![1.0, 1.0, 1.0], &config).unwrap();

    for solution in [&jacobi, &seidel] {
        assert!(solution.is_converged());
        assert!(solution.diagnostics.spectral_norm < 1.0);
        assert_abs_diff_eq!(solution.x, direct, epsilon = 1e-8);
    }
    assert!(seidel.iters <= jacobi.iters);
}

#[test]
fn splitting_iteration_reproduces_jacobi_sweeps() {
    let (a, b) = dominant_system();
    let split = splitting::analyze(&a, Method::Jacobi).unwrap();
    let g = split.offset(&b).unwrap();

    let mut x = array![1.0, 1.0, 1.0];
    for _ in 0..5 {
        x = split.apply(&x, &g).unwrap();
    }

    let config = stationary::Config::new(5, 0.0).unwrap();
    let swept = jacobi::solve_unobserved(&a, &b, array![1.0, 1.0, 1.0], &config).unwrap();

    assert_abs_diff_eq!(swept.x, x, epsilon = 1e-14);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn lu_round_trips_dominant_matrices(a in dominant_matrices(1..=25)) {
        let lu = lu::decompose(&a).unwrap();

        let diff = &a - &lu.reconstruct();
        prop_assert!(matrix::frobenius_norm(&diff) < 1e-9);
    }

    #[test]
    fn pivoted_and_unpivoted_agree_when_both_apply((a, b) in dominant_systems(1..=12)) {
        let plain = lu::solve(&a, &b).unwrap();
        let pivoted = lu::decompose_pivoted(&a).unwrap().solve(&b).unwrap();

        assert_abs_diff_eq!(plain, pivoted, epsilon = 1e-10);
    }

    #[test]
    fn iterative_solvers_match_direct_solve(
        ((a, b), x0) in dominant_systems(2..=12)
            .prop_flat_map(|(a, b)| {
                let n = b.len();
                (Just((a, b)), vectors(n, -1e3..1e3))
            })
    ) {
        let direct = lu::solve(&a, &b).unwrap();
        let config = stationary::Config::new(10_000, 1e-12).unwrap();

        let jacobi = jacobi::solve_unobserved(&a, &b, x0.clone(), &config).unwrap();
        let seidel = gauss_seidel::solve_unobserved(&a, &b, x0, &config).unwrap();

        prop_assert!(jacobi.diagnostics.diagonally_dominant);
        prop_assert!(jacobi.is_converged());
        prop_assert!(seidel.is_converged());
        assert_abs_diff_eq!(jacobi.x, direct, epsilon = 1e-8);
        assert_abs_diff_eq!(seidel.x, direct, epsilon = 1e-8);
    }
}
