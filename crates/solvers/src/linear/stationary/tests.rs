use approx::{assert_abs_diff_eq, assert_relative_eq};
use ndarray::{Array1, Array2, array};
use proptest::prelude::*;

use crate::linear::{gauss_seidel, jacobi, lu};

use super::*;

fn system() -> (Array2<f64>, Array1<f64>) {
    let a = array![[5.0, 1.0, 1.0], [1.0, 4.0, 1.0], [0.0, 1.0, 6.0]];
    let b = array![7.0, -8.0, 6.0];
    (a, b)
}

#[test]
fn both_methods_match_direct_solve() {
    let (a, b) = system();
    let direct = lu::solve(&a, &b).unwrap();
    let config = Config::default();

    let jacobi = jacobi::solve_unobserved(&a, &b, array![1.0, 1.0, 1.0], &config).unwrap();
    let seidel = gauss_seidel::solve_unobserved(&a, &b, array![1.0, 1.0, 1.0], &config).unwrap();

    for solution in [&jacobi, &seidel] {
        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.x, direct, epsilon = 1e-8);
        assert!(solution.residual_norm < 1e-8);
        assert!(solution.diagnostics.spectral_norm < 1.0);
        assert!(solution.diagnostics.diagonally_dominant);
        assert!(solution.diagnostics.warnings.is_empty());
    }
    assert!(seidel.iters <= jacobi.iters);
}

proptest! {
    #[test]
    fn converges_from_any_start(start in proptest::collection::vec(-1e3..1e3_f64, 3)) {
        let (a, b) = system();
        let direct = lu::solve(&a, &b).unwrap();
        let x0 = Array1::from(start);

        let jacobi = jacobi::solve_unobserved(&a, &b, x0.clone(), &Config::default()).unwrap();
        let seidel = gauss_seidel::solve_unobserved(&a, &b, x0, &Config::default()).unwrap();

        prop_assert!(jacobi.is_converged());
        prop_assert!(seidel.is_converged());
        assert_abs_diff_eq!(jacobi.x, direct, epsilon = 1e-8);
        assert_abs_diff_eq!(seidel.x, direct, epsilon = 1e-8);
    }
}

#[test]
fn jacobi_reads_only_previous_iterate() {
    let (a, b) = system();
    let observer = |event: &Event<'_>| (event.iter == 1).then_some(Action::StopEarly);

    let solution = jacobi::solve(&a, &b, array![1.0, 1.0, 1.0], &Config::default(), observer)
        .unwrap();

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_relative_eq!(solution.x, array![1.0, -2.5, 5.0 / 6.0], epsilon = 1e-15);
}

#[test]
fn gauss_seidel_sees_updates_within_a_sweep() {
    let (a, b) = system();
    let observer = |event: &Event<'_>| (event.iter == 1).then_some(Action::StopEarly);

    let solution =
        gauss_seidel::solve(&a, &b, array![1.0, 1.0, 1.0], &Config::default(), observer).unwrap();

    // Row 2 uses the freshly computed x₁ = −2.5.
    assert_relative_eq!(solution.x, array![1.0, -2.5, 8.5 / 6.0], epsilon = 1e-15);
}

#[test]
fn extra_sweep_from_converged_solution_is_negligible() {
    let (a, b) = system();
    let config = Config::default();

    let converged = gauss_seidel::solve_unobserved(&a, &b, array![1.0, 1.0, 1.0], &config).unwrap();
    let one_step = Config::new(1, config.rel_tol()).unwrap();
    let again = gauss_seidel::solve_unobserved(&a, &b, converged.x.clone(), &one_step).unwrap();

    assert_eq!(again.status, Status::Converged);
    assert_eq!(again.iters, 1);
    assert!(again.rel_error < config.rel_tol());
}

#[test]
fn events_report_shrinking_residuals() {
    let (a, b) = system();
    let mut residuals = Vec::new();
    let observer = |event: &Event<'_>| {
        residuals.push(event.residual_norm);
        None
    };

    let solution =
        gauss_seidel::solve(&a, &b, array![0.0, 0.0, 0.0], &Config::default(), observer).unwrap();

    assert_eq!(residuals.len(), solution.iters);
    assert!(residuals.first() > residuals.last());
    assert_relative_eq!(*residuals.last().unwrap(), solution.residual_norm);
}

#[test]
fn zero_tolerance_runs_full_budget() {
    let (a, b) = system();
    let config = Config::new(25, 0.0).unwrap();

    let solution = jacobi::solve_unobserved(&a, &b, array![1.0, 1.0, 1.0], &config).unwrap();

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 25);
}

#[test]
fn divergent_iteration_warns_then_overflows() {
    let a = array![[1.0, 3.0], [2.0, 1.0]];
    let b = array![1.0, 1.0];

    let short = Config::new(3, 1e-10).unwrap();
    let solution = jacobi::solve_unobserved(&a, &b, array![1.0, 1.0], &short).unwrap();
    assert_eq!(solution.status, Status::MaxIters);
    assert!(
        solution
            .diagnostics
            .warnings
            .contains(&ConvergenceWarning::NotDiagonallyDominant)
    );

    let long = Config::new(5000, 1e-10).unwrap();
    let result = jacobi::solve_unobserved(&a, &b, array![1.0, 1.0], &long);
    match result {
        Err(Error::NonFinite {
            last,
            residual_norm,
            iter,
        }) => {
            assert!(iter > 3);
            assert!(last.iter().all(|v| v.is_finite()));
            assert!(residual_norm.is_finite());
            assert_relative_eq!(
                residual_norm,
                matrix::norm_inf(&matrix::residual(&a, &last, &b))
            );
        }
        other => panic!("expected NonFinite, got {other:?}"),
    }
}

#[test]
fn input_errors() {
    let (a, b) = system();

    assert_eq!(
        jacobi::solve_unobserved(&a, &b, array![1.0, 1.0], &Config::default()),
        Err(Error::DimensionMismatch {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        gauss_seidel::solve_unobserved(&a, &b, array![f64::NAN, 0.0, 0.0], &Config::default()),
        Err(Error::NonFiniteGuess)
    );

    let zero_diag = array![[0.0, 1.0], [1.0, 2.0]];
    let b = array![1.0, 1.0];
    assert_eq!(
        jacobi::solve_unobserved(&zero_diag, &b, array![0.0, 0.0], &Config::default()),
        Err(Error::ZeroDiagonal { row: 0 })
    );
}
