use ndarray::array;
use num_complex::Complex64;

use integration_tests::problems::cubic;
use numera_observers::{Iteration, Recorder, ResidualTarget, Table};
use numera_solvers::{
    equation::{bisection, muller},
    linear::gauss_seidel,
};

#[test]
fn bisection_record_renders_as_table() {
    let config = bisection::Config::new(100, 1e-3).unwrap();
    let mut recorder: Recorder<f64> = Recorder::new();

    let solution = bisection::solve(&cubic, [0.0, 2.0], &config, &mut recorder).unwrap();

    let text = Table::new(recorder.iterations()).precision(4).to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), solution.iters + 1);
    assert!(lines[1].contains("1.0000"));
    assert!(lines[2].contains("1.5000"));
}

#[test]
fn iteration_record_serializes_to_json() {
    let config = bisection::Config::new(2, 1e-12).unwrap();
    let mut recorder: Recorder<f64> = Recorder::new();

    bisection::solve(&cubic, [0.0, 2.0], &config, &mut recorder).unwrap();

    let json = serde_json::to_value(recorder.iterations()).unwrap();
    assert_eq!(json[0]["index"], 1);
    assert_eq!(json[0]["estimate"], 1.0);
    assert_eq!(json[1]["estimate"], 1.5);
    assert_eq!(json[1]["error"], 0.5);
}

#[test]
fn complex_and_vector_records_serialize() {
    let f = |z: Complex64| z * z + 1.0;
    let mut complex: Recorder<Complex64, Complex64> = Recorder::new();
    muller::solve(&f, [0.0, 1.0, 2.0], &muller::Config::default(), &mut complex).unwrap();

    let json = serde_json::to_value(complex.iterations()).unwrap();
    assert!(json[0]["estimate"].is_array());

    let a = array![[4.0, 1.0], [1.0, 3.0]];
    let b = array![1.0, 2.0];
    let mut vector: Recorder<ndarray::Array1<f64>> = Recorder::new();
    gauss_seidel::solve(
        &a,
        &b,
        array![0.0, 0.0],
        &gauss_seidel::Config::default(),
        &mut vector,
    )
    .unwrap();

    let first: &Iteration<ndarray::Array1<f64>> = &vector.iterations()[0];
    let json = serde_json::to_value(first).unwrap();
    assert_eq!(json["index"], 1);
    assert!(json["estimate"].is_object());
}

#[test]
fn residual_target_stops_iterative_solver() {
    let a = array![[4.0, 1.0], [1.0, 3.0]];
    let b = array![1.0, 2.0];

    let solution = gauss_seidel::solve(
        &a,
        &b,
        array![0.0, 0.0],
        &gauss_seidel::Config::default(),
        ResidualTarget::new(1e-4),
    )
    .unwrap();

    assert_eq!(solution.status, gauss_seidel::Status::StoppedByObserver);
    assert!(solution.residual_norm < 1e-4);
}
