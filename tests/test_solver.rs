use approx::assert_relative_eq;
use forcetrace::solver::{
    nalgebra_to_ndarray_vector, ndarray_to_nalgebra_matrix, ndarray_to_nalgebra_vector,
    LinearSolver, QrSolver, SolveError,
};
use nalgebra::{DMatrix, DVector};
use ndarray::array;

#[test]
fn test_qr_solver_solves_a_small_system() {
    let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
    let b = DVector::from_vec(vec![5.0, 10.0]);

    let x = QrSolver.solve(&m, &b).expect("system should be solvable");
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(x[1], 3.0, epsilon = 1e-9);
}

#[test]
fn test_qr_solver_handles_non_symmetric_input() {
    let m = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 0.0, 1.0]);
    let b = DVector::from_vec(vec![3.0, 1.0]);

    let x = QrSolver.solve(&m, &b).expect("system should be solvable");
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-9);
    assert_relative_eq!(x[1], 1.0, epsilon = 1e-9);
}

#[test]
fn test_qr_solver_reports_singular_systems() {
    let m = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0]);
    let b = DVector::from_vec(vec![1.0, 2.0]);
    assert_eq!(QrSolver.solve(&m, &b), Err(SolveError::SingularSystem));

    let zero = DMatrix::from_row_slice(1, 1, &[0.0]);
    let b = DVector::from_vec(vec![1.0]);
    assert_eq!(QrSolver.solve(&zero, &b), Err(SolveError::SingularSystem));
}

#[test]
fn test_qr_solver_accepts_an_empty_system() {
    let m = DMatrix::<f64>::zeros(0, 0);
    let b = DVector::<f64>::zeros(0);
    let x = QrSolver.solve(&m, &b).expect("empty system is trivially solved");
    assert_eq!(x.len(), 0);
}

#[test]
fn test_ndarray_nalgebra_conversions() {
    let matrix = array![[1.0, 2.0], [3.0, 4.0]];
    let converted = ndarray_to_nalgebra_matrix(&matrix);
    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(converted[(i, j)], matrix[[i, j]]);
        }
    }

    let vector = array![5.0, 6.0, 7.0];
    let roundtrip = nalgebra_to_ndarray_vector(&ndarray_to_nalgebra_vector(&vector));
    assert_eq!(roundtrip, vector);
}
