// src/solver.rs

// Module for the dense linear-solver capability behind the exact barycenter
// layout, plus ndarray <-> nalgebra conversion helpers.

use std::fmt;

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The coefficient matrix is singular (or numerically so); the system
    /// has no unique solution.
    SingularSystem,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::SingularSystem => {
                write!(f, "linear system is singular and cannot be solved")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Capability to solve a dense square system M * x = b. The matrix is not
/// assumed symmetric.
pub trait LinearSolver {
    fn solve(&self, matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError>;
}

/// Column-pivoted QR solver. Rank-revealing, so a zero row (e.g. a free
/// vertex with no neighbors) surfaces as [`SolveError::SingularSystem`]
/// instead of garbage coordinates.
pub struct QrSolver;

impl LinearSolver for QrSolver {
    fn solve(&self, matrix: &DMatrix<f64>, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        if matrix.nrows() == 0 {
            return Ok(DVector::zeros(0));
        }

        let qr = matrix.clone().col_piv_qr();
        let solution = qr.solve(rhs).ok_or(SolveError::SingularSystem)?;
        if solution.iter().any(|x| !x.is_finite()) {
            return Err(SolveError::SingularSystem);
        }
        Ok(solution)
    }
}

/// Converts an ndarray 2-D array into a nalgebra dense matrix.
pub fn ndarray_to_nalgebra_matrix(matrix: &Array2<f64>) -> DMatrix<f64> {
    let (rows, cols) = matrix.dim();
    DMatrix::from_fn(rows, cols, |i, j| matrix[[i, j]])
}

/// Converts an ndarray 1-D array into a nalgebra column vector.
pub fn ndarray_to_nalgebra_vector(vector: &Array1<f64>) -> DVector<f64> {
    DVector::from_iterator(vector.len(), vector.iter().copied())
}

/// Converts a nalgebra column vector back into an ndarray 1-D array.
pub fn nalgebra_to_ndarray_vector(vector: &DVector<f64>) -> Array1<f64> {
    Array1::from_iter(vector.iter().copied())
}
