// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-function forms of the matrix and vector operations.
//!
//! Each function forwards to the method of the same meaning, for code which reads better in
//! prefix form:
//!
//! ```
//! use gem::{functions::{determinant, inverse, transpose}, matrix::Matrix};
//!
//! let matrix = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
//!
//! assert_eq!(determinant(&matrix), determinant(&transpose(matrix)));
//! assert_eq!(inverse(&matrix).unwrap()[1], [1.5, -0.5]);
//! ```

use crate::{
    error::MatrixError,
    matrix::Matrix,
    utils::num::{ClosedAdd, ClosedMul, ClosedSub, One, Scalar, Signed, Sqrt, Zero},
    vector::{Vector, Vector3},
};

#[must_use]
#[inline]
pub fn determinant<T: Scalar, const N: usize>(matrix: &Matrix<T, N, N>) -> T {
    matrix.determinant()
}

/// The `K`×`K` matrix left after removing `row` and `col`. `K` must be one less than `N`.
///
/// # Errors
///
/// Returns [`MatrixError::IndexOutOfRange`] if `row` or `col` is out of bounds.
#[inline]
pub fn minor_matrix<T: Copy + Zero, const N: usize, const K: usize>(
    matrix: &Matrix<T, N, N>,
    row: usize,
    col: usize,
) -> Result<Matrix<T, K, K>, MatrixError> {
    matrix.minor::<K>(row, col)
}

#[must_use]
#[inline]
pub fn cofactor_matrix<T: Signed, const N: usize>(matrix: &Matrix<T, N, N>) -> Matrix<T, N, N> {
    matrix.cofactor_matrix()
}

#[must_use]
#[inline]
pub fn matrix_of_minors<T: Scalar, const N: usize>(matrix: &Matrix<T, N, N>) -> Matrix<T, N, N> {
    matrix.matrix_of_minors()
}

#[must_use]
#[inline]
pub fn transpose<T: Copy, const ROWS: usize, const COLS: usize>(
    matrix: Matrix<T, ROWS, COLS>,
) -> Matrix<T, COLS, ROWS> {
    matrix.transpose()
}

/// # Errors
///
/// Returns [`MatrixError::Singular`] if the determinant of `matrix` is zero.
#[inline]
pub fn inverse<T: Signed, const N: usize>(
    matrix: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, MatrixError> {
    matrix.inverse()
}

/// The `N`×`N` identity matrix.
///
/// ```
/// # use gem::{functions::identity, matrix::Matrix};
/// assert_eq!(identity::<i32, 2>(), Matrix::new([[1, 0], [0, 1]]));
/// ```
#[must_use]
#[inline]
pub fn identity<T: Zero + One, const N: usize>() -> Matrix<T, N, N> {
    Matrix::identity()
}

#[must_use]
#[inline]
pub fn trace<T: Copy + Zero + ClosedAdd, const N: usize>(matrix: &Matrix<T, N, N>) -> T {
    matrix.trace()
}

#[must_use]
#[inline]
pub fn min<T: Copy + PartialOrd, const ROWS: usize, const COLS: usize>(
    matrix: &Matrix<T, ROWS, COLS>,
) -> T {
    matrix.min()
}

#[must_use]
#[inline]
pub fn max<T: Copy + PartialOrd, const ROWS: usize, const COLS: usize>(
    matrix: &Matrix<T, ROWS, COLS>,
) -> T {
    matrix.max()
}

#[must_use]
#[inline]
pub fn dot<T: Copy + ClosedMul + ClosedAdd + Zero, const N: usize>(
    lhs: Vector<T, N>,
    rhs: Vector<T, N>,
) -> T {
    lhs.dot(rhs)
}

#[must_use]
#[inline]
pub fn cross<T: Copy + ClosedMul + ClosedSub>(lhs: Vector3<T>, rhs: Vector3<T>) -> Vector3<T> {
    lhs.cross(rhs)
}

#[must_use]
#[inline]
pub fn length<T: Scalar + Sqrt, const N: usize>(vector: Vector<T, N>) -> T {
    vector.length()
}

/// # Errors
///
/// Returns [`MatrixError::DivideByZero`] if `vector` has zero length.
#[inline]
pub fn normalise<T: Scalar + Sqrt, const N: usize>(
    vector: Vector<T, N>,
) -> Result<Vector<T, N>, MatrixError> {
    vector.normalised()
}

#[must_use]
#[inline]
pub fn distance<T: Scalar + Sqrt, const N: usize>(from: Vector<T, N>, to: Vector<T, N>) -> T {
    from.distance(to)
}

/// Sets every element of `matrix` to `value`.
#[inline]
pub fn fill<T: Clone, const ROWS: usize, const COLS: usize>(
    matrix: &mut Matrix<T, ROWS, COLS>,
    value: T,
) {
    matrix.fill(value);
}
