// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors reported by fallible matrix, vector and quaternion operations.
///
/// Shape errors which the type system can see (adding a 2×2 to a 3×3, taking the determinant of
/// a non-square matrix, multiplying with mismatched inner dimensions) never reach this type: they
/// fail to compile.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Input data does not describe a matrix of the requested shape.
    #[error("expected a {expected_rows}x{expected_cols} matrix, found {found_rows}x{found_cols}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The determinant of the matrix is exactly zero, so it has no inverse.
    #[error("matrix is singular and cannot be inverted")]
    Singular,

    #[error("attempted divide by zero")]
    DivideByZero,

    #[error("expected {expected} elements to fill the matrix, found {found}")]
    InsufficientElements { expected: usize, found: usize },
}
