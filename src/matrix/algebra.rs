// SPDX-License-Identifier: MIT OR Apache-2.0

use super::Matrix;
use crate::{
    const_assert_larger, const_assert_one_less,
    error::MatrixError,
    utils::{
        num::{ClosedAdd, One, Scalar, Signed, Zero},
        sum,
    },
};

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Returns the transpose of the matrix, where the rows become the columns.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.transpose(), Matrix::new([
    ///     [1, 4],
    ///     [2, 5],
    ///     [3, 6],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn transpose(self) -> Matrix<T, COLS, ROWS> {
        Matrix::from_fn(|row, col| self.data[col][row])
    }

    /// Returns the smallest element of the matrix.
    ///
    /// Elements which do not compare (such as `NaN`) are skipped over unless they come first.
    ///
    /// ```compile_fail
    /// # use gem::matrix::Matrix;
    /// let empty = Matrix::<f32, 0, 3>::new([]);
    /// let _ = empty.min();
    /// ```
    #[must_use]
    #[inline]
    pub fn min(&self) -> T
    where
        T: PartialOrd,
    {
        const_assert_larger!(ROWS, 0);
        const_assert_larger!(COLS, 0);

        self.elems()
            .copied()
            .fold(self.data[0][0], |min, elem| if elem < min { elem } else { min })
    }

    /// Returns the largest element of the matrix.
    #[must_use]
    #[inline]
    pub fn max(&self) -> T
    where
        T: PartialOrd,
    {
        const_assert_larger!(ROWS, 0);
        const_assert_larger!(COLS, 0);

        self.elems()
            .copied()
            .fold(self.data[0][0], |max, elem| if elem > max { elem } else { max })
    }
}

impl<T: Zero + One, const N: usize> Matrix<T, N, N> {
    /// Constructs an instance of the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::<f64, 3, 3>::identity();
    ///
    /// assert_eq!(matrix, Matrix::new([
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]));
    /// ```
    #[must_use]
    #[inline]
    pub fn identity() -> Self {
        Matrix::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Returns the elements on the leading diagonal.
    #[must_use]
    #[inline]
    pub fn diagonal(&self) -> [T; N] {
        core::array::from_fn(|i| self.data[i][i])
    }

    /// Returns the sum of the elements on the leading diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 1, 1, 1],
    ///     [2, 2, 2, 2],
    ///     [3, 3, 3, 3],
    ///     [4, 4, 4, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.trace(), 10);
    /// ```
    #[must_use]
    #[inline]
    pub fn trace(&self) -> T
    where
        T: Zero + ClosedAdd,
    {
        sum(self.diagonal())
    }
}

impl<T: Copy + Zero, const N: usize> Matrix<T, N, N> {
    /// Removes `removed_row` and `removed_col`, shifting the remaining elements towards the
    /// top-left corner. The last row and column are zero-filled, so the result keeps the size of
    /// `self`.
    #[inline]
    fn cofactor_shifted(&self, removed_row: usize, removed_col: usize) -> Self {
        Matrix::from_fn(|row, col| {
            if row + 1 >= N || col + 1 >= N {
                return T::ZERO;
            }

            let src_row = if row < removed_row { row } else { row + 1 };
            let src_col = if col < removed_col { col } else { col + 1 };
            self.data[src_row][src_col]
        })
    }

    /// Returns the matrix formed by deleting `removed_row` and `removed_col`.
    ///
    /// `K` must be exactly one less than `N`; anything else is rejected at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if `removed_row` or `removed_col` is not a valid
    /// index into the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [01, 02, 03, 04],
    ///     [05, 06, 07, 08],
    ///     [09, 10, 11, 12],
    ///     [13, 14, 15, 16],
    /// ]);
    ///
    /// assert_eq!(matrix.minor::<3>(1, 2), Ok(Matrix::new([
    ///     [01, 02, 04],
    ///     [09, 10, 12],
    ///     [13, 14, 16],
    /// ])));
    /// ```
    ///
    /// ```compile_fail
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::<i32, 3, 3>::identity();
    /// let _ = matrix.minor::<1>(0, 0);
    /// ```
    #[inline]
    pub fn minor<const K: usize>(
        &self,
        removed_row: usize,
        removed_col: usize,
    ) -> Result<Matrix<T, K, K>, MatrixError> {
        const_assert_one_less!(K, N);

        if removed_row >= N || removed_col >= N {
            return Err(MatrixError::IndexOutOfRange {
                row: removed_row,
                col: removed_col,
                rows: N,
                cols: N,
            });
        }

        Ok(Matrix::from_fn(|row, col| {
            let src_row = if row < removed_row { row } else { row + 1 };
            let src_col = if col < removed_col { col } else { col + 1 };
            self.data[src_row][src_col]
        }))
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Calculates the scalar determinant of the matrix.
    ///
    /// The determinant is found by cofactor expansion along the first row, recursing into
    /// smaller minors until a 2×2 or 1×1 matrix is reached. The determinant of a 0×0 matrix is
    /// `1`.
    ///
    /// If this value is `0`, then the matrix is not invertible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    ///
    /// assert_eq!(matrix.determinant(), -2.0);
    /// ```
    #[must_use]
    #[inline]
    pub fn determinant(&self) -> T {
        self.det_inner(N)
    }

    /// Determinant of the `n`×`n` top-left corner of the matrix.
    fn det_inner(&self, n: usize) -> T {
        match n {
            0 => T::ONE,
            1 => self.data[0][0],
            2 => (self.data[0][0] * self.data[1][1]) - (self.data[0][1] * self.data[1][0]),
            _ => {
                tracing::trace!(size = n, "expanding determinant along first row");

                let mut result = T::ZERO;
                let mut should_sub = false;
                for col in 0..n {
                    let value = self.data[0][col] * self.cofactor_shifted(0, col).det_inner(n - 1);
                    if should_sub {
                        result -= value;
                    } else {
                        result += value;
                    }

                    should_sub = !should_sub;
                }

                result
            }
        }
    }

    /// The determinant of the minor at (`row`, `col`).
    #[inline]
    fn minor_determinant(&self, row: usize, col: usize) -> T {
        self.cofactor_shifted(row, col).det_inner(N.saturating_sub(1))
    }

    /// Returns the matrix where each element is the determinant of the corresponding minor,
    /// without the alternating cofactor sign.
    #[must_use]
    #[inline]
    pub fn matrix_of_minors(&self) -> Self {
        Matrix::from_fn(|row, col| self.minor_determinant(row, col))
    }

    /// Returns whether the matrix is invertible.
    ///
    /// If this is `false`, then [`Matrix::inverse()`] will fail.
    #[must_use]
    #[inline]
    pub fn has_inverse(&self) -> bool {
        !self.determinant().is_zero()
    }
}

impl<T: Signed, const N: usize> Matrix<T, N, N> {
    /// Returns the matrix of cofactors, where entry (i, j) is the determinant of the minor at
    /// (i, j), negated when `i + j` is odd.
    ///
    /// The matrix must be at least 2×2; a 1×1 matrix does not compile.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    ///
    /// assert_eq!(matrix.cofactor_matrix(), Matrix::new([
    ///     [4, -3],
    ///     [-2, 1],
    /// ]));
    /// ```
    ///
    /// ```compile_fail
    /// # use gem::matrix::Matrix;
    /// let _ = Matrix::new([[5]]).cofactor_matrix();
    /// ```
    #[must_use]
    #[inline]
    pub fn cofactor_matrix(&self) -> Self {
        const_assert_larger!(N, 1);
        self.cofactor_matrix_unchecked()
    }

    fn cofactor_matrix_unchecked(&self) -> Self {
        match N {
            0 => *self,
            1 => Matrix::splat(T::ONE),
            // [[m11, -m10], [-m01, m00]]
            2 => Matrix::from_fn(|row, col| {
                let value = self.data[1 - row][1 - col];
                if row == col { value } else { -value }
            }),
            _ => Matrix::from_fn(|row, col| {
                let minor = self.minor_determinant(row, col);
                if (row + col) % 2 == 0 { minor } else { -minor }
            }),
        }
    }

    /// Returns the adjugate, the transpose of the cofactor matrix.
    ///
    /// The adjugate of a 1×1 matrix is `[1]`.
    #[doc(alias = "adjoint")]
    #[must_use]
    #[inline]
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix_unchecked().transpose()
    }

    /// Calculates the inverse of the matrix, as the cofactor matrix of its transpose multiplied
    /// by the reciprocal of the determinant.
    ///
    /// For integer element types the reciprocal truncates, so only matrices with a determinant of
    /// `1` or `-1` invert exactly.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Singular`] if the determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use gem::{error::MatrixError, matrix::Matrix};
    ///
    /// let matrix = Matrix::new([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]);
    ///
    /// assert_eq!(matrix.inverse(), Ok(Matrix::new([
    ///     [-2.0, 1.0],
    ///     [1.5, -0.5],
    /// ])));
    ///
    /// let singular = Matrix::new([
    ///     [1.0, 2.0],
    ///     [2.0, 4.0],
    /// ]);
    /// assert_eq!(singular.inverse(), Err(MatrixError::Singular));
    /// ```
    #[inline]
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if det.is_zero() {
            tracing::debug!(size = N, "cannot invert a singular matrix");
            return Err(MatrixError::Singular);
        }

        Ok(self.transpose().cofactor_matrix_unchecked() * (T::ONE / det))
    }
}
