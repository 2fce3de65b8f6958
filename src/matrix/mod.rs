// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    error::MatrixError,
    utils::{
        num::{CastFrom, ClosedAdd, ClosedDiv, ClosedMul, Signed, Zero, checked::CheckedDivAssign},
        sum,
    },
};
use alloc::vec::Vec;
use core::{
    array, fmt,
    ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
    slice,
};
#[cfg(feature = "serde")]
use core::marker::PhantomData;
#[cfg(feature = "serde")]
use serde_core::{
    de::{self, Deserialize, Deserializer, Error, SeqAccess},
    ser::{Serialize, SerializeTuple, Serializer},
};

mod algebra;
#[cfg(test)]
mod tests;

/// A row-major matrix with its dimensions fixed at compile time.
///
/// Every element is always initialized; a `Matrix` owns its elements by value and copying it
/// copies all of them.
#[derive(Clone, Copy, Debug, Hash)]
#[repr(C)]
pub struct Matrix<T = f32, const ROWS: usize = 4, const COLS: usize = 4> {
    data: [[T; COLS]; ROWS],
}

pub type Matrix2<T = f32> = Matrix<T, 2, 2>;
pub type Matrix3<T = f32> = Matrix<T, 3, 3>;
pub type Matrix4<T = f32> = Matrix<T, 4, 4>;

pub type Matrix2f = Matrix2<f32>;
pub type Matrix2i = Matrix2<i32>;
pub type Matrix3f = Matrix3<f32>;
pub type Matrix3i = Matrix3<i32>;
pub type Matrix4f = Matrix4<f32>;
pub type Matrix4i = Matrix4<i32>;

impl<T: Zero, const ROWS: usize, const COLS: usize> Default for Matrix<T, ROWS, COLS> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    pub const NUM_ELEMENTS: usize = ROWS * COLS;

    /// Create a new `Matrix` from the given nested array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let data: [[i32; 2]; 2] = [[1, 2], [3, 4]];
    /// let matrix: Matrix<i32, 2, 2> = Matrix::new(data);
    /// # let _matrix = matrix;
    /// ```
    #[must_use]
    #[inline]
    pub const fn new(data: [[T; COLS]; ROWS]) -> Self {
        Self { data }
    }

    /// Create a new `Matrix` by calling `f` with the row and column of every element, in
    /// row-major order.
    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self {
            data: array::from_fn(|row| array::from_fn(|col| f(row, col))),
        }
    }

    /// Creates a matrix by numerically converting every element of `other`, with the semantics of
    /// an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let floats = Matrix::new([[1.5_f32, -2.25], [3.0, 4.75]]);
    /// let ints: Matrix<i32, 2, 2> = Matrix::from_matrix(floats);
    /// assert_eq!(ints, Matrix::new([[1, -2], [3, 4]]));
    /// ```
    #[must_use]
    #[inline]
    pub fn from_matrix<U>(other: Matrix<U, ROWS, COLS>) -> Self
    where
        T: CastFrom<U>,
    {
        other.map(T::cast_from)
    }

    /// Converts every element of the matrix to `U`, with the semantics of an `as` cast.
    #[must_use]
    #[inline]
    pub fn cast<U: CastFrom<T>>(self) -> Matrix<U, ROWS, COLS> {
        self.map(U::cast_from)
    }

    #[must_use]
    #[inline(always)]
    pub const fn rows(&self) -> usize {
        ROWS
    }

    #[must_use]
    #[inline(always)]
    pub const fn cols(&self) -> usize {
        COLS
    }

    /// The number of elements in the matrix, `ROWS * COLS`.
    #[must_use]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        Self::NUM_ELEMENTS
    }

    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        Self::NUM_ELEMENTS == 0
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[[T; COLS]; ROWS] {
        &self.data
    }

    #[must_use]
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [[T; COLS]; ROWS] {
        &mut self.data
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [[T; COLS]; ROWS] {
        self.data
    }

    /// Returns the elements of the matrix as a flat slice, in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gem::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    ///
    /// assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, 6]);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    #[must_use]
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    #[inline]
    pub fn elems(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn elems_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Attempt to get a reference to the element at `Matrix[row][col]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use gem::{error::MatrixError, matrix::Matrix};
    ///
    /// let matrix: Matrix<f32, 3, 4> = Matrix::new([
    ///     [5.0, 6.0, 4.0, 2.0],
    ///     [1.0, 1.0, 3.0, 4.0],
    ///     [2.0, 7.0, 9.0, 0.0],
    /// ]);
    ///
    /// assert_eq!(matrix.get(1, 2), Ok(&3.0));
    /// assert_eq!(
    ///     matrix.get(3, 0),
    ///     Err(MatrixError::IndexOutOfRange { row: 3, col: 0, rows: 3, cols: 4 }),
    /// );
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        self.data
            .get(row)
            .and_then(|row_data| row_data.get(col))
            .ok_or(Self::out_of_range(row, col))
    }

    /// Attempt to get a mutable reference to the element at `Matrix[row][col]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        self.data
            .get_mut(row)
            .and_then(|row_data| row_data.get_mut(col))
            .ok_or(Self::out_of_range(row, col))
    }

    /// Replaces the element at `Matrix[row][col]` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is out of bounds. The matrix is
    /// left unchanged in that case.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    #[inline]
    const fn out_of_range(row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange {
            row,
            col,
            rows: ROWS,
            cols: COLS,
        }
    }

    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, ROWS, COLS> {
        Matrix {
            data: self.data.map(|row| row.map(&mut f)),
        }
    }

    /// Sets every element of the matrix to `value`.
    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.as_mut_slice().fill(value);
    }
}

impl<T: Copy, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Create a new `Matrix` with each element set to `value`.
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self {
            data: [[value; COLS]; ROWS],
        }
    }

    /// Returns a copy of the element at `Matrix[row][col]`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfRange`] if either index is out of bounds.
    #[inline]
    pub fn element(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        self.get(row, col).copied()
    }

    /// Returns the row at index `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= ROWS`.
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn row(&self, n: usize) -> [T; COLS] {
        self.data[n]
    }

    /// Returns the column at index `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= COLS`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::matrix::Matrix;
    /// let matrix = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(matrix.col(1), [2, 5]);
    /// ```
    #[track_caller]
    #[must_use]
    #[inline]
    pub fn col(&self, n: usize) -> [T; ROWS] {
        assert!(n < COLS, "column index out of bounds");
        self.data.map(|row| row[n])
    }

    #[inline]
    pub fn zip_map<U: Copy, Ret, F: FnMut(T, U) -> Ret>(
        self,
        rhs: Matrix<U, ROWS, COLS>,
        mut f: F,
    ) -> Matrix<Ret, ROWS, COLS> {
        Matrix::from_fn(|row, col| f(self.data[row][col], rhs.data[row][col]))
    }
}

impl<T: Zero, const ROWS: usize, const COLS: usize> Matrix<T, ROWS, COLS> {
    /// Creates a new `Matrix` where every element is zero.
    #[must_use]
    #[inline]
    pub fn zeros() -> Self {
        Self::from_fn(|_, _| T::ZERO)
    }

    /// Fills a new `Matrix` in row-major order from the items yielded by `iter`.
    ///
    /// Items beyond the first `ROWS * COLS` are not consumed.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InsufficientElements`] if `iter` runs out before every element has
    /// been filled.
    ///
    /// # Examples
    ///
    /// ```
    /// use gem::{error::MatrixError, matrix::{Matrix, Matrix2}};
    ///
    /// let matrix = Matrix2::<i32>::try_from_iter(1..=4);
    /// assert_eq!(matrix, Ok(Matrix::new([[1, 2], [3, 4]])));
    ///
    /// let matrix = Matrix2::<i32>::try_from_iter(1..=3);
    /// assert_eq!(matrix, Err(MatrixError::InsufficientElements { expected: 4, found: 3 }));
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, MatrixError> {
        let mut iter = iter.into_iter();
        let mut matrix = Self::zeros();

        for (found, slot) in matrix.elems_mut().enumerate() {
            match iter.next() {
                Some(elem) => *slot = elem,
                None => {
                    tracing::debug!(
                        expected = Self::NUM_ELEMENTS,
                        found,
                        "not enough elements to fill matrix"
                    );
                    return Err(MatrixError::InsufficientElements {
                        expected: Self::NUM_ELEMENTS,
                        found,
                    });
                }
            }
        }

        Ok(matrix)
    }

    /// Fills a new `Matrix` in row-major order from the start of `elems`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InsufficientElements`] if `elems` is shorter than `ROWS * COLS`.
    #[inline]
    pub fn try_from_slice(elems: &[T]) -> Result<Self, MatrixError>
    where
        T: Copy,
    {
        Self::try_from_iter(elems.iter().copied())
    }

    /// Builds a `Matrix` from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if there are not exactly `ROWS` rows, or if any row
    /// does not have exactly `COLS` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use gem::{error::MatrixError, matrix::Matrix};
    ///
    /// let rows: [&[i32]; 2] = [&[1, 2, 3], &[4, 5]];
    /// let matrix = Matrix::<i32, 2, 3>::try_from_rows(&rows);
    ///
    /// assert_eq!(matrix, Err(MatrixError::ShapeMismatch {
    ///     expected_rows: 2,
    ///     expected_cols: 3,
    ///     found_rows: 2,
    ///     found_cols: 2,
    /// }));
    /// ```
    pub fn try_from_rows(rows: &[&[T]]) -> Result<Self, MatrixError>
    where
        T: Copy,
    {
        let mismatch = |found_rows, found_cols| MatrixError::ShapeMismatch {
            expected_rows: ROWS,
            expected_cols: COLS,
            found_rows,
            found_cols,
        };

        if rows.len() != ROWS {
            let found_cols = rows.first().map_or(0, |row| row.len());
            return Err(mismatch(rows.len(), found_cols));
        }

        if let Some(ragged) = rows.iter().find(|row| row.len() != COLS) {
            return Err(mismatch(rows.len(), ragged.len()));
        }

        Ok(Self::from_fn(|row, col| rows[row][col]))
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<usize> for Matrix<T, ROWS, COLS> {
    type Output = [T; COLS];
    /// Returns row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= ROWS`. Use [`Matrix::get`] for a checked lookup.
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<usize> for Matrix<T, ROWS, COLS> {
    /// # Panics
    ///
    /// Panics if `index >= ROWS`. Use [`Matrix::get_mut`] for a checked lookup.
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, const ROWS: usize, const COLS: usize> Index<(usize, usize)> for Matrix<T, ROWS, COLS> {
    type Output = T;
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`. Use [`Matrix::get`] or [`Matrix::element`]
    /// for a checked lookup.
    #[track_caller]
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row][col]
    }
}

impl<T, const ROWS: usize, const COLS: usize> IndexMut<(usize, usize)> for Matrix<T, ROWS, COLS> {
    /// # Panics
    ///
    /// Panics if `row >= ROWS` or `col >= COLS`. Use [`Matrix::get_mut`] or [`Matrix::set`]
    /// for a checked write.
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row][col]
    }
}

/// Matrices of different shapes are never equal.
impl<T, U, const ROWS: usize, const COLS: usize, const ROWS2: usize, const COLS2: usize>
    PartialEq<Matrix<U, ROWS2, COLS2>> for Matrix<T, ROWS, COLS>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Matrix<U, ROWS2, COLS2>) -> bool {
        ROWS == ROWS2
            && COLS == COLS2
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(lhs, rhs)| lhs == rhs)
    }
}

impl<T: Eq, const ROWS: usize, const COLS: usize> Eq for Matrix<T, ROWS, COLS> {}

impl<T, const ROWS: usize, const COLS: usize> From<[[T; COLS]; ROWS]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn from(value: [[T; COLS]; ROWS]) -> Self {
        Self::new(value)
    }
}

impl<T, const ROWS: usize, const COLS: usize> From<Matrix<T, ROWS, COLS>> for [[T; COLS]; ROWS] {
    #[inline]
    fn from(value: Matrix<T, ROWS, COLS>) -> Self {
        value.data
    }
}

impl<T: Copy + Zero, const ROWS: usize, const COLS: usize> TryFrom<&[T]> for Matrix<T, ROWS, COLS> {
    type Error = MatrixError;
    #[inline]
    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(value)
    }
}

impl<T: Zero, const ROWS: usize, const COLS: usize> TryFrom<Vec<T>> for Matrix<T, ROWS, COLS> {
    type Error = MatrixError;
    #[inline]
    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_iter(value)
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsRef<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const ROWS: usize, const COLS: usize> AsMut<[T]> for Matrix<T, ROWS, COLS> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Renders one line per row, `[ e0, e1, ..., eN ]`, without a trailing newline. Formatting flags
/// such as precision are applied to every element.
impl<T: fmt::Display, const ROWS: usize, const COLS: usize> fmt::Display
    for Matrix<T, ROWS, COLS>
{
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.data.iter().enumerate() {
            if row_idx != 0 {
                fmtr.write_str("\n")?;
            }

            if row.is_empty() {
                fmtr.write_str("[ ]")?;
                continue;
            }

            fmtr.write_str("[ ")?;
            for (col_idx, elem) in row.iter().enumerate() {
                if col_idx != 0 {
                    fmtr.write_str(", ")?;
                }
                fmt::Display::fmt(elem, fmtr)?;
            }
            fmtr.write_str(" ]")?;
        }

        Ok(())
    }
}

impl<T, const A: usize, const B: usize, const C: usize> Mul<Matrix<T, B, C>> for Matrix<T, A, B>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Matrix<T, A, C>;
    #[inline]
    fn mul(self, rhs: Matrix<T, B, C>) -> Self::Output {
        Matrix::from_fn(|row, col| sum((0..B).map(|k| self.data[row][k] * rhs.data[k][col])))
    }
}

impl<T: Copy + Mul, const ROWS: usize, const COLS: usize> Mul<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.map(|item| item * rhs)
    }
}

impl<T: MulAssign + Copy, const ROWS: usize, const COLS: usize> MulAssign<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for elem in self.as_mut_slice() {
            elem.mul_assign(rhs);
        }
    }
}

impl<T, const ROWS: usize, const COLS: usize> MulAssign<Matrix<T, COLS, COLS>>
    for Matrix<T, ROWS, COLS>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, COLS, COLS>) {
        *self = *self * rhs;
    }
}

/// Divides every element by `rhs`.
///
/// # Errors
///
/// Returns [`MatrixError::DivideByZero`] if `rhs` is zero.
impl<T, const ROWS: usize, const COLS: usize> Div<T> for Matrix<T, ROWS, COLS>
where
    T: Copy + Zero + PartialEq + ClosedDiv,
{
    type Output = Result<Self, MatrixError>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        if rhs.is_zero() {
            tracing::debug!(rows = ROWS, cols = COLS, "matrix divided by zero scalar");
            return Err(MatrixError::DivideByZero);
        }

        Ok(self.map(|elem| elem / rhs))
    }
}

/// Multiplies by the inverse of `rhs`.
///
/// # Errors
///
/// Returns [`MatrixError::Singular`] if `rhs` has no inverse.
impl<T: Signed, const ROWS: usize, const COLS: usize> Div<Matrix<T, COLS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Output = Result<Self, MatrixError>;
    #[inline]
    fn div(self, rhs: Matrix<T, COLS, COLS>) -> Self::Output {
        Ok(self * rhs.inverse()?)
    }
}

impl<T, const ROWS: usize, const COLS: usize> CheckedDivAssign<T> for Matrix<T, ROWS, COLS>
where
    T: Copy + Zero + PartialEq + ClosedDiv,
{
    type Error = MatrixError;
    #[inline]
    fn checked_div_assign(&mut self, rhs: T) -> Result<(), Self::Error> {
        *self = (*self / rhs)?;
        Ok(())
    }
}

impl<T: Signed, const ROWS: usize, const COLS: usize> CheckedDivAssign<Matrix<T, COLS, COLS>>
    for Matrix<T, ROWS, COLS>
{
    type Error = MatrixError;
    #[inline]
    fn checked_div_assign(&mut self, rhs: Matrix<T, COLS, COLS>) -> Result<(), Self::Error> {
        *self = (*self / rhs)?;
        Ok(())
    }
}

impl<T: Copy + Add, const ROWS: usize, const COLS: usize> Add for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, Add::add)
    }
}

/// Adds `rhs` to every element.
impl<T: Copy + Add, const ROWS: usize, const COLS: usize> Add<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.map(|elem| elem + rhs)
    }
}

impl<T: AddAssign + Copy, const ROWS: usize, const COLS: usize> AddAssign
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (elem, rhs) in self.elems_mut().zip(rhs.as_slice()) {
            elem.add_assign(*rhs);
        }
    }
}

impl<T: AddAssign + Copy, const ROWS: usize, const COLS: usize> AddAssign<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        for elem in self.elems_mut() {
            elem.add_assign(rhs);
        }
    }
}

impl<T: Copy + Sub, const ROWS: usize, const COLS: usize> Sub for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, Sub::sub)
    }
}

/// Subtracts `rhs` from every element.
impl<T: Copy + Sub, const ROWS: usize, const COLS: usize> Sub<T> for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;
    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.map(|elem| elem - rhs)
    }
}

impl<T: SubAssign + Copy, const ROWS: usize, const COLS: usize> SubAssign
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (elem, rhs) in self.elems_mut().zip(rhs.as_slice()) {
            elem.sub_assign(*rhs);
        }
    }
}

impl<T: SubAssign + Copy, const ROWS: usize, const COLS: usize> SubAssign<T>
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        for elem in self.elems_mut() {
            elem.sub_assign(rhs);
        }
    }
}

impl<T: Neg, const ROWS: usize, const COLS: usize> Neg for Matrix<T, ROWS, COLS> {
    type Output = Matrix<T::Output, ROWS, COLS>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|elem| elem.neg())
    }
}

macro_rules! impl_matrix_conversion {
    ( $matrix_name:ident => ($rows:literal, $cols:literal) [ $( $row_vecs:ident ),* $(,)? ] ) => {
        #[cfg(feature = "mint")]
        impl<T> From<mint:: $matrix_name <T>> for Matrix<T, $rows, $cols> {
            #[inline]
            fn from(value: mint:: $matrix_name<T>) -> Self {
                Matrix::new([
                    $( value. $row_vecs .into(), )*
                ])
            }
        }

        #[cfg(feature = "mint")]
        impl<T> From<Matrix<T, $rows, $cols>> for mint:: $matrix_name<T> {
            #[inline]
            fn from(value: Matrix<T, $rows, $cols>) -> Self {
                mint::$matrix_name::from(value.to_array())
            }
        }

        #[cfg(feature = "mint")]
        impl<T> mint::IntoMint for Matrix<T, $rows, $cols> {
            type MintType = mint:: $matrix_name<T>;
        }
    };
}

macro_rules! impl_matrix_conversions {
    (
        $(
            $matrix_name:ident => ($rows:literal, $cols:literal) [ $( $row_vecs:ident ),* $(,)? ]
        )*
    ) => {
        $(
            impl_matrix_conversion!( $matrix_name => ($rows, $cols) [ $( $row_vecs ),* ]);
        )*
    };
}

impl_matrix_conversions! {
    RowMatrix2 => (2, 2) [x, y]
    RowMatrix3 => (3, 3) [x, y, z]
    RowMatrix4 => (4, 4) [x, y, z, w]
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const ROWS: usize, const COLS: usize> bytemuck::Zeroable
    for Matrix<T, ROWS, COLS>
{
    #[inline]
    fn zeroed() -> Self {
        Matrix::from_fn(|_, _| bytemuck::Zeroable::zeroed())
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const ROWS: usize, const COLS: usize> bytemuck::Pod
    for Matrix<T, ROWS, COLS>
{
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::AbsDiffEq, const ROWS: usize, const COLS: usize> approx::AbsDiffEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.abs_diff_eq(y, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::RelativeEq, const ROWS: usize, const COLS: usize> approx::RelativeEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::UlpsEq, const ROWS: usize, const COLS: usize> approx::UlpsEq
    for Matrix<T, ROWS, COLS>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(x, y)| x.ulps_eq(y, epsilon, max_ulps))
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, const ROWS: usize, const COLS: usize> Serialize for Matrix<T, ROWS, COLS> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(Self::NUM_ELEMENTS)?;
        for elem in self.as_slice() {
            tuple.serialize_element(elem)?;
        }
        tuple.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, const ROWS: usize, const COLS: usize> Deserialize<'de> for Matrix<T, ROWS, COLS>
where
    T: Deserialize<'de> + Zero,
{
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor<T, const ROWS: usize, const COLS: usize>(PhantomData<Matrix<T, ROWS, COLS>>);

        impl<'de, T, const ROWS: usize, const COLS: usize> de::Visitor<'de> for Visitor<T, ROWS, COLS>
        where
            T: Deserialize<'de> + Zero,
        {
            type Value = Matrix<T, ROWS, COLS>;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a row-major sequence of {} elements for a {}x{} matrix",
                    ROWS * COLS,
                    ROWS,
                    COLS
                )
            }

            #[inline]
            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut matrix = Matrix::<T, ROWS, COLS>::zeros();
                for (i, slot) in matrix.elems_mut().enumerate() {
                    *slot = seq
                        .next_element::<T>()?
                        .ok_or_else(|| A::Error::invalid_length(i, &self))?;
                }

                Ok(matrix)
            }
        }

        deserializer.deserialize_tuple(ROWS * COLS, Visitor::<T, ROWS, COLS>(PhantomData))
    }
}
