// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    const_assert_larger,
    error::MatrixError,
    matrix::Matrix,
    utils::{
        num::{ClosedAdd, ClosedMul, ClosedSub, One, Scalar, Sqrt, Zero, checked::CheckedDivAssign},
        sum,
    },
};
use core::{
    fmt,
    ops::{
        Add, AddAssign, Deref, DerefMut, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

/// A row vector: a [`Matrix`] with a single row.
///
/// A `Vector` dereferences to its underlying `Matrix<T, 1, N>`, so every matrix operation is
/// available on it, alongside the named component accessors and the geometric helpers below.
#[repr(transparent)]
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Vector<T = f32, const N: usize = 3> {
    matrix: Matrix<T, 1, N>,
}

pub type Vector2<T = f32> = Vector<T, 2>;
pub type Vector3<T = f32> = Vector<T, 3>;
pub type Vector4<T = f32> = Vector<T, 4>;

pub type Vector2f = Vector2<f32>;
pub type Vector2i = Vector2<i32>;
pub type Vector3f = Vector3<f32>;
pub type Vector3i = Vector3<i32>;
pub type Vector4f = Vector4<f32>;
pub type Vector4i = Vector4<i32>;

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmtr.write_str("Vector ")?;
        fmtr.debug_list().entries(self.as_slice()).finish()
    }
}

/// Renders the vector as a single matrix row, `[ x, y, z ]`.
impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, fmtr)
    }
}

impl<T: Zero, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self {
            matrix: Matrix::new([data]),
        }
    }

    #[must_use]
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
        Self {
            matrix: Matrix::from_fn(|_, col| f(col)),
        }
    }

    #[must_use]
    #[inline]
    pub const fn from_matrix(matrix: Matrix<T, 1, N>) -> Self {
        Self { matrix }
    }

    /// The number of components, `N`.
    #[must_use]
    #[inline(always)]
    pub const fn size(&self) -> usize {
        N
    }

    #[must_use]
    #[inline]
    pub fn into_matrix(self) -> Matrix<T, 1, N> {
        self.matrix
    }

    #[must_use]
    #[inline]
    pub fn to_array(self) -> [T; N] {
        let [row] = self.matrix.to_array();
        row
    }

    #[must_use]
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.matrix.as_array()[0]
    }

    #[must_use]
    #[inline]
    pub const fn as_array_mut(&mut self) -> &mut [T; N] {
        &mut self.matrix.as_array_mut()[0]
    }

    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector::from_matrix(self.matrix.map(f))
    }
}

impl<T: Copy, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// The first component.
    ///
    /// ```compile_fail
    /// # use gem::vector::Vector;
    /// let _ = Vector::<f32, 0>::new([]).x();
    /// ```
    #[must_use]
    #[inline]
    pub fn x(&self) -> T {
        const_assert_larger!(N, 0);
        self.as_array()[0]
    }

    #[must_use]
    #[inline]
    pub fn y(&self) -> T {
        const_assert_larger!(N, 1);
        self.as_array()[1]
    }

    #[must_use]
    #[inline]
    pub fn z(&self) -> T {
        const_assert_larger!(N, 2);
        self.as_array()[2]
    }

    /// The fourth component. Only available on vectors with at least four elements.
    ///
    /// ```compile_fail
    /// # use gem::vector::Vector2;
    /// let _ = Vector2::new([1.0, 2.0]).w();
    /// ```
    #[must_use]
    #[inline]
    pub fn w(&self) -> T {
        const_assert_larger!(N, 3);
        self.as_array()[3]
    }

    #[inline]
    pub fn set_x(&mut self, value: T) {
        const_assert_larger!(N, 0);
        self.as_array_mut()[0] = value;
    }

    #[inline]
    pub fn set_y(&mut self, value: T) {
        const_assert_larger!(N, 1);
        self.as_array_mut()[1] = value;
    }

    #[inline]
    pub fn set_z(&mut self, value: T) {
        const_assert_larger!(N, 2);
        self.as_array_mut()[2] = value;
    }

    #[inline]
    pub fn set_w(&mut self, value: T) {
        const_assert_larger!(N, 3);
        self.as_array_mut()[3] = value;
    }
}

impl<T: Zero, const N: usize> Vector<T, N> {
    #[must_use]
    #[inline]
    pub fn zeros() -> Self {
        Self::from_matrix(Matrix::zeros())
    }

    /// Fills a new `Vector` from the start of `elems`, ignoring any surplus.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InsufficientElements`] if `elems` is shorter than `N`.
    #[inline]
    pub fn try_from_slice(elems: &[T]) -> Result<Self, MatrixError>
    where
        T: Copy,
    {
        Matrix::try_from_slice(elems).map(Self::from_matrix)
    }
}

impl<T: Zero + One, const N: usize> Vector<T, N> {
    /// Returns the vector with a `1` in component `AXIS` and `0` everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::vector::Vector;
    /// let vector = Vector::<i32, 3>::unit::<1>();
    /// assert_eq!(vector.to_array(), [0, 1, 0]);
    /// ```
    #[must_use]
    #[inline]
    pub fn unit<const AXIS: usize>() -> Self {
        const_assert_larger!(N, AXIS);
        Self::from_fn(|i| if i == AXIS { T::ONE } else { T::ZERO })
    }
}

impl<T: Copy + ClosedMul + ClosedAdd + Zero, const N: usize> Vector<T, N> {
    /// Returns the sum of the pairwise products of the two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::vector::Vector;
    /// let a = Vector::new([1, 3, -5]);
    /// let b = Vector::new([4, -2, -1]);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        sum(self
            .as_array()
            .iter()
            .zip(rhs.as_array())
            .map(|(lhs, rhs)| *lhs * *rhs))
    }

    #[must_use]
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }
}

impl<T: Scalar + Sqrt, const N: usize> Vector<T, N> {
    /// The Euclidean length of the vector.
    #[doc(alias = "magnitude")]
    #[must_use]
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Returns the vector scaled to a length of `1`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DivideByZero`] for a zero-length vector.
    #[doc(alias = "normalize")]
    #[inline]
    pub fn normalised(self) -> Result<Self, MatrixError> {
        let length = self.length();
        if length.is_zero() {
            tracing::debug!(len = N, "cannot normalise a zero-length vector");
            return Err(MatrixError::DivideByZero);
        }

        self / length
    }

    /// The Euclidean distance between two points.
    #[must_use]
    #[inline]
    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }
}

impl<T: Copy + ClosedMul + ClosedSub> Vector<T, 3> {
    /// Returns the cross product of two 3-vectors, perpendicular to both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::vector::Vector;
    /// let x = Vector::new([1, 0, 0]);
    /// let y = Vector::new([0, 1, 0]);
    /// assert_eq!(x.cross(y), Vector::new([0, 0, 1]));
    /// ```
    #[must_use]
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.to_array();
        let [bx, by, bz] = rhs.to_array();

        Vector::new([
            (ay * bz) - (az * by),
            (az * bx) - (ax * bz),
            (ax * by) - (ay * bx),
        ])
    }
}

impl<T, const N: usize> Deref for Vector<T, N> {
    type Target = Matrix<T, 1, N>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.matrix
    }
}

impl<T, const N: usize> DerefMut for Vector<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.matrix
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`Matrix::get`] with row `0` for a checked lookup.
    #[track_caller]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_array()[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    /// # Panics
    ///
    /// Panics if `index >= N`. Use [`Matrix::set`] with row `0` for a checked write.
    #[track_caller]
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_array_mut()[index]
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.to_array()
    }
}

impl<T, const N: usize> From<Matrix<T, 1, N>> for Vector<T, N> {
    #[inline]
    fn from(value: Matrix<T, 1, N>) -> Self {
        Self::from_matrix(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for Matrix<T, 1, N> {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.matrix
    }
}

impl<T: Neg, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector::from_matrix(-self.matrix)
    }
}

impl<T: Copy + Add, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vector::from_matrix(self.matrix + rhs.matrix)
    }
}

impl<T: Copy + AddAssign, const N: usize> AddAssign for Vector<T, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.matrix += rhs.matrix;
    }
}

impl<T: Copy + Sub, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::from_matrix(self.matrix - rhs.matrix)
    }
}

impl<T: Copy + SubAssign, const N: usize> SubAssign for Vector<T, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.matrix -= rhs.matrix;
    }
}

impl<T: Copy + Mul, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Vector::from_matrix(self.matrix * rhs)
    }
}

impl<T: Copy + MulAssign, const N: usize> MulAssign<T> for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.matrix *= rhs;
    }
}

/// Element-wise product.
impl<T: Copy + Mul, const N: usize> Mul for Vector<T, N> {
    type Output = Vector<T::Output, N>;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Vector::from_matrix(self.matrix.zip_map(rhs.matrix, Mul::mul))
    }
}

impl<T: Copy + MulAssign, const N: usize> MulAssign for Vector<T, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        for (elem, rhs) in self.as_array_mut().iter_mut().zip(rhs.to_array()) {
            *elem *= rhs;
        }
    }
}

/// Treats the vector as a `1×N` row and multiplies it by an `N×P` matrix.
impl<T, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Vector<T, N>
where
    T: Zero + Copy + ClosedMul + ClosedAdd,
{
    type Output = Vector<T, P>;
    #[inline]
    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Vector::from_matrix(self.matrix * rhs)
    }
}

/// # Errors
///
/// Returns [`MatrixError::DivideByZero`] if `rhs` is zero.
impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Result<Self, MatrixError>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        (self.matrix / rhs).map(Self::from_matrix)
    }
}

/// Element-wise quotient.
///
/// # Errors
///
/// Returns [`MatrixError::DivideByZero`] if any element of `rhs` is zero.
impl<T: Scalar, const N: usize> Div for Vector<T, N> {
    type Output = Result<Self, MatrixError>;
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        if rhs.as_array().iter().any(Zero::is_zero) {
            tracing::debug!(len = N, "vector divided by a vector with a zero element");
            return Err(MatrixError::DivideByZero);
        }

        Ok(Vector::from_matrix(self.matrix.zip_map(rhs.matrix, Div::div)))
    }
}

impl<T: Scalar, const N: usize> CheckedDivAssign<T> for Vector<T, N> {
    type Error = MatrixError;
    #[inline]
    fn checked_div_assign(&mut self, rhs: T) -> Result<(), Self::Error> {
        *self = (*self / rhs)?;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> CheckedDivAssign for Vector<T, N> {
    type Error = MatrixError;
    #[inline]
    fn checked_div_assign(&mut self, rhs: Self) -> Result<(), Self::Error> {
        *self = (*self / rhs)?;
        Ok(())
    }
}

macro_rules! impl_vector_conversion {
    ( $( $mint_name:ident => ($len:literal) [ $( $field:ident ),* ] ),* $(,)? ) => {
        $(
            #[cfg(feature = "mint")]
            impl<T> From<mint::$mint_name<T>> for Vector<T, $len> {
                #[inline]
                fn from(value: mint::$mint_name<T>) -> Self {
                    Vector::new([ $( value.$field, )* ])
                }
            }

            #[cfg(feature = "mint")]
            impl<T> From<Vector<T, $len>> for mint::$mint_name<T> {
                #[inline]
                fn from(value: Vector<T, $len>) -> Self {
                    mint::$mint_name::from(value.to_array())
                }
            }

            #[cfg(feature = "mint")]
            impl<T> mint::IntoMint for Vector<T, $len> {
                type MintType = mint::$mint_name<T>;
            }
        )*
    };
}

impl_vector_conversion! {
    Vector2 => (2) [x, y],
    Vector3 => (3) [x, y, z],
    Vector4 => (4) [x, y, z, w],
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::AbsDiffEq, const N: usize> approx::AbsDiffEq for Vector<T, N>
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
        approx::AbsDiffEq::abs_diff_eq(&self.matrix, &other.matrix, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::RelativeEq, const N: usize> approx::RelativeEq for Vector<T, N>
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
        approx::RelativeEq::relative_eq(&self.matrix, &other.matrix, epsilon, max_relative)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::UlpsEq, const N: usize> approx::UlpsEq for Vector<T, N>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.matrix, &other.matrix, epsilon, max_ulps)
    }
}

/// Serialized as a tuple of `N` elements, the same as the underlying matrix row.
#[cfg(feature = "serde")]
impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.matrix.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de> + Zero, const N: usize> Deserialize<'de> for Vector<T, N> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Matrix::deserialize(deserializer).map(Self::from_matrix)
    }
}
