// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    error::MatrixError,
    utils::num::{ClosedAdd, ClosedDiv, ClosedMul, ClosedNeg, ClosedSub, One, Scalar, Sqrt, Trig, Zero},
    vector::{Vector3, Vector4},
};
use core::{
    fmt,
    ops::{Deref, DerefMut, Mul},
};
#[cfg(feature = "serde")]
use serde_core::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

/// A quaternion stored as the 4-vector `(x, y, z, w)`, where `w` is the scalar part.
///
/// Dereferences to its [`Vector4`], so the component accessors and vector arithmetic all apply.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Quaternion<T = f32> {
    vector: Vector4<T>,
}

impl<T> Quaternion<T> {
    #[must_use]
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vector: Vector4::new([x, y, z, w]),
        }
    }

    #[must_use]
    #[inline]
    pub fn from_components(v: Vector3<T>, w: T) -> Self {
        let [x, y, z] = v.to_array();
        Self::new(x, y, z, w)
    }

    #[must_use]
    #[inline]
    pub const fn from_vector(vector: Vector4<T>) -> Self {
        Self { vector }
    }

    #[must_use]
    #[inline]
    pub fn into_vector(self) -> Vector4<T> {
        self.vector
    }
}

impl<T: Zero + One> Quaternion<T> {
    /// The quaternion representing no rotation, `(0, 0, 0, 1)`.
    #[must_use]
    #[inline]
    pub const fn identity() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }
}

impl<T: Zero + One> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Trig + One + ClosedAdd + ClosedDiv + ClosedMul> Quaternion<T> {
    /// Creates the quaternion rotating by `radians` about `axis`, computed as
    /// `(axis * sin(radians / 2), cos(radians / 2))`.
    ///
    /// `axis` is used as given; pass a unit vector to get a unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gem::{axis, rotation::quaternion::Quaternion};
    /// let quat = Quaternion::from_axis_angle(axis::X, core::f64::consts::PI);
    ///
    /// assert_eq!(quat.x(), 1.0);
    /// assert!(quat.w().abs() < 1e-15);
    /// ```
    #[must_use]
    #[inline]
    pub fn from_axis_angle(axis: Vector3<T>, radians: T) -> Self {
        let half_angle = radians / (T::ONE + T::ONE);
        let (sin_a, cos_a) = Trig::sin_cos(half_angle);

        let [x, y, z] = axis.to_array();
        Self::new(x * sin_a, y * sin_a, z * sin_a, cos_a)
    }
}

impl<T: Copy + ClosedNeg> Quaternion<T> {
    /// Returns the quaternion with its vector part negated.
    #[must_use]
    #[inline]
    pub fn conjugated(self) -> Self {
        let [x, y, z, w] = self.vector.to_array();
        Self::new(-x, -y, -z, w)
    }

    #[inline]
    pub fn conjugate(&mut self) {
        *self = self.conjugated();
    }
}

impl<T: Copy + ClosedMul + ClosedAdd + Zero> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.vector.dot(rhs.vector)
    }
}

impl<T: Scalar + Sqrt> Quaternion<T> {
    #[must_use]
    #[inline]
    pub fn length(self) -> T {
        self.vector.length()
    }

    /// # Errors
    ///
    /// Returns [`MatrixError::DivideByZero`] if every component is zero.
    #[inline]
    pub fn normalised(self) -> Result<Self, MatrixError> {
        self.vector.normalised().map(Self::from_vector)
    }
}

impl<T> From<Quaternion<T>> for Vector4<T> {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        value.vector
    }
}

impl<T> From<Vector4<T>> for Quaternion<T> {
    #[inline]
    fn from(value: Vector4<T>) -> Self {
        Self::from_vector(value)
    }
}

impl<T> From<(Vector3<T>, T)> for Quaternion<T> {
    #[inline]
    fn from((v, w): (Vector3<T>, T)) -> Self {
        Self::from_components(v, w)
    }
}

impl<T> Deref for Quaternion<T> {
    type Target = Vector4<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vector
    }
}

impl<T> DerefMut for Quaternion<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vector
    }
}

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    #[inline]
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vector, fmtr)
    }
}

/// The Hamilton product; `a * b` applies `b` first, then `a`.
impl<T: Copy + ClosedMul + ClosedAdd + ClosedSub> Mul for Quaternion<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.vector.to_array();
        let [bx, by, bz, bw] = rhs.vector.to_array();

        Self::new(
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by - ax * bz + ay * bw + az * bx,
            aw * bz + ax * by - ay * bx + az * bw,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

#[cfg(feature = "mint")]
impl<T> From<mint::Quaternion<T>> for Quaternion<T> {
    #[inline]
    fn from(value: mint::Quaternion<T>) -> Self {
        Self::new(value.v.x, value.v.y, value.v.z, value.s)
    }
}

#[cfg(feature = "mint")]
impl<T> From<Quaternion<T>> for mint::Quaternion<T> {
    #[inline]
    fn from(value: Quaternion<T>) -> Self {
        let [x, y, z, s] = value.vector.to_array();
        mint::Quaternion {
            v: mint::Vector3 { x, y, z },
            s,
        }
    }
}

#[cfg(feature = "mint")]
impl<T> mint::IntoMint for Quaternion<T> {
    type MintType = mint::Quaternion<T>;
}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::AbsDiffEq> approx::AbsDiffEq for Quaternion<T>
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
        approx::AbsDiffEq::abs_diff_eq(&self.vector, &other.vector, epsilon)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::RelativeEq> approx::RelativeEq for Quaternion<T>
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
        approx::RelativeEq::relative_eq(&self.vector, &other.vector, epsilon, max_relative)
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T: approx::UlpsEq> approx::UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        approx::UlpsEq::ulps_eq(&self.vector, &other.vector, epsilon, max_ulps)
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for Quaternion<T> {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.vector.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de> + Zero> Deserialize<'de> for Quaternion<T> {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vector4::deserialize(deserializer).map(Self::from_vector)
    }
}

#[cfg(test)]
mod tests {
    #[cfg(any(feature = "std", feature = "libm"))]
    use crate::{axis, error::MatrixError};
    use crate::{rotation::quaternion::Quaternion, vector::Vector};

    #[test]
    fn test_quat_multiply() {
        let q1 = Quaternion::from_components(Vector::new([1.0, 2.0, 4.0]), 3.0);
        let q2 = Quaternion::identity();

        assert_eq!(q1 * q2, q1);
        assert_eq!(q2 * q1, q1);

        let i = Quaternion::new(1, 0, 0, 0);
        let j = Quaternion::new(0, 1, 0, 0);
        let k = Quaternion::new(0, 0, 1, 0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, k.conjugated());
        assert_eq!(i * i, Quaternion::new(0, 0, 0, -1));
    }

    #[test]
    fn test_components() {
        let mut quat = Quaternion::new(1, 2, 3, 4);
        assert_eq!((quat.x(), quat.y(), quat.z(), quat.w()), (1, 2, 3, 4));

        quat.set_w(9);
        assert_eq!(quat.into_vector(), Vector::new([1, 2, 3, 9]));
        assert_eq!(quat.conjugated(), Quaternion::new(-1, -2, -3, 9));
        assert_eq!(quat.dot(Quaternion::identity()), 9);
        assert_eq!(Quaternion::<i32>::default(), Quaternion::identity());
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_from_axis_angle() {
        let quat = Quaternion::from_axis_angle(axis::Z, core::f64::consts::FRAC_PI_2);
        let half_sqrt = core::f64::consts::FRAC_1_SQRT_2;

        approx::assert_relative_eq!(
            quat,
            Quaternion::new(0.0, 0.0, half_sqrt, half_sqrt),
            epsilon = 1e-15
        );
        approx::assert_relative_eq!(quat.length(), 1.0, epsilon = 1e-15);

        let none = Quaternion::from_axis_angle(axis::Y, 0.0);
        assert_eq!(none, Quaternion::identity());

        let quarter = quat * quat;
        approx::assert_relative_eq!(
            quarter,
            Quaternion::from_axis_angle(axis::Z, core::f64::consts::PI),
            epsilon = 1e-15
        );
        approx::assert_relative_eq!(
            quat * quat.conjugated(),
            Quaternion::identity(),
            epsilon = 1e-15
        );
    }

    #[cfg(any(feature = "std", feature = "libm"))]
    #[test]
    fn test_normalised() {
        let quat = Quaternion::new(0.0, 3.0, 0.0, 4.0);
        assert_eq!(quat.normalised(), Ok(Quaternion::new(0.0, 0.6, 0.0, 0.8)));
        assert_eq!(
            Quaternion::new(0.0_f32, 0.0, 0.0, 0.0).normalised(),
            Err(MatrixError::DivideByZero)
        );
    }
}
