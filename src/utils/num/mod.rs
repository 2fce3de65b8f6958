// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits describing what a matrix element type can do.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub mod checked;

pub trait ClosedSub: Sized + Sub<Output = Self> {}
pub trait ClosedMul: Sized + Mul<Output = Self> {}
pub trait ClosedAdd: Sized + Add<Output = Self> {}
pub trait ClosedDiv: Sized + Div<Output = Self> {}
pub trait ClosedNeg: Sized + Neg<Output = Self> {}

impl<T: Sized + Sub<Output = Self>> ClosedSub for T {}
impl<T: Sized + Mul<Output = Self>> ClosedMul for T {}
impl<T: Sized + Add<Output = Self>> ClosedAdd for T {}
impl<T: Sized + Div<Output = Self>> ClosedDiv for T {}
impl<T: Sized + Neg<Output = Self>> ClosedNeg for T {}

/// A numeric element type usable in every matrix operation which does not need negation or
/// roots.
pub trait Scalar:
    Copy
    + ClosedAdd
    + ClosedDiv
    + ClosedMul
    + ClosedSub
    + AddAssign
    + DivAssign
    + MulAssign
    + SubAssign
    + One
    + PartialEq
    + PartialOrd
    + Zero
{
}

impl<T> Scalar for T where
    T: Copy
        + ClosedAdd
        + ClosedDiv
        + ClosedMul
        + ClosedSub
        + AddAssign
        + DivAssign
        + MulAssign
        + SubAssign
        + One
        + PartialEq
        + PartialOrd
        + Zero
{
}

/// A [`Scalar`] which can be negated. Required by anything which produces signed cofactors.
pub trait Signed: Scalar + ClosedNeg {}
impl<T: Scalar + ClosedNeg> Signed for T {}

pub trait Sqrt: Copy {
    #[must_use]
    fn sqrt(self) -> Self;
}

pub trait Trig: Copy {
    #[must_use]
    fn sin(self) -> Self;
    #[must_use]
    fn cos(self) -> Self;

    #[must_use]
    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
}

#[doc(alias = "1")]
pub trait One: Sized {
    const ONE: Self;
}

#[doc(alias = "0")]
pub trait Zero: Sized {
    const ZERO: Self;

    #[must_use]
    #[inline]
    fn is_zero(&self) -> bool
    where
        Self: PartialEq,
    {
        *self == Self::ZERO
    }
}

/// Lossy numeric conversion with the semantics of an `as` cast.
///
/// # Examples
///
/// ```
/// # use gem::utils::num::CastFrom;
/// assert_eq!(i32::cast_from(2.75_f32), 2);
/// assert_eq!(f64::cast_from(7_u8), 7.0);
/// ```
pub trait CastFrom<T> {
    #[must_use]
    fn cast_from(value: T) -> Self;
}

macro_rules! impl_nums {
    (
        $( $num_ty:ty => ( zero = $zero:expr, one = $one:expr ) ),* $(,)?
    ) => {
        $(
            impl Zero for $num_ty {
                const ZERO: Self = $zero;
            }

            impl One for $num_ty {
                const ONE: Self = $one;
            }
        )*
    };
}

impl_nums! {
    u8 => (zero = 0, one = 1),
    u16 => (zero = 0, one = 1),
    u32 => (zero = 0, one = 1),
    u64 => (zero = 0, one = 1),
    u128 => (zero = 0, one = 1),
    usize => (zero = 0, one = 1),

    i8 => (zero = 0, one = 1),
    i16 => (zero = 0, one = 1),
    i32 => (zero = 0, one = 1),
    i64 => (zero = 0, one = 1),
    i128 => (zero = 0, one = 1),
    isize => (zero = 0, one = 1),

    f32 => (zero = 0.0, one = 1.0),
    f64 => (zero = 0.0, one = 1.0),
}

macro_rules! impl_cast_from {
    (@into $src:ty => $( $dst:ty ),* ) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline(always)]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )*
    };

    ( $( $src:ty ),* $(,)? ) => {
        $(
            impl_cast_from!(@into $src => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
        )*
    };
}

impl_cast_from! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
}

macro_rules! impl_float_traits {
    ( $($type:ty),* $(,)? ) => {
        $(
            #[cfg(feature = "std")]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    <$type>::sqrt(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Sqrt for $type {
                #[inline(always)]
                fn sqrt(self) -> Self {
                    libm::Libm::<$type>::sqrt(self)
                }
            }

            #[cfg(feature = "std")]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    <$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    <$type>::cos(self)
                }

                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    <$type>::sin_cos(self)
                }
            }

            #[cfg(all(feature = "libm", not(feature = "std")))]
            impl Trig for $type {
                #[inline]
                fn sin(self) -> Self {
                    libm::Libm::<$type>::sin(self)
                }

                #[inline]
                fn cos(self) -> Self {
                    libm::Libm::<$type>::cos(self)
                }
            }
        )*
    };
}

impl_float_traits! {
    f32, f64,
}
