// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::utils::num::{ClosedAdd, Zero};
use core::ops::Add;

/// Shape checks which are evaluated when a generic function is monomorphized, turning a
/// dimension error into a compile error instead of a runtime one.
pub mod assertions {
    #[macro_export]
    macro_rules! const_assert_larger {
        ($x:tt, $y:tt) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertLarger<$x, $y>>::ASSERT;
        };
    }

    #[macro_export]
    macro_rules! const_assert_one_less {
        ($x:tt, $y:tt) => {
            #[allow(path_statements)]
            <$crate::utils::assertions::AssertOneLess<$x, $y>>::ASSERT;
        };
    }

    #[non_exhaustive]
    pub struct AssertLarger<const X: usize, const Y: usize>;

    impl<const X: usize, const Y: usize> AssertLarger<{ X }, { Y }> {
        pub const ASSERT: () = assert!(X > Y, "dimension is too small for this operation");
    }

    #[non_exhaustive]
    pub struct AssertOneLess<const X: usize, const Y: usize>;

    impl<const X: usize, const Y: usize> AssertOneLess<X, Y> {
        pub const ASSERT: () = assert!(
            X + 1 == Y,
            "a minor must have exactly one row and column fewer than its matrix"
        );
    }
}

pub mod num;

/// Analogous to the [`Iterator::sum()`] method, but which uses [`Zero`] and [`ClosedAdd`] instead of
/// the [`Sum`] trait.
///
/// [`Sum`]: core::iter::Sum
#[must_use]
#[inline(always)]
pub fn sum<I>(iter: I) -> I::Item
where
    I: IntoIterator,
    I::Item: Zero + ClosedAdd,
{
    iter.into_iter().fold(Zero::ZERO, Add::add)
}
