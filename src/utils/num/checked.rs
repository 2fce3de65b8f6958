// SPDX-License-Identifier: MIT OR Apache-2.0

use core::fmt;

/// Division which may fail, returning an error in place of a quotient.
///
/// The `/` operators on matrices and vectors already return a `Result`. This trait is the
/// compound-assignment counterpart, as [`DivAssign`] has no way to report a failure.
///
/// [`DivAssign`]: core::ops::DivAssign
pub trait CheckedDivAssign<Rhs = Self> {
    type Error: fmt::Debug;

    /// Divides `self` by `rhs` in place. On failure, `self` is left untouched.
    fn checked_div_assign(&mut self, rhs: Rhs) -> Result<(), Self::Error>;
}
