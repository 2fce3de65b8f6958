// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-dimension matrices, vectors and quaternions, generic over their element type.
//!
//! Every shape is part of the type, so adding a 2×2 matrix to a 3×3 one, multiplying matrices with
//! mismatched inner dimensions or asking for the determinant of a non-square matrix are compile
//! errors. What the type system cannot see (a singular matrix, a zero divisor, an element index
//! chosen at runtime) is reported through [`MatrixError`](error::MatrixError).
//!
//! ```
//! use gem::{matrix::Matrix, vector::Vector};
//!
//! let matrix = Matrix::new([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//!
//! assert_eq!(matrix.determinant(), -2.0);
//! assert_eq!(matrix * matrix.inverse()?, Matrix::<f64, 2, 2>::identity());
//! assert_eq!(format!("{matrix}"), "[ 1, 2 ]\n[ 3, 4 ]");
//!
//! let row = Vector::new([1.0, 1.0]) * matrix;
//! assert_eq!(row.to_array(), [4.0, 6.0]);
//! # Ok::<(), gem::error::MatrixError>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod axis;
pub mod error;
pub mod functions;
pub mod matrix;
pub mod rotation;
pub mod utils;
pub mod vector;

pub use crate::{
    error::MatrixError,
    matrix::{
        Matrix, Matrix2, Matrix2f, Matrix2i, Matrix3, Matrix3f, Matrix3i, Matrix4, Matrix4f,
        Matrix4i,
    },
    rotation::quaternion::Quaternion,
    vector::{Vector, Vector2, Vector2f, Vector2i, Vector3, Vector3f, Vector3i, Vector4, Vector4f, Vector4i},
};
