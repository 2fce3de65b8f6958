// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unit vectors along the three Cartesian axes.

use crate::vector::{Vector, Vector3};

pub const X: Vector3<f64> = Vector::new([1.0, 0.0, 0.0]);
pub const Y: Vector3<f64> = Vector::new([0.0, 1.0, 0.0]);
pub const Z: Vector3<f64> = Vector::new([0.0, 0.0, 1.0]);
