// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rotation types layered over [`Vector`](crate::vector::Vector).

pub mod quaternion;
