//! # quatrot
//!
//! Unit quaternion rotations with the API shape of Unity's `Quaternion`:
//! Euler and angle-axis conversion, composition, vector rotation, look and
//! from-to constructors, lerp and slerp. Pure Rust, no-std compatible, generic
//! over `f32` / `f64`.
//!
//! ## Quick start
//!
//! ```
//! use quatrot::{Quaternion, Vector3};
//!
//! // 90° yaw, then look at a target
//! let yaw = Quaternion::<f64>::euler(0.0, 90.0, 0.0);
//! let fwd = yaw.rotate_vector(Vector3::z_axis());
//! assert!((fwd[0] - 1.0).abs() < 1e-12);
//!
//! let look = Quaternion::look_rotation_y_up(Vector3::new(1.0, 0.0, 0.0));
//! assert!(look.same_rotation(&yaw, 1e-12));
//!
//! // Halfway there along the great circle
//! let half = Quaternion::identity().slerp(&yaw, 0.5);
//! assert!((half.euler_angles()[1] - 45.0).abs() < 1e-9);
//! ```
//!
//! ## Conventions
//!
//! - Components are `(x, y, z, w)`, `w` is the scalar part.
//! - Public angles are degrees. [`Quaternion::from_axis_angle`] and
//!   [`Quaternion::to_axis_angle`] are the radian escape hatch.
//! - `a.multiply(&b)` applies `a` first, then `b` in `a`'s local frame, so
//!   `(a * b) * v == a * (b * v)`.
//! - Euler angles follow Unity: Z, then X, then Y.
//! - Degenerate inputs (zero-length quaternions or directions) propagate NaN
//!   and trip a `debug_assert!`. The `try_normalize` methods return
//!   [`RotationError`] instead.
//!
//! ## Modules
//!
//! - [`quaternion`] — [`Quaternion<T>`] and [`RotationError`].
//! - [`vector`] — [`Vector3<T>`], the plain 3-component vector used for axes,
//!   directions and points.
//! - [`traits`] — [`Scalar`] and [`FloatScalar`] element traits.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` |
//! | `alloc`   | via std  | [`Quaternion::to_string_digits`] |
//!
//! Without `std`, float math goes through `num-traits`' pure-Rust `libm`
//! backend, which is always enabled.
//!
//! ## Logging
//!
//! Degenerate branches (gimbal lock, antiparallel from-to, undefined look
//! basis, axis of a null rotation) are reported through the [`log`] facade at
//! `trace`/`debug` level. Install any `log` backend to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod quaternion;
pub mod traits;
pub mod vector;

pub use quaternion::{Quaternion, RotationError, GIMBAL_LOCK_EPSILON};
pub use traits::{FloatScalar, Scalar};
pub use vector::Vector3;
