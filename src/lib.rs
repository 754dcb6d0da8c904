//!
//! Linmath is a compact single-precision linear algebra library for 3D
//! graphics and simulation.
//!
//! It provides 2/3/4-component vectors, 4×4 column-major matrices and
//! quaternions, together with the transforms a renderer needs: rotation
//! composition, projection matrix construction, camera look-at, matrix
//! inversion and matrix/quaternion interconversion. All types are plain
//! `#[repr(C)]` values that can be handed to graphics APIs as raw bytes
//! (see the [`raw`] module).
//!
//! # Example
//!
//! ```
//! use linmath::angle::degrees_to_radians;
//! use linmath::{Mat4x4, Vec3, Vec4};
//!
//! let projection = Mat4x4::perspective(degrees_to_radians(60.0), 16.0 / 9.0, 0.1, 100.0);
//! let view = Mat4x4::look_at(
//!     &Vec3::new(0.0, 2.0, 5.0),
//!     &Vec3::new(0.0, 0.0, 0.0),
//!     &Vec3::new(0.0, 1.0, 0.0),
//! );
//! let mvp = projection * view;
//! let clip = mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert!(clip.w > 0.0);
//! ```

pub mod angle;
pub mod dump;
pub mod matrix;
pub mod quat;
pub mod raw;
pub mod vec;

pub use matrix::Mat4x4;
pub use quat::Quat;
pub use vec::{Vec2, Vec3, Vec4};
