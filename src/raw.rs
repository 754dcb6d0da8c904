//! Byte-level views of the math types
//!
//! Graphics APIs consume uniforms and vertex attributes as tightly packed
//! little arrays of `f32`. Every type in this crate is `#[repr(C)]` with
//! no padding, so a value can be handed over as a byte slice without
//! copying. The layout is a wire contract: column-major matrix order,
//! native endianness, exactly `SIZE` bytes per value.
//!
//! The returned slices borrow the value; they cannot outlive it and must
//! not be used to smuggle mutations around the owner.

use crate::matrix::Mat4x4;
use crate::quat::Quat;
use crate::vec::{Vec2, Vec3, Vec4};
use bytemuck::Pod;

impl Vec2 {
    pub const SIZE: usize = 8;

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Vec3 {
    pub const SIZE: usize = 12;

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Vec4 {
    pub const SIZE: usize = 16;

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Quat {
    pub const SIZE: usize = 16;

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Mat4x4 {
    pub const SIZE: usize = 64;

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Byte view of a slice of values, for vertex/index buffer upload.
///
/// Works for any of the math types as well as plain `f32`/`u16` element
/// slices.
pub fn slice_as_bytes<T: Pod>(values: &[T]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// Size in bytes of a slice of values as laid out in a buffer
pub fn slice_size_of<T: Pod>(values: &[T]) -> usize {
    std::mem::size_of_val(values)
}
