//! Fixed-size single-precision vector types
//!
//! `Vec2`, `Vec3` and `Vec4` are plain value types: tightly packed `f32`
//! fields with no padding, so they can be handed to graphics APIs as-is
//! (see the `raw` module).
//!
//! All operations are total over the `f32` domain: a zero-length
//! `normalized` produces infinities instead of an error, matching IEEE
//! semantics. Callers that need a true unit vector are expected to check
//! for non-finite components downstream.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A 2D vector
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A 3D vector for positions and directions
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A 4D vector, used both as a matrix column and as a homogeneous
/// coordinate (w = 1 for points, w = 0 for directions)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(a: &Vec2, b: &Vec2) -> f32 {
        a.x * b.x + a.y * b.y
    }

    pub fn length(&self) -> f32 {
        Self::dot(self, self).sqrt()
    }

    /// Scales by the reciprocal length. A zero vector yields infinities.
    pub fn normalized(self) -> Self {
        self * (1.0 / self.length())
    }

    pub fn min(a: &Vec2, b: &Vec2) -> Vec2 {
        Vec2 {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
        }
    }

    pub fn max(a: &Vec2, b: &Vec2) -> Vec2 {
        Vec2 {
            x: a.x.max(b.x),
            y: a.y.max(b.y),
        }
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(a: &Vec3, b: &Vec3) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    pub fn length(&self) -> f32 {
        Self::dot(self, self).sqrt()
    }

    /// Scales by the reciprocal length. A zero vector yields infinities.
    pub fn normalized(self) -> Self {
        self * (1.0 / self.length())
    }

    pub fn min(a: &Vec3, b: &Vec3) -> Vec3 {
        Vec3 {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            z: a.z.min(b.z),
        }
    }

    pub fn max(a: &Vec3, b: &Vec3) -> Vec3 {
        Vec3 {
            x: a.x.max(b.x),
            y: a.y.max(b.y),
            z: a.z.max(b.z),
        }
    }

    pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
        Vec3 {
            x: a.y * b.z - a.z * b.y,
            y: a.z * b.x - a.x * b.z,
            z: a.x * b.y - a.y * b.x,
        }
    }

    /// Reflection of `v` against the plane normal `n`: `v - 2*dot(v,n)*n`
    pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
        let p = 2.0 * Self::dot(v, n);
        Vec3 {
            x: v.x - p * n.x,
            y: v.y - p * n.y,
            z: v.z - p * n.z,
        }
    }
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn dot(a: &Vec4, b: &Vec4) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
    }

    /// Inner product over x, y, z only, for geometric computations where
    /// the homogeneous component must not contribute.
    pub fn dot3(a: &Vec4, b: &Vec4) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    pub fn length(&self) -> f32 {
        Self::dot(self, self).sqrt()
    }

    /// Scales by the reciprocal length. A zero vector yields infinities.
    pub fn normalized(self) -> Self {
        self * (1.0 / self.length())
    }

    pub fn min(a: &Vec4, b: &Vec4) -> Vec4 {
        Vec4 {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            z: a.z.min(b.z),
            w: a.w.min(b.w),
        }
    }

    pub fn max(a: &Vec4, b: &Vec4) -> Vec4 {
        Vec4 {
            x: a.x.max(b.x),
            y: a.y.max(b.y),
            z: a.z.max(b.z),
            w: a.w.max(b.w),
        }
    }

    /// 3-component cross product; w of the result is set to 1 so the
    /// result can be used directly as a homogeneous point.
    pub fn cross(a: &Vec4, b: &Vec4) -> Vec4 {
        Vec4 {
            x: a.y * b.z - a.z * b.y,
            y: a.z * b.x - a.x * b.z,
            z: a.x * b.y - a.y * b.x,
            w: 1.0,
        }
    }

    /// Reflection of `v` against the plane normal `n` over all four
    /// components: `v - 2*dot(v,n)*n`
    pub fn reflect(v: &Vec4, n: &Vec4) -> Vec4 {
        let p = 2.0 * Self::dot(v, n);
        Vec4 {
            x: v.x - p * n.x,
            y: v.y - p * n.y,
            z: v.z - p * n.z,
            w: v.w - p * n.w,
        }
    }

    pub fn xyz(&self) -> Vec3 {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

impl Add for Vec4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Vec4 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl Sub for Vec4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Vec4 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w,
        }
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Vec4 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vec2 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vec2 index out of range: {i}"),
        }
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vec3 index out of range: {i}"),
        }
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}
