//! Quaternion rotations
//!
//! `Quat` stores {x, y, z, w} with the vector part first. Operations that
//! consume a rotation (`rotate_vec3`, `Mat4x4::from_quat`) expect a unit
//! quaternion; this is never enforced, and feeding a non-unit quaternion
//! in produces a well-defined but physically meaningless result. Normalize
//! explicitly when a true rotation is required.

use crate::matrix::Mat4x4;
use crate::vec::{Vec3, Vec4};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// A rotation stored as {x, y, z, w}
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Rotation of `angle` radians around `axis` (normalized internally)
    pub fn from_axis_angle(axis: &Vec3, angle: f32) -> Self {
        let u = axis.normalized();
        let s = (angle / 2.0).sin();
        Self {
            x: u.x * s,
            y: u.y * s,
            z: u.z * s,
            w: (angle / 2.0).cos(),
        }
    }

    /// Full 4-component inner product
    pub fn dot(a: &Quat, b: &Quat) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
    }

    /// Inner product of the vector parts only
    pub fn dot3(a: &Quat, b: &Quat) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Cross product of the vector parts; w of the result is left at 0
    pub fn cross3(a: &Quat, b: &Quat) -> Quat {
        Quat {
            x: a.y * b.z - a.z * b.y,
            y: a.z * b.x - a.x * b.z,
            z: a.x * b.y - a.y * b.x,
            w: 0.0,
        }
    }

    /// Negates the vector part, keeps w
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    pub fn length(&self) -> f32 {
        Self::dot(self, self).sqrt()
    }

    /// Scales by the reciprocal length. A zero quaternion yields infinities.
    pub fn normalized(self) -> Self {
        self * (1.0 / self.length())
    }

    /// Rotates `v` by this quaternion using the double-cross identity
    /// `t = 2*cross(q.xyz, v); v' = v + q.w*t + cross(q.xyz, t)`,
    /// which avoids building the full rotation matrix.
    pub fn rotate_vec3(&self, v: &Vec3) -> Vec3 {
        let q_xyz = Vec3::new(self.x, self.y, self.z);
        let t = Vec3::cross(&q_xyz, v) * 2.0;
        let u = Vec3::cross(&q_xyz, &t);
        *v + t * self.w + u
    }

    /// Same rotation applied to the x, y, z components of a `Vec4`; the
    /// homogeneous component is carried through unchanged.
    pub fn rotate_vec4(&self, v: &Vec4) -> Vec4 {
        let r = self.rotate_vec3(&v.xyz());
        Vec4::new(r.x, r.y, r.z, v.w)
    }

    /// Extracts the rotation from the 3×3 linear part of `m`.
    ///
    /// Pivots on the largest diagonal element to pick a numerically
    /// stable branch, then reads the remaining components from the
    /// off-diagonal entries. If the pivot magnitude `r` falls below 1e-6
    /// (vanishing vector part, e.g. the identity matrix) the result
    /// degenerates to (1, 0, 0, 0) instead of dividing by near-zero.
    ///
    /// `m` must be a pure rotation; scaling or shear silently corrupts
    /// the result.
    pub fn from_mat4x4(m: &Mat4x4) -> Self {
        let perm = [0usize, 1, 2, 0, 1];
        let mut idx = 0;
        for i in 1..3 {
            if m[i][i] > m[idx][idx] {
                idx = i;
            }
        }
        let p0 = perm[idx];
        let p1 = perm[idx + 1];
        let p2 = perm[idx + 2];

        let r = (1.0 + m[p0][p0] - m[p1][p1] - m[p2][p2]).sqrt();
        if r < 1e-6 {
            return Quat::new(1.0, 0.0, 0.0, 0.0);
        }

        let mut q = Quat::new(0.0, 0.0, 0.0, 0.0);
        q[p0] = r / 2.0;
        q[p1] = (m[p0][p1] + m[p1][p0]) / (2.0 * r);
        q[p2] = (m[p0][p2] + m[p2][p0]) / (2.0 * r);
        q.w = (m[p1][p2] - m[p2][p1]) / (2.0 * r);
        q
    }
}

/// Hamilton product: composing `a * b` applies `b` first, then `a`
impl Mul for Quat {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let v = Self::cross3(&self, &other);
        Quat {
            x: v.x + self.w * other.x + other.w * self.x,
            y: v.y + self.w * other.y + other.w * self.y,
            z: v.z + self.w * other.z + other.w * self.z,
            w: self.w * other.w - Self::dot3(&self, &other),
        }
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Quat {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w,
        }
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Quat {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w,
        }
    }
}

impl Mul<f32> for Quat {
    type Output = Self;
    fn mul(self, s: f32) -> Self {
        Quat {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }
}

impl Index<usize> for Quat {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Quat index out of range: {i}"),
        }
    }
}

impl IndexMut<usize> for Quat {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Quat index out of range: {i}"),
        }
    }
}
