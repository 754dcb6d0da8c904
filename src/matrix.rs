//! 4×4 matrix math for 3D transformations
//!
//! `Mat4x4` stores 4 column vectors, i.e. column-major order: `cols[i]` is
//! column i and element `[i][j]` is row j of column i. This matches the
//! layout graphics APIs expect for tightly packed float uniforms, and every
//! algorithm in this module is written against that convention.
//!
//! Layout:
//! ```text
//! [ m00 m10 m20 m30 ]   [ cols[0][0] cols[1][0] cols[2][0] cols[3][0] ]
//! [ m01 m11 m21 m31 ] = [ cols[0][1] cols[1][1] cols[2][1] cols[3][1] ]
//! [ m02 m12 m22 m32 ]   [ cols[0][2] cols[1][2] cols[2][2] cols[3][2] ]
//! [ m03 m13 m23 m33 ]   [ cols[0][3] cols[1][3] cols[2][3] cols[3][3] ]
//! ```
//!
//! Translation lives in column 3.
//!
//! There is no error signaling anywhere: preconditions (invertibility,
//! unit quaternions, orthogonality) are documented per operation, and
//! violating them propagates IEEE infinities/NaN instead of panicking.

use crate::quat::Quat;
use crate::vec::{Vec3, Vec4};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// 4×4 single-precision matrix, column-major
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat4x4 {
    pub cols: [Vec4; 4],
}

impl Default for Mat4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Normalizes the x, y, z components of a column, leaving w untouched
fn norm3(c: &mut Vec4) {
    let n = c.xyz().normalized();
    c.x = n.x;
    c.y = n.y;
    c.z = n.z;
}

/// Subtracts `s * d` from the x, y, z components of a column
fn sub_scaled3(c: &mut Vec4, d: &Vec4, s: f32) {
    c.x -= s * d.x;
    c.y -= s * d.y;
    c.z -= s * d.z;
}

impl Mat4x4 {
    pub const IDENTITY: Self = Self {
        cols: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn from_cols(cols: [Vec4; 4]) -> Self {
        Self { cols }
    }

    /// Row `i` as a vector
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i])
    }

    /// Column `i` as a vector
    pub fn col(&self, i: usize) -> Vec4 {
        self.cols[i]
    }

    pub fn transposed(&self) -> Self {
        let mut m = Self::IDENTITY;
        for i in 0..4 {
            for j in 0..4 {
                m.cols[i][j] = self.cols[j][i];
            }
        }
        m
    }

    /// Scales the three basis columns by per-axis factors and copies the
    /// translation column verbatim, preserving the homogeneous row.
    pub fn scale_aniso(&self, x: f32, y: f32, z: f32) -> Self {
        Self {
            cols: [
                self.cols[0] * x,
                self.cols[1] * y,
                self.cols[2] * z,
                self.cols[3],
            ],
        }
    }

    /// Absolute translation: identity with (x, y, z) in column 3
    pub const fn translate(x: f32, y: f32, z: f32) -> Self {
        Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(x, y, z, 1.0),
            ],
        }
    }

    /// Relative translation: accumulates the projection of (x, y, z) onto
    /// each row into the translation column, without resetting the basis.
    pub fn translate_in_place(&mut self, x: f32, y: f32, z: f32) {
        let t = Vec4::new(x, y, z, 0.0);
        for i in 0..4 {
            let r = self.row(i);
            self.cols[3][i] += Vec4::dot(&r, &t);
        }
    }

    /// Outer product `a bᵗ` in the 3×3 linear part, zeros elsewhere
    pub fn from_outer_product(a: &Vec3, b: &Vec3) -> Self {
        let mut m = Self {
            cols: [Vec4::default(); 4],
        };
        for i in 0..3 {
            for j in 0..3 {
                m.cols[i][j] = a[i] * b[j];
            }
        }
        m
    }

    /// Right-multiplies by a rotation of `angle` radians around the axis
    /// (x, y, z), built from the outer product, the skew-symmetric
    /// cross-product matrix and the angle terms (Rodrigues' formula).
    ///
    /// An axis of length <= 1e-4 is a singularity guard: the matrix is
    /// returned unchanged.
    pub fn rotated(&self, x: f32, y: f32, z: f32, angle: f32) -> Self {
        let s = angle.sin();
        let c = angle.cos();
        let u = Vec3::new(x, y, z);

        if u.length() <= 1e-4 {
            return *self;
        }
        let u = u.normalized();

        let t = Self::from_outer_product(&u, &u);

        let mut skew = Self {
            cols: [
                Vec4::new(0.0, u.z, -u.y, 0.0),
                Vec4::new(-u.z, 0.0, u.x, 0.0),
                Vec4::new(u.y, -u.x, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 0.0),
            ],
        };
        skew = skew * s;

        let mut r = t + (Self::IDENTITY - t) * c + skew;
        r.cols[3][3] = 1.0;
        *self * r
    }

    /// Right-multiplies by a rotation around the x axis
    pub fn rotated_x(&self, angle: f32) -> Self {
        let s = angle.sin();
        let c = angle.cos();
        let r = Self {
            cols: [
                Vec4::new(1.0, 0.0, 0.0, 0.0),
                Vec4::new(0.0, c, s, 0.0),
                Vec4::new(0.0, -s, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        };
        *self * r
    }

    /// Right-multiplies by a rotation around the y axis
    pub fn rotated_y(&self, angle: f32) -> Self {
        let s = angle.sin();
        let c = angle.cos();
        let r = Self {
            cols: [
                Vec4::new(c, 0.0, s, 0.0),
                Vec4::new(0.0, 1.0, 0.0, 0.0),
                Vec4::new(-s, 0.0, c, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        };
        *self * r
    }

    /// Right-multiplies by a rotation around the z axis
    pub fn rotated_z(&self, angle: f32) -> Self {
        let s = angle.sin();
        let c = angle.cos();
        let r = Self {
            cols: [
                Vec4::new(c, s, 0.0, 0.0),
                Vec4::new(-s, c, 0.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        };
        *self * r
    }

    /// Closed-form inverse via 2×2 sub-determinants: six minors from
    /// columns 0-1, six from columns 2-3, assembled into the adjugate and
    /// scaled by the reciprocal determinant.
    ///
    /// Assumes the matrix is invertible; a singular input yields
    /// infinities/NaN with no error signaled.
    pub fn inverted(&self) -> Self {
        let m = self;
        let s = [
            m[0][0] * m[1][1] - m[1][0] * m[0][1],
            m[0][0] * m[1][2] - m[1][0] * m[0][2],
            m[0][0] * m[1][3] - m[1][0] * m[0][3],
            m[0][1] * m[1][2] - m[1][1] * m[0][2],
            m[0][1] * m[1][3] - m[1][1] * m[0][3],
            m[0][2] * m[1][3] - m[1][2] * m[0][3],
        ];
        let c = [
            m[2][0] * m[3][1] - m[3][0] * m[2][1],
            m[2][0] * m[3][2] - m[3][0] * m[2][2],
            m[2][0] * m[3][3] - m[3][0] * m[2][3],
            m[2][1] * m[3][2] - m[3][1] * m[2][2],
            m[2][1] * m[3][3] - m[3][1] * m[2][3],
            m[2][2] * m[3][3] - m[3][2] * m[2][3],
        ];

        let idet = 1.0
            / (s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]);

        let mut t = Self::IDENTITY;
        t.cols[0][0] = (m[1][1] * c[5] - m[1][2] * c[4] + m[1][3] * c[3]) * idet;
        t.cols[0][1] = (-m[0][1] * c[5] + m[0][2] * c[4] - m[0][3] * c[3]) * idet;
        t.cols[0][2] = (m[3][1] * s[5] - m[3][2] * s[4] + m[3][3] * s[3]) * idet;
        t.cols[0][3] = (-m[2][1] * s[5] + m[2][2] * s[4] - m[2][3] * s[3]) * idet;

        t.cols[1][0] = (-m[1][0] * c[5] + m[1][2] * c[2] - m[1][3] * c[1]) * idet;
        t.cols[1][1] = (m[0][0] * c[5] - m[0][2] * c[2] + m[0][3] * c[1]) * idet;
        t.cols[1][2] = (-m[3][0] * s[5] + m[3][2] * s[2] - m[3][3] * s[1]) * idet;
        t.cols[1][3] = (m[2][0] * s[5] - m[2][2] * s[2] + m[2][3] * s[1]) * idet;

        t.cols[2][0] = (m[1][0] * c[4] - m[1][1] * c[2] + m[1][3] * c[0]) * idet;
        t.cols[2][1] = (-m[0][0] * c[4] + m[0][1] * c[2] - m[0][3] * c[0]) * idet;
        t.cols[2][2] = (m[3][0] * s[4] - m[3][1] * s[2] + m[3][3] * s[0]) * idet;
        t.cols[2][3] = (-m[2][0] * s[4] + m[2][1] * s[2] - m[2][3] * s[0]) * idet;

        t.cols[3][0] = (-m[1][0] * c[3] + m[1][1] * c[1] - m[1][2] * c[0]) * idet;
        t.cols[3][1] = (m[0][0] * c[3] - m[0][1] * c[1] + m[0][2] * c[0]) * idet;
        t.cols[3][2] = (-m[3][0] * s[3] + m[3][1] * s[1] - m[3][2] * s[0]) * idet;
        t.cols[3][3] = (m[2][0] * s[3] - m[2][1] * s[1] + m[2][2] * s[0]) * idet;
        t
    }

    /// Gram-Schmidt over the basis columns in the order 2, 1, 0:
    /// normalize column 2, orthogonalize column 1 against it and
    /// normalize, then orthogonalize column 0 against column 1 and
    /// normalize. The fourth row and column are left untouched.
    pub fn ortho_normalized(&self) -> Self {
        let mut r = *self;

        norm3(&mut r.cols[2]);

        let s = Vec4::dot3(&r.cols[1], &r.cols[2]);
        let c2 = r.cols[2];
        sub_scaled3(&mut r.cols[1], &c2, s);
        norm3(&mut r.cols[1]);

        let s = Vec4::dot3(&r.cols[0], &r.cols[1]);
        let c1 = r.cols[1];
        sub_scaled3(&mut r.cols[0], &c1, s);
        norm3(&mut r.cols[0]);

        r
    }

    /// Perspective projection from view-volume planes (OpenGL clip-space
    /// conventions). All parameters are distances; near and far are
    /// positive.
    pub fn frustum(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Self {
        Self {
            cols: [
                Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
                Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
                Vec4::new(
                    (r + l) / (r - l),
                    (t + b) / (t - b),
                    -(f + n) / (f - n),
                    -1.0,
                ),
                Vec4::new(0.0, 0.0, -2.0 * (f * n) / (f - n), 0.0),
            ],
        }
    }

    /// Orthographic projection from view-volume planes (OpenGL clip-space
    /// conventions)
    pub fn ortho(l: f32, r: f32, b: f32, t: f32, n: f32, f: f32) -> Self {
        Self {
            cols: [
                Vec4::new(2.0 / (r - l), 0.0, 0.0, 0.0),
                Vec4::new(0.0, 2.0 / (t - b), 0.0, 0.0),
                Vec4::new(0.0, 0.0, -2.0 / (f - n), 0.0),
                Vec4::new(
                    -(r + l) / (r - l),
                    -(t + b) / (t - b),
                    -(f + n) / (f - n),
                    1.0,
                ),
            ],
        }
    }

    /// Perspective projection from a vertical field of view in radians
    /// and an aspect ratio. Use [`crate::angle::degrees_to_radians`] at
    /// the call site when working in degrees.
    pub fn perspective(y_fov: f32, aspect: f32, n: f32, f: f32) -> Self {
        let a = 1.0 / (y_fov / 2.0).tan();
        Self {
            cols: [
                Vec4::new(a / aspect, 0.0, 0.0, 0.0),
                Vec4::new(0.0, a, 0.0, 0.0),
                Vec4::new(0.0, 0.0, -((f + n) / (f - n)), -1.0),
                Vec4::new(0.0, 0.0, -((2.0 * f * n) / (f - n)), 0.0),
            ],
        }
    }

    /// View matrix for a camera at `eye` looking at `center` with the
    /// given `up` hint: basis {side, up, -forward} in the linear part,
    /// then a relative translation by the negated eye position.
    pub fn look_at(eye: &Vec3, center: &Vec3, up: &Vec3) -> Self {
        let f = (*center - *eye).normalized();
        let s = Vec3::cross(&f, up).normalized();
        let t = Vec3::cross(&s, &f);

        let mut m = Self {
            cols: [
                Vec4::new(s.x, t.x, -f.x, 0.0),
                Vec4::new(s.y, t.y, -f.y, 0.0),
                Vec4::new(s.z, t.z, -f.z, 0.0),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        };
        m.translate_in_place(-eye.x, -eye.y, -eye.z);
        m
    }

    /// Rotation matrix from a unit quaternion (a = w, b = x, c = y,
    /// d = z). A non-unit quaternion produces a scaled, non-orthonormal
    /// matrix with no warning.
    pub fn from_quat(q: &Quat) -> Self {
        let a = q.w;
        let b = q.x;
        let c = q.y;
        let d = q.z;
        let a2 = a * a;
        let b2 = b * b;
        let c2 = c * c;
        let d2 = d * d;

        Self {
            cols: [
                Vec4::new(
                    a2 + b2 - c2 - d2,
                    2.0 * (b * c + a * d),
                    2.0 * (b * d - a * c),
                    0.0,
                ),
                Vec4::new(
                    2.0 * (b * c - a * d),
                    a2 - b2 + c2 - d2,
                    2.0 * (c * d + a * b),
                    0.0,
                ),
                Vec4::new(
                    2.0 * (b * d + a * c),
                    2.0 * (c * d - a * b),
                    a2 - b2 - c2 + d2,
                    0.0,
                ),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }

    /// Rotates the three basis columns by `q` and resets column 3 to
    /// (0, 0, 0, 1).
    ///
    /// Only correct for orthogonal input matrices; a non-orthogonal
    /// matrix silently produces a wrong result.
    pub fn rotated_by_quat(&self, q: &Quat) -> Self {
        Self {
            cols: [
                q.rotate_vec4(&self.cols[0]),
                q.rotate_vec4(&self.cols[1]),
                q.rotate_vec4(&self.cols[2]),
                Vec4::new(0.0, 0.0, 0.0, 1.0),
            ],
        }
    }
}

/// Matrix product; `(a * b) * v` applies `b` to `v` first, then `a`
impl Mul for Mat4x4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut temp = Self::IDENTITY;
        for c in 0..4 {
            for r in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.cols[k][r] * other.cols[c][k];
                }
                temp.cols[c][r] = sum;
            }
        }
        temp
    }
}

/// Matrix-vector product (column vector convention)
impl Mul<Vec4> for Mat4x4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        let mut r = Vec4::default();
        for j in 0..4 {
            let mut sum = 0.0;
            for i in 0..4 {
                sum += self.cols[i][j] * v[i];
            }
            r[j] = sum;
        }
        r
    }
}

impl Add for Mat4x4 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            cols: [
                self.cols[0] + other.cols[0],
                self.cols[1] + other.cols[1],
                self.cols[2] + other.cols[2],
                self.cols[3] + other.cols[3],
            ],
        }
    }
}

impl Sub for Mat4x4 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            cols: [
                self.cols[0] - other.cols[0],
                self.cols[1] - other.cols[1],
                self.cols[2] - other.cols[2],
                self.cols[3] - other.cols[3],
            ],
        }
    }
}

/// Uniform scale of every element
impl Mul<f32> for Mat4x4 {
    type Output = Self;
    fn mul(self, k: f32) -> Self {
        Self {
            cols: [
                self.cols[0] * k,
                self.cols[1] * k,
                self.cols[2] * k,
                self.cols[3] * k,
            ],
        }
    }
}

impl Index<usize> for Mat4x4 {
    type Output = Vec4;
    fn index(&self, i: usize) -> &Vec4 {
        &self.cols[i]
    }
}

impl IndexMut<usize> for Mat4x4 {
    fn index_mut(&mut self, i: usize) -> &mut Vec4 {
        &mut self.cols[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::degrees_to_radians;
    use pretty_assertions::assert_eq;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn assert_mat_approx(a: &Mat4x4, b: &Mat4x4, tol: f32) {
        for i in 0..4 {
            for j in 0..4 {
                assert!(
                    (a[i][j] - b[i][j]).abs() < tol,
                    "[{i}][{j}]: {} vs {}",
                    a[i][j],
                    b[i][j]
                );
            }
        }
    }

    /// Sequential fill 1..=16 in storage order (columns first)
    fn sequential() -> Mat4x4 {
        let mut m = Mat4x4::IDENTITY;
        let mut n = 1.0;
        for i in 0..4 {
            for j in 0..4 {
                m.cols[i][j] = n;
                n += 1.0;
            }
        }
        m
    }

    #[test]
    fn test_identity_transform() {
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(Mat4x4::IDENTITY * v, v);
        assert_eq!(Mat4x4::default(), Mat4x4::IDENTITY);
    }

    #[test]
    fn test_row_col_accessors() {
        let m = sequential();
        assert_eq!(m.col(1), Vec4::new(5.0, 6.0, 7.0, 8.0));
        assert_eq!(m.row(1), Vec4::new(2.0, 6.0, 10.0, 14.0));
    }

    #[test]
    fn test_transpose() {
        let m = sequential();
        let t = m.transposed();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(t[i][j], m[j][i]);
            }
        }
        assert_eq!(t.transposed(), m);
    }

    #[test]
    fn test_translation() {
        let m = Mat4x4::translate(10.0, 20.0, 30.0);
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m * v, Vec4::new(11.0, 22.0, 33.0, 1.0));
        // directions (w = 0) are unaffected
        let d = Vec4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(m * d, d);
    }

    #[test]
    fn test_translate_in_place_accumulates() {
        let mut m = Mat4x4::translate(1.0, 2.0, 3.0);
        m.translate_in_place(10.0, 0.0, 0.0);
        assert_eq!(m.cols[3], Vec4::new(11.0, 2.0, 3.0, 1.0));
        // with a rotated basis the offset lands in rotated coordinates
        let mut r = Mat4x4::IDENTITY.rotated_z(degrees_to_radians(90.0));
        r.translate_in_place(1.0, 0.0, 0.0);
        assert!(approx_eq(r.cols[3][0], 0.0), "{}", r.cols[3][0]);
        assert!(approx_eq(r.cols[3][1], 1.0), "{}", r.cols[3][1]);
    }

    #[test]
    fn test_multiply_sequential_regression() {
        // fixed regression vector: the sequential matrix squared
        let m = sequential();
        let p = m * m;
        assert_eq!(p.col(0), Vec4::new(90.0, 100.0, 110.0, 120.0));
        assert_eq!(p.col(1), Vec4::new(202.0, 228.0, 254.0, 280.0));
        assert_eq!(p.col(2), Vec4::new(314.0, 356.0, 398.0, 440.0));
        assert_eq!(p.col(3), Vec4::new(426.0, 484.0, 542.0, 600.0));
    }

    #[test]
    fn test_multiply_identity_is_neutral() {
        let m = sequential();
        assert_eq!(m * Mat4x4::IDENTITY, m);
        assert_eq!(Mat4x4::IDENTITY * m, m);
    }

    #[test]
    fn test_rotate_z_90() {
        let m = Mat4x4::IDENTITY.rotated_z(degrees_to_radians(90.0));
        let r = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(approx_eq(r.x, 0.0), "x: {}", r.x);
        assert!(approx_eq(r.y, 1.0), "y: {}", r.y);
        assert!(approx_eq(r.z, 0.0), "z: {}", r.z);
    }

    #[test]
    fn test_rotate_x_90() {
        let m = Mat4x4::IDENTITY.rotated_x(degrees_to_radians(90.0));
        let r = m * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(approx_eq(r.x, 0.0), "x: {}", r.x);
        assert!(approx_eq(r.y, 0.0), "y: {}", r.y);
        assert!(approx_eq(r.z, 1.0), "z: {}", r.z);
    }

    #[test]
    fn test_rotate_y_90() {
        let m = Mat4x4::IDENTITY.rotated_y(degrees_to_radians(90.0));
        let r = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(approx_eq(r.x, 0.0), "x: {}", r.x);
        assert!(approx_eq(r.y, 0.0), "y: {}", r.y);
        assert!(approx_eq(r.z, -1.0), "z: {}", r.z);
    }

    #[test]
    fn test_rotate_arbitrary_axis_matches_cardinal() {
        for (axis, builder) in [
            (
                (1.0, 0.0, 0.0),
                Mat4x4::rotated_x as fn(&Mat4x4, f32) -> Mat4x4,
            ),
            ((0.0, 1.0, 0.0), Mat4x4::rotated_y),
            ((0.0, 0.0, 1.0), Mat4x4::rotated_z),
        ] {
            let angle = degrees_to_radians(37.0);
            let general = Mat4x4::IDENTITY.rotated(axis.0, axis.1, axis.2, angle);
            let cardinal = builder(&Mat4x4::IDENTITY, angle);
            assert_mat_approx(&general, &cardinal, EPSILON);
        }
    }

    #[test]
    fn test_rotate_degenerate_axis_is_copy() {
        let m = sequential();
        for angle in [0.0f32, 0.5, 3.0] {
            assert_eq!(m.rotated(0.0, 0.0, 0.0, angle), m);
        }
        // just below the guard threshold as well
        assert_eq!(m.rotated(5e-5, 0.0, 0.0, 1.0), m);
    }

    #[test]
    fn test_rotate_agrees_with_quaternion_rotation() {
        let axis = Vec3::new(1.0, -2.0, 0.5);
        let angle = degrees_to_radians(63.0);
        let m = Mat4x4::IDENTITY.rotated(axis.x, axis.y, axis.z, angle);
        let q = Quat::from_axis_angle(&axis, angle);
        for v in [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(-2.5, 4.0, 0.75),
        ] {
            let mv = m * Vec4::new(v.x, v.y, v.z, 1.0);
            let qv = q.rotate_vec3(&v);
            assert!(approx_eq(mv.x, qv.x), "x: {} vs {}", mv.x, qv.x);
            assert!(approx_eq(mv.y, qv.y), "y: {} vs {}", mv.y, qv.y);
            assert!(approx_eq(mv.z, qv.z), "z: {} vs {}", mv.z, qv.z);
        }
    }

    #[test]
    fn test_scale_aniso_identity_factors_is_noop() {
        let m = sequential();
        assert_eq!(m.scale_aniso(1.0, 1.0, 1.0), m);
    }

    #[test]
    fn test_scale_aniso_keeps_translation_column() {
        let m = Mat4x4::translate(7.0, 8.0, 9.0).scale_aniso(2.0, 3.0, 4.0);
        assert_eq!(m.cols[0], Vec4::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(m.cols[1], Vec4::new(0.0, 3.0, 0.0, 0.0));
        assert_eq!(m.cols[2], Vec4::new(0.0, 0.0, 4.0, 0.0));
        assert_eq!(m.cols[3], Vec4::new(7.0, 8.0, 9.0, 1.0));
    }

    #[test]
    fn test_invert_translation() {
        let m = Mat4x4::translate(1.0, 2.0, 3.0);
        let inv = m.inverted();
        assert_mat_approx(&inv, &Mat4x4::translate(-1.0, -2.0, -3.0), EPSILON);
    }

    #[test]
    fn test_invert_round_trip() {
        let m = Mat4x4::translate(1.0, -2.0, 0.5)
            .rotated(0.3, 1.0, -0.2, degrees_to_radians(40.0))
            .scale_aniso(2.0, 0.5, 1.5);
        let back = m.inverted().inverted();
        assert_mat_approx(&back, &m, 1e-4);

        let prod = m * m.inverted();
        assert_mat_approx(&prod, &Mat4x4::IDENTITY, 1e-4);
    }

    #[test]
    fn test_invert_singular_propagates_non_finite() {
        // the zero matrix has no inverse; expect NaN everywhere, no panic
        let zero = Mat4x4::IDENTITY * 0.0;
        let inv = zero.inverted();
        for i in 0..4 {
            for j in 0..4 {
                assert!(inv[i][j].is_nan(), "[{i}][{j}]: {}", inv[i][j]);
            }
        }
    }

    #[test]
    fn test_ortho_normalize_restores_rotation() {
        let r = Mat4x4::IDENTITY.rotated(0.2, 0.9, -0.4, degrees_to_radians(70.0));
        // scale the basis; orthonormalization must recover unit columns
        let skewed = r.scale_aniso(3.0, 3.0, 3.0);
        let fixed = skewed.ortho_normalized();
        for i in 0..3 {
            assert!(approx_eq(fixed.cols[i].xyz().length(), 1.0), "column {i}");
        }
        assert!(approx_eq(Vec4::dot3(&fixed.cols[0], &fixed.cols[1]), 0.0));
        assert!(approx_eq(Vec4::dot3(&fixed.cols[1], &fixed.cols[2]), 0.0));
    }

    #[test]
    fn test_ortho_normalize_is_idempotent_on_orthonormal_input() {
        let r = Mat4x4::IDENTITY.rotated(1.0, 0.5, 0.25, degrees_to_radians(25.0));
        assert_mat_approx(&r.ortho_normalized(), &r, EPSILON);
    }

    #[test]
    fn test_perspective_known_values() {
        let m = Mat4x4::perspective(degrees_to_radians(90.0), 1.0, 1.0, 10.0);
        assert!(approx_eq(m[0][0], 1.0), "{}", m[0][0]);
        assert!(approx_eq(m[1][1], 1.0), "{}", m[1][1]);
        assert!(approx_eq(m[2][2], -11.0 / 9.0), "{}", m[2][2]);
        assert_eq!(m[2][3], -1.0);
        assert!(approx_eq(m[3][2], -20.0 / 9.0), "{}", m[3][2]);
        assert_eq!(m[3][3], 0.0);
    }

    #[test]
    fn test_frustum_matches_perspective() {
        // symmetric frustum with the same vertical opening
        let n = 1.0;
        let f = 10.0;
        let t = (degrees_to_radians(90.0) / 2.0).tan() * n;
        let frustum = Mat4x4::frustum(-t, t, -t, t, n, f);
        let perspective = Mat4x4::perspective(degrees_to_radians(90.0), 1.0, n, f);
        assert_mat_approx(&frustum, &perspective, EPSILON);
    }

    #[test]
    fn test_ortho_maps_volume_to_clip_cube() {
        let m = Mat4x4::ortho(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        let near_corner = m * Vec4::new(-2.0, -1.0, 0.0, 1.0);
        assert!(approx_eq(near_corner.x, -1.0));
        assert!(approx_eq(near_corner.y, -1.0));
        assert!(approx_eq(near_corner.z, -1.0));
        let far_corner = m * Vec4::new(2.0, 1.0, -10.0, 1.0);
        assert!(approx_eq(far_corner.x, 1.0));
        assert!(approx_eq(far_corner.y, 1.0));
        assert!(approx_eq(far_corner.z, 1.0));
    }

    #[test]
    fn test_look_at_straight_down_z() {
        let m = Mat4x4::look_at(
            &Vec3::new(0.0, 0.0, 5.0),
            &Vec3::new(0.0, 0.0, 0.0),
            &Vec3::new(0.0, 1.0, 0.0),
        );
        // camera looking down -z: identity linear part, translation -5 on z
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(approx_eq(m[i][j], expected), "[{i}][{j}]: {}", m[i][j]);
            }
        }
        assert!(approx_eq(m.cols[3][0], 0.0));
        assert!(approx_eq(m.cols[3][1], 0.0));
        assert!(approx_eq(m.cols[3][2], -5.0));
        assert_eq!(m.cols[3][3], 1.0);
    }

    #[test]
    fn test_from_quat_matches_cardinal_rotation() {
        let angle = degrees_to_radians(58.0);
        let q = Quat::from_axis_angle(&Vec3::new(0.0, 0.0, 1.0), angle);
        let from_quat = Mat4x4::from_quat(&q);
        let direct = Mat4x4::IDENTITY.rotated_z(angle);
        assert_mat_approx(&from_quat, &direct, EPSILON);
    }

    #[test]
    fn test_from_quat_identity() {
        assert_eq!(Mat4x4::from_quat(&Quat::IDENTITY), Mat4x4::IDENTITY);
    }

    #[test]
    fn test_rotated_by_quat_matches_from_quat() {
        let q = Quat::from_axis_angle(&Vec3::new(0.3, -1.0, 0.8), degrees_to_radians(33.0));
        let rotated = Mat4x4::IDENTITY.rotated_by_quat(&q);
        let built = Mat4x4::from_quat(&q);
        assert_mat_approx(&rotated, &built, EPSILON);
    }

    #[test]
    fn test_outer_product() {
        let m = Mat4x4::from_outer_product(&Vec3::new(1.0, 2.0, 3.0), &Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(m.cols[0], Vec4::new(4.0, 5.0, 6.0, 0.0));
        assert_eq!(m.cols[1], Vec4::new(8.0, 10.0, 12.0, 0.0));
        assert_eq!(m.cols[2], Vec4::new(12.0, 15.0, 18.0, 0.0));
        assert_eq!(m.cols[3], Vec4::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_add_sub_scale() {
        let m = sequential();
        assert_eq!((m + m) - m, m);
        let doubled = m * 2.0;
        assert_eq!(doubled[2][1], 2.0 * m[2][1]);
    }
}
