//! Human-readable dumps of matrices, vectors and quaternions
//!
//! Each dump is a type tag, a caller-supplied note, then the components
//! at 3 decimal places, one matrix column per line in storage order.
//! Intended for diagnostic logging and comparing results across
//! implementations; this is not a parseable interchange format.

use crate::matrix::Mat4x4;
use crate::quat::Quat;
use crate::vec::Vec4;
use log::debug;
use std::fmt::Write;

pub fn dump_mat4x4(m: &Mat4x4, note: &str) -> String {
    let mut buf = String::new();
    let _ = writeln!(buf, "[mat4x4] {note}: ");
    for col in &m.cols {
        let _ = writeln!(buf, "{:.3}, {:.3}, {:.3}, {:.3}", col.x, col.y, col.z, col.w);
    }
    buf
}

pub fn dump_vec4(v: &Vec4, note: &str) -> String {
    let mut buf = String::new();
    let _ = writeln!(buf, "[vec4] {note}: ");
    let _ = writeln!(buf, "{:.3}, {:.3}, {:.3}, {:.3}", v.x, v.y, v.z, v.w);
    buf
}

pub fn dump_quat(q: &Quat, note: &str) -> String {
    let mut buf = String::new();
    let _ = writeln!(buf, "[quat] {note}: ");
    let _ = writeln!(buf, "{:.3}, {:.3}, {:.3}, {:.3}", q.x, q.y, q.z, q.w);
    buf
}

/// Emits the matrix dump at debug level under the caller's logger
pub fn log_mat4x4(m: &Mat4x4, note: &str) {
    debug!("{}", dump_mat4x4(m, note));
}

/// Emits the vector dump at debug level under the caller's logger
pub fn log_vec4(v: &Vec4, note: &str) {
    debug!("{}", dump_vec4(v, note));
}

/// Emits the quaternion dump at debug level under the caller's logger
pub fn log_quat(q: &Quat, note: &str) {
    debug!("{}", dump_quat(q, note));
}
