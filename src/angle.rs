//! Degree/radian conversion helpers
//!
//! All rotation and projection operations in this crate take angles in
//! radians. These two functions are the conversion boundary for callers
//! working in degrees.

use std::f32::consts::PI;

#[inline]
pub fn degrees_to_radians(angle_degrees: f32) -> f32 {
    angle_degrees * PI / 180.0
}

#[inline]
pub fn radians_to_degrees(angle_radians: f32) -> f32 {
    angle_radians * 180.0 / PI
}
