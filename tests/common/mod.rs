#![allow(dead_code)]

use linmath::{Mat4x4, Quat, Vec3, Vec4};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Fixed seed so the "R" class is reproducible across runs
pub const SEED: u64 = 777;

/// The four fixture classes: all zeros, all ones, sequential 1..n in
/// storage order, and per-field seeded random integers in [0, 100)
pub const CLASSES: [&str; 4] = ["0", "1", "N", "R"];

fn values(class: &str, seed: u64, count: usize) -> Vec<f32> {
    match class {
        "0" => vec![0.0; count],
        "1" => vec![1.0; count],
        "N" => (1..=count).map(|n| n as f32).collect(),
        "R" => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count).map(|_| rng.random_range(0..100) as f32).collect()
        }
        _ => panic!("unknown input class: {class}"),
    }
}

pub fn mat(class: &str, seed: u64) -> Mat4x4 {
    let v = values(class, seed, 16);
    let mut m = Mat4x4::IDENTITY;
    let mut n = 0;
    for i in 0..4 {
        for j in 0..4 {
            m.cols[i][j] = v[n];
            n += 1;
        }
    }
    m
}

pub fn vec3(class: &str, seed: u64) -> Vec3 {
    let v = values(class, seed, 3);
    Vec3::new(v[0], v[1], v[2])
}

pub fn vec4(class: &str, seed: u64) -> Vec4 {
    let v = values(class, seed, 4);
    Vec4::new(v[0], v[1], v[2], v[3])
}

pub fn quat(class: &str, seed: u64) -> Quat {
    let v = values(class, seed, 4);
    Quat::new(v[0], v[1], v[2], v[3])
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
