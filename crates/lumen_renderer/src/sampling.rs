//! Random sampling helpers shared by materials, lights and the camera.
//!
//! Every function draws from the caller's generator; nothing here holds
//! random state of its own.

use lumen_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Uniform f32 in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform f32 in [min, max].
///
/// Closed at the top: for wide ranges `(max - min) * gen_f32` can round up
/// to the full width.
#[inline]
pub fn gen_range_f32(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * gen_f32(rng)
}

/// Sample a random point in the unit disk (z = 0).
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_range_f32(rng, -1.0, 1.0),
            gen_range_f32(rng, -1.0, 1.0),
            0.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Cosine-weighted direction on the +Z hemisphere.
pub fn random_cosine_direction(rng: &mut dyn RngCore) -> Vec3 {
    let r1 = gen_f32(rng);
    let r2 = gen_f32(rng);
    let phi = 2.0 * PI * r1;
    let sqrt_r2 = r2.sqrt();

    Vec3::new(
        phi.cos() * sqrt_r2,
        phi.sin() * sqrt_r2,
        (1.0 - r2).sqrt(),
    )
}

/// Orthonormal basis built around a single direction `w`.
#[derive(Debug, Clone, Copy)]
pub struct Onb {
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Onb {
    pub fn from_w(n: Vec3) -> Self {
        let w = n.normalize();
        let a = if w.x.abs() > 0.9 { Vec3::Y } else { Vec3::X };
        let v = w.cross(a).normalize();
        let u = w.cross(v);
        Self { u, v, w }
    }

    pub fn w(&self) -> Vec3 {
        self.w
    }

    /// Map local coordinates onto the basis.
    #[inline]
    pub fn local(&self, a: Vec3) -> Vec3 {
        a.x * self.u + a.y * self.v + a.z * self.w
    }
}
