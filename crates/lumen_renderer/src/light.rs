//! Rectangular area light used for direct light sampling.

use crate::rect::Plane;
use crate::sampling::gen_range_f32;
use lumen_math::Vec3;
use rand::RngCore;

/// Geometry of the area light that next-event estimation aims at.
///
/// This only describes where to sample; the emitting surface itself is an
/// ordinary rectangle in the world with a [`DiffuseLight`](crate::DiffuseLight)
/// material, and the two are expected to coincide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectLight {
    pub plane: Plane,
    /// Bounds along the first in-plane axis
    pub a: (f32, f32),
    /// Bounds along the second in-plane axis
    pub b: (f32, f32),
    /// Offset along the dropped axis
    pub k: f32,
}

impl RectLight {
    pub fn new(plane: Plane, a: (f32, f32), b: (f32, f32), k: f32) -> Self {
        Self { plane, a, b, k }
    }

    /// Light in the XZ plane at `y = k`, the usual ceiling light.
    pub fn xz(x0: f32, x1: f32, z0: f32, z1: f32, k: f32) -> Self {
        Self::new(Plane::Xz, (x0, x1), (z0, z1), k)
    }

    /// Surface area of the rectangle.
    pub fn area(&self) -> f32 {
        ((self.a.1 - self.a.0) * (self.b.1 - self.b.0)).abs()
    }

    /// Uniformly sample a point on the rectangle.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let a = gen_range_f32(rng, self.a.0, self.a.1);
        let b = gen_range_f32(rng, self.b.0, self.b.1);
        self.plane.point(a, b, self.k)
    }

    /// Cosine between a unit direction and the light's normal, sign ignored.
    #[inline]
    pub fn cosine(&self, unit_direction: Vec3) -> f32 {
        let (_, _, k_axis) = self.plane.axes();
        unit_direction[k_axis].abs()
    }
}
