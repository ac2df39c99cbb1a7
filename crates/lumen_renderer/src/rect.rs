//! Axis-aligned rectangle primitive.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, Ray,
};
use lumen_math::{Interval, Vec3};
use std::sync::Arc;

/// Orientation of an axis-aligned rectangle, named by the two axes it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    Xy,
    Xz,
    Yz,
}

impl Plane {
    /// Component indices `(a, b, k)`: the two in-plane axes, then the
    /// dropped axis the plane is perpendicular to.
    #[inline]
    pub fn axes(self) -> (usize, usize, usize) {
        match self {
            Plane::Xy => (0, 1, 2),
            Plane::Xz => (0, 2, 1),
            Plane::Yz => (1, 2, 0),
        }
    }

    /// Positive unit vector along the dropped axis.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Plane::Xy => Vec3::Z,
            Plane::Xz => Vec3::Y,
            Plane::Yz => Vec3::X,
        }
    }

    /// Assemble a point from in-plane coordinates and the plane offset.
    #[inline]
    pub fn point(self, a: f32, b: f32, k: f32) -> Vec3 {
        match self {
            Plane::Xy => Vec3::new(a, b, k),
            Plane::Xz => Vec3::new(a, k, b),
            Plane::Yz => Vec3::new(k, a, b),
        }
    }
}

/// A rectangle lying in a plane perpendicular to one coordinate axis.
///
/// Bounds are closed: a hit exactly on an edge counts.
pub struct AxisAlignedRect {
    plane: Plane,
    a0: f32,
    a1: f32,
    b0: f32,
    b1: f32,
    k: f32,
    material: Arc<dyn Material>,
}

impl AxisAlignedRect {
    /// Create a rectangle spanning `[a0, a1] x [b0, b1]` in `plane` at
    /// offset `k` along the dropped axis.
    pub fn new(
        plane: Plane,
        (a0, a1): (f32, f32),
        (b0, b1): (f32, f32),
        k: f32,
        material: Arc<dyn Material>,
    ) -> Self {
        Self {
            plane,
            a0: a0.min(a1),
            a1: a0.max(a1),
            b0: b0.min(b1),
            b1: b0.max(b1),
            k,
            material,
        }
    }

    /// Rectangle in the XY plane at `z = k`.
    pub fn xy(x0: f32, x1: f32, y0: f32, y1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::Xy, (x0, x1), (y0, y1), k, material)
    }

    /// Rectangle in the XZ plane at `y = k`.
    pub fn xz(x0: f32, x1: f32, z0: f32, z1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::Xz, (x0, x1), (z0, z1), k, material)
    }

    /// Rectangle in the YZ plane at `x = k`.
    pub fn yz(y0: f32, y1: f32, z0: f32, z1: f32, k: f32, material: Arc<dyn Material>) -> Self {
        Self::new(Plane::Yz, (y0, y1), (z0, z1), k, material)
    }

    pub fn plane(&self) -> Plane {
        self.plane
    }
}

impl Hittable for AxisAlignedRect {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let (a_axis, b_axis, k_axis) = self.plane.axes();

        // A ray parallel to the plane divides by zero; the resulting
        // infinity or NaN fails the open-interval test below.
        let t = (self.k - ray.origin()[k_axis]) / ray.direction()[k_axis];
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        let (a, b) = (p[a_axis], p[b_axis]);
        if a < self.a0 || a > self.a1 || b < self.b0 || b > self.b1 {
            return None;
        }

        let uv = (
            (a - self.a0) / (self.a1 - self.a0),
            (b - self.b0) / (self.b1 - self.b0),
        );
        Some(HitRecord::new(
            ray,
            t,
            self.plane.normal(),
            uv,
            self.material.as_ref(),
        ))
    }
}
