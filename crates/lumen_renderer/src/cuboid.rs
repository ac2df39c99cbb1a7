//! Axis-aligned box built from six rectangles.

use crate::{
    hittable::{HitRecord, Hittable, HittableList},
    AxisAlignedRect, Material, Ray,
};
use lumen_math::{Interval, Vec3};
use std::sync::Arc;

/// An axis-aligned box whose six faces share one material.
pub struct Cuboid {
    min: Vec3,
    max: Vec3,
    sides: HittableList,
}

impl Cuboid {
    /// Create a box from two opposite corners, given in any order.
    pub fn new(a: Vec3, b: Vec3, material: Arc<dyn Material>) -> Self {
        let min = a.min(b);
        let max = a.max(b);

        let mut sides = HittableList::new();
        for z in [max.z, min.z] {
            sides.add(Box::new(AxisAlignedRect::xy(
                min.x,
                max.x,
                min.y,
                max.y,
                z,
                Arc::clone(&material),
            )));
        }
        for y in [max.y, min.y] {
            sides.add(Box::new(AxisAlignedRect::xz(
                min.x,
                max.x,
                min.z,
                max.z,
                y,
                Arc::clone(&material),
            )));
        }
        for x in [max.x, min.x] {
            sides.add(Box::new(AxisAlignedRect::yz(
                min.y,
                max.y,
                min.z,
                max.z,
                x,
                Arc::clone(&material),
            )));
        }

        Self { min, max, sides }
    }

    /// Minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }
}

impl Hittable for Cuboid {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        self.sides.hit(ray, ray_t)
    }
}
