//! Material trait for surface scattering.

use crate::hittable::HitRecord;
use crate::sampling::{random_cosine_direction, Onb};
use crate::Ray;
use lumen_math::Vec3;
use rand::RngCore;
use std::f32::consts::PI;

/// Color type alias (linear RGB radiance, unclamped)
pub type Color = Vec3;

/// Outcome of a successful scatter event.
#[derive(Debug, Clone, Copy)]
pub struct ScatterRecord {
    /// Fraction of incoming light reflected, per channel
    pub attenuation: Color,
    /// The ray leaving the surface
    pub scattered: Ray,
    /// Density with which `scattered` was chosen
    pub pdf: f32,
}

/// Trait for materials that describe how light interacts with surfaces.
///
/// Materials are shared by every render thread, so implementations must not
/// keep mutable state; randomness comes from the caller's generator.
pub trait Material: Send + Sync {
    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed or the surface only emits.
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord>;

    /// Density this material assigns to scattering `ray_in` into `scattered`.
    fn scattering_pdf(&self, _ray_in: &Ray, _rec: &HitRecord, _scattered: &Ray) -> f32 {
        0.0
    }

    /// Light emitted at the given UV coordinates and point.
    ///
    /// Most materials return black (no emission).
    fn emitted(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        Color::ZERO
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone)]
pub struct Lambertian {
    albedo: Color,
}

impl Lambertian {
    /// Create a new Lambertian material with the given albedo color.
    pub fn new(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        // Cosine-weighted direction on the hemisphere around the normal
        let uvw = Onb::from_w(rec.normal);
        let direction = uvw.local(random_cosine_direction(rng)).normalize();

        Some(ScatterRecord {
            attenuation: self.albedo,
            scattered: Ray::new(rec.p, direction, ray_in.time()),
            pdf: uvw.w().dot(direction) / PI,
        })
    }

    fn scattering_pdf(&self, _ray_in: &Ray, rec: &HitRecord, scattered: &Ray) -> f32 {
        let cosine = rec.normal.dot(scattered.direction().normalize());
        if cosine < 0.0 {
            0.0
        } else {
            cosine / PI
        }
    }
}

/// Diffuse light emitter.
#[derive(Debug, Clone)]
pub struct DiffuseLight {
    emit: Color,
}

impl DiffuseLight {
    /// Create a new diffuse light with the given emission color.
    pub fn new(emit: Color) -> Self {
        Self { emit }
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray_in: &Ray, _rec: &HitRecord, _rng: &mut dyn RngCore) -> Option<ScatterRecord> {
        // Lights don't scatter rays
        None
    }

    fn emitted(&self, _u: f32, _v: f32, _p: Vec3) -> Color {
        self.emit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn floor_hit(material: &dyn Material) -> HitRecord<'_> {
        let ray = Ray::new_simple(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        HitRecord::new(&ray, 1.0, Vec3::Y, (0.5, 0.5), material)
    }

    #[test]
    fn test_lambertian_scatters_into_normal_hemisphere() {
        let lambertian = Lambertian::new(Color::new(0.12, 0.45, 0.15));
        let rec = floor_hit(&lambertian);
        let ray_in = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0), 0.5);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let sr = lambertian.scatter(&ray_in, &rec, &mut rng).unwrap();
            assert_eq!(sr.attenuation, Color::new(0.12, 0.45, 0.15));
            assert_eq!(sr.scattered.origin(), rec.p);
            assert_eq!(sr.scattered.time(), 0.5);
            assert!(sr.scattered.direction().dot(rec.normal) >= 0.0);
            assert!(sr.pdf >= 0.0);

            let expected = lambertian.scattering_pdf(&ray_in, &rec, &sr.scattered);
            assert!((sr.pdf - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_lambertian_pdf_below_surface_is_zero() {
        let lambertian = Lambertian::new(Color::splat(0.73));
        let rec = floor_hit(&lambertian);
        let ray_in = Ray::new_simple(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let down = Ray::new_simple(rec.p, Vec3::new(0.3, -1.0, 0.0));
        assert_eq!(lambertian.scattering_pdf(&ray_in, &rec, &down), 0.0);

        let up = Ray::new_simple(rec.p, Vec3::new(0.0, 4.0, 0.0));
        assert!((lambertian.scattering_pdf(&ray_in, &rec, &up) - 1.0 / PI).abs() < 1e-6);
    }

    #[test]
    fn test_lambertian_emits_nothing() {
        let lambertian = Lambertian::new(Color::ONE);
        assert_eq!(lambertian.emitted(0.0, 0.0, Vec3::ZERO), Color::ZERO);
    }

    #[test]
    fn test_diffuse_light() {
        let light = DiffuseLight::new(Color::splat(15.0));
        let rec = floor_hit(&light);
        let ray_in = Ray::new_simple(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(1);

        assert!(light.scatter(&ray_in, &rec, &mut rng).is_none());
        assert_eq!(light.emitted(0.2, 0.8, rec.p), Color::splat(15.0));
        assert_eq!(light.scattering_pdf(&ray_in, &rec, &ray_in), 0.0);
    }
}
