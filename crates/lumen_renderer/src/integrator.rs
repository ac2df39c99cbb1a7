//! Recursive radiance estimator with direct light sampling.
//!
//! At every diffuse bounce the continuation ray is aimed at a uniformly
//! sampled point on the scene's area light instead of following the
//! material's own scatter direction. The estimate is weighted by the
//! material's density for that direction over the light's solid-angle
//! density. This is next-event estimation on its own, not a multiple
//! importance sampling blend of the two strategies.

use crate::{Color, Hittable, Ray, RectLight};
use lumen_math::Interval;
use rand::RngCore;

/// Lower bound of every hit query, keeps rays off the surface they left.
pub const SHADOW_EPSILON: f32 = 0.001;

/// Light cosines below this see the light edge-on and contribute nothing.
pub const MIN_LIGHT_COSINE: f32 = 1e-6;

/// Compute the radiance carried back along `ray`.
///
/// `depth` is the number of bounces left; recursion stops at zero, which
/// also bounds stack use per sample.
pub fn ray_color(
    ray: &Ray,
    background: Color,
    world: &dyn Hittable,
    light: &RectLight,
    depth: u32,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let rec = match world.hit(ray, Interval::new(SHADOW_EPSILON, f32::INFINITY)) {
        Some(rec) => rec,
        None => return background,
    };

    let emitted = rec.material.emitted(rec.u, rec.v, rec.p);

    let srec = match rec.material.scatter(ray, &rec, rng) {
        Some(srec) => srec,
        None => return emitted,
    };

    let on_light = light.sample(rng);
    let to_light = on_light - rec.p;
    let distance_squared = to_light.length_squared();
    if distance_squared <= 0.0 {
        return emitted;
    }
    let to_light = to_light / distance_squared.sqrt();

    if to_light.dot(rec.normal) < 0.0 {
        return emitted;
    }

    let light_cosine = light.cosine(to_light);
    if light_cosine < MIN_LIGHT_COSINE {
        return emitted;
    }

    // Area density 1/A converted to solid angle.
    let pdf = distance_squared / (light_cosine * light.area());
    if !(pdf.is_finite() && pdf > 0.0) {
        return emitted;
    }

    let scattered = Ray::new(rec.p, to_light, ray.time());
    let scattering_pdf = rec.material.scattering_pdf(ray, &rec, &scattered);

    emitted
        + srec.attenuation
            * scattering_pdf
            * ray_color(&scattered, background, world, light, depth - 1, rng)
            / pdf
}
