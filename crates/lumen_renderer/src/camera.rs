//! Thin-lens camera for ray generation.

use crate::sampling::{gen_range_f32, random_in_unit_disk};
use crate::Ray;
use lumen_math::Vec3;
use rand::RngCore;

/// Camera for generating rays into the scene.
///
/// Configure with the `with_*` builders, then call [`Camera::initialize`]
/// before generating rays.
#[derive(Debug, Clone)]
pub struct Camera {
    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,          // Vertical field of view in degrees
    aspect_ratio: f32,  // Viewport width over height
    defocus_angle: f32, // Variation angle of rays through each pixel
    focus_dist: f32,    // Distance from camera to plane of perfect focus

    // Shutter interval for ray times
    time0: f32,
    time1: f32,

    // Cached computed values (set by initialize())
    center: Vec3,
    lower_left: Vec3,
    viewport_u: Vec3,
    viewport_v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect_ratio: 1.0,
            defocus_angle: 0.0,
            focus_dist: 1.0,
            time0: 0.0,
            time1: 0.0,
            center: Vec3::ZERO,
            lower_left: Vec3::ZERO,
            viewport_u: Vec3::ZERO,
            viewport_v: Vec3::ZERO,
            w: Vec3::Z,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    /// Set the viewport aspect ratio (width / height).
    pub fn with_aspect_ratio(mut self, aspect_ratio: f32) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set the shutter interval ray times are drawn from.
    pub fn with_shutter(mut self, time0: f32, time1: f32) -> Self {
        self.time0 = time0;
        self.time1 = time1;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.center = self.look_from;

        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width = viewport_height * self.aspect_ratio;

        // Camera basis vectors
        self.w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(self.w).normalize();
        let v = self.w.cross(u);

        // v points up, so t = 0 is the bottom edge of the image
        self.viewport_u = viewport_width * u;
        self.viewport_v = viewport_height * v;
        self.lower_left =
            self.center - self.focus_dist * self.w - self.viewport_u / 2.0 - self.viewport_v / 2.0;

        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = u * defocus_radius;
        self.defocus_disk_v = v * defocus_radius;
    }

    /// Generate a ray through normalized image coordinates `(s, t)`.
    ///
    /// `s` runs left to right and `t` bottom to top, both over `[0, 1]`.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let target = self.lower_left + s * self.viewport_u + t * self.viewport_v;

        let origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        let time = if self.time1 > self.time0 {
            gen_range_f32(rng, self.time0, self.time1)
        } else {
            self.time0
        };

        Ray::new(origin, target - origin, time)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cornell_camera() -> Camera {
        let mut camera = Camera::new()
            .with_position(
                Vec3::new(278.0, 278.0, -800.0),
                Vec3::new(278.0, 278.0, 0.0),
                Vec3::Y,
            )
            .with_lens(40.0, 0.0, 10.0);
        camera.initialize();
        camera
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = cornell_camera();
        let mut rng = StdRng::seed_from_u64(42);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin(), Vec3::new(278.0, 278.0, -800.0));
        let dir = ray.direction().normalize();
        assert!((dir - Vec3::Z).length() < 1e-5);
        assert_eq!(ray.time(), 0.0);
    }

    #[test]
    fn test_image_orientation() {
        let camera = cornell_camera();
        let mut rng = StdRng::seed_from_u64(42);

        let bottom_left = camera.get_ray(0.0, 0.0, &mut rng).direction();
        let top_right = camera.get_ray(1.0, 1.0, &mut rng).direction();
        assert!(bottom_left.y < 0.0);
        assert!(top_right.y > 0.0);
        // Looking down +Z with +Y up, image right is -X.
        assert!(bottom_left.x > 0.0);
        assert!(top_right.x < 0.0);
    }

    #[test]
    fn test_defocus_jitters_origin() {
        let mut camera = Camera::new()
            .with_position(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y)
            .with_lens(90.0, 10.0, 3.0);
        camera.initialize();
        let mut rng = StdRng::seed_from_u64(9);

        let origins: Vec<Vec3> = (0..16).map(|_| camera.get_ray(0.5, 0.5, &mut rng).origin()).collect();
        assert!(origins.iter().any(|o| *o != Vec3::ZERO));
        assert!(origins.iter().all(|o| o.z == 0.0));
    }

    #[test]
    fn test_shutter_times() {
        let mut camera = Camera::new().with_shutter(0.0, 1.0);
        camera.initialize();
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..100 {
            let time = camera.get_ray(0.3, 0.7, &mut rng).time();
            assert!((0.0..1.0).contains(&time));
        }
    }
}
