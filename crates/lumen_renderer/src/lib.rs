//! Lumen renderer - CPU path tracing with direct light sampling.
//!
//! A Monte Carlo path tracer over a flat list of analytic primitives
//! (axis-aligned rectangles, spheres and boxes). Each diffuse bounce aims
//! its continuation ray at the scene's rectangular area light.
//!
//! # Example
//!
//! ```ignore
//! use lumen_renderer::{cornell_box, render, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let scene = cornell_box(config.aspect_ratio());
//! let image = render(&scene, &config)?;
//! assert_eq!(image.data.len(), 600 * 600 * 3);
//! ```

mod camera;
mod config;
mod cuboid;
mod hittable;
mod integrator;
mod light;
mod material;
mod rect;
mod renderer;
pub mod sampling;
mod scene;
mod sphere;

pub use camera::Camera;
pub use config::{RenderConfig, RenderError};
pub use cuboid::Cuboid;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use integrator::{ray_color, MIN_LIGHT_COSINE, SHADOW_EPSILON};
pub use light::RectLight;
pub use material::{Color, DiffuseLight, Lambertian, Material, ScatterRecord};
pub use rect::{AxisAlignedRect, Plane};
pub use renderer::{
    color_to_rgb, linear_to_gamma, render, render_pixel, PixelBuffer, BYTES_PER_PIXEL,
};
pub use scene::{cornell_box, Scene};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
