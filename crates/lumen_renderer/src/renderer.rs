//! Parallel render loop.
//!
//! Implements Monte Carlo path tracing with:
//! - One independent random generator per pixel
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction and 8-bit quantization

use crate::{integrator::ray_color, Color, RenderConfig, RenderError, Scene};
use lumen_math::Interval;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Channels per pixel in a [`PixelBuffer`] (red, green, blue).
pub const BYTES_PER_PIXEL: usize = 3;

/// Rendered 8-bit image, row 0 at the top, channels interleaved as RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    /// Get the pixel at (x, y), y counted from the top.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert an averaged linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.999 * Interval::UNIT.clamp(linear_to_gamma(c))) as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Generator for one pixel, independent of which thread renders it.
fn pixel_rng(seed: u64, pixel_index: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed ^ pixel_index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Render a single pixel with multi-sampling.
///
/// `(i, j)` counts from the bottom-left corner. Returns the average linear
/// radiance over `config.samples_per_pixel` jittered samples.
pub fn render_pixel(
    scene: &Scene,
    config: &RenderConfig,
    i: u32,
    j: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f32 + crate::sampling::gen_f32(rng)) / config.width as f32;
        let t = (j as f32 + crate::sampling::gen_f32(rng)) / config.height as f32;
        let ray = scene.camera.get_ray(s, t, rng);
        pixel_color += ray_color(
            &ray,
            config.background,
            &scene.world,
            &scene.light,
            config.max_depth,
            rng,
        );
    }

    pixel_color * (1.0 / config.samples_per_pixel as f32)
}

/// Render the entire scene to an 8-bit buffer.
///
/// Pixels are distributed over a rayon pool sized by `config.threads`. Each
/// pixel seeds its own generator from `config.seed` and its index, so the
/// output does not depend on the thread count or scheduling.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<PixelBuffer, RenderError> {
    config.validate()?;

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = config.threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    log::info!(
        "Rendering {}x{} @ {} spp, max depth {}, {} threads",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.max_depth,
        pool.current_num_threads()
    );

    let mut image = PixelBuffer::new(config.width, config.height);
    let width = config.width as usize;
    let height = config.height as usize;
    let rows_done = AtomicUsize::new(0);

    pool.install(|| {
        image
            .data
            .par_chunks_mut(width * BYTES_PER_PIXEL)
            .enumerate()
            .for_each(|(row, bytes)| {
                // Buffer row 0 is the top of the image.
                let j = (height - 1 - row) as u32;
                for (i, pixel) in bytes.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
                    let mut rng = pixel_rng(config.seed, (row * width + i) as u64);
                    let color = render_pixel(scene, config, i as u32, j, &mut rng);
                    pixel.copy_from_slice(&color_to_rgb(color));
                }

                let done = rows_done.fetch_add(1, Ordering::Relaxed) + 1;
                if done % 32 == 0 || done == height {
                    log::debug!("{}/{} rows", done, height);
                }
            });
    });

    log::info!("Rendered {} pixels", width * height);
    Ok(image)
}
