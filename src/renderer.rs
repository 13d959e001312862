//! Core path tracing renderer.
//!
//! The integrator walks each ray through the scene carrying a running
//! attenuation product; the sampler drives it with Gaussian-jittered
//! camera rays per pixel, then gamma-corrects and quantizes the average.

use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::Rng;

use crate::camera::Camera;
use crate::interval::Interval;
use crate::material::Color;
use crate::random;
use crate::ray::Ray;
use crate::scene::Scene;

/// Lower bound of every intersection query, to avoid self-intersection of
/// scattered rays with the surface they left.
const T_MIN: f32 = 1e-4;

/// Standard deviation of the per-sample Gaussian pixel jitter.
const JITTER_SIGMA: f32 = 0.3;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Rendered image width in pixels
    pub width: u32,
    /// Rendered image height in pixels
    pub height: u32,
    /// Number of jittered samples per pixel (anti-aliasing)
    pub samples_per_pixel: u32,
    /// Maximum number of scattering events per ray path
    pub max_depth: u32,
    /// Seed for the deterministic per-pixel RNG streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 720,
            height: 360,
            samples_per_pixel: 100,
            max_depth: 20,
            seed: 0,
        }
    }
}

/// Compute the color gathered by a ray.
///
/// Iterative form of the recursive definition
/// `color(ray) = attenuation * color(scattered)`: a throughput product
/// accumulates the attenuation of each scattering event. Absorption or
/// exhausting the depth budget yields black; escaping to the sky yields
/// the throughput times the sky gradient.
pub fn ray_color(r: &Ray, scene: &Scene, max_depth: u32, rng: &mut impl Rng) -> Color {
    let mut current = *r;
    let mut throughput = Color::ONE;
    let mut bounces = 0;

    loop {
        match scene.hit(&current, Interval::new(T_MIN, f32::INFINITY)) {
            None => return throughput * sky(&current),
            Some(rec) => {
                if bounces >= max_depth {
                    return Color::ZERO;
                }
                match rec.material.scatter(&current, &rec, rng) {
                    Some(scatter) => {
                        throughput *= scatter.attenuation;
                        current = scatter.ray;
                        bounces += 1;
                    }
                    None => return Color::ZERO,
                }
            }
        }
    }
}

/// Sky gradient for rays that escape the scene: white at the horizon
/// blending into sky-blue overhead.
fn sky(r: &Ray) -> Color {
    let unit_direction = r.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::new(1.0, 1.0, 1.0) + t * Color::new(0.5, 0.7, 1.0)
}

/// Gamma-correct (gamma 2, square root) and quantize a linear color to
/// 8-bit RGB. The float-to-int cast saturates, so channels above 1.0 pin
/// at 255 rather than wrapping.
pub fn color_to_rgb(color: Color) -> Rgb<u8> {
    Rgb([
        (255.99 * color.x.sqrt()) as u8,
        (255.99 * color.y.sqrt()) as u8,
        (255.99 * color.z.sqrt()) as u8,
    ])
}

/// Render the scene into an 8-bit RGB image.
///
/// Pixels are traced in row-major order, top image row first. Each pixel
/// draws its samples and any scattering randomness from its own
/// deterministic RNG stream, so a fixed seed reproduces the image
/// exactly.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RgbImage {
    let mut image = RgbImage::new(config.width, config.height);

    info!(
        "Rendering {}x{} at {} samples per pixel, depth budget {}",
        config.width, config.height, config.samples_per_pixel, config.max_depth
    );
    let generation_start = std::time::Instant::now();
    let pb = ProgressBar::new(u64::from(config.width) * u64::from(config.height));
    pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}").unwrap());

    let sample_scale = 1.0 / config.samples_per_pixel as f32;

    for y in 0..config.height {
        // Image row 0 is the top of the frame; camera v grows upward.
        let j = config.height - 1 - y;
        for x in 0..config.width {
            let mut rng = random::pixel_rng(config.seed, config.width, x, y);
            let mut pixel_color = Color::ZERO;

            for _ in 0..config.samples_per_pixel {
                let (jitter_x, jitter_y) = random::gaussian_pair(&mut rng, JITTER_SIGMA);
                let u = (x as f32 + jitter_x) / config.width as f32;
                let v = (j as f32 + jitter_y) / config.height as f32;
                let r = camera.get_ray(u, v);
                pixel_color += ray_color(&r, scene, config.max_depth, &mut rng);
            }

            image.put_pixel(x, y, color_to_rgb(pixel_color * sample_scale));
            pb.inc(1);
        }
    }

    pb.finish();
    info!("Image generated in {:.2?}", generation_start.elapsed());

    image
}
