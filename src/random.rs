//! Random sampling for rendering.
//!
//! All samplers take the generator as an explicit parameter; there is no
//! process-wide state. The renderer derives one deterministic ChaCha20
//! stream per pixel, so a fixed seed reproduces an image exactly and
//! pixels stay statistically independent of one another.

use glam::Vec3A;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Generate a random f32 in [min, max)
pub fn random_f32_range(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    min + (max - min) * rng.random::<f32>()
}

/// Generate a random point inside the unit sphere using rejection sampling.
pub fn random_in_unit_sphere(rng: &mut impl Rng) -> Vec3A {
    loop {
        let p = 2.0 * Vec3A::new(rng.random(), rng.random(), rng.random()) - Vec3A::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Draw a pair of independent zero-mean Gaussian samples with the given
/// standard deviation, using the Marsaglia polar method.
pub fn gaussian_pair(rng: &mut impl Rng, sigma: f32) -> (f32, f32) {
    loop {
        let u = 2.0 * rng.random::<f32>() - 1.0;
        let v = 2.0 * rng.random::<f32>() - 1.0;
        let s = u * u + v * v;
        if s > 0.0 && s < 1.0 {
            let m = (-2.0 * s.ln() / s).sqrt();
            return (sigma * u * m, sigma * v * m);
        }
    }
}

/// Generate a random RGB color with components in [0.0, 1.0).
pub fn random_color(rng: &mut impl Rng) -> Vec3A {
    Vec3A::new(rng.random(), rng.random(), rng.random())
}

/// Derive the deterministic generator for one pixel.
///
/// Every pixel gets its own ChaCha20 stream of the render seed; stream 0
/// is reserved for the driver (scene generation), so pixel streams start
/// at 1.
pub fn pixel_rng(seed: u64, width: u32, x: u32, y: u32) -> ChaCha20Rng {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(u64::from(y) * u64::from(width) + u64::from(x) + 1);
    rng
}
