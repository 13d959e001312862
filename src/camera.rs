//! Pinhole camera for ray generation.

use glam::Vec3A;

use crate::ray::Ray;

/// Pinhole camera mapping normalized view-plane coordinates to world rays.
///
/// Built once from a vertical field of view, an aspect ratio, an eye
/// position and a look-at target; the world up direction is fixed at
/// (0, 1, 0). The view plane sits one unit in front of the eye.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position (origin of every generated ray).
    origin: Vec3A,
    /// World position of the view plane's lower-left corner.
    lower_left_corner: Vec3A,
    /// Span of the view plane along the camera's right direction.
    horizontal: Vec3A,
    /// Span of the view plane along the camera's up direction.
    vertical: Vec3A,
}

impl Camera {
    /// Create a camera from a vertical field of view in degrees, an
    /// aspect ratio (width / height), the eye position and the look-at
    /// target.
    pub fn new(vfov: f32, aspect: f32, lookfrom: Vec3A, lookat: Vec3A) -> Self {
        let vup = Vec3A::new(0.0, 1.0, 0.0);

        let theta = vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = aspect * half_height;

        // Orthonormal basis: w points opposite the view direction,
        // u to the camera's right, v up.
        let w = (lookfrom - lookat).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        Self {
            origin: lookfrom,
            lower_left_corner: lookfrom - half_width * u - half_height * v - w,
            horizontal: 2.0 * half_width * u,
            vertical: 2.0 * half_height * v,
        }
    }

    /// Generate the ray through view-plane coordinates (s, t) in [0,1]²,
    /// where (0, 0) is the lower-left corner of the image.
    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        Ray::new(
            self.origin,
            self.lower_left_corner + s * self.horizontal + t * self.vertical - self.origin,
        )
    }
}
