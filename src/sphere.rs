//! Sphere primitive and ray-sphere intersection.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::scene::HitRecord;

/// Sphere defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Vec3A,
    /// Radius (negative values are clamped to 0.0 in the constructor).
    pub radius: f32,
    /// Material properties determining light interaction.
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. Negative radius values are clamped to 0.0.
    pub fn new(center: Vec3A, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }

    /// Test for ray intersection within the given parameter interval.
    ///
    /// Solves the quadratic from substituting the ray into the implicit
    /// sphere equation, using the half-b formulation. The nearer root is
    /// preferred; if it falls outside the interval the farther root is
    /// tried.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - r.origin;
        let a = r.direction.length_squared();
        let h = r.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = r.at(root);
        Some(HitRecord {
            t: root,
            p,
            // Unit length by construction
            normal: (p - self.center) / self.radius,
            material: &self.material,
        })
    }
}
