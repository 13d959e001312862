//! Scene aggregation and ray-scene intersection.
//!
//! A scene is an ordered collection of primitives; intersection is a
//! linear scan that keeps the closest hit by narrowing the query
//! interval as it goes.

use glam::Vec3A;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Ray-primitive intersection information.
///
/// Stack-local result of a single intersection query; borrows the hit
/// primitive's material and is never stored.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Point where the ray intersects the primitive
    pub p: Vec3A,
    /// Unit-length surface normal, pointing out of the primitive.
    ///
    /// The normal is geometric: it is never flipped toward the incoming
    /// ray. Materials that care about sidedness (the dielectric) inspect
    /// the sign of `dot(direction, normal)` themselves.
    pub normal: Vec3A,
    /// Material of the primitive at the hit point
    pub material: &'a Material,
}

/// Geometric primitive kinds a scene can hold.
#[derive(Debug, Clone)]
pub enum Primitive {
    /// Sphere defined by center, radius, and material.
    Sphere(Sphere),
}

impl Primitive {
    /// Test for ray intersection within the given parameter interval.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Primitive::Sphere(sphere) => sphere.hit(r, ray_t),
        }
    }
}

/// Ordered collection of primitives forming a scene.
///
/// Constructed once before rendering and read-only thereafter.
#[derive(Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the scene.
    pub fn add(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Find the nearest intersection within the given parameter interval.
    ///
    /// Linear scan over all primitives, shrinking the interval's upper
    /// bound to the closest hit found so far. Among equal-distance hits
    /// the first primitive in insertion order wins.
    pub fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for primitive in &self.primitives {
            if let Some(rec) = primitive.hit(r, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = rec.t;
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Color, Material};

    fn sphere_at(z: f32, albedo: Color) -> Primitive {
        Primitive::Sphere(Sphere::new(
            Vec3A::new(0.0, 0.0, z),
            0.5,
            Material::diffuse(albedo),
        ))
    }

    #[test]
    fn empty_scene_reports_no_hit() {
        let scene = Scene::new();
        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(scene.hit(&r, Interval::new(1e-4, f32::INFINITY)).is_none());
    }

    #[test]
    fn nearest_primitive_wins_regardless_of_insertion_order() {
        let mut scene = Scene::new();
        scene.add(sphere_at(-5.0, Color::new(0.1, 0.1, 0.1)));
        scene.add(sphere_at(-2.0, Color::new(0.9, 0.9, 0.9)));

        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&r, Interval::new(1e-4, f32::INFINITY)).unwrap();
        // Front face of the near sphere sits at z = -1.5.
        assert!((rec.t - 1.5).abs() < 1e-5);
    }

    #[test]
    fn equal_distance_hits_keep_the_first_in_scan_order() {
        let mut scene = Scene::new();
        scene.add(sphere_at(-2.0, Color::new(1.0, 0.0, 0.0)));
        scene.add(sphere_at(-2.0, Color::new(0.0, 1.0, 0.0)));

        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        let rec = scene.hit(&r, Interval::new(1e-4, f32::INFINITY)).unwrap();
        match rec.material {
            Material::Diffuse { albedo } => assert_eq!(*albedo, Color::new(1.0, 0.0, 0.0)),
            _ => unreachable!(),
        }
    }

    #[test]
    fn interval_upper_bound_excludes_far_primitives() {
        let mut scene = Scene::new();
        scene.add(sphere_at(-5.0, Color::ONE));

        let r = Ray::new(Vec3A::ZERO, Vec3A::new(0.0, 0.0, -1.0));
        assert!(scene.hit(&r, Interval::new(1e-4, 1.0)).is_none());
        assert!(scene.hit(&r, Interval::new(1e-4, f32::INFINITY)).is_some());
    }
}
