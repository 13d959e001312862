//! Ray representation for 3D ray tracing.
//!
//! A ray is the parametric line r(t) = origin + t * direction, used for
//! every intersection query in the tracer.

use glam::Vec3A;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a surface point for
    /// scattered rays.
    pub origin: Vec3A,

    /// Direction vector of the ray.
    ///
    /// Not required to be unit length; scattered rays in particular carry
    /// unnormalized directions.
    pub direction: Vec3A,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3A, direction: Vec3A) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3A {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_the_direction() {
        let r = Ray::new(Vec3A::new(1.0, 2.0, 3.0), Vec3A::new(0.0, 0.0, -2.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(1.5), Vec3A::new(1.0, 2.0, 0.0));
        assert_eq!(r.at(-1.0), Vec3A::new(1.0, 2.0, 5.0));
    }
}
