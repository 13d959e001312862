//! Material scattering models.
//!
//! Implements the three surface models as a closed enum: diffuse (matte),
//! specular (mirror with optional fuzz), and dielectric (glass). Each
//! variant answers a scatter query with either an attenuated outgoing ray
//! or absorption.

use glam::Vec3A;
use rand::Rng;

use crate::random;
use crate::ray::Ray;
use crate::scene::HitRecord;

/// RGB color type using Vec3A for SIMD optimization.
pub type Color = Vec3A;

/// Outcome of a successful scatter: the surviving ray and the per-channel
/// color multiplier applied to whatever light it gathers.
#[derive(Debug, Clone, Copy)]
pub struct Scatter {
    /// Per-channel color multiplier for light carried by the outgoing ray.
    pub attenuation: Color,
    /// The outgoing ray, originating at the hit point.
    pub ray: Ray,
}

/// Surface material of a primitive.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Matte surface approximating Lambertian reflection.
    Diffuse {
        /// Base reflective color.
        albedo: Color,
    },

    /// Mirror reflection with optional roughness.
    Specular {
        /// Base reflective color.
        albedo: Color,
        /// Roughness in [0, 1]: 0 is a perfect mirror, 1 fully perturbed.
        fuzz: f32,
    },

    /// Transparent material that reflects or refracts, never absorbs.
    Dielectric {
        /// Index of refraction (1.5 for glass, 2.4 for diamond).
        refractive_index: f32,
    },
}

impl Material {
    /// Create a diffuse material with the given albedo.
    pub fn diffuse(albedo: Color) -> Self {
        Material::Diffuse { albedo }
    }

    /// Create a specular material; fuzz greater than 1.0 is clamped to 1.0.
    pub fn specular(albedo: Color, fuzz: f32) -> Self {
        Material::Specular {
            albedo,
            fuzz: fuzz.min(1.0),
        }
    }

    /// Create a dielectric material with the given refractive index.
    pub fn dielectric(refractive_index: f32) -> Self {
        Material::Dielectric { refractive_index }
    }

    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns the attenuated outgoing ray, or `None` if the ray is
    /// absorbed (no further light contribution).
    pub fn scatter(&self, r_in: &Ray, rec: &HitRecord, rng: &mut impl Rng) -> Option<Scatter> {
        match *self {
            Material::Diffuse { albedo } => scatter_diffuse(albedo, rec, rng),
            Material::Specular { albedo, fuzz } => scatter_specular(albedo, fuzz, r_in, rec, rng),
            Material::Dielectric { refractive_index } => {
                scatter_dielectric(refractive_index, r_in, rec, rng)
            }
        }
    }
}

/// Diffuse scattering: aim at a random point in the unit sphere sitting on
/// the surface normal. Always scatters.
fn scatter_diffuse(albedo: Color, rec: &HitRecord, rng: &mut impl Rng) -> Option<Scatter> {
    let target = rec.p + rec.normal + random::random_in_unit_sphere(rng);
    Some(Scatter {
        attenuation: albedo,
        ray: Ray::new(rec.p, target - rec.p),
    })
}

/// Specular scattering: mirror reflection perturbed by the fuzz radius.
/// Absorbed if the perturbed direction dips below the surface.
fn scatter_specular(
    albedo: Color,
    fuzz: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut impl Rng,
) -> Option<Scatter> {
    let reflected = reflect(r_in.direction.normalize(), rec.normal);
    let direction = reflected + fuzz * random::random_in_unit_sphere(rng);
    if direction.dot(rec.normal) > 0.0 {
        Some(Scatter {
            attenuation: albedo,
            ray: Ray::new(rec.p, direction),
        })
    } else {
        None
    }
}

/// Dielectric scattering: refract when Snell's law allows it, otherwise
/// total internal reflection; when both are possible, one uniform draw
/// against the Schlick reflectance picks the branch. Never absorbs.
fn scatter_dielectric(
    refractive_index: f32,
    r_in: &Ray,
    rec: &HitRecord,
    rng: &mut impl Rng,
) -> Option<Scatter> {
    let reflected = reflect(r_in.direction, rec.normal);

    // The normal is geometric (always points out of the sphere), so the
    // sign of this dot product tells entering from exiting.
    let (outward_normal, ni_over_nt, cosine);
    let d_dot_n = r_in.direction.dot(rec.normal);
    if d_dot_n > 0.0 {
        // Exiting the medium: use the transmitted-angle cosine.
        outward_normal = -rec.normal;
        ni_over_nt = refractive_index;
        let c = d_dot_n / r_in.direction.length();
        cosine = (1.0 - refractive_index * refractive_index * (1.0 - c * c)).sqrt();
    } else {
        outward_normal = rec.normal;
        ni_over_nt = 1.0 / refractive_index;
        cosine = -d_dot_n / r_in.direction.length();
    }

    let direction = match refract(r_in.direction, outward_normal, ni_over_nt) {
        Some(refracted) => {
            let reflect_prob = schlick(cosine, refractive_index);
            if rng.random::<f32>() < reflect_prob {
                reflected
            } else {
                refracted
            }
        }
        // Total internal reflection
        None => reflected,
    };

    Some(Scatter {
        attenuation: Color::ONE,
        ray: Ray::new(rec.p, direction),
    })
}

/// Reflect a vector off a surface with normal `n`.
pub fn reflect(v: Vec3A, n: Vec3A) -> Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Refract a vector through an interface using Snell's law.
///
/// Returns `None` when the discriminant is non-positive, i.e. total
/// internal reflection.
pub fn refract(v: Vec3A, n: Vec3A, ni_over_nt: f32) -> Option<Vec3A> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick approximation of the Fresnel reflectance.
pub fn schlick(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = (1.0 - ref_idx) / (1.0 + ref_idx);
    let r0 = r0 * r0;
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(7)
    }

    fn record(material: &Material) -> HitRecord<'_> {
        HitRecord {
            t: 1.0,
            p: Vec3A::ZERO,
            normal: Vec3A::new(0.0, 1.0, 0.0),
            material,
        }
    }

    #[test]
    fn reflect_preserves_length_and_angle() {
        let n = Vec3A::new(0.0, 1.0, 0.0);
        let v = Vec3A::new(1.0, -1.0, 0.5);
        let r = reflect(v, n);

        assert!((r.length() - v.length()).abs() < 1e-6);
        // Equal angle of incidence and reflection about the normal.
        assert!((v.dot(n) + r.dot(n)).abs() < 1e-6);
        // Tangential component unchanged.
        assert_eq!(r.x, v.x);
        assert_eq!(r.z, v.z);
    }

    #[test]
    fn schlick_stays_in_unit_range() {
        for &ref_idx in &[1.3f32, 1.5, 2.3] {
            for i in 0..=10 {
                let cosine = i as f32 / 10.0;
                let r = schlick(cosine, ref_idx);
                assert!((0.0..=1.0).contains(&r), "schlick({cosine}, {ref_idx}) = {r}");
            }
        }
        // Head-on incidence gives the base reflectance, grazing gives 1.
        let r0 = ((1.0f32 - 1.5) / (1.0 + 1.5)).powi(2);
        assert!((schlick(1.0, 1.5) - r0).abs() < 1e-6);
        assert!((schlick(0.0, 1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn refract_bends_toward_the_normal_entering_denser_medium() {
        let n = Vec3A::new(0.0, 1.0, 0.0);
        let v = Vec3A::new(1.0, -1.0, 0.0);
        let refracted = refract(v, n, 1.0 / 1.5).expect("refraction possible");

        // Snell: sin(theta_t) = sin(theta_i) / 1.5
        let sin_i = (0.5f32).sqrt();
        let sin_t = refracted.normalize().x;
        assert!((sin_t - sin_i / 1.5).abs() < 1e-5);
    }

    #[test]
    fn refract_reports_total_internal_reflection() {
        // Grazing exit from a dense medium: discriminant goes negative.
        let n = Vec3A::new(0.0, 1.0, 0.0);
        let v = Vec3A::new(1.0, -0.1, 0.0);
        assert!(refract(v, n, 2.3).is_none());
    }

    #[test]
    fn diffuse_always_scatters_with_its_albedo() {
        let material = Material::diffuse(Color::new(0.8, 0.2, 0.1));
        let rec = record(&material);
        let r_in = Ray::new(Vec3A::new(0.0, 1.0, 0.0), Vec3A::new(0.0, -1.0, 0.0));
        let mut rng = rng();

        for _ in 0..50 {
            let s = material.scatter(&r_in, &rec, &mut rng).expect("diffuse never absorbs");
            assert_eq!(s.attenuation, Color::new(0.8, 0.2, 0.1));
            assert_eq!(s.ray.origin, rec.p);
        }
    }

    #[test]
    fn perfect_mirror_reflects_exactly() {
        let material = Material::specular(Color::ONE, 0.0);
        let rec = record(&material);
        let r_in = Ray::new(Vec3A::new(-1.0, 1.0, 0.0), Vec3A::new(1.0, -1.0, 0.0));
        let mut rng = rng();

        let s = material.scatter(&r_in, &rec, &mut rng).expect("mirror scatters");
        let expected = reflect(r_in.direction.normalize(), rec.normal);
        assert!((s.ray.direction - expected).length() < 1e-6);
    }

    #[test]
    fn fuzzy_mirror_absorbs_below_surface_directions() {
        // Grazing incidence with maximal fuzz: some perturbations dip
        // below the surface and must be absorbed.
        let material = Material::specular(Color::ONE, 1.0);
        let rec = record(&material);
        let r_in = Ray::new(Vec3A::new(-1.0, 0.01, 0.0), Vec3A::new(1.0, -0.01, 0.0));
        let mut rng = rng();

        let mut absorbed = 0;
        for _ in 0..200 {
            match material.scatter(&r_in, &rec, &mut rng) {
                Some(s) => assert!(s.ray.direction.dot(rec.normal) > 0.0),
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0, "grazing fuzzy reflection never got absorbed");
    }

    #[test]
    fn specular_constructor_clamps_fuzz() {
        match Material::specular(Color::ONE, 5.0) {
            Material::Specular { fuzz, .. } => assert_eq!(fuzz, 1.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn dielectric_never_absorbs_and_never_tints() {
        let material = Material::dielectric(1.5);
        let rec = record(&material);
        let mut rng = rng();

        for i in 0..100 {
            // Sweep incidence angles on both sides of the surface.
            let x = (i as f32 / 100.0) * 2.0 - 1.0;
            let dir = Vec3A::new(x, -1.0, 0.0);
            let r_in = Ray::new(Vec3A::new(0.0, 1.0, 0.0), dir);
            let s = material.scatter(&r_in, &rec, &mut rng).expect("dielectric never absorbs");
            assert_eq!(s.attenuation, Color::ONE);
        }
    }

    #[test]
    fn dielectric_reflects_on_total_internal_reflection() {
        // Exiting a dense medium at grazing angle: only reflection is
        // geometrically possible, so the outcome is deterministic.
        let material = Material::dielectric(2.3);
        let rec = record(&material);
        let r_in = Ray::new(Vec3A::new(0.0, -1.0, 0.0), Vec3A::new(1.0, 0.1, 0.0));
        let mut rng = rng();

        let s = material.scatter(&r_in, &rec, &mut rng).expect("dielectric never absorbs");
        let expected = reflect(r_in.direction, rec.normal);
        assert!((s.ray.direction - expected).length() < 1e-6);
    }
}
