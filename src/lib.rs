//! Glint path tracer
//!
//! A stochastic path tracer for sphere scenes: jittered multi-sample
//! camera rays, probabilistic material scattering (diffuse, specular,
//! dielectric), and plain-PPM or PNG output.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod interval;
pub mod material;
pub mod output;
pub mod random;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod sphere;
