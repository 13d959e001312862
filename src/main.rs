use std::io::{self, Write};

use clap::Parser;
use glam::Vec3A;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

mod cli;
mod logger;

use cli::Args;
use glint::camera::Camera;
use glint::material::Material;
use glint::output::{save_image_as_png, save_image_as_ppm, write_ppm};
use glint::random;
use glint::renderer::{render, RenderConfig};
use glint::scene::{Primitive, Scene};
use glint::sphere::Sphere;
use logger::init_logger;

/// Build the demo scene: a glass sphere with a small matte sphere inside
/// it, a matte ground sphere, and two metal spheres.
fn create_scene(rng: &mut impl Rng) -> Scene {
    let mut scene = Scene::new();

    scene.add(Primitive::Sphere(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.0),
        0.5,
        Material::dielectric(2.3),
    )));
    scene.add(Primitive::Sphere(Sphere::new(
        Vec3A::new(0.0, 0.0, -1.0),
        0.1,
        Material::diffuse(random::random_color(rng)),
    )));
    scene.add(Primitive::Sphere(Sphere::new(
        Vec3A::new(0.0, -100.5, -1.0),
        100.0,
        Material::diffuse(random::random_color(rng)),
    )));
    scene.add(Primitive::Sphere(Sphere::new(
        Vec3A::new(1.0, 0.0, -2.0),
        0.5,
        Material::specular(random::random_color(rng), rng.random()),
    )));
    scene.add(Primitive::Sphere(Sphere::new(
        Vec3A::new(-1.0, 0.0, -1.0),
        0.5,
        Material::specular(random::random_color(rng), 0.0),
    )));

    scene
}

/// Create the camera for the demo scene: eye at the origin looking down
/// the -z axis with a 90° vertical field of view.
fn create_camera(width: u32, height: u32) -> Camera {
    Camera::new(
        90.0,
        width as f32 / height as f32,
        Vec3A::ZERO,
        Vec3A::new(0.0, 0.0, -1.0),
    )
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    info!("Glint - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, samples per pixel: {}",
        args.width, args.height, args.samples_per_pixel
    );

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("Render seed: {}", seed);

    // Stream 0 of the render seed drives scene generation; the renderer
    // derives per-pixel streams starting at 1.
    let mut scene_rng = ChaCha20Rng::seed_from_u64(seed);
    let scene = create_scene(&mut scene_rng);
    let camera = create_camera(args.width, args.height);

    let config = RenderConfig {
        width: args.width,
        height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        seed,
    };
    let image = render(&scene, &camera, &config);

    // Route output: stdout stream, or a file picked by extension.
    if args.output == "-" {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        if let Err(e) = write_ppm(&image, &mut lock).and_then(|_| lock.flush()) {
            log::error!("Failed to write image to stdout: {}", e);
            std::process::exit(1);
        }
    } else if args.output.ends_with(".ppm") {
        save_image_as_ppm(&image, &args.output);
    } else if args.output.ends_with(".png") {
        save_image_as_png(&image, &args.output);
    } else {
        log::error!(
            "Unsupported file extension '{}'. Only .ppm and .png formats are supported.",
            std::path::Path::new(&args.output)
                .extension()
                .unwrap_or_default()
                .to_string_lossy()
        );
        std::process::exit(1);
    }
}
