use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use clap::Parser;
use log::{debug, error, info};

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_canvas;
use phongtracer::transform::{rotation_x, rotation_y, scaling, translation, view_transform};
use phongtracer::{Camera, Color, Material, PointLight, Result, Sphere, Tuple, World};

/// Three spheres on a floor between two walls, lit from the upper left
fn create_scene() -> Result<World> {
    let mut world = World::new(PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Color::WHITE));

    // Floor and walls are spheres flattened to near-planes
    let wall_material = Material {
        color: Color::new(1.0, 0.9, 0.9),
        specular: 0.0,
        ..Material::default()
    };
    let flat = scaling(10.0, 0.01, 10.0);

    world.add_object(Sphere::new().with_transform(flat.clone())?.with_material(wall_material));
    world.add_object(
        Sphere::new()
            .with_transform(
                translation(0.0, 0.0, 5.0) * rotation_y(-FRAC_PI_4) * rotation_x(FRAC_PI_2) * &flat,
            )?
            .with_material(wall_material),
    );
    world.add_object(
        Sphere::new()
            .with_transform(
                translation(0.0, 0.0, 5.0) * rotation_y(FRAC_PI_4) * rotation_x(FRAC_PI_2) * &flat,
            )?
            .with_material(wall_material),
    );

    let middle = Material {
        color: Color::new(0.1, 1.0, 0.5),
        diffuse: 0.7,
        specular: 0.3,
        ..Material::default()
    };
    world.add_object(
        Sphere::new()
            .with_transform(translation(-0.5, 1.0, 0.5))?
            .with_material(middle),
    );

    let right = Material {
        color: Color::new(0.5, 1.0, 0.1),
        ..middle
    };
    world.add_object(
        Sphere::new()
            .with_transform(translation(1.5, 0.5, -0.5) * scaling(0.5, 0.5, 0.5))?
            .with_material(right),
    );

    let left = Material {
        color: Color::new(1.0, 0.8, 0.1),
        ..middle
    };
    world.add_object(
        Sphere::new()
            .with_transform(translation(-1.5, 0.33, -0.75) * scaling(0.33, 0.33, 0.33))?
            .with_material(left),
    );

    debug!("Scene built with {} spheres", world.objects().len());
    Ok(world)
}

/// Create camera looking into the room from slightly above the spheres
fn create_camera(width: u32, height: u32, fov_degrees: f64) -> Result<Camera> {
    let view = view_transform(
        Tuple::point(0.0, 1.5, -5.0),
        Tuple::point(0.0, 1.0, 0.0),
        Tuple::vector(0.0, 1.0, 0.0),
    )?;
    Camera::new(width as usize, height as usize, fov_degrees.to_radians()).with_transform(view)
}

fn run(args: &Args) -> Result<()> {
    let world = create_scene()?;
    let camera = create_camera(args.width, args.height, args.fov)?;
    let canvas = camera.render(&world)?;
    save_canvas(&canvas, &args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("PhongTracer - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}, field of view: {} degrees", args.width, args.height, args.fov);

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            error!("Failed to configure {} render threads: {}", threads, e);
            std::process::exit(1);
        }
    }

    if let Err(e) = run(&args) {
        error!("Rendering failed: {}", e);
        std::process::exit(1);
    }
}
