//! PhongTracer ray tracer
//!
//! Casts one ray per pixel through a scene of affinely transformed unit spheres
//! lit by a single point light, and shades every hit with the Phong reflection
//! model. Rendering runs on the CPU with one rayon task per image row.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod canvas;
pub mod color;
pub mod error;
pub mod intersection;
pub mod light;
pub mod material;
pub mod matrix;
pub mod ray;
pub mod sphere;
pub mod transform;
pub mod tuple;
pub mod world;

pub use camera::Camera;
pub use canvas::Canvas;
pub use color::Color;
pub use error::{Result, TraceError};
pub use intersection::{Computations, Intersection};
pub use light::PointLight;
pub use material::Material;
pub use matrix::Matrix;
pub use ray::Ray;
pub use sphere::Sphere;
pub use tuple::Tuple;
pub use world::World;

/// Tolerance for every floating-point equality check in the crate.
///
/// Tuples, colors and matrices compare equal when each component differs by
/// less than this value.
pub const EPSILON: f64 = 1e-5;

/// Returns true when `a` and `b` are closer than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
