//! Ray-sphere intersection records.
//!
//! An [`Intersection`] borrows the sphere it hit, so it can never outlive the
//! world it was computed from. [`Computations`] holds everything shading needs
//! about the chosen hit.

use crate::approx_eq;
use crate::error::Result;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::tuple::Tuple;

/// Parametric distance `t` at which a ray meets a sphere.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// Distance along the ray, in units of the ray's direction.
    pub t: f64,
    /// Sphere that was hit.
    pub object: &'a Sphere,
}

impl<'a> Intersection<'a> {
    /// Record a hit on `object` at `t`.
    pub fn new(t: f64, object: &'a Sphere) -> Self {
        Self { t, object }
    }

    /// Precompute the shading inputs for this hit along `ray`.
    ///
    /// The normal is flipped to face the eye when the ray starts inside the
    /// object, and `inside` records that it happened.
    ///
    /// # Errors
    ///
    /// Fails only if no surface normal exists at the hit point.
    pub fn prepare_computations(&self, ray: &Ray) -> Result<Computations<'a>> {
        let point = ray.position(self.t);
        let eye_vector = -ray.direction;
        let outward_normal = self.object.normal_at(point)?;

        let inside = eye_vector.dot(outward_normal) < 0.0;
        let normal_vector = if inside { -outward_normal } else { outward_normal };

        Ok(Computations {
            t: self.t,
            object: self.object,
            point,
            eye_vector,
            normal_vector,
            inside,
        })
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.t, other.t) && self.object.id() == other.object.id()
    }
}

/// Collect intersections sorted by ascending `t`.
pub fn intersections<'a>(xs: impl IntoIterator<Item = Intersection<'a>>) -> Vec<Intersection<'a>> {
    let mut xs: Vec<_> = xs.into_iter().collect();
    xs.sort_by(|a, b| a.t.total_cmp(&b.t));
    xs
}

/// Nearest intersection with `t >= 0`, if any.
///
/// Order of `xs` does not matter; on equal `t` the earlier entry wins.
pub fn hit<'a>(xs: &[Intersection<'a>]) -> Option<Intersection<'a>> {
    xs.iter()
        .filter(|i| i.t >= 0.0)
        .min_by(|a, b| a.t.total_cmp(&b.t))
        .copied()
}

/// Shading inputs derived from a hit.
#[derive(Debug, Clone, Copy)]
pub struct Computations<'a> {
    /// Distance along the ray.
    pub t: f64,
    /// Sphere that was hit.
    pub object: &'a Sphere,
    /// World-space hit point.
    pub point: Tuple,
    /// Negated ray direction, pointing back toward the ray origin.
    ///
    /// Unit length only when the ray direction is; camera rays always are.
    pub eye_vector: Tuple,
    /// Unit surface normal, facing the eye.
    pub normal_vector: Tuple,
    /// True if the ray started inside the object.
    pub inside: bool,
}
