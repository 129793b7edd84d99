//! Sphere primitive for ray tracing.
//!
//! Every sphere is the unit sphere at the origin of its own object space. Its
//! transform places it in the world; rays are carried into object space by
//! the inverse transform, so the intersection itself only ever solves the
//! unit-sphere quadratic.

use std::sync::atomic::{AtomicU64, Ordering};

use log::trace;
use smallvec::{SmallVec, smallvec};

use crate::error::Result;
use crate::intersection::Intersection;
use crate::material::Material;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::tuple::Tuple;

static NEXT_SPHERE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity of a sphere, assigned once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SphereId(u64);

impl SphereId {
    fn next() -> Self {
        Self(NEXT_SPHERE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Unit sphere with an object-to-world transform and a material.
#[derive(Debug)]
pub struct Sphere {
    id: SphereId,
    transform: Matrix,
    /// Cached world-to-object transform.
    inverse: Matrix,
    /// Cached transpose of `inverse`, mapping object normals to world normals.
    normal_transform: Matrix,
    /// Material used when shading hits on this sphere.
    pub material: Material,
}

impl Sphere {
    /// Unit sphere with identity transform and default material.
    pub fn new() -> Self {
        Self {
            id: SphereId::next(),
            transform: Matrix::identity(),
            inverse: Matrix::identity(),
            normal_transform: Matrix::identity(),
            material: Material::default(),
        }
    }

    /// Builder form of [`Sphere::set_transform`].
    pub fn with_transform(mut self, transform: Matrix) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Builder form of assigning [`Sphere::material`].
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Identity key of this sphere.
    pub fn id(&self) -> SphereId {
        self.id
    }

    /// Object-to-world transform.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Replace the transform.
    ///
    /// # Errors
    ///
    /// [`TraceError::NonInvertible`](crate::TraceError::NonInvertible) for a
    /// degenerate transform; the sphere keeps its previous transform.
    pub fn set_transform(&mut self, transform: Matrix) -> Result<()> {
        let inverse = transform.inverse()?;
        self.normal_transform = inverse.transpose();
        self.inverse = inverse;
        self.transform = transform;
        Ok(())
    }

    /// Intersect `ray` (in world space) with this sphere.
    ///
    /// Returns nothing on a miss and exactly two intersections otherwise,
    /// smaller `t` first. A tangent ray yields the same `t` twice.
    pub fn intersect(&self, ray: &Ray) -> SmallVec<[Intersection<'_>; 2]> {
        let local = ray.transform(&self.inverse);

        // The sphere sits at the object-space origin, so the origin point
        // minus the center is just the origin with w dropped.
        let sphere_to_ray = local.origin - Tuple::point(0.0, 0.0, 0.0);
        let a = local.direction.dot(local.direction);
        if a == 0.0 {
            trace!("sphere {:?}: skipping ray with zero-length direction", self.id);
            return SmallVec::new();
        }
        let b = 2.0 * local.direction.dot(sphere_to_ray);
        let c = sphere_to_ray.dot(sphere_to_ray) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return SmallVec::new();
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);
        smallvec![Intersection::new(t1, self), Intersection::new(t2, self)]
    }

    /// Unit surface normal at `world_point`, in world space.
    ///
    /// # Errors
    ///
    /// [`TraceError::ZeroMagnitude`](crate::TraceError::ZeroMagnitude) when the
    /// point maps onto the sphere's center, where no normal exists.
    pub fn normal_at(&self, world_point: Tuple) -> Result<Tuple> {
        let object_point = &self.inverse * world_point;
        let object_normal = object_point - Tuple::point(0.0, 0.0, 0.0);
        let world_normal = (&self.normal_transform * object_normal).with_w(0.0);
        world_normal.normalize()
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TraceError;
    use crate::color::Color;
    use crate::transform::{rotation_z, scaling, translation};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn ts(xs: &[Intersection<'_>]) -> Vec<f64> {
        xs.iter().map(|i| i.t).collect()
    }

    #[test]
    fn ray_through_center_hits_twice() {
        let r = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        let s = Sphere::new();
        let xs = s.intersect(&r);
        assert_eq!(ts(&xs), vec![4.0, 6.0]);
        assert!(xs.iter().all(|i| i.object.id() == s.id()));
    }

    #[test]
    fn tangent_ray_hits_twice_at_same_t() {
        let r = Ray::new(Tuple::point(0.0, 1.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        let s = Sphere::new();
        let xs = s.intersect(&r);
        assert_eq!(ts(&xs), vec![5.0, 5.0]);
    }

    #[test]
    fn ray_misses() {
        let r = Ray::new(Tuple::point(0.0, 2.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert!(Sphere::new().intersect(&r).is_empty());
    }

    #[test]
    fn ray_from_inside_and_behind() {
        let s = Sphere::new();
        let inside = Ray::new(Tuple::point(0.0, 0.0, 0.0), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(ts(&s.intersect(&inside)), vec![-1.0, 1.0]);

        let behind = Ray::new(Tuple::point(0.0, 0.0, 5.0), Tuple::vector(0.0, 0.0, 1.0));
        assert_eq!(ts(&s.intersect(&behind)), vec![-6.0, -4.0]);
    }

    #[test]
    fn zero_direction_is_a_miss() {
        let r = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 0.0));
        assert!(Sphere::new().intersect(&r).is_empty());
    }

    #[test]
    fn transformed_spheres() {
        let r = Ray::new(Tuple::point(0.0, 0.0, -5.0), Tuple::vector(0.0, 0.0, 1.0));

        let scaled = Sphere::new().with_transform(scaling(2.0, 2.0, 2.0)).unwrap();
        assert_eq!(ts(&scaled.intersect(&r)), vec![3.0, 7.0]);

        let moved = Sphere::new().with_transform(translation(5.0, 0.0, 0.0)).unwrap();
        assert!(moved.intersect(&r).is_empty());
    }

    #[test]
    fn degenerate_transform_is_rejected() {
        let mut s = Sphere::new();
        s.set_transform(translation(2.0, 3.0, 4.0)).unwrap();
        let err = s.set_transform(scaling(0.0, 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, TraceError::NonInvertible { .. }));
        assert_eq!(*s.transform(), translation(2.0, 3.0, 4.0));
    }

    #[test]
    fn ids_are_distinct() {
        let a = Sphere::new();
        let b = Sphere::default();
        assert_ne!(a.id(), b.id());
        assert_eq!(*a.transform(), Matrix::identity());
    }

    #[test]
    fn material_can_be_assigned() {
        let mut s = Sphere::new();
        s.material.ambient = 1.0;
        assert_abs_diff_eq!(s.material.ambient, 1.0);

        let m = Material::with_color(Color::new(0.2, 0.3, 0.4));
        assert_eq!(Sphere::new().with_material(m).material, m);
    }

    #[test]
    fn normals_on_axes_and_diagonal() {
        let s = Sphere::new();
        assert_eq!(s.normal_at(Tuple::point(1.0, 0.0, 0.0)).unwrap(), Tuple::vector(1.0, 0.0, 0.0));
        assert_eq!(s.normal_at(Tuple::point(0.0, 1.0, 0.0)).unwrap(), Tuple::vector(0.0, 1.0, 0.0));
        assert_eq!(s.normal_at(Tuple::point(0.0, 0.0, 1.0)).unwrap(), Tuple::vector(0.0, 0.0, 1.0));

        let k = 3f64.sqrt() / 3.0;
        let n = s.normal_at(Tuple::point(k, k, k)).unwrap();
        assert_eq!(n, Tuple::vector(k, k, k));
        assert_eq!(n, n.normalize().unwrap());
    }

    #[test]
    fn normal_on_translated_sphere() {
        let s = Sphere::new().with_transform(translation(0.0, 1.0, 0.0)).unwrap();
        let n = s.normal_at(Tuple::point(0.0, 1.70711, -0.70711)).unwrap();
        assert_eq!(n, Tuple::vector(0.0, 0.70711, -0.70711));
    }

    #[test]
    fn normal_on_scaled_and_rotated_sphere() {
        let s = Sphere::new()
            .with_transform(scaling(1.0, 0.5, 1.0) * rotation_z(PI / 5.0))
            .unwrap();
        let half = 2f64.sqrt() / 2.0;
        let n = s.normal_at(Tuple::point(0.0, half, -half)).unwrap();
        assert_eq!(n, Tuple::vector(0.0, 0.97014, -0.24254));
        assert!(n.is_vector());
    }

    #[test]
    fn normal_at_center_fails() {
        let s = Sphere::new();
        assert!(s.normal_at(Tuple::point(0.0, 0.0, 0.0)).is_err());
    }
}
