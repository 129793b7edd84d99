//! Scene composition: spheres plus one light.
//!
//! Intersection is a linear scan over every object; there is no acceleration
//! structure.

use crate::color::Color;
use crate::error::Result;
use crate::intersection::{Computations, Intersection, hit, intersections};
use crate::light::{PointLight, lighting};
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::transform::scaling;
use crate::tuple::Tuple;

/// Spheres lit by a single point light.
#[derive(Debug)]
pub struct World {
    objects: Vec<Sphere>,
    light: PointLight,
}

impl World {
    /// Empty world lit by `light`.
    pub fn new(light: PointLight) -> Self {
        Self {
            objects: Vec::new(),
            light,
        }
    }

    /// Two concentric spheres under a white light at `(-10, 10, -10)`.
    ///
    /// The outer sphere is the unit sphere with a green-tinted matte material;
    /// the inner one is scaled by half and keeps the default material.
    pub fn default_world() -> Result<Self> {
        let light = PointLight::new(Tuple::point(-10.0, 10.0, -10.0), Color::WHITE);

        let outer = Sphere::new().with_material(Material {
            color: Color::new(0.8, 1.0, 0.6),
            diffuse: 0.7,
            specular: 0.2,
            ..Material::default()
        });
        let inner = Sphere::new().with_transform(scaling(0.5, 0.5, 0.5))?;

        let mut world = Self::new(light);
        world.add_object(outer);
        world.add_object(inner);
        Ok(world)
    }

    /// Add a sphere to the scene.
    pub fn add_object(&mut self, sphere: Sphere) {
        self.objects.push(sphere);
    }

    /// Spheres in insertion order.
    pub fn objects(&self) -> &[Sphere] {
        &self.objects
    }

    /// Mutable access for adjusting materials or transforms in place.
    pub fn objects_mut(&mut self) -> &mut [Sphere] {
        &mut self.objects
    }

    /// The scene's light.
    pub fn light(&self) -> &PointLight {
        &self.light
    }

    /// Replace the scene's light.
    pub fn set_light(&mut self, light: PointLight) {
        self.light = light;
    }

    /// Every intersection of `ray` with every sphere, sorted by `t`.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        intersections(self.objects.iter().flat_map(|object| object.intersect(ray)))
    }

    /// Phong color at a prepared hit, lit by this world's light.
    pub fn shade_hit(&self, comps: &Computations<'_>) -> Result<Color> {
        lighting(
            &comps.object.material,
            &self.light,
            comps.point,
            comps.eye_vector,
            comps.normal_vector,
        )
    }

    /// Color seen along `ray`; black when nothing is hit.
    pub fn color_at(&self, ray: &Ray) -> Result<Color> {
        let xs = self.intersect(ray);
        match hit(&xs) {
            Some(nearest) => {
                let comps = nearest.prepare_computations(ray)?;
                self.shade_hit(&comps)
            }
            None => Ok(Color::BLACK),
        }
    }
}
