//! Surface material for Phong shading.
//!
//! A material is a base color plus the weights of the three Phong terms.
//! All fields are plain values, so materials copy freely between spheres.

use crate::color::Color;

/// Phong reflectance parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Surface color, filtered by the light's intensity.
    pub color: Color,
    /// Fraction of light reflected regardless of geometry.
    pub ambient: f64,
    /// Weight of the matte (Lambertian) term.
    pub diffuse: f64,
    /// Weight of the highlight term.
    pub specular: f64,
    /// Highlight exponent; larger values give smaller, sharper highlights.
    pub shininess: f64,
}

impl Material {
    /// Default material with a different base color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl Default for Material {
    /// White, ambient 0.1, diffuse 0.9, specular 0.9, shininess 200.
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            ambient: 0.1,
            diffuse: 0.9,
            specular: 0.9,
            shininess: 200.0,
        }
    }
}
