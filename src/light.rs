//! Point light and the Phong reflection model.

use crate::color::Color;
use crate::error::Result;
use crate::material::Material;
use crate::tuple::Tuple;

/// Light source with no size, radiating equally in every direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    /// Location of the light (a point).
    pub position: Tuple,
    /// Color and brightness of the emitted light.
    pub intensity: Color,
}

impl PointLight {
    /// Create a point light.
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self { position, intensity }
    }
}

/// Shade `point` on a surface with the Phong model.
///
/// `eye_vector` and `normal_vector` must be unit vectors. The result is the sum
/// of ambient, diffuse and specular contributions and is not clamped.
///
/// # Errors
///
/// [`TraceError::ZeroMagnitude`](crate::TraceError::ZeroMagnitude) if the light
/// sits exactly on `point`.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: Tuple,
    eye_vector: Tuple,
    normal_vector: Tuple,
) -> Result<Color> {
    let effective_color = material.color * light.intensity;
    let light_vector = (light.position - point).normalize()?;
    let ambient = effective_color * material.ambient;

    // Negative means the light is behind the surface.
    let light_dot_normal = light_vector.dot(normal_vector);
    if light_dot_normal < 0.0 {
        return Ok(ambient);
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;

    let reflect_vector = (-light_vector).reflect(normal_vector);
    let reflect_dot_eye = reflect_vector.dot(eye_vector);
    let specular = if reflect_dot_eye <= 0.0 {
        Color::BLACK
    } else {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    Ok(ambient + diffuse + specular)
}
