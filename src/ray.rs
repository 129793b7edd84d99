//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use crate::matrix::Matrix;
use crate::tuple::Tuple;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray (a point, `w = 1`).
    ///
    /// The camera position for primary rays.
    pub origin: Tuple,

    /// Direction of the ray (a vector, `w = 0`).
    ///
    /// Not required to be normalized. Rays carried into object space by a
    /// scaling transform stop being unit length, and intersection `t` values
    /// stay valid in world space because of it.
    pub direction: Tuple,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Map both origin and direction through `m`.
    pub fn transform(&self, m: &Matrix) -> Self {
        Self {
            origin: m * self.origin,
            direction: m * self.direction,
        }
    }
}
