//! Homogeneous 4-component tuples.
//!
//! A tuple with `w = 1` is a point, one with `w = 0` is a direction. The usual
//! affine rules fall out of plain component arithmetic: point - point gives a
//! vector, point + vector gives a point, and scaling a vector keeps `w = 0`.

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use glam::DVec4;

use crate::approx_eq;
use crate::error::{Result, TraceError};

/// Point or direction in homogeneous coordinates, backed by a `DVec4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tuple(DVec4);

impl Tuple {
    /// Create a tuple from raw components.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(DVec4::new(x, y, z, w))
    }

    /// Create a point (`w = 1`).
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a direction vector (`w = 0`).
    pub const fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// X component.
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Y component.
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Z component.
    pub fn z(&self) -> f64 {
        self.0.z
    }

    /// W component (1 for points, 0 for vectors).
    pub fn w(&self) -> f64 {
        self.0.w
    }

    /// Copy of this tuple with `w` replaced.
    pub fn with_w(self, w: f64) -> Self {
        Self(self.0.with_w(w))
    }

    /// Whether `w` is 1 within [`EPSILON`](crate::EPSILON).
    pub fn is_point(&self) -> bool {
        approx_eq(self.0.w, 1.0)
    }

    /// Whether `w` is 0 within [`EPSILON`](crate::EPSILON).
    pub fn is_vector(&self) -> bool {
        approx_eq(self.0.w, 0.0)
    }

    /// Euclidean length over all four components.
    pub fn magnitude(&self) -> f64 {
        self.0.length()
    }

    /// Unit-length copy of this tuple.
    ///
    /// # Errors
    ///
    /// [`TraceError::ZeroMagnitude`] when the tuple has zero length.
    pub fn normalize(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(TraceError::ZeroMagnitude);
        }
        Ok(Self(self.0 / magnitude))
    }

    /// Dot product over all four components.
    pub fn dot(&self, other: Self) -> f64 {
        self.0.dot(other.0)
    }

    /// Cross product of the xyz parts; always returns a vector.
    pub fn cross(&self, other: Self) -> Self {
        let c = self.0.truncate().cross(other.0.truncate());
        Self::vector(c.x, c.y, c.z)
    }

    /// Reflect this vector about `normal`.
    ///
    /// Computes `v - n * 2 * dot(v, n)`.
    pub fn reflect(&self, normal: Self) -> Self {
        *self - normal * 2.0 * self.dot(normal)
    }

    /// Components as `[x, y, z, w]`.
    pub fn to_array(&self) -> [f64; 4] {
        self.0.to_array()
    }
}

impl From<[f64; 4]> for Tuple {
    fn from(components: [f64; 4]) -> Self {
        Self(DVec4::from_array(components))
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        (0..4).all(|i| approx_eq(self[i], other[i]))
    }
}

impl Index<usize> for Tuple {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl Add for Tuple {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Tuple {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Tuple {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul<Tuple> for f64 {
    type Output = Tuple;

    fn mul(self, rhs: Tuple) -> Tuple {
        rhs * self
    }
}

impl Div<f64> for Tuple {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::EPSILON;

    #[test]
    fn point_and_vector_set_w() {
        let p = Tuple::point(4.3, -4.2, 3.1);
        assert!(p.is_point());
        assert!(!p.is_vector());

        let v = Tuple::vector(4.3, -4.2, 3.1);
        assert!(v.is_vector());
        assert_eq!(v, Tuple::new(4.3, -4.2, 3.1, 0.0));
    }

    #[test]
    fn affine_arithmetic_preserves_kind() {
        let p1 = Tuple::point(3.0, 2.0, 1.0);
        let p2 = Tuple::point(5.0, 6.0, 7.0);
        let v = Tuple::vector(5.0, 6.0, 7.0);

        assert_eq!(p1 - p2, Tuple::vector(-2.0, -4.0, -6.0));
        assert_eq!(p1 - v, Tuple::point(-2.0, -4.0, -6.0));
        assert_eq!(p1 + v, Tuple::point(8.0, 8.0, 8.0));
        assert_eq!(v - v, Tuple::vector(0.0, 0.0, 0.0));
        assert!((v * 3.5).is_vector());
        assert!((0.5 * v).is_vector());
    }

    #[test]
    fn negate_scale_divide() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-a, Tuple::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(a * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(a * 0.5, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(a / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn equality_uses_epsilon() {
        let a = Tuple::point(1.0, 2.0, 3.0);
        assert_eq!(a, Tuple::point(1.0 + EPSILON / 2.0, 2.0, 3.0));
        assert_ne!(a, Tuple::point(1.0 + EPSILON * 2.0, 2.0, 3.0));
    }

    #[test]
    fn magnitude() {
        assert_abs_diff_eq!(Tuple::vector(1.0, 0.0, 0.0).magnitude(), 1.0);
        assert_abs_diff_eq!(Tuple::vector(1.0, 2.0, 3.0).magnitude(), 14f64.sqrt());
        assert_abs_diff_eq!(Tuple::vector(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt());
    }

    #[test]
    fn normalize() {
        assert_eq!(
            Tuple::vector(4.0, 0.0, 0.0).normalize().unwrap(),
            Tuple::vector(1.0, 0.0, 0.0)
        );
        let n = Tuple::vector(1.0, 2.0, 3.0).normalize().unwrap();
        assert_eq!(n, Tuple::vector(0.26726, 0.53452, 0.80178));
        assert_abs_diff_eq!(n.magnitude(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn normalize_zero_fails() {
        let err = Tuple::vector(0.0, 0.0, 0.0).normalize().unwrap_err();
        assert!(matches!(err, TraceError::ZeroMagnitude));
    }

    #[test]
    fn dot_and_cross() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_abs_diff_eq!(a.dot(b), 20.0);
        assert_eq!(a.cross(b), Tuple::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(a), Tuple::vector(1.0, -2.0, 1.0));
    }

    #[test]
    fn reflect() {
        let v = Tuple::vector(1.0, -1.0, 0.0);
        let n = Tuple::vector(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(n), Tuple::vector(1.0, 1.0, 0.0));

        let half = 2f64.sqrt() / 2.0;
        let v = Tuple::vector(0.0, -1.0, 0.0);
        let n = Tuple::vector(half, half, 0.0);
        assert_eq!(v.reflect(n), Tuple::vector(1.0, 0.0, 0.0));
    }

    #[test]
    fn indexed_access() {
        let t = Tuple::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!([t[0], t[1], t[2], t[3]], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Tuple::from(t.to_array()), t);
    }
}
