//! Affine transform builders.
//!
//! Every builder starts from the identity and overwrites a few cells. The
//! fluent methods on [`Matrix`] left-multiply, so a chain reads in the order
//! the transforms are applied:
//!
//! ```
//! use phongtracer::{Matrix, transform};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let chained = Matrix::identity()
//!     .rotate_x(FRAC_PI_2)
//!     .scale(5.0, 5.0, 5.0)
//!     .translate(10.0, 5.0, 7.0);
//! let nested = transform::translation(10.0, 5.0, 7.0)
//!     * transform::scaling(5.0, 5.0, 5.0)
//!     * transform::rotation_x(FRAC_PI_2);
//! assert_eq!(chained, nested);
//! ```

use crate::error::Result;
use crate::matrix::Matrix;
use crate::tuple::Tuple;

/// Move points by `(x, y, z)`; vectors are unaffected.
pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity();
    m[(0, 3)] = x;
    m[(1, 3)] = y;
    m[(2, 3)] = z;
    m
}

/// Scale each axis independently. Negative factors reflect.
pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity();
    m[(0, 0)] = x;
    m[(1, 1)] = y;
    m[(2, 2)] = z;
    m
}

/// Right-handed rotation about the x axis.
pub fn rotation_x(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    let mut m = Matrix::identity();
    m[(1, 1)] = cos;
    m[(1, 2)] = -sin;
    m[(2, 1)] = sin;
    m[(2, 2)] = cos;
    m
}

/// Right-handed rotation about the y axis.
pub fn rotation_y(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    let mut m = Matrix::identity();
    m[(0, 0)] = cos;
    m[(0, 2)] = sin;
    m[(2, 0)] = -sin;
    m[(2, 2)] = cos;
    m
}

/// Right-handed rotation about the z axis.
pub fn rotation_z(radians: f64) -> Matrix {
    let (sin, cos) = radians.sin_cos();
    let mut m = Matrix::identity();
    m[(0, 0)] = cos;
    m[(0, 1)] = -sin;
    m[(1, 0)] = sin;
    m[(1, 1)] = cos;
    m
}

/// Shear: each component moves in proportion to the other two.
///
/// `xy` is how much x moves per unit of y, and so on.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    let mut m = Matrix::identity();
    m[(0, 1)] = xy;
    m[(0, 2)] = xz;
    m[(1, 0)] = yx;
    m[(1, 2)] = yz;
    m[(2, 0)] = zx;
    m[(2, 1)] = zy;
    m
}

/// World-to-camera transform for an eye at `from` looking at `to`.
///
/// `up` only needs to be roughly up; it is re-orthogonalised against the
/// viewing direction.
///
/// # Errors
///
/// [`TraceError::ZeroMagnitude`](crate::TraceError::ZeroMagnitude) when
/// `from == to` or `up` is zero.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Result<Matrix> {
    let forward = (to - from).normalize()?;
    let left = forward.cross(up.normalize()?);
    let true_up = left.cross(forward);

    let orientation = Matrix::from_rows([
        [left.x(), left.y(), left.z(), 0.0],
        [true_up.x(), true_up.y(), true_up.z(), 0.0],
        [-forward.x(), -forward.y(), -forward.z(), 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    Ok(orientation * translation(-from.x(), -from.y(), -from.z()))
}

impl Matrix {
    /// Apply a translation after `self`.
    pub fn translate(self, x: f64, y: f64, z: f64) -> Matrix {
        translation(x, y, z) * self
    }

    /// Apply a scaling after `self`.
    pub fn scale(self, x: f64, y: f64, z: f64) -> Matrix {
        scaling(x, y, z) * self
    }

    /// Apply an x rotation after `self`.
    pub fn rotate_x(self, radians: f64) -> Matrix {
        rotation_x(radians) * self
    }

    /// Apply a y rotation after `self`.
    pub fn rotate_y(self, radians: f64) -> Matrix {
        rotation_y(radians) * self
    }

    /// Apply a z rotation after `self`.
    pub fn rotate_z(self, radians: f64) -> Matrix {
        rotation_z(radians) * self
    }

    /// Apply a shear after `self`.
    pub fn shear(self, xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
        shearing(xy, xz, yx, yz, zx, zy) * self
    }
}
