//! Error type shared by the kernel and its collaborators.

use thiserror::Error;

/// Failures surfaced by matrix algebra, geometry and image output.
#[derive(Debug, Error)]
pub enum TraceError {
    /// Inverse requested for a matrix whose determinant is zero.
    #[error("matrix is not invertible (determinant {determinant})")]
    NonInvertible {
        /// Determinant that made the inversion impossible.
        determinant: f64,
    },

    /// A zero-length tuple cannot be turned into a unit vector.
    #[error("cannot normalize a zero-length vector")]
    ZeroMagnitude,

    /// Pixel coordinates fell outside the canvas.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    PixelOutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Canvas width in pixels.
        width: usize,
        /// Canvas height in pixels.
        height: usize,
    },

    /// Output path has an extension no writer understands.
    #[error("unsupported output format '{0}', expected .ppm or .png")]
    UnsupportedFormat(String),

    /// Underlying file system failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// PNG encoding failure.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TraceError>;
