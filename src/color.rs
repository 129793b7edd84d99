//! Linear RGB colors.

use std::ops::{Add, Mul, Sub};

use glam::DVec3;

use crate::approx_eq;

/// Unclamped linear RGB color.
///
/// Channels may leave `[0, 1]` while lighting is accumulated; clamping only
/// happens when converting to 8-bit output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Color(DVec3);

impl Color {
    /// Black, the color of a ray that hits nothing.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from its channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b))
    }

    /// Red channel.
    pub fn r(&self) -> f64 {
        self.0.x
    }

    /// Green channel.
    pub fn g(&self) -> f64 {
        self.0.y
    }

    /// Blue channel.
    pub fn b(&self) -> f64 {
        self.0.z
    }

    /// Component-wise (Hadamard) product, used to filter light by a surface.
    pub fn hadamard(&self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Channels as 8-bit values, each `round(clamp(c, 0, 1) * 255)`.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_byte(self.0.x),
            channel_to_byte(self.0.y),
            channel_to_byte(self.0.z),
        ]
    }
}

/// Map one linear channel to `0..=255`.
pub fn channel_to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.r(), other.r()) && approx_eq(self.g(), other.g()) && approx_eq(self.b(), other.b())
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.hadamard(rhs)
    }
}
