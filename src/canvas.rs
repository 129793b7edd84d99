//! Pixel buffer and its plain-text PPM encoding.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::color::Color;
use crate::error::{Result, TraceError};

/// PPM readers are only required to accept lines this long.
const PPM_MAX_LINE: usize = 70;

/// Row-major grid of linear colors.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::BLACK)
    }

    /// Canvas with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(TraceError::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Set the pixel at column `x`, row `y`.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) -> Result<()> {
        let offset = self.offset(x, y)?;
        self.pixels[offset] = color;
        Ok(())
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel_at(&self, x: usize, y: usize) -> Result<Color> {
        Ok(self.pixels[self.offset(x, y)?])
    }

    /// Row-major pixel storage, for renderers that fill rows in parallel.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Encode as plain-text PPM (`P3`).
    ///
    /// Channels are clamped to `[0, 1]` and scaled to `0..=255`. Each scanline
    /// starts on a new line and no line exceeds 70 characters. The output ends
    /// with a newline.
    pub fn to_ppm(&self) -> String {
        let mut ppm = format!("P3\n{} {}\n255\n", self.width, self.height);
        if self.width == 0 {
            return ppm;
        }

        for row in self.pixels.chunks(self.width) {
            let mut line = String::with_capacity(PPM_MAX_LINE);
            for value in row.iter().flat_map(Color::to_rgb8) {
                let token = value.to_string();
                if !line.is_empty() && line.len() + 1 + token.len() > PPM_MAX_LINE {
                    ppm.push_str(&line);
                    ppm.push('\n');
                    line.clear();
                }
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(&token);
            }
            ppm.push_str(&line);
            ppm.push('\n');
        }
        ppm
    }

    /// Convert to an 8-bit RGB image with the same clamping as [`Canvas::to_ppm`].
    pub fn to_rgb8(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgb(self.pixels[y as usize * self.width + x as usize].to_rgb8())
        })
    }
}
