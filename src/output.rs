//! # Output Module
//!
//! Writes a rendered [`Canvas`] to disk. The format follows the file extension:
//! - `.ppm`: plain-text P3, produced by [`Canvas::to_ppm`]
//! - `.png`: 8-bit PNG through the `image` crate
//!
//! Both formats clamp channels to [0.0, 1.0] before scaling to 8 bits; the
//! canvas itself keeps the unclamped linear values.

use std::fs;
use std::path::Path;

use log::{debug, info};
use phongtracer::{Canvas, Result, TraceError};

/// Save the canvas in the format named by the extension of `path`.
///
/// # Errors
///
/// [`TraceError::UnsupportedFormat`] for anything other than `.ppm` or `.png`,
/// otherwise whatever the writer reports.
pub fn save_canvas(canvas: &Canvas, path: &str) -> Result<()> {
    let extension = Path::new(path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_canvas_as_ppm(canvas, path),
        "png" => save_canvas_as_png(canvas, path),
        _ => Err(TraceError::UnsupportedFormat(extension)),
    }
}

/// Save the canvas as a plain-text PPM file
///
/// The whole file is built in memory first, then written in one call.
pub fn save_canvas_as_ppm(canvas: &Canvas, path: &str) -> Result<()> {
    let start_time = std::time::Instant::now();
    let ppm = canvas.to_ppm();
    debug!("PPM encoded ({} bytes) in {:.2?}", ppm.len(), start_time.elapsed());

    fs::write(path, ppm)?;
    info!("Image saved as {}", path);
    Ok(())
}

/// Save the canvas as an 8-bit PNG file
///
/// Converts linear values to u8 with clamping and rounding; no gamma curve
/// is applied, so PPM and PNG outputs carry identical bytes.
pub fn save_canvas_as_png(canvas: &Canvas, path: &str) -> Result<()> {
    let image = canvas.to_rgb8();
    image.save(path)?;
    info!("Image saved as {}", path);
    Ok(())
}
