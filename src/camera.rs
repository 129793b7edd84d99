//! Camera for ray generation and scene rendering

use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::tuple::Tuple;
use crate::world::World;

/// Pinhole camera looking down -z in its own space, with the image plane at z = -1.
///
/// The transform is a view transform (world to camera space, usually from
/// [`view_transform`](crate::transform::view_transform)); rays are generated
/// in camera space and carried into the world by its inverse.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    hsize: usize,
    /// Rendered image height in pixel count
    vsize: usize,
    /// Angle covered by the longer image side, in radians
    field_of_view: f64,
    /// World-to-camera transform
    transform: Matrix,
    /// Cached inverse of `transform`
    inverse: Matrix,
}

impl Camera {
    /// Creates a camera at the origin looking down -z.
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix::identity(),
            inverse: Matrix::identity(),
        }
    }

    /// Builder form of [`Camera::set_transform`].
    pub fn with_transform(mut self, transform: Matrix) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Replace the view transform.
    ///
    /// # Errors
    ///
    /// [`TraceError::NonInvertible`](crate::TraceError::NonInvertible) for a
    /// degenerate transform; the camera is left unchanged.
    pub fn set_transform(&mut self, transform: Matrix) -> Result<()> {
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    /// Horizontal size in pixels.
    pub fn hsize(&self) -> usize {
        self.hsize
    }

    /// Vertical size in pixels.
    pub fn vsize(&self) -> usize {
        self.vsize
    }

    /// Field of view in radians.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// View transform.
    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    /// Half extents of the image plane one unit in front of the camera.
    ///
    /// The field of view spans the longer side.
    fn half_extents(&self) -> (f64, f64) {
        let half_view = (self.field_of_view / 2.0).tan();
        let aspect = self.hsize as f64 / self.vsize as f64;
        if aspect >= 1.0 {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        }
    }

    /// World-space size of one (square) pixel on the image plane.
    ///
    /// Zero for an image with no pixels.
    pub fn pixel_size(&self) -> f64 {
        if self.hsize == 0 || self.vsize == 0 {
            return 0.0;
        }
        let (half_width, _) = self.half_extents();
        half_width * 2.0 / self.hsize as f64
    }

    /// Ray from the camera through the center of pixel (`px`, `py`).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Result<Ray> {
        let (half_width, half_height) = self.half_extents();
        let pixel_size = self.pixel_size();

        // Offset from the image edge to the pixel's center
        let x_offset = (px as f64 + 0.5) * pixel_size;
        let y_offset = (py as f64 + 0.5) * pixel_size;

        // Camera looks toward -z, so +x is to the left
        let world_x = half_width - x_offset;
        let world_y = half_height - y_offset;

        let pixel = &self.inverse * Tuple::point(world_x, world_y, -1.0);
        let origin = &self.inverse * Tuple::point(0.0, 0.0, 0.0);
        let direction = (pixel - origin).normalize()?;

        Ok(Ray::new(origin, direction))
    }

    /// Renders the world using all rayon worker threads.
    ///
    /// Each task shades one image row and writes only that row's pixels.
    /// The first shading error aborts the render.
    pub fn render(&self, world: &World) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.hsize, self.vsize);
        if self.hsize == 0 || self.vsize == 0 {
            return Ok(canvas);
        }

        info!(
            "Rendering {}x{} with {} objects on {} CPU threads...",
            self.hsize,
            self.vsize,
            world.objects().len(),
            rayon::current_num_threads()
        );
        debug!("pixel size {:.6}, field of view {:.4} rad", self.pixel_size(), self.field_of_view);
        let render_start = Instant::now();
        let pb = ProgressBar::new(self.vsize as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} rows ETA: {eta}") {
            pb.set_style(style);
        }

        canvas
            .pixels_mut()
            .par_chunks_mut(self.hsize)
            .enumerate()
            .try_for_each(|(py, row)| -> Result<()> {
                for (px, pixel) in row.iter_mut().enumerate() {
                    let ray = self.ray_for_pixel(px, py)?;
                    *pixel = world.color_at(&ray)?;
                }
                pb.inc(1);
                Ok(())
            })?;

        pb.finish();
        info!("Image rendered in {:.2?}", render_start.elapsed());

        Ok(canvas)
    }

    /// Renders the world on the calling thread, one `write_pixel` per pixel.
    pub fn render_serial(&self, world: &World) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.hsize, self.vsize);
        for py in 0..self.vsize {
            for px in 0..self.hsize {
                let ray = self.ray_for_pixel(px, py)?;
                canvas.write_pixel(px, py, world.color_at(&ray)?)?;
            }
        }
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TraceError;
    use crate::color::Color;
    use crate::light::PointLight;
    use crate::transform::{rotation_y, scaling, translation, view_transform};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn construction() {
        let c = Camera::new(160, 120, FRAC_PI_2);
        assert_eq!(c.hsize(), 160);
        assert_eq!(c.vsize(), 120);
        assert_abs_diff_eq!(c.field_of_view(), FRAC_PI_2);
        assert_eq!(*c.transform(), Matrix::identity());
    }

    #[test]
    fn pixel_size_horizontal_canvas() {
        let c = Camera::new(200, 125, FRAC_PI_2);
        assert_abs_diff_eq!(c.pixel_size(), 0.01, epsilon = crate::EPSILON);
    }

    #[test]
    fn pixel_size_vertical_canvas() {
        let c = Camera::new(125, 200, FRAC_PI_2);
        assert_abs_diff_eq!(c.pixel_size(), 0.01, epsilon = crate::EPSILON);
    }

    #[test]
    fn ray_through_center() {
        let c = Camera::new(201, 101, FRAC_PI_2);
        let r = c.ray_for_pixel(100, 50).unwrap();
        assert_eq!(r.origin, Tuple::point(0.0, 0.0, 0.0));
        assert_eq!(r.direction, Tuple::vector(0.0, 0.0, -1.0));
    }

    #[test]
    fn ray_through_corner() {
        let c = Camera::new(201, 101, FRAC_PI_2);
        let r = c.ray_for_pixel(0, 0).unwrap();
        assert_eq!(r.origin, Tuple::point(0.0, 0.0, 0.0));
        assert_eq!(r.direction, Tuple::vector(0.66519, 0.33259, -0.66851));
    }

    #[test]
    fn ray_with_transformed_camera() {
        let c = Camera::new(201, 101, FRAC_PI_2)
            .with_transform(rotation_y(FRAC_PI_4) * translation(0.0, -2.0, 5.0))
            .unwrap();
        let r = c.ray_for_pixel(100, 50).unwrap();
        let half = 2f64.sqrt() / 2.0;
        assert_eq!(r.origin, Tuple::point(0.0, 2.0, -5.0));
        assert_eq!(r.direction, Tuple::vector(half, 0.0, -half));
    }

    #[test]
    fn degenerate_transform_is_rejected() {
        let mut c = Camera::new(10, 10, FRAC_PI_2);
        assert!(c.set_transform(scaling(1.0, 0.0, 1.0)).is_err());
        assert_eq!(*c.transform(), Matrix::identity());
    }

    fn default_camera(size: usize) -> Camera {
        let from = Tuple::point(0.0, 0.0, -5.0);
        let to = Tuple::point(0.0, 0.0, 0.0);
        let up = Tuple::vector(0.0, 1.0, 0.0);
        Camera::new(size, size, FRAC_PI_2)
            .with_transform(view_transform(from, to, up).unwrap())
            .unwrap()
    }

    #[test]
    fn render_default_world() {
        let w = World::default_world().unwrap();
        let image = default_camera(11).render(&w).unwrap();
        assert_eq!(image.pixel_at(5, 5).unwrap(), Color::new(0.38066, 0.47583, 0.2855));
    }

    #[test]
    fn serial_and_parallel_renders_agree() {
        let w = World::default_world().unwrap();
        let camera = default_camera(9);
        let parallel = camera.render(&w).unwrap();
        let serial = camera.render_serial(&w).unwrap();
        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(parallel.pixel_at(x, y).unwrap(), serial.pixel_at(x, y).unwrap());
            }
        }
    }

    #[test]
    fn empty_image_has_zero_pixel_size() {
        assert_eq!(Camera::new(0, 4, FRAC_PI_2).pixel_size(), 0.0);
        assert_eq!(Camera::new(4, 0, FRAC_PI_2).pixel_size(), 0.0);
    }

    #[test]
    fn shading_error_aborts_render() {
        let mut w = World::default_world().unwrap();
        // A 1x1 image shoots its only ray straight down +z, landing exactly on
        // the outer sphere at (0, 0, -1), where the light now sits.
        w.set_light(PointLight::new(Tuple::point(0.0, 0.0, -1.0), Color::WHITE));
        let camera = default_camera(1);

        assert!(matches!(camera.render(&w), Err(TraceError::ZeroMagnitude)));
        assert!(matches!(camera.render_serial(&w), Err(TraceError::ZeroMagnitude)));
    }

    #[test]
    fn empty_image_renders_nothing() {
        let w = World::default_world().unwrap();
        let image = Camera::new(0, 4, FRAC_PI_2).render(&w).unwrap();
        assert_eq!((image.width(), image.height()), (0, 4));
    }
}
