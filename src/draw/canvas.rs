//! Raster canvas backed by a Cairo image surface.

use super::color::Color;
use super::render;
use crate::input::Point;
use cairo::{Antialias, Context, Format, ImageSurface};
use log::warn;

/// A fixed-size raster buffer painted with a solid background color.
///
/// Every draw call opens a short-lived Cairo context and drops it before
/// returning, so the surface data can be read back at any time.
pub struct Canvas {
    surface: ImageSurface,
    background: Color,
}

/// Point-in-time copy of the canvas pixels, used to restore the canvas
/// between shape previews.
pub struct Snapshot(ImageSurface);

impl Canvas {
    /// Allocates a canvas and fills it with `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::Rgb24, width, height)?;
        let canvas = Self {
            surface,
            background,
        };
        canvas.clear();
        Ok(canvas)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Resets every pixel to the background color.
    pub fn clear(&self) {
        let background = self.background;
        self.draw(|ctx| render::fill_background(ctx, background));
    }

    /// Runs `f` against a fresh context on the canvas surface.
    ///
    /// Context creation only fails when the surface itself is in an error
    /// state; the draw is skipped and the canvas left untouched.
    pub fn draw<F: FnOnce(&Context)>(&self, f: F) {
        match Context::new(&self.surface) {
            Ok(ctx) => f(&ctx),
            Err(err) => warn!("Skipping draw operation, canvas context unavailable: {err}"),
        }
    }

    /// Copies the current pixels into a detached surface.
    pub fn snapshot(&self) -> Result<Snapshot, cairo::Error> {
        let copy = ImageSurface::create(Format::Rgb24, self.width(), self.height())?;
        {
            let ctx = Context::new(&copy)?;
            render::paint_surface(&ctx, &self.surface)?;
        }
        Ok(Snapshot(copy))
    }

    /// Overwrites the canvas with a previously taken snapshot.
    pub fn restore(&self, snapshot: &Snapshot) -> Result<(), cairo::Error> {
        let ctx = Context::new(&self.surface)?;
        render::paint_surface(&ctx, &snapshot.0)
    }

    /// Encodes the canvas as PNG.
    pub fn write_png(&self) -> Result<Vec<u8>, cairo::IoError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Reads a single pixel as `[r, g, b]`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }

        let stride = self.surface.stride() as usize;
        let offset = y as usize * stride + x as usize * 4;
        let mut pixel = None;
        let read = self.surface.with_data(|data| {
            pixel = data
                .get(offset..offset + 4)
                .map(|bytes| unpack_rgb24([bytes[0], bytes[1], bytes[2], bytes[3]]));
        });
        if let Err(err) = read {
            warn!("Failed to read canvas pixel ({x}, {y}): {err}");
        }
        pixel
    }

    /// Reads every pixel in row-major order.
    pub fn pixels(&self) -> Vec<[u8; 3]> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let stride = self.surface.stride() as usize;
        let mut pixels = Vec::with_capacity(width * height);

        let read = self.surface.with_data(|data| {
            for row in data.chunks(stride).take(height) {
                for bytes in row[..width * 4].chunks_exact(4) {
                    pixels.push(unpack_rgb24([bytes[0], bytes[1], bytes[2], bytes[3]]));
                }
            }
        });
        if let Err(err) = read {
            warn!("Failed to read canvas pixels: {err}");
        }
        pixels
    }

    /// Antialiased segment, used by the pen.
    pub fn segment(&self, from: Point, to: Point, color: Color, width: f64) {
        self.draw(|ctx| {
            render::stroke_segment(ctx, from, to, color, width, Antialias::Default)
        });
    }

    /// Paints the background along a segment with hard edges, so erased
    /// pixels never blend with what was under them.
    pub fn erase(&self, from: Point, to: Point, width: f64) {
        let background = self.background;
        self.draw(|ctx| {
            render::stroke_segment(ctx, from, to, background, width, Antialias::None)
        });
    }

    pub fn rect(&self, a: Point, b: Point, color: Color, width: f64) {
        self.draw(|ctx| render::stroke_rect(ctx, a, b, color, width));
    }

    pub fn circle(&self, center: Point, radius: f64, color: Color, width: f64) {
        self.draw(|ctx| render::stroke_circle(ctx, center, radius, color, width));
    }
}

/// RGB24 pixels are native-endian `u32` values laid out as `0x00RRGGBB`.
fn unpack_rgb24(bytes: [u8; 4]) -> [u8; 3] {
    let value = u32::from_ne_bytes(bytes);
    [(value >> 16) as u8, (value >> 8) as u8, value as u8]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, PURPLE, WHITE};

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(8, 4, PURPLE).unwrap();
        let pixels = canvas.pixels();
        assert_eq!(pixels.len(), 32);
        assert!(pixels.iter().all(|p| *p == [0x4A, 0x1D, 0x96]));
    }

    #[test]
    fn pixel_outside_canvas_is_none() {
        let canvas = Canvas::new(4, 4, BLACK).unwrap();
        assert!(canvas.pixel(-1, 0).is_none());
        assert!(canvas.pixel(4, 0).is_none());
        assert!(canvas.pixel(0, 4).is_none());
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 0]));
    }

    #[test]
    fn restore_discards_draws_after_snapshot() {
        let canvas = Canvas::new(20, 20, BLACK).unwrap();
        let snapshot = canvas.snapshot().unwrap();
        canvas.segment(Point::new(0.0, 10.0), Point::new(20.0, 10.0), WHITE, 4.0);
        assert_eq!(canvas.pixel(10, 10), Some([255, 255, 255]));

        canvas.restore(&snapshot).unwrap();
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0]));
    }

    #[test]
    fn erase_leaves_no_blended_edge_pixels() {
        let canvas = Canvas::new(40, 40, PURPLE).unwrap();
        canvas.segment(Point::new(0.0, 20.0), Point::new(40.0, 20.0), WHITE, 9.0);
        let before = canvas.pixels();

        canvas.erase(Point::new(5.0, 20.0), Point::new(35.0, 20.0), 5.0);

        let after = canvas.pixels();
        let purple = PURPLE.to_rgb8();
        for (index, (old, new)) in before.iter().zip(&after).enumerate() {
            assert!(
                new == old || *new == purple,
                "pixel {index} blended to {new:?}"
            );
        }
        assert_eq!(canvas.pixel(20, 20), Some(purple));
    }

    #[test]
    fn png_output_has_signature() {
        let canvas = Canvas::new(4, 4, WHITE).unwrap();
        let png = canvas.write_png().unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
