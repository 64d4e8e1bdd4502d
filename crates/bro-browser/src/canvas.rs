//! An abstract bitmap sink, and the `image`-backed implementation of it.

use std::path::Path;

use bro_css::Color;
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::BroError;

/// A pixel sink that can fill solid-color rectangles. The display-list
/// painter is written against this trait, not against `image` directly,
/// so the rendering core never needs to know about PNG encoding.
pub trait Canvas {
    /// Set the pen color used by subsequent [`Canvas::rect`] calls.
    fn set_color(&mut self, color: Color);
    /// Fill an axis-aligned rectangle with the current pen color,
    /// clipped to the canvas bounds. Must not panic on a rectangle with
    /// a negative origin or one that overruns the canvas.
    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32);
}

/// The sole [`Canvas`] implementation: an RGBA pixel buffer backed by
/// the `image` crate.
pub struct ImageCanvas {
    buffer: RgbaImage,
    width: u32,
    height: u32,
    color: Rgba<u8>,
}

impl ImageCanvas {
    /// Allocate a canvas pre-filled with opaque white. `width`/`height`
    /// are floored to 1 since `image::ImageBuffer` cannot be zero-sized.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255]));
        Self { buffer, width, height, color: Rgba([0, 0, 0, 255]) }
    }

    /// Consume the canvas, returning the underlying image.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.buffer
    }

    /// Encode and write the canvas to `path`. Format is dispatched by
    /// `image` from the file extension.
    pub fn save(&self, path: &Path) -> Result<(), BroError> {
        self.buffer.save(path)?;
        Ok(())
    }
}

impl Canvas for ImageCanvas {
    fn set_color(&mut self, color: Color) {
        self.color = Rgba([color.r, color.g, color.b, color.a]);
    }

    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        for dy in 0..height.max(0) {
            for dx in 0..width.max(0) {
                let px = x + dx;
                let py = y + dy;
                if px >= 0 && py >= 0 && (px as u32) < self.width && (py as u32) < self.height {
                    self.buffer.put_pixel(px as u32, py as u32, self.color);
                }
            }
        }
    }
}
