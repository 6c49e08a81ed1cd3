//! In-memory RGB draw target that can be written out as a PNG

use std::{convert::Infallible, path::Path};

use embedded_graphics::{
    pixelcolor::{Rgb888, RgbColor},
    prelude::{DrawTarget, OriginDimensions, Pixel, Point, Size},
};
use image::{ColorType, ImageFormat};
use log::info;

use crate::error::Result;

pub struct Canvas {
    size: Size,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    /// A white canvas
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb888::WHITE; size.width as usize * size.height as usize],
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok().filter(|&x| x < self.size.width)?;
        let y = u32::try_from(point.y).ok().filter(|&y| y < self.size.height)?;
        Some(y as usize * self.size.width as usize + x as usize)
    }

    /// Color at `point`, `None` outside the canvas
    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Packed RGB rows, top to bottom
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| [c.r(), c.g(), c.b()]).collect()
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_rgb_bytes(),
            self.size.width,
            self.size.height,
            ColorType::Rgb8,
            ImageFormat::Png,
        )?;
        info!(
            "Wrote {}x{} heatmap to {}",
            self.size.width,
            self.size.height,
            path.display()
        );
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
