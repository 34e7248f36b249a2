use embedded_graphics::{
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb888,
    prelude::*,
    Pixel,
};

use std::vec;
use std::vec::Vec;

/// Fixed-size framebuffer capturing draw output for assertions.
///
/// Unlike `MockDisplay` it has no 64x64 ceiling, so it can hold the
/// player's 600x120 surface. Pixels addressed outside the buffer are
/// dropped but counted, which lets tests assert that nothing drew out of
/// range.
pub(crate) struct TestCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    out_of_bounds: usize,
}

impl TestCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; (width * height) as usize],
            out_of_bounds: 0,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb888 {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn out_of_bounds(&self) -> usize {
        self.out_of_bounds
    }

    /// Number of pixels differing from `background`.
    pub fn lit_count(&self, background: Rgb888) -> usize {
        self.pixels.iter().filter(|&&p| p != background).count()
    }

    /// Rightmost column holding a non-`background` pixel.
    pub fn max_lit_x(&self, background: Rgb888) -> Option<u32> {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, &p)| p != background)
            .map(|(i, _)| i as u32 % self.width)
            .max()
    }

    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }
}

impl OriginDimensions for TestCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for TestCanvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb888>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0
                || point.y < 0
                || point.x >= self.width as i32
                || point.y >= self.height as i32
            {
                self.out_of_bounds += 1;
                continue;
            }
            self.pixels[(point.y as u32 * self.width + point.x as u32) as usize] = color;
        }
        Ok(())
    }
}
