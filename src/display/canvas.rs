use std::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// In-memory 1-bit framebuffer. `BinaryColor::On` is ink (black),
/// `BinaryColor::Off` is paper (white).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoCanvas {
    size: Size,
    ink: Vec<bool>,
}

impl MonoCanvas {
    pub fn new(size: Size) -> Self {
        MonoCanvas {
            size,
            ink: vec![false; size.width as usize * size.height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Whether the pixel is inked. Out-of-bounds reads as paper.
    pub fn is_ink(&self, x: u32, y: u32) -> bool {
        if x >= self.size.width || y >= self.size.height {
            return false;
        }
        self.ink[y as usize * self.size.width as usize + x as usize]
    }

    /// Packs one row MSB first, a set bit meaning white. Trailing bits of the
    /// last byte are white.
    pub fn packed_row(&self, y: u32) -> Vec<u8> {
        let mut row = vec![0xFF; self.size.width.div_ceil(8) as usize];
        for x in 0..self.size.width {
            if self.is_ink(x, y) {
                row[(x / 8) as usize] &= !(0x80 >> (x % 8));
            }
        }
        row
    }

    /// All rows top to bottom, see [`MonoCanvas::packed_row`].
    pub fn packed(&self) -> Vec<u8> {
        (0..self.size.height)
            .flat_map(|y| self.packed_row(y))
            .collect()
    }

    /// Number of inked pixels inside the given rectangle.
    #[cfg(test)]
    pub fn ink_in(&self, x: std::ops::Range<u32>, y: std::ops::Range<u32>) -> usize {
        y.flat_map(|y| x.clone().map(move |x| (x, y)))
            .filter(|&(x, y)| self.is_ink(x, y))
            .count()
    }
}

impl OriginDimensions for MonoCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for MonoCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (w, h) = (self.size.width as i32, self.size.height as i32);
        for Pixel(point, color) in pixels {
            if (0..w).contains(&point.x) && (0..h).contains(&point.y) {
                self.ink[point.y as usize * w as usize + point.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}
