//! Software pixel buffer using embedded-graphics
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

use crate::devices::display::{Frame, PixelFormat};
use crate::devices::framebuffer::color::Color;
use crate::error::{Error, Result};

/// A stride-padded array of packed pixels (see [`Color::to_packed`]).
///
/// Rows are `stride` pixels apart; only the first `width` pixels of each row
/// are part of the visible image.
pub struct PixelBuffer {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
    stride: usize,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer without aborting on allocation failure.
    pub fn try_new(width: usize, height: usize, stride: usize) -> Result<Self> {
        if stride == 0 || stride < width {
            return Err(Error::InvalidGeometry { width, stride });
        }

        let len = stride.saturating_mul(height);
        let bytes = len.saturating_mul(core::mem::size_of::<u32>());

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| Error::FramebufferAlloc { bytes })?;
        pixels.resize(len, 0);

        Ok(Self {
            pixels,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Visible part of row `y`.
    pub fn row(&self, y: usize) -> Option<&[u32]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.stride;
        Some(&self.pixels[start..start + self.width])
    }

    /// Visible part of every row, top to bottom.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u32]> + '_ {
        let width = self.width;
        self.pixels
            .chunks_exact_mut(self.stride)
            .take(self.height)
            .map(move |row| &mut row[..width])
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Color::from_packed(self.pixels[y * self.stride + x]))
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.stride + x as usize)
    }

    /// Write a single pixel; coordinates outside the buffer are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index_of(x, y) {
            self.pixels[idx] = color.to_packed();
        }
    }

    /// Composite `color` over the existing pixel using `color.a`.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = self.index_of(x, y) {
            let under = Color::from_packed(self.pixels[idx]);
            self.pixels[idx] = under.blend(&color).to_packed();
        }
    }

    /// Fill the entire buffer, padding included.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color.to_packed());
    }

    /// Clip a rectangle to the visible area as (x0, y0, x1, y1).
    fn clip(&self, x: i32, y: i32, w: usize, h: usize) -> Option<(usize, usize, usize, usize)> {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width as i64);
        let y1 = (y as i64 + h as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    /// Fill a rectangular region
    pub fn fill_rect(&mut self, x: i32, y: i32, w: usize, h: usize, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        let packed = color.to_packed();
        for row in y0..y1 {
            let start = row * self.stride;
            self.pixels[start + x0..start + x1].fill(packed);
        }
    }

    /// Composite a rectangular region with `color.a` opacity
    pub fn blend_rect(&mut self, x: i32, y: i32, w: usize, h: usize, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        for row in y0..y1 {
            let start = row * self.stride;
            for px in &mut self.pixels[start + x0..start + x1] {
                *px = Color::from_packed(*px).blend(&color).to_packed();
            }
        }
    }

    /// Describe this buffer to a display.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            pixels: &self.pixels,
            stride: self.stride,
            width: self.width,
            height: self.height,
            format: PixelFormat::Rgba8888,
        }
    }
}

// Implement DrawTarget for embedded-graphics
impl DrawTarget for PixelBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.put_pixel(x, y, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> core::result::Result<(), Self::Error> {
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            area.size.width as usize,
            area.size.height as usize,
            color.into(),
        );
        Ok(())
    }
}

impl OriginDimensions for PixelBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

/// Draw target that composites everything drawn through it at a fixed opacity.
pub struct Translucent<'a> {
    target: &'a mut PixelBuffer,
    alpha: u8,
}

impl<'a> Translucent<'a> {
    pub fn new(target: &'a mut PixelBuffer, alpha: u8) -> Self {
        Self { target, alpha }
    }
}

impl DrawTarget for Translucent<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let color = Color::with_alpha(color.r(), color.g(), color.b(), self.alpha);
            self.target.blend_pixel(x, y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> core::result::Result<(), Self::Error> {
        let color = Color::with_alpha(color.r(), color.g(), color.b(), self.alpha);
        self.target.blend_rect(
            area.top_left.x,
            area.top_left.y,
            area.size.width as usize,
            area.size.height as usize,
            color,
        );
        Ok(())
    }
}

impl OriginDimensions for Translucent<'_> {
    fn size(&self) -> Size {
        self.target.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_new_is_zeroed() {
        let buf = PixelBuffer::try_new(16, 8, 20).unwrap();
        assert_eq!(buf.pixels().len(), 20 * 8);
        assert!(buf.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_rejects_narrow_stride() {
        assert_eq!(
            PixelBuffer::try_new(16, 8, 15).err(),
            Some(Error::InvalidGeometry { width: 16, stride: 15 })
        );
    }

    #[test]
    fn test_oversized_allocation_fails() {
        let err = PixelBuffer::try_new(4, usize::MAX / 2, 4).err();
        assert!(matches!(err, Some(Error::FramebufferAlloc { .. })));
    }

    #[test]
    fn test_put_pixel_clips() {
        let mut buf = PixelBuffer::try_new(4, 4, 4).unwrap();
        buf.put_pixel(-1, 0, Color::WHITE);
        buf.put_pixel(4, 0, Color::WHITE);
        buf.put_pixel(0, 4, Color::WHITE);
        assert!(buf.pixels().iter().all(|&p| p == 0));
        buf.put_pixel(3, 3, Color::WHITE);
        assert_eq!(buf.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn test_rows_skip_padding() {
        let mut buf = PixelBuffer::try_new(3, 2, 5).unwrap();
        for row in buf.rows_mut() {
            row.fill(Color::RED.to_packed());
        }
        assert_eq!(buf.pixels()[3], 0);
        assert_eq!(buf.pixels()[4], 0);
        assert_eq!(buf.pixel(2, 1), Some(Color::RED));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = PixelBuffer::try_new(8, 8, 8).unwrap();
        buf.fill_rect(-4, 6, 6, 10, Color::GREEN);
        assert_eq!(buf.pixel(0, 6), Some(Color::GREEN));
        assert_eq!(buf.pixel(1, 7), Some(Color::GREEN));
        assert_eq!(buf.pixel(2, 7), Some(Color::from_packed(0)));
        assert_eq!(buf.pixel(0, 5), Some(Color::from_packed(0)));
    }

    #[test]
    fn test_draw_target() {
        let mut buf = PixelBuffer::try_new(8, 8, 8).unwrap();
        Rectangle::new(Point::new(6, 6), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0, 0, 255)))
            .draw(&mut buf)
            .ok();
        assert_eq!(buf.pixel(7, 7), Some(Color::BLUE));
        assert_eq!(buf.pixel(5, 5), Some(Color::from_packed(0)));
    }

    #[test]
    fn test_translucent_blends() {
        let mut buf = PixelBuffer::try_new(2, 1, 2).unwrap();
        buf.fill(Color::WHITE);
        Pixel(Point::new(0, 0), Rgb888::new(0, 0, 0))
            .draw(&mut Translucent::new(&mut buf, 0xC0))
            .ok();
        assert_eq!(buf.pixel(0, 0), Some(Color::gray(63)));
        assert_eq!(buf.pixel(1, 0), Some(Color::WHITE));
    }
}
