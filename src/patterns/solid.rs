//! Single-color fills
use crate::devices::framebuffer::{Color, PixelBuffer};

/// Set every pixel of the buffer to `color`.
pub fn fill_solid(buf: &mut PixelBuffer, color: Color) {
    buf.fill(color);
}
