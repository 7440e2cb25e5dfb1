//! Gray ramps for spotting banding
use crate::devices::framebuffer::{Color, PixelBuffer};

/// Level for position `pos` on an axis of `len` pixels: `pos * 255 / len`.
fn ramp(pos: usize, len: usize) -> u8 {
    (pos * 255 / len.max(1)) as u8
}

/// Black on the left to near-white on the right.
pub fn horizontal(buf: &mut PixelBuffer) {
    let width = buf.width();
    for row in buf.rows_mut() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = Color::gray(ramp(x, width)).to_packed();
        }
    }
}

/// Black at the top to near-white at the bottom.
pub fn vertical(buf: &mut PixelBuffer) {
    let height = buf.height();
    for (y, row) in buf.rows_mut().enumerate() {
        row.fill(Color::gray(ramp(y, height)).to_packed());
    }
}
