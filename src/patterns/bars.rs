//! Banded patterns: color bars and gray steps
use crate::config::{BAR_COUNT, GRAY_LEVELS};
use crate::devices::framebuffer::{Color, PixelBuffer};

/// Band colors, in order.
pub const BAR_PALETTE: [Color; BAR_COUNT] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::CYAN,
    Color::MAGENTA,
    Color::YELLOW,
    Color::WHITE,
    Color::BLACK,
];

/// Band that `pos` falls in when `len` pixels are split into `count` bands.
///
/// Bands are `len / count` wide; the remainder of the division joins the last band.
pub fn band_index(pos: usize, len: usize, count: usize) -> usize {
    let band = (len / count).max(1);
    (pos / band).min(count - 1)
}

/// Eight colored bands stacked top to bottom.
pub fn horizontal_bars(buf: &mut PixelBuffer) {
    let height = buf.height();
    for (y, row) in buf.rows_mut().enumerate() {
        let color = BAR_PALETTE[band_index(y, height, BAR_COUNT)];
        row.fill(color.to_packed());
    }
}

/// Eight colored bands side by side.
pub fn vertical_bars(buf: &mut PixelBuffer) {
    let width = buf.width();
    for row in buf.rows_mut() {
        for (x, px) in row.iter_mut().enumerate() {
            *px = BAR_PALETTE[band_index(x, width, BAR_COUNT)].to_packed();
        }
    }
}

/// Gray level of step `idx` out of [`GRAY_LEVELS`], spanning 0..=255.
pub fn gray_step(idx: usize) -> u8 {
    (idx * 255 / (GRAY_LEVELS - 1)) as u8
}

/// Sixteen vertical gray steps from black to white.
pub fn gray_levels(buf: &mut PixelBuffer) {
    let width = buf.width();
    for row in buf.rows_mut() {
        for (x, px) in row.iter_mut().enumerate() {
            let level = gray_step(band_index(x, width, GRAY_LEVELS));
            *px = Color::gray(level).to_packed();
        }
    }
}
