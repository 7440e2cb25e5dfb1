//! Checkerboards for pixel response and dead pixel hunting
use crate::devices::framebuffer::{Color, PixelBuffer};

/// White where `(x / cell + y / cell)` is odd, black elsewhere.
pub fn checkerboard(buf: &mut PixelBuffer, cell: usize) {
    let cell = cell.max(1);
    let white = Color::WHITE.to_packed();
    let black = Color::BLACK.to_packed();
    for (y, row) in buf.rows_mut().enumerate() {
        let row_parity = y / cell;
        for (x, px) in row.iter_mut().enumerate() {
            *px = if (x / cell + row_parity) % 2 == 1 { white } else { black };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_cells() {
        let mut buf = PixelBuffer::try_new(64, 64, 64).unwrap();
        checkerboard(&mut buf, 8);
        assert_eq!(buf.pixel(0, 0), buf.pixel(8, 8));
        assert_ne!(buf.pixel(0, 0), buf.pixel(8, 0));
        assert_eq!(buf.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(buf.pixel(7, 8), Some(Color::WHITE));
    }

    #[test]
    fn test_large_cells() {
        let mut buf = PixelBuffer::try_new(200, 130, 200).unwrap();
        checkerboard(&mut buf, 64);
        assert_eq!(buf.pixel(63, 63), Some(Color::BLACK));
        assert_eq!(buf.pixel(64, 63), Some(Color::WHITE));
        assert_eq!(buf.pixel(64, 64), Some(Color::BLACK));
        assert_eq!(buf.pixel(199, 129), Some(Color::WHITE));
    }
}
