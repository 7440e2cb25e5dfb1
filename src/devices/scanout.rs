//! Conversion from packed RGBA rows to a device's scan-out bytes
use crate::error::{Error, Result};

/// Channel layout of one scan-out pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
    /// Single luminance byte.
    Luma,
}

impl ChannelOrder {
    fn min_bytes(self) -> usize {
        match self {
            ChannelOrder::Luma => 1,
            ChannelOrder::Rgb | ChannelOrder::Bgr => 3,
        }
    }
}

/// A channel order paired with a pixel size large enough to hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanoutFormat {
    order: ChannelOrder,
    bytes_per_pixel: usize,
}

impl ScanoutFormat {
    pub fn new(order: ChannelOrder, bytes_per_pixel: usize) -> Result<Self> {
        if bytes_per_pixel < order.min_bytes() {
            return Err(Error::UnsupportedPixelSize { bytes_per_pixel });
        }
        Ok(Self {
            order,
            bytes_per_pixel,
        })
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Encode as many pixels of `src` as fit in `dst`. A fourth byte, when
    /// present, is written opaque.
    pub fn encode_row(&self, src: &[u32], dst: &mut [u8]) {
        for (out, &word) in dst.chunks_exact_mut(self.bytes_per_pixel).zip(src) {
            let [r, g, b, _] = word.to_le_bytes();
            match self.order {
                ChannelOrder::Rgb => out[..3].copy_from_slice(&[r, g, b]),
                ChannelOrder::Bgr => out[..3].copy_from_slice(&[b, g, r]),
                ChannelOrder::Luma => {
                    out[0] = ((77 * r as u32 + 150 * g as u32 + 29 * b as u32) >> 8) as u8;
                    continue;
                }
            }
            if let Some(alpha) = out.get_mut(3) {
                *alpha = 255;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::Color;

    #[test]
    fn test_rejects_short_pixels() {
        assert_eq!(
            ScanoutFormat::new(ChannelOrder::Rgb, 2),
            Err(Error::UnsupportedPixelSize { bytes_per_pixel: 2 })
        );
        assert!(ScanoutFormat::new(ChannelOrder::Bgr, 0).is_err());
        assert!(ScanoutFormat::new(ChannelOrder::Luma, 1).is_ok());
    }

    #[test]
    fn test_bgr_with_padding_byte() {
        let format = ScanoutFormat::new(ChannelOrder::Bgr, 4).unwrap();
        let mut dst = [0u8; 8];
        format.encode_row(&[Color::new(1, 2, 3).to_packed(), Color::RED.to_packed()], &mut dst);
        assert_eq!(dst, [3, 2, 1, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_rgb_three_bytes() {
        let format = ScanoutFormat::new(ChannelOrder::Rgb, 3).unwrap();
        let mut dst = [0u8; 6];
        format.encode_row(&[Color::new(1, 2, 3).to_packed(), Color::BLUE.to_packed()], &mut dst);
        assert_eq!(dst, [1, 2, 3, 0, 0, 255]);
    }

    #[test]
    fn test_luma() {
        let format = ScanoutFormat::new(ChannelOrder::Luma, 1).unwrap();
        let mut dst = [7u8; 3];
        let src = [Color::WHITE.to_packed(), Color::BLACK.to_packed(), Color::GREEN.to_packed()];
        format.encode_row(&src, &mut dst);
        assert_eq!(dst, [255, 0, 149]);
    }

    #[test]
    fn test_short_destination_stops_early() {
        let format = ScanoutFormat::new(ChannelOrder::Rgb, 4).unwrap();
        let mut dst = [0u8; 6];
        format.encode_row(&[Color::WHITE.to_packed(); 2], &mut dst);
        assert_eq!(dst, [255, 255, 255, 255, 0, 0]);
    }
}
