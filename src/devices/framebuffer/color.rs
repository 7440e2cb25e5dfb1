//! Color representation and manipulation
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::RgbColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    pub const GRAY: Color = Color::new(128, 128, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Neutral gray with the same level on every channel.
    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    /// Pack into the framebuffer word: bytes R, G, B, A in memory order.
    /// The alpha byte is always written opaque.
    pub const fn to_packed(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, 0xFF])
    }

    pub const fn from_packed(word: u32) -> Self {
        let [r, g, b, _] = word.to_le_bytes();
        Self::new(r, g, b)
    }

    /// Fully saturated, full value color for a hue in degrees.
    ///
    /// Saturation is fixed at maximum, so the minimum component of every
    /// sextant is zero.
    pub fn from_hue(hue: u32) -> Self {
        let hue = hue % 360;
        let sextant = hue / 60;
        let rem = hue % 60;
        let rising = (255 * rem / 60) as u8;
        let falling = (255 * (60 - rem) / 60) as u8;

        match sextant {
            0 => Color::new(255, rising, 0),
            1 => Color::new(falling, 255, 0),
            2 => Color::new(0, 255, rising),
            3 => Color::new(0, falling, 255),
            4 => Color::new(rising, 0, 255),
            _ => Color::new(255, 0, falling),
        }
    }

    /// Blend `other` over this color using its alpha
    pub fn blend(&self, other: &Color) -> Color {
        let alpha = other.a as u32;
        let inv_alpha = 255 - alpha;
        let mix = |under: u8, over: u8| ((under as u32 * inv_alpha + over as u32 * alpha) / 255) as u8;

        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_rgb888(self) -> Rgb888 {
        Rgb888::new(self.r, self.g, self.b)
    }
}

impl From<Rgb888> for Color {
    fn from(color: Rgb888) -> Self {
        Color::new(color.r(), color.g(), color.b())
    }
}

impl From<Color> for Rgb888 {
    fn from(color: Color) -> Self {
        color.to_rgb888()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_layout() {
        let c = Color::new(0x11, 0x22, 0x33);
        assert_eq!(c.to_packed(), 0xFF33_2211);
        assert_eq!(Color::from_packed(0xFF33_2211), c);
        assert_eq!(Color::RED.to_packed(), 0xFF00_00FF);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex(0x0A0F28), Color::new(10, 15, 40));
        assert_eq!(Color::from_hex(0xFF00FF), Color::MAGENTA);
        assert_eq!(Color::from_hex(0x123456).a, 255);
    }

    #[test]
    fn test_hue_primaries() {
        assert_eq!(Color::from_hue(0), Color::RED);
        assert_eq!(Color::from_hue(120), Color::GREEN);
        assert_eq!(Color::from_hue(240), Color::BLUE);
        assert_eq!(Color::from_hue(360), Color::RED);
    }

    #[test]
    fn test_hue_sextant_edges() {
        assert_eq!(Color::from_hue(60), Color::YELLOW);
        assert_eq!(Color::from_hue(180), Color::CYAN);
        assert_eq!(Color::from_hue(300), Color::MAGENTA);
        assert_eq!(Color::from_hue(30), Color::new(255, 127, 0));
    }

    #[test]
    fn test_blend() {
        let under = Color::WHITE;
        assert_eq!(under.blend(&Color::with_alpha(0, 0, 0, 255)), Color::BLACK);
        assert_eq!(under.blend(&Color::with_alpha(0, 0, 0, 0)), Color::WHITE);
        let half = under.blend(&Color::with_alpha(0, 0, 0, 0xC0));
        assert_eq!(half, Color::gray(63));
    }
}
