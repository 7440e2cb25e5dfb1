//! Scaled bitmap text blitting
use crate::devices::framebuffer::{Color, PixelBuffer};
use crate::font::glyphs::{glyph, GLYPH_HEIGHT, GLYPH_WIDTH};

/// How text is drawn: integer scale, ink color and optional cell background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub scale: usize,
    pub foreground: Color,
    /// When set, unset glyph cells are painted too.
    pub background: Option<Color>,
}

impl TextStyle {
    pub const fn new(scale: usize, foreground: Color) -> Self {
        Self {
            scale,
            foreground,
            background: None,
        }
    }

    pub const fn with_background(self, background: Color) -> Self {
        Self {
            background: Some(background),
            ..self
        }
    }

    pub const fn with_foreground(self, foreground: Color) -> Self {
        Self { foreground, ..self }
    }
}

/// Horizontal pen advance per character.
pub const fn advance(scale: usize) -> usize {
    (GLYPH_WIDTH + 1) * scale
}

/// Vertical pen advance per line.
pub const fn line_height(scale: usize) -> usize {
    (GLYPH_HEIGHT + 1) * scale
}

/// Blit one glyph with its top-left corner at (`x`, `y`). Clipped to the buffer.
pub fn draw_glyph(buf: &mut PixelBuffer, x: i32, y: i32, ch: char, style: &TextStyle) {
    let scale = style.scale;
    for (row, bits) in glyph(ch).iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            let set = (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1;
            let color = match (set, style.background) {
                (true, _) => style.foreground,
                (false, Some(bg)) => bg,
                (false, None) => continue,
            };
            let px = x + (col * scale) as i32;
            let py = y + (row * scale) as i32;
            buf.fill_rect(px, py, scale, scale, color);
        }
    }
}

/// Draw `text` left to right; `'\n'` returns the pen to `x` on the next line.
pub fn draw_string(buf: &mut PixelBuffer, x: i32, y: i32, text: &str, style: &TextStyle) {
    let mut pen_x = x;
    let mut pen_y = y;
    for ch in text.chars() {
        if ch == '\n' {
            pen_x = x;
            pen_y += line_height(style.scale) as i32;
        } else {
            draw_glyph(buf, pen_x, pen_y, ch, style);
            pen_x += advance(style.scale) as i32;
        }
    }
}

/// Pixel width of the widest line of `text`.
pub fn measure_string(text: &str, scale: usize) -> usize {
    text.split('\n')
        .map(|line| line.chars().count() * advance(scale))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> PixelBuffer {
        PixelBuffer::try_new(32, 32, 32).unwrap()
    }

    fn lit(buf: &PixelBuffer) -> usize {
        buf.pixels().iter().filter(|&&p| p != 0).count()
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure_string("", 2), 0);
        assert_eq!(measure_string("abc", 1), 15);
        assert_eq!(measure_string("ab\nlonger\nc", 3), 6 * 15);
        assert_eq!(measure_string("1/19", 3), 60);
    }

    #[test]
    fn test_glyph_foreground_only() {
        let mut buf = canvas();
        draw_glyph(&mut buf, 0, 0, '!', &TextStyle::new(1, Color::WHITE));
        // '!' is four lit cells in column 1
        assert_eq!(lit(&buf), 4);
        assert_eq!(buf.pixel(1, 0), Some(Color::WHITE));
        assert_eq!(buf.pixel(1, 3), Some(Color::BLACK));
    }

    #[test]
    fn test_glyph_with_background() {
        let mut buf = canvas();
        let style = TextStyle::new(2, Color::WHITE).with_background(Color::RED);
        draw_glyph(&mut buf, 0, 0, ' ', &style);
        assert_eq!(lit(&buf), GLYPH_WIDTH * GLYPH_HEIGHT * 4);
        assert_eq!(buf.pixel(7, 11), Some(Color::RED));
        assert_eq!(buf.pixel(8, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_scaled_cells() {
        let mut buf = canvas();
        draw_glyph(&mut buf, 0, 0, '\u{7f}', &TextStyle::new(3, Color::GREEN));
        assert_eq!(lit(&buf), 12 * 18);
    }

    #[test]
    fn test_newline_resets_pen() {
        let mut buf = canvas();
        draw_string(&mut buf, 2, 0, "\u{7f}\n\u{7f}", &TextStyle::new(1, Color::WHITE));
        assert_eq!(buf.pixel(2, 0), Some(Color::WHITE));
        assert_eq!(buf.pixel(2, 7), Some(Color::WHITE));
        assert_eq!(buf.pixel(2, 6), Some(Color::BLACK));
        assert_eq!(buf.pixel(7, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_offscreen_text_is_clipped() {
        let mut buf = canvas();
        draw_string(&mut buf, -100, -100, "HELLO", &TextStyle::new(4, Color::WHITE));
        draw_string(&mut buf, 30, 30, "\u{7f}", &TextStyle::new(4, Color::WHITE));
        assert_eq!(lit(&buf), 4);
    }
}
