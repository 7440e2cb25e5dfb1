//! Pattern number badge drawn over the active pattern
use crate::devices::framebuffer::PixelBuffer;
use crate::font::TextStyle;
use crate::ui::theme::Theme;
use crate::ui::widgets::{Label, Panel, Rect, TextEffect};

const SCALE: usize = 3;
const MARGIN: i32 = 8;
const PAD_X: usize = 8;
const PAD_Y: usize = 6;
const RADIUS: usize = 6;

/// "current/total" rendered without general formatting.
///
/// `current` is written with one or two digits, `total` always with two
/// (zero padded). Both are capped at 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorLabel {
    bytes: [u8; 5],
    len: usize,
}

impl IndicatorLabel {
    pub fn new(current: usize, total: usize) -> Self {
        let current = current.min(99) as u8;
        let total = total.min(99) as u8;
        let mut bytes = [0u8; 5];
        let mut len = 0;

        if current >= 10 {
            bytes[len] = b'0' + current / 10;
            len += 1;
        }
        bytes[len] = b'0' + current % 10;
        bytes[len + 1] = b'/';
        bytes[len + 2] = b'0' + total / 10;
        bytes[len + 3] = b'0' + total % 10;
        len += 4;

        Self { bytes, len }
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }
}

/// Draw the translucent "current/total" badge in the top-left corner.
pub fn draw_indicator(buf: &mut PixelBuffer, current: usize, total: usize, theme: &Theme) {
    let label = IndicatorLabel::new(current, total);
    let text = Label::new(label.as_str(), TextStyle::new(SCALE, theme.text))
        .with_effect(TextEffect::Outline(theme.shadow));

    let rect = Rect::new(MARGIN, MARGIN, text.width() + 2 * PAD_X, text.height() + 2 * PAD_Y);
    Panel::new(rect, theme.indicator)
        .with_outline(theme.outline)
        .with_radius(RADIUS)
        .render(buf);

    text.render(buf, MARGIN + PAD_X as i32, MARGIN + PAD_Y as i32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::Color;

    #[test]
    fn test_label_format() {
        assert_eq!(IndicatorLabel::new(1, 19).as_str(), "1/19");
        assert_eq!(IndicatorLabel::new(9, 19).as_str(), "9/19");
        assert_eq!(IndicatorLabel::new(10, 19).as_str(), "10/19");
        assert_eq!(IndicatorLabel::new(19, 19).as_str(), "19/19");
        assert_eq!(IndicatorLabel::new(3, 5).as_str(), "3/05");
        assert_eq!(IndicatorLabel::new(250, 7).as_str(), "99/07");
    }

    #[test]
    fn test_indicator_box() {
        let mut buf = PixelBuffer::try_new(200, 100, 200).unwrap();
        buf.fill(Color::RED);
        let theme = Theme::default();
        draw_indicator(&mut buf, 1, 19, &theme);

        // "1/19" at scale 3 is 60px wide, so the box spans x 8..84, y 8..38
        assert_eq!(buf.pixel(40, 8), Some(Color::WHITE));
        assert_eq!(buf.pixel(40, 37), Some(Color::WHITE));
        assert_eq!(buf.pixel(8, 20), Some(Color::WHITE));
        assert_eq!(buf.pixel(83, 20), Some(Color::WHITE));
        assert_eq!(buf.pixel(84, 20), Some(Color::RED));
        assert_eq!(buf.pixel(40, 38), Some(Color::RED));

        // translucent interior darkens the pattern without hiding it
        let inside = buf.pixel(78, 20).unwrap();
        assert!(inside.r > 0 && inside.r < 255);
        assert_eq!(inside.g, 0);
    }

    #[test]
    fn test_indicator_text_is_white() {
        let mut buf = PixelBuffer::try_new(200, 100, 200).unwrap();
        draw_indicator(&mut buf, 1, 19, &Theme::default());
        // top-left cell of '1' (row 0 = 0b0100 -> column 1) at scale 3
        assert_eq!(buf.pixel(16 + 3, 14), Some(Color::WHITE));
        assert_eq!(buf.pixel(16 + 3, 13), Some(Color::BLACK));
    }
}
