use crate::devices::framebuffer::color::Color;

/// Colors used by the overlay and the welcome screen
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Backdrop color at the top edge; blue deepens towards the bottom.
    pub backdrop: Color,
    /// Extra blue added across the full backdrop height.
    pub backdrop_ramp: u8,
    pub title: Color,
    pub text: Color,
    pub heading: Color,
    pub prompt: Color,
    pub credits: Color,
    pub shadow: Color,
    /// Translucent fill of the controls box (alpha is used).
    pub panel: Color,
    /// Translucent fill of the pattern indicator (alpha is used).
    pub indicator: Color,
    pub outline: Color,
}

impl Theme {
    /// Dark blue theme with high-contrast text
    pub fn dark_blue() -> Self {
        Self {
            backdrop: Color::from_hex(0x0A0F28),
            backdrop_ramp: 30,
            title: Color::CYAN,
            text: Color::WHITE,
            heading: Color::YELLOW,
            prompt: Color::GREEN,
            credits: Color::GRAY,
            shadow: Color::BLACK,
            panel: Color::with_alpha(0, 0, 0, 0xC0),
            indicator: Color::with_alpha(0, 0, 0, 0xD0),
            outline: Color::WHITE,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_blue_backdrop() {
        let theme = Theme::dark_blue();
        assert_eq!(theme.backdrop, Color::new(10, 15, 40));
        assert_eq!(theme.backdrop.a, 255);
        assert_eq!(theme.panel.a, 0xC0);
        assert_eq!(theme.indicator.a, 0xD0);
    }
}
