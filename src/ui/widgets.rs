// Minimal widget set drawn straight into a PixelBuffer
use crate::devices::framebuffer::{Color, PixelBuffer, Translucent};
use crate::font::{draw_string, measure_string, TextStyle, GLYPH_HEIGHT};
use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect { pub x: i32, pub y: i32, pub w: usize, pub h: usize }

impl Rect {
    pub fn new(x: i32, y: i32, w: usize, h: usize) -> Self { Self { x, y, w, h } }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(Point::new(self.x, self.y), Size::new(self.w as u32, self.h as u32))
    }
}

/// Box with an optionally translucent fill, rounded corners and a 1px outline.
pub struct Panel { pub rect: Rect, pub fill: Color, pub outline: Option<Color>, pub radius: usize }

impl Panel {
    pub fn new(rect: Rect, fill: Color) -> Self { Self { rect, fill, outline: None, radius: 0 } }
    pub fn with_outline(self, outline: Color) -> Self { Self { outline: Some(outline), ..self } }
    pub fn with_radius(self, radius: usize) -> Self { Self { radius, ..self } }

    pub fn render(&self, buf: &mut PixelBuffer) {
        let radius = self.radius.min(self.rect.w / 2).min(self.rect.h / 2) as u32;
        if radius == 0 {
            self.render_square(buf);
            return;
        }
        let shape = RoundedRectangle::with_equal_corners(self.rect.to_rectangle(), Size::new(radius, radius));

        let fill = PrimitiveStyle::with_fill(self.fill.to_rgb888());
        if self.fill.a == 255 {
            shape.into_styled(fill).draw(buf).ok();
        } else {
            shape.into_styled(fill).draw(&mut Translucent::new(buf, self.fill.a)).ok();
        }

        if let Some(outline) = self.outline {
            let stroke = PrimitiveStyleBuilder::new()
                .stroke_color(outline.to_rgb888())
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside)
                .build();
            shape.into_styled(stroke).draw(buf).ok();
        }
    }

    fn render_square(&self, buf: &mut PixelBuffer) {
        let Rect { x, y, w, h } = self.rect;
        buf.blend_rect(x, y, w, h, self.fill);
        if let Some(outline) = self.outline {
            if w == 0 || h == 0 {
                return;
            }
            buf.fill_rect(x, y, w, 1, outline);
            buf.fill_rect(x, y + h as i32 - 1, w, 1, outline);
            buf.fill_rect(x, y, 1, h, outline);
            buf.fill_rect(x + w as i32 - 1, y, 1, h, outline);
        }
    }
}

/// How a label keeps legible over busy backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextEffect {
    Plain,
    /// Copy of the text offset down and right by `offset` pixels.
    Shadow { color: Color, offset: i32 },
    /// Copies offset by one pixel left, right, up and down.
    Outline(Color),
}

pub struct Label<'a> { pub text: &'a str, pub style: TextStyle, pub effect: TextEffect }

impl<'a> Label<'a> {
    pub fn new(text: &'a str, style: TextStyle) -> Self { Self { text, style, effect: TextEffect::Plain } }
    pub fn with_effect(self, effect: TextEffect) -> Self { Self { effect, ..self } }

    pub fn width(&self) -> usize { measure_string(self.text, self.style.scale) }
    pub fn height(&self) -> usize { GLYPH_HEIGHT * self.style.scale }

    pub fn render(&self, buf: &mut PixelBuffer, x: i32, y: i32) {
        match self.effect {
            TextEffect::Plain => {}
            TextEffect::Shadow { color, offset } => {
                let shadow = self.style.with_foreground(color);
                draw_string(buf, x + offset, y + offset, self.text, &shadow);
            }
            TextEffect::Outline(color) => {
                let outline = self.style.with_foreground(color);
                for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                    draw_string(buf, x + dx, y + dy, self.text, &outline);
                }
            }
        }
        draw_string(buf, x, y, self.text, &self.style);
    }

    /// Draw horizontally centred on a buffer `width` pixels wide.
    pub fn render_centered(&self, buf: &mut PixelBuffer, width: usize, y: i32) {
        let x = (width as i32 - self.width() as i32) / 2;
        self.render(buf, x, y);
    }
}
