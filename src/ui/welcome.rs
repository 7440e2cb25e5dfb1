//! Welcome and help screen shown before the first pattern
use crate::config::WELCOME_LAYOUT_HEIGHT;
use crate::devices::framebuffer::{Color, PixelBuffer};
use crate::font::{measure_string, TextStyle};
use crate::ui::theme::Theme;
use crate::ui::widgets::{Label, Panel, Rect, TextEffect};

/// One line of the control legend.
#[derive(Debug, Clone, Copy)]
pub struct ControlHint<'a> {
    pub keys: &'a str,
    pub action: &'a str,
}

/// Everything the welcome screen prints. Supplied by the platform so the
/// legend names its own keys.
#[derive(Debug, Clone, Copy)]
pub struct WelcomeContent<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub controls: &'a [ControlHint<'a>],
    pub prompt: &'a str,
    pub credits: &'a str,
}

const TITLE_Y: i32 = 80;
const SUBTITLE_Y: i32 = 160;
const BOX_Y: i32 = 220;
const BOX_MIN_W: usize = 400;
const BOX_MIN_H: usize = 180;
const LEGEND_TOP: i32 = 45;
const LEGEND_STEP: i32 = 25;
const LEGEND_INSET: i32 = 30;
const COLUMN_GAP: usize = 24;
const PROMPT_Y: i32 = 440;
const CREDITS_Y: i32 = 500;

/// Vertical blue gradient behind the welcome text.
fn draw_backdrop(buf: &mut PixelBuffer, theme: &Theme) {
    let height = buf.height().max(1);
    let base = theme.backdrop;
    for (y, row) in buf.rows_mut().enumerate() {
        let blue = base.b.saturating_add((y * theme.backdrop_ramp as usize / height) as u8);
        row.fill(Color::new(base.r, base.g, blue).to_packed());
    }
}

/// Render the welcome screen over the whole buffer.
///
/// The layout is designed for a 544 pixel tall screen and is centred
/// vertically on taller ones.
pub fn draw_welcome_screen(buf: &mut PixelBuffer, content: &WelcomeContent<'_>, theme: &Theme) {
    let width = buf.width();
    let top = (buf.height().saturating_sub(WELCOME_LAYOUT_HEIGHT) / 2) as i32;

    draw_backdrop(buf, theme);

    Label::new(content.title, TextStyle::new(5, theme.title))
        .with_effect(TextEffect::Shadow { color: theme.shadow, offset: 2 })
        .render_centered(buf, width, top + TITLE_Y);

    Label::new(content.subtitle, TextStyle::new(3, theme.text))
        .with_effect(TextEffect::Shadow { color: theme.shadow, offset: 1 })
        .render_centered(buf, width, top + SUBTITLE_Y);

    // Controls legend: two columns, key names then actions
    let legend = TextStyle::new(2, theme.text);
    let key_col = content
        .controls
        .iter()
        .map(|hint| measure_string(hint.keys, legend.scale))
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;
    let action_col = content
        .controls
        .iter()
        .map(|hint| measure_string(hint.action, legend.scale))
        .max()
        .unwrap_or(0);

    let box_w = BOX_MIN_W.max(key_col + action_col + 2 * LEGEND_INSET as usize);
    let box_h = BOX_MIN_H.max((LEGEND_TOP + LEGEND_STEP * content.controls.len() as i32) as usize);
    let box_x = (width as i32 - box_w as i32) / 2;
    let box_y = top + BOX_Y;

    Panel::new(Rect::new(box_x, box_y, box_w, box_h), theme.panel)
        .with_outline(theme.outline)
        .with_radius(8)
        .render(buf);

    Label::new("CONTROLS", TextStyle::new(2, theme.heading)).render_centered(buf, width, box_y + 12);

    let mut line_y = box_y + LEGEND_TOP;
    for hint in content.controls {
        let text_x = box_x + LEGEND_INSET;
        // bullet, vertically centred on the 12px tall line
        buf.fill_rect(text_x - 14, line_y + 4, 4, 4, theme.heading);
        Label::new(hint.keys, legend).render(buf, text_x, line_y);
        Label::new(hint.action, legend).render(buf, text_x + key_col as i32, line_y);
        line_y += LEGEND_STEP;
    }

    Label::new(content.prompt, TextStyle::new(2, theme.prompt))
        .with_effect(TextEffect::Shadow { color: theme.shadow, offset: 1 })
        .render_centered(buf, width, top + PROMPT_Y);

    Label::new(content.credits, TextStyle::new(1, theme.credits)).render_centered(buf, width, top + CREDITS_Y);
}
