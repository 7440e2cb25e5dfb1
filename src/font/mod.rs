//! # Bitmap Font
//!
//! A 4x6 pixel font for printable ASCII, blitted at integer scales.
//! Characters outside the table draw as blanks; pixels outside the target
//! buffer are dropped.

pub mod glyphs;
pub mod render;

pub use glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH};
pub use render::{advance, draw_glyph, draw_string, line_height, measure_string, TextStyle};
