//! # Framebuffer Graphics Module
//!
//! Software pixel buffers the patterns and overlays are drawn into.
//!
//! ## Modules
//!
//! - `framebuffer`: [`PixelBuffer`], an `embedded_graphics` draw target
//! - `double_buffer`: front/back [`DoubleBuffer`] with role swapping
//! - `color`: `Color` type with common color constants
//!
//! ## Pixel Layout
//!
//! Each pixel is one `u32` holding R, G, B and an opaque alpha byte in
//! memory order. Rows are `stride` pixels apart, which may exceed the
//! visible width.

pub mod color;
pub mod double_buffer;
pub mod framebuffer;

pub use color::Color;
pub use double_buffer::{DoubleBuffer, Slot};
pub use framebuffer::{PixelBuffer, Translucent};
