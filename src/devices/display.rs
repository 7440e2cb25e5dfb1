//! # Display Presentation Contract
//!
//! The core never touches scan-out memory directly. It hands a [`Frame`]
//! (a borrowed view of a [`PixelBuffer`](crate::devices::framebuffer::PixelBuffer))
//! to a [`Display`] implementation provided by the platform.
//!
//! ```text
//!   back buffer ──set_frame(Immediate)──▶ display ──▶ panel
//!        ▲                                   │
//!        └────────── swap roles ◀────────────┘ (after vblank)
//! ```

/// Pixel layout tag: 8 bits per channel, 4 channels, alpha ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8888,
}

/// When a submitted frame takes effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentMode {
    Immediate,
    NextVblank,
}

/// Borrowed description of a frame handed to the display.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub pixels: &'a [u32],
    pub stride: usize,
    pub width: usize,
    pub height: usize,
    pub format: PixelFormat,
}

/// Geometry reported by a display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayInfo {
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

pub trait Display {
    fn info(&self) -> DisplayInfo;

    /// Block until the start of the next vertical blank.
    fn wait_vblank(&mut self);

    /// Make `frame` the displayed image, or unbind the display with `None`.
    fn set_frame(&mut self, frame: Option<Frame<'_>>, mode: PresentMode);
}
