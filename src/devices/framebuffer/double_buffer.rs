//! Two pixel buffers alternating between the drawing and display roles
use crate::devices::display::{Display, PresentMode};
use crate::devices::framebuffer::framebuffer::PixelBuffer;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

/// Front/back buffer pair. Drawing only ever targets the back slot.
pub struct DoubleBuffer {
    slots: [PixelBuffer; 2],
    back: Slot,
}

impl DoubleBuffer {
    pub fn try_new(width: usize, height: usize, stride: usize) -> Result<Self> {
        let first = PixelBuffer::try_new(width, height, stride)?;
        let second = PixelBuffer::try_new(width, height, stride)?;
        Ok(Self {
            slots: [first, second],
            back: Slot::Second,
        })
    }

    pub fn back_slot(&self) -> Slot {
        self.back
    }

    pub fn front(&self) -> &PixelBuffer {
        &self.slots[self.back.other().index()]
    }

    pub fn back(&self) -> &PixelBuffer {
        &self.slots[self.back.index()]
    }

    pub fn back_mut(&mut self) -> &mut PixelBuffer {
        &mut self.slots[self.back.index()]
    }

    pub fn swap(&mut self) {
        self.back = self.back.other();
    }

    /// Show the front buffer once the display reaches its next vblank.
    pub fn bind<D: Display>(&self, display: &mut D) {
        display.set_frame(Some(self.front().frame()), PresentMode::NextVblank);
    }

    /// Wait for vblank, show the back buffer, then draw into the other one.
    pub fn present<D: Display>(&mut self, display: &mut D) {
        display.wait_vblank();
        display.set_frame(Some(self.back().frame()), PresentMode::Immediate);
        self.swap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::display::{DisplayInfo, Frame};
    use crate::devices::framebuffer::color::Color;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        vblanks: usize,
        shown: Vec<(u32, PresentMode)>,
    }

    impl Display for Recorder {
        fn info(&self) -> DisplayInfo {
            DisplayInfo { width: 4, height: 4, stride: 4 }
        }

        fn wait_vblank(&mut self) {
            self.vblanks += 1;
        }

        fn set_frame(&mut self, frame: Option<Frame<'_>>, mode: PresentMode) {
            if let Some(frame) = frame {
                self.shown.push((frame.pixels[0], mode));
            }
        }
    }

    #[test]
    fn test_present_swaps_roles() {
        let mut buffers = DoubleBuffer::try_new(4, 4, 4).unwrap();
        let mut display = Recorder::default();
        assert_eq!(buffers.back_slot(), Slot::Second);

        buffers.back_mut().fill(Color::RED);
        buffers.present(&mut display);
        assert_eq!(buffers.back_slot(), Slot::First);
        assert_eq!(buffers.front().pixel(0, 0), Some(Color::RED));

        buffers.back_mut().fill(Color::BLUE);
        buffers.present(&mut display);
        assert_eq!(buffers.front().pixel(0, 0), Some(Color::BLUE));
        assert_eq!(buffers.back().pixel(0, 0), Some(Color::RED));

        assert_eq!(display.vblanks, 2);
        assert_eq!(
            display.shown,
            [
                (Color::RED.to_packed(), PresentMode::Immediate),
                (Color::BLUE.to_packed(), PresentMode::Immediate)
            ]
        );
    }

    #[test]
    fn test_bind_waits_for_vblank() {
        let buffers = DoubleBuffer::try_new(4, 4, 4).unwrap();
        let mut display = Recorder::default();
        buffers.bind(&mut display);
        assert_eq!(display.vblanks, 0);
        assert_eq!(display.shown, [(0, PresentMode::NextVblank)]);
    }
}
