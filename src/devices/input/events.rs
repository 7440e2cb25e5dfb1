//! # Input Event Types
//!
//! Button snapshots, rising-edge detection and the actions they map to.
//!
//! The platform samples the currently held buttons once per frame through
//! [`InputSource`]. The core keeps the previous snapshot in an
//! [`EdgeDetector`] and only reacts to buttons that went down this frame.

use bitflags::bitflags;

bitflags! {
    /// Discrete buttons of the handheld control layout.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const CROSS    = 1 << 0;
        const CIRCLE   = 1 << 1;
        const SQUARE   = 1 << 2;
        const TRIANGLE = 1 << 3;
        const SELECT   = 1 << 4;
        const START    = 1 << 5;
        const LTRIGGER = 1 << 6;
        const RTRIGGER = 1 << 7;
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self::empty()
    }
}

impl Buttons {
    /// Advances to the next pattern.
    pub const NEXT: Buttons = Buttons::CROSS.union(Buttons::CIRCLE);
    /// Steps back to the previous pattern.
    pub const PREVIOUS: Buttons = Buttons::SQUARE.union(Buttons::TRIANGLE);
    pub const TOGGLE_INFO: Buttons = Buttons::SELECT;
    pub const FASTER: Buttons = Buttons::RTRIGGER;
    pub const SLOWER: Buttons = Buttons::LTRIGGER;
    pub const EXIT: Buttons = Buttons::START;
    /// Leaves the welcome screen.
    pub const CONFIRM: Buttons = Buttons::NEXT.union(Buttons::START);
}

/// Source of held-button snapshots, polled once per frame.
pub trait InputSource {
    fn sample(&mut self) -> Buttons;
}

/// Turns consecutive snapshots into newly pressed buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    previous: Buttons,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self {
            previous: Buttons::empty(),
        }
    }

    /// Buttons held in `current` that were not held in the previous snapshot.
    pub fn update(&mut self, current: Buttons) -> Buttons {
        let pressed = current & !self.previous;
        self.previous = current;
        pressed
    }
}
