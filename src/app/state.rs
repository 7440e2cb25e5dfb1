//! Pattern, animation and overlay state mutated once per frame
use log::{debug, info};

use crate::config::{MAX_SPEED, MIN_SPEED, OVERLAY_TIMEOUT_FRAMES};
use crate::devices::framebuffer::PixelBuffer;
use crate::devices::input::Buttons;
use crate::patterns::{Animation, Pattern};
use crate::ui::{draw_indicator, Theme};

/// Visibility of the pattern indicator and its auto-hide countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub visible: bool,
    /// Frames left before the overlay hides itself; 0 means no countdown.
    pub timer: u32,
}

impl Overlay {
    /// Show the overlay and restart the countdown.
    pub fn surface(&mut self) {
        self.visible = true;
        self.timer = OVERLAY_TIMEOUT_FRAMES;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.timer = if self.visible { OVERLAY_TIMEOUT_FRAMES } else { 0 };
    }

    /// Count one frame down, hiding the overlay when the timer runs out.
    pub fn tick(&mut self) {
        if self.timer > 0 {
            self.timer -= 1;
            if self.timer == 0 {
                self.visible = false;
            }
        }
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            visible: true,
            timer: OVERLAY_TIMEOUT_FRAMES,
        }
    }
}

/// Whether the loop keeps going after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestState {
    pub pattern: Pattern,
    pub animation: Animation,
    pub overlay: Overlay,
}

impl TestState {
    pub fn new() -> Self {
        Self {
            pattern: Pattern::FIRST,
            animation: Animation::default(),
            overlay: Overlay::default(),
        }
    }

    fn select(&mut self, pattern: Pattern) {
        self.pattern = pattern;
        self.animation.frame = 0;
        self.overlay.surface();
        info!(
            "pattern {}/{}: {}",
            pattern.index() + 1,
            Pattern::COUNT,
            pattern.name()
        );
    }

    fn set_speed(&mut self, speed: u32) {
        self.animation.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self.overlay.surface();
        debug!("animation speed {}", self.animation.speed);
    }

    /// Apply the buttons pressed this frame.
    pub fn apply(&mut self, pressed: Buttons) -> Flow {
        if pressed.intersects(Buttons::NEXT) {
            self.select(self.pattern.next());
        }
        if pressed.intersects(Buttons::PREVIOUS) {
            self.select(self.pattern.previous());
        }
        if pressed.intersects(Buttons::TOGGLE_INFO) {
            self.overlay.toggle();
            debug!("overlay {}", if self.overlay.visible { "shown" } else { "hidden" });
        }
        if pressed.intersects(Buttons::FASTER) {
            self.set_speed(self.animation.speed + 1);
        }
        if pressed.intersects(Buttons::SLOWER) {
            self.set_speed(self.animation.speed.saturating_sub(1));
        }
        if pressed.intersects(Buttons::EXIT) {
            return Flow::Exit;
        }
        Flow::Continue
    }

    /// Advance the animation clock and the overlay countdown by one frame.
    pub fn tick(&mut self) {
        self.animation.frame = self.animation.frame.wrapping_add(1);
        self.overlay.tick();
    }

    /// Draw the current pattern, plus the indicator when it is visible.
    pub fn render(&self, buf: &mut PixelBuffer, theme: &Theme) {
        self.pattern.fill(buf, &self.animation);
        if self.overlay.visible {
            draw_indicator(buf, self.pattern.index() + 1, Pattern::COUNT, theme);
        }
    }
}

impl Default for TestState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::framebuffer::Color;

    #[test]
    fn test_initial_state() {
        let state = TestState::new();
        assert_eq!(state.pattern.index(), 0);
        assert_eq!(state.animation, Animation { frame: 0, speed: 2 });
        assert_eq!(state.overlay, Overlay { visible: true, timer: 180 });
    }

    #[test]
    fn test_next_resets_frame_and_overlay() {
        let mut state = TestState::new();
        state.animation.frame = 42;
        state.overlay = Overlay { visible: false, timer: 0 };

        assert_eq!(state.apply(Buttons::CROSS), Flow::Continue);
        assert_eq!(state.pattern.index(), 1);
        assert_eq!(state.animation.frame, 0);
        assert_eq!(state.overlay, Overlay { visible: true, timer: 180 });

        state.apply(Buttons::CIRCLE);
        assert_eq!(state.pattern.index(), 2);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut state = TestState::new();
        state.apply(Buttons::SQUARE);
        assert_eq!(state.pattern.index(), 18);
        assert_eq!(state.pattern, Pattern::GrayLevels);
        state.apply(Buttons::TRIANGLE);
        assert_eq!(state.pattern.index(), 17);
    }

    #[test]
    fn test_next_and_previous_cancel() {
        let mut state = TestState::new();
        state.apply(Buttons::CROSS | Buttons::SQUARE);
        assert_eq!(state.pattern, Pattern::FIRST);
    }

    #[test]
    fn test_toggle_overlay() {
        let mut state = TestState::new();
        state.apply(Buttons::SELECT);
        assert_eq!(state.overlay, Overlay { visible: false, timer: 0 });
        state.apply(Buttons::SELECT);
        assert_eq!(state.overlay, Overlay { visible: true, timer: 180 });
    }

    #[test]
    fn test_speed_clamps() {
        let mut state = TestState::new();
        for _ in 0..20 {
            state.apply(Buttons::RTRIGGER);
        }
        assert_eq!(state.animation.speed, MAX_SPEED);
        for _ in 0..20 {
            state.apply(Buttons::LTRIGGER);
        }
        assert_eq!(state.animation.speed, MIN_SPEED);

        state.overlay = Overlay { visible: false, timer: 0 };
        state.apply(Buttons::LTRIGGER);
        assert!(state.overlay.visible);
        assert_eq!(state.overlay.timer, 180);
    }

    #[test]
    fn test_exit_after_other_actions() {
        let mut state = TestState::new();
        assert_eq!(state.apply(Buttons::START | Buttons::CROSS), Flow::Exit);
        assert_eq!(state.pattern.index(), 1);
    }

    #[test]
    fn test_overlay_auto_hide() {
        let mut state = TestState::new();
        state.overlay.surface();
        for _ in 0..179 {
            state.tick();
        }
        assert!(state.overlay.visible);
        state.tick();
        assert!(!state.overlay.visible);
        state.tick();
        assert_eq!(state.overlay.timer, 0);
        assert!(!state.overlay.visible);
    }

    #[test]
    fn test_toggle_on_survives_without_countdown_reset() {
        let mut overlay = Overlay { visible: true, timer: 0 };
        overlay.tick();
        assert!(overlay.visible);
    }

    #[test]
    fn test_tick_advances_frame() {
        let mut state = TestState::new();
        state.tick();
        state.tick();
        assert_eq!(state.animation.frame, 2);
    }

    #[test]
    fn test_render_with_and_without_overlay() {
        let mut buf = PixelBuffer::try_new(120, 60, 120).unwrap();
        let mut state = TestState::new();
        let theme = Theme::default();

        state.render(&mut buf, &theme);
        assert_eq!(buf.pixel(119, 59), Some(Color::RED));
        assert_eq!(buf.pixel(30, 8), Some(Color::WHITE));

        state.overlay = Overlay { visible: false, timer: 0 };
        state.render(&mut buf, &theme);
        assert_eq!(buf.pixel(30, 8), Some(Color::RED));
    }
}
