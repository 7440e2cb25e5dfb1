//! # Test Pattern Generator
//!
//! Every pattern is a pure fill of the whole visible buffer. Static patterns
//! depend only on the buffer geometry; animated ones also read the shared
//! [`Animation`] state.
//!
//! ## Patterns
//!
//! | # | Pattern              | Checks for                 |
//! |---|----------------------|----------------------------|
//! | 1-8 | solid colors       | dead/stuck sub-pixels, tint |
//! | 9-10 | gray gradients    | banding                    |
//! | 11-12 | checkerboards    | pixel response, retention  |
//! | 13-14 | color bars       | uniformity                 |
//! | 15-16 | moving bars      | ghosting                   |
//! | 17 | color cycle         | burn-in over time          |
//! | 18 | inversion           | image retention            |
//! | 19 | 16 gray steps       | low-level gamma            |
//!
//! Dispatch goes through a static table indexed by [`Pattern`], so adding a
//! pattern means one enum variant and one table row.

pub mod animated;
pub mod bars;
pub mod checker;
pub mod gradient;
pub mod solid;

use crate::config::{DEFAULT_SPEED, LARGE_CHECKER_CELL, SMALL_CHECKER_CELL};
use crate::devices::framebuffer::{Color, PixelBuffer};

/// Animation clock shared by whichever pattern is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    /// Frames since the current pattern was selected.
    pub frame: u32,
    /// Speed multiplier, kept within `MIN_SPEED..=MAX_SPEED`.
    pub speed: u32,
}

impl Animation {
    /// Distance travelled so far: `frame * speed`.
    pub fn offset(&self) -> u64 {
        u64::from(self.frame) * u64::from(self.speed)
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            frame: 0,
            speed: DEFAULT_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Pattern {
    SolidRed,
    SolidGreen,
    SolidBlue,
    SolidWhite,
    SolidBlack,
    SolidCyan,
    SolidMagenta,
    SolidYellow,
    GradientHorizontal,
    GradientVertical,
    CheckerboardSmall,
    CheckerboardLarge,
    HorizontalBars,
    VerticalBars,
    MovingBarHorizontal,
    MovingBarVertical,
    ColorCycle,
    Inversion,
    GrayLevels,
}

type FillFn = fn(&mut PixelBuffer, &Animation);

struct PatternEntry {
    name: &'static str,
    animated: bool,
    fill: FillFn,
}

#[rustfmt::skip]
static PATTERNS: [PatternEntry; Pattern::COUNT] = [
    PatternEntry { name: "Solid red", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::RED) },
    PatternEntry { name: "Solid green", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::GREEN) },
    PatternEntry { name: "Solid blue", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::BLUE) },
    PatternEntry { name: "Solid white", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::WHITE) },
    PatternEntry { name: "Solid black", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::BLACK) },
    PatternEntry { name: "Solid cyan", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::CYAN) },
    PatternEntry { name: "Solid magenta", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::MAGENTA) },
    PatternEntry { name: "Solid yellow", animated: false, fill: |buf, _| solid::fill_solid(buf, Color::YELLOW) },
    PatternEntry { name: "Horizontal gradient", animated: false, fill: |buf, _| gradient::horizontal(buf) },
    PatternEntry { name: "Vertical gradient", animated: false, fill: |buf, _| gradient::vertical(buf) },
    PatternEntry { name: "Checkerboard 8px", animated: false, fill: |buf, _| checker::checkerboard(buf, SMALL_CHECKER_CELL) },
    PatternEntry { name: "Checkerboard 64px", animated: false, fill: |buf, _| checker::checkerboard(buf, LARGE_CHECKER_CELL) },
    PatternEntry { name: "Horizontal bars", animated: false, fill: |buf, _| bars::horizontal_bars(buf) },
    PatternEntry { name: "Vertical bars", animated: false, fill: |buf, _| bars::vertical_bars(buf) },
    PatternEntry { name: "Moving bar (horizontal)", animated: true, fill: animated::moving_bar_horizontal },
    PatternEntry { name: "Moving bar (vertical)", animated: true, fill: animated::moving_bar_vertical },
    PatternEntry { name: "Color cycle", animated: true, fill: animated::color_cycle },
    PatternEntry { name: "Inversion", animated: true, fill: animated::inversion },
    PatternEntry { name: "16 gray levels", animated: false, fill: |buf, _| bars::gray_levels(buf) },
];

impl Pattern {
    pub const COUNT: usize = 19;

    pub const ALL: [Pattern; Pattern::COUNT] = [
        Pattern::SolidRed,
        Pattern::SolidGreen,
        Pattern::SolidBlue,
        Pattern::SolidWhite,
        Pattern::SolidBlack,
        Pattern::SolidCyan,
        Pattern::SolidMagenta,
        Pattern::SolidYellow,
        Pattern::GradientHorizontal,
        Pattern::GradientVertical,
        Pattern::CheckerboardSmall,
        Pattern::CheckerboardLarge,
        Pattern::HorizontalBars,
        Pattern::VerticalBars,
        Pattern::MovingBarHorizontal,
        Pattern::MovingBarVertical,
        Pattern::ColorCycle,
        Pattern::Inversion,
        Pattern::GrayLevels,
    ];

    pub const FIRST: Pattern = Pattern::SolidRed;

    pub fn index(self) -> usize {
        self as usize
    }

    /// Pattern at `index`, wrapping modulo [`Pattern::COUNT`].
    pub fn from_index(index: usize) -> Pattern {
        Self::ALL[index % Self::COUNT]
    }

    pub fn next(self) -> Pattern {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Pattern {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    pub fn name(self) -> &'static str {
        PATTERNS[self.index()].name
    }

    /// Whether the pattern reads the animation clock.
    pub fn is_animated(self) -> bool {
        PATTERNS[self.index()].animated
    }

    /// Fill every visible pixel of `buf` with this pattern.
    pub fn fill(self, buf: &mut PixelBuffer, anim: &Animation) {
        (PATTERNS[self.index()].fill)(buf, anim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_discriminants() {
        for (i, pattern) in Pattern::ALL.iter().enumerate() {
            assert_eq!(pattern.index(), i);
            assert_eq!(Pattern::from_index(i), *pattern);
        }
    }

    #[test]
    fn test_navigation_is_cyclic() {
        for start in Pattern::ALL {
            let mut p = start;
            for _ in 0..Pattern::COUNT {
                p = p.next();
            }
            assert_eq!(p, start);

            for _ in 0..Pattern::COUNT {
                p = p.previous();
            }
            assert_eq!(p, start);
        }
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(Pattern::FIRST.previous(), Pattern::GrayLevels);
        assert_eq!(Pattern::GrayLevels.next(), Pattern::FIRST);
        assert_eq!(Pattern::FIRST.next(), Pattern::SolidGreen);
    }

    #[test]
    fn test_fill_is_deterministic() {
        let anim = Animation { frame: 97, speed: 3 };
        for pattern in Pattern::ALL {
            let mut a = PixelBuffer::try_new(130, 70, 136).unwrap();
            let mut b = PixelBuffer::try_new(130, 70, 136).unwrap();
            pattern.fill(&mut a, &anim);
            pattern.fill(&mut b, &anim);
            pattern.fill(&mut b, &anim);
            assert_eq!(a.pixels(), b.pixels(), "{}", pattern.name());
        }
    }

    #[test]
    fn test_fill_covers_visible_area() {
        let anim = Animation::default();
        for pattern in Pattern::ALL {
            let mut buf = PixelBuffer::try_new(64, 32, 64).unwrap();
            pattern.fill(&mut buf, &anim);
            // every visible pixel is written with an opaque alpha byte
            assert!(buf.pixels().iter().all(|p| p >> 24 == 0xFF), "{}", pattern.name());
        }
    }

    #[test]
    fn test_static_patterns_ignore_clock() {
        for pattern in Pattern::ALL.into_iter().filter(|p| !p.is_animated()) {
            let mut a = PixelBuffer::try_new(40, 30, 40).unwrap();
            let mut b = PixelBuffer::try_new(40, 30, 40).unwrap();
            pattern.fill(&mut a, &Animation { frame: 0, speed: 1 });
            pattern.fill(&mut b, &Animation { frame: 500, speed: 10 });
            assert_eq!(a.pixels(), b.pixels(), "{}", pattern.name());
        }
    }

    #[test]
    fn test_animation_defaults() {
        let anim = Animation::default();
        assert_eq!(anim, Animation { frame: 0, speed: 2 });
        assert_eq!(Animation { frame: 7, speed: 3 }.offset(), 21);
    }
}
