//! # User Interface Module
//!
//! Overlays drawn on top of (or instead of) a test pattern.
//!
//! ## Modules
//!
//! - `theme`: colors for the overlay and welcome screen
//! - `widgets`: `Panel` (translucent rounded box) and `Label` (text with
//!   shadow or outline)
//! - `indicator`: the "current/total" pattern badge
//! - `welcome`: the start-up help screen
//!
//! ## Example
//!
//! ```ignore
//! let theme = Theme::default();
//! Pattern::GrayLevels.fill(&mut buf, &anim);
//! draw_indicator(&mut buf, 19, Pattern::COUNT, &theme);
//! ```

pub mod indicator;
pub mod theme;
pub mod welcome;
pub mod widgets;

pub use indicator::{draw_indicator, IndicatorLabel};
pub use theme::Theme;
pub use welcome::{draw_welcome_screen, ControlHint, WelcomeContent};
