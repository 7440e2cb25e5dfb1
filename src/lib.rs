//! # screentest
//!
//! Full-screen display test patterns for checking OLED panels for burn-in,
//! image retention and dead pixels.
//!
//! The crate is the portable core: pattern generation, a 4x6 bitmap font,
//! the overlay and welcome screen, and the double-buffered presentation
//! loop. A platform supplies a [`Display`](devices::display::Display) and an
//! [`InputSource`](devices::input::InputSource); the `kernel` binary does so
//! for bare-metal x86_64.
//!
//! ## Example
//!
//! ```ignore
//! let session = Session::new(display, input, content, Theme::default())?;
//! let (display, input) = session.run();
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod app;
pub mod config;
pub mod devices;
pub mod error;
pub mod font;
pub mod patterns;
pub mod ui;

pub use app::{Session, Stage};
pub use error::{Error, Result};
