//! # Test Session
//!
//! The presentation loop and the state it mutates.
//!
//! ## Stages
//!
//! ```text
//! ┌─────────┐  CROSS/CIRCLE/START  ┌─────────┐  START  ┌────────────┐
//! │ Welcome │ ───────────────────▶ │ Running │ ──────▶ │ Terminated │
//! └─────────┘                      └─────────┘         └────────────┘
//! ```
//!
//! ## Frame Order
//!
//! 1. Sample held buttons and keep only the new presses
//! 2. Apply navigation, overlay and speed actions (exit stops here)
//! 3. Advance the animation clock and the overlay countdown
//! 4. Draw the pattern and overlay into the back buffer
//! 5. Wait for vblank, present the back buffer and swap roles

pub mod session;
pub mod state;

pub use session::{Session, Stage};
pub use state::{Flow, Overlay, TestState};
