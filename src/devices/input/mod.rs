//! # Input Device Module
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  platform driver │  (ScancodeDecoder for PS/2 keyboards)
//! └────────┬─────────┘
//!          │ held Buttons, once per frame
//!          ▼
//! ┌──────────────────┐
//! │   InputSource    │
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │   EdgeDetector   │──▶ newly pressed Buttons
//! └──────────────────┘
//! ```

pub mod events;
pub mod scancode;

pub use events::*;
pub use scancode::ScancodeDecoder;
