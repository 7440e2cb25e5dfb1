//! Display, framebuffer and input abstractions shared by the core and the
//! platform glue.

pub mod display;
pub mod framebuffer;
pub mod input;
pub mod power;
pub mod scanout;
