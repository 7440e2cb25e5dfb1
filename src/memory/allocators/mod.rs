//! # Memory Allocators
//!
//! ### BumpAllocator
//! - Pointer-increment allocation, no per-block free
//! - Rewinds to the start of the heap when the live count drops to zero
//!
//! ## Core Utilities
//!
//! - `AllocError`: heap setup failures
//! - `align_up`, `validate_region`

mod bump;
mod core;

pub use self::core::AllocError;
pub use bump::BumpAllocator;
