//! Compile-time tunables.
//!
//! There is no runtime configuration: every value the test session depends on
//! is fixed here.

/// Frames the info overlay stays up after it is surfaced (3 s at 60 Hz).
pub const OVERLAY_TIMEOUT_FRAMES: u32 = 180;

pub const DEFAULT_SPEED: u32 = 2;
pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 10;

/// Frames per phase of the black/white inversion pattern.
pub const INVERSION_PERIOD_FRAMES: u32 = 60;

/// Thickness of the sweeping bar, in pixels.
pub const MOVING_BAR_THICKNESS: usize = 64;

pub const SMALL_CHECKER_CELL: usize = 8;
pub const LARGE_CHECKER_CELL: usize = 64;

/// Number of colored bands in the bar patterns.
pub const BAR_COUNT: usize = 8;

/// Number of bands in the grayscale step pattern.
pub const GRAY_LEVELS: usize = 16;

/// Height of the reference card the welcome screen is laid out on.
pub const WELCOME_LAYOUT_HEIGHT: usize = 544;

/// Frame pacing rate of the platform timer.
pub const FRAME_RATE_HZ: u32 = 60;

/// Heap reserved by the kernel for both pixel buffers (enough for two
/// 2560x1600 buffers).
pub const KERNEL_HEAP_SIZE: usize = 64 * 1024 * 1024;
