//! Error types for the screen test core
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pixel buffer of `bytes` bytes could not be reserved.
    FramebufferAlloc { bytes: usize },
    /// The row stride is smaller than the logical width.
    InvalidGeometry { width: usize, stride: usize },
    /// The scan-out pixel is too small for its channel layout.
    UnsupportedPixelSize { bytes_per_pixel: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FramebufferAlloc { bytes } => {
                write!(f, "failed to allocate {} byte framebuffer", bytes)
            }
            Error::InvalidGeometry { width, stride } => {
                write!(f, "stride {} is narrower than width {}", stride, width)
            }
            Error::UnsupportedPixelSize { bytes_per_pixel } => {
                write!(f, "unsupported {} byte scan-out pixel", bytes_per_pixel)
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
