/// Alignment helpers and error types shared by the allocators

#[inline]
pub(crate) const fn align_up(addr: usize, align: usize) -> usize {
    (addr + align - 1) & !(align - 1)
}

/// Validates that a memory region is usable as a heap
pub(crate) fn validate_region(start: usize, size: usize) -> Result<(), AllocError> {
    if start == 0 {
        return Err(AllocError::InvalidAddress);
    }
    if size == 0 {
        return Err(AllocError::InvalidSize);
    }
    start.checked_add(size).ok_or(AllocError::Overflow)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    InvalidAddress,
    InvalidSize,
    Overflow,
    AlreadyInitialized,
}

impl core::fmt::Display for AllocError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            AllocError::InvalidAddress => "heap region starts at null",
            AllocError::InvalidSize => "heap region is empty",
            AllocError::Overflow => "heap region wraps the address space",
            AllocError::AlreadyInitialized => "heap already initialized",
        };
        f.write_str(msg)
    }
}
