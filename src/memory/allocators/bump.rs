use core::alloc::{GlobalAlloc, Layout};
use core::ptr;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::memory::allocators::core::{align_up, validate_region, AllocError};

/// Bump allocator that rewinds once every allocation has been freed.
///
/// The screen test allocates its two pixel buffers once and frees both at
/// shutdown.
///
/// # Safety
/// - Must call `init()` before use; allocations fail until then
/// - Thread-safe through atomic operations
pub struct BumpAllocator {
    heap_start: AtomicUsize,
    heap_end: AtomicUsize,
    next: AtomicUsize,
    live: AtomicUsize,
    initialized: AtomicUsize,
}

impl BumpAllocator {
    pub const fn new() -> Self {
        Self {
            heap_start: AtomicUsize::new(0),
            heap_end: AtomicUsize::new(0),
            next: AtomicUsize::new(0),
            live: AtomicUsize::new(0),
            initialized: AtomicUsize::new(0),
        }
    }

    /// Hand the allocator its memory region.
    ///
    /// # Safety
    /// - `heap_start..heap_start + heap_size` must be valid, unused memory
    ///   that lives for the rest of the program
    pub unsafe fn init(&self, heap_start: usize, heap_size: usize) -> Result<(), AllocError> {
        validate_region(heap_start, heap_size)?;

        if self.initialized.swap(1, Ordering::SeqCst) != 0 {
            return Err(AllocError::AlreadyInitialized);
        }

        self.heap_start.store(heap_start, Ordering::Release);
        self.heap_end.store(heap_start + heap_size, Ordering::Release);
        self.next.store(heap_start, Ordering::Release);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire) != 0
    }

    pub fn used(&self) -> usize {
        let start = self.heap_start.load(Ordering::Acquire);
        self.next.load(Ordering::Acquire).saturating_sub(start)
    }

    pub fn remaining(&self) -> usize {
        let end = self.heap_end.load(Ordering::Acquire);
        end.saturating_sub(self.next.load(Ordering::Acquire))
    }
}

unsafe impl GlobalAlloc for BumpAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if !self.is_initialized() {
            return ptr::null_mut();
        }

        let heap_end = self.heap_end.load(Ordering::Acquire);

        loop {
            let current = self.next.load(Ordering::Acquire);
            let aligned = align_up(current, layout.align());

            let new_next = match aligned.checked_add(layout.size()) {
                Some(n) if n <= heap_end => n,
                _ => return ptr::null_mut(),
            };

            if self
                .next
                .compare_exchange_weak(current, new_next, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                self.live.fetch_add(1, Ordering::AcqRel);
                return aligned as *mut u8;
            }
        }
    }

    unsafe fn dealloc(&self, _ptr: *mut u8, _layout: Layout) {
        if self.live.fetch_sub(1, Ordering::AcqRel) == 1 {
            let start = self.heap_start.load(Ordering::Acquire);
            self.next.store(start, Ordering::Release);
        }
    }
}
