//! Kernel heap backing the two pixel buffers
use log::info;

use screentest::config::KERNEL_HEAP_SIZE;

pub mod allocators;

use allocators::{AllocError, BumpAllocator};

#[repr(align(4096))]
struct HeapBuffer([u8; KERNEL_HEAP_SIZE]);

static mut KERNEL_HEAP_BUFFER: HeapBuffer = HeapBuffer([0; KERNEL_HEAP_SIZE]);

#[global_allocator]
static KERNEL_ALLOCATOR: BumpAllocator = BumpAllocator::new();

/// Serve the global allocator from the static heap region.
///
/// # Safety
/// Must be called once, before the first allocation.
pub unsafe fn init_heap() -> Result<(), AllocError> {
    let start = core::ptr::addr_of_mut!(KERNEL_HEAP_BUFFER) as usize;
    KERNEL_ALLOCATOR.init(start, KERNEL_HEAP_SIZE)?;
    info!("heap: {} KiB at {:#x}", KERNEL_HEAP_SIZE / 1024, start);
    Ok(())
}

pub fn heap_stats() -> (usize, usize) {
    (KERNEL_ALLOCATOR.used(), KERNEL_ALLOCATOR.remaining())
}
