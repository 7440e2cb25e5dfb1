//! # Interrupt Handling
//!
//! - **GDT**: code/data segments and a TSS whose IST holds the double-fault stack
//! - **IDT**: exception handlers plus the timer and keyboard IRQs
//! - **PIC**: 8259 pair remapped to vectors 32-47
//! - **Timer**: PIT channel 0 ticking at the frame rate

pub mod gdt;
pub mod interrupts;
pub mod pic;
pub mod timer;

pub fn init(frame_rate_hz: u32) {
    gdt::init();
    interrupts::init_idt();
    pic::init();
    timer::init(frame_rate_hz);
}
