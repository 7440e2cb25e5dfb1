//! PIT channel 0 as the frame clock
use core::sync::atomic::{AtomicU64, Ordering};

use x86_64::instructions::port::Port;

const PIT_FREQUENCY_HZ: u32 = 1_193_182;
const PIT_CHANNEL_0: u16 = 0x40;
const PIT_COMMAND: u16 = 0x43;
/// Channel 0, lobyte/hibyte access, mode 3 (square wave).
const PIT_MODE_3: u8 = 0x36;

static TIMER_TICKS: AtomicU64 = AtomicU64::new(0);

pub fn init(frequency_hz: u32) {
    let divisor = (PIT_FREQUENCY_HZ / frequency_hz).clamp(1, u32::from(u16::MAX)) as u16;
    let [lo, hi] = divisor.to_le_bytes();
    unsafe {
        Port::<u8>::new(PIT_COMMAND).write(PIT_MODE_3);
        let mut channel = Port::<u8>::new(PIT_CHANNEL_0);
        channel.write(lo);
        channel.write(hi);
    }
}

pub fn tick() {
    TIMER_TICKS.fetch_add(1, Ordering::Relaxed);
}

pub fn ticks() -> u64 {
    TIMER_TICKS.load(Ordering::Relaxed)
}

/// Halt until the timer interrupt fires again. Interrupts must be enabled.
pub fn wait_next_tick() {
    let start = ticks();
    while ticks() == start {
        x86_64::instructions::hlt();
    }
}
