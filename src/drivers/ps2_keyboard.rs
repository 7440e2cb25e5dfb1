//! PS/2 keyboard: IRQ1 scan code queue and the per-frame button sampler
use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use screentest::devices::input::{Buttons, InputSource, ScancodeDecoder};

const BUFFER_SIZE: usize = 256;

// Single producer (IRQ1) / single consumer (frame loop)
static RING_BUF: [AtomicU8; BUFFER_SIZE] = [const { AtomicU8::new(0) }; BUFFER_SIZE];
static HEAD: AtomicUsize = AtomicUsize::new(0);
static TAIL: AtomicUsize = AtomicUsize::new(0);

/// Called from the keyboard interrupt. Drops the byte when the queue is full.
pub fn enqueue_scancode(scancode: u8) {
    let head = HEAD.load(Ordering::Relaxed);
    let next = (head + 1) % BUFFER_SIZE;
    if next != TAIL.load(Ordering::Acquire) {
        RING_BUF[head].store(scancode, Ordering::Relaxed);
        HEAD.store(next, Ordering::Release);
    }
}

pub fn dequeue_scancode() -> Option<u8> {
    let tail = TAIL.load(Ordering::Relaxed);
    if tail == HEAD.load(Ordering::Acquire) {
        return None;
    }
    let sc = RING_BUF[tail].load(Ordering::Relaxed);
    TAIL.store((tail + 1) % BUFFER_SIZE, Ordering::Release);
    Some(sc)
}

/// Keyboard as an [`InputSource`]: drains the queue on every sample.
pub struct KeyboardInput {
    decoder: ScancodeDecoder,
}

impl KeyboardInput {
    pub const fn new() -> Self {
        Self {
            decoder: ScancodeDecoder::new(),
        }
    }
}

impl InputSource for KeyboardInput {
    fn sample(&mut self) -> Buttons {
        while let Some(scancode) = dequeue_scancode() {
            self.decoder.process_scancode(scancode);
        }
        self.decoder.buttons()
    }
}
