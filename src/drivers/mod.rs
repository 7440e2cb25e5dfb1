//! # Device Drivers
//!
//! | Driver        | Hardware                   | Provides                 |
//! |---------------|----------------------------|--------------------------|
//! | `display`     | bootloader framebuffer     | `Display`                |
//! | `ps2_keyboard`| PS/2 keyboard (IRQ1)       | `InputSource`            |
//! | `serial`      | 16550 UART at COM1         | `println!`, `log` output |
//! | `qemu`        | `isa-debug-exit` port 0xf4 | exit status              |

pub mod display;
pub mod ps2_keyboard;
pub mod qemu;
pub mod serial;
