//! Machine power-off: ACPI shutdown on success, `isa-debug-exit` on failure
use x86_64::instructions::port::Port;

use screentest::devices::power::{ExitStatus, PowerOff};

/// Stop the machine; if the write is not decoded the CPU halts instead.
pub fn exit(status: ExitStatus) -> ! {
    match status.power_off() {
        PowerOff::Acpi { port, value } => unsafe { Port::<u16>::new(port).write(value) },
        PowerOff::DebugExit { port, value } => unsafe { Port::<u32>::new(port).write(value) },
    }
    halt_loop()
}

pub fn halt_loop() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}
