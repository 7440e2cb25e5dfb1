//! How the platform ends a run under QEMU
//!
//! | Outcome | Device                       | Write            | QEMU status |
//! |---------|------------------------------|------------------|-------------|
//! | Success | ACPI PM1a control (0x604)    | `0x2000` (u16)   | 0           |
//! | Failure | `isa-debug-exit` (0xf4)      | `0x11` (u32)     | 35          |
//!
//! `isa-debug-exit` reports `(value << 1) | 1`, so it can never produce a
//! zero status; a clean run powers the machine off through ACPI instead.

const ACPI_PM1A_CONTROL_PORT: u16 = 0x604;
/// SLP_TYPa = 0 with SLP_EN set.
const ACPI_SLEEP_S5: u16 = 0x2000;

const ISA_DEBUG_EXIT_PORT: u16 = 0xf4;
const DEBUG_EXIT_FAILURE: u32 = 0x11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

/// A single port write that makes the machine stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerOff {
    Acpi { port: u16, value: u16 },
    DebugExit { port: u16, value: u32 },
}

impl ExitStatus {
    pub fn power_off(self) -> PowerOff {
        match self {
            ExitStatus::Success => PowerOff::Acpi {
                port: ACPI_PM1A_CONTROL_PORT,
                value: ACPI_SLEEP_S5,
            },
            ExitStatus::Failure => PowerOff::DebugExit {
                port: ISA_DEBUG_EXIT_PORT,
                value: DEBUG_EXIT_FAILURE,
            },
        }
    }
}

impl PowerOff {
    /// Process status QEMU exits with after this write.
    pub fn host_status(self) -> u32 {
        match self {
            PowerOff::Acpi { .. } => 0,
            PowerOff::DebugExit { value, .. } => (value << 1) | 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_powers_off_through_acpi() {
        let command = ExitStatus::Success.power_off();
        assert_eq!(command, PowerOff::Acpi { port: 0x604, value: 0x2000 });
        assert_eq!(command.host_status(), 0);
    }

    #[test]
    fn test_failure_uses_debug_exit() {
        let command = ExitStatus::Failure.power_off();
        assert_eq!(command, PowerOff::DebugExit { port: 0xf4, value: 0x11 });
        assert_ne!(command.host_status(), 0);
        assert_eq!(command.host_status(), 35);
    }
}
