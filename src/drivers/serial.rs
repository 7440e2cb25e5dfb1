//! COM1 serial output and the `log` backend
use core::fmt::Write;

use log::{LevelFilter, Log, Metadata, Record};
use spin::Mutex;
use uart_16550::SerialPort;

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(0x3F8) });

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut serial = $crate::drivers::serial::SERIAL.lock();
        let _ = writeln!(serial, $($arg)*);
    }};
}

static SERIAL_LOGGER: SerialLogger = SerialLogger;

struct SerialLogger;

impl Log for SerialLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // the port lock is also taken by println!; never log with it held
        let mut serial = SERIAL.lock();
        let _ = writeln!(serial, "[{:<5}] {}: {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Program the UART and route the `log` facade to it.
pub fn init() -> Result<(), log::SetLoggerError> {
    SERIAL.lock().init();
    log::set_logger(&SERIAL_LOGGER)?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
