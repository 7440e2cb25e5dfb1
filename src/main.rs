#![no_std]
#![no_main]
#![feature(abi_x86_interrupt)]

extern crate alloc;
extern crate rlibc;

use bootloader_api::config::BootloaderConfig;
use bootloader_api::{entry_point, BootInfo};
use core::panic::PanicInfo;
use log::{error, info};

use screentest::ui::{ControlHint, Theme, WelcomeContent};
use screentest::devices::power::ExitStatus;
use screentest::Session;

use crate::drivers::display::BootDisplay;
use crate::drivers::ps2_keyboard::KeyboardInput;
use crate::drivers::qemu;
use crate::kernel::init_kernel;

mod drivers;
mod interrupts;
mod kernel;
mod memory;

pub static BOOTLOADER_CONFIG: BootloaderConfig = {
    let mut config = BootloaderConfig::new_default();
    config.kernel_stack_size = 256 * 1024;
    config
};

entry_point!(kernel_main, config = &BOOTLOADER_CONFIG);

const CONTROLS: [ControlHint<'static>; 6] = [
    ControlHint { keys: "Enter / Right", action: "Next pattern" },
    ControlHint { keys: "Backspace / Left", action: "Previous pattern" },
    ControlHint { keys: "Tab", action: "Toggle info" },
    ControlHint { keys: "] / E", action: "Faster animation" },
    ControlHint { keys: "[ / Q", action: "Slower animation" },
    ControlHint { keys: "Esc", action: "Exit" },
];

const WELCOME: WelcomeContent<'static> = WelcomeContent {
    title: "Screen Test",
    subtitle: "OLED burn-in & dead pixel check",
    controls: &CONTROLS,
    prompt: "Press ENTER to start...",
    credits: concat!("screentest v", env!("CARGO_PKG_VERSION")),
};

fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
    if drivers::serial::init().is_err() {
        println!("logger already installed");
    }

    if init_kernel().is_err() {
        println!("Kernel initialization failed!");
        qemu::exit(ExitStatus::Failure);
    }

    let Some(framebuffer) = boot_info.framebuffer.take() else {
        error!("bootloader provided no framebuffer");
        qemu::exit(ExitStatus::Failure);
    };

    let display = BootDisplay::new(framebuffer);
    let session = match Session::new(display, KeyboardInput::new(), WELCOME, Theme::dark_blue()) {
        Ok(session) => session,
        Err(e) => {
            error!("cannot start screen test: {}", e);
            qemu::exit(ExitStatus::Failure);
        }
    };

    let _ = session.run();

    let (used, remaining) = memory::heap_stats();
    info!("screen test finished (heap in use: {} bytes, {} free)", used, remaining);
    qemu::exit(ExitStatus::Success)
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    println!("PANIC : {} | {:?}", info.message(), info.location());
    qemu::exit(ExitStatus::Failure)
}
