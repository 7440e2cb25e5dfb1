/// Kernel initialization phases
use log::{error, info};

use screentest::config::FRAME_RATE_HZ;

type Phase = (&'static str, fn() -> Result<(), &'static str>);

const PHASES: [Phase; 2] = [("Heap", init_memory), ("Interrupt System", init_interrupts)];

/// Run every phase in order, stopping at the first failure.
pub fn init_kernel() -> Result<(), &'static str> {
    info!("screentest kernel v{}", env!("CARGO_PKG_VERSION"));
    for (step, (name, init_fn)) in PHASES.iter().enumerate() {
        init_phase(step + 1, *name, *init_fn)?;
    }
    info!("kernel initialization complete");
    Ok(())
}

fn init_phase(step: usize, name: &'static str, init_fn: fn() -> Result<(), &'static str>) -> Result<(), &'static str> {
    info!("[{}/{}] Initializing {}...", step, PHASES.len(), name);
    match init_fn() {
        Ok(()) => {
            info!("    {} ready", name);
            Ok(())
        }
        Err(e) => {
            error!("    {} failed: {}", name, e);
            Err(e)
        }
    }
}

fn init_memory() -> Result<(), &'static str> {
    unsafe { crate::memory::init_heap() }.map_err(|e| {
        error!("heap: {}", e);
        "heap region rejected"
    })
}

fn init_interrupts() -> Result<(), &'static str> {
    crate::interrupts::init(FRAME_RATE_HZ);
    x86_64::instructions::interrupts::enable();
    Ok(())
}
