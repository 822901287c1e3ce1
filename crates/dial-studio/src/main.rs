use std::process;

use anyhow::Context;
use dial_clock::{ClockApp, ClockStyle};
use dial_engine::device::GpuInit;
use dial_engine::logging::{init_logging, LoggingConfig};
use dial_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig::default();
    let size = config.initial_size;
    let app = ClockApp::new(size.width as f32, size.height as f32, ClockStyle::default());

    // The runtime notices the stop at its next wake-up, at most one tick away.
    // A second Ctrl-C does not wait.
    let stop = app.stop_handle();
    ctrlc::set_handler(move || {
        if stop.is_stopped() {
            process::exit(1);
        }
        log::info!("stopping; press Ctrl-C again to quit immediately");
        stop.stop();
    })
    .context("failed to install Ctrl-C handler")?;

    log::info!("starting dial ({}x{})", size.width, size.height);
    Runtime::run(config, GpuInit::default(), app)?;
    log::info!("clock stopped");

    Ok(())
}
