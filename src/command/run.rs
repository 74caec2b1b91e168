use anyhow::{Context, Result};

use crate::constants::defaults;
use crate::helpers::{base_path, listen_for_shutdown};
use crate::interfaces::StateDir;
use crate::scheduler::{run_loop, Station};

fn state_dir() -> StateDir {
    StateDir::new(base_path::DATA_DIR.as_path())
}

/// Polls every interval until interrupted.
pub fn run() -> Result<()> {
    // Mask signals before anything else spawns a thread
    let shutdown = listen_for_shutdown()?;
    let state = state_dir();
    log::info!("Using state directory {}", state.root().display());

    let mut station = Station::open(state)?;
    run_loop(&mut station, &shutdown, defaults::POLL_INTERVAL)
        .context("polling stopped")?;
    log::info!("Stopped");
    Ok(())
}

/// A single iteration, without sleeping.
pub fn fetch() -> Result<()> {
    let mut station = Station::open(state_dir())?;
    station.tick().context("polling stopped")?;
    Ok(())
}
