use anyhow::Result;

use crate::data_mgmt::{Readings, StationSnapshot};
use crate::display::{default_probes, BuiltinDisplay, DisplayView};
use crate::helpers::base_path;
use crate::interfaces::StateDir;
use crate::node_mgmt::config;

/// Renders the saved snapshot with the built-in renderer.
pub fn display() -> Result<()> {
    let state = StateDir::new(base_path::DATA_DIR.as_path());
    let snapshot = StationSnapshot::load(&state)?;
    let readings = Readings::extract(snapshot.payload());
    let view = DisplayView::new(&readings, &config::read_zone(&state));

    BuiltinDisplay::new(default_probes(), state.image_file()).show(&view)?;
    Ok(())
}
