use anyhow::Result;

use crate::argsets::ReportArgs;
use crate::data_mgmt::{console_line, LineStyle, Readings, StationSnapshot};
use crate::helpers::base_path;
use crate::interfaces::StateDir;
use crate::node_mgmt::config;

/// Prints the console line for the saved snapshot.
pub fn report(args: ReportArgs) -> Result<()> {
    let state = StateDir::new(base_path::DATA_DIR.as_path());
    let snapshot = StationSnapshot::load(&state)?;
    let readings = Readings::extract(snapshot.payload());
    let line = console_line(
        &readings,
        &config::read_zone(&state),
        LineStyle { units: args.units },
    );
    println!("{}", line);
    Ok(())
}
