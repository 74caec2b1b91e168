use anyhow::{anyhow, Result};
use env_logger::Env;

use netatmo_display::argsets::ReportArgs;
use netatmo_display::command;
use netatmo_display::constants::{defaults, envvars};
use netatmo_display::helpers::load_dotenv;

const CMD_RUN: &str = "run";
const CMD_FETCH: &str = "fetch";
const CMD_REPORT: &str = "report";
const CMD_DISPLAY: &str = "display";

fn main() -> Result<()> {
    let dotenv_paths = load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();
    for path in dotenv_paths {
        log::debug!("Loaded environment from {}", path.display());
    }

    let mut args = pico_args::Arguments::from_env();
    let subcommand = args.subcommand()?;
    log::info!(
        "{} v{} starting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    match subcommand.as_deref() {
        None | Some(CMD_RUN) => command::run(),
        Some(CMD_FETCH) => command::fetch(),
        Some(CMD_REPORT) => command::report(ReportArgs {
            units: args.contains("--units"),
        }),
        Some(CMD_DISPLAY) => command::display(),
        Some(other) => Err(anyhow!(
            "Unknown subcommand '{}'; must be one of 'run', 'fetch', 'report', 'display'",
            other
        )),
    }
}
