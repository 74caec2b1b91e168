//! The polling loop: fetch, report, display, sleep.

use std::time::Duration;

use anyhow::Result;
use flume::RecvTimeoutError;
use nix::sys::signal::Signal;

use crate::data_mgmt::{
    console_line, poll, FetchError, LineStyle, Readings, SnapshotError, StationSnapshot,
};
use crate::display::{self, DisplaySink};
use crate::helpers::Zone;
use crate::interfaces::{NetatmoApi, StateDir};
use crate::node_mgmt::{config, token, Config, Token};

/// Everything one iteration needs, carried from one iteration to the next.
pub struct Station {
    api: NetatmoApi,
    config: Config,
    state: StateDir,
    token: Token,
    zone: Zone,
    snapshot: Option<StationSnapshot>,
    sink: Option<Box<dyn DisplaySink>>,
}

fn previous_snapshot(state: &StateDir) -> Option<StationSnapshot> {
    match StationSnapshot::load(state) {
        Ok(snapshot) => {
            log::debug!("Loaded previous station data");
            Some(snapshot)
        }
        Err(SnapshotError::Missing(_)) => None,
        Err(e) => {
            log::warn!("Ignoring previous station data: {}", e);
            None
        }
    }
}

impl Station {
    pub fn new(
        state: StateDir,
        config: Config,
        token: Token,
        sink: Option<Box<dyn DisplaySink>>,
    ) -> Self {
        Station {
            api: NetatmoApi::new(config.api_base_url()),
            zone: config.zone().unwrap_or_default(),
            snapshot: previous_snapshot(&state),
            config,
            state,
            token,
            sink,
        }
    }

    /// Loads config and token from the state directory. Fails, leaving
    /// placeholders behind, when either is missing.
    pub fn open(state: StateDir) -> Result<Self> {
        let config = config::load(&state)?;
        let token = token::load(&state)?;
        let sink = display::sink_for(&config.display, &state);
        Ok(Station::new(state, config, token, sink))
    }

    /// One iteration. Only a rejected token refresh is an error.
    pub fn tick(&mut self) -> Result<(), FetchError> {
        if let Some(snapshot) = poll(&self.api, &self.config, &self.state, &mut self.token)? {
            self.snapshot = Some(snapshot);
        }
        let Some(snapshot) = &self.snapshot else {
            log::warn!("No station data yet, skipping report and display");
            return Ok(());
        };

        let readings = Readings::extract(snapshot.payload());
        log::info!("{}", console_line(&readings, &self.zone, LineStyle::default()));
        if let Some(sink) = &mut self.sink {
            if let Err(e) = sink.show(&readings, &self.zone) {
                log::error!("Display update failed: {}", e);
            }
        }
        Ok(())
    }
}

/// Runs iterations `interval` apart until a shutdown signal arrives or the
/// channel closes.
pub fn run_loop(
    station: &mut Station,
    shutdown: &flume::Receiver<Signal>,
    interval: Duration,
) -> Result<(), FetchError> {
    loop {
        station.tick()?;
        log::debug!("Next poll in {}s", interval.as_secs());
        match shutdown.recv_timeout(interval) {
            Ok(signal) => {
                log::info!("Received {:?}, shutting down", signal);
                return Ok(());
            }
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}
