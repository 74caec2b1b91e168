use std::{fs, io, path::PathBuf};

use thiserror::Error;

use super::models::StationPayload;
use crate::interfaces::StateDir;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("no station data at {0}; run a fetch first")]
    Missing(PathBuf),
    #[error("station data has no usable 'body': {0}")]
    BadShape(#[from] serde_json::Error),
    #[error("could not access station data: {0}")]
    Io(#[from] io::Error),
}

/// Most recent successful station response, kept both verbatim (for
/// persisting) and parsed (for reporting).
#[derive(Debug, Clone, PartialEq)]
pub struct StationSnapshot {
    raw: String,
    payload: StationPayload,
}

impl StationSnapshot {
    /// Accepts a response body only if it carries a top-level `body` object.
    pub fn parse(raw: String) -> Result<Self, SnapshotError> {
        let payload = serde_json::from_str(&raw)?;
        Ok(StationSnapshot { raw, payload })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn payload(&self) -> &StationPayload {
        &self.payload
    }

    pub fn load(state: &StateDir) -> Result<Self, SnapshotError> {
        let path = state.data_file();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SnapshotError::Missing(path))
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(raw)
    }

    /// Replaces `data.json` with the response exactly as received.
    pub fn save(&self, state: &StateDir) -> Result<(), SnapshotError> {
        fs::write(state.data_file(), &self.raw)?;
        Ok(())
    }
}
