use std::path::{Path, PathBuf};

use crate::constants::keys;

/// Directory holding the JSON state files and the rendered bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDir(PathBuf);

impl StateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        StateDir(root.into())
    }

    pub fn root(&self) -> &Path {
        &self.0
    }

    pub fn config_file(&self) -> PathBuf {
        self.0.join(keys::CONFIG_FILE)
    }

    pub fn token_file(&self) -> PathBuf {
        self.0.join(keys::TOKEN_FILE)
    }

    pub fn data_file(&self) -> PathBuf {
        self.0.join(keys::DATA_FILE)
    }

    pub fn image_file(&self) -> PathBuf {
        self.0.join(keys::IMAGE_FILE)
    }
}
