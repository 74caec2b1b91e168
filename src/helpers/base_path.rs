use std::{env, path::PathBuf};

use once_cell::sync::Lazy;

use crate::constants::{defaults, envvars};

pub static DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    if let Ok(data_dir) = env::var(envvars::DATA_DIR) {
        return data_dir.into();
    }
    PathBuf::from(".")
});

pub static EPD_PATH: Lazy<PathBuf> = Lazy::new(|| {
    env::var(envvars::EPD_PATH)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(defaults::EPD_PATH))
});
