use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::constants::{keys, remote_defaults};
use crate::helpers::{read_json, write_json, Zone};
use crate::interfaces::StateDir;

/// What the scheduler does with each snapshot after reporting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayChoice {
    /// Render in-process and push to the first e-paper panel found
    #[default]
    Builtin,
    /// Run an external program from the state directory
    Command {
        program: PathBuf,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Report only
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub device_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default)]
    pub display: DisplayChoice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file {0} not found; a placeholder was written, edit it and try again")]
    Missing(PathBuf),
    #[error("could not access config file: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config key '{0}' still holds the placeholder value")]
    Placeholder(&'static str),
    #[error("invalid timezone '{0}': {1}")]
    Timezone(String, String),
    #[error("invalid api_base_url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

impl Config {
    pub fn zone(&self) -> Result<Zone, ConfigError> {
        match &self.timezone {
            None => Ok(Zone::Local),
            Some(name) => name
                .parse()
                .map_err(|e| ConfigError::Timezone(name.clone(), e)),
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or(remote_defaults::API_BASE_URL)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("device_id", &self.device_id),
        ];
        for (key, value) in required {
            if value.is_empty() || value == keys::PLACEHOLDER {
                return Err(ConfigError::Placeholder(key));
            }
        }
        self.zone()?;
        url::Url::parse(self.api_base_url())?;
        Ok(())
    }
}

pub fn from_value(raw: Value) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_value(raw)?;
    config.validate()?;
    Ok(config)
}

fn placeholder() -> Value {
    json!({
        "client_id": keys::PLACEHOLDER,
        "client_secret": keys::PLACEHOLDER,
        "device_id": keys::PLACEHOLDER,
    })
}

/// Loads `config.json`, writing a placeholder when there is none.
pub fn load(state: &StateDir) -> Result<Config, ConfigError> {
    let path = state.config_file();
    if !path.exists() {
        write_json(&path, &placeholder())?;
        log::error!("Config file not found: created {}", path.display());
        log::error!("Please edit it with your client_id, client_secret and device_id, then try again");
        return Err(ConfigError::Missing(path));
    }
    from_value(read_json(&path)?)
}

/// Timezone for formatting only; falls back to local time when the config is
/// absent or unusable, since rendering needs no credentials.
pub fn read_zone(state: &StateDir) -> Zone {
    let Ok(raw) = read_json(&state.config_file()) else {
        return Zone::Local;
    };
    match raw.get("timezone").and_then(Value::as_str).map(str::parse::<Zone>) {
        Some(Ok(zone)) => zone,
        Some(Err(e)) => {
            log::warn!("Ignoring configured timezone: {}", e);
            Zone::Local
        }
        None => Zone::Local,
    }
}
