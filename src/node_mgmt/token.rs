use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::{keys, remote_defaults};
use crate::helpers::{read_json, write_json};
use crate::interfaces::StateDir;

/// OAuth token pair. Any other fields the provider returns (expiry, scope)
/// are carried along so the file round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Token {
    fn placeholder() -> Self {
        Token {
            access_token: keys::PLACEHOLDER.into(),
            refresh_token: keys::PLACEHOLDER.into(),
            extra: Map::new(),
        }
    }

    fn is_placeholder(&self) -> bool {
        self.access_token == keys::PLACEHOLDER || self.refresh_token == keys::PLACEHOLDER
    }
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token file {0} not found; a placeholder was written, generate a token and try again")]
    Missing(PathBuf),
    #[error("token file {0} holds no usable token")]
    Unusable(PathBuf),
    #[error("could not access token file: {0}")]
    Io(#[from] io::Error),
}

/// Tells the operator how to create a token by hand. Shown whenever the
/// program cannot continue without one.
pub fn log_bootstrap_instructions(token_path: &Path) {
    log::error!("No valid API token available. To generate one:");
    log::error!(
        "  1. Sign in at {} and open your application",
        remote_defaults::DEV_PORTAL_URL
    );
    log::error!(
        "  2. In the \"Token generator\" section select the scope '{}'",
        remote_defaults::TOKEN_SCOPE
    );
    log::error!("  3. Click \"Generate Token\" and accept the authorization request");
    log::error!(
        "  4. Copy the access token and refresh token into {}",
        token_path.display()
    );
    log::error!("  5. Start this program again");
}

/// Loads `token.json`, writing a placeholder when there is none.
pub fn load(state: &StateDir) -> Result<Token, TokenError> {
    let path = state.token_file();
    if !path.exists() {
        write_json(&path, &Token::placeholder())?;
        log_bootstrap_instructions(&path);
        return Err(TokenError::Missing(path));
    }
    match serde_json::from_value::<Token>(read_json(&path)?) {
        Ok(token) if !token.is_placeholder() => Ok(token),
        Ok(_) => {
            log_bootstrap_instructions(&path);
            Err(TokenError::Unusable(path))
        }
        Err(e) => {
            log::error!("Cannot use {}: {}", path.display(), e);
            log_bootstrap_instructions(&path);
            Err(TokenError::Unusable(path))
        }
    }
}

pub fn save(state: &StateDir, token: &Token) -> Result<(), TokenError> {
    write_json(&state.token_file(), token).map_err(Into::into)
}
