//! One poll of the station endpoint, including the single refresh-and-retry
//! on an expired access token.

use thiserror::Error;

use super::snapshot::{SnapshotError, StationSnapshot};
use crate::interfaces::{ApiError, NetatmoApi, StateDir};
use crate::node_mgmt::{token, Config, Token, TokenError};

/// Failures that end the polling loop. Everything else is logged and the
/// iteration skipped.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("token refresh was rejected: {0}")]
    RefreshRejected(ApiError),
    #[error(transparent)]
    Token(#[from] TokenError),
}

enum Refresh {
    Done,
    Unreachable,
}

fn fetch_once(
    api: &NetatmoApi,
    config: &Config,
    state: &StateDir,
    token: &Token,
) -> Result<Option<StationSnapshot>, ApiError> {
    let raw = api.station_data(&token.access_token, &config.device_id)?;
    let snapshot = match StationSnapshot::parse(raw) {
        Ok(snapshot) => snapshot,
        Err(SnapshotError::BadShape(e)) => {
            log::error!("Station data response has no usable body, not saving it: {}", e);
            return Ok(None);
        }
        Err(e) => {
            log::error!("Could not parse station data: {}", e);
            return Ok(None);
        }
    };
    if let Err(e) = snapshot.save(state) {
        log::error!("Could not save station data: {}", e);
    }
    Ok(Some(snapshot))
}

fn refresh(
    api: &NetatmoApi,
    config: &Config,
    state: &StateDir,
    token: &mut Token,
) -> Result<Refresh, FetchError> {
    match api.refresh_token(&config.client_id, &config.client_secret, &token.refresh_token) {
        Ok(new_token) => {
            *token = new_token;
            token::save(state, token)?;
            log::info!("Access token refreshed");
            Ok(Refresh::Done)
        }
        Err(ApiError::Transport(e)) => {
            log::error!("Token refresh failed, keeping the current token: {}", e);
            Ok(Refresh::Unreachable)
        }
        Err(e) => {
            log::error!("Token refresh rejected: {}", e);
            token::log_bootstrap_instructions(&state.token_file());
            Err(FetchError::RefreshRejected(e))
        }
    }
}

/// Polls the station once.
///
/// Returns the new snapshot, or `None` when this iteration produced nothing
/// usable. On a 403 the token is refreshed once and, only if that worked, the
/// request is retried once. `token` is updated and persisted on refresh.
pub fn poll(
    api: &NetatmoApi,
    config: &Config,
    state: &StateDir,
    token: &mut Token,
) -> Result<Option<StationSnapshot>, FetchError> {
    match fetch_once(api, config, state, token) {
        Ok(snapshot) => Ok(snapshot),
        Err(e) if e.is_auth_failure() => {
            log::warn!("Access token rejected ({}), refreshing", e);
            match refresh(api, config, state, token)? {
                Refresh::Done => {}
                Refresh::Unreachable => return Ok(None),
            }
            match fetch_once(api, config, state, token) {
                Ok(snapshot) => Ok(snapshot),
                Err(e) => {
                    log::error!("Station data request failed after token refresh: {}", e);
                    Ok(None)
                }
            }
        }
        Err(e) => {
            log::error!("Station data request failed: {}", e);
            Ok(None)
        }
    }
}
