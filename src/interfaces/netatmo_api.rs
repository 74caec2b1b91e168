use thiserror::Error;
use ureq::http::Response;
use ureq::tls::{TlsConfig, TlsProvider};
use ureq::Body;

use crate::constants::{defaults, remote_defaults};
use crate::node_mgmt::Token;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] ureq::Error),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The provider answers 403 for an invalid or expired access token.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Status { status: 403, .. })
    }
}

/// Blocking client for the two provider endpoints this program needs.
pub struct NetatmoApi {
    agent: ureq::Agent,
    base_url: String,
}

fn get_ureq_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .tls_config(
            TlsConfig::builder()
                .provider(TlsProvider::NativeTls)
                .build(),
        )
        .timeout_global(Some(defaults::API_REQUEST_TIMEOUT))
        // Status codes are inspected by the caller so that error bodies can be logged
        .http_status_as_error(false)
        .build();
    config.into()
}

fn read_body(mut response: Response<Body>) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.body_mut().read_to_string()?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

impl NetatmoApi {
    pub fn new(base_url: &str) -> Self {
        NetatmoApi {
            agent: get_ureq_agent(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the station payload and returns the response body untouched.
    pub fn station_data(&self, access_token: &str, device_id: &str) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, remote_defaults::STATION_DATA_PATH);
        log::debug!("Requesting station data for device {}", device_id);
        let response = self
            .agent
            .post(&url)
            .query("access_token", access_token)
            .query("device_id", device_id)
            .send_empty()?;
        read_body(response)
    }

    /// Exchanges a refresh token for a new access/refresh token pair.
    pub fn refresh_token(
        &self,
        client_id: &str,
        client_secret: &str,
        refresh_token: &str,
    ) -> Result<Token, ApiError> {
        let url = format!("{}{}", self.base_url, remote_defaults::TOKEN_PATH);
        log::debug!("Requesting token refresh");
        let response = self.agent.post(&url).send_form([
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])?;
        let body = read_body(response)?;
        serde_json::from_str(&body).map_err(Into::into)
    }
}
