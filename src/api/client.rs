// src/api/client.rs
use crate::config::Config;
use crate::health::HealthSnapshot;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

const AUTHORIZE_PATH: &str = "/api/v2/authorize";
const GRID_HEALTH_PATH: &str = "/api/v2/grid/health";

#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("authorize request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("authorize returned HTTP {0}")]
    UnexpectedStatus(StatusCode),

    #[error("authorize response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("authorize response has no token in 'data'")]
    MissingToken,
}

#[derive(Debug, thiserror::Error)]
pub enum HealthFetchError {
    #[error("grid health request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("grid health returned HTTP {0}")]
    UnexpectedStatus(StatusCode),

    #[error("grid health response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("grid health response has no 'data' object")]
    MissingData,
}

/// Bearer token handed out by the authorize endpoint. Used as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Client for the two grid management calls a check needs.
pub struct GridClient {
    config: Config,
    client: Client,
}

impl GridClient {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.skip_tls_verify)
            .default_headers(headers)
            .build()?;

        if config.skip_tls_verify {
            debug!("TLS certificate verification disabled");
        }

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn authenticate(&self) -> Result<AuthToken, AuthenticationError> {
        let url = self.config.endpoint(AUTHORIZE_PATH);
        debug!("Authenticating as {} against {}", self.config.username, url);

        let response = self
            .client
            .post(&url)
            .json(&Credentials {
                username: &self.config.username,
                password: &self.config.password,
            })
            .send()
            .await
            .map_err(AuthenticationError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Authorize call returned HTTP {}", status);
            return Err(AuthenticationError::UnexpectedStatus(status));
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_decode() {
                AuthenticationError::Decode(e)
            } else {
                AuthenticationError::Transport(e)
            }
        })?;

        match body.get("data").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {
                debug!("Authenticated, token received");
                Ok(AuthToken::new(token))
            }
            _ => Err(AuthenticationError::MissingToken),
        }
    }

    pub async fn fetch_health(&self, token: &AuthToken) -> Result<HealthSnapshot, HealthFetchError> {
        let url = self.config.endpoint(GRID_HEALTH_PATH);
        debug!("Fetching grid health from {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, token.bearer())
            .send()
            .await
            .map_err(HealthFetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Grid health call returned HTTP {}", status);
            return Err(HealthFetchError::UnexpectedStatus(status));
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_decode() {
                HealthFetchError::Decode(e)
            } else {
                HealthFetchError::Transport(e)
            }
        })?;

        let data = body
            .get("data")
            .filter(|data| data.is_object())
            .ok_or(HealthFetchError::MissingData)?;

        let snapshot = HealthSnapshot::from_data(data);
        debug!("Grid health: {:?}", snapshot);
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_debug_is_redacted() {
        let token = AuthToken::new("abc-123");
        assert_eq!(format!("{:?}", token), "AuthToken(<redacted>)");
        assert_eq!(token.bearer(), "Bearer abc-123");
    }

    #[test]
    fn bearer_header_uses_token_verbatim() {
        let token = AuthToken::new("  odd token  ");
        assert_eq!(token.bearer(), "Bearer   odd token  ");
    }
}
