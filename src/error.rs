// src/error.rs
use crate::api::{AuthenticationError, HealthFetchError};
use crate::config::ConfigurationError;

/// Anything that stops a check from producing a health severity.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("health fetch failed: {0}")]
    HealthFetch(#[from] HealthFetchError),
}
