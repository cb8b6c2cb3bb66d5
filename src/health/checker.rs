// src/health/checker.rs
use super::severity::{classify, Evaluation};
use crate::api::GridClient;
use crate::config::Config;
use crate::error::CheckError;
use tracing::{debug, info};

/// Runs one grid health check: authorize, fetch health, classify.
pub struct HealthChecker {
    client: GridClient,
}

impl HealthChecker {
    pub fn new(config: Config) -> Result<Self, CheckError> {
        let client = GridClient::new(config).map_err(CheckError::Client)?;
        Ok(Self { client })
    }

    pub async fn run(&self) -> Result<Evaluation, CheckError> {
        debug!("Starting grid health check for {}", self.client.config().base_url);

        // The health call needs the token, so a failed authorize ends the run here.
        let token = self.client.authenticate().await?;
        let snapshot = self.client.fetch_health(&token).await?;

        let evaluation = classify(&snapshot);
        info!(
            "Grid health is {}: {}",
            evaluation.severity, evaluation.message
        );
        Ok(evaluation)
    }
}
