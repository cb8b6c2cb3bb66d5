// src/main.rs
use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use storagegrid_health::{
    config::{self, ConfigurationError},
    health::HealthChecker,
    report::Report,
    CheckError,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match config::load_config(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => {
            // clap writes help/version to stdout and usage errors to stderr
            if let ConfigurationError::Usage(usage) = &e {
                let _ = usage.print();
            }
            if e.is_informational() {
                return ExitCode::SUCCESS;
            }
            return Report::from(CheckError::from(e)).emit();
        }
    };

    if let Err(e) = init_tracing(config.verbose) {
        eprintln!("failed to initialise logging: {e:#}");
    }
    debug!("Loaded configuration: {:?}", config);

    let report = match HealthChecker::new(config) {
        Ok(checker) => Report::from_result(checker.run().await),
        Err(e) => Report::from(e),
    };
    report.emit()
}

// Logs go to stderr; stdout carries only the report line.
fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("storagegrid_health={level}").parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
