// src/config/mod.rs
mod models;

pub use models::*;

use clap::error::ErrorKind;
use clap::{ArgAction, Command, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("invalid arguments: {}", usage_summary(.0))]
    Usage(#[source] clap::Error),

    #[error("invalid hostname '{hostname}': {reason}")]
    InvalidHostname { hostname: String, reason: String },

    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("timeout must be greater than zero")]
    InvalidTimeout,
}

impl ConfigurationError {
    /// `--help` and `--version` come back from clap as errors but are not failures.
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            ConfigurationError::Usage(e)
                if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        )
    }
}

/// Check StorageGRID grid health: alarms and node states.
#[derive(Debug, Parser)]
#[command(name = "check-storagegrid-health", version, disable_help_flag = true)]
pub struct Cli {
    /// Base URL to StorageGRID
    #[arg(short = 'h', long)]
    pub hostname: String,

    /// StorageGRID username
    #[arg(short, long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// StorageGRID password
    #[arg(short, long, env = "STORAGEGRID_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Do not check validity of SSL cert
    #[arg(short = 'i', long)]
    pub insecure: bool,

    /// Per-request timeout in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigurationError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Config::new(&cli.hostname, cli.username, cli.password)?
            .with_insecure(cli.insecure)
            .with_timeout(Duration::from_secs(cli.timeout))
            .with_verbose(cli.verbose);
        config.validate()?;
        Ok(config)
    }
}

/// Parse command line arguments (program name first) into a validated config.
pub fn load_config<I, T>(args: I) -> Result<Config, ConfigurationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    parse_with(Cli::command(), args)
}

fn parse_with<I, T>(command: Command, args: I) -> Result<Config, ConfigurationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command
        .try_get_matches_from(args)
        .map_err(ConfigurationError::Usage)?;
    let cli = Cli::from_arg_matches(&matches).map_err(ConfigurationError::Usage)?;
    Config::try_from(cli)
}

// clap renders multi-line errors with a usage block; keep the part before it.
fn usage_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(|line| line.trim().trim_start_matches("error:").trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
