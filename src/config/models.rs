// src/config/models.rs
use std::fmt;
use std::time::Duration;
use url::Url;

use super::ConfigurationError;

pub const DEFAULT_USERNAME: &str = "root";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything one check run needs, resolved from the command line.
#[derive(Clone)]
pub struct Config {
    pub base_url: Url,
    pub username: String,
    pub password: String,
    pub skip_tls_verify: bool,
    pub timeout: Duration,
    pub verbose: bool,
}

impl Config {
    /// Parses the base URL only; call `validate` once the setters are applied.
    pub fn new(
        hostname: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            base_url: parse_base_url(hostname)?,
            username: username.into(),
            password: password.into(),
            skip_tls_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verbose: false,
        })
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.skip_tls_verify = insecure;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout);
        }
        match self.base_url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ConfigurationError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Full URL of an API path, keeping any path prefix of the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

// Keep the password out of debug logs
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("skip_tls_verify", &self.skip_tls_verify)
            .field("timeout", &self.timeout)
            .field("verbose", &self.verbose)
            .finish()
    }
}

fn parse_base_url(hostname: &str) -> Result<Url, ConfigurationError> {
    let hostname = hostname.trim();
    if hostname.is_empty() {
        return Err(ConfigurationError::InvalidHostname {
            hostname: hostname.to_string(),
            reason: "hostname is empty".to_string(),
        });
    }

    Url::parse(hostname).map_err(|e| ConfigurationError::InvalidHostname {
        hostname: hostname.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = Config::new("https://grid.example.com/", "root", "secret").unwrap();
        assert_eq!(
            config.endpoint("/api/v2/authorize"),
            "https://grid.example.com/api/v2/authorize"
        );
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let config = Config::new("https://proxy.example.com/grid", "root", "secret").unwrap();
        assert_eq!(
            config.endpoint("/api/v2/grid/health"),
            "https://proxy.example.com/grid/api/v2/grid/health"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = Config::new("ftp://grid.example.com", "root", "secret")
            .unwrap()
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConfigurationError::UnsupportedScheme(ref s) if s == "ftp"));
    }

    #[test]
    fn rejects_hostname_without_scheme() {
        let err = Config::new("grid.example.com", "root", "secret").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidHostname { .. }));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = Config::new("https://grid.example.com", "root", "secret")
            .unwrap()
            .with_timeout(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidTimeout)
        ));
    }

    #[test]
    fn debug_output_redacts_password() {
        let config = Config::new("https://grid.example.com", "root", "hunter2").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
