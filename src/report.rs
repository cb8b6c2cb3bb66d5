// src/report.rs
use crate::error::CheckError;
use crate::health::{Evaluation, Severity};
use std::fmt;
use std::process::ExitCode;

pub const CHECK_NAME: &str = "StorageGridHealth";

/// Monitoring outcome. `Unknown` means the check itself could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl From<Severity> for Status {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Ok => Status::Ok,
            Severity::Warning => Status::Warning,
            Severity::Critical => Status::Critical,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub message: String,
}

impl Report {
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            status: Status::Unknown,
            message: message.into(),
        }
    }

    pub fn from_result(result: Result<Evaluation, CheckError>) -> Self {
        match result {
            Ok(evaluation) => evaluation.into(),
            Err(e) => e.into(),
        }
    }

    /// Print the report line to stdout and hand back the matching exit code.
    pub fn emit(&self) -> ExitCode {
        println!("{}", self);
        self.status.exit_code()
    }
}

impl From<Evaluation> for Report {
    fn from(evaluation: Evaluation) -> Self {
        Self {
            status: evaluation.severity.into(),
            message: evaluation.message,
        }
    }
}

impl From<CheckError> for Report {
    fn from(err: CheckError) -> Self {
        Report::unknown(err.to_string())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", CHECK_NAME, self.status, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthenticationError;
    use crate::config::ConfigurationError;

    #[test]
    fn exit_codes_follow_plugin_convention() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::Warning.code(), 1);
        assert_eq!(Status::Critical.code(), 2);
        assert_eq!(Status::Unknown.code(), 3);
    }

    #[test]
    fn renders_one_line() {
        let report = Report::from(Evaluation {
            severity: Severity::Warning,
            message: "Major alarms: 1 - Minor alarms: 0 - Offline nodes: 0".to_string(),
        });
        assert_eq!(
            report.to_string(),
            "StorageGridHealth WARNING: Major alarms: 1 - Minor alarms: 0 - Offline nodes: 0"
        );
    }

    #[test]
    fn errors_become_unknown() {
        let report = Report::from_result(Err(CheckError::Authentication(
            AuthenticationError::MissingToken,
        )));
        assert_eq!(report.status, Status::Unknown);
        assert_eq!(
            report.message,
            "authentication failed: authorize response has no token in 'data'"
        );

        let report = Report::from(CheckError::from(ConfigurationError::InvalidTimeout));
        assert_eq!(report.status, Status::Unknown);
        assert_eq!(report.message, "timeout must be greater than zero");
    }

    #[test]
    fn usage_errors_exit_unknown_not_critical() {
        let usage = clap::Error::raw(
            clap::error::ErrorKind::MissingRequiredArgument,
            "the following required arguments were not provided:\n  --password <PASSWORD>\n",
        );
        let report = Report::from(CheckError::from(ConfigurationError::Usage(usage)));

        assert_eq!(report.status, Status::Unknown);
        assert_eq!(report.status.code(), 3);
        assert!(report.to_string().starts_with("StorageGridHealth UNKNOWN: invalid arguments:"));
        assert!(report.message.contains("--password"));
    }
}
