// src/health/severity.rs
use super::snapshot::HealthSnapshot;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub severity: Severity,
    pub message: String,
}

/// Map grid health counts to a severity and a one-line summary.
///
/// Critical alarms or unknown nodes win over anything that would only warn.
pub fn classify(snapshot: &HealthSnapshot) -> Evaluation {
    let alarms = &snapshot.alarms;
    let nodes = &snapshot.nodes;

    if alarms.critical > 0 || nodes.unknown > 0 {
        Evaluation {
            severity: Severity::Critical,
            message: format!(
                "Critical alarms: {} - Offline nodes: {}",
                alarms.critical, nodes.unknown
            ),
        }
    } else if alarms.major > 0 || alarms.minor > 0 || nodes.administratively_down > 0 {
        Evaluation {
            severity: Severity::Warning,
            message: format!(
                "Major alarms: {} - Minor alarms: {} - Offline nodes: {}",
                alarms.major, alarms.minor, nodes.administratively_down
            ),
        }
    } else {
        Evaluation {
            severity: Severity::Ok,
            message: "OK".to_string(),
        }
    }
}
