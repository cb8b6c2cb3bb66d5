// src/health/snapshot.rs
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Alarms {
    pub critical: u64,
    pub major: u64,
    pub minor: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nodes {
    pub unknown: u64,
    pub administratively_down: u64,
}

/// Alarm and node counts reported by `GET /api/v2/grid/health`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HealthSnapshot {
    pub alarms: Alarms,
    pub nodes: Nodes,
}

impl HealthSnapshot {
    /// Read counts out of the response's `data` object.
    ///
    /// Never fails: a missing `alarms`/`nodes` object or a missing or
    /// malformed count reads as zero.
    pub fn from_data(data: &Value) -> Self {
        let alarms = data.get("alarms");
        let nodes = data.get("nodes");
        let field = |section: Option<&Value>, key: &str| lenient_count(section.and_then(|s| s.get(key)));

        Self {
            alarms: Alarms {
                critical: field(alarms, "critical"),
                major: field(alarms, "major"),
                minor: field(alarms, "minor"),
            },
            nodes: Nodes {
                unknown: field(nodes, "unknown"),
                administratively_down: field(nodes, "administratively-down"),
            },
        }
    }
}

/// Coerce a JSON value to a non-negative count.
///
/// Integers pass through, positive floats truncate, strings use their
/// leading decimal digits. Anything else, including negatives, is zero.
fn lenient_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f > 0.0)
                    .map(|f| f as u64)
            })
            .unwrap_or(0),
        Some(Value::String(s)) => leading_digits(s),
        _ => 0,
    }
}

fn leading_digits(s: &str) -> u64 {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
