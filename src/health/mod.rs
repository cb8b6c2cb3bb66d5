// src/health/mod.rs
mod checker;
mod severity;
mod snapshot;

pub use checker::HealthChecker;
pub use severity::{classify, Evaluation, Severity};
pub use snapshot::{Alarms, HealthSnapshot, Nodes};
