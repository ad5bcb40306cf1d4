use serde::{Deserialize, Serialize};

/// Behaviour of a [`TestReporter`](crate::reporter::TestReporter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    /// Panic when the reporter is dropped with unfinished failures.
    pub fail_on_drop: bool,
    /// Emit a `tracing` error event for every recorded failure.
    pub log_failures: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            fail_on_drop: true,
            log_failures: true,
        }
    }
}

impl ReporterConfig {
    /// A config that only collects failures; nothing is logged and dropping
    /// the reporter never panics.
    pub fn quiet() -> Self {
        Self {
            fail_on_drop: false,
            log_failures: false,
        }
    }
}
