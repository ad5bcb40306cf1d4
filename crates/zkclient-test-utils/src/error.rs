use thiserror::Error;

/// Error types for the test utilities
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssertionError {
    /// One or more assertions reported a failure
    #[error("{test}: {} assertion(s) failed:\n{}", .failures.len(), .failures.join("\n"))]
    Failed {
        /// Name of the test the reporter belongs to
        test: String,
        /// Failure messages, in the order they were reported
        failures: Vec<String>,
    },
}
