//! The reporter capability the assertions report through, and the adapter
//! that connects it to Rust's test harness.

use crate::config::ReporterConfig;
use crate::error::AssertionError;
use std::fmt;

/// Minimal test-harness capability used by the assertion helpers.
///
/// `errorf` records a failure without halting the test; `helper` marks the
/// calling frame as a test helper. Implementations are not expected to be
/// shared across threads.
pub trait TestingT {
    /// Records a failure message.
    fn errorf(&mut self, message: &str);

    /// Marks the caller as a test helper.
    fn helper(&mut self);
}

impl<T: TestingT + ?Sized> TestingT for &mut T {
    fn errorf(&mut self, message: &str) {
        (**self).errorf(message)
    }

    fn helper(&mut self) {
        (**self).helper()
    }
}

/// Adapter between the assertion helpers and the built-in test harness.
///
/// Failures accumulate so a single test can surface several of them. They
/// are handed back by [`finish`](TestReporter::finish), or, if the reporter
/// is dropped with failures still pending, the test panics with all of
/// them.
pub struct TestReporter {
    name: String,
    config: ReporterConfig,
    failures: Vec<String>,
}

impl fmt::Debug for TestReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestReporter")
            .field("name", &self.name)
            .field("failure_count", &self.failures.len())
            .finish()
    }
}

impl TestReporter {
    /// Creates a reporter for the named test with the default config.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, ReporterConfig::default())
    }

    /// Creates a reporter for the named test.
    pub fn with_config(name: impl Into<String>, config: ReporterConfig) -> Self {
        Self {
            name: name.into(),
            config,
            failures: Vec::new(),
        }
    }

    /// Name of the test this reporter belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Failures recorded so far.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Whether any failure has been recorded.
    pub fn has_failed(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Consumes the reporter, returning the recorded failures as an error.
    pub fn finish(mut self) -> Result<(), AssertionError> {
        let failures = std::mem::take(&mut self.failures);
        if failures.is_empty() {
            return Ok(());
        }

        Err(AssertionError::Failed {
            test: self.name.clone(),
            failures,
        })
    }
}

impl TestingT for TestReporter {
    fn errorf(&mut self, message: &str) {
        if self.config.log_failures {
            tracing::error!(test = %self.name, "{}", message);
        }
        self.failures.push(message.to_string());
    }

    fn helper(&mut self) {
        tracing::trace!(test = %self.name, "entering assertion helper");
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.failures.is_empty() || !self.config.fail_on_drop || std::thread::panicking() {
            return;
        }

        let error = AssertionError::Failed {
            test: std::mem::take(&mut self.name),
            failures: std::mem::take(&mut self.failures),
        };
        panic!("{}", error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_new_reporter_has_no_failures() {
        let reporter = TestReporter::new("empty");
        assert_eq!(reporter.name(), "empty");
        assert!(!reporter.has_failed());
        assert!(reporter.finish().is_ok());
    }

    #[test]
    fn test_failures_accumulate_in_order() {
        let mut reporter = TestReporter::new("accumulate");
        reporter.helper();
        reporter.errorf("first");
        reporter.errorf("second");

        assert_eq!(reporter.failures(), ["first", "second"]);
        assert_matches!(
            reporter.finish(),
            Err(AssertionError::Failed { test, failures })
                if test == "accumulate" && failures == vec!["first", "second"]
        );
    }

    #[test]
    fn test_reporting_through_mut_ref() {
        fn report(mut t: impl TestingT) {
            t.helper();
            t.errorf("via reference");
        }

        let mut reporter = TestReporter::with_config("by_ref", ReporterConfig::quiet());
        report(&mut reporter);
        assert_eq!(reporter.failures(), ["via reference"]);
    }

    #[test]
    #[should_panic(expected = "dropped: 1 assertion(s) failed:\nboom")]
    fn test_drop_with_failures_panics() {
        let mut reporter = TestReporter::new("dropped");
        reporter.errorf("boom");
    }

    #[test]
    fn test_quiet_reporter_does_not_panic_on_drop() {
        let mut reporter = TestReporter::with_config("quiet", ReporterConfig::quiet());
        reporter.errorf("ignored");
        assert!(reporter.has_failed());
    }
}
