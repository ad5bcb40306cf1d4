//! Recording fake of the [`TestingT`] capability.

use crate::reporter::TestingT;

/// One recorded call on a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `helper()`
    Helper,
    /// `errorf(message)`
    Errorf(String),
}

/// Fake reporter that records every call in order.
///
/// Lets tests check exactly what an assertion reported, including the
/// `helper` call that precedes each failure. Not safe for concurrent use.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    calls: Vec<Call>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Consumes the recorder, returning its calls.
    pub fn into_calls(self) -> Vec<Call> {
        self.calls
    }

    /// Failure messages only, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Errorf(message) => Some(message.as_str()),
                Call::Helper => None,
            })
            .collect()
    }

    /// Forgets all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl TestingT for RecordingReporter {
    fn errorf(&mut self, message: &str) {
        self.calls.push(Call::Errorf(message.to_string()));
    }

    fn helper(&mut self) {
        self.calls.push(Call::Helper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mut recorder = RecordingReporter::new();
        recorder.helper();
        recorder.errorf("first");
        recorder.errorf("second");

        assert_eq!(
            recorder.calls(),
            [
                Call::Helper,
                Call::Errorf("first".to_string()),
                Call::Errorf("second".to_string()),
            ]
        );
        assert_eq!(recorder.messages(), vec!["first", "second"]);

        recorder.clear();
        assert!(recorder.into_calls().is_empty());
    }
}
