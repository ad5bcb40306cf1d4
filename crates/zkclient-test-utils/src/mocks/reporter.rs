//! Mock implementation of the TestingT trait.

use crate::reporter::TestingT;
use mockall::mock;

// Generate the mock implementation for TestingT
mock! {
    pub TestingT {}

    impl TestingT for TestingT {
        fn errorf(&mut self, message: &str);
        fn helper(&mut self);
    }
}

/// Creates a mock reporter that accepts any number of calls.
pub fn create_permissive_mock_reporter() -> MockTestingT {
    let mut mock = MockTestingT::new();

    mock.expect_helper().return_const(());
    mock.expect_errorf().return_const(());

    mock
}

/// Creates a mock reporter that fails the test if any assertion reports.
pub fn create_silent_mock_reporter() -> MockTestingT {
    let mut mock = MockTestingT::new();

    mock.expect_helper().never();
    mock.expect_errorf().never();

    mock
}
