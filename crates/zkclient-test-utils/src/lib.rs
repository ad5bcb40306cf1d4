//! Testing utilities for the zkclient workspace.
//!
//! A small assertion library in the style of the common third-party helpers
//! (`equal`, `no_error`) that reports through a [`TestingT`] capability
//! instead of panicking, plus the reporters that implement it: a
//! production adapter for the Rust test harness, a recording fake and a
//! mockall mock.

pub mod assertions;
pub mod config;
pub mod error;
pub mod implementations;
pub mod mocks;
pub mod reporter;
pub mod util;

/// Re-export commonly used types for convenience
pub use mockall;
pub use serde_json;

pub use assertions::{equal, no_error};
pub use config::ReporterConfig;
pub use error::AssertionError;
pub use implementations::{Call, RecordingReporter};
pub use reporter::{TestReporter, TestingT};
pub use util::init_test_tracing;
