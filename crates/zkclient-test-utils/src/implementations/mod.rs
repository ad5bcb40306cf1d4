//! Test implementations (fakes) of the reporter capability.
//!
//! Fakes record what they were asked to do so assertions can be checked
//! against their exact reporting behaviour.

pub mod recording_reporter;

// Re-export all implementations for easy access
pub use recording_reporter::*;
