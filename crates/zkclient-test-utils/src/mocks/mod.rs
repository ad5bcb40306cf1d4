//! Mock implementations of the reporter capability.
//!
//! Use these when a test cares about call expectations (counts, ordering)
//! rather than the recorded history a fake provides.

pub mod reporter;

// Re-export all mocks and their creator functions for easy access
pub use reporter::*;
