//!
//! zkclient Core - domain types for the coordination-service client
//!
//! This crate holds the types that translate between the service's wire
//! representation and the client's typed API. Everything here is a plain
//! value type; connection handling lives elsewhere.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Node creation modes and their wire flags
pub mod create_mode;

/// Error types
pub mod error;

// Re-export key types
pub use create_mode::CreateMode;
pub use error::ClientError;
