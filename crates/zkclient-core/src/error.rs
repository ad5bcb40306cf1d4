use thiserror::Error;

/// Error type for the zkclient domain layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// A node creation flag that does not map to any known mode
    #[error("invalid flag value: [{0}]")]
    InvalidFlag(i32),
}
