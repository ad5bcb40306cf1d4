//! Node creation modes.
//!
//! The coordination service encodes how a node is created (persistence,
//! sequencing, container semantics, time-to-live) as a single small integer on
//! the wire. [`CreateMode`] is the typed form of that integer; it is validated
//! once at the boundary so request construction never sees an unknown flag.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire flag for a persistent node.
pub const FLAG_PERSISTENT: i32 = 0;
/// Wire flag for an ephemeral node.
pub const FLAG_EPHEMERAL: i32 = 1;
/// Wire flag for a persistent sequential node.
pub const FLAG_SEQUENCE: i32 = 2;
/// Wire flag for an ephemeral sequential node.
pub const FLAG_EPHEMERAL_SEQUENTIAL: i32 = 3;
/// Wire flag for a container node.
pub const FLAG_CONTAINER: i32 = 4;
/// Wire flag for a persistent node with a time-to-live.
pub const FLAG_TTL: i32 = 5;
/// Wire flag for a persistent sequential node with a time-to-live.
pub const FLAG_PERSISTENT_SEQUENTIAL_WITH_TTL: i32 = 6;

/// The semantics requested when creating a node.
///
/// This is a closed set: TTL modes are always persistent, and there is no
/// ephemeral container. Serialized as its wire flag; deserialization goes
/// through [`CreateMode::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CreateMode {
    /// Survives the session that created it
    Persistent,
    /// Deleted when the creating session ends
    Ephemeral,
    /// Persistent, with a monotonically increasing suffix appended to the name
    PersistentSequential,
    /// Ephemeral, with a sequence suffix
    EphemeralSequential,
    /// Deleted by the server once its last child is removed
    Container,
    /// Persistent, deleted after the TTL if it has no children
    PersistentWithTtl,
    /// Persistent sequential with a TTL
    PersistentSequentialWithTtl,
}

impl CreateMode {
    /// All modes, in flag order.
    pub const ALL: [CreateMode; 7] = [
        CreateMode::Persistent,
        CreateMode::Ephemeral,
        CreateMode::PersistentSequential,
        CreateMode::EphemeralSequential,
        CreateMode::Container,
        CreateMode::PersistentWithTtl,
        CreateMode::PersistentSequentialWithTtl,
    ];

    /// Parses a wire flag into a creation mode.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidFlag`] for any value outside `0..=6`.
    pub fn parse(flag: i32) -> Result<Self, ClientError> {
        Self::try_from(flag)
    }

    /// Returns the wire flag for this mode.
    pub fn to_flag(self) -> i32 {
        match self {
            CreateMode::Persistent => FLAG_PERSISTENT,
            CreateMode::Ephemeral => FLAG_EPHEMERAL,
            CreateMode::PersistentSequential => FLAG_SEQUENCE,
            CreateMode::EphemeralSequential => FLAG_EPHEMERAL_SEQUENTIAL,
            CreateMode::Container => FLAG_CONTAINER,
            CreateMode::PersistentWithTtl => FLAG_TTL,
            CreateMode::PersistentSequentialWithTtl => FLAG_PERSISTENT_SEQUENTIAL_WITH_TTL,
        }
    }

    /// Whether the node is removed when its session ends.
    pub fn is_ephemeral(self) -> bool {
        matches!(self, CreateMode::Ephemeral | CreateMode::EphemeralSequential)
    }

    /// Whether the server appends a sequence number to the node name.
    pub fn is_sequential(self) -> bool {
        matches!(
            self,
            CreateMode::PersistentSequential
                | CreateMode::EphemeralSequential
                | CreateMode::PersistentSequentialWithTtl
        )
    }

    /// Whether the node is a container.
    pub fn is_container(self) -> bool {
        matches!(self, CreateMode::Container)
    }

    /// Whether the node carries a time-to-live.
    pub fn is_ttl(self) -> bool {
        matches!(
            self,
            CreateMode::PersistentWithTtl | CreateMode::PersistentSequentialWithTtl
        )
    }

    /// Short snake_case name, used for display and logging.
    pub fn name(self) -> &'static str {
        match self {
            CreateMode::Persistent => "persistent",
            CreateMode::Ephemeral => "ephemeral",
            CreateMode::PersistentSequential => "persistent_sequential",
            CreateMode::EphemeralSequential => "ephemeral_sequential",
            CreateMode::Container => "container",
            CreateMode::PersistentWithTtl => "persistent_ttl",
            CreateMode::PersistentSequentialWithTtl => "persistent_sequential_ttl",
        }
    }
}

impl TryFrom<i32> for CreateMode {
    type Error = ClientError;

    fn try_from(flag: i32) -> Result<Self, Self::Error> {
        match flag {
            FLAG_PERSISTENT => Ok(CreateMode::Persistent),
            FLAG_EPHEMERAL => Ok(CreateMode::Ephemeral),
            FLAG_SEQUENCE => Ok(CreateMode::PersistentSequential),
            FLAG_EPHEMERAL_SEQUENTIAL => Ok(CreateMode::EphemeralSequential),
            FLAG_CONTAINER => Ok(CreateMode::Container),
            FLAG_TTL => Ok(CreateMode::PersistentWithTtl),
            FLAG_PERSISTENT_SEQUENTIAL_WITH_TTL => Ok(CreateMode::PersistentSequentialWithTtl),
            _ => {
                tracing::debug!(flag, "rejecting unknown create mode flag");
                Err(ClientError::InvalidFlag(flag))
            }
        }
    }
}

impl From<CreateMode> for i32 {
    fn from(mode: CreateMode) -> Self {
        mode.to_flag()
    }
}

impl fmt::Display for CreateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
