//! Unified error type for domain operations.

use thiserror::Error;

/// Errors surfaced by domain operations.
///
/// The upsert/merge core is deliberately forgiving (a vanished edit target
/// becomes an append), so failures here are serialization or key-mapping
/// problems rather than business failures.
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// A record payload could not be (de)serialized to the document shape.
    #[error("Record serialization failed: {0}")]
    Serialization(String),

    /// An editor sub-view key did not name a known entity kind.
    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),
}

impl DomainError {
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
