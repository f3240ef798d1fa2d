//! Identifier newtypes for worlds and sub-entity records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a world document.
///
/// Assigned by the document store when the world is created and immutable
/// thereafter; the client never mints one of these itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldId(String);

impl WorldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a sub-entity record inside one of a world's arrays.
///
/// Client-generated from a millisecond timestamp, unique within its owning
/// array, assigned at creation and never reassigned. Stored as a plain
/// string so documents written by earlier clients keep deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Mint an id from a milliseconds-since-epoch value supplied by the
    /// platform clock. Monotonic enough for a single-user client.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.to_string())
    }

    /// Wrap an id read back from a stored document.
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_millis_is_decimal_string() {
        let id = EntityId::from_millis(1_714_000_000_123);
        assert_eq!(id.as_str(), "1714000000123");
    }

    #[test]
    fn entity_id_round_trips_through_json_as_bare_string() {
        let id = EntityId::from_raw("1714000000123");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"1714000000123\"");
        let back: EntityId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn world_id_displays_raw_value() {
        assert_eq!(WorldId::new("w1").to_string(), "w1");
    }
}
