//! Location record - places of a world.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EntityRecord, World};
use crate::ids::EntityId;
use crate::kind::EntityKind;

/// A location belonging to exactly one world.
///
/// `parent_location` and `controlling_orgs` are name references, single- and
/// multi-valued respectively. The wire name of `kind` is `type`, matching
/// existing documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub government: String,
    #[serde(default)]
    pub population: String,
    /// Name of the containing location, empty if top-level.
    #[serde(default)]
    pub parent_location: String,
    #[serde(default)]
    pub key_characters: Vec<String>,
    #[serde(default)]
    pub controlling_orgs: Vec<String>,
    #[serde(default)]
    pub demographics: String,
    #[serde(default)]
    pub economy: String,
    #[serde(default)]
    pub culture: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

impl EntityRecord for Location {
    const KIND: EntityKind = EntityKind::Location;

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn collection(world: &World) -> &Vec<Self> {
        &world.locations
    }

    fn collection_mut(world: &mut World) -> &mut Vec<Self> {
        &mut world.locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type() {
        let location = Location::new("Vharn").with_kind("City-state");
        let value = serde_json::to_value(&location).expect("serialize");
        assert_eq!(value["type"], "City-state");
        assert!(value.get("kind").is_none());
    }
}
