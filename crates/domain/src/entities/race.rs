//! Race record - the peoples and species of a world.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EntityRecord, World};
use crate::ids::EntityId;
use crate::kind::EntityKind;

/// A race belonging to exactly one world. All three body fields are
/// rich-text HTML fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub abilities: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Race {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl EntityRecord for Race {
    const KIND: EntityKind = EntityKind::Race;

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
        &world.races
    }

    fn collection_mut(world: &mut World) -> &mut Vec<Self> {
        &mut world.races
    }
}
