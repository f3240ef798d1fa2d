//! Character record - the people of a world.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EntityRecord, World};
use crate::ids::EntityId;
use crate::kind::EntityKind;

/// A free-form labelled text box the author added to one character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetail {
    #[serde(default)]
    pub label: String,
    /// Rich-text HTML fragment.
    #[serde(default)]
    pub content: String,
}

/// A character belonging to exactly one world.
///
/// Relationship fields (`affiliated_orgs`) hold display-name strings of
/// entities in the same world, not ids; renaming the referenced entity
/// orphans the reference. Rich-text fields hold HTML fragments produced by
/// the form editors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub species: String,
    /// Organization names this character is affiliated with.
    #[serde(default)]
    pub affiliated_orgs: Vec<String>,
    #[serde(default)]
    pub relationships: String,
    #[serde(default)]
    pub backstory: String,
    #[serde(default)]
    pub possessions: String,
    #[serde(default)]
    pub abilities: String,
    #[serde(default)]
    pub trivia: String,
    #[serde(default)]
    pub additional_details: Vec<AdditionalDetail>,
    /// Fields written by other client versions; carried through saves.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_species(mut self, species: impl Into<String>) -> Self {
        self.species = species.into();
        self
    }
}

impl EntityRecord for Character {
    const KIND: EntityKind = EntityKind::Character;

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
        &world.characters
    }

    fn collection_mut(world: &mut World) -> &mut Vec<Self> {
        &mut world.characters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_document_fields_survive_a_round_trip() {
        let stored = r#"{"id":"1700000000000","name":"Kael","portraitNotes":"sketch v2"}"#;
        let character: Character = serde_json::from_str(stored).expect("deserialize");
        assert_eq!(character.name, "Kael");
        assert_eq!(
            character.extra.get("portraitNotes"),
            Some(&Value::String("sketch v2".to_string()))
        );

        let value = serde_json::to_value(&character).expect("serialize");
        assert_eq!(value["portraitNotes"], "sketch v2");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let character = Character::new("Kael").with_role("Rogue");
        let value = serde_json::to_value(&character).expect("serialize");
        assert_eq!(value["role"], "Rogue");
        assert!(value.get("affiliatedOrgs").is_some());
        assert!(value.get("additionalDetails").is_some());
    }
}
