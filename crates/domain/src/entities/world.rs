//! World document - the top-level container for one fictional setting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Character, Location, Organization, Race};
use crate::ids::WorldId;

/// Free-text overview of a world, shown on the wiki landing section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub geography: String,
}

/// Magic system description, created empty with the world.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicSystem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sources: String,
    #[serde(default)]
    pub limitations: String,
}

/// A world document as stored per owner in the remote document store.
///
/// `id` is absent until the store assigns one on creation. Sub-collections
/// the editor has typed forms for are typed arrays; the rest (maps,
/// families, creatures, bestiary) stay opaque JSON until they grow editors
/// of their own. Every array defaults to empty so documents written before
/// a field existed keep deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WorldId>,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub overview: Overview,
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub maps: Vec<Value>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub families: Vec<Value>,
    #[serde(default)]
    pub creatures: Vec<Value>,
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub magic: MagicSystem,
    #[serde(default)]
    pub bestiary: Vec<Value>,
}

impl World {
    /// Create a world with empty sub-collections, ready to be persisted.
    pub fn new(
        name: impl Into<String>,
        tagline: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            tagline: tagline.into(),
            description: description.into(),
            image_url: None,
            overview: Overview::default(),
            characters: Vec::new(),
            locations: Vec::new(),
            maps: Vec::new(),
            organizations: Vec::new(),
            families: Vec::new(),
            creatures: Vec::new(),
            races: Vec::new(),
            magic: MagicSystem::default(),
            bestiary: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_has_empty_sub_collections() {
        let world = World::new("Aeldran", "A world of salt and stars", "Testbed");
        assert!(world.id.is_none());
        assert!(world.characters.is_empty());
        assert!(world.locations.is_empty());
        assert!(world.organizations.is_empty());
        assert!(world.races.is_empty());
        assert!(world.bestiary.is_empty());
        assert_eq!(world.magic, MagicSystem::default());
    }

    #[test]
    fn deserializes_document_with_missing_arrays() {
        // Documents written before a sub-collection existed must still load.
        let world: World =
            serde_json::from_str(r#"{"name":"Old","tagline":"t","description":"d"}"#)
                .expect("deserialize");
        assert!(world.characters.is_empty());
        assert_eq!(world.overview, Overview::default());
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let mut world = World::new("Aeldran", "", "");
        world.image_url = Some("https://example.test/a.png".to_string());
        let value = serde_json::to_value(&world).expect("serialize");
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("overview").is_some());
        // An unassigned id must not be written to the store.
        assert!(value.get("id").is_none());
    }
}
