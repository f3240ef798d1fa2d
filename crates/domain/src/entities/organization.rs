//! Organization record - factions, guilds, orders.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{EntityRecord, World};
use crate::ids::EntityId;
use crate::kind::EntityKind;

/// One rung of an organization's hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// An organization belonging to exactly one world.
///
/// `leader` and `headquarters` are single-valued name references
/// (characters and locations respectively); `key_members`, `allies` and
/// `rivals` are multi-valued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub member_demographics: String,
    #[serde(default)]
    pub leader: String,
    #[serde(default)]
    pub key_members: Vec<String>,
    #[serde(default)]
    pub headquarters: String,
    #[serde(default)]
    pub allies: Vec<String>,
    #[serde(default)]
    pub rivals: Vec<String>,
    #[serde(default)]
    pub ranks: Vec<Rank>,
    #[serde(default)]
    pub public_agenda: String,
    #[serde(default)]
    pub secret_goals: String,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub membership_requirements: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.leader = leader.into();
        self
    }
}

impl EntityRecord for Organization {
    const KIND: EntityKind = EntityKind::Organization;

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
        &world.organizations
    }

    fn collection_mut(world: &mut World) -> &mut Vec<Self> {
        &mut world.organizations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_round_trip() {
        let mut org = Organization::new("The Gilded Hand");
        org.ranks.push(Rank {
            title: "Magister".to_string(),
            description: "Holds a seat on the council".to_string(),
        });
        let json = serde_json::to_string(&org).expect("serialize");
        let back: Organization = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.ranks.len(), 1);
        assert_eq!(back.ranks[0].title, "Magister");
    }
}
