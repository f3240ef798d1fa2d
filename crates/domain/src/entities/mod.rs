//! Typed world documents and sub-entity records.

mod character;
mod location;
mod organization;
mod race;
mod world;

pub use character::{AdditionalDetail, Character};
pub use location::Location;
pub use organization::{Organization, Rank};
pub use race::Race;
pub use world::{MagicSystem, Overview, World};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ids::EntityId;
use crate::kind::EntityKind;

/// A record stored inside one of a world's sub-entity arrays.
///
/// Ties a typed record to its kind and to the world field that owns it, so
/// the save/delete core can be written once over all kinds. Every record
/// keeps an open `extra` map tail, so fields written by other client
/// versions survive the merge-and-rewrite save path.
pub trait EntityRecord: Serialize + DeserializeOwned + Clone + PartialEq {
    const KIND: EntityKind;

    fn id(&self) -> Option<&EntityId>;

    fn set_id(&mut self, id: EntityId);

    fn name(&self) -> &str;

    /// The owning array on a world document.
    fn collection(world: &World) -> &Vec<Self>;

    fn collection_mut(world: &mut World) -> &mut Vec<Self>;
}
