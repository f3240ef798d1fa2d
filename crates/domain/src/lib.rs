//! Phantasmagoria domain layer.
//!
//! Pure types and operations for worldbuilding documents: the `World`
//! container, its typed sub-entity records, and the array upsert/merge
//! core every save and delete goes through. No IO, no async, no clock -
//! timestamps are injected by the caller.

pub mod collection;
pub mod entities;
pub mod error;
pub mod ids;
pub mod kind;
pub mod selection;

pub use collection::{remove, upsert, EditTarget};
pub use entities::{
    AdditionalDetail, Character, EntityRecord, Location, MagicSystem, Organization, Overview,
    Race, Rank, World,
};
pub use error::DomainError;
pub use ids::{EntityId, WorldId};
pub use kind::EntityKind;
pub use selection::{filter_candidates, ComboOption, Selection};
