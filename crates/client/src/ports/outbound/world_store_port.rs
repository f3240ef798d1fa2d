//! World Store Port - the per-owner document collection.
//!
//! Documents are scoped per authenticated owner; there is no cross-user
//! access path. Updates are field-granular and last-write-wins: a save
//! rewrites one whole sub-entity array under a single field name.

use serde_json::Value;
use thiserror::Error;

use phantasm_domain::{World, WorldId};

/// Errors from the remote document store.
#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("store request failed: {0}")]
    Request(String),

    #[error("malformed world document: {0}")]
    Malformed(String),
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait WorldStorePort: Send + Sync {
    /// All world documents owned by `owner`.
    async fn list_worlds(&self, owner: &str) -> Result<Vec<World>, StoreError>;

    /// Persist a new world document; the store assigns and returns its id.
    async fn create_world(&self, owner: &str, world: &World) -> Result<WorldId, StoreError>;

    /// Replace one field of one world document (last write wins).
    async fn update_world_field(
        &self,
        owner: &str,
        world_id: &WorldId,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError>;
}
