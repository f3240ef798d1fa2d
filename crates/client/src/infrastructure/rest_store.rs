//! REST adapter for the per-owner world document collection.
//!
//! Speaks a plain JSON document API with Firestore-like semantics: world
//! documents live in a per-owner collection, creation returns the assigned
//! id, and updates replace one named field (last write wins). The whole
//! sub-entity array round-trips on every save; swapping this for per-item
//! patches would only touch this adapter.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::ports::outbound::{RawApiPort, StoreError, WorldStorePort};
use phantasm_domain::{World, WorldId};

pub struct RestWorldStore {
    api: Arc<dyn RawApiPort>,
}

impl RestWorldStore {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    fn collection_path(owner: &str) -> String {
        format!("/users/{owner}/worlds")
    }

    fn document_path(owner: &str, world_id: &WorldId) -> String {
        format!("/users/{owner}/worlds/{world_id}")
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl WorldStorePort for RestWorldStore {
    async fn list_worlds(&self, owner: &str) -> Result<Vec<World>, StoreError> {
        let value = self
            .api
            .get_json(&Self::collection_path(owner))
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    async fn create_world(&self, owner: &str, world: &World) -> Result<WorldId, StoreError> {
        let body =
            serde_json::to_value(world).map_err(|e| StoreError::Malformed(e.to_string()))?;
        let value = self
            .api
            .post_json(&Self::collection_path(owner), &body)
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        #[derive(Deserialize)]
        struct CreateResponse {
            id: String,
        }

        let response: CreateResponse =
            serde_json::from_value(value).map_err(|e| StoreError::Malformed(e.to_string()))?;
        Ok(WorldId::new(response.id))
    }

    async fn update_world_field(
        &self,
        owner: &str,
        world_id: &WorldId,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError> {
        let body = json!({ field: value });
        self.api
            .patch_json(&Self::document_path(owner, world_id), &body)
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_scoped_per_owner() {
        assert_eq!(RestWorldStore::collection_path("u1"), "/users/u1/worlds");
        assert_eq!(
            RestWorldStore::document_path("u1", &WorldId::new("w9")),
            "/users/u1/worlds/w9"
        );
    }
}
