//! World Service - listing and creating world documents.

use std::sync::Arc;

use crate::application::ServiceError;
use crate::ports::outbound::WorldStorePort;
use phantasm_domain::{World, WorldId};

/// Use cases over whole world documents.
#[derive(Clone)]
pub struct WorldService {
    store: Arc<dyn WorldStorePort>,
}

impl WorldService {
    pub fn new(store: Arc<dyn WorldStorePort>) -> Self {
        Self { store }
    }

    /// All worlds owned by `owner`.
    ///
    /// A listing failure degrades to an empty list with no user
    /// notification; the next refetch may recover.
    pub async fn list_worlds(&self, owner: &str) -> Vec<World> {
        match self.store.list_worlds(owner).await {
            Ok(worlds) => worlds,
            Err(e) => {
                tracing::error!("Error fetching worlds: {e}");
                Vec::new()
            }
        }
    }

    /// Persist the world-level profile fields (name, tagline, description,
    /// image, overview, magic system) of an existing world.
    ///
    /// Each field is its own last-write-wins update; there is no document
    /// transaction, matching the store's per-field write model.
    pub async fn save_world_profile(
        &self,
        owner: &str,
        world_id: &WorldId,
        world: &World,
    ) -> Result<(), ServiceError> {
        let fields = [
            ("name", serde_json::to_value(&world.name)),
            ("tagline", serde_json::to_value(&world.tagline)),
            ("description", serde_json::to_value(&world.description)),
            ("imageUrl", serde_json::to_value(&world.image_url)),
            ("overview", serde_json::to_value(&world.overview)),
            ("magic", serde_json::to_value(&world.magic)),
        ];
        for (field, value) in fields {
            let value = value.map_err(phantasm_domain::DomainError::from)?;
            self.store
                .update_world_field(owner, world_id, field, value)
                .await
                .map_err(|e| {
                    tracing::error!("Error saving world {field}: {e}");
                    e
                })?;
        }
        Ok(())
    }

    /// Create a world with empty sub-collections and return its store-assigned id.
    pub async fn create_world(
        &self,
        owner: &str,
        name: &str,
        tagline: &str,
        description: &str,
    ) -> Result<WorldId, ServiceError> {
        let world = World::new(name, tagline, description);
        let id = self.store.create_world(owner, &world).await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockWorldStorePort, StoreError};

    #[tokio::test]
    async fn listing_failure_degrades_to_an_empty_list() {
        let mut store = MockWorldStorePort::new();
        store
            .expect_list_worlds()
            .returning(|_| Err(StoreError::Request("boom".to_string())));
        let service = WorldService::new(Arc::new(store));

        assert!(service.list_worlds("u1").await.is_empty());
    }

    #[tokio::test]
    async fn profile_save_writes_each_field_by_wire_name() {
        let mut store = MockWorldStorePort::new();
        let mut seen: Vec<&str> = vec![
            "name",
            "tagline",
            "description",
            "imageUrl",
            "overview",
            "magic",
        ];
        seen.reverse();
        let seen = std::sync::Mutex::new(seen);
        store
            .expect_update_world_field()
            .times(6)
            .withf(move |owner, world_id, field, _| {
                let expected = seen.lock().unwrap().pop().unwrap();
                owner == "u1" && world_id.as_str() == "w1" && field == expected
            })
            .returning(|_, _, _, _| Ok(()));
        let service = WorldService::new(Arc::new(store));

        let mut world = World::new("Aeldran", "salt and stars", "desc");
        world.id = Some(WorldId::new("w1"));
        service
            .save_world_profile("u1", &WorldId::new("w1"), &world)
            .await
            .expect("save");
    }

    #[tokio::test]
    async fn create_world_persists_empty_sub_collections() {
        let mut store = MockWorldStorePort::new();
        store
            .expect_create_world()
            .withf(|owner, world| {
                owner == "u1"
                    && world.name == "Aeldran"
                    && world.characters.is_empty()
                    && world.id.is_none()
            })
            .returning(|_, _| Ok(WorldId::new("w1")));
        let service = WorldService::new(Arc::new(store));

        let id = service
            .create_world("u1", "Aeldran", "salt and stars", "desc")
            .await
            .expect("create");
        assert_eq!(id, WorldId::new("w1"));
    }
}
