//! Entity Service - the save/delete core for sub-entity records.
//!
//! A save assembles a typed payload (done by the form), upserts it into the
//! owning world's array, and persists the whole array as one field-level
//! update on the world document. The caller triggers a sequenced refetch
//! afterwards; on failure it re-enables the save control and nothing else.

use std::sync::Arc;

use crate::application::ServiceError;
use crate::ports::outbound::{PlatformPort, WorldStorePort};
use crate::state::AppState;
use phantasm_domain::{collection, DomainError, EditTarget, EntityId, EntityRecord};

/// Save and delete operations, generic over the record kind.
#[derive(Clone)]
pub struct EntityService {
    store: Arc<dyn WorldStorePort>,
    platform: Arc<dyn PlatformPort>,
}

impl EntityService {
    pub fn new(store: Arc<dyn WorldStorePort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { store, platform }
    }

    /// Upsert `payload` into the selected world's array for `T`'s kind and
    /// persist that array.
    ///
    /// Precondition: an authenticated user and a selected world. When
    /// either is missing the call is a silent no-op returning `Ok(None)`,
    /// matching the save affordance only being reachable with both present.
    ///
    /// New records (and edits whose target vanished under a concurrent
    /// rewrite) get a timestamp-derived id from the platform clock.
    pub async fn save_entity<T: EntityRecord>(
        &self,
        payload: T,
        state: &AppState,
    ) -> Result<Option<EntityId>, ServiceError> {
        let (Some(user), Some(world_id)) = (&state.user, &state.selected_world_id) else {
            tracing::warn!("save_entity called without user or selected world; ignoring");
            return Ok(None);
        };
        let Some(world) = state.selected_world() else {
            tracing::warn!("save_entity: selected world {world_id} not in state; ignoring");
            return Ok(None);
        };

        let target = match &state.editing {
            Some(EditTarget::Existing(id)) => EditTarget::Existing(id.clone()),
            _ => EditTarget::New,
        };
        let new_id = EntityId::from_millis(self.platform.now_millis());

        let mut world = world.clone();
        let items = T::collection_mut(&mut world);
        let id = collection::upsert(items, &target, payload, new_id)?;

        let value = serde_json::to_value(T::collection(&world)).map_err(DomainError::from)?;
        self.store
            .update_world_field(&user.uid, world_id, T::KIND.field_name(), value)
            .await
            .map_err(|e| {
                tracing::error!("Error saving {}: {e}", T::KIND.label());
                e
            })?;

        Ok(Some(id))
    }

    /// Remove the record with `id` from the selected world's array for
    /// `T`'s kind and persist the filtered array.
    ///
    /// The caller refetches unconditionally, even when this returns an
    /// error - a failed delete resurfaces the record with no error text.
    /// Known gap, preserved.
    pub async fn delete_entity<T: EntityRecord>(
        &self,
        id: &EntityId,
        state: &AppState,
    ) -> Result<(), ServiceError> {
        let (Some(user), Some(world_id)) = (&state.user, &state.selected_world_id) else {
            tracing::warn!("delete_entity called without user or selected world; ignoring");
            return Ok(());
        };
        let Some(world) = state.selected_world() else {
            return Ok(());
        };

        let mut world = world.clone();
        let items = T::collection_mut(&mut world);
        if !collection::remove(items, id) {
            tracing::warn!("delete_entity: {} {id} already gone", T::KIND.label());
        }

        let value = serde_json::to_value(T::collection(&world)).map_err(DomainError::from)?;
        self.store
            .update_world_field(&user.uid, world_id, T::KIND.field_name(), value)
            .await
            .map_err(|e| {
                tracing::error!("Error deleting {}: {e}", T::KIND.label());
                e
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{AuthUser, MockWorldStorePort, StoreError};
    use crate::state::ViewKind;
    use phantasm_domain::{Character, World, WorldId};

    struct FixedClock(u64);

    impl PlatformPort for FixedClock {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    fn state_with_world(world: World) -> AppState {
        AppState {
            current_view: ViewKind::Editor,
            selected_world_id: world.id.clone(),
            worlds: vec![world],
            user: Some(AuthUser {
                uid: "u1".to_string(),
                display_name: None,
                email: None,
            }),
            ..AppState::default()
        }
    }

    fn world_with_character(id: &str, name: &str) -> World {
        let mut world = World::new("Aeldran", "", "");
        world.id = Some(WorldId::new("w1"));
        let mut character = Character::new(name);
        character.id = Some(EntityId::from_raw(id));
        world.characters.push(character);
        world
    }

    fn service(store: MockWorldStorePort, now: u64) -> EntityService {
        EntityService::new(Arc::new(store), Arc::new(FixedClock(now)))
    }

    #[tokio::test]
    async fn missing_user_is_a_silent_no_op() {
        // The mock has no expectations: any store call would panic.
        let store = MockWorldStorePort::new();
        let svc = service(store, 1);

        let mut state = state_with_world(world_with_character("1", "Alice"));
        state.user = None;

        let saved = svc
            .save_entity(Character::new("Kael"), &state)
            .await
            .expect("no-op");
        assert!(saved.is_none());
    }

    #[tokio::test]
    async fn missing_selected_world_is_a_silent_no_op() {
        let store = MockWorldStorePort::new();
        let svc = service(store, 1);

        let mut state = state_with_world(world_with_character("1", "Alice"));
        state.selected_world_id = None;

        let saved = svc
            .save_entity(Character::new("Kael"), &state)
            .await
            .expect("no-op");
        assert!(saved.is_none());
    }

    #[tokio::test]
    async fn new_save_appends_and_rewrites_the_whole_array() {
        let mut store = MockWorldStorePort::new();
        store
            .expect_update_world_field()
            .withf(|owner, world_id, field, value| {
                let array = value.as_array().expect("array value");
                owner == "u1"
                    && world_id.as_str() == "w1"
                    && field == "characters"
                    && array.len() == 2
                    && array[1]["id"] == "1714000000000"
                    && array[1]["name"] == "Kael"
                    && array[1]["role"] == "Rogue"
            })
            .returning(|_, _, _, _| Ok(()));
        let svc = service(store, 1_714_000_000_000);

        let state = state_with_world(world_with_character("1", "Alice"));
        let id = svc
            .save_entity(Character::new("Kael").with_role("Rogue"), &state)
            .await
            .expect("save")
            .expect("saved");
        assert_eq!(id.as_str(), "1714000000000");
    }

    #[tokio::test]
    async fn editing_an_existing_record_merges_without_duplicating() {
        let mut store = MockWorldStorePort::new();
        store
            .expect_update_world_field()
            .withf(|_, _, field, value| {
                let array = value.as_array().expect("array value");
                field == "characters"
                    && array.len() == 1
                    && array[0]["id"] == "1"
                    && array[0]["name"] == "Alice the Bold"
            })
            .returning(|_, _, _, _| Ok(()));
        let svc = service(store, 99);

        let mut state = state_with_world(world_with_character("1", "Alice"));
        state.editing = Some(EditTarget::Existing(EntityId::from_raw("1")));

        let id = svc
            .save_entity(Character::new("Alice the Bold"), &state)
            .await
            .expect("save")
            .expect("saved");
        assert_eq!(id.as_str(), "1");
    }

    #[tokio::test]
    async fn vanished_edit_target_appends_with_a_fresh_id() {
        let mut store = MockWorldStorePort::new();
        store
            .expect_update_world_field()
            .withf(|_, _, _, value| {
                let array = value.as_array().expect("array value");
                array.len() == 2 && array[1]["id"] == "555"
            })
            .returning(|_, _, _, _| Ok(()));
        let svc = service(store, 555);

        let mut state = state_with_world(world_with_character("1", "Alice"));
        state.editing = Some(EditTarget::Existing(EntityId::from_raw("gone")));

        let id = svc
            .save_entity(Character::new("Kael"), &state)
            .await
            .expect("save")
            .expect("saved");
        assert_eq!(id.as_str(), "555");
    }

    #[tokio::test]
    async fn store_failure_surfaces_so_the_save_control_re_enables() {
        let mut store = MockWorldStorePort::new();
        store
            .expect_update_world_field()
            .returning(|_, _, _, _| Err(StoreError::Request("offline".to_string())));
        let svc = service(store, 1);

        let state = state_with_world(world_with_character("1", "Alice"));
        let result = svc.save_entity(Character::new("Kael"), &state).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_matching_record() {
        let mut store = MockWorldStorePort::new();
        store
            .expect_update_world_field()
            .withf(|_, _, field, value| {
                let array = value.as_array().expect("array value");
                field == "characters" && array.is_empty()
            })
            .returning(|_, _, _, _| Ok(()));
        let svc = service(store, 1);

        let state = state_with_world(world_with_character("1", "Alice"));
        svc.delete_entity::<Character>(&EntityId::from_raw("1"), &state)
            .await
            .expect("delete");
    }
}
