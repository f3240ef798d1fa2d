//! In-memory fixtures for service and UI tests.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use crate::ports::outbound::{StoreError, WorldStorePort};
use phantasm_domain::{World, WorldId};

/// World store backed by a per-owner map. Assigns sequential `w{n}` ids
/// and applies field updates at the JSON map level, like the real store.
#[derive(Default)]
pub struct InMemoryWorldStore {
    worlds: Mutex<HashMap<String, Vec<(WorldId, Value)>>>,
    next_id: Mutex<u64>,
}

impl InMemoryWorldStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a world under `owner`, returning its assigned id.
    pub fn seed(&self, owner: &str, world: &World) -> Result<WorldId, StoreError> {
        let mut document =
            serde_json::to_value(world).map_err(|e| StoreError::Malformed(e.to_string()))?;
        let id = {
            let mut next = self.next_id.lock().map_err(poisoned)?;
            *next += 1;
            WorldId::new(format!("w{next}"))
        };
        if let Some(map) = document.as_object_mut() {
            map.insert("id".to_string(), Value::String(id.to_string()));
        }
        self.worlds
            .lock()
            .map_err(poisoned)?
            .entry(owner.to_string())
            .or_default()
            .push((id.clone(), document));
        Ok(id)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Request("store lock poisoned".to_string())
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl WorldStorePort for InMemoryWorldStore {
    async fn list_worlds(&self, owner: &str) -> Result<Vec<World>, StoreError> {
        let worlds = self.worlds.lock().map_err(poisoned)?;
        worlds
            .get(owner)
            .map(|docs| {
                docs.iter()
                    .map(|(_, doc)| {
                        serde_json::from_value(doc.clone())
                            .map_err(|e| StoreError::Malformed(e.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_world(&self, owner: &str, world: &World) -> Result<WorldId, StoreError> {
        self.seed(owner, world)
    }

    async fn update_world_field(
        &self,
        owner: &str,
        world_id: &WorldId,
        field: &str,
        value: Value,
    ) -> Result<(), StoreError> {
        let mut worlds = self.worlds.lock().map_err(poisoned)?;
        let document = worlds
            .get_mut(owner)
            .and_then(|docs| docs.iter_mut().find(|(id, _)| id == world_id))
            .map(|(_, doc)| doc)
            .ok_or_else(|| StoreError::Request(format!("no world {world_id} for {owner}")))?;
        match document.as_object_mut() {
            Some(map) => {
                map.insert(field.to_string(), value);
                Ok(())
            }
            None => Err(StoreError::Malformed("world document is not a map".to_string())),
        }
    }
}

/// Identity provider with one scripted account. Sign-in succeeds only for
/// the configured credentials; listeners fire the way the real adapter's
/// do.
pub struct ScriptedIdentity {
    email: String,
    password: String,
    current: Mutex<Option<crate::ports::outbound::AuthUser>>,
    listeners: Mutex<Vec<crate::ports::outbound::AuthListener>>,
}

impl ScriptedIdentity {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            current: Mutex::new(None),
            listeners: Mutex::new(Vec::new()),
        }
    }

    fn notify(&self) {
        let current = self.current.lock().ok().and_then(|c| c.clone());
        if let Ok(listeners) = self.listeners.lock() {
            for listener in listeners.iter() {
                listener(current.clone());
            }
        }
    }

    fn user(&self) -> crate::ports::outbound::AuthUser {
        crate::ports::outbound::AuthUser {
            uid: "scripted-uid".to_string(),
            display_name: None,
            email: Some(self.email.clone()),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl crate::ports::outbound::IdentityPort for ScriptedIdentity {
    async fn sign_in_with_provider(&self) -> Result<(), crate::ports::outbound::AuthError> {
        Err(crate::ports::outbound::AuthError::Other(
            "no provider in tests".to_string(),
        ))
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<crate::ports::outbound::AuthUser, crate::ports::outbound::AuthError> {
        if email == self.email && password == self.password {
            let user = self.user();
            if let Ok(mut slot) = self.current.lock() {
                *slot = Some(user.clone());
            }
            self.notify();
            Ok(user)
        } else {
            Err(crate::ports::outbound::AuthError::InvalidCredentials)
        }
    }

    async fn sign_up_with_password(
        &self,
        email: &str,
        _password: &str,
    ) -> Result<crate::ports::outbound::AuthUser, crate::ports::outbound::AuthError> {
        if email == self.email {
            Err(crate::ports::outbound::AuthError::EmailInUse)
        } else {
            Err(crate::ports::outbound::AuthError::Other(
                "sign-up not scripted".to_string(),
            ))
        }
    }

    async fn sign_out(&self) -> Result<(), crate::ports::outbound::AuthError> {
        if let Ok(mut slot) = self.current.lock() {
            *slot = None;
        }
        self.notify();
        Ok(())
    }

    async fn current_user(&self) -> Option<crate::ports::outbound::AuthUser> {
        self.current.lock().ok().and_then(|c| c.clone())
    }

    fn on_auth_changed(&self, listener: crate::ports::outbound::AuthListener) {
        let current = self.current.lock().ok().and_then(|c| c.clone());
        listener(current);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::services::EntityService;
    use crate::ports::outbound::{AuthUser, PlatformPort};
    use crate::state::{AppState, ViewKind};
    use phantasm_domain::Character;

    struct TickingClock(Mutex<u64>);

    impl PlatformPort for TickingClock {
        fn now_millis(&self) -> u64 {
            let mut now = self.0.lock().unwrap();
            *now += 1;
            *now
        }
    }

    fn state_for(owner: &str, worlds: Vec<World>, selected: WorldId) -> AppState {
        AppState {
            current_view: ViewKind::Editor,
            selected_world_id: Some(selected),
            worlds,
            user: Some(AuthUser {
                uid: owner.to_string(),
                display_name: None,
                email: None,
            }),
            ..AppState::default()
        }
    }

    #[tokio::test]
    async fn save_then_delete_round_trips_through_the_store() {
        let store = Arc::new(InMemoryWorldStore::new());
        let world_id = store
            .seed("u1", &World::new("Aeldran", "", ""))
            .expect("seed");
        let svc = EntityService::new(
            store.clone(),
            Arc::new(TickingClock(Mutex::new(1_000))),
        );

        // Save a new character against the freshly listed state.
        let worlds = store.list_worlds("u1").await.expect("list");
        let state = state_for("u1", worlds, world_id.clone());
        let id = svc
            .save_entity(Character::new("Kael").with_role("Rogue"), &state)
            .await
            .expect("save")
            .expect("saved");

        let worlds = store.list_worlds("u1").await.expect("list");
        assert_eq!(worlds[0].characters.len(), 1);
        assert_eq!(worlds[0].characters[0].name, "Kael");
        assert_eq!(worlds[0].characters[0].id.as_ref(), Some(&id));

        // Edit it: unnamed fields survive, the array does not grow.
        let mut state = state_for("u1", worlds, world_id.clone());
        state.editing = Some(phantasm_domain::EditTarget::Existing(id.clone()));
        svc.save_entity(Character::new("Kael").with_role("Spymaster"), &state)
            .await
            .expect("save")
            .expect("saved");

        let worlds = store.list_worlds("u1").await.expect("list");
        assert_eq!(worlds[0].characters.len(), 1);
        assert_eq!(worlds[0].characters[0].role, "Spymaster");

        // Delete it.
        let state = state_for("u1", worlds, world_id);
        svc.delete_entity::<Character>(&id, &state)
            .await
            .expect("delete");

        let worlds = store.list_worlds("u1").await.expect("list");
        assert!(worlds[0].characters.is_empty());
    }

    #[tokio::test]
    async fn owners_do_not_see_each_other_worlds() {
        let store = InMemoryWorldStore::new();
        store.seed("u1", &World::new("Aeldran", "", "")).expect("seed");

        assert_eq!(store.list_worlds("u1").await.expect("list").len(), 1);
        assert!(store.list_worlds("u2").await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn update_against_a_missing_world_fails() {
        let store = InMemoryWorldStore::new();
        let result = store
            .update_world_field("u1", &WorldId::new("w9"), "characters", Value::Array(vec![]))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn scripted_identity_honours_only_its_credentials() {
        use crate::ports::outbound::{AuthError, IdentityPort};

        let identity = ScriptedIdentity::new("a@b.test", "hunter2");
        let err = identity
            .sign_in_with_password("a@b.test", "wrong")
            .await
            .expect_err("wrong password");
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(identity.current_user().await.is_none());

        let user = identity
            .sign_in_with_password("a@b.test", "hunter2")
            .await
            .expect("sign in");
        assert_eq!(user.email.as_deref(), Some("a@b.test"));

        // Listeners see the current state at registration and on sign-out.
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        identity.on_auth_changed(Box::new(move |user| {
            sink.lock().unwrap().push(user.is_some());
        }));
        identity.sign_out().await.expect("sign out");
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[tokio::test]
    async fn seeded_ids_are_sequential() {
        let store = InMemoryWorldStore::new();
        let a = store.seed("u1", &World::new("A", "", "")).expect("seed");
        let b = store.seed("u1", &World::new("B", "", "")).expect("seed");
        assert_eq!(a.as_str(), "w1");
        assert_eq!(b.as_str(), "w2");
    }
}
