//! Service providers for the presentation layer.
//!
//! The composition root builds one [`Services`] bundle and provides it via
//! Dioxus context; components reach it through the `use_*` hooks and never
//! see infrastructure adapter types.

use std::sync::Arc;

use dioxus::prelude::*;

use super::store::StateHandle;
use crate::application::services::{AuthService, EntityService, WorldService};
use crate::ports::outbound::{IdentityPort, PlatformPort, WorldStorePort};
use crate::state::Action;

/// All services wrapped for context provision.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub worlds: WorldService,
    pub entities: EntityService,
    /// Kept for auth-changed listener registration at the app root.
    pub identity: Arc<dyn IdentityPort>,
}

impl Services {
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        store: Arc<dyn WorldStorePort>,
        platform: Arc<dyn PlatformPort>,
    ) -> Self {
        Self {
            auth: AuthService::new(identity.clone()),
            worlds: WorldService::new(store.clone()),
            entities: EntityService::new(store, platform),
            identity,
        }
    }
}

/// Hook to access the service bundle from context.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the AuthService from context.
pub fn use_auth_service() -> AuthService {
    use_services().auth
}

/// Hook to access the EntityService from context.
pub fn use_entity_service() -> EntityService {
    use_services().entities
}

/// Issue a sequenced world-list refetch and feed the result through the
/// reducer. The sequence number is captured after `FetchStarted` so a
/// response overtaken by a newer refetch is discarded on arrival.
pub async fn refetch_worlds(services: &Services, state: StateHandle) {
    let Some(owner) = state.peek().user.map(|u| u.uid) else {
        return;
    };
    state.dispatch(Action::FetchStarted);
    let seq = state.peek().fetch_seq;
    let worlds = services.worlds.list_worlds(&owner).await;
    state.dispatch(Action::WorldsLoaded { seq, worlds });
}
