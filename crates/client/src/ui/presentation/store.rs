//! The view-state store: one signal, one reducer, one write path.

use dioxus::prelude::*;

use crate::state::{reduce, Action, AppState};

/// Handle to the single `AppState` signal.
///
/// Every mutation goes through [`StateHandle::dispatch`], which runs the
/// pure reducer and writes the result back; that write is the only
/// subscription point driving re-render. Components read snapshots.
#[derive(Clone, Copy)]
pub struct StateHandle {
    inner: Signal<AppState>,
}

impl StateHandle {
    /// Must be created inside an active Dioxus runtime.
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AppState::default()),
        }
    }

    /// Run one action through the reducer. No-change transitions skip the
    /// signal write so they do not trigger a render.
    pub fn dispatch(&self, action: Action) {
        let mut inner = self.inner;
        let next = reduce(inner.peek().clone(), action);
        if *inner.peek() != next {
            inner.set(next);
        }
    }

    /// Snapshot of the current state, subscribing the caller to changes.
    pub fn read(&self) -> AppState {
        self.inner.read().clone()
    }

    /// Snapshot without subscribing; for event handlers and async tasks.
    pub fn peek(&self) -> AppState {
        self.inner.peek().clone()
    }
}

/// Hook to access the shared state handle from context.
pub fn use_app_store() -> StateHandle {
    use_context::<StateHandle>()
}
