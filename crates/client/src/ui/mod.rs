use std::sync::Arc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::ports::outbound::PlatformPort;
use crate::state::{Action, ViewKind};

pub mod presentation;

use presentation::{refetch_worlds, use_app_store, StateHandle};

/// Type alias for the platform port used throughout the UI.
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context.
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

const STYLESHEET: &str = include_str!("../../assets/main.css");

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `src/main.rs`).
    let services = use_context::<presentation::Services>();
    let state = use_context_provider(StateHandle::new);

    // Bridge the identity adapter's auth-changed callback into the reducer.
    // The listener must be Send + Sync while signals are not, so it feeds a
    // channel drained by a UI task. A sign-in is immediately followed by
    // the initial world fetch, which is what moves Loading on to Home.
    {
        let services = services.clone();
        use_hook(move || {
            let (tx, mut rx) = futures_channel::mpsc::unbounded();
            services.identity.on_auth_changed(Box::new(move |user| {
                let _ = tx.unbounded_send(user);
            }));
            spawn(async move {
                while let Some(user) = rx.next().await {
                    let signed_in = user.is_some();
                    state.dispatch(Action::AuthChanged(user));
                    if signed_in {
                        refetch_worlds(&services, state).await;
                    }
                }
            });
        });
    }

    let view = state.read().current_view;

    rsx! {
        style { {STYLESHEET} }

        div {
            class: "app-shell",
            AppHeader {}
            main {
                class: "app-content",
                match view {
                    ViewKind::Loading => rsx! { LoadingView {} },
                    ViewKind::Login => rsx! { presentation::views::LoginView {} },
                    ViewKind::Home => rsx! { presentation::views::HomeView {} },
                    ViewKind::Editor => rsx! { presentation::views::EditorView {} },
                    ViewKind::Campaign => rsx! { presentation::views::WikiView {} },
                }
            }
            footer {
                class: "app-footer",
                "Phantasmagoria - a worldbuilding companion"
            }
        }
    }
}

/// Context-sensitive top bar: title always, greeting and sign-out when a
/// user is present, a back affordance inside the editor and the wiki.
#[component]
fn AppHeader() -> Element {
    let state = use_app_store();
    let services = presentation::use_services();
    let snapshot = state.read();

    let in_world = matches!(
        snapshot.current_view,
        ViewKind::Editor | ViewKind::Campaign
    );
    let greeting = snapshot
        .user
        .as_ref()
        .map(|u| format!("Welcome, {}", u.greeting_name()));

    rsx! {
        header {
            class: "app-header",
            div {
                class: "app-header-left",
                if in_world {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| state.dispatch(Action::BackHome),
                        "← Worlds"
                    }
                }
                h1 { class: "app-title", "Phantasmagoria" }
            }
            if let Some(greeting) = greeting {
                div {
                    class: "app-header-right",
                    span { class: "app-greeting", "{greeting}" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            let auth = services.auth.clone();
                            spawn(async move { auth.sign_out().await });
                        },
                        "Sign Out"
                    }
                }
            }
        }
    }
}

#[component]
fn LoadingView() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            "Loading your worlds..."
        }
    }
}
