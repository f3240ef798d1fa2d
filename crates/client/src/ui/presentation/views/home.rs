//! Home screen: the world card grid.

use dioxus::prelude::*;

use crate::state::Action;
use crate::ui::presentation::{refetch_worlds, use_app_store, use_services};
use phantasm_domain::WorldId;

#[component]
pub fn HomeView() -> Element {
    let state = use_app_store();
    let mut show_create = use_signal(|| false);

    let worlds = state.read().worlds;

    rsx! {
        div {
            class: "world-grid",
            for world in worlds {
                if let Some(id) = world.id.clone() {
                    WorldCard {
                        key: "{id}",
                        id,
                        name: world.name.clone(),
                        tagline: world.tagline.clone(),
                        image_url: world.image_url.clone(),
                    }
                }
            }
            button {
                class: "new-world-card",
                onclick: move |_| show_create.set(true),
                "+ Create New World"
            }
        }

        if *show_create.read() {
            CreateWorldDialog {
                on_close: move |_| show_create.set(false),
            }
        }
    }
}

#[component]
fn WorldCard(id: WorldId, name: String, tagline: String, image_url: Option<String>) -> Element {
    let state = use_app_store();
    let editor_id = id.clone();
    let wiki_id = id.clone();

    rsx! {
        div {
            class: "world-card",
            if let Some(url) = image_url {
                img { src: "{url}", alt: "{name}" }
            }
            h3 { "{name}" }
            if !tagline.is_empty() {
                p { class: "world-tagline", "{tagline}" }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.dispatch(Action::OpenEditor(editor_id.clone())),
                    "Open Editor"
                }
                button {
                    class: "btn",
                    onclick: move |_| state.dispatch(Action::OpenWiki(wiki_id.clone())),
                    "Campaign Wiki"
                }
            }
        }
    }
}

/// Modal collecting name, tagline and description for a new world. The
/// created world opens straight into its editor once the refetch lands.
#[component]
fn CreateWorldDialog(on_close: EventHandler<()>) -> Element {
    let state = use_app_store();
    let services = use_services();

    let mut name = use_signal(String::new);
    let mut tagline = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let create = move |_| {
        if *busy.read() || name.peek().is_empty() {
            return;
        }
        busy.set(true);
        let services = services.clone();
        let name = name.peek().to_string();
        let tagline = tagline.peek().to_string();
        let description = description.peek().to_string();
        spawn(async move {
            let Some(owner) = state.peek().user.map(|u| u.uid) else {
                busy.set(false);
                return;
            };
            match services
                .worlds
                .create_world(&owner, &name, &tagline, &description)
                .await
            {
                Ok(id) => {
                    refetch_worlds(&services, state).await;
                    state.dispatch(Action::OpenEditor(id));
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("Error creating world: {e}");
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                h3 { "Create a New World" }
                div {
                    class: "field",
                    label { "Name" }
                    input {
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "field",
                    label { "Tagline" }
                    input {
                        value: "{tagline}",
                        oninput: move |e| tagline.set(e.value()),
                    }
                }
                div {
                    class: "field",
                    label { "Description" }
                    textarea {
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: *busy.read(),
                        onclick: create,
                        "Create"
                    }
                    button {
                        class: "btn",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
