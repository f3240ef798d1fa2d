//! World profile form: name, tagline, overview prose, magic system.

use dioxus::prelude::*;

use crate::ui::presentation::components::{ImageField, TextAreaField, TextField};
use crate::ui::presentation::{refetch_worlds, use_app_store, use_services};
use phantasm_domain::{MagicSystem, Overview, World};

#[component]
pub fn WorldForm(world: World) -> Element {
    let state = use_app_store();
    let services = use_services();

    let world_id = world.id.clone();

    let mut name = use_signal(|| world.name.clone());
    let mut tagline = use_signal(|| world.tagline.clone());
    let mut description = use_signal(|| world.description.clone());
    let mut image_url = use_signal(|| world.image_url.clone().unwrap_or_default());
    let mut concept = use_signal(|| world.overview.concept.clone());
    let mut history = use_signal(|| world.overview.history.clone());
    let mut geography = use_signal(|| world.overview.geography.clone());
    let mut magic_name = use_signal(|| world.magic.name.clone());
    let mut magic_description = use_signal(|| world.magic.description.clone());
    let mut magic_sources = use_signal(|| world.magic.sources.clone());
    let mut magic_limitations = use_signal(|| world.magic.limitations.clone());
    let mut busy = use_signal(|| false);
    let mut saved = use_signal(|| false);

    let save = {
        let world = world.clone();
        move |_| {
            if *busy.read() {
                return;
            }
            let (Some(owner), Some(world_id)) = (
                state.peek().user.map(|u| u.uid),
                world_id.clone(),
            ) else {
                return;
            };
            busy.set(true);
            saved.set(false);
            let services = services.clone();

            let image = image_url.peek().to_string();
            let mut updated = world.clone();
            updated.name = name.peek().to_string();
            updated.tagline = tagline.peek().to_string();
            updated.description = description.peek().to_string();
            updated.image_url = if image.is_empty() { None } else { Some(image) };
            updated.overview = Overview {
                concept: concept.peek().to_string(),
                history: history.peek().to_string(),
                geography: geography.peek().to_string(),
            };
            updated.magic = MagicSystem {
                name: magic_name.peek().to_string(),
                description: magic_description.peek().to_string(),
                sources: magic_sources.peek().to_string(),
                limitations: magic_limitations.peek().to_string(),
            };

            spawn(async move {
                match services
                    .worlds
                    .save_world_profile(&owner, &world_id, &updated)
                    .await
                {
                    Ok(()) => {
                        saved.set(true);
                        refetch_worlds(&services, state).await;
                    }
                    Err(e) => {
                        tracing::error!("Error saving world profile: {e}");
                    }
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "pane-header",
            h2 { "World" }
            if *saved.read() {
                span { class: "entity-sub", "Saved." }
            }
        }
        div {
            class: "entity-form",
            TextField { label: "Name", value: name.read().clone(), on_input: move |v| name.set(v) }
            TextField { label: "Tagline", value: tagline.read().clone(), on_input: move |v| tagline.set(v) }
            TextAreaField { label: "Description", value: description.read().clone(), on_input: move |v| description.set(v) }
            ImageField { value: image_url.read().clone(), on_input: move |v| image_url.set(v) }

            h4 { "Overview" }
            TextAreaField { label: "Concept", value: concept.read().clone(), on_input: move |v| concept.set(v) }
            TextAreaField { label: "History", value: history.read().clone(), on_input: move |v| history.set(v) }
            TextAreaField { label: "Geography", value: geography.read().clone(), on_input: move |v| geography.set(v) }

            h4 { "Magic System" }
            TextField { label: "Name", value: magic_name.read().clone(), on_input: move |v| magic_name.set(v) }
            TextAreaField { label: "Description", value: magic_description.read().clone(), on_input: move |v| magic_description.set(v) }
            TextAreaField { label: "Sources", value: magic_sources.read().clone(), on_input: move |v| magic_sources.set(v) }
            TextAreaField { label: "Limitations", value: magic_limitations.read().clone(), on_input: move |v| magic_limitations.set(v) }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: *busy.read(),
                    onclick: save,
                    "Save World"
                }
            }
        }
    }
}
