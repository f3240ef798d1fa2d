//! Race category: list, detail, and form.

use dioxus::prelude::*;

use crate::state::Action;
use crate::ui::presentation::components::characters::RichDetail;
use crate::ui::presentation::components::{DeleteButton, ImageField, TextAreaField, TextField};
use crate::ui::presentation::{refetch_worlds, use_app_store, use_services};
use phantasm_domain::{EditTarget, EntityId, Race, World};

#[component]
pub fn RaceSection(world: World) -> Element {
    let state = use_app_store();
    let snapshot = state.read();

    if snapshot.editing.is_some() {
        return rsx! { RaceForm { world } };
    }
    if let Some(id) = snapshot.viewing.clone() {
        return rsx! { RaceDetail { world, id } };
    }

    rsx! {
        div {
            class: "pane-header",
            h2 { "Races" }
            button {
                class: "btn btn-primary",
                onclick: move |_| state.dispatch(Action::CreateItem),
                "+ New Race"
            }
        }
        if world.races.is_empty() {
            div { class: "empty-state", "No races yet. Create the first one." }
        }
        div {
            class: "entity-grid",
            for race in world.races.clone() {
                if let Some(id) = race.id.clone() {
                    RaceCard { key: "{id}", race, id }
                }
            }
        }
    }
}

#[component]
fn RaceCard(race: Race, id: EntityId) -> Element {
    let state = use_app_store();
    let services = use_services();

    let view_id = id.clone();
    let edit_id = id.clone();
    let delete_id = id.clone();

    rsx! {
        div {
            class: "entity-card",
            if !race.image_url.is_empty() {
                img { src: "{race.image_url}", alt: "{race.name}" }
            }
            h3 { "{race.name}" }
            div {
                class: "card-actions",
                button {
                    class: "btn",
                    onclick: move |_| state.dispatch(Action::ViewItem(view_id.clone())),
                    "View"
                }
                button {
                    class: "btn",
                    onclick: move |_| state.dispatch(Action::EditItem(edit_id.clone())),
                    "Edit"
                }
                DeleteButton {
                    on_confirm: move |_| {
                        let services = services.clone();
                        let id = delete_id.clone();
                        spawn(async move {
                            let _ = services
                                .entities
                                .delete_entity::<Race>(&id, &state.peek())
                                .await;
                            refetch_worlds(&services, state).await;
                        });
                    },
                }
            }
        }
    }
}

#[component]
fn RaceDetail(world: World, id: EntityId) -> Element {
    let state = use_app_store();
    let Some(race) = world.races.iter().find(|r| r.id.as_ref() == Some(&id)) else {
        return rsx! {
            div { class: "empty-state", "This race is no longer in the world." }
        };
    };
    let race = race.clone();
    let edit_id = id.clone();

    rsx! {
        div {
            class: "pane-header",
            h2 { "{race.name}" }
            div {
                class: "card-actions",
                button {
                    class: "btn",
                    onclick: move |_| state.dispatch(Action::EditItem(edit_id.clone())),
                    "Edit"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| state.dispatch(Action::CancelItem),
                    "Close"
                }
            }
        }
        div {
            class: "detail-panel",
            if !race.image_url.is_empty() {
                img { class: "image-preview", src: "{race.image_url}" }
            }
            RichDetail { title: "Description", html: race.description.clone() }
            RichDetail { title: "Abilities", html: race.abilities.clone() }
            RichDetail { title: "Habitat", html: race.habitat.clone() }
        }
    }
}

#[component]
fn RaceForm(world: World) -> Element {
    let state = use_app_store();
    let services = use_services();

    let initial = {
        let world = world.clone();
        use_hook(move || match state.peek().editing {
            Some(EditTarget::Existing(id)) => world
                .races
                .iter()
                .find(|r| r.id.as_ref() == Some(&id))
                .cloned()
                .unwrap_or_default(),
            _ => Race::default(),
        })
    };
    let is_new = initial.id.is_none();

    let mut name = use_signal(|| initial.name.clone());
    let mut image_url = use_signal(|| initial.image_url.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut abilities = use_signal(|| initial.abilities.clone());
    let mut habitat = use_signal(|| initial.habitat.clone());
    let mut busy = use_signal(|| false);

    let save = move |_| {
        if *busy.read() {
            return;
        }
        busy.set(true);
        let services = services.clone();
        let payload = Race {
            id: None,
            name: name.peek().to_string(),
            image_url: image_url.peek().to_string(),
            description: description.peek().to_string(),
            abilities: abilities.peek().to_string(),
            habitat: habitat.peek().to_string(),
            extra: Default::default(),
        };
        spawn(async move {
            match services.entities.save_entity(payload, &state.peek()).await {
                Ok(Some(_)) => refetch_worlds(&services, state).await,
                Ok(None) | Err(_) => busy.set(false),
            }
        });
    };

    rsx! {
        div {
            class: "pane-header",
            h2 { if is_new { "New Race" } else { "Edit Race" } }
        }
        div {
            class: "entity-form",
            TextField { label: "Name", value: name.read().clone(), on_input: move |v| name.set(v) }
            ImageField { value: image_url.read().clone(), on_input: move |v| image_url.set(v) }
            TextAreaField { label: "Description", value: description.read().clone(), on_input: move |v| description.set(v) }
            TextAreaField { label: "Abilities", value: abilities.read().clone(), on_input: move |v| abilities.set(v) }
            TextAreaField { label: "Habitat", value: habitat.read().clone(), on_input: move |v| habitat.set(v) }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: *busy.read(),
                    onclick: save,
                    "Save Race"
                }
                button {
                    class: "btn",
                    onclick: move |_| state.dispatch(Action::CancelItem),
                    "Cancel"
                }
            }
        }
    }
}
