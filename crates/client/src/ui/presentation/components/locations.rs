//! Location category: list, detail, and form.

use dioxus::prelude::*;

use crate::state::{Action, SubView};
use crate::ui::presentation::components::characters::{DetailRow, RichDetail};
use crate::ui::presentation::components::{
    DeleteButton, ImageField, RelationshipPicker, TextAreaField, TextField,
};
use crate::ui::presentation::{refetch_worlds, use_app_store, use_services};
use phantasm_domain::{EditTarget, EntityId, Location, World};

#[component]
pub fn LocationSection(world: World) -> Element {
    let state = use_app_store();
    let snapshot = state.read();

    if snapshot.editing.is_some() {
        return rsx! { LocationForm { world } };
    }
    if let Some(id) = snapshot.viewing.clone() {
        return rsx! { LocationDetail { world, id } };
    }

    rsx! {
        div {
            class: "pane-header",
            h2 { "Locations" }
            button {
                class: "btn btn-primary",
                onclick: move |_| state.dispatch(Action::CreateItem),
                "+ New Location"
            }
        }
        if world.locations.is_empty() {
            div { class: "empty-state", "No locations yet. Create the first one." }
        }
        div {
            class: "entity-grid",
            for location in world.locations.clone() {
                if let Some(id) = location.id.clone() {
                    LocationCard { key: "{id}", location, id }
                }
            }
        }
    }
}

#[component]
fn LocationCard(location: Location, id: EntityId) -> Element {
    let state = use_app_store();
    let services = use_services();

    let view_id = id.clone();
    let edit_id = id.clone();
    let delete_id = id.clone();

    rsx! {
        div {
            class: "entity-card",
            if !location.image_url.is_empty() {
                img { src: "{location.image_url}", alt: "{location.name}" }
            }
            h3 { "{location.name}" }
            if !location.kind.is_empty() {
                div { class: "entity-sub", "{location.kind}" }
            }
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
                                .delete_entity::<Location>(&id, &state.peek())
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
fn LocationDetail(world: World, id: EntityId) -> Element {
    let state = use_app_store();
    let Some(location) = world.locations.iter().find(|l| l.id.as_ref() == Some(&id)) else {
        return rsx! {
            div { class: "empty-state", "This location is no longer in the world." }
        };
    };
    let location = location.clone();
    let edit_id = id.clone();

    rsx! {
        div {
            class: "pane-header",
            h2 { "{location.name}" }
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
            if !location.image_url.is_empty() {
                img { class: "image-preview", src: "{location.image_url}" }
            }
            DetailRow { title: "Type", text: location.kind.clone() }
            DetailRow { title: "Government", text: location.government.clone() }
            DetailRow { title: "Population", text: location.population.clone() }
            DetailRow { title: "Within", text: location.parent_location.clone() }
            DetailRow { title: "Key Characters", text: location.key_characters.join(", ") }
            DetailRow { title: "Controlling Organizations", text: location.controlling_orgs.join(", ") }
            RichDetail { title: "Demographics", html: location.demographics.clone() }
            RichDetail { title: "Economy", html: location.economy.clone() }
            RichDetail { title: "Culture", html: location.culture.clone() }
        }
    }
}

#[component]
fn LocationForm(world: World) -> Element {
    let state = use_app_store();
    let services = use_services();

    let character_names: Vec<String> = world.characters.iter().map(|c| c.name.clone()).collect();
    let organization_names: Vec<String> =
        world.organizations.iter().map(|o| o.name.clone()).collect();
    let initial = {
        let world = world.clone();
        use_hook(move || match state.peek().editing {
            Some(EditTarget::Existing(id)) => world
                .locations
                .iter()
                .find(|l| l.id.as_ref() == Some(&id))
                .cloned()
                .unwrap_or_default(),
            _ => Location::default(),
        })
    };
    let is_new = initial.id.is_none();
    // A location must not contain itself.
    let parent_candidates: Vec<String> = world
        .locations
        .iter()
        .map(|l| l.name.clone())
        .filter(|n| *n != initial.name)
        .collect();

    let mut name = use_signal(|| initial.name.clone());
    let mut image_url = use_signal(|| initial.image_url.clone());
    let mut kind = use_signal(|| initial.kind.clone());
    let mut government = use_signal(|| initial.government.clone());
    let mut population = use_signal(|| initial.population.clone());
    let mut parent = use_signal(|| {
        if initial.parent_location.is_empty() {
            Vec::new()
        } else {
            vec![initial.parent_location.clone()]
        }
    });
    let mut key_characters = use_signal(|| initial.key_characters.clone());
    let mut controlling = use_signal(|| initial.controlling_orgs.clone());
    let mut demographics = use_signal(|| initial.demographics.clone());
    let mut economy = use_signal(|| initial.economy.clone());
    let mut culture = use_signal(|| initial.culture.clone());
    let mut busy = use_signal(|| false);

    let save = move |_| {
        if *busy.read() {
            return;
        }
        busy.set(true);
        let services = services.clone();
        let payload = Location {
            id: None,
            name: name.peek().to_string(),
            image_url: image_url.peek().to_string(),
            kind: kind.peek().to_string(),
            government: government.peek().to_string(),
            population: population.peek().to_string(),
            parent_location: parent
                .peek()
                .first()
                .map(String::to_string)
                .unwrap_or_default(),
            key_characters: key_characters.peek().to_vec(),
            controlling_orgs: controlling.peek().to_vec(),
            demographics: demographics.peek().to_string(),
            economy: economy.peek().to_string(),
            culture: culture.peek().to_string(),
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
            h2 { if is_new { "New Location" } else { "Edit Location" } }
        }
        div {
            class: "entity-form",
            TextField { label: "Name", value: name.read().clone(), on_input: move |v| name.set(v) }
            ImageField { value: image_url.read().clone(), on_input: move |v| image_url.set(v) }
            div {
                class: "form-row",
                TextField { label: "Type", value: kind.read().clone(), on_input: move |v| kind.set(v) }
                TextField { label: "Government", value: government.read().clone(), on_input: move |v| government.set(v) }
                TextField { label: "Population", value: population.read().clone(), on_input: move |v| population.set(v) }
            }
            RelationshipPicker {
                label: "Within",
                candidates: parent_candidates,
                selected: parent.read().clone(),
                single: true,
                create_target: SubView::Locations,
                on_change: move |names| parent.set(names),
            }
            RelationshipPicker {
                label: "Key Characters",
                candidates: character_names,
                selected: key_characters.read().clone(),
                create_target: SubView::Characters,
                on_change: move |names| key_characters.set(names),
            }
            RelationshipPicker {
                label: "Controlling Organizations",
                candidates: organization_names,
                selected: controlling.read().clone(),
                create_target: SubView::Organizations,
                on_change: move |names| controlling.set(names),
            }
            TextAreaField { label: "Demographics", value: demographics.read().clone(), on_input: move |v| demographics.set(v) }
            TextAreaField { label: "Economy", value: economy.read().clone(), on_input: move |v| economy.set(v) }
            TextAreaField { label: "Culture", value: culture.read().clone(), on_input: move |v| culture.set(v) }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: *busy.read(),
                    onclick: save,
                    "Save Location"
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
