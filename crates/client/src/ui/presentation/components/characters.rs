//! Character category: list, detail, and form.

use dioxus::prelude::*;

use crate::state::{Action, SubView};
use crate::ui::presentation::components::{
    DeleteButton, ImageField, RelationshipPicker, TextAreaField, TextField,
};
use crate::ui::presentation::{refetch_worlds, use_app_store, use_services};
use phantasm_domain::{AdditionalDetail, Character, EditTarget, EntityId, World};

#[component]
pub fn CharacterSection(world: World) -> Element {
    let state = use_app_store();
    let snapshot = state.read();

    if snapshot.editing.is_some() {
        return rsx! { CharacterForm { world } };
    }
    if let Some(id) = snapshot.viewing.clone() {
        return rsx! { CharacterDetail { world, id } };
    }

    rsx! {
        div {
            class: "pane-header",
            h2 { "Characters" }
            button {
                class: "btn btn-primary",
                onclick: move |_| state.dispatch(Action::CreateItem),
                "+ New Character"
            }
        }
        if world.characters.is_empty() {
            div { class: "empty-state", "No characters yet. Create the first one." }
        }
        div {
            class: "entity-grid",
            for character in world.characters.clone() {
                if let Some(id) = character.id.clone() {
                    CharacterCard { key: "{id}", character, id }
                }
            }
        }
    }
}

#[component]
fn CharacterCard(character: Character, id: EntityId) -> Element {
    let state = use_app_store();
    let services = use_services();

    let view_id = id.clone();
    let edit_id = id.clone();
    let delete_id = id.clone();
    let subtitle = [character.role.as_str(), character.species.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        div {
            class: "entity-card",
            if !character.image_url.is_empty() {
                img { src: "{character.image_url}", alt: "{character.name}" }
            }
            h3 { "{character.name}" }
            if !subtitle.is_empty() {
                div { class: "entity-sub", "{subtitle}" }
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
                            // Refetch even on failure: the list is the only
                            // feedback the delete flow has.
                            let _ = services
                                .entities
                                .delete_entity::<Character>(&id, &state.peek())
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
fn CharacterDetail(world: World, id: EntityId) -> Element {
    let state = use_app_store();
    let Some(character) = world.characters.iter().find(|c| c.id.as_ref() == Some(&id)) else {
        return rsx! {
            div { class: "empty-state", "This character is no longer in the world." }
        };
    };
    let character = character.clone();
    let edit_id = id.clone();

    rsx! {
        div {
            class: "pane-header",
            h2 { "{character.name}" }
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
            if !character.image_url.is_empty() {
                img { class: "image-preview", src: "{character.image_url}" }
            }
            DetailRow { title: "Role", text: character.role.clone() }
            DetailRow { title: "Alignment", text: character.alignment.clone() }
            DetailRow { title: "Species", text: character.species.clone() }
            DetailRow { title: "Affiliated Organizations", text: character.affiliated_orgs.join(", ") }
            RichDetail { title: "Relationships", html: character.relationships.clone() }
            RichDetail { title: "Backstory", html: character.backstory.clone() }
            RichDetail { title: "Possessions", html: character.possessions.clone() }
            RichDetail { title: "Abilities", html: character.abilities.clone() }
            RichDetail { title: "Trivia", html: character.trivia.clone() }
            for detail in character.additional_details.clone() {
                RichDetail { title_owned: detail.label.clone(), html: detail.content.clone() }
            }
        }
    }
}

#[component]
pub(super) fn DetailRow(title: &'static str, text: String) -> Element {
    if text.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "detail-section",
            h4 { "{title}" }
            div { "{text}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub(super) struct RichDetailProps {
    #[props(default)]
    pub title: &'static str,
    #[props(default)]
    pub title_owned: String,
    pub html: String,
}

/// Stored rich text (an HTML fragment from the form editor).
#[component]
pub(super) fn RichDetail(props: RichDetailProps) -> Element {
    if props.html.is_empty() {
        return rsx! {};
    }
    let title = if props.title_owned.is_empty() {
        props.title.to_string()
    } else {
        props.title_owned.clone()
    };
    rsx! {
        div {
            class: "detail-section",
            if !title.is_empty() {
                h4 { "{title}" }
            }
            div { dangerous_inner_html: "{props.html}" }
        }
    }
}

#[component]
fn CharacterForm(world: World) -> Element {
    let state = use_app_store();
    let services = use_services();

    let organization_names: Vec<String> =
        world.organizations.iter().map(|o| o.name.clone()).collect();
    let initial = {
        let world = world.clone();
        use_hook(move || match state.peek().editing {
            Some(EditTarget::Existing(id)) => world
                .characters
                .iter()
                .find(|c| c.id.as_ref() == Some(&id))
                .cloned()
                .unwrap_or_default(),
            _ => Character::default(),
        })
    };
    let is_new = initial.id.is_none();

    let mut name = use_signal(|| initial.name.clone());
    let mut image_url = use_signal(|| initial.image_url.clone());
    let mut role = use_signal(|| initial.role.clone());
    let mut alignment = use_signal(|| initial.alignment.clone());
    let mut species = use_signal(|| initial.species.clone());
    let mut affiliated = use_signal(|| initial.affiliated_orgs.clone());
    let mut relationships = use_signal(|| initial.relationships.clone());
    let mut backstory = use_signal(|| initial.backstory.clone());
    let mut possessions = use_signal(|| initial.possessions.clone());
    let mut abilities = use_signal(|| initial.abilities.clone());
    let mut trivia = use_signal(|| initial.trivia.clone());
    let mut details = use_signal(|| initial.additional_details.clone());
    let mut busy = use_signal(|| false);

    let save = move |_| {
        if *busy.read() {
            return;
        }
        busy.set(true);
        let services = services.clone();
        let payload = Character {
            id: None,
            name: name.peek().to_string(),
            image_url: image_url.peek().to_string(),
            role: role.peek().to_string(),
            alignment: alignment.peek().to_string(),
            species: species.peek().to_string(),
            affiliated_orgs: affiliated.peek().to_vec(),
            relationships: relationships.peek().to_string(),
            backstory: backstory.peek().to_string(),
            possessions: possessions.peek().to_string(),
            abilities: abilities.peek().to_string(),
            trivia: trivia.peek().to_string(),
            additional_details: details.peek().to_vec(),
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
            h2 { if is_new { "New Character" } else { "Edit Character" } }
        }
        div {
            class: "entity-form",
            TextField { label: "Name", value: name.read().clone(), on_input: move |v| name.set(v) }
            ImageField { value: image_url.read().clone(), on_input: move |v| image_url.set(v) }
            div {
                class: "form-row",
                TextField { label: "Role", value: role.read().clone(), on_input: move |v| role.set(v) }
                TextField { label: "Alignment", value: alignment.read().clone(), on_input: move |v| alignment.set(v) }
                TextField { label: "Species", value: species.read().clone(), on_input: move |v| species.set(v) }
            }
            RelationshipPicker {
                label: "Affiliated Organizations",
                candidates: organization_names,
                selected: affiliated.read().clone(),
                create_target: SubView::Organizations,
                on_change: move |names| affiliated.set(names),
            }
            TextAreaField { label: "Relationships", value: relationships.read().clone(), on_input: move |v| relationships.set(v) }
            TextAreaField { label: "Backstory", value: backstory.read().clone(), on_input: move |v| backstory.set(v) }
            TextAreaField { label: "Possessions", value: possessions.read().clone(), on_input: move |v| possessions.set(v) }
            TextAreaField { label: "Abilities", value: abilities.read().clone(), on_input: move |v| abilities.set(v) }
            TextAreaField { label: "Trivia", value: trivia.read().clone(), on_input: move |v| trivia.set(v) }

            h4 { "Additional Details" }
            for (index, detail) in details.read().clone().into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "dynamic-row",
                    div {
                        class: "field",
                        label { "Label" }
                        input {
                            value: "{detail.label}",
                            oninput: move |e| {
                                details.with_mut(|d| {
                                    if let Some(row) = d.get_mut(index) {
                                        row.label = e.value();
                                    }
                                });
                            },
                        }
                    }
                    div {
                        class: "field",
                        label { "Content" }
                        textarea {
                            value: "{detail.content}",
                            oninput: move |e| {
                                details.with_mut(|d| {
                                    if let Some(row) = d.get_mut(index) {
                                        row.content = e.value();
                                    }
                                });
                            },
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            details.with_mut(|d| {
                                if index < d.len() {
                                    d.remove(index);
                                }
                            });
                        },
                        "✕"
                    }
                }
            }
            button {
                class: "btn",
                onclick: move |_| details.with_mut(|d| d.push(AdditionalDetail::default())),
                "+ Add Detail"
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: *busy.read(),
                    onclick: save,
                    "Save Character"
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
