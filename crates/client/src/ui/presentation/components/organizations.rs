//! Organization category: list, detail, and form.

use dioxus::prelude::*;

use crate::state::{Action, SubView};
use crate::ui::presentation::components::characters::{DetailRow, RichDetail};
use crate::ui::presentation::components::{
    DeleteButton, ImageField, RelationshipPicker, TextAreaField, TextField,
};
use crate::ui::presentation::{refetch_worlds, use_app_store, use_services};
use phantasm_domain::{EditTarget, EntityId, Organization, Rank, World};

#[component]
pub fn OrganizationSection(world: World) -> Element {
    let state = use_app_store();
    let snapshot = state.read();

    if snapshot.editing.is_some() {
        return rsx! { OrganizationForm { world } };
    }
    if let Some(id) = snapshot.viewing.clone() {
        return rsx! { OrganizationDetail { world, id } };
    }

    rsx! {
        div {
            class: "pane-header",
            h2 { "Organizations" }
            button {
                class: "btn btn-primary",
                onclick: move |_| state.dispatch(Action::CreateItem),
                "+ New Organization"
            }
        }
        if world.organizations.is_empty() {
            div { class: "empty-state", "No organizations yet. Create the first one." }
        }
        div {
            class: "entity-grid",
            for organization in world.organizations.clone() {
                if let Some(id) = organization.id.clone() {
                    OrganizationCard { key: "{id}", organization, id }
                }
            }
        }
    }
}

#[component]
fn OrganizationCard(organization: Organization, id: EntityId) -> Element {
    let state = use_app_store();
    let services = use_services();

    let view_id = id.clone();
    let edit_id = id.clone();
    let delete_id = id.clone();

    rsx! {
        div {
            class: "entity-card",
            if !organization.image_url.is_empty() {
                img { src: "{organization.image_url}", alt: "{organization.name}" }
            }
            h3 { "{organization.name}" }
            if !organization.kind.is_empty() {
                div { class: "entity-sub", "{organization.kind}" }
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
                                .delete_entity::<Organization>(&id, &state.peek())
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
fn OrganizationDetail(world: World, id: EntityId) -> Element {
    let state = use_app_store();
    let Some(organization) = world
        .organizations
        .iter()
        .find(|o| o.id.as_ref() == Some(&id))
    else {
        return rsx! {
            div { class: "empty-state", "This organization is no longer in the world." }
        };
    };
    let organization = organization.clone();
    let edit_id = id.clone();

    rsx! {
        div {
            class: "pane-header",
            h2 { "{organization.name}" }
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
            if !organization.image_url.is_empty() {
                img { class: "image-preview", src: "{organization.image_url}" }
            }
            DetailRow { title: "Type", text: organization.kind.clone() }
            DetailRow { title: "Leader", text: organization.leader.clone() }
            DetailRow { title: "Headquarters", text: organization.headquarters.clone() }
            DetailRow { title: "Key Members", text: organization.key_members.join(", ") }
            DetailRow { title: "Allies", text: organization.allies.join(", ") }
            DetailRow { title: "Rivals", text: organization.rivals.join(", ") }
            DetailRow { title: "Member Demographics", text: organization.member_demographics.clone() }
            if !organization.ranks.is_empty() {
                div {
                    class: "detail-section",
                    h4 { "Ranks" }
                    for (index, rank) in organization.ranks.iter().enumerate() {
                        div { key: "{index}", "{rank.title}: {rank.description}" }
                    }
                }
            }
            RichDetail { title: "Public Agenda", html: organization.public_agenda.clone() }
            RichDetail { title: "Secret Goals", html: organization.secret_goals.clone() }
            RichDetail { title: "History", html: organization.history.clone() }
            RichDetail { title: "Membership Requirements", html: organization.membership_requirements.clone() }
        }
    }
}

#[component]
fn OrganizationForm(world: World) -> Element {
    let state = use_app_store();
    let services = use_services();

    let character_names: Vec<String> = world.characters.iter().map(|c| c.name.clone()).collect();
    let location_names: Vec<String> = world.locations.iter().map(|l| l.name.clone()).collect();
    let initial = {
        let world = world.clone();
        use_hook(move || match state.peek().editing {
            Some(EditTarget::Existing(id)) => world
                .organizations
                .iter()
                .find(|o| o.id.as_ref() == Some(&id))
                .cloned()
                .unwrap_or_default(),
            _ => Organization::default(),
        })
    };
    let is_new = initial.id.is_none();
    // An organization cannot ally with or rival itself.
    let peer_names: Vec<String> = world
        .organizations
        .iter()
        .map(|o| o.name.clone())
        .filter(|n| *n != initial.name)
        .collect();

    let mut name = use_signal(|| initial.name.clone());
    let mut image_url = use_signal(|| initial.image_url.clone());
    let mut kind = use_signal(|| initial.kind.clone());
    let mut member_demographics = use_signal(|| initial.member_demographics.clone());
    let mut leader = use_signal(|| {
        if initial.leader.is_empty() {
            Vec::new()
        } else {
            vec![initial.leader.clone()]
        }
    });
    let mut key_members = use_signal(|| initial.key_members.clone());
    let mut headquarters = use_signal(|| {
        if initial.headquarters.is_empty() {
            Vec::new()
        } else {
            vec![initial.headquarters.clone()]
        }
    });
    let mut allies = use_signal(|| initial.allies.clone());
    let mut rivals = use_signal(|| initial.rivals.clone());
    let mut ranks = use_signal(|| initial.ranks.clone());
    let mut public_agenda = use_signal(|| initial.public_agenda.clone());
    let mut secret_goals = use_signal(|| initial.secret_goals.clone());
    let mut history = use_signal(|| initial.history.clone());
    let mut membership_requirements = use_signal(|| initial.membership_requirements.clone());
    let mut busy = use_signal(|| false);

    let save = move |_| {
        if *busy.read() {
            return;
        }
        busy.set(true);
        let services = services.clone();
        let payload = Organization {
            id: None,
            name: name.peek().to_string(),
            image_url: image_url.peek().to_string(),
            kind: kind.peek().to_string(),
            member_demographics: member_demographics.peek().to_string(),
            leader: leader
                .peek()
                .first()
                .map(String::to_string)
                .unwrap_or_default(),
            key_members: key_members.peek().to_vec(),
            headquarters: headquarters
                .peek()
                .first()
                .map(String::to_string)
                .unwrap_or_default(),
            allies: allies.peek().to_vec(),
            rivals: rivals.peek().to_vec(),
            ranks: ranks.peek().to_vec(),
            public_agenda: public_agenda.peek().to_string(),
            secret_goals: secret_goals.peek().to_string(),
            history: history.peek().to_string(),
            membership_requirements: membership_requirements.peek().to_string(),
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
            h2 { if is_new { "New Organization" } else { "Edit Organization" } }
        }
        div {
            class: "entity-form",
            TextField { label: "Name", value: name.read().clone(), on_input: move |v| name.set(v) }
            ImageField { value: image_url.read().clone(), on_input: move |v| image_url.set(v) }
            div {
                class: "form-row",
                TextField { label: "Type", value: kind.read().clone(), on_input: move |v| kind.set(v) }
                TextField { label: "Member Demographics", value: member_demographics.read().clone(), on_input: move |v| member_demographics.set(v) }
            }
            RelationshipPicker {
                label: "Leader",
                candidates: character_names.clone(),
                selected: leader.read().clone(),
                single: true,
                create_target: SubView::Characters,
                on_change: move |names| leader.set(names),
            }
            RelationshipPicker {
                label: "Key Members",
                candidates: character_names,
                selected: key_members.read().clone(),
                create_target: SubView::Characters,
                on_change: move |names| key_members.set(names),
            }
            RelationshipPicker {
                label: "Headquarters",
                candidates: location_names,
                selected: headquarters.read().clone(),
                single: true,
                create_target: SubView::Locations,
                on_change: move |names| headquarters.set(names),
            }
            RelationshipPicker {
                label: "Allies",
                candidates: peer_names.clone(),
                selected: allies.read().clone(),
                create_target: SubView::Organizations,
                on_change: move |names| allies.set(names),
            }
            RelationshipPicker {
                label: "Rivals",
                candidates: peer_names,
                selected: rivals.read().clone(),
                create_target: SubView::Organizations,
                on_change: move |names| rivals.set(names),
            }

            h4 { "Ranks" }
            for (index, rank) in ranks.read().clone().into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "dynamic-row",
                    div {
                        class: "field",
                        label { "Title" }
                        input {
                            value: "{rank.title}",
                            oninput: move |e| {
                                ranks.with_mut(|r| {
                                    if let Some(row) = r.get_mut(index) {
                                        row.title = e.value();
                                    }
                                });
                            },
                        }
                    }
                    div {
                        class: "field",
                        label { "Description" }
                        input {
                            value: "{rank.description}",
                            oninput: move |e| {
                                ranks.with_mut(|r| {
                                    if let Some(row) = r.get_mut(index) {
                                        row.description = e.value();
                                    }
                                });
                            },
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            ranks.with_mut(|r| {
                                if index < r.len() {
                                    r.remove(index);
                                }
                            });
                        },
                        "✕"
                    }
                }
            }
            button {
                class: "btn",
                onclick: move |_| ranks.with_mut(|r| r.push(Rank::default())),
                "+ Add Rank"
            }

            TextAreaField { label: "Public Agenda", value: public_agenda.read().clone(), on_input: move |v| public_agenda.set(v) }
            TextAreaField { label: "Secret Goals", value: secret_goals.read().clone(), on_input: move |v| secret_goals.set(v) }
            TextAreaField { label: "History", value: history.read().clone(), on_input: move |v| history.set(v) }
            TextAreaField { label: "Membership Requirements", value: membership_requirements.read().clone(), on_input: move |v| membership_requirements.set(v) }

            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: *busy.read(),
                    onclick: save,
                    "Save Organization"
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
