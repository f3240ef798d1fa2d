//! Editor screen: sidebar of categories plus the per-category content pane.

use dioxus::prelude::*;

use crate::state::{Action, SubView};
use crate::ui::presentation::components::{
    CharacterSection, LocationSection, OrganizationSection, RaceSection, WorldForm,
};
use crate::ui::presentation::use_app_store;

#[component]
pub fn EditorView() -> Element {
    let state = use_app_store();
    let snapshot = state.read();

    let Some(world) = snapshot.selected_world() else {
        // The selected world disappeared from the list (deleted elsewhere
        // or a fetch raced the selection). Nothing to edit.
        return rsx! {
            div { class: "empty-state", "This world is no longer available." }
        };
    };
    let world = world.clone();
    let active = snapshot.editor_sub_view;

    rsx! {
        div {
            class: "editor-layout",
            nav {
                class: "editor-sidebar",
                for sub_view in SubView::ALL {
                    button {
                        key: "{sub_view.label()}",
                        class: if sub_view == active { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| state.dispatch(Action::SelectSubView(sub_view)),
                        "{sub_view.label()}"
                    }
                }
            }
            section {
                class: "editor-pane",
                match active {
                    SubView::Dashboard => rsx! { Dashboard {} },
                    SubView::World => rsx! { WorldForm { world: world.clone() } },
                    SubView::Characters => rsx! { CharacterSection { world: world.clone() } },
                    SubView::Locations => rsx! { LocationSection { world: world.clone() } },
                    SubView::Organizations => rsx! { OrganizationSection { world: world.clone() } },
                    SubView::Races => rsx! { RaceSection { world: world.clone() } },
                    SubView::Maps => rsx! {
                        UnscriptedSection { title: "Maps", count: world.maps.len() }
                    },
                    SubView::Families => rsx! {
                        UnscriptedSection { title: "Families", count: world.families.len() }
                    },
                }
            }
        }
    }
}

/// Landing pane: record counts, each doubling as a shortcut into its
/// category.
#[component]
fn Dashboard() -> Element {
    let state = use_app_store();
    let snapshot = state.read();
    let Some(world) = snapshot.selected_world() else {
        return rsx! {};
    };

    let stats = [
        (SubView::Characters, world.characters.len()),
        (SubView::Locations, world.locations.len()),
        (SubView::Maps, world.maps.len()),
        (SubView::Organizations, world.organizations.len()),
        (SubView::Families, world.families.len()),
        (SubView::Races, world.races.len()),
    ];
    let name = world.name.clone();
    let tagline = world.tagline.clone();

    rsx! {
        div {
            class: "pane-header",
            h2 { "{name}" }
        }
        if !tagline.is_empty() {
            p { class: "world-tagline", "{tagline}" }
        }
        div {
            class: "dashboard-stats",
            for (sub_view, count) in stats {
                button {
                    key: "{sub_view.label()}",
                    class: "stat-card",
                    onclick: move |_| state.dispatch(Action::SelectSubView(sub_view)),
                    div { class: "stat-value", "{count}" }
                    div { class: "stat-label", "{sub_view.label()}" }
                }
            }
        }
    }
}

/// Categories stored as opaque documents: listed but not yet editable.
#[component]
fn UnscriptedSection(title: &'static str, count: usize) -> Element {
    rsx! {
        div {
            class: "pane-header",
            h2 { "{title}" }
        }
        div {
            class: "empty-state",
            if count == 0 {
                "Nothing here yet."
            } else {
                "{count} entries imported from another tool. Editing them is not supported yet."
            }
        }
    }
}
