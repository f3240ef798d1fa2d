//! Campaign wiki: the read-only projection of a world.
//!
//! No edit affordances; rich-text fields render as the HTML fragments the
//! form editors produced. The section nav highlights whichever section the
//! reader has scrolled into.

use dioxus::prelude::*;

use crate::ui::presentation::use_app_store;
#[cfg(target_arch = "wasm32")]
use crate::ui::use_platform;

/// Wiki section element ids, in document order.
pub const SECTION_IDS: [&str; 4] = ["overview", "characters", "locations", "organizations"];

const SECTION_TITLES: [&str; 4] = ["Overview", "Characters", "Locations", "Organizations"];

/// Index of the section the reader is in: the last section whose top sits
/// above the viewport offset plus 100px of slack. `None` before the first
/// section is reached.
pub fn active_section(scroll_y: f64, tops: &[f64]) -> Option<usize> {
    let mut active = None;
    for (index, top) in tops.iter().enumerate() {
        if *top <= scroll_y + 100.0 {
            active = Some(index);
        }
    }
    active
}

#[component]
pub fn WikiView() -> Element {
    let state = use_app_store();
    let active = use_signal(|| 0usize);

    // Only the browser has a scrollable document; elsewhere the first
    // section stays highlighted.
    #[cfg(target_arch = "wasm32")]
    {
        let platform = use_platform();
        let mut active = active;
        use_hook(move || {
            attach_scroll_listener(move || {
                let tops = platform.section_tops(&SECTION_IDS);
                let index = active_section(platform.scroll_y(), &tops).unwrap_or(0);
                if *active.peek() != index {
                    active.set(index);
                }
            });
        });
    }

    let snapshot = state.read();
    let Some(world) = snapshot.selected_world() else {
        return rsx! {
            div { class: "empty-state", "This world is no longer available." }
        };
    };
    let world = world.clone();
    let active_index = *active.read();

    rsx! {
        div {
            class: "wiki-layout",
            nav {
                class: "wiki-nav",
                for (index, (id, title)) in SECTION_IDS.iter().zip(SECTION_TITLES).enumerate() {
                    a {
                        key: "{id}",
                        href: "#{id}",
                        class: if index == active_index { "sidebar-item active" } else { "sidebar-item" },
                        "{title}"
                    }
                }
            }
            article {
                class: "wiki-body",
                h1 { "{world.name}" }
                if !world.tagline.is_empty() {
                    p { class: "world-tagline", "{world.tagline}" }
                }

                section {
                    id: "overview",
                    class: "wiki-section",
                    h2 { "Overview" }
                    if !world.description.is_empty() {
                        p { "{world.description}" }
                    }
                    WikiProse { title: "Concept", html: world.overview.concept.clone() }
                    WikiProse { title: "History", html: world.overview.history.clone() }
                    WikiProse { title: "Geography", html: world.overview.geography.clone() }
                }

                section {
                    id: "characters",
                    class: "wiki-section",
                    h2 { "Characters" }
                    if world.characters.is_empty() {
                        div { class: "empty-state", "No characters recorded." }
                    }
                    for character in &world.characters {
                        div {
                            class: "wiki-entry",
                            h3 { "{character.name}" }
                            if !character.role.is_empty() || !character.species.is_empty() {
                                div { class: "entity-sub", "{character.role} {character.species}" }
                            }
                            WikiProse { title: "", html: character.backstory.clone() }
                        }
                    }
                }

                section {
                    id: "locations",
                    class: "wiki-section",
                    h2 { "Locations" }
                    if world.locations.is_empty() {
                        div { class: "empty-state", "No locations recorded." }
                    }
                    for location in &world.locations {
                        div {
                            class: "wiki-entry",
                            h3 { "{location.name}" }
                            if !location.kind.is_empty() {
                                div { class: "entity-sub", "{location.kind}" }
                            }
                            WikiProse { title: "", html: location.culture.clone() }
                        }
                    }
                }

                section {
                    id: "organizations",
                    class: "wiki-section",
                    h2 { "Organizations" }
                    if world.organizations.is_empty() {
                        div { class: "empty-state", "No organizations recorded." }
                    }
                    for organization in &world.organizations {
                        div {
                            class: "wiki-entry",
                            h3 { "{organization.name}" }
                            if !organization.leader.is_empty() {
                                div { class: "entity-sub", "Led by {organization.leader}" }
                            }
                            WikiProse { title: "", html: organization.public_agenda.clone() }
                        }
                    }
                }
            }
        }
    }
}

/// A titled block of stored rich text. Renders nothing when empty.
#[component]
fn WikiProse(title: &'static str, html: String) -> Element {
    if html.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            class: "detail-section",
            if !title.is_empty() {
                h4 { "{title}" }
            }
            div { dangerous_inner_html: "{html}" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_scroll_listener(mut on_scroll: impl FnMut() + 'static) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut()>::new(move || on_scroll());
    if window
        .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        // Lives for the page's lifetime; the wiki can be re-entered at any
        // time and stale listeners over a fresh signal are harmless.
        closure.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_last_section_above_the_offset_plus_slack() {
        let tops = [0.0, 400.0, 900.0, 1500.0];
        assert_eq!(active_section(0.0, &tops), Some(0));
        assert_eq!(active_section(350.0, &tops), Some(1));
        assert_eq!(active_section(850.0, &tops), Some(2));
        assert_eq!(active_section(2000.0, &tops), Some(3));
    }

    #[test]
    fn slack_counts_a_section_exactly_100px_below() {
        let tops = [0.0, 500.0];
        assert_eq!(active_section(400.0, &tops), Some(1));
        assert_eq!(active_section(399.0, &tops), Some(0));
    }

    #[test]
    fn no_section_above_the_fold_yields_none() {
        let tops = [200.0, 600.0];
        assert_eq!(active_section(0.0, &tops), None);
        assert_eq!(active_section(0.0, &[]), None);
    }
}
