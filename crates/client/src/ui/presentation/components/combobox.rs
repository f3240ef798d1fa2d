//! Relationship picker: the searchable combobox attaching entities to the
//! record being edited, by display name.
//!
//! References are bare name strings; renaming the referenced entity later
//! orphans them silently. The trailing "Create New ..." row switches the
//! editor to a fresh form in the target category, abandoning the current
//! form's unsaved state.

use dioxus::prelude::*;

use crate::state::{Action, SubView};
use crate::ui::presentation::use_app_store;
use phantasm_domain::{filter_candidates, ComboOption, Selection};

#[derive(Props, Clone, PartialEq)]
pub struct RelationshipPickerProps {
    pub label: &'static str,
    /// Display names of every entity that can be referenced here.
    pub candidates: Vec<String>,
    /// Currently selected names, shown as removable pills.
    pub selected: Vec<String>,
    /// Single-valued fields replace the pill instead of accumulating.
    #[props(default = false)]
    pub single: bool,
    /// Category the create-new row jumps to.
    pub create_target: SubView,
    pub on_change: EventHandler<Vec<String>>,
}

#[component]
pub fn RelationshipPicker(props: RelationshipPickerProps) -> Element {
    let state = use_app_store();
    let mut query = use_signal(String::new);
    let mut is_open = use_signal(|| false);

    let options = filter_candidates(&props.candidates, &query.read(), &props.selected);
    let create_label = props
        .create_target
        .kind()
        .map(|k| format!("Create New {}...", k.label()))
        .unwrap_or_else(|| "Create New...".to_string());

    let selection = move |props: &RelationshipPickerProps| {
        let base = if props.single {
            Selection::single()
        } else {
            Selection::multi()
        };
        base.with_names(props.selected.iter().cloned())
    };

    rsx! {
        div {
            class: "combobox field",
            label { "{props.label}" }

            div {
                class: "combobox-pills",
                for name in props.selected.clone() {
                    span {
                        key: "{name}",
                        class: "pill",
                        "{name}"
                        button {
                            onclick: {
                                let props = props.clone();
                                let name = name.clone();
                                move |_| {
                                    let mut selection = selection(&props);
                                    selection.remove(&name);
                                    props.on_change.call(selection.names().to_vec());
                                }
                            },
                            "✕"
                        }
                    }
                }
            }

            input {
                value: "{query}",
                placeholder: "Search...",
                oninput: move |e| {
                    query.set(e.value());
                    is_open.set(true);
                },
                onfocusin: move |_| is_open.set(true),
            }

            if *is_open.read() {
                div {
                    class: "combobox-dropdown",
                    for option in options {
                        match option {
                            ComboOption::Candidate(name) => rsx! {
                                button {
                                    key: "{name}",
                                    class: "combobox-option",
                                    onclick: {
                                        let props = props.clone();
                                        let name = name.clone();
                                        move |_| {
                                            let mut selection = selection(&props);
                                            selection.add(name.clone());
                                            props.on_change.call(selection.names().to_vec());
                                            query.set(String::new());
                                            is_open.set(false);
                                        }
                                    },
                                    "{name}"
                                }
                            },
                            ComboOption::CreateNew => {
                                let create_key = "__create_new";
                                rsx! {
                                button {
                                    key: "{create_key}",
                                    class: "combobox-option combobox-create",
                                    onclick: {
                                        let target = props.create_target;
                                        move |_| state.dispatch(Action::JumpToCreate(target))
                                    },
                                    "{create_label}"
                                }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
