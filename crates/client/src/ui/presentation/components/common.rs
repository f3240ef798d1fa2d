//! Shared form controls.

use dioxus::prelude::*;

#[component]
pub fn TextField(label: &'static str, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "field",
            label { "{label}" }
            input {
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { "{label}" }
            textarea {
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}

/// Image URL input with a live preview once the field is non-empty.
#[component]
pub fn ImageField(value: String, on_input: EventHandler<String>) -> Element {
    let preview = value.clone();
    rsx! {
        div {
            class: "field",
            label { "Image URL" }
            input {
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
            if !preview.is_empty() {
                img { class: "image-preview", src: "{preview}" }
            }
        }
    }
}

/// Two-step delete: the first click arms the button, the second confirms.
#[component]
pub fn DeleteButton(on_confirm: EventHandler<()>) -> Element {
    let mut armed = use_signal(|| false);

    rsx! {
        if *armed.read() {
            button {
                class: "btn btn-danger",
                onclick: move |_| {
                    armed.set(false);
                    on_confirm.call(());
                },
                "Confirm?"
            }
            button {
                class: "btn btn-ghost",
                onclick: move |_| armed.set(false),
                "Keep"
            }
        } else {
            button {
                class: "btn btn-danger",
                onclick: move |_| armed.set(true),
                "Delete"
            }
        }
    }
}
