//! Login screen: email/password sign-in and sign-up, plus provider button.

use dioxus::prelude::*;

use crate::state::Action;
use crate::ui::presentation::{use_app_store, use_services};

/// Sign-in form. Successful authentication is reported through the
/// auth-changed listener, not here; this view only dispatches the failure
/// text into `auth_notice`.
#[component]
pub fn LoginView() -> Element {
    let state = use_app_store();
    let services = use_services();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let notice = state.read().auth_notice;

    let sign_in = {
        let services = services.clone();
        move |_| {
            if *busy.read() {
                return;
            }
            busy.set(true);
            let auth = services.auth.clone();
            let email = email.peek().to_string();
            let password = password.peek().to_string();
            spawn(async move {
                let result = auth.sign_in(&email, &password).await;
                state.dispatch(Action::AuthNotice(result.err()));
                busy.set(false);
            });
        }
    };

    let sign_up = {
        let services = services.clone();
        move |_| {
            if *busy.read() {
                return;
            }
            busy.set(true);
            let auth = services.auth.clone();
            let email = email.peek().to_string();
            let password = password.peek().to_string();
            spawn(async move {
                let result = auth.sign_up(&email, &password).await;
                state.dispatch(Action::AuthNotice(result.err()));
                busy.set(false);
            });
        }
    };

    let provider_sign_in = move |_| {
        let auth = services.auth.clone();
        spawn(async move { auth.sign_in_with_provider().await });
    };

    rsx! {
        div {
            class: "login-panel",
            h2 { "Enter the Archive" }

            div {
                class: "field",
                label { "Email" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
            }
            div {
                class: "field",
                label { "Password" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |e| password.set(e.value()),
                }
            }

            div { class: "auth-notice",
                if let Some(notice) = notice {
                    "{notice}"
                }
            }

            button {
                class: "btn btn-primary",
                disabled: *busy.read(),
                onclick: sign_in,
                "Sign In"
            }
            button {
                class: "btn",
                disabled: *busy.read(),
                onclick: sign_up,
                "Create Account"
            }
            button {
                class: "btn btn-ghost",
                onclick: provider_sign_in,
                "Sign in with Google"
            }
        }
    }
}
