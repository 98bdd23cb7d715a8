use dioxus::prelude::*;

use crate::effects::{run_effects, Page};
use crate::forms::{submit_login, Field};
use crate::password::PasswordField;
use crate::session::{use_backend, use_session};

use super::{AuthCard, FieldError};

/// Login page. `admin` switches to the administrator endpoint and console.
#[component]
pub fn LoginView(#[props(default)] admin: bool, on_navigate: EventHandler<Page>) -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let title = if admin { "Administrator login" } else { "Log in" }.to_string();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            error.set(String::new());
            loading.set(true);
            let outcome = submit_login(&backend, &email(), &password(), admin).await;
            loading.set(false);
            if let Some(message) = outcome.error_for(Field::Form) {
                error.set(message.to_string());
            }
            if outcome.logged_in {
                let user = outcome.user.clone();
                session.with_mut(|s| s.sign_in(user));
            }
            run_effects(outcome.effects, on_navigate, || {});
        }
    };

    rsx! {
        AuthCard {
            title,
            form {
                id: "auth-form",
                class: "auth-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                PasswordField {
                    id: "password",
                    label: "Password",
                    value: password(),
                    on_input: move |value| password.set(value),
                }

                FieldError { id: "login-error", message: error() }

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log in" }
                }
            }

            if !admin {
                div {
                    class: "auth-links",
                    a {
                        href: "#",
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            on_navigate.call(Page::ForgotPassword);
                        },
                        "Forgot password?"
                    }
                    a {
                        href: "#",
                        onclick: move |evt: Event<MouseData>| {
                            evt.prevent_default();
                            on_navigate.call(Page::Signup);
                        },
                        "Create an account"
                    }
                }
            }
        }
    }
}
