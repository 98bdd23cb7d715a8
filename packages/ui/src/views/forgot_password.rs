use dioxus::prelude::*;

use crate::effects::{run_effects, Page};
use crate::forms::{submit_forgot_password, Field};
use crate::session::use_backend;

use super::{AuthCard, FieldError};

#[component]
pub fn ForgotPasswordView(on_navigate: EventHandler<Page>) -> Element {
    let backend = use_backend();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            let outcome = submit_forgot_password(&backend, &name(), &email()).await;
            error.set(outcome.error_for(Field::Form).unwrap_or_default().to_string());
            run_effects(outcome.effects, on_navigate, || {});
        }
    };

    rsx! {
        AuthCard {
            title: "Forgot password",
            subtitle: "Enter the name and email of your account.",
            form {
                id: "auth-form",
                class: "auth-form",
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        required: true,
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                FieldError { id: "forget-error-message", message: error() }

                button { class: "btn btn-primary auth-submit", r#type: "submit", "Continue" }
            }

            div {
                class: "auth-links",
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        on_navigate.call(Page::Login);
                    },
                    "Back to login"
                }
            }
        }
    }
}
