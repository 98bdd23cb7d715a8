use dioxus::prelude::*;

use crate::effects::{run_effects, Page};
use crate::forms::{check_signup_email, submit_signup, Field};
use crate::password::PasswordField;
use crate::session::use_backend;

use super::{AuthCard, FieldError};

#[component]
pub fn SignupView(on_navigate: EventHandler<Page>) -> Element {
    let backend = use_backend();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut email_error = use_signal(String::new);
    let mut confirm_error = use_signal(String::new);
    let mut email_taken = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_email_blur = {
        let backend = backend.clone();
        move |_| {
            let backend = backend.clone();
            async move {
                if let Some(check) = check_signup_email(&backend, &email()).await {
                    email_error.set(check.message().unwrap_or_default().to_string());
                    email_taken.set(check.blocks_submit());
                }
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            email_error.set(String::new());
            confirm_error.set(String::new());
            loading.set(true);
            let outcome = submit_signup(&backend, &name(), &email(), &password(), &confirm()).await;
            loading.set(false);
            if let Some(message) = outcome.error_for(Field::Email) {
                email_error.set(message.to_string());
            }
            if let Some(message) = outcome.error_for(Field::ConfirmPassword) {
                confirm_error.set(message.to_string());
            }
            run_effects(outcome.effects, on_navigate, || {});
        }
    };

    rsx! {
        AuthCard {
            title: "Sign up",
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
                        autocomplete: "name",
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
                        autocomplete: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                        onblur: handle_email_blur,
                    }
                    FieldError { id: "email-error", message: email_error() }
                }

                PasswordField {
                    id: "password",
                    label: "Password",
                    autocomplete: "new-password",
                    value: password(),
                    on_input: move |value| password.set(value),
                }

                PasswordField {
                    id: "password-confirm",
                    label: "Confirm password",
                    autocomplete: "new-password",
                    value: confirm(),
                    on_input: move |value| confirm.set(value),
                }
                FieldError { id: "confirm_password-error", message: confirm_error() }

                button {
                    class: "btn btn-primary auth-submit",
                    r#type: "submit",
                    disabled: email_taken() || loading(),
                    "Sign up"
                }
            }

            div {
                class: "auth-links",
                a {
                    href: "#",
                    onclick: move |evt: Event<MouseData>| {
                        evt.prevent_default();
                        on_navigate.call(Page::Login);
                    },
                    "Already have an account? Log in"
                }
            }
        }
    }
}
