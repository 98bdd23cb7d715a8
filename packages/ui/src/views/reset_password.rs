use dioxus::prelude::*;

use crate::effects::{run_effects, Page};
use crate::forms::{submit_reset_password, Field};
use crate::password::PasswordField;
use crate::session::use_backend;

use super::{AuthCard, FieldError};

#[component]
pub fn ResetPasswordView(on_navigate: EventHandler<Page>) -> Element {
    let backend = use_backend();
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            error.set(String::new());
            let outcome = submit_reset_password(&backend, &password(), &confirm()).await;
            if let Some(message) = outcome.error_for(Field::Form) {
                error.set(message.to_string());
            }
            run_effects(outcome.effects, on_navigate, || {});
        }
    };

    rsx! {
        AuthCard {
            title: "Reset password",
            form {
                id: "auth-form",
                class: "auth-form",
                onsubmit: handle_submit,

                PasswordField {
                    id: "password",
                    label: "New password",
                    autocomplete: "new-password",
                    value: password(),
                    on_input: move |value| password.set(value),
                }

                PasswordField {
                    id: "password-confirm",
                    label: "Confirm new password",
                    autocomplete: "new-password",
                    value: confirm(),
                    on_input: move |value| confirm.set(value),
                }

                FieldError { id: "reset_password-error", message: error() }

                button { class: "btn btn-primary auth-submit", r#type: "submit", "Reset password" }
            }
        }
    }
}
