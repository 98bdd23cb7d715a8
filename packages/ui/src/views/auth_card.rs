use dioxus::prelude::*;

/// Centered card shared by the account pages.
#[component]
pub fn AuthCard(title: String, #[props(default)] subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h1 { class: "auth-brand", "MADetect" }
                h2 { class: "auth-title", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "auth-subtitle", "{subtitle}" }
                }
                {children}
            }
        }
    }
}

/// Inline error line under a form field.
#[component]
pub fn FieldError(id: String, message: String) -> Element {
    rsx! {
        div { id: "{id}", class: "field-error", role: "alert", "{message}" }
    }
}
