//! Problem report dialog.

use api::Backend;
use dioxus::prelude::*;

use crate::effects::{run_effects, Effect, Page};

pub const REPORT_REQUIRED: &str = "Please enter the report content";
pub const REPORT_SENT: &str = "Report submitted";
pub const REPORT_FAILED: &str = "Report failed, please try again later";

/// Send a problem report. On success the dialog closes and the caller clears
/// the text.
pub async fn submit_report<B: Backend>(backend: &B, text: &str) -> Vec<Effect> {
    if text.trim().is_empty() {
        return vec![Effect::alert(REPORT_REQUIRED)];
    }
    match backend.submit_report(text).await {
        Ok(()) => vec![Effect::alert(REPORT_SENT), Effect::CloseModal],
        Err(e) => {
            tracing::error!("Report failed: {e}");
            vec![Effect::Alert(e.server_message().unwrap_or(REPORT_FAILED).to_string())]
        }
    }
}

#[component]
pub fn ReportDialog(on_close: EventHandler<()>, on_navigate: EventHandler<Page>) -> Element {
    let backend = crate::session::use_backend();
    let mut text = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            sending.set(true);
            let effects = submit_report(&backend, &text()).await;
            sending.set(false);
            run_effects(effects, on_navigate, || {
                text.set(String::new());
                on_close.call(());
            });
        }
    };

    rsx! {
        form {
            class: "modal-form",
            onsubmit: handle_submit,
            h2 { class: "modal-title", "Report an issue" }
            textarea {
                class: "modal-textarea",
                placeholder: "Describe the problem you ran into",
                value: text(),
                oninput: move |evt: FormEvent| text.set(evt.value()),
            }
            div {
                class: "modal-actions",
                button { class: "btn btn-primary", r#type: "submit", disabled: sending(), "Submit" }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::MockBackend;

    #[tokio::test]
    async fn test_blank_report_is_not_sent() {
        let backend = MockBackend::new();
        assert_eq!(submit_report(&backend, " \n ").await, vec![Effect::alert(REPORT_REQUIRED)]);
        assert_eq!(backend.calls("submit_report"), 0);
    }

    #[tokio::test]
    async fn test_report_success_closes_dialog() {
        let backend = MockBackend::new();
        let effects = submit_report(&backend, "  Results never load  ").await;
        assert_eq!(effects, vec![Effect::alert(REPORT_SENT), Effect::CloseModal]);
        assert_eq!(backend.reports(), vec!["  Results never load  ".to_string()]);
    }

    #[tokio::test]
    async fn test_report_failure_keeps_dialog() {
        let backend = MockBackend::new();
        backend.fail_transport(true);
        let effects = submit_report(&backend, "broken").await;
        assert_eq!(effects, vec![Effect::alert(REPORT_FAILED)]);
        assert!(backend.reports().is_empty());
    }
}
