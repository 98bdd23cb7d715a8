use api::Project;
use dioxus::prelude::*;

/// Name form used for both creating and renaming a project.
#[component]
pub fn ProjectNameDialog(
    title: String,
    submit_label: String,
    #[props(default)] initial_name: String,
    busy: bool,
    on_submit: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut name = use_signal(move || initial_name);

    rsx! {
        form {
            class: "modal-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(name());
            },
            h2 { class: "modal-title", "{title}" }

            label { class: "modal-label", r#for: "project-name", "Project name" }
            input {
                id: "project-name",
                class: "modal-input",
                r#type: "text",
                placeholder: "e.g. Spring campaign",
                autofocus: true,
                value: name(),
                oninput: move |evt: FormEvent| name.set(evt.value()),
            }

            div {
                class: "modal-actions",
                button { class: "btn btn-primary", r#type: "submit", disabled: busy, "{submit_label}" }
                button {
                    class: "btn btn-outline",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// Confirmation before deleting a project and its records.
#[component]
pub fn DeleteProjectDialog(
    project: Project,
    busy: bool,
    on_confirm: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let id = project.id.clone();

    rsx! {
        div {
            class: "modal-form",
            h2 { class: "modal-title", "Delete project" }
            p {
                class: "modal-text",
                "Delete "
                strong { "{project.name}" }
                " and all of its detection records? This cannot be undone."
            }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_confirm.call(id.clone()),
                    "Delete"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
