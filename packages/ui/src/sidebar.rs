use api::Project;
use dioxus::prelude::*;

use crate::effects::Page;
use crate::project::NO_PROJECTS;
use crate::session::AccountFooter;
use crate::{icons, Icon};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

#[component]
pub fn ProjectSidebar(
    projects: Vec<Project>,
    loaded: bool,
    active_project: Option<String>,
    on_select: EventHandler<String>,
    on_create: EventHandler<()>,
    on_rename: EventHandler<Project>,
    on_delete: EventHandler<Project>,
    on_report: EventHandler<()>,
    on_navigate: EventHandler<Page>,
) -> Element {
    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        div {
            class: "sidebar",

            div {
                class: "sidebar-header",
                span { class: "sidebar-title", "MADetect" }
                button {
                    class: "sidebar-new-project",
                    title: "New project",
                    onclick: move |_| on_create.call(()),
                    Icon { icon: icons::FaPlus, width: 14, height: 14 }
                }
            }

            div {
                class: "project-list",
                if loaded && projects.is_empty() {
                    div { class: "no-projects", "{NO_PROJECTS}" }
                }
                for project in projects.iter() {
                    ProjectItem {
                        key: "{project.id}",
                        active: active_project.as_deref() == Some(project.id.as_str()),
                        project: project.clone(),
                        on_select,
                        on_rename,
                        on_delete,
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-bottom-item",
                    onclick: move |_| on_report.call(()),
                    Icon { icon: icons::FaFlag, width: 14, height: 14 }
                    span { "Report an issue" }
                }
                AccountFooter { on_navigate }
            }
        }
    }
}

#[component]
fn ProjectItem(
    project: Project,
    active: bool,
    on_select: EventHandler<String>,
    on_rename: EventHandler<Project>,
    on_delete: EventHandler<Project>,
) -> Element {
    let id = project.id.clone();
    let for_rename = project.clone();
    let for_delete = project.clone();

    rsx! {
        div {
            class: if active { "project-item active" } else { "project-item" },
            onclick: move |_| on_select.call(id.clone()),
            span { class: "project-name", title: "{project.name}", "{project.name}" }
            div {
                class: "project-actions",
                button {
                    class: "project-action",
                    title: "Rename",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_rename.call(for_rename.clone());
                    },
                    Icon { icon: icons::FaPenToSquare, width: 12, height: 12 }
                }
                button {
                    class: "project-action",
                    title: "Delete",
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        on_delete.call(for_delete.clone());
                    },
                    Icon { icon: icons::FaTrashCan, width: 12, height: 12 }
                }
            }
        }
    }
}
