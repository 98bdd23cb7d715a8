use api::Project;
use dioxus::prelude::*;

use crate::detection::DetectionPanelView;
use crate::effects::{run_effects, Effect, Page};
use crate::project::{
    create_project, delete_project, initial_load, rename_project, show_default_page, switch_project,
};
use crate::project_dialogs::{DeleteProjectDialog, ProjectNameDialog};
use crate::report::ReportDialog;
use crate::session::use_backend;
use crate::state::{HomeState, MainView};
use crate::ProjectSidebar;

use super::{ModalOverlay, WelcomePage};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Debug, PartialEq)]
enum Modal {
    CreateProject,
    RenameProject(Project),
    DeleteProject(Project),
    Report,
}

fn apply(effects: Vec<Effect>, on_navigate: EventHandler<Page>, mut modal: Signal<Option<Modal>>) {
    run_effects(effects, on_navigate, || modal.set(None));
}

/// The signed-in workspace: project sidebar plus detection panel.
///
/// `project_id` is the `project_id` query parameter of `/home`.
#[component]
pub fn HomeView(project_id: Option<String>, on_navigate: EventHandler<Page>) -> Element {
    // Track the query parameter in a signal so the loader re-runs on back/forward
    let mut route_project = use_signal(|| project_id.clone());
    if *route_project.peek() != project_id {
        route_project.set(project_id.clone());
    }

    let backend = use_backend();
    let mut state = use_signal(HomeState::default);
    let mut modal = use_signal(|| Option::<Modal>::None);
    let mut busy = use_signal(|| false);
    let mut started = use_signal(|| false);

    let _loader = use_resource({
        let backend = backend.clone();
        move || {
            let wanted = route_project();
            let backend = backend.clone();
            async move {
                if !*started.peek() {
                    started.set(true);
                    let effects = initial_load(&backend, &mut state, wanted.as_deref()).await;
                    apply(effects, on_navigate, modal);
                    return;
                }
                if state.peek().current_project == wanted {
                    return;
                }
                let mut effects = match wanted {
                    Some(id) => switch_project(&backend, &mut state, &id).await,
                    None => show_default_page(&mut state),
                };
                // The URL already points here
                effects.retain(|e| !matches!(e, Effect::Navigate(Page::Home(_))));
                apply(effects, on_navigate, modal);
            }
        }
    });

    let on_select = {
        let backend = backend.clone();
        move |id: String| {
            let backend = backend.clone();
            spawn(async move {
                let effects = switch_project(&backend, &mut state, &id).await;
                apply(effects, on_navigate, modal);
            });
        }
    };

    let on_create = {
        let backend = backend.clone();
        move |name: String| {
            let backend = backend.clone();
            spawn(async move {
                busy.set(true);
                let effects = create_project(&backend, &mut state, &name).await;
                busy.set(false);
                apply(effects, on_navigate, modal);
            });
        }
    };

    let on_rename = {
        let backend = backend.clone();
        move |(id, name): (String, String)| {
            let backend = backend.clone();
            spawn(async move {
                busy.set(true);
                let effects = rename_project(&backend, &mut state, &id, &name).await;
                busy.set(false);
                apply(effects, on_navigate, modal);
            });
        }
    };

    let on_delete = move |id: String| {
        let backend = backend.clone();
        spawn(async move {
            busy.set(true);
            let effects = delete_project(&backend, &mut state, &id).await;
            busy.set(false);
            apply(effects, on_navigate, modal);
        });
    };

    let (projects, loaded, active, view) = {
        let s = state.read();
        (s.projects.clone(), s.projects_loaded, s.current_project.clone(), s.view)
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        div {
            class: "home-layout",
            ProjectSidebar {
                projects,
                loaded,
                active_project: active,
                on_select,
                on_create: move |_| modal.set(Some(Modal::CreateProject)),
                on_rename: move |project| modal.set(Some(Modal::RenameProject(project))),
                on_delete: move |project| modal.set(Some(Modal::DeleteProject(project))),
                on_report: move |_| modal.set(Some(Modal::Report)),
                on_navigate,
            }

            main {
                class: "home-main",
                if view == MainView::Welcome {
                    WelcomePage { on_create_project: move |_| modal.set(Some(Modal::CreateProject)) }
                } else {
                    DetectionPanelView { state, url_project: route_project(), on_navigate }
                }
            }
        }

        {match modal() {
            Some(Modal::CreateProject) => rsx! {
                ModalOverlay {
                    on_close: move |_| modal.set(None),
                    ProjectNameDialog {
                        title: "New project",
                        submit_label: "Create",
                        busy: busy(),
                        on_submit: on_create,
                        on_cancel: move |_| modal.set(None),
                    }
                }
            },
            Some(Modal::RenameProject(project)) => {
                let id = project.id.clone();
                rsx! {
                    ModalOverlay {
                        on_close: move |_| modal.set(None),
                        ProjectNameDialog {
                            title: "Rename project",
                            submit_label: "Save",
                            initial_name: project.name.clone(),
                            busy: busy(),
                            on_submit: {
                                let on_rename = on_rename.clone();
                                move |name: String| on_rename((id.clone(), name))
                            },
                            on_cancel: move |_| modal.set(None),
                        }
                    }
                }
            }
            Some(Modal::DeleteProject(project)) => rsx! {
                ModalOverlay {
                    on_close: move |_| modal.set(None),
                    DeleteProjectDialog {
                        project,
                        busy: busy(),
                        on_confirm: on_delete,
                        on_cancel: move |_| modal.set(None),
                    }
                }
            },
            Some(Modal::Report) => rsx! {
                ModalOverlay {
                    on_close: move |_| modal.set(None),
                    ReportDialog { on_close: move |_| modal.set(None), on_navigate }
                }
            },
            None => rsx! {},
        }}
    }
}
