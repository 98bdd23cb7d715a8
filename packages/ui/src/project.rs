//! # Projects
//!
//! Flows behind the project sidebar. Each one updates [`crate::state::HomeState`] and
//! returns the [`Effect`]s the page should apply:
//!
//! | Flow | Endpoint | On success |
//! |------|----------|------------|
//! | [`load_projects`] | `GET /api/project/list` | sidebar refreshed, first project selected if none is |
//! | [`switch_project`] | `GET /api/project/{id}` | URL pushed, panel rebuilt from records |
//! | [`create_project`] | `POST /api/project/create` | list reloaded, new project selected |
//! | [`rename_project`] | `PUT /api/project/{id}` | list reloaded |
//! | [`delete_project`] | `DELETE /api/project/{id}` | list reloaded, panel cleared if it was current |
//!
//! [`initial_load`] runs once when the home page mounts.

use api::{ApiError, Backend};

use crate::browser;
use crate::effects::{Effect, Page};
use crate::state::{DetectionPanel, MainView, StateCell};

pub const NAME_REQUIRED: &str = "Please enter a project name";
pub const CREATE_FAILED: &str = "Failed to create project";
pub const RENAME_FAILED: &str = "Failed to rename project";
pub const DELETE_FAILED: &str = "Failed to delete project";
pub const LOAD_FAILED: &str = "Failed to load project data";
pub const NO_PROJECTS: &str = "No projects yet";

fn server_message_or(error: &ApiError, fallback: &str) -> String {
    error.server_message().unwrap_or(fallback).to_string()
}

/// Refresh the sidebar list.
///
/// With no current project, selects the first one, or shows the welcome page
/// when the list is empty. Failures are logged and leave the list as it was.
pub async fn load_projects<B: Backend>(backend: &B, state: &mut impl StateCell) -> Vec<Effect> {
    let projects = match backend.list_projects().await {
        Ok(projects) => projects,
        Err(e) => {
            browser::console_error(&format!("Failed to load projects: {e}"));
            return Vec::new();
        }
    };
    tracing::info!("Loaded {} projects", projects.len());

    let first = projects.first().map(|p| p.id.clone());
    let has_current = state.update(|s| {
        s.projects = projects;
        s.projects_loaded = true;
        s.current_project.is_some()
    });
    if has_current {
        return Vec::new();
    }
    match first {
        Some(id) => switch_project(backend, state, &id).await,
        None => show_default_page(state),
    }
}

/// Make `project_id` current, push its URL and rebuild the panel from its
/// records.
pub async fn switch_project<B: Backend>(
    backend: &B,
    state: &mut impl StateCell,
    project_id: &str,
) -> Vec<Effect> {
    state.update(|s| {
        s.current_project = Some(project_id.to_string());
        s.view = MainView::Detection;
    });
    let mut effects = vec![Effect::Navigate(Page::Home(Some(project_id.to_string())))];
    effects.extend(load_project_data(backend, state, project_id).await);
    effects
}

/// Replace the panel with `project_id`'s stored records.
///
/// Any failure still leaves a fresh input so the page stays usable.
pub async fn load_project_data<B: Backend>(
    backend: &B,
    state: &mut impl StateCell,
    project_id: &str,
) -> Vec<Effect> {
    match backend.project_records(project_id).await {
        Ok(records) => {
            tracing::debug!("Project {project_id} has {} records", records.len());
            state.update(|s| s.replace_panel(DetectionPanel::from_records(&records)));
            Vec::new()
        }
        Err(e) => {
            browser::console_error(&format!("Failed to load project {project_id}: {e}"));
            state.update(|s| s.replace_panel(DetectionPanel::fresh()));
            let message = match e.status() {
                Some(200 | 403 | 404) => server_message_or(&e, LOAD_FAILED),
                _ => format!("Error while loading project: {}", server_message_or(&e, &e.to_string())),
            };
            vec![Effect::Alert(message)]
        }
    }
}

/// Clear the selection and show the getting-started page at `/home`.
pub fn show_default_page(state: &mut impl StateCell) -> Vec<Effect> {
    state.update(|s| {
        s.current_project = None;
        s.view = MainView::Welcome;
        s.replace_panel(DetectionPanel::fresh());
    });
    vec![Effect::Navigate(Page::Home(None))]
}

/// First load of the home page.
///
/// A `project_id` from the URL is selected and loaded before the list, so the
/// list does not override it with its first entry.
pub async fn initial_load<B: Backend>(
    backend: &B,
    state: &mut impl StateCell,
    url_project: Option<&str>,
) -> Vec<Effect> {
    let mut effects = Vec::new();
    if let Some(id) = url_project.filter(|id| !id.is_empty()) {
        state.update(|s| {
            s.current_project = Some(id.to_string());
            s.view = MainView::Detection;
        });
        effects.extend(load_project_data(backend, state, id).await);
    }
    effects.extend(load_projects(backend, state).await);
    effects
}

pub async fn create_project<B: Backend>(backend: &B, state: &mut impl StateCell, name: &str) -> Vec<Effect> {
    let name = name.trim();
    if name.is_empty() {
        return vec![Effect::alert(NAME_REQUIRED)];
    }
    match backend.create_project(name).await {
        Ok(project) => {
            tracing::info!("Created project {name}");
            let mut effects = vec![Effect::CloseModal];
            effects.extend(load_projects(backend, state).await);
            if let Some(project) = project {
                effects.extend(switch_project(backend, state, &project.id).await);
            }
            effects
        }
        Err(e) => {
            tracing::error!("Failed to create project: {e}");
            vec![Effect::Alert(server_message_or(&e, CREATE_FAILED))]
        }
    }
}

pub async fn rename_project<B: Backend>(
    backend: &B,
    state: &mut impl StateCell,
    project_id: &str,
    name: &str,
) -> Vec<Effect> {
    let name = name.trim();
    if name.is_empty() {
        return vec![Effect::alert(NAME_REQUIRED)];
    }
    match backend.rename_project(project_id, name).await {
        Ok(()) => {
            let mut effects = vec![Effect::CloseModal];
            effects.extend(load_projects(backend, state).await);
            effects
        }
        Err(e) => {
            tracing::error!("Failed to rename project {project_id}: {e}");
            vec![Effect::Alert(server_message_or(&e, RENAME_FAILED))]
        }
    }
}

pub async fn delete_project<B: Backend>(
    backend: &B,
    state: &mut impl StateCell,
    project_id: &str,
) -> Vec<Effect> {
    match backend.delete_project(project_id).await {
        Ok(()) => {
            tracing::info!("Deleted project {project_id}");
            state.update(|s| {
                if s.is_current(project_id) {
                    s.current_project = None;
                    s.replace_panel(DetectionPanel::fresh());
                }
            });
            let mut effects = vec![Effect::CloseModal];
            effects.extend(load_projects(backend, state).await);
            effects
        }
        Err(e) => {
            tracing::error!("Failed to delete project {project_id}: {e}");
            vec![Effect::Alert(server_message_or(&e, DELETE_FAILED))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HomeState;
    use api::mock::MockBackend;
    use api::DetectionRecord;

    fn record(input: &str) -> DetectionRecord {
        DetectionRecord {
            input_ad: input.into(),
            result_law: "law".into(),
            result_advice: "advice".into(),
        }
    }

    #[tokio::test]
    async fn test_load_selects_first_project() {
        let backend = MockBackend::new();
        let older = backend.add_project("Older");
        let newest = backend.add_project("Newest");
        backend.add_record(&newest, record("ad"));
        let mut state = HomeState::default();

        let effects = load_projects(&backend, &mut state).await;

        assert_eq!(effects, vec![Effect::Navigate(Page::Home(Some(newest.clone())))]);
        assert_eq!(state.current_project.as_deref(), Some(newest.as_str()));
        assert_eq!(state.projects.len(), 2);
        assert_eq!(state.projects[1].id, older);
        assert_eq!(state.panel().result_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_shows_welcome() {
        let backend = MockBackend::new();
        let mut state = HomeState::default();

        let effects = load_projects(&backend, &mut state).await;

        assert_eq!(effects, vec![Effect::Navigate(Page::Home(None))]);
        assert_eq!(state.view, MainView::Welcome);
        assert!(state.projects_loaded);
        assert!(state.projects.is_empty());
    }

    #[tokio::test]
    async fn test_list_failure_keeps_sidebar() {
        let backend = MockBackend::new();
        backend.add_project("Kept");
        let mut state = HomeState::default();
        load_projects(&backend, &mut state).await;

        backend.fail_transport(true);
        let effects = load_projects(&backend, &mut state).await;
        assert!(effects.is_empty());
        assert_eq!(state.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_switch_pushes_project_url() {
        let backend = MockBackend::new();
        let id = backend.add_project("Campaign");
        let mut state = HomeState::default();

        let effects = switch_project(&backend, &mut state, &id).await;

        assert_eq!(effects, vec![Effect::Navigate(Page::Home(Some(id.clone())))]);
        assert_eq!(Page::Home(Some(id.clone())).path(), format!("/home?project_id={id}"));
        assert!(state.is_current(&id));
        assert_eq!(state.view, MainView::Detection);
    }

    #[tokio::test]
    async fn test_missing_project_alerts_and_resets_panel() {
        let backend = MockBackend::new();
        let mut state = HomeState::default();
        state.replace_panel(DetectionPanel::from_records(&[record("stale")]));

        let effects = load_project_data(&backend, &mut state, "gone").await;

        assert_eq!(effects, vec![Effect::alert("Project not found")]);
        assert_eq!(state.panel(), &DetectionPanel::fresh());
    }

    #[tokio::test]
    async fn test_other_load_failure_is_prefixed() {
        let backend = MockBackend::new();
        backend.fail_transport(true);
        let mut state = HomeState::default();

        let effects = load_project_data(&backend, &mut state, "p1").await;

        assert_eq!(
            effects,
            vec![Effect::alert("Error while loading project: network error: connection refused")]
        );
    }

    #[tokio::test]
    async fn test_initial_load_prefers_url_project() {
        let backend = MockBackend::new();
        let wanted = backend.add_project("Wanted");
        backend.add_project("Newest");
        backend.add_record(&wanted, record("ad"));
        let mut state = HomeState::default();

        let effects = initial_load(&backend, &mut state, Some(&wanted)).await;

        assert!(effects.is_empty());
        assert!(state.is_current(&wanted));
        assert_eq!(state.panel().result_count(), 1);
        assert_eq!(state.projects.len(), 2);
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let backend = MockBackend::new();
        let mut state = HomeState::default();
        let effects = create_project(&backend, &mut state, "   ").await;
        assert_eq!(effects, vec![Effect::alert(NAME_REQUIRED)]);
        assert_eq!(backend.calls("create_project"), 0);
    }

    #[tokio::test]
    async fn test_create_switches_to_new_project() {
        let backend = MockBackend::new();
        let existing = backend.add_project("Existing");
        let mut state = HomeState::default();
        load_projects(&backend, &mut state).await;
        assert!(state.is_current(&existing));

        let effects = create_project(&backend, &mut state, "  Launch  ").await;

        let created = backend.projects()[0].clone();
        assert_eq!(created.name, "Launch");
        assert_eq!(effects.first(), Some(&Effect::CloseModal));
        assert_eq!(effects.last(), Some(&Effect::Navigate(Page::Home(Some(created.id.clone())))));
        assert!(state.is_current(&created.id));
        assert_eq!(state.projects.len(), 2);
    }

    #[tokio::test]
    async fn test_rename_reloads_list() {
        let backend = MockBackend::new();
        let id = backend.add_project("Old");
        let mut state = HomeState::default();
        load_projects(&backend, &mut state).await;

        let effects = rename_project(&backend, &mut state, &id, "New").await;

        assert_eq!(effects, vec![Effect::CloseModal]);
        assert_eq!(state.projects[0].name, "New");
    }

    #[tokio::test]
    async fn test_rename_failure_alerts() {
        let backend = MockBackend::new();
        let mut state = HomeState::default();
        let effects = rename_project(&backend, &mut state, "gone", "New").await;
        assert_eq!(effects, vec![Effect::alert("Project not found")]);
    }

    #[tokio::test]
    async fn test_delete_current_falls_back_to_next() {
        let backend = MockBackend::new();
        let remaining = backend.add_project("Remaining");
        let current = backend.add_project("Current");
        backend.add_record(&current, record("ad"));
        let mut state = HomeState::default();
        load_projects(&backend, &mut state).await;
        assert!(state.is_current(&current));

        let effects = delete_project(&backend, &mut state, &current).await;

        assert_eq!(
            effects,
            vec![Effect::CloseModal, Effect::Navigate(Page::Home(Some(remaining.clone())))]
        );
        assert!(state.is_current(&remaining));
        assert_eq!(state.panel().result_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_last_project_shows_welcome() {
        let backend = MockBackend::new();
        let only = backend.add_project("Only");
        let mut state = HomeState::default();
        load_projects(&backend, &mut state).await;

        let effects = delete_project(&backend, &mut state, &only).await;

        assert_eq!(effects, vec![Effect::CloseModal, Effect::Navigate(Page::Home(None))]);
        assert_eq!(state.view, MainView::Welcome);
        assert_eq!(state.current_project, None);
    }

    #[tokio::test]
    async fn test_delete_other_keeps_selection() {
        let backend = MockBackend::new();
        let other = backend.add_project("Other");
        let current = backend.add_project("Current");
        let mut state = HomeState::default();
        load_projects(&backend, &mut state).await;

        let effects = delete_project(&backend, &mut state, &other).await;

        assert_eq!(effects, vec![Effect::CloseModal]);
        assert!(state.is_current(&current));
        assert_eq!(state.projects.len(), 1);
    }
}
