//! This crate contains all shared UI for the workspace: the page flows of the
//! MADetect client and the Dioxus components that drive them.
//!
//! Flows ([`detection`], [`project`], [`forms`], [`report`]) are plain async
//! functions over [`api::Backend`] and [`state::HomeState`]; they return
//! [`Effect`]s instead of touching the browser, and are tested against
//! `api::mock::MockBackend`.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod browser;
pub mod escape;
pub mod state;
pub mod views;

pub mod effects;
pub use effects::{run_effects, Effect, Page};

pub mod detection;
pub use detection::{DetectionPanel, DetectionPanelView};

pub mod project;
pub mod forms;
pub mod report;

mod session;
pub use session::{
    make_backend, make_token_store, use_backend, use_config, use_session, AccountFooter,
    LogoutButton, SessionProvider, SessionState,
};

mod sidebar;
pub use sidebar::ProjectSidebar;

mod project_dialogs;
pub use project_dialogs::{DeleteProjectDialog, ProjectNameDialog};

mod password;
pub use password::{PasswordField, PasswordVisibility};

pub use report::ReportDialog;
