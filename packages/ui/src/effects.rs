//! Side effects returned by the page flows.
//!
//! Flows in [`crate::detection`], [`crate::project`], [`crate::forms`] and
//! [`crate::report`] never touch the browser themselves. They return a list of
//! [`Effect`]s which components hand to [`run_effects`], and which tests assert
//! on directly.

use dioxus::prelude::*;

use crate::browser;
use crate::session::SessionState;

/// Pages a flow can send the user to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// `/`, which forwards to the home page.
    Root,
    /// `/home`, optionally scoped to a project (`/home?project_id=`).
    Home(Option<String>),
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    /// Administrator console, served by the backend.
    AdminHome,
}

impl Page {
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Home(None) => "/home".to_string(),
            Self::Home(Some(id)) => format!("/home?project_id={}", urlencoding::encode(id)),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::ForgotPassword => "/forgetpsw".to_string(),
            Self::ResetPassword => "/reset".to_string(),
            Self::AdminHome => "/adminhome".to_string(),
        }
    }

    /// Whether the page lives outside the client router.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::AdminHome)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Alert(String),
    Navigate(Page),
    /// Dismiss whichever modal started the flow.
    CloseModal,
    /// The backend rejected the token: mark the session signed out so the
    /// login page does not bounce back to `/home`.
    EndSession,
}

impl Effect {
    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert(message.into())
    }
}

/// Apply effects in order. External pages get a full-page redirect, the rest
/// go through `navigate`.
pub fn run_effects(effects: Vec<Effect>, navigate: EventHandler<Page>, mut close_modal: impl FnMut()) {
    for effect in effects {
        match &effect {
            Effect::Alert(message) => browser::alert(message),
            Effect::Navigate(page) if page.is_external() => browser::redirect(&page.path()),
            Effect::Navigate(page) => navigate.call(page.clone()),
            Effect::CloseModal => close_modal(),
            Effect::EndSession => {
                if let Some(mut session) = try_consume_context::<Signal<SessionState>>() {
                    session.with_mut(|s| s.apply(&effect));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_paths() {
        assert_eq!(Page::Home(None).path(), "/home");
        assert_eq!(Page::Home(Some("65f0a1".into())).path(), "/home?project_id=65f0a1");
        assert_eq!(Page::Home(Some("a&b c".into())).path(), "/home?project_id=a%26b%20c");
        assert_eq!(Page::Home(Some("é/?".into())).path(), "/home?project_id=%C3%A9%2F%3F");
    }

    #[test]
    fn test_only_admin_home_is_external() {
        assert!(Page::AdminHome.is_external());
        assert!(!Page::Login.is_external());
        assert!(!Page::Home(None).is_external());
    }
}
