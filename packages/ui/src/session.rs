//! Session context and hooks for the UI.

use api::{HttpBackend, UserInfo};
use dioxus::prelude::*;
use store::{ClientConfig, TokenStore};

use crate::browser;
use crate::effects::{Effect, Page};
use crate::{icons, Icon};

/// Who is logged in, as far as this page knows.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Filled by a login on this page; the backend has no "who am I" endpoint.
    pub user: Option<UserInfo>,
    /// True until the stored token has been checked against the backend.
    pub checking: bool,
    pub verified: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            checking: true,
            verified: false,
        }
    }
}

impl SessionState {
    /// Record a successful login.
    pub fn sign_in(&mut self, user: Option<UserInfo>) {
        self.user = user;
        self.checking = false;
        self.verified = true;
    }

    /// Forget the user after a logout or a rejected token.
    pub fn end(&mut self) {
        self.user = None;
        self.checking = false;
        self.verified = false;
    }

    /// Session part of a flow effect; other effects leave it alone.
    pub fn apply(&mut self, effect: &Effect) {
        if let Effect::EndSession = effect {
            self.end();
        }
    }
}

/// Token store backed by the browser when available, memory otherwise.
pub fn make_token_store() -> TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        TokenStore::browser()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        TokenStore::in_memory()
    }
}

/// Build the REST client for `config`, defaulting to the page's origin.
pub fn make_backend(config: &ClientConfig, tokens: TokenStore) -> HttpBackend {
    let base_url = config.base_url_or(&browser::origin());
    tracing::debug!("Using backend at {base_url}");
    HttpBackend::new(base_url, tokens)
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provides the backend client, configuration and session state.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let backend = use_hook(|| make_backend(&config, make_token_store()));
    let mut session = use_signal(SessionState::default);

    use_context_provider(|| config.clone());
    use_context_provider(|| backend.clone());
    use_context_provider(|| session);

    // Check the stored token once on mount
    let _verify = use_resource(move || {
        let backend = backend.clone();
        async move {
            let verified = api::auth::verify(&backend).await;
            let current = session.peek().clone();
            session.set(SessionState {
                checking: false,
                verified,
                ..current
            });
        }
    });

    rsx! {
        {children}
    }
}

/// Sidebar footer: account email and logout.
#[component]
pub fn AccountFooter(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let email = session().user.map(|u| u.email).filter(|e| !e.is_empty());

    rsx! {
        div {
            class: "account-footer",
            if let Some(email) = email {
                span { class: "account-email", title: "{email}", "{email}" }
            }
            LogoutButton { on_navigate }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_navigate: EventHandler<Page>,
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "logout-btn".to_string())] class: String,
) -> Element {
    let backend = use_backend();
    let mut session = use_session();

    let onclick = move |_| {
        let backend = backend.clone();
        async move {
            api::auth::logout(&backend).await;
            session.with_mut(SessionState::end);
            on_navigate.call(Page::Root);
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: icons::FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_marks_session_verified() {
        let mut session = SessionState::default();
        session.sign_in(None);
        assert!(session.verified);
        assert!(!session.checking);
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_end_leaves_session_unverified() {
        let mut session = SessionState::default();
        session.sign_in(Some(UserInfo {
            email: "alice@example.com".into(),
            ..Default::default()
        }));

        session.end();

        assert!(!session.verified);
        assert!(!session.checking);
        assert_eq!(session.user, None);
    }

    #[test]
    fn test_only_end_session_touches_state() {
        let mut session = SessionState::default();
        session.sign_in(None);

        session.apply(&Effect::Navigate(Page::Login));
        session.apply(&Effect::CloseModal);
        assert!(session.verified);

        session.apply(&Effect::EndSession);
        assert!(!session.verified);
    }
}
