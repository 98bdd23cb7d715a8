//! # Account forms
//!
//! Submit logic of the login, signup, forgot-password and reset-password
//! pages. Each flow returns a [`FormOutcome`]: an inline error for one field of
//! the form, or the effects of a successful submit.

use api::auth::{self, AuthOutcome};
use api::Backend;

use crate::effects::{Effect, Page};

pub const INVALID_LOGIN: &str = "Invalid email or password";
pub const EMAIL_TAKEN: &str = "Email already exists";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const REGISTERED: &str = "Registration successful! Please log in";
pub const UNKNOWN_ACCOUNT: &str = "Invalid name or email";
pub const RESET_FAILED: &str = "Failed to reset password";
pub const GENERIC_ERROR: &str = "An error occurred, please try again later";

/// Where an inline error is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// The form-wide error line.
    Form,
    Email,
    ConfirmPassword,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormOutcome {
    pub error: Option<(Field, String)>,
    pub effects: Vec<Effect>,
    /// Set by a successful login, whether or not the backend sent a user.
    pub logged_in: bool,
    /// Logged-in user, for the session context.
    pub user: Option<api::UserInfo>,
}

impl FormOutcome {
    fn error(field: Field, message: impl Into<String>) -> Self {
        Self {
            error: Some((field, message.into())),
            ..Default::default()
        }
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            ..Default::default()
        }
    }

    /// Error text for `field`, if the outcome put one there.
    pub fn error_for(&self, field: Field) -> Option<&str> {
        match &self.error {
            Some((f, message)) if *f == field => Some(message),
            _ => None,
        }
    }
}

/// Log in; administrators land on the admin console.
pub async fn submit_login<B: Backend>(backend: &B, email: &str, password: &str, admin: bool) -> FormOutcome {
    let outcome = if admin {
        auth::admin_login(backend, email, password).await
    } else {
        auth::login(backend, email, password).await
    };
    match outcome {
        AuthOutcome::LoggedIn(user) => {
            let target = if admin { Page::AdminHome } else { Page::Home(None) };
            FormOutcome {
                logged_in: true,
                user,
                ..FormOutcome::effects(vec![Effect::Navigate(target)])
            }
        }
        AuthOutcome::Failed(message) if !message.trim().is_empty() => FormOutcome::error(Field::Form, message),
        _ => FormOutcome::error(Field::Form, INVALID_LOGIN),
    }
}

/// Availability of a signup email.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailCheck {
    Available,
    Taken,
}

impl EmailCheck {
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Taken => Some(EMAIL_TAKEN),
            Self::Available => None,
        }
    }

    pub fn blocks_submit(self) -> bool {
        self == Self::Taken
    }
}

/// Look up `email` when the field loses focus. Empty input is not checked.
pub async fn check_signup_email<B: Backend>(backend: &B, email: &str) -> Option<EmailCheck> {
    let email = email.trim();
    if email.is_empty() {
        return None;
    }
    Some(if auth::check_email(backend, email).await {
        EmailCheck::Taken
    } else {
        EmailCheck::Available
    })
}

pub async fn submit_signup<B: Backend>(
    backend: &B,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> FormOutcome {
    if password != confirm {
        return FormOutcome::error(Field::ConfirmPassword, PASSWORD_MISMATCH);
    }
    match auth::register(backend, name, email, password).await {
        AuthOutcome::Failed(message) => FormOutcome::error(Field::Email, message),
        _ => FormOutcome::effects(vec![Effect::alert(REGISTERED), Effect::Navigate(Page::Login)]),
    }
}

pub async fn submit_forgot_password<B: Backend>(backend: &B, name: &str, email: &str) -> FormOutcome {
    match backend.forgot_password(name, email).await {
        Ok(true) => FormOutcome::effects(vec![Effect::Navigate(Page::ResetPassword)]),
        Ok(false) => FormOutcome::error(Field::Form, UNKNOWN_ACCOUNT),
        Err(e) => {
            tracing::error!("Password recovery failed: {e}");
            FormOutcome::error(Field::Form, GENERIC_ERROR)
        }
    }
}

pub async fn submit_reset_password<B: Backend>(backend: &B, password: &str, confirm: &str) -> FormOutcome {
    if password != confirm {
        return FormOutcome::error(Field::Form, PASSWORD_MISMATCH);
    }
    match backend.reset_password(password).await {
        Ok(()) => FormOutcome::effects(vec![Effect::Navigate(Page::Login)]),
        Err(e) if e.is_transport() => {
            tracing::error!("Password reset failed: {e}");
            FormOutcome::error(Field::Form, GENERIC_ERROR)
        }
        Err(e) => {
            tracing::warn!("Password reset rejected: {e}");
            FormOutcome::error(Field::Form, RESET_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::MockBackend;

    #[tokio::test]
    async fn test_login_failure_shows_message_without_navigation() {
        let backend = MockBackend::new();
        backend.add_user("Alice", "alice@example.com", "secret");

        let outcome = submit_login(&backend, "alice@example.com", "wrong", false).await;

        assert_eq!(outcome.error_for(Field::Form), Some("Wrong email or password"));
        assert!(outcome.effects.is_empty());
        assert!(!outcome.logged_in);
        assert!(backend.tokens().get().is_none());
    }

    #[tokio::test]
    async fn test_login_shows_message_of_rejected_ok_body() {
        let backend = MockBackend::new();
        backend.respond_to_login(r#"{"success": false, "message": "Account suspended"}"#);

        let outcome = submit_login(&backend, "alice@example.com", "secret", false).await;

        assert_eq!(outcome.error_for(Field::Form), Some("Account suspended"));
        assert!(outcome.effects.is_empty());
        assert!(!outcome.logged_in);
    }

    #[tokio::test]
    async fn test_login_without_user_object_still_logs_in() {
        let backend = MockBackend::new();
        backend.respond_to_login(r#"{"success": true, "token": "t1"}"#);

        let outcome = submit_login(&backend, "alice@example.com", "secret", false).await;

        assert!(outcome.logged_in);
        assert_eq!(outcome.user, None);
        assert_eq!(outcome.effects, vec![Effect::Navigate(Page::Home(None))]);
        assert_eq!(backend.tokens().get().as_deref(), Some("t1"));
    }

    #[tokio::test]
    async fn test_login_success_goes_home() {
        let backend = MockBackend::new();
        backend.add_user("Alice", "alice@example.com", "secret");

        let outcome = submit_login(&backend, "alice@example.com", "secret", false).await;

        assert_eq!(outcome.error, None);
        assert!(outcome.logged_in);
        assert_eq!(outcome.effects, vec![Effect::Navigate(Page::Home(None))]);
        assert_eq!(outcome.user.map(|u| u.email).as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn test_admin_login_goes_to_console() {
        let backend = MockBackend::new();
        backend.add_admin("root@example.com", "toor");

        let outcome = submit_login(&backend, "root@example.com", "toor", true).await;

        assert_eq!(outcome.effects, vec![Effect::Navigate(Page::AdminHome)]);
        assert_eq!(backend.calls("admin_login"), 1);
        assert_eq!(backend.calls("login"), 0);
    }

    #[tokio::test]
    async fn test_email_check_on_blur() {
        let backend = MockBackend::new();
        backend.add_user("Alice", "alice@example.com", "secret");

        assert_eq!(check_signup_email(&backend, "").await, None);
        assert_eq!(backend.calls("check_email"), 0);

        let taken = check_signup_email(&backend, "alice@example.com").await.unwrap();
        assert!(taken.blocks_submit());
        assert_eq!(taken.message(), Some(EMAIL_TAKEN));

        let free = check_signup_email(&backend, "bob@example.com").await.unwrap();
        assert!(!free.blocks_submit());
        assert_eq!(free.message(), None);
    }

    #[tokio::test]
    async fn test_signup_password_mismatch_skips_request() {
        let backend = MockBackend::new();
        let outcome = submit_signup(&backend, "Bob", "bob@example.com", "one", "two").await;
        assert_eq!(outcome.error_for(Field::ConfirmPassword), Some(PASSWORD_MISMATCH));
        assert_eq!(backend.calls("register"), 0);
    }

    #[tokio::test]
    async fn test_signup_success_and_duplicate() {
        let backend = MockBackend::new();

        let outcome = submit_signup(&backend, "Bob", "bob@example.com", "pw", "pw").await;
        assert_eq!(outcome.effects, vec![Effect::alert(REGISTERED), Effect::Navigate(Page::Login)]);

        let again = submit_signup(&backend, "Bob", "bob@example.com", "pw", "pw").await;
        assert_eq!(again.error_for(Field::Email), Some(EMAIL_TAKEN));
        assert!(again.effects.is_empty());
    }

    #[tokio::test]
    async fn test_forgot_password() {
        let backend = MockBackend::new();
        backend.add_user("Alice", "alice@example.com", "secret");

        let found = submit_forgot_password(&backend, "Alice", "alice@example.com").await;
        assert_eq!(found.effects, vec![Effect::Navigate(Page::ResetPassword)]);

        let unknown = submit_forgot_password(&backend, "Mallory", "alice@example.com").await;
        assert_eq!(unknown.error_for(Field::Form), Some(UNKNOWN_ACCOUNT));

        backend.fail_transport(true);
        let down = submit_forgot_password(&backend, "Alice", "alice@example.com").await;
        assert_eq!(down.error_for(Field::Form), Some(GENERIC_ERROR));
    }

    #[tokio::test]
    async fn test_reset_password() {
        let backend = MockBackend::new();

        let mismatch = submit_reset_password(&backend, "a", "b").await;
        assert_eq!(mismatch.error_for(Field::Form), Some(PASSWORD_MISMATCH));
        assert_eq!(backend.calls("reset_password"), 0);

        let rejected = submit_reset_password(&backend, "", "").await;
        assert_eq!(rejected.error_for(Field::Form), Some(RESET_FAILED));

        let ok = submit_reset_password(&backend, "new-secret", "new-secret").await;
        assert_eq!(ok.effects, vec![Effect::Navigate(Page::Login)]);
    }
}
