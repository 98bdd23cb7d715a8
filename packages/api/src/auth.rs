//! Normalized authentication client.
//!
//! Wraps the auth endpoints of a [`Backend`] so callers only ever see an
//! [`AuthOutcome`]: transport failures, error statuses and `success: false`
//! bodies all collapse into [`AuthOutcome::Failed`] with a displayable message.

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{Credentials, RegisterRequest, UserInfo};

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_ERROR: &str = "An error occurred while logging in";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const REGISTER_ERROR: &str = "An error occurred while registering";

/// Result of a login or registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    LoggedIn(Option<UserInfo>),
    Registered(Option<String>),
    Failed(String),
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Message to show for a failure.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

fn failure(error: &ApiError, rejected: &str, transport: &str) -> AuthOutcome {
    match error.server_message() {
        Some(message) => AuthOutcome::Failed(message.to_string()),
        None if error.status().is_some() => AuthOutcome::Failed(rejected.to_string()),
        None => AuthOutcome::Failed(transport.to_string()),
    }
}

async fn login_with<B: Backend>(backend: &B, credentials: Credentials, admin: bool) -> AuthOutcome {
    let result = if admin {
        backend.admin_login(&credentials).await
    } else {
        backend.login(&credentials).await
    };
    match result {
        Ok(success) => {
            if let Some(token) = success.token.as_deref() {
                backend.tokens().save(token);
            }
            tracing::info!("Logged in as {}", credentials.email);
            AuthOutcome::LoggedIn(success.user)
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            failure(&e, LOGIN_FAILED, LOGIN_ERROR)
        }
    }
}

/// Log in a regular user and persist the issued token.
pub async fn login<B: Backend>(backend: &B, email: &str, password: &str) -> AuthOutcome {
    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    login_with(backend, credentials, false).await
}

/// Log in an administrator and persist the issued token.
pub async fn admin_login<B: Backend>(backend: &B, email: &str, password: &str) -> AuthOutcome {
    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    login_with(backend, credentials, true).await
}

/// Create an account. Does not log the new user in.
pub async fn register<B: Backend>(backend: &B, name: &str, email: &str, password: &str) -> AuthOutcome {
    let request = RegisterRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };
    match backend.register(&request).await {
        Ok(message) => AuthOutcome::Registered(message),
        Err(e) => {
            tracing::warn!("Registration failed: {e}");
            failure(&e, REGISTER_FAILED, REGISTER_ERROR)
        }
    }
}

/// Whether an account already uses `email`. Any failure reads as "no".
pub async fn check_email<B: Backend>(backend: &B, email: &str) -> bool {
    match backend.check_email(email).await {
        Ok(exists) => exists,
        Err(e) => {
            tracing::warn!("Email check failed: {e}");
            false
        }
    }
}

/// Whether the stored token is still accepted. No token means no request.
pub async fn verify<B: Backend>(backend: &B) -> bool {
    if backend.tokens().get().is_none() {
        return false;
    }
    match backend.verify().await {
        Ok(valid) => valid,
        Err(e) => {
            tracing::warn!("Token verification failed: {e}");
            false
        }
    }
}

/// Best-effort server logout followed by an unconditional local token wipe.
pub async fn logout<B: Backend>(backend: &B) {
    if let Err(e) = backend.logout().await {
        tracing::warn!("Logout request failed: {e}");
    }
    backend.tokens().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBackend;

    #[tokio::test]
    async fn test_login_saves_token() {
        let backend = MockBackend::new();
        backend.add_user("Alice", "a@b.com", "secret");

        let outcome = login(&backend, "a@b.com", "secret").await;
        assert!(matches!(outcome, AuthOutcome::LoggedIn(Some(ref u)) if u.email == "a@b.com"));
        assert!(backend.tokens().get().is_some());
    }

    #[tokio::test]
    async fn test_login_failure_keeps_server_message() {
        let backend = MockBackend::new();
        let outcome = login(&backend, "a@b.com", "wrong").await;
        assert_eq!(outcome, AuthOutcome::Failed("Wrong email or password".into()));
        assert!(backend.tokens().get().is_none());
    }

    #[tokio::test]
    async fn test_login_rejected_in_ok_body() {
        let backend = MockBackend::new();
        backend.respond_to_login(r#"{"success": false, "message": "Account locked"}"#);
        let outcome = login(&backend, "a@b.com", "secret").await;
        assert_eq!(outcome, AuthOutcome::Failed("Account locked".into()));
        assert!(backend.tokens().get().is_none());

        backend.respond_to_login(r#"{"success": false}"#);
        let outcome = login(&backend, "a@b.com", "secret").await;
        assert_eq!(outcome.failure_message(), Some(LOGIN_FAILED));
    }

    #[tokio::test]
    async fn test_transport_failure_is_generic() {
        let backend = MockBackend::new();
        backend.fail_transport(true);
        let outcome = login(&backend, "a@b.com", "secret").await;
        assert_eq!(outcome.failure_message(), Some(LOGIN_ERROR));
    }

    #[tokio::test]
    async fn test_admin_login_uses_admin_accounts() {
        let backend = MockBackend::new();
        backend.add_user("Alice", "a@b.com", "secret");
        assert!(!admin_login(&backend, "a@b.com", "secret").await.is_success());

        backend.add_admin("root@b.com", "toor");
        assert!(admin_login(&backend, "root@b.com", "toor").await.is_success());
    }

    #[tokio::test]
    async fn test_register_then_check_email() {
        let backend = MockBackend::new();
        assert!(!check_email(&backend, "new@b.com").await);

        let outcome = register(&backend, "New", "new@b.com", "pw").await;
        assert!(matches!(outcome, AuthOutcome::Registered(_)));
        assert!(check_email(&backend, "new@b.com").await);

        let again = register(&backend, "New", "new@b.com", "pw").await;
        assert_eq!(again.failure_message(), Some("Email already exists"));
    }

    #[tokio::test]
    async fn test_verify_without_token_skips_network() {
        let backend = MockBackend::new();
        assert!(!verify(&backend).await);
        assert_eq!(backend.calls("verify"), 0);

        backend.add_user("Alice", "a@b.com", "secret");
        login(&backend, "a@b.com", "secret").await;
        assert!(verify(&backend).await);
        assert_eq!(backend.calls("verify"), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_token_even_when_server_fails() {
        let backend = MockBackend::new();
        backend.add_user("Alice", "a@b.com", "secret");
        login(&backend, "a@b.com", "secret").await;

        backend.fail_transport(true);
        logout(&backend).await;
        assert!(backend.tokens().get().is_none());
        assert_eq!(backend.calls("logout"), 1);
    }
}
