//! # Account models
//!
//! [`UserInfo`] is the `user` object the login endpoints return:
//!
//! ```json
//! {"id": "65f…", "name": "Alice", "email": "alice@example.com"}
//! ```
//!
//! The remaining types are request bodies ([`Credentials`],
//! [`RegisterRequest`]) and the client-side result of a successful login
//! ([`LoginSuccess`]).

use serde::{Deserialize, Serialize};

/// User information returned by the backend after login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UserInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
}

/// Body of `POST /api/auth/login` and `POST /api/auth/admin/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A login the backend accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_tolerates_missing_fields() {
        let user: UserInfo = serde_json::from_str(r#"{"email": "a@b.com"}"#).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.name, None);
        assert!(user.id.is_empty());
    }
}
