//! # API crate: REST client for the MADetect backend
//!
//! Everything the front end needs to talk to the backend lives here: the wire
//! models, the [`Backend`] trait with its HTTP implementation, the error type,
//! and the normalized authentication client.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | | Login / admin login / registration / email check / verify / logout, normalized to [`auth::AuthOutcome`] |
//! | [`backend`] | | The [`Backend`] trait, one method per endpoint |
//! | [`error`] | | [`ApiError`]: transport failure, HTTP status, application-level rejection |
//! | [`http`] | | [`HttpBackend`], the `reqwest` implementation with bearer auth and `credentials: include` |
//! | [`models`] | | Request and response bodies ([`Project`], [`DetectionRecord`], [`UserInfo`], …) |
//! | [`mock`] | `mock` (and this crate's tests) | [`mock::MockBackend`], an in-memory backend |
//!
//! ## Endpoints
//!
//! - **Authentication**: `/api/auth/login`, `/api/auth/admin/login`, `/api/auth/register`,
//!   `/api/auth/check-email`, `/api/auth/logout`, `/api/auth/verify`
//! - **Detection**: `/madetect`
//! - **Projects**: `/api/project/list`, `/api/project/create`, `/api/project/{id}` (GET / PUT / DELETE)
//! - **Misc**: `/report`, and the form-encoded `/forgetpsw_function` and `/reset_function`

pub mod auth;
pub mod backend;
pub mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;

pub use backend::Backend;
pub use error::ApiError;
pub use http::HttpBackend;
pub use models::{DetectionRecord, DetectionRequest, DetectionResult, Project, UserInfo};
