use store::TokenStore;

use crate::error::ApiError;
use crate::models::{
    Credentials, DetectionRecord, DetectionRequest, DetectionResult, LoginSuccess, Project,
    RegisterRequest,
};

/// One method per backend endpoint the client consumes.
///
/// Implemented over HTTP by [`crate::HttpBackend`]; the `mock` feature adds an
/// in-memory implementation for tests. Futures are not `Send`: everything runs
/// on the browser's single event loop.
pub trait Backend {
    /// Token store the backend authenticates requests with.
    fn tokens(&self) -> &TokenStore;

    /// `POST /api/auth/login`
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<LoginSuccess, ApiError>>;

    /// `POST /api/auth/admin/login`
    fn admin_login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<LoginSuccess, ApiError>>;

    /// `POST /api/auth/register`, yielding the backend's confirmation message.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl std::future::Future<Output = Result<Option<String>, ApiError>>;

    /// `POST /api/auth/check-email`
    fn check_email(&self, email: &str) -> impl std::future::Future<Output = Result<bool, ApiError>>;

    /// `POST /api/auth/logout`
    fn logout(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `GET /api/auth/verify`
    fn verify(&self) -> impl std::future::Future<Output = Result<bool, ApiError>>;

    /// `POST /madetect`
    fn detect(
        &self,
        request: &DetectionRequest,
    ) -> impl std::future::Future<Output = Result<DetectionResult, ApiError>>;

    /// `GET /api/project/list`
    fn list_projects(&self) -> impl std::future::Future<Output = Result<Vec<Project>, ApiError>>;

    /// `POST /api/project/create`
    fn create_project(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Option<Project>, ApiError>>;

    /// `GET /api/project/{id}`
    fn project_records(
        &self,
        project_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<DetectionRecord>, ApiError>>;

    /// `PUT /api/project/{id}`
    fn rename_project(
        &self,
        project_id: &str,
        name: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `DELETE /api/project/{id}`
    fn delete_project(&self, project_id: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `POST /report`
    fn submit_report(&self, report: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// `POST /forgetpsw_function` (form-encoded legacy endpoint)
    fn forgot_password(
        &self,
        name: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<bool, ApiError>>;

    /// `POST /reset_function` (form-encoded legacy endpoint; status only)
    fn reset_password(&self, password: &str) -> impl std::future::Future<Output = Result<(), ApiError>>;
}
