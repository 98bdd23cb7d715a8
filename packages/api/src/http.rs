//! # `HttpBackend`: the REST client
//!
//! Every call goes through [`HttpBackend::request`], the authenticated request
//! helper: it attaches `Authorization: Bearer <token>` when the token store
//! has one and, in the browser, sends cookies along (`credentials: include`).
//!
//! Responses are read as text and decoded in two steps:
//!
//! 1. A non-2xx status becomes [`ApiError::Status`], keeping the body's
//!    `message` if it was JSON.
//! 2. A 2xx body is parsed as an `Envelope<T>`; `success: false` becomes
//!    [`ApiError::Rejected`].

use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use store::TokenStore;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    Credentials, DetectionRecord, DetectionRequest, DetectionResult, Empty, Envelope, ExistsBody,
    LoginBody, LoginSuccess, Project, ProjectCreatedBody, ProjectDetailBody, ProjectListBody,
    ProjectNameRequest, RegisterRequest, ValidBody,
};

/// REST client bound to one backend origin.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl HttpBackend {
    /// `base_url` is an absolute origin such as `https://madetect.example`.
    pub fn new(base_url: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// `/api/project/{id}` with the id percent-encoded as one path segment.
    pub(crate) fn project_url(&self, project_id: &str) -> Result<Url, ApiError> {
        let mut url = self.url("/api/project")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(project_id);
        Ok(url)
    }

    /// Authenticated request builder.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some(token) = self.tokens.get() {
            builder = builder.bearer_auth(token);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Envelope<T>, ApiError> {
        let response = builder.send().await?;
        read_envelope(response).await
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>, ApiError> {
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&text),
        });
    }
    parse_envelope(&text)
}

/// `message` field of an error body, if it is JSON at all.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Envelope<Empty>>(body)
        .ok()
        .and_then(|env| env.message)
}

pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Envelope<T>, ApiError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if envelope.success == Some(false) {
        return Err(ApiError::Rejected {
            message: envelope.message,
        });
    }
    Ok(envelope)
}

/// For endpoints that must answer `success: true` explicitly.
fn confirmed<T>(env: Envelope<T>) -> Result<Envelope<T>, ApiError> {
    match env.success {
        Some(true) => Ok(env),
        _ => Err(ApiError::Rejected { message: env.message }),
    }
}

fn login_success(env: Envelope<LoginBody>) -> LoginSuccess {
    LoginSuccess {
        token: env.body.token,
        user: env.body.user,
    }
}

/// Read a 2xx login body the way [`HttpBackend`] does.
#[cfg(any(test, feature = "mock"))]
pub(crate) fn parse_login(body: &str) -> Result<LoginSuccess, ApiError> {
    parse_envelope(body).map(login_success)
}

impl Backend for HttpBackend {
    fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginSuccess, ApiError> {
        let url = self.url("/api/auth/login")?;
        let env: Envelope<LoginBody> = self.send(self.request(Method::POST, url).json(credentials)).await?;
        Ok(login_success(env))
    }

    async fn admin_login(&self, credentials: &Credentials) -> Result<LoginSuccess, ApiError> {
        let url = self.url("/api/auth/admin/login")?;
        let env: Envelope<LoginBody> = self.send(self.request(Method::POST, url).json(credentials)).await?;
        Ok(login_success(env))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
        let url = self.url("/api/auth/register")?;
        let env: Envelope<Empty> = self.send(self.request(Method::POST, url).json(request)).await?;
        Ok(env.message)
    }

    async fn check_email(&self, email: &str) -> Result<bool, ApiError> {
        let url = self.url("/api/auth/check-email")?;
        let body = serde_json::json!({ "email": email });
        let env: Envelope<ExistsBody> = self.send(self.request(Method::POST, url).json(&body)).await?;
        Ok(env.body.exists)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let url = self.url("/api/auth/logout")?;
        let response = self.request(Method::POST, url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status().as_u16(),
                message: None,
            });
        }
        Ok(())
    }

    async fn verify(&self) -> Result<bool, ApiError> {
        let url = self.url("/api/auth/verify")?;
        let env: Envelope<ValidBody> = self.send(self.request(Method::GET, url)).await?;
        Ok(env.body.valid)
    }

    async fn detect(&self, request: &DetectionRequest) -> Result<DetectionResult, ApiError> {
        let url = self.url("/madetect")?;
        let env: Envelope<DetectionResult> = self.send(self.request(Method::POST, url).json(request)).await?;
        Ok(env.body)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let url = self.url("/api/project/list")?;
        let env: Envelope<ProjectListBody> = self.send(self.request(Method::GET, url)).await?;
        Ok(env.body.projects)
    }

    async fn create_project(&self, name: &str) -> Result<Option<Project>, ApiError> {
        let url = self.url("/api/project/create")?;
        let body = ProjectNameRequest {
            project_name: name.to_string(),
        };
        let env: Envelope<ProjectCreatedBody> = self.send(self.request(Method::POST, url).json(&body)).await?;
        Ok(env.body.project)
    }

    async fn project_records(&self, project_id: &str) -> Result<Vec<DetectionRecord>, ApiError> {
        let url = self.project_url(project_id)?;
        let env: Envelope<ProjectDetailBody> = self.send(self.request(Method::GET, url)).await?;
        Ok(env.body.records)
    }

    async fn rename_project(&self, project_id: &str, name: &str) -> Result<(), ApiError> {
        let url = self.project_url(project_id)?;
        let body = ProjectNameRequest {
            project_name: name.to_string(),
        };
        let _: Envelope<Empty> = self.send(self.request(Method::PUT, url).json(&body)).await?;
        Ok(())
    }

    async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        let url = self.project_url(project_id)?;
        let _: Envelope<Empty> = self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn submit_report(&self, report: &str) -> Result<(), ApiError> {
        let url = self.url("/report")?;
        let body = serde_json::json!({ "report": report });
        let env: Envelope<Empty> = self.send(self.request(Method::POST, url).json(&body)).await?;
        confirmed(env)?;
        Ok(())
    }

    async fn forgot_password(&self, name: &str, email: &str) -> Result<bool, ApiError> {
        let url = self.url("/forgetpsw_function")?;
        let form = [("user_name", name), ("user_email", email)];
        let env: Envelope<ExistsBody> = self.send(self.client.post(url).form(&form)).await?;
        Ok(env.body.exists)
    }

    async fn reset_password(&self, password: &str) -> Result<(), ApiError> {
        let url = self.url("/reset_function")?;
        let form = [("user_password", password)];
        let response = self.client.post(url).form(&form).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&text),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> HttpBackend {
        HttpBackend::new("https://madetect.example/", TokenStore::in_memory())
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let url = backend().url("/api/project/list").unwrap();
        assert_eq!(url.as_str(), "https://madetect.example/api/project/list");
    }

    #[test]
    fn test_project_url_encodes_id() {
        let url = backend().project_url("a b/c").unwrap();
        assert_eq!(url.as_str(), "https://madetect.example/api/project/a%20b%2Fc");
    }

    #[test]
    fn test_relative_base_is_invalid() {
        let backend = HttpBackend::new("", TokenStore::in_memory());
        assert!(matches!(backend.url("/madetect"), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_envelope_rejected() {
        let err = parse_envelope::<ProjectListBody>(r#"{"success": false, "message": "nope"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: Some("nope".into())
            }
        );
    }

    #[test]
    fn test_parse_envelope_garbage() {
        let err = parse_envelope::<ProjectListBody>("<html>502</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_error_message_only_from_json() {
        assert_eq!(error_message(r#"{"message": "Quota exceeded"}"#).as_deref(), Some("Quota exceeded"));
        assert_eq!(error_message("Internal Server Error"), None);
    }

    #[test]
    fn test_report_needs_explicit_success() {
        let ok = parse_envelope::<Empty>(r#"{"success": true}"#).unwrap();
        assert!(confirmed(ok).is_ok());

        let silent = parse_envelope::<Empty>(r#"{"message": "queued"}"#).unwrap();
        assert_eq!(
            confirmed(silent).unwrap_err(),
            ApiError::Rejected {
                message: Some("queued".into())
            }
        );
    }

    #[test]
    fn test_login_body_with_success_false() {
        let err = parse_login(r#"{"success": false, "message": "Account locked"}"#).unwrap_err();
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.server_message(), Some("Account locked"));

        let ok = parse_login(r#"{"success": true, "token": "t1", "user": {"email": "a@b.com"}}"#).unwrap();
        assert_eq!(ok.token.as_deref(), Some("t1"));
        assert_eq!(ok.user.map(|u| u.email).as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_detection_result_body() {
        let env = parse_envelope::<DetectionResult>(
            r#"{"success": true, "result_law": "Violates Art. 86", "result_advice": "Remove 'cure'"}"#,
        )
        .unwrap();
        assert_eq!(env.body.result_law, "Violates Art. 86");
        assert_eq!(env.body.result_advice, "Remove 'cure'");
    }
}
