//! Wire models for the MADetect REST API.

mod detection;
mod project;
mod user;

pub use detection::{DetectionRecord, DetectionRequest, DetectionResult};
pub use project::{Project, ProjectNameRequest};
pub use user::{Credentials, LoginSuccess, RegisterRequest, UserInfo};

use serde::Deserialize;

/// The `{success, message, ...}` wrapper every JSON endpoint answers with.
///
/// `success` is optional because a few endpoints (`check-email`, `verify`,
/// `forgetpsw_function`) omit it; a missing flag counts as success everywhere
/// except `/report`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

/// Body of endpoints whose only payload is the envelope itself.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Empty {}

#[derive(Debug, Deserialize)]
pub(crate) struct ExistsBody {
    #[serde(default)]
    pub exists: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidBody {
    #[serde(default)]
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectListBody {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectCreatedBody {
    #[serde(default)]
    pub project: Option<Project>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectDetailBody {
    #[serde(default)]
    pub records: Vec<DetectionRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginBody {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_success_flag() {
        let env: Envelope<ExistsBody> = serde_json::from_str(r#"{"exists": true}"#).unwrap();
        assert!(env.success.is_none());
        assert!(env.body.exists);
    }

    #[test]
    fn test_project_list_envelope() {
        let json = r#"{
            "success": true,
            "projects": [
                {"_id": "p2", "project_name": "Laser", "user_id": "u1", "created_at": "Mon, 01 Jan 2024 00:00:00 GMT"},
                {"_id": "p1", "project_name": "Acne"}
            ]
        }"#;
        let env: Envelope<ProjectListBody> = serde_json::from_str(json).unwrap();
        assert_eq!(env.success, Some(true));
        assert_eq!(env.body.projects.len(), 2);
        assert_eq!(env.body.projects[0].id, "p2");
        assert_eq!(env.body.projects[1].name, "Acne");
    }

    #[test]
    fn test_failed_envelope_keeps_message() {
        let json = r#"{"success": false, "message": "Project not found"}"#;
        let env: Envelope<ProjectDetailBody> = serde_json::from_str(json).unwrap();
        assert_eq!(env.success, Some(false));
        assert_eq!(env.message.as_deref(), Some("Project not found"));
        assert!(env.body.records.is_empty());
    }
}
