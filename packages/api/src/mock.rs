//! In-memory [`Backend`] for tests.
//!
//! Behaves like the real server for the flows the UI exercises: accounts,
//! projects with append-only records, detection, reports and the legacy
//! password endpoints. Every call is counted per endpoint ([`MockBackend::calls`])
//! and failures can be injected with [`MockBackend::fail_transport`] and
//! [`MockBackend::fail_detection`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use store::TokenStore;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{
    Credentials, DetectionRecord, DetectionRequest, DetectionResult, LoginSuccess, Project,
    RegisterRequest, UserInfo,
};

#[derive(Default)]
struct MockState {
    users: Vec<(UserInfo, String)>,
    admins: Vec<(String, String)>,
    projects: Vec<(Project, Vec<DetectionRecord>)>,
    reports: Vec<String>,
    issued_token: Option<String>,
    next_id: u32,
    calls: HashMap<&'static str, usize>,
    transport_down: bool,
    detection_error: Option<ApiError>,
    login_body: Option<String>,
}

#[derive(Clone)]
pub struct MockBackend {
    tokens: TokenStore,
    state: Rc<RefCell<MockState>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn status(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: Some(message.to_string()),
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            tokens: TokenStore::in_memory(),
            state: Rc::new(RefCell::new(MockState::default())),
        }
    }

    pub fn add_user(&self, name: &str, email: &str, password: &str) {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let user = UserInfo {
            id: format!("u{}", state.next_id),
            name: Some(name.to_string()),
            email: email.to_string(),
        };
        state.users.push((user, password.to_string()));
    }

    pub fn add_admin(&self, email: &str, password: &str) {
        self.state
            .borrow_mut()
            .admins
            .push((email.to_string(), password.to_string()));
    }

    /// Create a project directly, returning its id.
    pub fn add_project(&self, name: &str) -> String {
        let mut state = self.state.borrow_mut();
        state.next_id += 1;
        let project = Project {
            id: format!("p{}", state.next_id),
            name: name.to_string(),
        };
        let id = project.id.clone();
        state.projects.insert(0, (project, Vec::new()));
        id
    }

    pub fn add_record(&self, project_id: &str, record: DetectionRecord) {
        let mut state = self.state.borrow_mut();
        if let Some((_, records)) = state.projects.iter_mut().find(|(p, _)| p.id == project_id) {
            records.push(record);
        }
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().projects.iter().map(|(p, _)| p.clone()).collect()
    }

    pub fn reports(&self) -> Vec<String> {
        self.state.borrow().reports.clone()
    }

    /// Number of requests made to `endpoint` (the trait method name).
    pub fn calls(&self, endpoint: &str) -> usize {
        self.state.borrow().calls.get(endpoint).copied().unwrap_or(0)
    }

    /// Make every following request fail before reaching the server.
    pub fn fail_transport(&self, down: bool) {
        self.state.borrow_mut().transport_down = down;
    }

    /// Answer both login endpoints with this raw 2xx body, parsed like the
    /// HTTP client parses it.
    pub fn respond_to_login(&self, body: &str) {
        self.state.borrow_mut().login_body = Some(body.to_string());
    }

    /// Make `/madetect` answer with `error` until cleared with `None`.
    pub fn fail_detection(&self, error: Option<ApiError>) {
        self.state.borrow_mut().detection_error = error;
    }

    fn enter(&self, endpoint: &'static str) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        *state.calls.entry(endpoint).or_default() += 1;
        if state.transport_down {
            return Err(ApiError::Transport("connection refused".into()));
        }
        Ok(())
    }

    fn issue_token(&self, subject: &str) -> String {
        let token = format!("token-{subject}");
        self.state.borrow_mut().issued_token = Some(token.clone());
        token
    }
}

impl Backend for MockBackend {
    fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginSuccess, ApiError> {
        self.enter("login")?;
        if let Some(body) = self.state.borrow().login_body.clone() {
            return crate::http::parse_login(&body);
        }
        let user = self
            .state
            .borrow()
            .users
            .iter()
            .find(|(u, pw)| u.email == credentials.email && *pw == credentials.password)
            .map(|(u, _)| u.clone());
        let Some(user) = user else {
            return Err(status(401, "Wrong email or password"));
        };
        Ok(LoginSuccess {
            token: Some(self.issue_token(&user.id)),
            user: Some(user),
        })
    }

    async fn admin_login(&self, credentials: &Credentials) -> Result<LoginSuccess, ApiError> {
        self.enter("admin_login")?;
        if let Some(body) = self.state.borrow().login_body.clone() {
            return crate::http::parse_login(&body);
        }
        let known = self
            .state
            .borrow()
            .admins
            .iter()
            .any(|(email, pw)| *email == credentials.email && *pw == credentials.password);
        if !known {
            return Err(status(401, "Wrong email or password"));
        }
        Ok(LoginSuccess {
            token: Some(self.issue_token("admin")),
            user: Some(UserInfo {
                id: "admin".into(),
                name: None,
                email: credentials.email.clone(),
            }),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, ApiError> {
        self.enter("register")?;
        if self.state.borrow().users.iter().any(|(u, _)| u.email == request.email) {
            return Err(status(400, "Email already exists"));
        }
        self.add_user(&request.name, &request.email, &request.password);
        Ok(Some("Registration successful".into()))
    }

    async fn check_email(&self, email: &str) -> Result<bool, ApiError> {
        self.enter("check_email")?;
        Ok(self.state.borrow().users.iter().any(|(u, _)| u.email == email))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.enter("logout")?;
        self.state.borrow_mut().issued_token = None;
        Ok(())
    }

    async fn verify(&self) -> Result<bool, ApiError> {
        self.enter("verify")?;
        let state = self.state.borrow();
        match (&state.issued_token, self.tokens.get()) {
            (Some(issued), Some(held)) if *issued == held => Ok(true),
            _ => Err(ApiError::Status {
                status: 401,
                message: Some("Invalid or expired token".into()),
            }),
        }
    }

    async fn detect(&self, request: &DetectionRequest) -> Result<DetectionResult, ApiError> {
        self.enter("detect")?;
        if let Some(error) = self.state.borrow().detection_error.clone() {
            return Err(error);
        }
        if request.input_ad.trim().is_empty() {
            return Err(status(400, "Please provide the advertisement text"));
        }
        let result = DetectionResult {
            result_law: format!("Analysis: {}", request.input_ad),
            result_advice: format!("Revised: {}", request.input_ad),
        };
        self.add_record(&request.project_id, DetectionRecord::new(&request.input_ad, result.clone()));
        Ok(result)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.enter("list_projects")?;
        Ok(self.projects())
    }

    async fn create_project(&self, name: &str) -> Result<Option<Project>, ApiError> {
        self.enter("create_project")?;
        if name.trim().is_empty() {
            return Err(status(400, "Please enter a project name"));
        }
        let id = self.add_project(name.trim());
        Ok(self.projects().into_iter().find(|p| p.id == id))
    }

    async fn project_records(&self, project_id: &str) -> Result<Vec<DetectionRecord>, ApiError> {
        self.enter("project_records")?;
        self.state
            .borrow()
            .projects
            .iter()
            .find(|(p, _)| p.id == project_id)
            .map(|(_, records)| records.clone())
            .ok_or_else(|| status(404, "Project not found"))
    }

    async fn rename_project(&self, project_id: &str, name: &str) -> Result<(), ApiError> {
        self.enter("rename_project")?;
        let mut state = self.state.borrow_mut();
        let Some((project, _)) = state.projects.iter_mut().find(|(p, _)| p.id == project_id) else {
            return Err(status(404, "Project not found"));
        };
        project.name = name.to_string();
        Ok(())
    }

    async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        self.enter("delete_project")?;
        let mut state = self.state.borrow_mut();
        let before = state.projects.len();
        state.projects.retain(|(p, _)| p.id != project_id);
        if state.projects.len() == before {
            return Err(status(404, "Project not found"));
        }
        Ok(())
    }

    async fn submit_report(&self, report: &str) -> Result<(), ApiError> {
        self.enter("submit_report")?;
        if report.trim().is_empty() {
            return Err(status(400, "Please provide the report content"));
        }
        self.state.borrow_mut().reports.push(report.to_string());
        Ok(())
    }

    async fn forgot_password(&self, name: &str, email: &str) -> Result<bool, ApiError> {
        self.enter("forgot_password")?;
        Ok(self
            .state
            .borrow()
            .users
            .iter()
            .any(|(u, _)| u.email == email && u.name.as_deref() == Some(name)))
    }

    async fn reset_password(&self, password: &str) -> Result<(), ApiError> {
        self.enter("reset_password")?;
        if password.is_empty() {
            return Err(status(400, "Password required"));
        }
        Ok(())
    }
}
