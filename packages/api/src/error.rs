//! Error taxonomy of the REST layer.

use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// The three cases the UI distinguishes are a failed transport
/// ([`ApiError::Transport`]), an HTTP error status ([`ApiError::Status`]) and an
/// application-level refusal in a 2xx body ([`ApiError::Rejected`]).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("{}", .message.as_deref().unwrap_or("request rejected"))]
    Rejected { message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status carried by the error. Application-level rejections arrive
    /// with a 2xx status and report `200`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Rejected { .. } => Some(200),
            _ => None,
        }
    }

    /// The backend's own `message` field, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => {
                message.as_deref().filter(|m| !m.trim().is_empty())
            }
            _ => None,
        }
    }

    /// True when the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
