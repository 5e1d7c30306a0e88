use std::path::PathBuf;

use http::{HeaderMap, StatusCode};

/// Errors produced while serializing, sending or decoding an API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("({status})\nReason: {}\nHTTP response body: {body}", .status.canonical_reason().unwrap_or("unknown"))]
    Status {
        status: StatusCode,
        headers: HeaderMap,
        body: String,
    },
    /// The request never produced a response (connection refused, proxy
    /// unreachable, timeout, TLS failure, ...).
    #[error("request could not be completed")]
    Transport(#[from] reqwest::Error),
    #[error("failed to (de)serialize JSON payload")]
    Json(#[from] serde_json::Error),
    #[error("invalid header '{name}'")]
    InvalidHeader { name: String },
    #[error("invalid URL")]
    InvalidUrl(#[from] url::ParseError),
    #[error("URL '{0}' cannot carry a path")]
    NotABaseUrl(String),
    #[error("invalid host setting: {0}")]
    HostSetting(String),
    #[error("could not read upload file {path:?}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unsupported content type '{0}'")]
    UnsupportedContentType(String),
}

/// Coarse classification of [`ApiError::Status`] errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    UnprocessableEntity,
    Service,
    Other,
}

impl From<StatusCode> for StatusKind {
    fn from(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => StatusKind::BadRequest,
            401 => StatusKind::Unauthorized,
            403 => StatusKind::Forbidden,
            404 => StatusKind::NotFound,
            409 => StatusKind::Conflict,
            422 => StatusKind::UnprocessableEntity,
            500..=599 => StatusKind::Service,
            _ => StatusKind::Other,
        }
    }
}

impl ApiError {
    /// The HTTP status, if the server responded at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// The response body of a non-success response.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status().map(StatusKind::from)
    }

    /// True if the request failed while connecting, either to the target
    /// host or to the configured proxy.
    pub fn is_connect(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_connect())
    }

    /// True if the request or the response body exceeded a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(e) if e.is_timeout())
    }

    pub fn is_not_found(&self) -> bool {
        self.status_kind() == Some(StatusKind::NotFound)
    }
}
