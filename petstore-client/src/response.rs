use http::{HeaderMap, StatusCode, header::CONTENT_TYPE};

use crate::ApiError;

/// A response as read off the wire.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// The media type of the body without parameters, lowercased.
    pub fn content_type(&self) -> Option<String> {
        let value = self.headers.get(CONTENT_TYPE)?.to_str().ok()?;
        let media_type = value.split(';').next().unwrap_or_default().trim();
        Some(media_type.to_ascii_lowercase())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turns a non-success response into [`ApiError::Status`].
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                body: self.text(),
                headers: self.headers,
            })
        }
    }
}

/// The decoded payload together with status, headers and the raw body.
#[derive(Debug, Clone)]
pub struct HttpInfo<T> {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub data: T,
    pub raw_data: Vec<u8>,
}

pub(crate) fn is_json_mime(media_type: &str) -> bool {
    media_type == "application/json"
        || (media_type.starts_with("application/") && media_type.ends_with("+json"))
}
