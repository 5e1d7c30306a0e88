//! Request description and the serialized form handed to the transport.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use http::{HeaderMap, Method};
use serde::Serialize;
use url::Url;

use crate::{ApiError, auth::AuthSetting, configuration::header_pair};

/// How an array valued query parameter is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionFormat {
    /// `?tags=a&tags=b`
    Multi,
    /// `?tags=a,b`
    Csv,
    /// `?tags=a b`
    Ssv,
    /// `?tags=a\tb`
    Tsv,
    /// `?tags=a|b`
    Pipes,
}

impl CollectionFormat {
    fn separator(&self) -> Option<&'static str> {
        match self {
            CollectionFormat::Multi => None,
            CollectionFormat::Csv => Some(","),
            CollectionFormat::Ssv => Some(" "),
            CollectionFormat::Tsv => Some("\t"),
            CollectionFormat::Pipes => Some("|"),
        }
    }
}

/// A file to upload, either read from disk or already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileParam {
    Path(PathBuf),
    Bytes { file_name: String, content: Vec<u8> },
}

impl FileParam {
    pub fn bytes(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        FileParam::Bytes {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reads the file if necessary and returns its name and content.
    pub fn load(&self) -> Result<(String, Vec<u8>), ApiError> {
        match self {
            FileParam::Path(path) => {
                let content = std::fs::read(path).map_err(|source| ApiError::File {
                    path: path.clone(),
                    source,
                })?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Ok((file_name, content))
            }
            FileParam::Bytes { file_name, content } => Ok((file_name.clone(), content.clone())),
        }
    }
}

impl From<PathBuf> for FileParam {
    fn from(path: PathBuf) -> Self {
        FileParam::Path(path)
    }
}

impl From<&Path> for FileParam {
    fn from(path: &Path) -> Self {
        FileParam::Path(path.to_path_buf())
    }
}

impl<N: Into<String>> From<(N, Vec<u8>)> for FileParam {
    fn from((file_name, content): (N, Vec<u8>)) -> Self {
        FileParam::bytes(file_name, content)
    }
}

/// Guesses a MIME type from a file name, falling back to `application/octet-stream`.
pub fn guess_content_type(file_name: &str) -> String {
    mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        content: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            FormPart::Text { value, .. } => Some(value),
            FormPart::File { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` pairs
    Form(Vec<(String, String)>),
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    /// Looks up a multipart part by field name.
    pub fn part(&self, name: &str) -> Option<&FormPart> {
        match self {
            RequestBody::Multipart(parts) => parts.iter().find(|p| p.name() == name),
            _ => None,
        }
    }

    /// Looks up a url-encoded form field by name.
    pub fn form_value(&self, name: &str) -> Option<&str> {
        match self {
            RequestBody::Form(pairs) => pairs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

/// Per-call adjustments on top of what an operation generates.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Sent as given; a caller supplied `Accept` or `Content-Type` wins over
    /// the operation's choice.
    pub headers: HeaderMap,
    /// Forces the `Content-Type` of the request body.
    pub content_type: Option<String>,
    /// Picks a server from [`crate::Configuration::servers`] for this call.
    pub host_index: Option<usize>,
    /// Replaces the operation's security schemes with this credential.
    pub request_auth: Option<AuthSetting>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let (name, value) = header_pair(name, value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_host_index(mut self, index: usize) -> Self {
        self.host_index = Some(index);
        self
    }

    pub fn with_request_auth(mut self, auth: AuthSetting) -> Self {
        self.request_auth = Some(auth);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// An operation's request, not yet bound to a host or configuration.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub(crate) method: Method,
    pub(crate) path: &'static str,
    pub(crate) path_params: Vec<(&'static str, String)>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) header_params: Vec<(String, String)>,
    pub(crate) body: RequestBody,
    pub(crate) accepts: &'static [&'static str],
    pub(crate) content_types: &'static [&'static str],
    pub(crate) auth: &'static [&'static str],
}

impl RequestSpec {
    pub fn new(method: Method, path: &'static str) -> Self {
        RequestSpec {
            method,
            path,
            path_params: Vec::new(),
            query_params: Vec::new(),
            header_params: Vec::new(),
            body: RequestBody::Empty,
            accepts: &[],
            content_types: &[],
            auth: &[],
        }
    }

    /// Fills the `{name}` segment of the path template.
    pub fn path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    pub fn query_param(mut self, name: &str, value: impl ToString) -> Self {
        self.query_params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn query_collection<I>(mut self, name: &str, values: I, format: CollectionFormat) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let values = values.into_iter().map(|v| v.to_string());
        match format.separator() {
            None => self
                .query_params
                .extend(values.map(|v| (name.to_string(), v))),
            Some(sep) => self
                .query_params
                .push((name.to_string(), values.collect::<Vec<_>>().join(sep))),
        }
        self
    }

    pub fn header_param(mut self, name: &str, value: impl ToString) -> Self {
        self.header_params
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn form_param(mut self, name: &str, value: impl ToString) -> Self {
        let pair = (name.to_string(), value.to_string());
        match &mut self.body {
            RequestBody::Form(pairs) => pairs.push(pair),
            body => *body = RequestBody::Form(vec![pair]),
        }
        self
    }

    fn push_part(&mut self, part: FormPart) {
        match &mut self.body {
            RequestBody::Multipart(parts) => parts.push(part),
            body => *body = RequestBody::Multipart(vec![part]),
        }
    }

    pub fn multipart_text(mut self, name: &str, value: impl ToString) -> Self {
        self.push_part(FormPart::Text {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Adds a model as a text part holding its JSON representation.
    pub fn multipart_json<T: Serialize>(mut self, name: &str, value: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_string(value)?;
        self.push_part(FormPart::Text {
            name: name.to_string(),
            value,
        });
        Ok(self)
    }

    pub fn multipart_file(mut self, name: &str, file: &FileParam) -> Result<Self, ApiError> {
        let (file_name, content) = file.load()?;
        self.push_part(FormPart::File {
            name: name.to_string(),
            content_type: guess_content_type(&file_name),
            file_name,
            content,
        });
        Ok(self)
    }

    /// Media types the operation can answer with, in order of preference.
    pub fn accepts(mut self, accepts: &'static [&'static str]) -> Self {
        self.accepts = accepts;
        self
    }

    /// Media types the operation accepts as request body.
    pub fn content_types(mut self, content_types: &'static [&'static str]) -> Self {
        self.content_types = content_types;
        self
    }

    /// Security schemes the operation may be authorized with.
    pub fn auth(mut self, auth: &'static [&'static str]) -> Self {
        self.auth = auth;
        self
    }
}

/// A fully built request: everything the transport needs, nothing more.
#[derive(Debug, Clone)]
pub struct SerializedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: RequestBody,
    pub timeout: Option<Duration>,
}

/// Joins `host` and the path template, replacing `{name}` segments with
/// their percent-encoded values.
pub(crate) fn build_url(
    host: &str,
    template: &str,
    params: &[(&'static str, String)],
) -> Result<Url, ApiError> {
    let mut url = Url::parse(host)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ApiError::NotABaseUrl(host.to_string()))?;
        segments.pop_if_empty();
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            let value = segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .and_then(|name| params.iter().find(|(n, _)| *n == name))
                .map(|(_, value)| value.as_str())
                .unwrap_or(segment);
            segments.push(value);
        }
    }
    Ok(url)
}
