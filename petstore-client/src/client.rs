//! The blocking transport shared by all API groups.

use std::sync::{Arc, Mutex};

use http::{
    HeaderMap, HeaderValue,
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
};
use lazy_static::lazy_static;
use serde::de::DeserializeOwned;

use crate::{
    ApiError, Configuration,
    auth::{AuthLocation, AuthSetting},
    configuration::header_pair,
    request::{FormPart, RequestBody, RequestOptions, RequestSpec, SerializedRequest, build_url},
    response::{HttpInfo, RawResponse, is_json_mime},
};

lazy_static! {
    static ref DEFAULT_CLIENT: Mutex<Option<Arc<ApiClient>>> = Mutex::new(None);
}

/// Serializes requests, sends them with a blocking `reqwest` client and
/// decodes the responses.
#[derive(Debug)]
pub struct ApiClient {
    configuration: Arc<Configuration>,
    http: reqwest::blocking::Client,
    default_headers: HeaderMap,
}

impl ApiClient {
    pub fn new(configuration: impl Into<Arc<Configuration>>) -> Result<Self, ApiError> {
        let configuration = configuration.into();

        let mut builder = reqwest::blocking::Client::builder();
        if !configuration.system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(proxy) = &configuration.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }
        if let Some(timeout) = configuration.timeout {
            builder = builder.timeout(timeout);
        }
        if !configuration.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }
        builder = builder.redirect(reqwest::redirect::Policy::none());
        let http = builder.build()?;

        let mut default_headers = configuration.default_headers.clone();
        if !default_headers.contains_key(USER_AGENT) {
            let (name, value) = header_pair(USER_AGENT.as_str(), &configuration.user_agent)?;
            default_headers.insert(name, value);
        }

        Ok(ApiClient {
            configuration,
            http,
            default_headers,
        })
    }

    /// The process-wide default client, built from
    /// [`Configuration::get_default`] on first use. Every call returns the
    /// same instance until [`ApiClient::set_default`] replaces it.
    pub fn get_default() -> Result<Arc<ApiClient>, ApiError> {
        let mut guard = DEFAULT_CLIENT
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(client) = guard.as_ref() {
            return Ok(client.clone());
        }
        let client = Arc::new(ApiClient::new(Configuration::get_default())?);
        *guard = Some(client.clone());
        Ok(client)
    }

    pub fn set_default(client: Option<Arc<ApiClient>>) {
        let mut guard = DEFAULT_CLIENT
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = client;
    }

    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.configuration
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn set_default_header(&mut self, name: &str, value: &str) -> Result<(), ApiError> {
        let (name, value) = header_pair(name, value)?;
        self.default_headers.insert(name, value);
        Ok(())
    }

    /// Picks the `Accept` value from the media types an operation produces.
    pub fn select_header_accept(accepts: &[&str]) -> Option<String> {
        select_preferring_json(accepts)
    }

    /// Picks the `Content-Type` value from the media types an operation consumes.
    pub fn select_header_content_type(content_types: &[&str]) -> Option<String> {
        select_preferring_json(content_types)
    }

    /// Builds the request for `spec` without sending it.
    pub fn param_serialize(
        &self,
        spec: RequestSpec,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        let config = &self.configuration;
        // an explicit host wins; no operation declares servers of its own
        let host = match (&config.host, options.host_index) {
            (None, Some(index)) => config.host_from_settings(index, &config.server_variables)?,
            _ => config.host()?,
        };
        let mut url = build_url(&host, spec.path, &spec.path_params)?;

        let mut headers = options.headers.clone();
        for (name, value) in &spec.header_params {
            let (name, value) = header_pair(name, value)?;
            headers.insert(name, value);
        }

        if !headers.contains_key(ACCEPT) {
            if let Some(accept) = Self::select_header_accept(spec.accepts) {
                headers.insert(ACCEPT, header_value(ACCEPT.as_str(), &accept)?);
            }
        }

        let content_type = match &options.content_type {
            Some(content_type) => Some(content_type.clone()),
            None if headers.contains_key(CONTENT_TYPE) => None,
            None => Self::select_header_content_type(spec.content_types),
        };
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, header_value(CONTENT_TYPE.as_str(), &content_type)?);
        }

        let mut query = spec.query_params;
        let auth_settings = match &options.request_auth {
            Some(setting) => vec![setting.clone()],
            None => spec
                .auth
                .iter()
                .filter_map(|scheme| config.auth_setting(scheme))
                .collect(),
        };
        for setting in &auth_settings {
            apply_auth(setting, &mut headers, &mut query)?;
        }

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        for (name, value) in &self.default_headers {
            if !headers.contains_key(name) {
                headers.insert(name.clone(), value.clone());
            }
        }

        Ok(SerializedRequest {
            method: spec.method,
            url,
            headers,
            body: spec.body,
            timeout: options.timeout,
        })
    }

    /// Sends a serialized request and reads the whole response.
    pub fn call_api(&self, request: SerializedRequest) -> Result<RawResponse, ApiError> {
        let SerializedRequest {
            method,
            url,
            mut headers,
            body,
            timeout,
        } = request;

        log::debug!("{method} {url}");
        log::trace!("request headers: {headers:?}");

        let mut builder = self.http.request(method.clone(), url.clone());
        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => {
                log::trace!("request body: {value}");
                builder.body(serde_json::to_vec(&value)?)
            }
            RequestBody::Form(pairs) => {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs.iter())
                    .finish();
                log::trace!("request body: {encoded}");
                builder.body(encoded)
            }
            RequestBody::Multipart(parts) => {
                // the transport writes its own header carrying the boundary
                headers.remove(CONTENT_TYPE);
                builder.multipart(multipart_form(parts)?)
            }
        };
        builder = builder.headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().map_err(|e| {
            log::debug!("{method} {url} failed: {e}");
            e
        })?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes()?.to_vec();
        log::debug!("{method} {url} -> {status} ({} bytes)", body.len());

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }

    /// Decodes a response carrying a body.
    pub fn response_deserialize<T: DeserializeOwned>(
        &self,
        raw: RawResponse,
    ) -> Result<HttpInfo<T>, ApiError> {
        let raw = raw.error_for_status()?;
        let data = match raw.content_type() {
            None => serde_json::from_slice(&raw.body)?,
            Some(media_type) if is_json_mime(&media_type) => serde_json::from_slice(&raw.body)?,
            Some(media_type) if media_type.starts_with("text/") => {
                serde_json::from_value(serde_json::Value::String(raw.text()))?
            }
            Some(media_type) => return Err(ApiError::UnsupportedContentType(media_type)),
        };
        Ok(HttpInfo {
            status_code: raw.status,
            headers: raw.headers,
            data,
            raw_data: raw.body,
        })
    }

    /// Checks the status of a response whose body is not interpreted.
    pub fn response_deserialize_empty(&self, raw: RawResponse) -> Result<HttpInfo<()>, ApiError> {
        let raw = raw.error_for_status()?;
        Ok(HttpInfo {
            status_code: raw.status,
            headers: raw.headers,
            data: (),
            raw_data: raw.body,
        })
    }

    pub(crate) fn execute<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        options: &RequestOptions,
    ) -> Result<HttpInfo<T>, ApiError> {
        let request = self.param_serialize(spec, options)?;
        let raw = self.call_api(request)?;
        self.response_deserialize(raw)
    }

    pub(crate) fn execute_empty(
        &self,
        spec: RequestSpec,
        options: &RequestOptions,
    ) -> Result<HttpInfo<()>, ApiError> {
        let request = self.param_serialize(spec, options)?;
        let raw = self.call_api(request)?;
        self.response_deserialize_empty(raw)
    }
}

fn select_preferring_json(media_types: &[&str]) -> Option<String> {
    media_types
        .iter()
        .find(|m| {
            let media_type = m.split(';').next().unwrap_or_default().trim();
            is_json_mime(&media_type.to_ascii_lowercase())
        })
        .or_else(|| media_types.first())
        .map(|m| m.to_string())
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ApiError> {
    HeaderValue::try_from(value).map_err(|_| ApiError::InvalidHeader {
        name: name.to_string(),
    })
}

fn apply_auth(
    setting: &AuthSetting,
    headers: &mut HeaderMap,
    query: &mut Vec<(String, String)>,
) -> Result<(), ApiError> {
    match setting.location {
        AuthLocation::Header => {
            let (name, value) = header_pair(&setting.key, &setting.value)?;
            headers.insert(name, value);
        }
        AuthLocation::Query => query.push((setting.key.clone(), setting.value.clone())),
        AuthLocation::Cookie => {
            let cookie = format!("{}={}", setting.key, setting.value);
            headers.append(http::header::COOKIE, header_value("Cookie", &cookie)?);
        }
    }
    Ok(())
}

fn multipart_form(parts: Vec<FormPart>) -> Result<reqwest::blocking::multipart::Form, ApiError> {
    use reqwest::blocking::multipart::{Form, Part};

    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                content_type,
                content,
            } => {
                let part = Part::bytes(content)
                    .file_name(file_name)
                    .mime_str(&content_type)?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use http::Method;
    use test_log::test;

    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Configuration::new().with_host("http://localhost:80/v2")).unwrap()
    }

    #[test]
    fn test_select_header_accept() {
        assert_eq!(
            Some("application/json".to_string()),
            ApiClient::select_header_accept(&["application/xml", "application/json"])
        );
        assert_eq!(
            Some("application/problem+json".to_string()),
            ApiClient::select_header_accept(&["text/plain", "application/problem+json"])
        );
        assert_eq!(
            Some("application/xml".to_string()),
            ApiClient::select_header_accept(&["application/xml", "text/plain"])
        );
        assert_eq!(None, ApiClient::select_header_accept(&[]));
    }

    #[test]
    fn test_serialize_defaults() {
        let spec = RequestSpec::new(Method::POST, "/pet")
            .json_body(&serde_json::json!({"name": "x", "photoUrls": []}))
            .unwrap()
            .accepts(&["application/xml", "application/json"])
            .content_types(&["application/json", "application/xml"]);
        let request = client()
            .param_serialize(spec, &RequestOptions::default())
            .unwrap();

        assert_eq!(Method::POST, request.method);
        assert_eq!("http://localhost/v2/pet", request.url.as_str());
        assert_eq!("application/json", request.headers[ACCEPT]);
        assert_eq!("application/json", request.headers[CONTENT_TYPE]);
        assert!(
            request.headers[USER_AGENT]
                .to_str()
                .unwrap()
                .starts_with("petstore-client/")
        );
    }

    #[test]
    fn test_serialize_content_type_override() {
        let spec = RequestSpec::new(Method::PUT, "/pet").content_types(&["application/json"]);
        let options = RequestOptions::new().with_content_type("application/xml");
        let request = client().param_serialize(spec, &options).unwrap();
        assert_eq!("application/xml", request.headers[CONTENT_TYPE]);
    }

    #[test]
    fn test_serialize_applies_auth() {
        let config = Configuration::new()
            .with_host("http://localhost/v2")
            .with_api_key("api_key", "special-key")
            .with_api_key("api_key_query", "q")
            .with_access_token("token");
        let client = ApiClient::new(config).unwrap();

        let spec = RequestSpec::new(Method::GET, "/pet/{petId}")
            .path_param("petId", 7)
            .auth(&["api_key", "api_key_query"]);
        let request = client
            .param_serialize(spec, &RequestOptions::default())
            .unwrap();
        assert_eq!("special-key", request.headers["api_key"]);
        assert_eq!("api_key_query=q", request.url.query().unwrap());
        assert!(!request.headers.contains_key(http::header::AUTHORIZATION));

        let spec = RequestSpec::new(Method::GET, "/pet/{petId}")
            .path_param("petId", 7)
            .auth(&["api_key"]);
        let options = RequestOptions::new().with_request_auth(AuthSetting::header(
            "petstore_auth",
            "Authorization",
            "Bearer other",
        ));
        let request = client.param_serialize(spec, &options).unwrap();
        assert_eq!("Bearer other", request.headers[http::header::AUTHORIZATION]);
        assert!(!request.headers.contains_key("api_key"));
    }

    #[test]
    fn test_serialize_host_index() {
        let client = ApiClient::new(Configuration::new()).unwrap();
        let spec = RequestSpec::new(Method::GET, "/store/inventory");
        let options = RequestOptions::new().with_host_index(1);
        let request = client.param_serialize(spec, &options).unwrap();
        assert_eq!("https://localhost:8080/v2/store/inventory", request.url.as_str());

        let spec = RequestSpec::new(Method::GET, "/store/inventory");
        let options = RequestOptions::new().with_host_index(3);
        assert!(matches!(
            client.param_serialize(spec, &options),
            Err(ApiError::HostSetting(_))
        ));
    }

    #[test]
    fn test_serialize_host_index_keeps_explicit_host() {
        let spec = RequestSpec::new(Method::GET, "/pet/{petId}").path_param("petId", 1);
        let options = RequestOptions::new().with_host_index(0);
        let request = client().param_serialize(spec, &options).unwrap();
        assert_eq!("http://localhost/v2/pet/1", request.url.as_str());
    }

    #[test]
    fn test_serialize_timeout() {
        let spec = RequestSpec::new(Method::GET, "/pet/1");
        let request = client()
            .param_serialize(spec, &RequestOptions::default())
            .unwrap();
        assert_eq!(None, request.timeout);

        let spec = RequestSpec::new(Method::GET, "/pet/1");
        let options = RequestOptions::new().with_timeout(std::time::Duration::from_millis(250));
        let request = client().param_serialize(spec, &options).unwrap();
        assert_eq!(Some(std::time::Duration::from_millis(250)), request.timeout);
    }

    #[test]
    fn test_serialize_cookie_auth() {
        let spec = RequestSpec::new(Method::GET, "/pet/1");
        let options = RequestOptions::new().with_request_auth(AuthSetting::cookie(
            "api_key_cookie",
            "session",
            "abc",
        ));
        let request = client().param_serialize(spec, &options).unwrap();
        assert_eq!("session=abc", request.headers[http::header::COOKIE]);
        assert_eq!(None, request.url.query());
    }

    #[test]
    fn test_new_with_transport_settings() {
        let mut config = Configuration::new()
            .with_host("https://localhost/v2")
            .with_proxy("http://127.0.0.1:3128");
        config.system_proxy = true;
        config.verify_ssl = false;
        config.timeout = Some(std::time::Duration::from_secs(5));
        let client = ApiClient::new(config).unwrap();
        assert!(!client.configuration().verify_ssl);
        assert_eq!(
            Some(std::time::Duration::from_secs(5)),
            client.configuration().timeout
        );
    }

    #[test]
    fn test_default_headers_do_not_override_call_headers() {
        let mut client = client();
        client.set_default_header("X-Trace", "default").unwrap();

        let spec = RequestSpec::new(Method::GET, "/pet/1");
        let options = RequestOptions::new().with_header("X-Trace", "call").unwrap();
        let request = client.param_serialize(spec, &options).unwrap();
        assert_eq!("call", request.headers["x-trace"]);

        let spec = RequestSpec::new(Method::GET, "/pet/1");
        let request = client
            .param_serialize(spec, &RequestOptions::default())
            .unwrap();
        assert_eq!("default", request.headers["x-trace"]);
    }

    fn raw(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        }
        RawResponse {
            status: http::StatusCode::from_u16(status).unwrap(),
            headers,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_response_deserialize() {
        let info: HttpInfo<serde_json::Value> = client()
            .response_deserialize(raw(200, Some("application/json; charset=utf-8"), r#"{"id":1}"#))
            .unwrap();
        assert_eq!(serde_json::json!({"id": 1}), info.data);
        assert_eq!(br#"{"id":1}"#.to_vec(), info.raw_data);

        let info: HttpInfo<String> = client()
            .response_deserialize(raw(200, Some("text/plain"), "logged in"))
            .unwrap();
        assert_eq!("logged in", info.data);

        let info: HttpInfo<Vec<i32>> = client()
            .response_deserialize(raw(200, None, "[1,2]"))
            .unwrap();
        assert_eq!(vec![1, 2], info.data);
    }

    #[test]
    fn test_response_deserialize_errors() {
        let err = client()
            .response_deserialize::<serde_json::Value>(raw(404, Some("text/plain"), "Pet not found"))
            .unwrap_err();
        assert_eq!(Some(http::StatusCode::NOT_FOUND), err.status());
        assert_eq!(Some("Pet not found"), err.body());

        let err = client()
            .response_deserialize::<serde_json::Value>(raw(200, Some("application/xml"), "<Pet/>"))
            .unwrap_err();
        assert!(matches!(err, ApiError::UnsupportedContentType(m) if m == "application/xml"));

        let err = client()
            .response_deserialize_empty(raw(500, None, "boom"))
            .unwrap_err();
        assert_eq!(Some(crate::StatusKind::Service), err.status_kind());
    }
}
