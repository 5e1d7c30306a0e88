//! Client configuration.
//!
//! A [`Configuration`] decides which host requests go to, which proxy they
//! travel through and which credentials are attached. A process-wide default
//! instance is available through [`Configuration::get_default`].

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use base64::{Engine, prelude::BASE64_STANDARD};
use http::{HeaderMap, HeaderName, HeaderValue};
use lazy_static::lazy_static;

use crate::{
    ApiError,
    auth::AuthSetting,
};

pub const ENV_HOST: &str = "PETSTORE_HOST";
pub const ENV_PROXY: &str = "PETSTORE_PROXY";
pub const ENV_API_KEY: &str = "PETSTORE_API_KEY";
pub const ENV_ACCESS_TOKEN: &str = "PETSTORE_ACCESS_TOKEN";

const DEFAULT_USER_AGENT: &str = concat!("petstore-client/", env!("CARGO_PKG_VERSION"), "/rust");

lazy_static! {
    static ref DEFAULT_CONFIGURATION: Mutex<Option<Arc<Configuration>>> = Mutex::new(None);
}

/// A variable inside a server URL template, e.g. `{port}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerVariable {
    pub name: String,
    pub description: String,
    pub default_value: String,
    /// allowed values; empty means anything goes
    pub enum_values: Vec<String>,
}

/// One entry of the server list a client may talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfiguration {
    pub url: String,
    pub description: String,
    pub variables: Vec<ServerVariable>,
}

impl ServerConfiguration {
    fn new(url: &str, description: &str, variables: Vec<ServerVariable>) -> Self {
        ServerConfiguration {
            url: url.to_string(),
            description: description.to_string(),
            variables,
        }
    }
}

fn variable(name: &str, description: &str, default_value: &str, enum_values: &[&str]) -> ServerVariable {
    ServerVariable {
        name: name.to_string(),
        description: description.to_string(),
        default_value: default_value.to_string(),
        enum_values: enum_values.iter().map(|v| v.to_string()).collect(),
    }
}

/// The servers the Pet Store API is published on.
pub fn default_servers() -> Vec<ServerConfiguration> {
    vec![
        ServerConfiguration::new(
            "http://{server}.swagger.io:{port}/v2",
            "petstore server",
            vec![
                variable(
                    "server",
                    "No description provided",
                    "petstore",
                    &["petstore", "qa-petstore", "dev-petstore"],
                ),
                variable("port", "No description provided", "80", &["80", "8080"]),
            ],
        ),
        ServerConfiguration::new(
            "https://localhost:8080/{version}",
            "The local server",
            vec![variable(
                "version",
                "No description provided",
                "v2",
                &["v1", "v2"],
            )],
        ),
        ServerConfiguration::new("https://127.0.0.1/no_varaible", "The local server without variables", vec![]),
    ]
}

/// Settings shared by every request an [`crate::ApiClient`] sends.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Overrides the server list when set.
    pub host: Option<String>,
    pub servers: Vec<ServerConfiguration>,
    pub server_index: usize,
    pub server_variables: HashMap<String, String>,
    /// Proxy URL every request is routed through.
    pub proxy: Option<String>,
    /// Also honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub system_proxy: bool,
    /// Headers added to every request unless the call sets them itself.
    pub default_headers: HeaderMap,
    pub user_agent: String,
    /// API keys by security scheme name (`api_key`, `api_key_query`).
    pub api_keys: HashMap<String, String>,
    /// Prefixes such as `Bearer` put in front of the matching API key.
    pub api_key_prefixes: HashMap<String, String>,
    /// OAuth2 access token for `petstore_auth`, also used for `bearer_test`.
    pub access_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Option<Duration>,
    pub verify_ssl: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            host: None,
            servers: default_servers(),
            server_index: 0,
            server_variables: HashMap::new(),
            proxy: None,
            system_proxy: false,
            default_headers: HeaderMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_keys: HashMap::new(),
            api_key_prefixes: HashMap::new(),
            access_token: None,
            username: None,
            password: None,
            timeout: None,
            verify_ssl: true,
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration overlaid with the `PETSTORE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup(ENV_HOST) {
            config.host = Some(host);
        }
        if let Some(proxy) = lookup(ENV_PROXY) {
            config.proxy = Some(proxy);
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            config.api_keys.insert("api_key".to_string(), key);
        }
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            config.access_token = Some(token);
        }
        config
    }

    /// The process-wide default configuration. Every call returns the same
    /// instance until [`Configuration::set_default`] replaces it.
    pub fn get_default() -> Arc<Configuration> {
        let mut guard = DEFAULT_CONFIGURATION
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        guard
            .get_or_insert_with(|| Arc::new(Configuration::default()))
            .clone()
    }

    /// Replaces the process-wide default. `None` resets it so the next
    /// [`Configuration::get_default`] creates a fresh one.
    pub fn set_default(configuration: Option<Configuration>) {
        let mut guard = DEFAULT_CONFIGURATION
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = configuration.map(Arc::new);
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_api_key(mut self, scheme: impl Into<String>, key: impl Into<String>) -> Self {
        self.api_keys.insert(scheme.into(), key.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Adds a header sent with every request.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let (name, value) = header_pair(name, value)?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// The base URL requests are sent to: [`Configuration::host`] if set,
    /// otherwise the selected server with its variables filled in.
    pub fn host(&self) -> Result<String, ApiError> {
        match &self.host {
            Some(host) => Ok(host.clone()),
            None => self.host_from_settings(self.server_index, &self.server_variables),
        }
    }

    /// Expands the server URL at `index`. Variables missing from `variables`
    /// take their default values.
    pub fn host_from_settings(
        &self,
        index: usize,
        variables: &HashMap<String, String>,
    ) -> Result<String, ApiError> {
        let server = self.servers.get(index).ok_or_else(|| {
            ApiError::HostSetting(format!(
                "Invalid index {index} when selecting the host settings. Must be less than {}",
                self.servers.len()
            ))
        })?;

        let mut url = server.url.clone();
        for var in &server.variables {
            let used = variables.get(&var.name).unwrap_or(&var.default_value);
            if !var.enum_values.is_empty() && !var.enum_values.contains(used) {
                return Err(ApiError::HostSetting(format!(
                    "The variable `{}` in the host URL has invalid value '{used}'. Must be one of {:?}",
                    var.name, var.enum_values
                )));
            }
            url = url.replace(&format!("{{{}}}", var.name), used);
        }
        Ok(url)
    }

    fn api_key_with_prefix(&self, scheme: &str) -> Option<String> {
        let key = self.api_keys.get(scheme)?;
        Some(match self.api_key_prefixes.get(scheme) {
            Some(prefix) => format!("{prefix} {key}"),
            None => key.clone(),
        })
    }

    fn basic_auth_token(&self) -> Option<String> {
        if self.username.is_none() && self.password.is_none() {
            return None;
        }
        let credentials = format!(
            "{}:{}",
            self.username.as_deref().unwrap_or_default(),
            self.password.as_deref().unwrap_or_default()
        );
        Some(format!("Basic {}", BASE64_STANDARD.encode(credentials)))
    }

    /// The credentials currently configured, one entry per usable security scheme.
    pub fn auth_settings(&self) -> Vec<AuthSetting> {
        let mut settings = Vec::new();
        if let Some(token) = &self.access_token {
            settings.push(AuthSetting::header(
                "petstore_auth",
                http::header::AUTHORIZATION.as_str(),
                format!("Bearer {token}"),
            ));
        }
        if let Some(key) = self.api_key_with_prefix("api_key") {
            settings.push(AuthSetting::header("api_key", "api_key", key));
        }
        if let Some(key) = self.api_key_with_prefix("api_key_query") {
            settings.push(AuthSetting::query("api_key_query", "api_key_query", key));
        }
        if let Some(basic) = self.basic_auth_token() {
            settings.push(AuthSetting::header(
                "http_basic_test",
                http::header::AUTHORIZATION.as_str(),
                basic,
            ));
        }
        if let Some(token) = &self.access_token {
            settings.push(AuthSetting::header(
                "bearer_test",
                http::header::AUTHORIZATION.as_str(),
                format!("Bearer {token}"),
            ));
        }
        settings
    }

    pub(crate) fn auth_setting(&self, scheme: &str) -> Option<AuthSetting> {
        self.auth_settings()
            .into_iter()
            .find(|s| s.scheme == scheme)
    }
}

pub(crate) fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), ApiError> {
    let invalid = || ApiError::InvalidHeader {
        name: name.to_string(),
    };
    let header_name = HeaderName::try_from(name).map_err(|_| invalid())?;
    let header_value = HeaderValue::try_from(value).map_err(|_| invalid())?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_host() {
        let config = Configuration::new();
        assert_eq!("http://petstore.swagger.io:80/v2", config.host().unwrap());
    }

    #[test]
    fn test_host_override() {
        let config = Configuration::new().with_host("http://localhost:80/v2");
        assert_eq!("http://localhost:80/v2", config.host().unwrap());
    }

    #[test]
    fn test_host_from_settings_variables() {
        let config = Configuration::new();
        let variables = HashMap::from([
            ("server".to_string(), "qa-petstore".to_string()),
            ("port".to_string(), "8080".to_string()),
        ]);
        assert_eq!(
            "http://qa-petstore.swagger.io:8080/v2",
            config.host_from_settings(0, &variables).unwrap()
        );
        assert_eq!(
            "https://127.0.0.1/no_varaible",
            config.host_from_settings(2, &HashMap::new()).unwrap()
        );
    }

    #[test]
    fn test_host_from_settings_errors() {
        let config = Configuration::new();
        let err = config.host_from_settings(3, &HashMap::new()).unwrap_err();
        assert_eq!(
            "invalid host setting: Invalid index 3 when selecting the host settings. Must be less than 3",
            err.to_string()
        );

        let variables = HashMap::from([("port".to_string(), "443".to_string())]);
        assert!(matches!(
            config.host_from_settings(0, &variables),
            Err(ApiError::HostSetting(msg)) if msg.contains("`port`")
        ));
    }

    #[test]
    fn test_auth_settings() {
        assert!(Configuration::new().auth_settings().is_empty());

        let mut config = Configuration::new()
            .with_api_key("api_key", "special-key")
            .with_access_token("abc");
        config
            .api_key_prefixes
            .insert("api_key".to_string(), "Token".to_string());
        config.username = Some("user".to_string());
        config.password = Some("pass".to_string());

        let api_key = config.auth_setting("api_key").unwrap();
        assert_eq!("api_key", api_key.key);
        assert_eq!("Token special-key", api_key.value);

        let oauth = config.auth_setting("petstore_auth").unwrap();
        assert_eq!("authorization", oauth.key);
        assert_eq!("Bearer abc", oauth.value);

        let basic = config.auth_setting("http_basic_test").unwrap();
        assert_eq!("Basic dXNlcjpwYXNz", basic.value);

        assert!(config.auth_setting("api_key_query").is_none());
    }

    #[test]
    fn test_from_lookup() {
        let config = Configuration::from_lookup(|name| match name {
            ENV_HOST => Some("http://localhost:80/v2".to_string()),
            ENV_API_KEY => Some("special-key".to_string()),
            _ => None,
        });
        assert_eq!(Some("http://localhost:80/v2".to_string()), config.host);
        assert_eq!(None, config.proxy);
        assert_eq!(Some(&"special-key".to_string()), config.api_keys.get("api_key"));
        assert_eq!(None, config.access_token);
    }

    #[test]
    fn test_invalid_default_header() {
        assert!(matches!(
            Configuration::new().with_default_header("bad header", "x"),
            Err(ApiError::InvalidHeader { name }) if name == "bad header"
        ));
    }
}
