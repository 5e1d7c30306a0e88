/// Where a credential is placed on the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLocation {
    Header,
    Query,
    Cookie,
}

/// A resolved credential for one security scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSetting {
    /// name of the security scheme, e.g. `api_key`
    pub scheme: &'static str,
    pub location: AuthLocation,
    /// header, query parameter or cookie name
    pub key: String,
    pub value: String,
}

impl AuthSetting {
    pub fn header(scheme: &'static str, key: impl Into<String>, value: impl Into<String>) -> Self {
        AuthSetting {
            scheme,
            location: AuthLocation::Header,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn query(scheme: &'static str, key: impl Into<String>, value: impl Into<String>) -> Self {
        AuthSetting {
            scheme,
            location: AuthLocation::Query,
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn cookie(scheme: &'static str, key: impl Into<String>, value: impl Into<String>) -> Self {
        AuthSetting {
            scheme,
            location: AuthLocation::Cookie,
            key: key.into(),
            value: value.into(),
        }
    }
}
