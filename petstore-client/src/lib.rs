//! Blocking client for the OpenAPI Pet Store sample API.
//!
//! ```no_run
//! use std::sync::Arc;
//! use petstore_client::{ApiClient, Configuration, PetApi};
//!
//! let config = Configuration::new().with_host("http://localhost:80/v2");
//! let pet_api = PetApi::new(Arc::new(ApiClient::new(config)?));
//! let pet = pet_api.get_pet_by_id(1)?;
//! println!("{}", pet.name);
//! # Ok::<(), petstore_client::ApiError>(())
//! ```

mod apis;
mod auth;
mod client;
mod configuration;
mod error;
mod request;
mod response;

pub use apis::{FakeApi, PetApi, StoreApi};
pub use auth::{AuthLocation, AuthSetting};
pub use client::ApiClient;
pub use configuration::{
    Configuration, ENV_ACCESS_TOKEN, ENV_API_KEY, ENV_HOST, ENV_PROXY, ServerConfiguration,
    ServerVariable, default_servers,
};
pub use error::{ApiError, StatusKind};
pub use request::{
    CollectionFormat, FileParam, FormPart, RequestBody, RequestOptions, RequestSpec,
    SerializedRequest, guess_content_type,
};
pub use response::{HttpInfo, RawResponse};

pub use petstore_model as models;
