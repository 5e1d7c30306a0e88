//! Everything about your Pets.
//!
//! Each operation comes in three flavours: `op` returns the decoded data,
//! `op_with_http_info` also returns status, headers and the raw body, and
//! `op_serialize` builds the request without sending it.

use std::sync::Arc;

use http::Method;
use petstore_model::{ApiResponse, Pet, PetStatus};

use crate::{
    ApiClient, ApiError,
    request::{CollectionFormat, FileParam, RequestOptions, RequestSpec, SerializedRequest},
    response::HttpInfo,
};

const JSON_AND_XML: &[&str] = &["application/xml", "application/json"];
const PET_BODY_TYPES: &[&str] = &["application/json", "application/xml"];

#[derive(Debug, Clone)]
pub struct PetApi {
    api_client: Arc<ApiClient>,
}

impl PetApi {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        PetApi { api_client }
    }

    /// A `PetApi` on the process-wide default client.
    pub fn from_default() -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::get_default()?))
    }

    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.api_client
    }

    /// Add a new pet to the store
    pub fn add_pet(&self, pet: &Pet) -> Result<(), ApiError> {
        self.add_pet_with_http_info(pet, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn add_pet_with_http_info(
        &self,
        pet: &Pet,
        options: &RequestOptions,
    ) -> Result<HttpInfo<()>, ApiError> {
        self.api_client
            .execute_empty(Self::add_pet_spec(pet)?, options)
    }

    pub fn add_pet_serialize(
        &self,
        pet: &Pet,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client
            .param_serialize(Self::add_pet_spec(pet)?, options)
    }

    fn add_pet_spec(pet: &Pet) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::POST, "/pet")
            .json_body(pet)?
            .content_types(PET_BODY_TYPES)
            .auth(&["petstore_auth"]))
    }

    /// Update an existing pet
    pub fn update_pet(&self, pet: &Pet) -> Result<(), ApiError> {
        self.update_pet_with_http_info(pet, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn update_pet_with_http_info(
        &self,
        pet: &Pet,
        options: &RequestOptions,
    ) -> Result<HttpInfo<()>, ApiError> {
        self.api_client
            .execute_empty(Self::update_pet_spec(pet)?, options)
    }

    pub fn update_pet_serialize(
        &self,
        pet: &Pet,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client
            .param_serialize(Self::update_pet_spec(pet)?, options)
    }

    fn update_pet_spec(pet: &Pet) -> Result<RequestSpec, ApiError> {
        Ok(RequestSpec::new(Method::PUT, "/pet")
            .json_body(pet)?
            .content_types(PET_BODY_TYPES)
            .auth(&["petstore_auth"]))
    }

    /// Find pet by ID
    ///
    /// Fails with a 404 [`ApiError::Status`] if no pet has that id.
    pub fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, ApiError> {
        self.get_pet_by_id_with_http_info(pet_id, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn get_pet_by_id_with_http_info(
        &self,
        pet_id: i64,
        options: &RequestOptions,
    ) -> Result<HttpInfo<Pet>, ApiError> {
        self.api_client
            .execute(Self::get_pet_by_id_spec(pet_id), options)
    }

    pub fn get_pet_by_id_serialize(
        &self,
        pet_id: i64,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client
            .param_serialize(Self::get_pet_by_id_spec(pet_id), options)
    }

    fn get_pet_by_id_spec(pet_id: i64) -> RequestSpec {
        RequestSpec::new(Method::GET, "/pet/{petId}")
            .path_param("petId", pet_id)
            .accepts(JSON_AND_XML)
            .auth(&["api_key"])
    }

    /// Deletes a pet
    pub fn delete_pet(&self, pet_id: i64, api_key: Option<&str>) -> Result<(), ApiError> {
        self.delete_pet_with_http_info(pet_id, api_key, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn delete_pet_with_http_info(
        &self,
        pet_id: i64,
        api_key: Option<&str>,
        options: &RequestOptions,
    ) -> Result<HttpInfo<()>, ApiError> {
        self.api_client
            .execute_empty(Self::delete_pet_spec(pet_id, api_key), options)
    }

    pub fn delete_pet_serialize(
        &self,
        pet_id: i64,
        api_key: Option<&str>,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client
            .param_serialize(Self::delete_pet_spec(pet_id, api_key), options)
    }

    fn delete_pet_spec(pet_id: i64, api_key: Option<&str>) -> RequestSpec {
        let mut spec = RequestSpec::new(Method::DELETE, "/pet/{petId}")
            .path_param("petId", pet_id)
            .auth(&["petstore_auth"]);
        if let Some(api_key) = api_key {
            spec = spec.header_param("api_key", api_key);
        }
        spec
    }

    /// Finds Pets by status
    pub fn find_pets_by_status(&self, status: &[PetStatus]) -> Result<Vec<Pet>, ApiError> {
        self.find_pets_by_status_with_http_info(status, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn find_pets_by_status_with_http_info(
        &self,
        status: &[PetStatus],
        options: &RequestOptions,
    ) -> Result<HttpInfo<Vec<Pet>>, ApiError> {
        self.api_client
            .execute(Self::find_pets_by_status_spec(status), options)
    }

    pub fn find_pets_by_status_serialize(
        &self,
        status: &[PetStatus],
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client
            .param_serialize(Self::find_pets_by_status_spec(status), options)
    }

    fn find_pets_by_status_spec(status: &[PetStatus]) -> RequestSpec {
        RequestSpec::new(Method::GET, "/pet/findByStatus")
            .query_collection("status", status, CollectionFormat::Csv)
            .accepts(JSON_AND_XML)
            .auth(&["petstore_auth"])
    }

    /// Finds Pets by tags
    ///
    /// The Pet Store marks this operation as deprecated.
    pub fn find_pets_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<Vec<Pet>, ApiError> {
        self.find_pets_by_tags_with_http_info(tags, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn find_pets_by_tags_with_http_info<S: AsRef<str>>(
        &self,
        tags: &[S],
        options: &RequestOptions,
    ) -> Result<HttpInfo<Vec<Pet>>, ApiError> {
        self.api_client
            .execute(Self::find_pets_by_tags_spec(tags), options)
    }

    pub fn find_pets_by_tags_serialize<S: AsRef<str>>(
        &self,
        tags: &[S],
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client
            .param_serialize(Self::find_pets_by_tags_spec(tags), options)
    }

    fn find_pets_by_tags_spec<S: AsRef<str>>(tags: &[S]) -> RequestSpec {
        RequestSpec::new(Method::GET, "/pet/findByTags")
            .query_collection(
                "tags",
                tags.iter().map(|t| t.as_ref()),
                CollectionFormat::Csv,
            )
            .accepts(JSON_AND_XML)
            .auth(&["petstore_auth"])
    }

    /// Updates a pet in the store with form data
    pub fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
    ) -> Result<(), ApiError> {
        self.update_pet_with_form_with_http_info(pet_id, name, status, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn update_pet_with_form_with_http_info(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
        options: &RequestOptions,
    ) -> Result<HttpInfo<()>, ApiError> {
        self.api_client.execute_empty(
            Self::update_pet_with_form_spec(pet_id, name, status),
            options,
        )
    }

    pub fn update_pet_with_form_serialize(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client.param_serialize(
            Self::update_pet_with_form_spec(pet_id, name, status),
            options,
        )
    }

    fn update_pet_with_form_spec(
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
    ) -> RequestSpec {
        let mut spec = RequestSpec::new(Method::POST, "/pet/{petId}")
            .path_param("petId", pet_id)
            .content_types(&["application/x-www-form-urlencoded"])
            .auth(&["petstore_auth"]);
        if let Some(name) = name {
            spec = spec.form_param("name", name);
        }
        if let Some(status) = status {
            spec = spec.form_param("status", status);
        }
        spec
    }

    /// uploads an image
    pub fn upload_file(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileParam>,
    ) -> Result<ApiResponse, ApiError> {
        self.upload_file_with_http_info(pet_id, additional_metadata, file, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn upload_file_with_http_info(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileParam>,
        options: &RequestOptions,
    ) -> Result<HttpInfo<ApiResponse>, ApiError> {
        self.api_client.execute(
            Self::upload_file_spec(pet_id, additional_metadata, file)?,
            options,
        )
    }

    pub fn upload_file_serialize(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileParam>,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client.param_serialize(
            Self::upload_file_spec(pet_id, additional_metadata, file)?,
            options,
        )
    }

    fn upload_file_spec(
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileParam>,
    ) -> Result<RequestSpec, ApiError> {
        let mut spec = RequestSpec::new(Method::POST, "/pet/{petId}/uploadImage")
            .path_param("petId", pet_id)
            .accepts(&["application/json"])
            .content_types(&["multipart/form-data"])
            .auth(&["petstore_auth"]);
        if let Some(additional_metadata) = additional_metadata {
            spec = spec.multipart_text("additionalMetadata", additional_metadata);
        }
        if let Some(file) = file {
            spec = spec.multipart_file("file", file)?;
        }
        Ok(spec)
    }

    /// uploads an image (required)
    pub fn upload_file_with_required_file(
        &self,
        pet_id: i64,
        required_file: &FileParam,
        additional_metadata: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        self.upload_file_with_required_file_with_http_info(
            pet_id,
            required_file,
            additional_metadata,
            &RequestOptions::default(),
        )
        .map(|r| r.data)
    }

    pub fn upload_file_with_required_file_with_http_info(
        &self,
        pet_id: i64,
        required_file: &FileParam,
        additional_metadata: Option<&str>,
        options: &RequestOptions,
    ) -> Result<HttpInfo<ApiResponse>, ApiError> {
        self.api_client.execute(
            Self::upload_file_with_required_file_spec(pet_id, required_file, additional_metadata)?,
            options,
        )
    }

    pub fn upload_file_with_required_file_serialize(
        &self,
        pet_id: i64,
        required_file: &FileParam,
        additional_metadata: Option<&str>,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        self.api_client.param_serialize(
            Self::upload_file_with_required_file_spec(pet_id, required_file, additional_metadata)?,
            options,
        )
    }

    fn upload_file_with_required_file_spec(
        pet_id: i64,
        required_file: &FileParam,
        additional_metadata: Option<&str>,
    ) -> Result<RequestSpec, ApiError> {
        let mut spec = RequestSpec::new(Method::POST, "/fake/{petId}/uploadImageWithRequiredFile")
            .path_param("petId", pet_id)
            .accepts(&["application/json"])
            .content_types(&["multipart/form-data"])
            .auth(&["petstore_auth"]);
        if let Some(additional_metadata) = additional_metadata {
            spec = spec.multipart_text("additionalMetadata", additional_metadata);
        }
        spec.multipart_file("requiredFile", required_file)
    }
}
