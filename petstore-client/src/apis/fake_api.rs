//! Endpoints of the test server that exercise multipart edge cases.

use std::sync::Arc;

use http::Method;
use petstore_model::{
    ApiResponse, TestObjectForMultipartRequestsRequestMarker,
    UploadFileWithAdditionalPropertiesRequestObject,
};

use crate::{
    ApiClient, ApiError,
    request::{FileParam, RequestOptions, RequestSpec, SerializedRequest},
    response::HttpInfo,
};

#[derive(Debug, Clone)]
pub struct FakeApi {
    api_client: Arc<ApiClient>,
}

impl FakeApi {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        FakeApi { api_client }
    }

    pub fn from_default() -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::get_default()?))
    }

    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.api_client
    }

    /// Sends `marker` as a JSON encoded text part.
    pub fn test_object_for_multipart_requests(
        &self,
        marker: &TestObjectForMultipartRequestsRequestMarker,
    ) -> Result<(), ApiError> {
        self.test_object_for_multipart_requests_with_http_info(marker, &RequestOptions::default())
            .map(|r| r.data)
    }

    pub fn test_object_for_multipart_requests_with_http_info(
        &self,
        marker: &TestObjectForMultipartRequestsRequestMarker,
        options: &RequestOptions,
    ) -> Result<HttpInfo<()>, ApiError> {
        let spec = Self::test_object_for_multipart_requests_spec(marker)?;
        self.api_client.execute_empty(spec, options)
    }

    pub fn test_object_for_multipart_requests_serialize(
        &self,
        marker: &TestObjectForMultipartRequestsRequestMarker,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        let spec = Self::test_object_for_multipart_requests_spec(marker)?;
        self.api_client.param_serialize(spec, options)
    }

    fn test_object_for_multipart_requests_spec(
        marker: &TestObjectForMultipartRequestsRequestMarker,
    ) -> Result<RequestSpec, ApiError> {
        RequestSpec::new(Method::POST, "/fake/object_for_multipart_requests")
            .content_types(&["multipart/form-data"])
            .multipart_json("marker", marker)
    }

    /// uploads a file and additional properties using multipart/form-data
    ///
    /// `object` travels as its JSON text and `count` as a decimal string.
    pub fn upload_file_with_additional_properties(
        &self,
        file: &FileParam,
        object: Option<&UploadFileWithAdditionalPropertiesRequestObject>,
        count: Option<i32>,
    ) -> Result<ApiResponse, ApiError> {
        self.upload_file_with_additional_properties_with_http_info(
            file,
            object,
            count,
            &RequestOptions::default(),
        )
        .map(|r| r.data)
    }

    pub fn upload_file_with_additional_properties_with_http_info(
        &self,
        file: &FileParam,
        object: Option<&UploadFileWithAdditionalPropertiesRequestObject>,
        count: Option<i32>,
        options: &RequestOptions,
    ) -> Result<HttpInfo<ApiResponse>, ApiError> {
        let spec = Self::upload_file_with_additional_properties_spec(file, object, count)?;
        self.api_client.execute(spec, options)
    }

    pub fn upload_file_with_additional_properties_serialize(
        &self,
        file: &FileParam,
        object: Option<&UploadFileWithAdditionalPropertiesRequestObject>,
        count: Option<i32>,
        options: &RequestOptions,
    ) -> Result<SerializedRequest, ApiError> {
        let spec = Self::upload_file_with_additional_properties_spec(file, object, count)?;
        self.api_client.param_serialize(spec, options)
    }

    fn upload_file_with_additional_properties_spec(
        file: &FileParam,
        object: Option<&UploadFileWithAdditionalPropertiesRequestObject>,
        count: Option<i32>,
    ) -> Result<RequestSpec, ApiError> {
        let mut spec = RequestSpec::new(Method::POST, "/fake/upload_file_with_additional_properties")
            .accepts(&["application/json"])
            .content_types(&["multipart/form-data"])
            .multipart_file("file", file)?;
        if let Some(object) = object {
            spec = spec.multipart_json("object", object)?;
        }
        if let Some(count) = count {
            spec = spec.multipart_text("count", count);
        }
        Ok(spec)
    }
}
