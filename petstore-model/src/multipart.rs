use serde::{Deserialize, Serialize};

/// The `marker` part of a `/fake/object_for_multipart_requests` submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestObjectForMultipartRequestsRequestMarker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TestObjectForMultipartRequestsRequestMarker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// The `object` part of a `/fake/upload_file_with_additional_properties` submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadFileWithAdditionalPropertiesRequestObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UploadFileWithAdditionalPropertiesRequestObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
