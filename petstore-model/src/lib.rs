//! Data records exchanged with the Pet Store API.
//!
//! These are plain values: construct them, hand them to an API operation and
//! read them back from its result. Optional fields that are `None` are left
//! out of the JSON representation entirely.

mod api_response;
mod category;
mod multipart;
mod order;
mod pet;
mod tag;

pub use api_response::ApiResponse;
pub use category::Category;
pub use multipart::{
    TestObjectForMultipartRequestsRequestMarker, UploadFileWithAdditionalPropertiesRequestObject,
};
pub use order::{Order, OrderStatus};
pub use pet::{Pet, PetStatus};
pub use tag::Tag;

/// Returned when a string does not name a variant of one of the model enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {type_name}")]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
}
