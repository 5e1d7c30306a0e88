mod fake_api;
mod pet_api;
mod store_api;

pub use fake_api::FakeApi;
pub use pet_api::PetApi;
pub use store_api::StoreApi;
