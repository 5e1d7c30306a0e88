//! Runs against a real Pet Store server and is ignored by default:
//!
//! ```text
//! docker run -d -e SWAGGER_HOST=http://petstore.swagger.io -e SWAGGER_BASE_PATH=/v2 -p 80:8080 swaggerapi/petstore
//! PETSTORE_HOST=http://localhost:80/v2 cargo test -p petstore-client --test live_pet_api -- --ignored
//! ```

mod common;

use std::sync::Arc;

use http::StatusCode;
use petstore_client::{ApiClient, Configuration, FileParam, PetApi, models::PetStatus};
use test_log::test;

use common::{fixture, foo_png};

const DEFAULT_HOST: &str = "http://localhost:80/v2";

fn pet_api() -> PetApi {
    let mut config = Configuration::from_env();
    if config.host.is_none() {
        config.host = Some(DEFAULT_HOST.to_string());
    }
    PetApi::new(Arc::new(ApiClient::new(config).unwrap()))
}

#[test]
#[ignore]
fn live_add_pet_and_get_pet_by_id() -> anyhow::Result<()> {
    let pet_api = pet_api();
    let f = fixture();
    pet_api.add_pet(&f.pet)?;

    let fetched = pet_api.get_pet_by_id(f.pet.id.unwrap())?;
    assert_eq!(f.pet.id, fetched.id);
    assert_eq!(f.category.name, fetched.category.and_then(|c| c.name));
    Ok(())
}

#[test]
#[ignore]
fn live_update_pet_with_form() -> anyhow::Result<()> {
    let pet_api = pet_api();
    let f = fixture();
    let pet_id = f.pet.id.unwrap();
    pet_api.add_pet(&f.pet)?;

    let name = "hello kity with form updated";
    pet_api.update_pet_with_form(pet_id, Some(name), Some("pending"))?;

    let fetched = pet_api.get_pet_by_id(pet_id)?;
    assert_eq!(name, fetched.name);
    assert_eq!(Some(PetStatus::Pending), fetched.status);
    Ok(())
}

#[test]
#[ignore]
fn live_find_pets_by_status_and_tags() -> anyhow::Result<()> {
    let pet_api = pet_api();
    let f = fixture();
    pet_api.add_pet(&f.pet)?;

    let pets = pet_api.find_pets_by_status(&[PetStatus::Sold])?;
    assert!(pets.iter().any(|p| p.id == f.pet.id));

    let pets = pet_api.find_pets_by_tags(&[f.tag.name.unwrap()])?;
    assert!(pets.iter().any(|p| p.id == f.pet.id));
    Ok(())
}

#[test]
#[ignore]
fn live_upload_file() -> anyhow::Result<()> {
    let pet_api = pet_api();
    let f = fixture();
    let pet_id = f.pet.id.unwrap();
    pet_api.add_pet(&f.pet)?;

    let file = FileParam::from(foo_png());
    pet_api.upload_file(pet_id, Some("special"), Some(&file))?;
    pet_api.upload_file(pet_id, None, Some(&file))?;
    Ok(())
}

#[test]
#[ignore]
fn live_delete_pet() -> anyhow::Result<()> {
    let pet_api = pet_api();
    let f = fixture();
    let pet_id = f.pet.id.unwrap();
    pet_api.add_pet(&f.pet)?;
    pet_api.delete_pet(pet_id, Some("special-key"))?;

    let err = pet_api.get_pet_by_id(pet_id).unwrap_err();
    assert_eq!(Some(StatusCode::NOT_FOUND), err.status());
    Ok(())
}
