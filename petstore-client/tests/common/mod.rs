#![allow(dead_code)]

use std::{
    net::TcpListener,
    path::PathBuf,
    sync::atomic::{AtomicI64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use petstore_client::models::{Category, Pet, PetStatus, Tag};

static NEXT_ID: AtomicI64 = AtomicI64::new(0);

/// Ids that stay unique across test runs against a shared server.
pub fn id_gen() -> i64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default();
    (millis % 1_000_000_000) * 1000 + NEXT_ID.fetch_add(1, Ordering::Relaxed) % 1000
}

pub struct Fixture {
    pub category: Category,
    pub tag: Tag,
    pub pet: Pet,
}

pub fn fixture() -> Fixture {
    let category = Category::new(id_gen(), "dog");
    let tag = Tag::new(id_gen(), "openapi-generator-rust-pet-tag");
    let mut pet = Pet::new(
        "hello kity",
        vec![
            "http://foo.bar.com/1".to_string(),
            "http://foo.bar.com/2".to_string(),
        ],
    );
    pet.id = Some(id_gen());
    pet.status = Some(PetStatus::Sold);
    pet.category = Some(category.clone());
    pet.tags = Some(vec![tag.clone()]);
    Fixture { category, tag, pet }
}

pub fn foo_png() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testfiles")
        .join("foo.png")
}

/// A local port nothing listens on.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// A listener whose connections are queued by the kernel but never answered.
pub fn silent_listener() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").unwrap()
}
