use serde::{Deserialize, Serialize};

/// A tag for a pet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Tag {
            id: Some(id),
            name: Some(name.into()),
        }
    }
}
