use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A priced catalogue entry.
///
/// The identifier is supplied by the caller and treated as an opaque string;
/// nothing enforces uniqueness. Missing fields decode to their zero value, so
/// `Item::default()` doubles as the "no such item" response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub price: i64,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// Login request body.
#[derive(Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Result of replacing an item by id.
///
/// Serialized untagged: a matched replace renders as the new item object,
/// a miss renders as the unchanged collection array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum ReplaceOutcome {
    Replaced(Item),
    Unchanged(Vec<Item>),
}

impl ReplaceOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, ReplaceOutcome::Replaced(_))
    }
}
