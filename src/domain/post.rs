use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::DecodeError;

/// Post entity - a single blog post record as it appears on the wire.
///
/// Immutable after construction: fields are read through accessors, and a
/// modified record is produced by building a new one. Equality is
/// field-by-field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    user_id: i64,
    id: i64,
    title: String,
    body: String,
}

impl Post {
    /// Create a new post with all four fields supplied.
    pub fn new(user_id: i64, id: i64, title: String, body: String) -> Self {
        Self {
            user_id,
            id,
            title,
            body,
        }
    }

    /// Decode a post from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Decode a post from an already-parsed JSON value.
    ///
    /// Unknown keys are ignored. A missing required key or a wrongly
    /// typed value fails with [`DecodeError`]; no partial record is
    /// produced.
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode to a JSON object holding exactly the four wire keys.
    ///
    /// Cannot fail: every valid post is representable.
    pub fn to_value(&self) -> Value {
        json!({
            "userId": self.user_id,
            "id": self.id,
            "title": self.title,
            "body": self.body,
        })
    }

    /// Encode to JSON text.
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// The author/owner reference.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// The post identifier within its source collection.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl FromStr for Post {
    type Err = DecodeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(text)?)
    }
}
