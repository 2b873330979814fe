//! Domain entities exchanged with the backend. Wire keys are snake_case and
//! map one-to-one onto field names; dates go through the wire date codec.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// A storage box. `id` is server-assigned and only ever present on responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Box {
    pub id: i64,
    pub number: String,
    pub description: Option<String>,
    #[serde(with = "crate::core::dates::iso8601")]
    pub created_at: DateTime<Utc>,
}

/// An item stored inside a box. The photo fields are trusted exactly as the
/// server sent them; the client never fabricates a URL when both are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub box_id: i64,
    pub name: String,
    pub note: Option<String>,
    pub photo_url: Option<Url>,
    pub photo_filename: Option<String>,
    #[serde(with = "crate::core::dates::iso8601")]
    pub created_at: DateTime<Utc>,
}

/// A box together with its items. The server may send `items` as null or omit
/// it entirely; both decode to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDetail {
    pub id: i64,
    pub number: String,
    pub description: Option<String>,
    #[serde(with = "crate::core::dates::iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Item>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default())
}

/// Sparse update payload for a box. A field is serialized iff the caller set
/// it, so an untouched field is absent from the JSON rather than null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoxPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BoxPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_none() && self.description.is_none()
    }
}

/// A photo attached to a create request.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    /// The upload shape the backend expects from camera captures.
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            filename: "image.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes,
        }
    }
}
