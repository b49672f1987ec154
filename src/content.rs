//! Content capability and the system fields shared by every hacoCMS item.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::Result;

/// Capability for types constructible from a raw hacoCMS content object.
///
/// The retrieval operations are generic over this trait: the caller supplies
/// the construction capability by implementing `Deserialize` (usually via
/// derive) and the accessors for the system fields hacoCMS attaches to every
/// item. The client itself never reads the accessors — they pin down the
/// minimum shape of a content item.
///
/// [`from_json`](ApiContent::from_json) is the construction entry point used
/// by all four operations. The default delegates to the type's `Deserialize`
/// impl; types with unusual construction needs can override it.
pub trait ApiContent: DeserializeOwned {
    /// Content id assigned by hacoCMS.
    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// `None` while the content has never been published.
    fn published_at(&self) -> Option<DateTime<Utc>>;

    /// `None` unless the content has been closed. The API serializes this
    /// as an explicit `null` when unset.
    fn closed_at(&self) -> Option<DateTime<Utc>>;

    /// Construct the content object from the raw JSON returned by the API.
    fn from_json(json: serde_json::Value) -> Result<Self> {
        serde_json::from_value(json).map_err(crate::Error::from)
    }
}

/// The system fields hacoCMS attaches to every content item.
///
/// Flatten this into a content type and delegate the [`ApiContent`]
/// accessors to it:
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use hacocms::{ApiContent, SystemFields};
///
/// #[derive(serde::Deserialize)]
/// struct Post {
///     #[serde(flatten)]
///     system: SystemFields,
///     title: String,
/// }
///
/// impl ApiContent for Post {
///     fn id(&self) -> &str {
///         &self.system.id
///     }
///     fn created_at(&self) -> DateTime<Utc> {
///         self.system.created_at
///     }
///     fn updated_at(&self) -> DateTime<Utc> {
///         self.system.updated_at
///     }
///     fn published_at(&self) -> Option<DateTime<Utc>> {
///         self.system.published_at
///     }
///     fn closed_at(&self) -> Option<DateTime<Utc>> {
///         self.system.closed_at
///     }
/// }
/// ```
///
/// Timestamps arrive as ISO-8601 strings with timezone offsets; chrono
/// converts them to UTC preserving the absolute instant. `publishedAt` and
/// `closedAt` may be `null` or absent, both of which deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemFields {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_preserve_the_instant_across_offsets() {
        let fields: SystemFields = serde_json::from_str(
            r#"{
                "id": "abcdef",
                "createdAt": "2022-03-08T12:00:00.000+09:00",
                "updatedAt": "2022-03-08T03:00:00.000Z",
                "publishedAt": "2022-03-07T19:00:00.000-08:00",
                "closedAt": null
            }"#,
        )
        .unwrap();

        // All three spellings denote the same instant.
        assert_eq!(fields.created_at.timestamp_millis(), 1646708400000);
        assert_eq!(fields.updated_at, fields.created_at);
        assert_eq!(fields.published_at, Some(fields.created_at));
        assert_eq!(fields.closed_at, None);
    }

    #[test]
    fn absent_optional_fields_deserialize_to_none() {
        let fields: SystemFields = serde_json::from_str(
            r#"{
                "id": "abcdef",
                "createdAt": "2022-03-08T12:00:00.000+09:00",
                "updatedAt": "2022-03-08T12:00:00.000+09:00"
            }"#,
        )
        .unwrap();

        assert_eq!(fields.published_at, None);
        assert_eq!(fields.closed_at, None);
    }
}
