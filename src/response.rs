//! The `{meta, data}` envelope returned by list-format endpoints.

use serde::Deserialize;
use serde_json::Value;

use crate::content::ApiContent;
use crate::Result;

/// Pagination window metadata carried by every list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListMeta {
    /// Total number of items in the collection.
    pub total: u64,
    /// Offset of this window within the collection.
    pub offset: u64,
    /// Requested window size.
    pub limit: u64,
}

/// A decoded list response: window metadata plus the contents of the window,
/// constructed into `T` in server order.
///
/// `data.len()` is the size of the returned window and need not equal
/// `meta.total`.
#[derive(Debug, Clone)]
pub struct ListApiResponse<T> {
    pub meta: ListMeta,
    pub data: Vec<T>,
}

/// Wire shape of the envelope before element construction.
#[derive(Deserialize)]
pub(crate) struct ListEnvelope {
    pub(crate) meta: ListMeta,
    pub(crate) data: Vec<Value>,
}

impl<T: ApiContent> ListApiResponse<T> {
    /// Construct one `T` per raw `data` element, preserving order.
    pub(crate) fn from_envelope(envelope: ListEnvelope) -> Result<Self> {
        let data = envelope
            .data
            .into_iter()
            .map(T::from_json)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            meta: envelope.meta,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SystemFields;
    use chrono::{DateTime, Utc};

    #[derive(Debug, Deserialize)]
    struct Dummy {
        #[serde(flatten)]
        system: SystemFields,
    }

    impl ApiContent for Dummy {
        fn id(&self) -> &str {
            &self.system.id
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.system.created_at
        }
        fn updated_at(&self) -> DateTime<Utc> {
            self.system.updated_at
        }
        fn published_at(&self) -> Option<DateTime<Utc>> {
            self.system.published_at
        }
        fn closed_at(&self) -> Option<DateTime<Utc>> {
            self.system.closed_at
        }
    }

    fn item(id: &str) -> Value {
        serde_json::json!({
            "id": id,
            "createdAt": "2022-03-08T12:00:00.000+09:00",
            "updatedAt": "2022-03-08T12:00:00.000+09:00",
            "publishedAt": "2022-03-08T12:00:00.000+09:00",
            "closedAt": null,
        })
    }

    #[test]
    fn elements_are_constructed_in_server_order() {
        let envelope: ListEnvelope = serde_json::from_value(serde_json::json!({
            "meta": { "total": 12, "offset": 0, "limit": 3 },
            "data": [item("c"), item("a"), item("b")],
        }))
        .unwrap();

        let response = ListApiResponse::<Dummy>::from_envelope(envelope).unwrap();
        assert_eq!(response.meta.total, 12);
        assert_eq!(response.data.len(), 3);
        let ids: Vec<&str> = response.data.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn window_length_is_independent_of_total() {
        let envelope: ListEnvelope = serde_json::from_value(serde_json::json!({
            "meta": { "total": 100, "offset": 0, "limit": 1 },
            "data": [item("only")],
        }))
        .unwrap();

        let response = ListApiResponse::<Dummy>::from_envelope(envelope).unwrap();
        assert_eq!(response.meta.total, 100);
        assert_eq!(response.data.len(), 1);
    }

    #[test]
    fn malformed_element_fails_the_whole_response() {
        let envelope: ListEnvelope = serde_json::from_value(serde_json::json!({
            "meta": { "total": 1, "offset": 0, "limit": 100 },
            "data": [{ "id": "missing-timestamps" }],
        }))
        .unwrap();

        assert!(ListApiResponse::<Dummy>::from_envelope(envelope).is_err());
    }
}
