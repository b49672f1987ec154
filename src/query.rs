//! Query parameters accepted by list-format endpoints.

use std::fmt;

/// A primitive query value.
///
/// hacoCMS filter parameters are strings or integers on the wire; list
/// values collapse to a single comma-joined string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(s: &str) -> Self {
        QueryValue::Str(s.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(s: String) -> Self {
        QueryValue::Str(s)
    }
}

impl From<i64> for QueryValue {
    fn from(n: i64) -> Self {
        QueryValue::Int(n)
    }
}

impl From<i32> for QueryValue {
    fn from(n: i32) -> Self {
        QueryValue::Int(n.into())
    }
}

impl From<u32> for QueryValue {
    fn from(n: u32) -> Self {
        QueryValue::Int(n.into())
    }
}

impl<V: Into<QueryValue>> From<Vec<V>> for QueryValue {
    fn from(values: Vec<V>) -> Self {
        let joined = values
            .into_iter()
            .map(|v| v.into().to_string())
            .collect::<Vec<_>>()
            .join(",");
        QueryValue::Str(joined)
    }
}

/// Pagination, sort, and filter controls for list requests.
///
/// `limit`, `offset`, and `sort` are the server's standard knobs; anything
/// else passes through [`param`](QueryParameters::param) verbatim. The
/// client performs no validation — unknown keys are the server's problem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    limit: Option<u64>,
    offset: Option<u64>,
    sort: Option<String>,
    extra: Vec<(String, QueryValue)>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of items in the returned window.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of items to skip from the head of the collection.
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sort expression, sent verbatim as the `s` parameter
    /// (e.g. `-publishedAt,id`).
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Arbitrary server-recognized filter key, passed through unvalidated.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Serialize to `(name, value)` pairs: `limit`, `offset`, `s`, then the
    /// extra filters in insertion order.
    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(ref sort) = self.sort {
            pairs.push(("s".to_string(), sort.clone()));
        }
        for (key, value) in &self.extra {
            pairs.push((key.clone(), value.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_parameters_produce_no_pairs() {
        assert!(QueryParameters::new().to_pairs().is_empty());
    }

    #[test]
    fn standard_knobs_serialize_in_stable_order() {
        let query = QueryParameters::new().sort("-publishedAt,id").offset(100).limit(50);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("limit".to_string(), "50".to_string()),
                ("offset".to_string(), "100".to_string()),
                ("s".to_string(), "-publishedAt,id".to_string()),
            ]
        );
    }

    #[test]
    fn sort_expression_passes_through_verbatim() {
        let query = QueryParameters::new().sort("-publishedAt,id");
        assert_eq!(query.to_pairs(), vec![("s".to_string(), "-publishedAt,id".to_string())]);
    }

    #[test]
    fn extra_filters_keep_insertion_order() {
        let query = QueryParameters::new()
            .param("category", "news")
            .param("rank", 3)
            .param("tags", vec!["a", "b"]);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("category".to_string(), "news".to_string()),
                ("rank".to_string(), "3".to_string()),
                ("tags".to_string(), "a,b".to_string()),
            ]
        );
    }
}
