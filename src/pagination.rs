use serde::{Deserialize, Serialize};

/// Opaque position token for fetching the next page of a list.
///
/// The SDK never inspects the token; it is echoed back to the server
/// verbatim, so either an offset-based or token-based scheme on the server
/// side works unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wraps a raw cursor value received out of band.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token, as sent in the `cursor` query parameter.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parameters accepted by every list operation.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Resume from this position; `None` fetches the first page.
    pub cursor: Option<Cursor>,
    /// Maximum number of items per page; `None` uses the server default.
    pub limit: Option<u32>,
}

impl ListParams {
    /// Parameters for the first page with server-default sizing.
    pub fn first_page() -> Self {
        Self::default()
    }

    /// Resume from the cursor of a previous page.
    pub fn after(cursor: Cursor) -> Self {
        Self {
            cursor: Some(cursor),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Renders the query-string pairs for this request.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.as_str().to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// One page of a list response. Never mutated after construction; fetching
/// the next page is a new request using [`PaginatedResult::next_cursor`].
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResult<T> {
    /// The items on this page, in server order.
    data: Vec<T>,
    /// Total number of items across all pages.
    #[serde(default)]
    total_count: u64,
    /// Position token for the next page; `None` on the last page.
    next_cursor: Option<Cursor>,
}

impl<T> PaginatedResult<T> {
    /// The items on this page.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Consumes the page, yielding its items.
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Total number of items across all pages.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Cursor for the next page, `None` once exhausted.
    pub fn next_cursor(&self) -> Option<&Cursor> {
        self.next_cursor.as_ref()
    }

    /// Forward-only iteration over the materialized page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for PaginatedResult<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_page_with_cursor() {
        let page: PaginatedResult<String> = serde_json::from_value(serde_json::json!({
            "data": ["a", "b"],
            "total_count": 4,
            "next_cursor": "tok_2"
        }))
        .unwrap();
        assert_eq!(page.data(), ["a", "b"]);
        assert_eq!(page.total_count(), 4);
        assert_eq!(page.next_cursor(), Some(&Cursor::new("tok_2")));
    }

    #[test]
    fn last_page_has_no_cursor() {
        let page: PaginatedResult<String> = serde_json::from_value(serde_json::json!({
            "data": [],
        }))
        .unwrap();
        assert!(page.data().is_empty());
        assert_eq!(page.next_cursor(), None);
    }

    #[test]
    fn list_params_render_to_query_pairs() {
        let params = ListParams::after(Cursor::new("tok_2")).with_limit(25);
        assert_eq!(
            params.to_query(),
            vec![("cursor", "tok_2".to_string()), ("limit", "25".to_string())]
        );
        assert!(ListParams::first_page().to_query().is_empty());
    }
}
