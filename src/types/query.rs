//! Query-string encoding for listing endpoints.
//!
//! Pairs are emitted in the order a [`QueryParams`] implementation returns
//! them and form-urlencoded, so `A,B` becomes `A%2CB`. An absent parameter
//! value encodes to the empty string, which is not the same as a present
//! value whose fields are all zero.

use url::form_urlencoded;

/// A request value that can be rendered as URL query parameters
pub trait QueryParams {
    /// Ordered key/value pairs; absent filters are left out
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Encode an optional parameter value into a query string (without `?`)
pub fn encode_query<Q: QueryParams + ?Sized>(params: Option<&Q>) -> String {
    let Some(params) = params else {
        return String::new();
    };

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.query_pairs() {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}

/// Append a query string to a path, leaving the path alone when it is empty
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Treat `Some("")` the same as `None`
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Limit/offset pair controlling page size and position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationRequest {
    /// Page size
    pub limit: u32,
    /// Number of items to skip
    pub offset: u32,
}

impl PaginationRequest {
    /// Create a new pagination request
    pub fn new(limit: u32, offset: u32) -> Self {
        Self { limit, offset }
    }

    /// `limit` and `offset`, always present
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}

impl QueryParams for PaginationRequest {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.pairs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw(Vec<(&'static str, String)>);

    impl QueryParams for Raw {
        fn query_pairs(&self) -> Vec<(&'static str, String)> {
            self.0.clone()
        }
    }

    #[test]
    fn test_absent_params_encode_to_empty() {
        assert_eq!(encode_query::<PaginationRequest>(None), "");
    }

    #[test]
    fn test_zero_pagination_still_emits_limit_and_offset() {
        assert_eq!(
            encode_query(Some(&PaginationRequest::default())),
            "limit=0&offset=0"
        );
        assert_eq!(
            encode_query(Some(&PaginationRequest::new(10, 0))),
            "limit=10&offset=0"
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let raw = Raw(vec![("ids", "a,b c&d".to_string())]);
        assert_eq!(encode_query(Some(&raw)), "ids=a%2Cb+c%26d");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("conversations", ""), "conversations");
        assert_eq!(with_query("conversations", "limit=1&offset=0"), "conversations?limit=1&offset=0");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
    }
}
