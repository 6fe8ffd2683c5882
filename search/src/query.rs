//! Search query types.

/// Query type for search.
///
/// Matching is a case-insensitive subsequence match over indexed names.
#[derive(Debug, Clone)]
pub enum SearchQuery {
    /// Fuzzy matching search.
    Fuzzy(String),
}

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        match self {
            SearchQuery::Fuzzy(pattern) => pattern,
        }
    }
}
