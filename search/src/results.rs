//! Search results types.

use std::cmp::Ordering;
use symnav_core::types::ElementId;

/// A scored match against one trie node.
///
/// `indices` are char positions into `text` where query chars matched.
/// Ordering puts higher scores first, then sorts by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub text: String,
    pub ids: Vec<ElementId>,
    pub indices: Vec<usize>,
    pub score: i32,
}

impl SearchResult {
    pub fn new(text: String, ids: Vec<ElementId>, indices: Vec<usize>, score: i32) -> Self {
        Self {
            text,
            ids,
            indices,
            score,
        }
    }
}

impl Ord for SearchResult {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.text.cmp(&other.text))
            .then_with(|| self.ids.cmp(&other.ids))
            .then_with(|| self.indices.cmp(&other.indices))
    }
}

impl PartialOrd for SearchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
