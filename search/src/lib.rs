//! Fuzzy symbol search.
//!
//! Indexes `(ElementId, name, NodeTypeSet)` triples in a compressed trie and answers
//! case-insensitive subsequence queries with deterministic scores.
//!
//! # Design
//!
//! - The trie is append-only: add every name, call `finish_setup()` once, then query.
//!   Reindexing means `clear()` and rebuild.
//! - `finish_setup()` annotates each edge with the lower-cased chars reachable below it
//!   (its gate); searches skip edges whose gate lacks a query char.
//! - Everything is synchronous and single-threaded. Callers must not mutate the index
//!   while a search is running; each search owns its own scores cache.

mod config;
mod engine;
mod error;
mod index;
mod query;
mod refine;
mod results;
mod score;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use error::IndexError;
pub use index::SearchIndex;
pub use query::SearchQuery;
pub use refine::{CachedScore, ScoresCache, best_scored_result, rescore_text};
pub use results::SearchResult;
pub use score::{is_no_letter, score_text};
