//! Fuzzy search over a [`SearchIndex`].
//!
//! A search runs in three passes:
//! 1. Walk the trie from the root, consuming query chars greedily along each edge label
//!    and pruning edges whose gate lacks a remaining query char. A path stops at the
//!    first node where the whole query has been consumed.
//! 2. Expand each candidate path breadth-first over its subtree, emitting one raw
//!    result per node that holds accepted ids, best paths first.
//! 3. Refine every raw result with [`best_scored_result`] and sort.

use crate::config::SearchConfig;
use crate::error::IndexError;
use crate::index::{NodeId, ROOT, SearchIndex, fold_case};
use crate::query::SearchQuery;
use crate::refine::{ScoresCache, best_scored_result};
use crate::results::SearchResult;
use crate::score::score_chars;
use symnav_core::types::{ElementId, IndexedName, NodeTypeSet};
use tracing::{debug, warn};

/// A partial walk from the root.
#[derive(Clone)]
struct SearchPath {
    /// Concatenated edge labels from the root.
    text: Vec<char>,
    /// Positions in `text` of the query chars consumed so far.
    indices: Vec<usize>,
    node: NodeId,
}

impl SearchPath {
    fn root() -> Self {
        Self {
            text: Vec::new(),
            indices: Vec::new(),
            node: ROOT,
        }
    }
}

pub struct SearchEngine {
    index: SearchIndex,
    config: SearchConfig,
}

/// Create operations.
impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            index: SearchIndex::new(),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }
}

/// Mutation operations.
impl SearchEngine {
    pub fn add_entry(
        &mut self,
        name: &str,
        id: ElementId,
        types: NodeTypeSet,
    ) -> Result<(), IndexError> {
        self.index.add_entry(name, id, types)
    }

    pub fn add_indexed(&mut self, entry: &IndexedName) -> Result<(), IndexError> {
        self.index.add_entry(&entry.name, entry.id, entry.types)
    }

    pub fn finish_setup(&mut self) {
        self.index.finish_setup();
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }
}

/// Exact match operations.
impl SearchEngine {
    pub fn find(&self, name: &str) -> Option<ElementId> {
        self.index.find(name)
    }

    pub fn find_ids(&self, name: &str) -> Vec<ElementId> {
        self.index.find_ids(name)
    }
}

/// Search operations.
impl SearchEngine {
    /// Searches with the configured accepted kinds and limits.
    pub fn search(&self, query: &SearchQuery) -> Vec<SearchResult> {
        self.search_with_limits(
            query.as_str(),
            self.config.accepted_kinds,
            self.config.max_result_count,
            self.config.max_best_scored_results_length,
        )
    }

    /// Returns matches for `query` among entries whose types intersect `accepted`,
    /// best first. A limit of `0` means unlimited.
    pub fn search_with_limits(
        &self,
        query: &str,
        accepted: NodeTypeSet,
        max_result_count: usize,
        max_best_scored_results_length: usize,
    ) -> Vec<SearchResult> {
        let query: Vec<char> = query.chars().map(fold_case).collect();
        if query.is_empty() {
            return Vec::new();
        }
        if !self.index.is_frozen() {
            warn!("searching an index that was never frozen; no edge will pass its gate");
        }

        let mut paths = Vec::new();
        self.search_recursive(&SearchPath::root(), &query, accepted, &mut paths);
        let path_count = paths.len();

        let raw = self.create_scored_results(paths, accepted, max_result_count.saturating_mul(3));
        let raw_count = raw.len();
        let max_result_length = self.refine_length_cutoff(&raw);

        let mut cache = ScoresCache::new();
        let mut results: Vec<SearchResult> = raw
            .into_iter()
            .filter(|result| {
                max_result_length == 0 || result.text.chars().count() <= max_result_length
            })
            .map(|result| best_scored_result(result, &mut cache, max_best_scored_results_length))
            .collect();

        results.sort();
        if max_result_count > 0 {
            results.truncate(max_result_count);
        }

        debug!(
            query_len = query.len(),
            paths = path_count,
            raw = raw_count,
            results = results.len(),
            "fuzzy search finished"
        );

        results
    }

    fn search_recursive(
        &self,
        path: &SearchPath,
        remaining: &[char],
        accepted: NodeTypeSet,
        paths: &mut Vec<SearchPath>,
    ) {
        for &edge_id in self.index.nodes[path.node].edges.values() {
            let edge = &self.index.edges[edge_id];

            if !accepted.intersects_with(self.index.nodes[edge.target].contained_types) {
                continue;
            }
            if !edge.passes_gate(remaining) {
                continue;
            }

            let mut text = path.text.clone();
            text.extend_from_slice(&edge.label);
            let mut current = SearchPath {
                text,
                indices: path.indices.clone(),
                node: edge.target,
            };

            let mut consumed = 0;
            for (i, &c) in edge.label.iter().enumerate() {
                if consumed == remaining.len() {
                    break;
                }
                if fold_case(c) == remaining[consumed] {
                    current.indices.push(path.text.len() + i);
                    consumed += 1;
                }
            }

            if consumed == remaining.len() {
                paths.push(current);
            } else {
                self.search_recursive(&current, &remaining[consumed..], accepted, paths);
            }
        }
    }

    /// Expands candidate paths into raw results, stopping once `max_results` exist.
    fn create_scored_results(
        &self,
        paths: Vec<SearchPath>,
        accepted: NodeTypeSet,
        max_results: usize,
    ) -> Vec<SearchResult> {
        let mut scored: Vec<(i32, SearchPath)> = paths
            .into_iter()
            .map(|path| (score_chars(&path.text, &path.indices), path))
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let mut results = Vec::new();

        for (_, path) in scored {
            let mut current = vec![path];

            while !current.is_empty() {
                let mut next = Vec::new();

                for path in current {
                    let node = &self.index.nodes[path.node];

                    if !node.element_ids.is_empty() && accepted.intersects_with(node.contained_types)
                    {
                        let ids: Vec<ElementId> = node
                            .element_ids
                            .iter()
                            .filter(|(_, types)| accepted.intersects_with(**types))
                            .map(|(id, _)| *id)
                            .collect();

                        if !ids.is_empty() {
                            results.push(SearchResult::new(
                                path.text.iter().collect(),
                                ids,
                                path.indices.clone(),
                                score_chars(&path.text, &path.indices),
                            ));

                            if max_results > 0 && results.len() >= max_results {
                                results.sort();
                                return results;
                            }
                        }
                    }

                    for &edge_id in node.edges.values() {
                        let edge = &self.index.edges[edge_id];
                        let mut text = path.text.clone();
                        text.extend_from_slice(&edge.label);
                        next.push(SearchPath {
                            text,
                            indices: path.indices.clone(),
                            node: edge.target,
                        });
                    }
                }

                current = next;
            }
        }

        results.sort();
        results
    }

    /// Length of the `refine_result_limit`-th shortest result, or `0` when all fit.
    fn refine_length_cutoff(&self, results: &[SearchResult]) -> usize {
        let limit = self.config.refine_result_limit;
        if limit == 0 || results.len() <= limit {
            return 0;
        }

        let mut lengths: Vec<usize> = results
            .iter()
            .map(|result| result.text.chars().count())
            .collect();
        lengths.sort_unstable();
        lengths[limit]
    }
}
