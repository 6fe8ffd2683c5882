use crate::types::NodeTypeSet;
use serde::{Deserialize, Serialize};

/// Search settings.
///
/// A limit of `0` means "no limit" for every field that takes one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub max_result_count: usize,
    /// Results longer than this are refined against their prefix only.
    #[serde(default)]
    pub max_best_scored_results_length: usize,
    /// Past this many raw results, only the shortest ones get refined.
    #[serde(default = "default_refine_result_limit")]
    pub refine_result_limit: usize,
    #[serde(default = "NodeTypeSet::all")]
    pub accepted_kinds: NodeTypeSet,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_result_count: 0,
            max_best_scored_results_length: 0,
            refine_result_limit: default_refine_result_limit(),
            accepted_kinds: NodeTypeSet::all(),
        }
    }
}

fn default_refine_result_limit() -> usize {
    1000
}
