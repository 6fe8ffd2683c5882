use symnav_core::types::NodeTypeSet;
use symnav_core::types::config::SearchSettings;

/// Runtime search limits. `0` disables a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_result_count: usize,
    pub max_best_scored_results_length: usize,
    pub refine_result_limit: usize,
    pub accepted_kinds: NodeTypeSet,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from(&SearchSettings::default())
    }
}

impl From<&SearchSettings> for SearchConfig {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            max_result_count: settings.max_result_count,
            max_best_scored_results_length: settings.max_best_scored_results_length,
            refine_result_limit: settings.refine_result_limit,
            accepted_kinds: settings.accepted_kinds,
        }
    }
}
