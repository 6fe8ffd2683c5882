//! Score refinement.
//!
//! Trie traversal assigns query chars greedily, left to right. When a matched char
//! repeats later in the text, a later occurrence may score better (consecutive runs,
//! word starts). [`best_scored_result`] hill-climbs over those alternatives: it moves
//! the last index as far right as it can, then nudges earlier indices forward toward
//! their successors, taking only the first candidate at each step.

use crate::index::fold_case;
use crate::results::SearchResult;
use crate::score::score_chars;
use std::collections::HashMap;
use tracing::trace;

/// A memoized refinement outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedScore {
    pub score: i32,
    pub indices: Vec<usize>,
}

/// Refinement memo keyed by scored text (or text prefix).
///
/// Scoped to one search call; not meant to be shared between searches.
#[derive(Debug, Default)]
pub struct ScoresCache {
    entries: HashMap<String, CachedScore>,
}

impl ScoresCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, text: &str) -> Option<&CachedScore> {
        self.entries.get(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps the first outcome recorded for `text`.
    fn remember(&mut self, text: String, result: &SearchResult) {
        self.entries
            .entry(text)
            .or_insert_with(|| CachedScore::from(result));
    }

    /// Records the final outcome for a whole text, replacing any prefix entry.
    fn store(&mut self, text: String, result: &SearchResult) {
        self.entries.insert(text, CachedScore::from(result));
    }
}

impl From<&SearchResult> for CachedScore {
    fn from(result: &SearchResult) -> Self {
        Self {
            score: result.score,
            indices: result.indices.clone(),
        }
    }
}

/// Returns `result` with the best-scoring index assignment the refinement walk finds.
///
/// With a non-zero `max_best_scored_results_length`, longer texts are refined against
/// their prefix of that length, and left untouched when the match ends past it.
/// The returned text is always the full, untruncated one.
///
/// Recursion depth and prefix allocations grow with how far the last index can move
/// and with repeated letters in the text, so for very long names pass a non-zero
/// length limit.
pub fn best_scored_result(
    mut result: SearchResult,
    cache: &mut ScoresCache,
    max_best_scored_results_length: usize,
) -> SearchResult {
    let Some(&last_index) = result.indices.last() else {
        return result;
    };

    let mut chars: Vec<char> = result.text.chars().collect();
    let mut full_text = None;

    if max_best_scored_results_length > 0 && chars.len() > max_best_scored_results_length {
        if last_index >= max_best_scored_results_length {
            return result;
        }
        chars.truncate(max_best_scored_results_length);
        full_text = Some(std::mem::replace(
            &mut result.text,
            chars.iter().collect(),
        ));
    }

    if result.indices.iter().any(|&i| i >= chars.len()) {
        if let Some(text) = full_text {
            result.text = text;
        }
        return result;
    }

    if let Some(cached) = cache.get(&result.text) {
        result.score = cached.score;
        result.indices = cached.indices.clone();
    } else {
        let lower: Vec<char> = chars.iter().map(|&c| fold_case(c)).collect();
        let indices = result.indices.clone();

        let mut refiner = Refiner {
            text: &chars,
            lower: &lower,
            last_index,
            cache: &mut *cache,
        };
        refiner.refine(&indices, indices.len() - 1, &mut result);

        cache.store(result.text.clone(), &result);
    }

    if let Some(text) = full_text {
        result.text = text;
    }
    result
}

struct Refiner<'a> {
    text: &'a [char],
    lower: &'a [char],
    /// Last matched index of the greedy assignment; the last index never moves left of it.
    last_index: usize,
    cache: &'a mut ScoresCache,
}

impl Refiner<'_> {
    fn refine(&mut self, indices: &[usize], pos: usize, result: &mut SearchResult) {
        if pos + 1 == indices.len() {
            let back = indices[pos];
            let start = if back == self.last_index {
                self.lower.len() - 1
            } else {
                back - 1
            };
            let wanted = self.lower[self.last_index];

            for i in (self.last_index + 1..=start).rev() {
                if self.lower[i] != wanted {
                    continue;
                }

                let prefix: String = self.text[..=i].iter().collect();
                if let Some(cached) = self.cache.get(&prefix) {
                    result.score = cached.score;
                    result.indices = cached.indices.clone();
                    return;
                }

                let mut moved = indices.to_vec();
                moved[pos] = i;
                self.adopt_if_better(&moved, result);
                self.refine(&moved, pos, result);

                self.cache.remember(prefix, result);
                break;
            }
        } else {
            let current = indices[pos];
            let next = indices[pos + 1];
            let wanted = self.lower[current];

            if let Some(i) = (current + 1..next).find(|&i| self.lower[i] == wanted) {
                let mut moved = indices.to_vec();
                moved[pos] = i;
                self.adopt_if_better(&moved, result);
                self.refine(&moved, pos, result);
            }
        }

        // Try the nearest earlier cluster that is separated by a gap.
        for i in (1..=pos).rev() {
            if indices[i] > indices[i - 1] + 1 {
                self.refine(indices, i - 1, result);
                break;
            }
        }
    }

    fn adopt_if_better(&self, indices: &[usize], result: &mut SearchResult) {
        let score = score_chars(self.text, indices);
        if score > result.score {
            result.score = score;
            result.indices = indices.to_vec();
        }
    }
}

/// Re-expresses a match found in `fulltext` against the display string `text`.
///
/// `text` is expected to be a suffix of `fulltext` (e.g. the last component of a
/// qualified name). Indices inside that suffix are shifted; otherwise the matched
/// chars are searched for greedily from the start of `text`. The returned indices
/// are relative to `fulltext` again. If the match cannot be placed inside `text`,
/// the input indices come back unchanged with `score - 1`.
pub fn rescore_text(
    fulltext: &str,
    text: &str,
    indices: &[usize],
    score: i32,
    max_best_scored_results_length: usize,
) -> SearchResult {
    let full: Vec<char> = fulltext.chars().collect();
    let display: Vec<char> = text.chars().collect();
    let offset = full.len() as i64 - display.len() as i64;

    let degraded = || {
        trace!(text, "match could not be rescored against display text");
        SearchResult::new(text.to_string(), Vec::new(), indices.to_vec(), score - 1)
    };

    let Some(&first) = indices.first() else {
        return degraded();
    };

    let text_indices = if first as i64 - offset >= 0 {
        let shifted: Option<Vec<usize>> = indices
            .iter()
            .map(|&i| {
                usize::try_from(i as i64 - offset)
                    .ok()
                    .filter(|&shifted| shifted < display.len())
            })
            .collect();
        match shifted {
            Some(shifted) => shifted,
            None => return degraded(),
        }
    } else {
        let wanted: Option<Vec<char>> = indices
            .iter()
            .map(|&i| full.get(i).map(|&c| fold_case(c)))
            .collect();
        let Some(wanted) = wanted else {
            return degraded();
        };

        let mut limit = display.len();
        if max_best_scored_results_length > 0 && limit > max_best_scored_results_length {
            limit = max_best_scored_results_length;
        }

        let mut found = Vec::with_capacity(wanted.len());
        for (i, &c) in display[..limit].iter().enumerate() {
            if found.len() == wanted.len() {
                break;
            }
            if fold_case(c) == wanted[found.len()] {
                found.push(i);
            }
        }

        if found.len() != wanted.len() {
            return degraded();
        }
        found
    };

    let initial_score = score_chars(&display, &text_indices);
    let mut cache = ScoresCache::new();
    let mut result = best_scored_result(
        SearchResult::new(text.to_string(), Vec::new(), text_indices, initial_score),
        &mut cache,
        max_best_scored_results_length,
    );

    let restored: Option<Vec<usize>> = result
        .indices
        .iter()
        .map(|&i| usize::try_from(i as i64 + offset).ok())
        .collect();
    match restored {
        Some(restored) => result.indices = restored,
        None => return degraded(),
    }

    result
}
