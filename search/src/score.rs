//! Match scoring.
//!
//! Indices are char positions into the scored text. Higher is better; scores can be negative.

const UNMATCHED_LETTER_BONUS: i32 = -1;
const CONSECUTIVE_LETTER_BONUS: i32 = 4;
const CAMEL_CASE_BONUS: i32 = 3;
const NO_LETTER_BONUS: i32 = 4;
const FIRST_LETTER_BONUS: i32 = 4;
const DELAYED_START_BONUS: i32 = -1;
const MIN_DELAYED_START_BONUS: i32 = -20;

/// Separators that make the following char count as a word start.
pub fn is_no_letter(c: char) -> bool {
    matches!(c, ' ' | '.' | ',' | '_' | ':' | '<' | '>' | '/' | '\\')
}

/// Scores `indices` as a match inside `text`.
pub fn score_text(text: &str, indices: &[usize]) -> i32 {
    let chars: Vec<char> = text.chars().collect();
    score_chars(&chars, indices)
}

pub(crate) fn score_chars(text: &[char], indices: &[usize]) -> i32 {
    let Some(&first) = indices.first() else {
        return 0;
    };

    let mut score = 0;

    for (i, &index) in indices.iter().enumerate() {
        if i > 0 {
            let gap = index as i32 - indices[i - 1] as i32;
            score += (gap - 1) * UNMATCHED_LETTER_BONUS;
            if gap == 1 {
                score += CONSECUTIVE_LETTER_BONUS;
            }
        }

        if index == 0 {
            score += FIRST_LETTER_BONUS;
        } else if text.get(index - 1).is_some_and(|&prev| is_no_letter(prev)) {
            score += NO_LETTER_BONUS;
        } else if text.get(index).is_some_and(|c| c.is_uppercase()) {
            let prev_is_lower = text.get(index - 1).is_some_and(|c| c.is_lowercase());
            let next_is_lower = text.get(index + 1).is_some_and(|c| c.is_lowercase());
            if prev_is_lower || next_is_lower {
                score += CAMEL_CASE_BONUS;
            }
        }
    }

    score + (first as i32 * DELAYED_START_BONUS).max(MIN_DELAYED_START_BONUS)
}
