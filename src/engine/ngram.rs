//! N-gram candidate generation for fuzzy fallback matching
//!
//! Candidates are every contiguous run of 1..=MAX_NGRAM_LEN whitespace
//! tokens of the current masked text, joined by a single space and
//! ordered left to right within each length. Regenerated fresh on every
//! call since the masked text changes between matches.

use crate::constants::MAX_NGRAM_LEN;

/// All whitespace-token n-grams of `text` for n in 1..=MAX_NGRAM_LEN.
/// Lengths beyond the token count simply contribute no runs.
pub fn candidates(text: &str) -> Vec<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut out = Vec::new();
    for n in 1..=MAX_NGRAM_LEN {
        for run in tokens.windows(n) {
            out.push(run.join(" "));
        }
    }
    out
}
