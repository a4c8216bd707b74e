//! Blended string similarity scoring on a 0-100 scale
//!
//! Combines a character-level edit-distance ratio over the full strings
//! with token-sort and token-set ratios, so phrases that differ from the
//! true span only by word order, leading articles or punctuation still
//! score well. Identical strings score 100; strings sharing no
//! characters or tokens score near 0. Deterministic for fixed inputs.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

/// Token-based ratios are down-weighted slightly so a verbatim match
/// always dominates a reordered one.
const TOKEN_RATIO_WEIGHT: f64 = 0.95;

/// Similarity of `phrase` vs `candidate` as an integer in [0, 100].
pub fn similarity(phrase: &str, candidate: &str) -> u32 {
    if phrase.is_empty() && candidate.is_empty() {
        return 100;
    }
    if phrase.is_empty() || candidate.is_empty() {
        return 0;
    }

    let full = normalized_levenshtein(phrase, candidate);
    let sort = normalized_levenshtein(&sorted_tokens(phrase), &sorted_tokens(candidate));
    let set = token_set_ratio(phrase, candidate);

    let blended = full
        .max(TOKEN_RATIO_WEIGHT * sort)
        .max(TOKEN_RATIO_WEIGHT * set);
    (blended * 100.0).round().clamp(0.0, 100.0) as u32
}

/// Whitespace tokens sorted and rejoined, for order-insensitive comparison.
fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Token-set ratio: compare the sorted token intersection against each
/// side's intersection-plus-remainder. Rewards one string's tokens being
/// a subset of the other's.
fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let base = common.join(" ");
    let left = join_parts(&base, &only_a);
    let right = join_parts(&base, &only_b);

    normalized_levenshtein(&base, &left)
        .max(normalized_levenshtein(&base, &right))
        .max(normalized_levenshtein(&left, &right))
}

fn join_parts(base: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        base.to_string()
    } else if base.is_empty() {
        rest.join(" ")
    } else {
        format!("{} {}", base, rest.join(" "))
    }
}
