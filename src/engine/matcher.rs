//! Exact-then-fuzzy span resolution against a masked working text
//!
//! Step 1 finds the phrase as a literal substring of the current masked
//! text. Step 2 falls back to scoring every n-gram candidate of the
//! masked text and accepting the best one above SCORE_THRESHOLD. Either
//! way the matched region is masked so later phrases cannot claim the
//! same characters. Masking does not enforce left-to-right order: a
//! later phrase may still claim earlier text that remains unmasked.

use crate::constants::SCORE_THRESHOLD;
use crate::diagnostics::AlignStats;
use crate::engine::ngram::candidates;
use crate::engine::score::similarity;
use crate::engine::working::WorkingText;

/// Inclusive codepoint span into the original (unmasked) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Resolve `phrase` to a span of `state`, masking the consumed region.
///
/// Returns `None` without touching `state` or the counter when the
/// phrase or the text is empty (graceful no-op, not an error). The
/// unmatched counter is bumped only when a fuzzy candidate search ran
/// and came up short.
pub fn match_span(state: &mut WorkingText, phrase: &str, stats: &mut AlignStats) -> Option<Span> {
    if phrase.is_empty() || state.is_empty() {
        return None;
    }

    // Step 1: exact substring of the current masked text.
    let needle: Vec<char> = phrase.chars().collect();
    if let Some(start) = state.find(&needle) {
        state.mask(start, needle.len());
        return Some(Span {
            start,
            end: start + needle.len() - 1,
        });
    }

    // Step 2: fuzzy fallback over n-gram candidates. Ties on score
    // prefer the longer candidate string.
    let masked = state.masked_text();
    let mut best: Option<(u32, String)> = None;
    for cand in candidates(&masked) {
        let score = similarity(phrase, &cand);
        let better = match &best {
            None => true,
            Some((best_score, best_cand)) => {
                score > *best_score
                    || (score == *best_score
                        && cand.chars().count() > best_cand.chars().count())
            }
        };
        if better {
            best = Some((score, cand));
        }
    }

    match best {
        Some((score, cand)) if score > SCORE_THRESHOLD => {
            let cand_chars: Vec<char> = cand.chars().collect();
            match state.find(&cand_chars) {
                Some(start) => {
                    state.mask(start, cand_chars.len());
                    Some(Span {
                        start,
                        end: start + cand_chars.len() - 1,
                    })
                }
                // Candidate tokens were joined by a single space but the
                // original separator was other whitespace; no literal
                // occurrence to claim.
                None => {
                    stats.unmatched += 1;
                    None
                }
            }
        }
        Some(_) => {
            stats.unmatched += 1;
            None
        }
        // No candidates at all (fully masked or whitespace-only text).
        None => None,
    }
}
