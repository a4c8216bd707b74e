//! Verse alignment driver
//!
//! Runs the two alignment passes over one verse record: the token pass
//! (source-language morphological tokens against the source text) and
//! the phrase pass (bridge/source/target phrases of each alignment
//! triplet against their respective verse texts). Each pass keeps one
//! independent masked working copy per text field. All mutable state is
//! scoped to the verse, so records are embarrassingly parallel.

pub mod args;
pub mod run;

pub use args::AlignArgs;
pub use run::run;

use serde_json::Value;

use crate::constants::MAX_TOKENS_PER_VERSE;
use crate::diagnostics::AlignStats;
use crate::engine::{match_span, WorkingText};
use crate::lookup::TokenTable;
use crate::record::normalize::normalize_alignments;
use crate::record::{PhraseRole, Range, ResolvedPhrase, VerseRecord};

/// Annotate one verse record in place and return its tallies.
pub fn align_verse(record: &mut VerseRecord, table: &TokenTable, verbose: bool) -> AlignStats {
    let mut stats = AlignStats {
        verses_processed: 1,
        ..AlignStats::default()
    };
    attach_tokens(record, table);
    token_pass(record, &mut stats);
    phrase_pass(record, &mut stats, verbose);
    stats
}

/// Install the vref's token list from the lookup table, ranges unset.
/// A vref absent from the table leaves any existing token list alone.
fn attach_tokens(record: &mut VerseRecord, table: &TokenTable) {
    if let (Some(macula), Some(tokens)) = (record.macula.as_mut(), table.get(&record.vref)) {
        macula.token_ids = Some(tokens.clone());
    }
}

/// Token pass: resolve each source token to a range of the source text,
/// threading one masked copy across the whole list. Capped at
/// MAX_TOKENS_PER_VERSE attempts per verse.
fn token_pass(record: &mut VerseRecord, stats: &mut AlignStats) {
    let Some(macula) = record.macula.as_mut() else {
        return;
    };
    let content = macula.content.as_ref().and_then(Value::as_str);
    let mut working = match content {
        Some(text) if !text.is_empty() => Some(WorkingText::new(text)),
        Some(_) => {
            eprintln!(
                "[ERROR] vref {}: macula content is an empty string, token ranges unresolved",
                record.vref
            );
            None
        }
        None => {
            eprintln!(
                "[ERROR] vref {}: macula content is missing or not a string, token ranges unresolved",
                record.vref
            );
            None
        }
    };
    let Some(tokens) = macula.token_ids.as_mut() else {
        return;
    };

    for (i, token) in tokens.iter_mut().enumerate() {
        if i >= MAX_TOKENS_PER_VERSE {
            eprintln!(
                "[WARN] vref {}: token list truncated after {} attempts",
                record.vref, MAX_TOKENS_PER_VERSE
            );
            stats.tokens_truncated_verses += 1;
            break;
        }
        if token.text.is_empty() {
            continue;
        }
        stats.tokens_attempted += 1;
        let span = working
            .as_mut()
            .and_then(|w| match_span(w, &token.text, stats));
        token.range = Some(Range::from_span(span));
    }
}

/// Phrase pass: resolve the three canonical roles of every alignment
/// triplet, one masked working copy per role threaded across the
/// verse's whole triplet list.
fn phrase_pass(record: &mut VerseRecord, stats: &mut AlignStats, verbose: bool) {
    // One working text per role, built up front from the verse-level
    // fields. None marks content that is missing, non-string or empty;
    // those roles are skipped per triplet with an error.
    let vref = record.vref.clone();
    let mut workings: [Option<WorkingText>; 3] = [
        record
            .bsb
            .as_ref()
            .and_then(|f| f.content_str())
            .filter(|s| !s.is_empty())
            .map(WorkingText::new),
        record
            .macula
            .as_ref()
            .and_then(|f| f.content_str())
            .filter(|s| !s.is_empty())
            .map(WorkingText::new),
        record
            .target
            .as_ref()
            .and_then(|f| f.content_str())
            .filter(|s| !s.is_empty())
            .map(WorkingText::new),
    ];

    // `alignments` is preferred when both spellings are present.
    let alignment = if record.alignments.is_some() {
        record.alignments.as_mut()
    } else {
        record.alignment.as_mut()
    };
    let Some(alignment) = alignment else {
        return;
    };

    // Null or a bare string marks an upstream LLM failure; skip the
    // verse wholesale, no partial processing.
    if alignment.is_null() || alignment.is_string() {
        if verbose {
            eprintln!(
                "[INFO] vref {}: skipping phrase pass, alignment data unusable: {}",
                vref, alignment
            );
        }
        stats.verses_skipped_alignment += 1;
        return;
    }

    normalize_alignments(alignment);

    let Some(triplets) = alignment.as_array_mut() else {
        eprintln!(
            "[WARN] vref {}: alignment data is neither a list nor an error marker, skipping",
            vref
        );
        stats.verses_skipped_alignment += 1;
        return;
    };

    for triplet in triplets {
        let Some(obj) = triplet.as_object_mut() else {
            eprintln!("[WARN] vref {}: non-object alignment entry, skipping", vref);
            continue;
        };
        for (idx, role) in PhraseRole::ALL.iter().enumerate() {
            let key = role.canonical_key();
            let Some(phrase_value) = obj.get(key).cloned() else {
                eprintln!("[WARN] vref {}: missing key '{}'", vref, key);
                continue;
            };
            let Some(working) = workings[idx].as_mut() else {
                eprintln!(
                    "[ERROR] vref {}: content for '{}' is missing, empty or not a string",
                    vref, key
                );
                continue;
            };
            stats.phrases_attempted += 1;
            let span = phrase_value
                .as_str()
                .and_then(|phrase| match_span(working, phrase, stats));
            let resolved = ResolvedPhrase {
                original_text_value: phrase_value,
                ranges: vec![Range::from_span(span)],
            };
            match serde_json::to_value(&resolved) {
                Ok(v) => {
                    obj.insert(key.to_string(), v);
                }
                Err(e) => {
                    eprintln!("[ERROR] vref {}: failed to encode resolved phrase: {}", vref, e);
                }
            }
        }
    }
}
