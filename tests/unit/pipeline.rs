//! Unit tests for line-level batch processing

use serde_json::{json, Value};
use versealign::align::run::process_line;
use versealign::lookup::TokenTable;

use super::helpers::{make_tokens, FOX};

#[test]
fn test_process_line_annotates_record() {
    let line = json!({
        "vref": "GEN 1:1",
        "bsb": {"content": FOX},
        "macula": {"content": "alpha beta"},
        "target": {"content": "le renard"},
        "alignments": [
            {"English phrase": "quick brown fox", "Hebrew phrase": "beta", "French phrase": "renard"}
        ]
    })
    .to_string();

    let (out, stats) = process_line(&line, &TokenTable::default(), false);
    let record: Value = serde_json::from_str(&out).unwrap();

    let triplet = &record["alignments"][0];
    assert_eq!(triplet["English phrase"]["ranges"][0]["startPosition"], json!(4));
    assert_eq!(triplet["English phrase"]["ranges"][0]["endPosition"], json!(18));
    assert_eq!(
        triplet["Macula phrase"]["original-text-value"],
        json!("beta")
    );
    assert_eq!(triplet["Target phrase"]["ranges"][0]["startPosition"], json!(3));
    assert_eq!(stats.verses_processed, 1);
    assert_eq!(stats.phrases_attempted, 3);
    assert_eq!(stats.parse_failures, 0);
}

#[test]
fn test_process_line_uses_lookup_table() {
    let mut table = TokenTable::default();
    table.insert("GEN 1:1", make_tokens(&["alpha", "beta"]));
    let line = json!({
        "vref": "GEN 1:1",
        "macula": {"content": "alpha beta"}
    })
    .to_string();

    let (out, stats) = process_line(&line, &table, false);
    let record: Value = serde_json::from_str(&out).unwrap();

    let tokens = record["macula"]["token_ids"].as_array().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0]["range"]["startPosition"], json!(0));
    assert_eq!(tokens[0]["range"]["endPosition"], json!(4));
    assert_eq!(tokens[1]["range"]["startPosition"], json!(6));
    assert_eq!(stats.tokens_attempted, 2);
}

#[test]
fn test_process_line_unmatched_emits_sentinel_ranges() {
    let line = json!({
        "vref": "GEN 1:1",
        "bsb": {"content": "totally unrelated words"},
        "alignments": [{"English phrase": "zzzzqqqq"}]
    })
    .to_string();

    let (out, stats) = process_line(&line, &TokenTable::default(), false);
    let record: Value = serde_json::from_str(&out).unwrap();

    let ranges = &record["alignments"][0]["English phrase"]["ranges"][0];
    assert_eq!(ranges["startPosition"], json!(-1));
    assert_eq!(ranges["endPosition"], json!(-1));
    assert_eq!(stats.unmatched, 1);
}

#[test]
fn test_process_line_passes_through_invalid_json() {
    let line = "{not valid json";
    let (out, stats) = process_line(line, &TokenTable::default(), false);
    assert_eq!(out, line);
    assert_eq!(stats.parse_failures, 1);
    assert_eq!(stats.verses_processed, 0);
}

#[test]
fn test_process_line_preserves_unknown_fields() {
    let line = json!({
        "vref": "GEN 1:1",
        "bsb": {"content": "alpha", "language": "en"},
        "session": "20230922",
    })
    .to_string();

    let (out, _) = process_line(&line, &TokenTable::default(), false);
    let record: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(record["session"], json!("20230922"));
    assert_eq!(record["bsb"]["language"], json!("en"));
}

#[test]
fn test_process_line_error_marker_round_trips() {
    let line = json!({
        "vref": "GEN 1:1",
        "macula": {"content": "alpha"},
        "alignment": "Error: Maximum retries exceeded"
    })
    .to_string();

    let (out, stats) = process_line(&line, &TokenTable::default(), false);
    let record: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(record["alignment"], json!("Error: Maximum retries exceeded"));
    assert_eq!(stats.verses_skipped_alignment, 1);
}
