//! Key and value normalization for phrase-alignment triplets
//!
//! Upstream alignment objects carry free-form per-language keys like
//! "Hebrew phrase" or "[Tok Pisin phrase]". Before the phrase pass every
//! triplet's keys are canonicalized to the three fixed roles and its
//! values cleaned of stray brackets. Normalization is idempotent:
//! already-canonical keys map to themselves.

use serde_json::{Map, Value};

use crate::record::PhraseRole;

/// Substring table mapping recognized language names to canonical roles.
/// First match wins; unrecognized keys pass through unchanged.
const KEY_ROLES: &[(&str, PhraseRole)] = &[
    ("Hebrew", PhraseRole::Source),
    ("Greek", PhraseRole::Source),
    ("Macula", PhraseRole::Source),
    ("English", PhraseRole::Bridge),
    ("Spanish", PhraseRole::Target),
    ("French", PhraseRole::Target),
    ("Tok", PhraseRole::Target),
    ("Target", PhraseRole::Target),
];

/// Canonicalize a triplet key by recognized language-name substring.
pub fn normalize_key(key: &str) -> String {
    for (needle, role) in KEY_ROLES {
        if key.contains(needle) {
            return role.canonical_key().to_string();
        }
    }
    key.to_string()
}

/// Strip square brackets and surrounding whitespace.
pub fn clean_brackets(s: &str) -> String {
    s.replace('[', "").replace(']', "").trim().to_string()
}

/// Clean a triplet value: null becomes an empty string, booleans are
/// stringified, list items and strings get bracket-stripped. Other
/// value types pass through unchanged.
pub fn clean_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::Bool(b) => Value::String(b.to_string()),
        Value::String(s) => Value::String(clean_brackets(s)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|v| match v {
                    Value::String(s) => Value::String(clean_brackets(s)),
                    other => Value::String(other.to_string()),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Rewrite one triplet object with cleaned, canonicalized keys and
/// cleaned values.
pub fn normalize_triplet(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    for (key, value) in obj {
        let clean_key = clean_brackets(key);
        out.insert(normalize_key(&clean_key), clean_value(value));
    }
    out
}

/// Normalize every triplet object of an alignment list in place.
/// Non-object elements are left as-is for the driver to skip.
pub fn normalize_alignments(value: &mut Value) {
    if let Value::Array(items) = value {
        for item in items {
            if let Value::Object(obj) = item {
                *obj = normalize_triplet(obj);
            }
        }
    }
}
