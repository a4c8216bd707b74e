//! Typed verse records for line-delimited JSON input and output
//!
//! The upstream data is a loose dict-of-dicts; here each field is an
//! explicit optional so a verse with missing or malformed pieces still
//! round-trips. Unknown keys are preserved via flattened maps so output
//! records keep the same shape as their input line.

pub mod normalize;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::engine::Span;

/// Inclusive character range into a verse field. `(-1, -1)` is the
/// unmatched sentinel carried through to the output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    #[serde(rename = "startPosition")]
    pub start_position: i64,
    #[serde(rename = "endPosition")]
    pub end_position: i64,
}

impl Range {
    pub const UNMATCHED: Range = Range {
        start_position: -1,
        end_position: -1,
    };

    pub fn from_span(span: Option<Span>) -> Self {
        match span {
            Some(s) => Range {
                start_position: s.start as i64,
                end_position: s.end as i64,
            },
            None => Range::UNMATCHED,
        }
    }

    pub fn is_unmatched(&self) -> bool {
        self.start_position == -1 && self.end_position == -1
    }
}

/// One morphological unit of the source-language text. `range` is
/// filled by the token pass; the text is immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceToken {
    pub text: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceToken {
    pub fn new(text: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            id: id.into(),
            range: None,
            extra: Map::new(),
        }
    }
}

/// A verse-level text field. `content` is kept as a raw value because
/// upstream records sometimes carry null or non-string content; those
/// cases are skipped rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TextField {
    pub fn content_str(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }
}

/// The source-language field: text plus the ordered token list filled
/// in by the token-lookup collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaculaField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_ids: Option<Vec<SourceToken>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MaculaField {
    pub fn content_str(&self) -> Option<&str> {
        self.content.as_ref().and_then(Value::as_str)
    }
}

/// One verse's cross-lingual data: one input line, one output line.
///
/// `alignment`/`alignments` stay raw values: their element keys are
/// free-form per-language labels until the normalizer runs, and an
/// upstream LLM failure leaves a bare error string in their place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerseRecord {
    #[serde(default)]
    pub vref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsb: Option<TextField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macula: Option<MaculaField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TextField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignments: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A phrase field after span resolution: the original phrase text plus
/// the ranges it consumed. Never re-resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedPhrase {
    #[serde(rename = "original-text-value")]
    pub original_text_value: Value,
    pub ranges: Vec<Range>,
}

/// The three canonical phrase roles of an alignment triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseRole {
    /// English reference translation (semantic intermediary).
    Bridge,
    /// Original-language (Hebrew/Greek) text.
    Source,
    /// Under-resourced language translation being aligned.
    Target,
}

impl PhraseRole {
    pub const ALL: [PhraseRole; 3] = [PhraseRole::Bridge, PhraseRole::Source, PhraseRole::Target];

    /// Canonical triplet key for this role.
    pub fn canonical_key(self) -> &'static str {
        match self {
            PhraseRole::Bridge => "English phrase",
            PhraseRole::Source => "Macula phrase",
            PhraseRole::Target => "Target phrase",
        }
    }
}
