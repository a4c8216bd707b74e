//! Span alignment engine
//!
//! The core matching machinery: a masked working copy of a text
//! (`working`), exact-then-fuzzy span resolution (`matcher`), n-gram
//! candidate generation (`ngram`) and the blended similarity scorer
//! (`score`). Everything here is pure per-call state; all mutable state
//! lives in the `WorkingText` threaded through successive matches.

pub mod matcher;
pub mod ngram;
pub mod score;
pub mod working;

pub use matcher::{match_span, Span};
pub use working::WorkingText;
