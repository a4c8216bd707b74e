//! Constants for the span alignment engine
//!
//! Thresholds and bounds shared by the matcher and the verse driver.

/// Filler character written over consumed regions of a working text.
/// Chosen so masked regions cannot be mistaken for verse content and
/// cannot be exact-matched by later phrases.
pub const MASK_CHAR: char = '*';

/// Minimum similarity score (exclusive, 0-100 scale) for accepting a
/// fuzzy candidate. Candidates scoring at or below this are rejected
/// and the phrase is reported as unmatched.
pub const SCORE_THRESHOLD: u32 = 30;

/// Largest n-gram length (in whitespace tokens) generated for fuzzy
/// candidate search.
pub const MAX_NGRAM_LEN: usize = 10;

/// Hard cap on tokens attempted per verse in the token pass.
/// Defensive bound against degenerate or duplicated token lists.
pub const MAX_TOKENS_PER_VERSE: usize = 1000;
