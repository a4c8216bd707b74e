//! Masked working copy of one text field
//!
//! A `WorkingText` is created at the start of a field's alignment pass
//! and threaded through successive match calls. Masking overwrites a
//! region with `MASK_CHAR` without changing the length, so codepoint
//! offsets computed against the unmasked original stay valid for the
//! whole pass.

use crate::constants::MASK_CHAR;

/// Mutable masked copy of one verse field, codepoint-indexed.
#[derive(Debug, Clone)]
pub struct WorkingText {
    chars: Vec<char>,
}

impl WorkingText {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Length in codepoints. Invariant across any number of mask calls.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current masked state as a string (used for n-gram generation).
    pub fn masked_text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Codepoint offset of the first occurrence of `needle`, searched
    /// over the current masked state.
    pub fn find(&self, needle: &[char]) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.chars.len() {
            return None;
        }
        self.chars.windows(needle.len()).position(|w| w == needle)
    }

    /// Overwrite `len` codepoints starting at `start` with the mask
    /// character. The region must lie within the text.
    pub fn mask(&mut self, start: usize, len: usize) {
        for c in &mut self.chars[start..start + len] {
            *c = MASK_CHAR;
        }
    }
}
