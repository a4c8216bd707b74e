//! Source-token lookup table keyed by verse reference
//!
//! Built once from tab-separated reference files (one layout per source
//! script family) before any parallel work begins, then consumed
//! read-only by the per-verse pipeline. A missing reference file
//! degrades gracefully: affected verses simply get no token list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use crate::record::SourceToken;

/// Column layout of one reference TSV.
#[derive(Debug, Clone, Copy)]
pub struct TsvLayout {
    pub id_col: usize,
    pub ref_col: usize,
    pub text_col: usize,
}

/// Hebrew reference table layout (macula-hebrew.tsv).
pub const HEBREW_LAYOUT: TsvLayout = TsvLayout {
    id_col: 0,
    ref_col: 1,
    text_col: 3,
};

/// Greek reference table layout (macula-greek-SBLGNT.tsv).
pub const GREEK_LAYOUT: TsvLayout = TsvLayout {
    id_col: 0,
    ref_col: 1,
    text_col: 8,
};

/// Read-only map from verse reference to its ordered token list.
#[derive(Debug, Default)]
pub struct TokenTable {
    map: FxHashMap<String, Vec<SourceToken>>,
}

impl TokenTable {
    /// Load one reference TSV into the table. The first line is a
    /// header; rows with too few columns are skipped. Trailing `!word`
    /// sub-reference suffixes are stripped from the verse reference.
    /// Returns the number of tokens loaded.
    pub fn load_tsv(&mut self, path: &Path, layout: TsvLayout) -> Result<usize> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open token reference file {}", path.display()))?;
        let reader = BufReader::new(file);

        let mut loaded = 0usize;
        for (line_no, line) in reader.lines().enumerate() {
            let line = line
                .with_context(|| format!("Failed to read {} line {}", path.display(), line_no + 1))?;
            if line_no == 0 {
                continue; // header
            }
            let parts: Vec<&str> = line.split('\t').collect();
            let (Some(&id), Some(&vref_raw), Some(&text)) = (
                parts.get(layout.id_col),
                parts.get(layout.ref_col),
                parts.get(layout.text_col),
            ) else {
                continue;
            };
            let vref = vref_raw.split('!').next().unwrap_or(vref_raw);
            self.map
                .entry(vref.to_string())
                .or_default()
                .push(SourceToken::new(text, id));
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn get(&self, vref: &str) -> Option<&Vec<SourceToken>> {
        self.map.get(vref)
    }

    pub fn insert(&mut self, vref: impl Into<String>, tokens: Vec<SourceToken>) {
        self.map.insert(vref.into(), tokens);
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
