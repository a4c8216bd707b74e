//! Diagnostic counters for the alignment pipeline
//!
//! Each verse gets its own `AlignStats` accumulator; the batch driver
//! merges them after the parallel map, so no counter is shared between
//! workers. The tallies are diagnostic only and never gate control flow.

/// Per-verse (and, after merging, run-level) alignment tallies.
#[derive(Debug, Default, Clone)]
pub struct AlignStats {
    /// Verse records processed (parsed and run through the driver).
    pub verses_processed: usize,
    /// Match attempts that found no exact or sufficiently similar span.
    pub unmatched: usize,
    /// Source tokens attempted in the token pass.
    pub tokens_attempted: usize,
    /// Verses whose token list hit the per-verse cap.
    pub tokens_truncated_verses: usize,
    /// Phrase-role match attempts in the phrase pass.
    pub phrases_attempted: usize,
    /// Verses whose phrase pass was skipped wholesale (null or error
    /// string in the alignment field).
    pub verses_skipped_alignment: usize,
    /// Input lines that were not valid JSON and were passed through.
    pub parse_failures: usize,
}

impl AlignStats {
    pub fn merge(&mut self, other: &AlignStats) {
        self.verses_processed += other.verses_processed;
        self.unmatched += other.unmatched;
        self.tokens_attempted += other.tokens_attempted;
        self.tokens_truncated_verses += other.tokens_truncated_verses;
        self.phrases_attempted += other.phrases_attempted;
        self.verses_skipped_alignment += other.verses_skipped_alignment;
        self.parse_failures += other.parse_failures;
    }

    /// Print the run-level summary once at the end of a batch.
    pub fn print_summary(&self) {
        eprintln!("\n=== Alignment Run Summary ===");
        eprintln!("  Verses processed:           {}", self.verses_processed);
        eprintln!("  Tokens attempted:           {}", self.tokens_attempted);
        eprintln!("  Phrases attempted:          {}", self.phrases_attempted);
        eprintln!("  Unmatched spans:            {}", self.unmatched);
        eprintln!(
            "  Verses skipped (alignment): {}",
            self.verses_skipped_alignment
        );
        if self.tokens_truncated_verses > 0 {
            eprintln!(
                "  Verses truncated (tokens):  {}",
                self.tokens_truncated_verses
            );
        }
        if self.parse_failures > 0 {
            eprintln!("  Unparseable input lines:    {}", self.parse_failures);
        }
        eprintln!("=============================\n");
    }
}
