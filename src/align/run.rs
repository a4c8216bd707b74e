//! Batch alignment pipeline
//!
//! Reads the input JSONL, runs the verse driver over every record with
//! a rayon worker pool (the token lookup table is built once up front
//! and shared read-only), then writes one output line per input line in
//! input order and prints the run summary. Every per-verse failure is
//! local: unparseable lines pass through unchanged.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use super::{align_verse, AlignArgs};
use crate::diagnostics::AlignStats;
use crate::lookup::{TokenTable, TsvLayout, GREEK_LAYOUT, HEBREW_LAYOUT};
use crate::record::VerseRecord;

pub fn run(args: AlignArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .context("Failed to build thread pool")?;

    let mut table = TokenTable::default();
    load_reference(&mut table, args.hebrew_tokens.as_deref(), HEBREW_LAYOUT, args.verbose);
    load_reference(&mut table, args.greek_tokens.as_deref(), GREEK_LAYOUT, args.verbose);
    if args.verbose {
        eprintln!("[INFO] token lookup table covers {} verses", table.len());
    }

    let input = File::open(&args.input)
        .with_context(|| format!("Failed to open input file {}", args.input.display()))?;
    let lines: Vec<String> = BufReader::new(input)
        .lines()
        .collect::<io::Result<_>>()
        .context("Failed to read input lines")?;

    let bar = if args.verbose {
        let bar = ProgressBar::new(lines.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap(),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let verbose = args.verbose;
    let results: Vec<(String, AlignStats)> = lines
        .par_iter()
        .map(|line| {
            let out = process_line(line, &table, verbose);
            bar.inc(1);
            out
        })
        .collect();
    bar.finish_and_clear();

    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    let mut writer = BufWriter::new(
        File::create(&out_path)
            .with_context(|| format!("Failed to create output file {}", out_path.display()))?,
    );

    let mut total = AlignStats::default();
    for (line, stats) in &results {
        writeln!(writer, "{}", line)?;
        total.merge(stats);
    }
    writer.flush()?;

    if verbose {
        eprintln!("[INFO] wrote {} records to {}", results.len(), out_path.display());
    }
    total.print_summary();
    Ok(())
}

/// Align one input line. Lines that fail to parse are passed through
/// unchanged so the batch always emits one output line per input line.
pub fn process_line(line: &str, table: &TokenTable, verbose: bool) -> (String, AlignStats) {
    let mut record: VerseRecord = match serde_json::from_str(line) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("[ERROR] passing through unparseable record: {}", e);
            let stats = AlignStats {
                parse_failures: 1,
                ..AlignStats::default()
            };
            return (line.to_string(), stats);
        }
    };
    let stats = align_verse(&mut record, table, verbose);
    match serde_json::to_string(&record) {
        Ok(out) => (out, stats),
        Err(e) => {
            eprintln!(
                "[ERROR] vref {}: failed to serialize annotated record: {}",
                record.vref, e
            );
            (line.to_string(), stats)
        }
    }
}

fn load_reference(table: &mut TokenTable, path: Option<&Path>, layout: TsvLayout, verbose: bool) {
    let Some(path) = path else {
        return;
    };
    match table.load_tsv(path, layout) {
        Ok(count) => {
            if verbose {
                eprintln!("[INFO] loaded {} tokens from {}", count, path.display());
            }
        }
        // Degrade gracefully: affected verses get no token list.
        Err(e) => eprintln!("[WARN] continuing without {}: {:#}", path.display(), e),
    }
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("alignment");
    input.with_file_name(format!("{}_final_output.jsonl", stem))
}
