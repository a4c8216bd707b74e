use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Input alignment file: line-delimited JSON, one verse record per line
    pub input: PathBuf,
    /// Output path (default: `<input stem>_final_output.jsonl`)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Hebrew token reference TSV (macula-hebrew.tsv)
    #[arg(long)]
    pub hebrew_tokens: Option<PathBuf>,
    /// Greek token reference TSV (macula-greek-SBLGNT.tsv)
    #[arg(long)]
    pub greek_tokens: Option<PathBuf>,
    /// Worker threads (0 = all cores)
    #[arg(short = 'n', long, default_value_t = 0)]
    pub num_threads: usize,
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
