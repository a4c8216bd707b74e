use anyhow::Result;
use clap::{Parser, Subcommand};
use versealign::align;

#[derive(Parser)]
#[command(name = "versealign")]
#[command(version = "0.1.0")]
#[command(about = "Recover character spans for cross-lingual verse phrase alignments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a JSONL alignment file with resolved character ranges
    Align(align::AlignArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Align(args) => {
            align::run(args)?;
        }
    }
    Ok(())
}
