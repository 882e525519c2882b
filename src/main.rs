use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use docfeed::build_feed;

#[derive(Debug, Parser)]
#[command(
    name = "docfeed",
    disable_help_subcommand = true,
    about = "Build a search-index feed from delimited job postings",
    long_about = "Read a delimited file of job postings and write one put/fields JSON \
document per row, ready for search-index ingestion. The run either completes \
fully or exits non-zero; a partially written feed must be discarded."
)]
struct Cli {
    /// Delimited input file with `position` and `description` columns.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Destination for the line-delimited JSON feed.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let written = build_feed(&cli.input, &cli.output)?;
    println!("wrote {written} documents to {}", cli.output.display());
    Ok(())
}
