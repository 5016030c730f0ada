use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use topic_scores::app::engine::ScoreEngine;
use topic_scores::cli;
use topic_scores::domain::score_writer::DEFAULT_OUTPUT_FILE;

#[derive(Parser)]
#[command(
    name = "topictool",
    version,
    about = "Topic score aggregation and collaborator exercises"
)]
struct Cli {
    /// Log debug events (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the top score of each topic and write the first one to a file
    Scores {
        /// JSON file holding an array of {"topic", "scores"} objects
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Split comma-separated text into trimmed tokens
    Tokenise { text: String },
    /// Report the character count of a text file
    Load { path: PathBuf },
    /// Clear the log if it is still before the stop time
    Clerk,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Scores {
            input,
            output,
            json,
        } => {
            let engine = ScoreEngine::default();
            cli::compute_topic_scores(&engine, input.as_deref(), &output, json)?;
        }
        Commands::Tokenise { text } => cli::tokenise_text(&text)?,
        Commands::Load { path } => cli::load_file_stats(&path)?,
        Commands::Clerk => cli::run_data_clerk()?,
    }

    Ok(())
}
