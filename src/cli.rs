use crate::adapters::fs::reader::TextFileSource;
use crate::adapters::log::TracingFileLog;
use crate::app::dto::ScoresResponse;
use crate::app::engine::{ScoreEngine, load_topics_from_json, sample_topics};
use crate::domain::data_clerk::{DataClerk, STOP_TIME};
use crate::domain::data_processor::BasicDataProcessor;
use crate::domain::file_loader::FileLoader;
use crate::domain::tokeniser::StringTokeniser;
use anyhow::Result;
use std::path::Path;

/// Compute top scores for the topics in `input` (or the built-in sample) and
/// write the first one to `output`.
pub fn compute_topic_scores(
    engine: &ScoreEngine,
    input: Option<&Path>,
    output: &Path,
    as_json: bool,
) -> Result<()> {
    let topics = match input {
        Some(path) => load_topics_from_json(path)?,
        None => sample_topics(),
    };
    let response = engine.run(&topics, output)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_scores(&response, output);
    }
    Ok(())
}

fn print_scores(response: &ScoresResponse, output: &Path) {
    println!("Top scores for {} topic(s):", response.topic_count);
    println!("{}", "=".repeat(40));
    for (i, report) in response.top_scores.iter().enumerate() {
        match report.top_score {
            Some(score) => println!("{}. {:<20} {:>6}", i + 1, report.topic, score),
            None => println!("{}. {:<20} {:>6}", i + 1, report.topic, "-"),
        }
    }
    match &response.written {
        Some(line) => println!("\nWrote \"{}\" to {}", line, output.display()),
        None => println!("\nNothing written"),
    }
}

pub fn tokenise_text(text: &str) -> Result<()> {
    let tokens = StringTokeniser::new().tokenise(text);
    println!("Tokens: {:?}", tokens);
    Ok(())
}

/// Print the character count of `path`, both as loaded whole and as trimmed lines.
pub fn load_file_stats(path: &Path) -> Result<()> {
    let mut loader = FileLoader::new(path);
    let size = loader.load_file(path);
    let trimmed = BasicDataProcessor::new(Box::new(TextFileSource::new())).load_data(path);

    println!("File: {}", path.display());
    println!("  Lines: {}", loader.lines().len());
    println!("  Characters: {}", size);
    println!("  Characters (trimmed lines): {}", trimmed);
    Ok(())
}

pub fn run_data_clerk() -> Result<()> {
    let clerk = DataClerk::new(Box::new(TracingFileLog));
    if clerk.process_data() {
        println!("Data processed");
    } else {
        println!("Too late to process data (stop time {})", STOP_TIME);
    }
    Ok(())
}
