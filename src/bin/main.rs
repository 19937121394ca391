//! Regenerates the phonetic index after the vocabulary changes.
//!
//! Run with: cargo run --bin phonetic_index -- --vocabulary data/vocabulary.json

use clap::Parser;
use crossterm::style::Stylize;
use distractor_core::persistence::{load_vocabulary, save_index};
use distractor_core::{DistractorConfig, IndexBuilder, IndexDiagnostics};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "phonetic_index")]
#[command(about = "Build the phonetic similarity index used for distractor selection")]
struct Args {
    /// Vocabulary JSON (array of {word, translation, category, image})
    #[arg(short, long, default_value = "data/vocabulary.json")]
    vocabulary: PathBuf,

    /// Where to write the index; a .bin extension writes bincode instead of JSON
    #[arg(short, long, default_value = "data/phonetic-index.json")]
    output: PathBuf,

    /// Optional JSON config overriding caps and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the diagnostic summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> distractor_core::Result<()> {
    let config = match &args.config {
        Some(path) => DistractorConfig::load(path)?,
        None => DistractorConfig::default(),
    };

    let vocabulary = load_vocabulary(&args.vocabulary)?;
    let index = IndexBuilder::new(config.index).build(&vocabulary);
    save_index(&index, &args.output)?;

    let diagnostics = IndexDiagnostics::from_index(&index);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        print_report(&diagnostics, args);
    }
    Ok(())
}

fn print_report(d: &IndexDiagnostics, args: &Args) {
    println!("{}", "Phonetic index".bold());
    println!("---------------------------------------------------------------");
    println!("Vocabulary: {}", args.vocabulary.display());
    println!("Index:      {}", args.output.display());
    println!("Words:      {}\n", d.word_count);

    println!("{:<12} {:>10} {:>12}", "pool", "avg size", "sparse (<3)");
    println!("{:<12} {:>10.1} {:>12}", "initial", d.avg_initial_pool, d.sparse_initial);
    println!("{:<12} {:>10.1} {:>12}", "rhyme", d.avg_rhyme_pool, d.sparse_rhyme);
    println!("{:<12} {:>10.1} {:>12}", "vowel", d.avg_vowel_pool, d.sparse_vowel);
    println!("{:<12} {:>10.1} {:>12}", "neighbors", d.avg_neighbors, "-");

    let pct = format!("{:.1}%", d.likely_fallback_pct);
    let pct = if d.likely_fallback_pct > 50.0 { pct.yellow() } else { pct.green() };
    println!("\nWords likely to need category fallback: {}", pct);
}
