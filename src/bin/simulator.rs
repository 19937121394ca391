//! Line-driven stand-in for the listening game.
//!
//! Commands on stdin:
//!   ASK <word> [mastery]   print a question; mastery defaults to the progress file
//!   STATE                  print the index load state
//!   EXIT
use clap::Parser;
use distractor_core::learning::MasteryBook;
use distractor_core::persistence::load_vocabulary;
use distractor_core::quiz::build_question;
use distractor_core::{DistractorConfig, DistractorEngine, IndexState, VocabularyEntry};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "data/vocabulary.json")]
    vocabulary: PathBuf,

    #[arg(long, default_value = "data/phonetic-index.json")]
    index: PathBuf,

    /// JSON array of {word, category, level}
    #[arg(long)]
    progress: Option<PathBuf>,

    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => DistractorConfig::load(path)?,
        None => DistractorConfig::default(),
    };
    let vocabulary = load_vocabulary(&args.vocabulary)?;
    let engine = DistractorEngine::from_file_or_degraded(&args.index, config.selection);
    let mastery = match &args.progress {
        Some(path) => MasteryBook::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "could not read progress, treating every word as new");
            MasteryBook::new()
        }),
        None => MasteryBook::new(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut rng = rand::thread_rng();

    for line in stdin.lock().lines() {
        let input = line?;
        let parts: Vec<&str> = input.split_whitespace().collect();

        match parts.first().copied().unwrap_or("") {
            "ASK" => {
                let Some(word) = parts.get(1) else {
                    writeln!(stdout, "ERROR usage: ASK <word> [mastery]")?;
                    continue;
                };
                let Some(entry) = find_entry(&vocabulary, word) else {
                    writeln!(stdout, "ERROR unknown word '{}'", word)?;
                    continue;
                };
                let level = parts
                    .get(2)
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or_else(|| mastery.level(&entry.word, &entry.category));

                let question = build_question(&engine, entry, Some(level), &vocabulary, &mut rng);
                writeln!(stdout, "QUESTION {}", serde_json::to_string(&question)?)?;
            }
            "STATE" => {
                let state = match engine.state() {
                    IndexState::Unloaded => "UNLOADED".to_string(),
                    IndexState::Loading => "LOADING".to_string(),
                    IndexState::Ready(index) => format!("READY {}", index.len()),
                    IndexState::Failed(reason) => format!("FAILED {}", reason),
                };
                writeln!(stdout, "STATE {}", state)?;
            }
            "EXIT" => break,
            "" => {}
            other => writeln!(stdout, "ERROR unknown command '{}'", other)?,
        }
        stdout.flush()?;
    }

    info!("simulator shutting down");
    Ok(())
}

fn find_entry<'a>(vocabulary: &'a [VocabularyEntry], word: &str) -> Option<&'a VocabularyEntry> {
    vocabulary.iter().find(|e| e.word.eq_ignore_ascii_case(word))
}
