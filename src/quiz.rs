// File: src/quiz.rs
use crate::core::engine::DistractorEngine;
use crate::core::types::VocabularyEntry;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// A "hear the word, pick the picture" question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningQuestion {
    /// The word that gets spoken.
    pub word: String,
    pub translation: String,
    pub image: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Merges the target with its distractors into a shuffled option list.
///
/// When the vocabulary is too small for a full set the question simply has
/// fewer options.
pub fn build_question<R: Rng + ?Sized>(
    engine: &DistractorEngine,
    entry: &VocabularyEntry,
    mastery: Option<f64>,
    vocabulary: &[VocabularyEntry],
    rng: &mut R,
) -> ListeningQuestion {
    let mut options = engine.select_distractors(&entry.word, mastery, vocabulary, rng);
    options.push(entry.word.clone());
    options.shuffle(rng);

    let correct_index = options
        .iter()
        .position(|option| *option == entry.word)
        .unwrap_or_default();

    ListeningQuestion {
        word: entry.word.clone(),
        translation: entry.translation.clone(),
        image: entry.image.clone(),
        options,
        correct_index,
    }
}
