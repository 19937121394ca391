// File: src/learning.rs
use crate::config::SelectionConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// How hard the distractors should be. Rises with mastery: a learner who
/// already knows a word gets options that sound more like it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MasteryTier {
    /// Distractors only share the first sound.
    Easy,
    /// Distractors rhyme.
    Medium,
    /// Same vowels, or rhymes that start differently.
    Hard,
    /// A mix of every pool plus edit-distance neighbors.
    Mastered,
}

impl MasteryTier {
    /// Missing, zero, negative and NaN levels are all the easy tier.
    pub fn from_level(level: Option<f64>, config: &SelectionConfig) -> Self {
        match level {
            Some(m) if m >= config.mastered_threshold => MasteryTier::Mastered,
            Some(m) if m >= config.hard_threshold => MasteryTier::Hard,
            Some(m) if m > 0.0 => MasteryTier::Medium,
            _ => MasteryTier::Easy,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasteryRecord {
    pub word: String,
    pub category: String,
    pub level: f64,
}

/// Mastery per (word, category), as reported by progress tracking.
/// Keys are case-insensitive; unknown pairs read as 0.
#[derive(Debug, Clone, Default)]
pub struct MasteryBook {
    levels: HashMap<(String, String), f64>,
}

impl MasteryBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let records: Vec<MasteryRecord> = serde_json::from_reader(reader)?;
        let mut book = Self::new();
        for record in records {
            book.record(&record.word, &record.category, record.level);
        }
        Ok(book)
    }

    /// Stores a level, clamped to [0, 1]. NaN is stored as 0.
    pub fn record(&mut self, word: &str, category: &str, level: f64) {
        let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
        self.levels.insert(Self::key(word, category), level);
    }

    pub fn level(&self, word: &str, category: &str) -> f64 {
        self.levels
            .get(&Self::key(word, category))
            .copied()
            .unwrap_or(0.0)
    }

    fn key(word: &str, category: &str) -> (String, String) {
        (word.to_lowercase(), category.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        let config = SelectionConfig::default();
        let tier = |m| MasteryTier::from_level(m, &config);

        assert_eq!(tier(None), MasteryTier::Easy);
        assert_eq!(tier(Some(0.0)), MasteryTier::Easy);
        assert_eq!(tier(Some(-0.3)), MasteryTier::Easy);
        assert_eq!(tier(Some(f64::NAN)), MasteryTier::Easy);
        assert_eq!(tier(Some(0.01)), MasteryTier::Medium);
        assert_eq!(tier(Some(0.49)), MasteryTier::Medium);
        assert_eq!(tier(Some(0.5)), MasteryTier::Hard);
        assert_eq!(tier(Some(0.79)), MasteryTier::Hard);
        assert_eq!(tier(Some(0.8)), MasteryTier::Mastered);
        assert_eq!(tier(Some(1.5)), MasteryTier::Mastered);
    }

    #[test]
    fn book_defaults_to_zero_and_clamps() {
        let mut book = MasteryBook::new();
        assert_eq!(book.level("Cat", "animals"), 0.0);

        book.record("Cat", "Animals", 1.7);
        book.record("Dog", "animals", f64::NAN);
        assert_eq!(book.level("cat", "animals"), 1.0);
        assert_eq!(book.level("dog", "animals"), 0.0);
        assert_eq!(book.level("cat", "colors"), 0.0);
    }
}
