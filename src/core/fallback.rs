// File: src/core/fallback.rs
//! Category-based distractors, used whenever the phonetic path cannot
//! produce enough candidates.
//!
//! Each stage is a plain function over a [`FallbackContext`]. Stages run in
//! order and the first one that yields a full set wins; if none does, the
//! terminal stage's (possibly short) result is used.

use crate::config::SelectionConfig;
use crate::core::types::VocabularyEntry;
use std::collections::HashSet;
use tracing::debug;

pub struct FallbackContext<'a> {
    pub target: String,
    pub target_len: usize,
    pub category: &'a str,
    pub vocabulary: &'a [VocabularyEntry],
    pub config: &'a SelectionConfig,
}

impl<'a> FallbackContext<'a> {
    /// Returns `None` when the target is not in the vocabulary at all.
    /// `known_len` is the indexed length, when an index entry exists.
    pub fn locate(
        target: &str,
        known_len: Option<usize>,
        vocabulary: &'a [VocabularyEntry],
        config: &'a SelectionConfig,
    ) -> Option<Self> {
        let target = target.to_lowercase();
        let entry = vocabulary.iter().find(|e| e.word.to_lowercase() == target)?;
        Some(Self {
            target_len: known_len.unwrap_or_else(|| target.chars().count()),
            target,
            category: &entry.category,
            vocabulary,
            config,
        })
    }

    /// Other words (deduplicated, vocabulary order) passing `keep`.
    fn words_where(&self, keep: impl Fn(&VocabularyEntry) -> bool) -> Vec<String> {
        let mut seen = HashSet::new();
        self.vocabulary
            .iter()
            .filter(|e| keep(e))
            .filter(|e| {
                let lower = e.word.to_lowercase();
                lower != self.target && seen.insert(lower)
            })
            .map(|e| e.word.clone())
            .collect()
    }

    fn near_length(&self, word: &str, tolerance: usize) -> bool {
        word.chars().count().abs_diff(self.target_len) <= tolerance
    }
}

pub type CandidateProvider = fn(&FallbackContext) -> Vec<String>;

pub fn same_category_near_length(ctx: &FallbackContext) -> Vec<String> {
    let tolerance = ctx.config.fallback_category_tolerance;
    ctx.words_where(|e| e.category == ctx.category && ctx.near_length(&e.word, tolerance))
}

pub fn same_category_any_length(ctx: &FallbackContext) -> Vec<String> {
    ctx.words_where(|e| e.category == ctx.category)
}

pub fn any_category_near_length(ctx: &FallbackContext) -> Vec<String> {
    let tolerance = ctx.config.fallback_cross_category_tolerance;
    ctx.words_where(|e| ctx.near_length(&e.word, tolerance))
}

/// Tried in order; same-category pools always come before cross-category.
pub const PROVIDERS: [(&str, CandidateProvider); 3] = [
    ("same-category-near-length", same_category_near_length),
    ("same-category", same_category_any_length),
    ("any-category-near-length", any_category_near_length),
];

/// Used when no provider yields a full set.
pub const TERMINAL: (&str, CandidateProvider) = ("same-category-terminal", same_category_any_length);

/// Unshuffled fallback pool for the target. Empty if the target is unknown.
pub fn fallback_candidates(
    target: &str,
    known_len: Option<usize>,
    vocabulary: &[VocabularyEntry],
    config: &SelectionConfig,
) -> Vec<String> {
    let Some(ctx) = FallbackContext::locate(target, known_len, vocabulary, config) else {
        debug!(word = target, "target not in vocabulary, no distractors");
        return Vec::new();
    };

    for (name, provider) in PROVIDERS {
        let candidates = provider(&ctx);
        if candidates.len() >= config.distractor_count {
            debug!(word = target, stage = name, found = candidates.len(), "fallback stage satisfied");
            return candidates;
        }
    }

    let (name, provider) = TERMINAL;
    let candidates = provider(&ctx);
    debug!(word = target, stage = name, found = candidates.len(), "fallback exhausted");
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, category: &str) -> VocabularyEntry {
        VocabularyEntry::new(word, "", category, "")
    }

    fn vocabulary() -> Vec<VocabularyEntry> {
        vec![
            entry("Cat", "animals"),
            entry("Dog", "animals"),
            entry("Cow", "animals"),
            entry("Elephant", "animals"),
            entry("Giraffe", "animals"),
            entry("Red", "colors"),
            entry("Blue", "colors"),
            entry("Pink", "colors"),
            entry("Sun", "nature"),
        ]
    }

    #[test]
    fn locate_needs_the_word_in_the_vocabulary() {
        let vocab = vocabulary();
        let config = SelectionConfig::default();
        assert!(FallbackContext::locate("Zebra", None, &vocab, &config).is_none());

        let ctx = FallbackContext::locate("CAT", None, &vocab, &config).unwrap();
        assert_eq!(ctx.category, "animals");
        assert_eq!(ctx.target_len, 3);
    }

    #[test]
    fn stages_in_isolation() {
        let vocab = vocabulary();
        let config = SelectionConfig::default();
        let ctx = FallbackContext::locate("Cat", None, &vocab, &config).unwrap();

        assert_eq!(same_category_near_length(&ctx), vec!["Dog", "Cow"]);
        assert_eq!(same_category_any_length(&ctx), vec!["Dog", "Cow", "Elephant", "Giraffe"]);
        assert_eq!(any_category_near_length(&ctx), vec!["Dog", "Cow", "Red", "Blue", "Pink", "Sun"]);
    }

    #[test]
    fn same_category_wins_over_closer_lengths_elsewhere() {
        let vocab = vocabulary();
        let config = SelectionConfig::default();
        let pool = fallback_candidates("Cat", None, &vocab, &config);
        assert_eq!(pool, vec!["Dog", "Cow", "Elephant", "Giraffe"]);
    }

    #[test]
    fn small_category_widens_by_length() {
        let vocab = vocabulary();
        let config = SelectionConfig::default();
        let pool = fallback_candidates("Sun", None, &vocab, &config);
        assert_eq!(pool, vec!["Cat", "Dog", "Cow", "Red", "Blue", "Pink"]);
    }

    #[test]
    fn exhausted_pipeline_returns_short_same_category_pool() {
        let vocab = vec![entry("Sun", "nature"), entry("Moon", "nature"), entry("Rainbow", "sky")];
        let config = SelectionConfig::default();
        assert_eq!(fallback_candidates("Sun", None, &vocab, &config), vec!["Moon"]);
        assert!(fallback_candidates("Comet", None, &vocab, &config).is_empty());
    }
}
