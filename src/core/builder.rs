// --- File: src/core/builder.rs
use crate::config::IndexConfig;
use crate::core::features::{
    estimate_syllables, extract_initial_sound, extract_rhyme_pattern, extract_vowel_pattern,
};
use crate::core::types::{PhoneticFeatureBundle, PhoneticIndex, VocabularyEntry};
use crate::fuzzy::levenshtein::nearest_neighbors;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// Features of one word, before the similarity scan.
struct WordFeatures {
    word: String,
    lower: String,
    initial_sound: String,
    final_sound: String,
    vowel_pattern: String,
}

impl WordFeatures {
    fn extract(word: &str) -> Self {
        Self {
            word: word.to_string(),
            lower: word.to_lowercase(),
            initial_sound: extract_initial_sound(word),
            final_sound: extract_rhyme_pattern(word),
            vowel_pattern: extract_vowel_pattern(word),
        }
    }
}

/// Offline pass that turns a vocabulary list into a [`PhoneticIndex`].
///
/// Every word is compared with every other word, so a build is O(N^2). That
/// is fine for a few hundred words and is never on the request path.
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, vocabulary: &[VocabularyEntry]) -> PhoneticIndex {
        // One entry per distinct word; the first spelling seen wins.
        let mut seen = HashSet::new();
        let words: Vec<WordFeatures> = vocabulary
            .iter()
            .filter(|entry| seen.insert(entry.word.to_lowercase()))
            .map(|entry| WordFeatures::extract(&entry.word))
            .collect();

        let mut bundles = BTreeMap::new();
        for target in &words {
            bundles.insert(target.lower.clone(), self.bundle_for(target, &words));
        }

        info!(words = bundles.len(), entries = vocabulary.len(), "built phonetic index");
        PhoneticIndex::from_bundles(bundles)
    }

    fn bundle_for(&self, target: &WordFeatures, words: &[WordFeatures]) -> PhoneticFeatureBundle {
        let others = || words.iter().filter(|w| w.lower != target.lower);
        let cap = self.config.similarity_cap;

        let similar_initial = others()
            .filter(|w| w.initial_sound == target.initial_sound)
            .take(cap)
            .map(|w| w.word.clone())
            .collect();
        let similar_rhyme = others()
            .filter(|w| w.final_sound == target.final_sound)
            .take(cap)
            .map(|w| w.word.clone())
            .collect();
        let similar_vowel = others()
            .filter(|w| w.vowel_pattern == target.vowel_pattern)
            .take(cap)
            .map(|w| w.word.clone())
            .collect();
        let phonetic_neighbors = nearest_neighbors(
            &target.lower,
            others().map(|w| w.word.as_str()),
            self.config.neighbor_max_distance,
            self.config.neighbor_cap,
        );

        PhoneticFeatureBundle {
            length: target.lower.chars().count(),
            initial_sound: target.initial_sound.clone(),
            final_sound: target.final_sound.clone(),
            vowel_pattern: target.vowel_pattern.clone(),
            syllable_count: estimate_syllables(&target.lower),
            similar_initial,
            similar_rhyme,
            similar_vowel,
            phonetic_neighbors,
        }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(IndexConfig::default())
    }
}

/// A pool with fewer entries than this cannot fill a question on its own.
pub const SPARSE_POOL: usize = 3;

/// Summary of how well an index can feed the selector. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDiagnostics {
    pub word_count: usize,
    pub avg_initial_pool: f64,
    pub avg_rhyme_pool: f64,
    pub avg_vowel_pool: f64,
    pub avg_neighbors: f64,
    pub sparse_initial: usize,
    pub sparse_rhyme: usize,
    pub sparse_vowel: usize,
    /// Words where at least one similarity pool is sparse, as a percentage.
    pub likely_fallback_pct: f64,
}

impl IndexDiagnostics {
    pub fn from_index(index: &PhoneticIndex) -> Self {
        let word_count = index.len();
        if word_count == 0 {
            return Self::default();
        }

        let mut totals = [0usize; 4];
        let mut sparse = [0usize; 3];
        let mut needs_fallback = 0;

        for (word, bundle) in index.iter() {
            let pools = [
                bundle.similar_initial.len(),
                bundle.similar_rhyme.len(),
                bundle.similar_vowel.len(),
            ];
            for (i, size) in pools.iter().enumerate() {
                totals[i] += size;
                if *size < SPARSE_POOL {
                    sparse[i] += 1;
                }
            }
            totals[3] += bundle.phonetic_neighbors.len();

            if pools.iter().any(|&size| size < SPARSE_POOL) {
                debug!(word = %word, ?pools, "sparse similarity pool");
                needs_fallback += 1;
            }
        }

        let avg = |total: usize| total as f64 / word_count as f64;
        let diagnostics = Self {
            word_count,
            avg_initial_pool: avg(totals[0]),
            avg_rhyme_pool: avg(totals[1]),
            avg_vowel_pool: avg(totals[2]),
            avg_neighbors: avg(totals[3]),
            sparse_initial: sparse[0],
            sparse_rhyme: sparse[1],
            sparse_vowel: sparse[2],
            likely_fallback_pct: needs_fallback as f64 * 100.0 / word_count as f64,
        };
        info!(
            words = word_count,
            likely_fallback_pct = diagnostics.likely_fallback_pct,
            "index diagnostics"
        );
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(words: &[&str]) -> Vec<VocabularyEntry> {
        words
            .iter()
            .map(|w| VocabularyEntry::new(w, "", "animals", ""))
            .collect()
    }

    #[test]
    fn bundle_features_and_pools() {
        let index = IndexBuilder::default().build(&bank(&["Cat", "Hat", "Bat", "Cow", "Chair"]));
        let cat = index.get("cat").unwrap();

        assert_eq!(cat.length, 3);
        assert_eq!(cat.initial_sound, "c");
        assert_eq!(cat.final_sound, "at");
        assert_eq!(cat.vowel_pattern, "a");
        assert_eq!(cat.syllable_count, 1);
        assert_eq!(cat.similar_initial, vec!["Cow"]);
        assert_eq!(cat.similar_rhyme, vec!["Hat", "Bat"]);
        assert_eq!(cat.similar_vowel, vec!["Hat", "Bat"]);
        assert_eq!(cat.phonetic_neighbors[0].distance, 1);
    }

    #[test]
    fn word_never_lists_itself() {
        let index = IndexBuilder::default().build(&bank(&["Cat", "cat", "Hat", "Bat", "Rat"]));
        assert_eq!(index.len(), 4);
        for (word, bundle) in index.iter() {
            let lists = [&bundle.similar_initial, &bundle.similar_rhyme, &bundle.similar_vowel];
            for list in lists {
                assert!(list.iter().all(|w| w.to_lowercase() != *word), "{word} lists itself");
            }
            assert!(bundle.phonetic_neighbors.iter().all(|n| n.word.to_lowercase() != *word));
        }
    }

    #[test]
    fn caps_come_from_config() {
        let words: Vec<String> = (0..40).map(|i| format!("b{i}at")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let config = IndexConfig { similarity_cap: 5, neighbor_cap: 2, neighbor_max_distance: 3 };
        let index = IndexBuilder::new(config).build(&bank(&refs));

        for (_, bundle) in index.iter() {
            assert!(bundle.similar_initial.len() <= 5);
            assert!(bundle.phonetic_neighbors.len() <= 2);
        }
        let first = index.get(&words[0]).unwrap();
        assert_eq!(first.similar_initial.len(), 5);
        assert_eq!(first.similar_initial[0], words[1]);
    }

    #[test]
    fn rebuild_is_identical() {
        let vocabulary = bank(&["Cat", "Hat", "Bat", "Rat", "Dog", "Cow", "Table", "Apple"]);
        let builder = IndexBuilder::default();
        assert_eq!(builder.build(&vocabulary), builder.build(&vocabulary));
    }

    #[test]
    fn diagnostics_report_sparse_pools() {
        let index = IndexBuilder::default().build(&bank(&["Cat", "Hat", "Bat", "Rat", "Dog"]));
        let diagnostics = IndexDiagnostics::from_index(&index);

        assert_eq!(diagnostics.word_count, 5);
        // No two words share an initial sound.
        assert_eq!(diagnostics.sparse_initial, 5);
        assert_eq!(diagnostics.avg_initial_pool, 0.0);
        assert_eq!(diagnostics.likely_fallback_pct, 100.0);
        // Cat/Hat/Bat/Rat each rhyme with three others.
        assert_eq!(diagnostics.sparse_rhyme, 1);
    }

    #[test]
    fn empty_vocabulary_gives_empty_index() {
        let index = IndexBuilder::default().build(&[]);
        assert!(index.is_empty());
        assert_eq!(IndexDiagnostics::from_index(&index), IndexDiagnostics::default());
    }
}
