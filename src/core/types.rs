// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the vocabulary bank. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub word: String,
    /// Hebrew translation shown alongside the question.
    pub translation: String,
    pub category: String,
    /// Emoji used as the picture for the word.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl VocabularyEntry {
    pub fn new(word: &str, translation: &str, category: &str, image: &str) -> Self {
        Self {
            word: word.to_string(),
            translation: translation.to_string(),
            category: category.to_string(),
            image: image.to_string(),
            image_url: None,
        }
    }
}

/// A word within a small edit distance of the indexed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticNeighbor {
    pub word: String,
    pub distance: usize,
}

/// Everything the selector needs to know about a single word.
/// This is the "value" in the persisted index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticFeatureBundle {
    pub length: usize,
    pub initial_sound: String,
    /// The rhyme pattern: the last 1-3 characters.
    pub final_sound: String,
    pub vowel_pattern: String,
    pub syllable_count: usize,
    pub similar_initial: Vec<String>,
    pub similar_rhyme: Vec<String>,
    pub similar_vowel: Vec<String>,
    /// Sorted ascending by distance.
    pub phonetic_neighbors: Vec<PhoneticNeighbor>,
}

/// Lowercase word -> feature bundle. Immutable once built or loaded.
///
/// Backed by a `BTreeMap` so the serialized file has a stable key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneticIndex {
    bundles: BTreeMap<String, PhoneticFeatureBundle>,
}

impl PhoneticIndex {
    pub(crate) fn from_bundles(bundles: BTreeMap<String, PhoneticFeatureBundle>) -> Self {
        Self { bundles }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, word: &str) -> Option<&PhoneticFeatureBundle> {
        self.bundles.get(&word.to_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PhoneticFeatureBundle)> {
        self.bundles.iter()
    }
}
