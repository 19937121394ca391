// File: src/config.rs
//! Tunable constants for index building and distractor selection.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```json
//! { "index": { "similarityCap": 30 }, "selection": { "lengthTolerance": 2 } }
//! ```

use crate::error::{DistractorError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    /// Max entries in each of the initial / rhyme / vowel lists.
    pub similarity_cap: usize,
    pub neighbor_cap: usize,
    /// Largest edit distance that still counts as a phonetic neighbor.
    pub neighbor_max_distance: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            similarity_cap: 25,
            neighbor_cap: 15,
            neighbor_max_distance: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionConfig {
    pub distractor_count: usize,
    /// Mastery at or above this is the hard tier.
    pub hard_threshold: f64,
    /// Mastery at or above this is the mastered tier.
    pub mastered_threshold: f64,
    pub length_tolerance: usize,
    /// Second pass when the strict length filter leaves too few candidates.
    pub relaxed_length_tolerance: usize,
    pub mastered_neighbor_take: usize,
    pub mastered_feature_take: usize,
    pub fallback_category_tolerance: usize,
    pub fallback_cross_category_tolerance: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            distractor_count: 3,
            hard_threshold: 0.5,
            mastered_threshold: 0.8,
            length_tolerance: 1,
            relaxed_length_tolerance: 2,
            mastered_neighbor_take: 5,
            mastered_feature_take: 3,
            fallback_category_tolerance: 1,
            fallback_cross_category_tolerance: 2,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistractorConfig {
    pub index: IndexConfig,
    pub selection: SelectionConfig,
}

impl DistractorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: DistractorConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let s = &self.selection;
        if s.distractor_count == 0 {
            return Err(DistractorError::InvalidConfig(
                "distractorCount must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&s.hard_threshold)
            || !(0.0..=1.0).contains(&s.mastered_threshold)
            || s.hard_threshold > s.mastered_threshold
        {
            return Err(DistractorError::InvalidConfig(format!(
                "tier thresholds must satisfy 0 <= hard ({}) <= mastered ({}) <= 1",
                s.hard_threshold, s.mastered_threshold
            )));
        }
        if s.relaxed_length_tolerance < s.length_tolerance {
            return Err(DistractorError::InvalidConfig(format!(
                "relaxedLengthTolerance ({}) is tighter than lengthTolerance ({})",
                s.relaxed_length_tolerance, s.length_tolerance
            )));
        }
        Ok(())
    }
}
