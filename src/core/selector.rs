// File: src/core/selector.rs
//! Phonetic candidate pools, one per mastery tier.

use crate::config::SelectionConfig;
use crate::core::features::extract_initial_sound;
use crate::core::types::PhoneticFeatureBundle;
use crate::learning::MasteryTier;
use std::collections::HashSet;

/// Raw pool for a tier, before dedup and length filtering.
pub fn tier_pool(
    bundle: &PhoneticFeatureBundle,
    tier: MasteryTier,
    config: &SelectionConfig,
) -> Vec<String> {
    match tier {
        MasteryTier::Easy => bundle.similar_initial.clone(),
        MasteryTier::Medium => bundle.similar_rhyme.clone(),
        MasteryTier::Hard => {
            // Rhymes that also share the first sound are too easy to tell apart.
            let different_onset = bundle
                .similar_rhyme
                .iter()
                .filter(|w| extract_initial_sound(w) != bundle.initial_sound);
            bundle
                .similar_vowel
                .iter()
                .chain(different_onset)
                .cloned()
                .collect()
        }
        MasteryTier::Mastered => {
            let take = config.mastered_feature_take;
            bundle
                .phonetic_neighbors
                .iter()
                .take(config.mastered_neighbor_take)
                .map(|n| n.word.clone())
                .chain(bundle.similar_initial.iter().take(take).cloned())
                .chain(bundle.similar_rhyme.iter().take(take).cloned())
                .chain(bundle.similar_vowel.iter().take(take).cloned())
                .collect()
        }
    }
}

/// Case-insensitive dedup that keeps first occurrences and drops the target.
pub fn dedupe_excluding(pool: Vec<String>, target: &str) -> Vec<String> {
    let target = target.to_lowercase();
    let mut seen = HashSet::new();
    pool.into_iter()
        .filter(|w| {
            let lower = w.to_lowercase();
            lower != target && seen.insert(lower)
        })
        .collect()
}

pub fn within_length(pool: &[String], target_len: usize, tolerance: usize) -> Vec<String> {
    pool.iter()
        .filter(|w| w.chars().count().abs_diff(target_len) <= tolerance)
        .cloned()
        .collect()
}

/// Candidates for the target at this tier, or `None` when even the relaxed
/// length filter leaves fewer than `distractor_count` of them.
pub fn phonetic_candidates(
    target: &str,
    bundle: &PhoneticFeatureBundle,
    tier: MasteryTier,
    config: &SelectionConfig,
) -> Option<Vec<String>> {
    let needed = config.distractor_count;
    let pool = dedupe_excluding(tier_pool(bundle, tier, config), target);

    let strict = within_length(&pool, bundle.length, config.length_tolerance);
    if strict.len() >= needed {
        return Some(strict);
    }
    if pool.len() < needed {
        return None;
    }

    let relaxed = within_length(&pool, bundle.length, config.relaxed_length_tolerance);
    (relaxed.len() >= needed).then_some(relaxed)
}
