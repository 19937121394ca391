use crate::config::SelectionConfig;
use crate::core::fallback::fallback_candidates;
use crate::core::selector::phonetic_candidates;
use crate::core::types::{PhoneticIndex, VocabularyEntry};
use crate::error::Result;
use crate::learning::MasteryTier;
use crate::persistence::load_index;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;
use tracing::{debug, info, warn};

/// Where the phonetic index is in its lifecycle.
/// Anything other than `Ready` means category fallback.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    #[default]
    Unloaded,
    Loading,
    Ready(PhoneticIndex),
    /// Terminal for the life of the engine; nothing retries.
    Failed(String),
}

/// Picks wrong answers for listening questions.
///
/// Owns the index and its load state instead of keeping them in globals, so
/// several engines in different states can live side by side.
pub struct DistractorEngine {
    state: IndexState,
    config: SelectionConfig,
}

impl DistractorEngine {
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            state: IndexState::Unloaded,
            config,
        }
    }

    pub fn with_index(index: PhoneticIndex, config: SelectionConfig) -> Self {
        Self {
            state: IndexState::Ready(index),
            config,
        }
    }

    /// Loads the index at `path`, or comes up in fallback mode if it can't.
    pub fn from_file_or_degraded(path: &Path, config: SelectionConfig) -> Self {
        let mut engine = Self::new(config);
        engine.load_from_path(path);
        engine
    }

    pub fn state(&self) -> &IndexState {
        &self.state
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, IndexState::Ready(_))
    }

    pub fn index(&self) -> Option<&PhoneticIndex> {
        match &self.state {
            IndexState::Ready(index) => Some(index),
            _ => None,
        }
    }

    /// Marks a load as in flight. Selection keeps working, in fallback mode.
    pub fn begin_loading(&mut self) {
        if matches!(self.state, IndexState::Unloaded) {
            self.state = IndexState::Loading;
        }
    }

    /// Settles a load started with [`begin_loading`](Self::begin_loading).
    /// Once the engine is `Ready` or `Failed` further results are ignored:
    /// the index never changes after load and failures are not retried.
    pub fn finish_loading(&mut self, result: Result<PhoneticIndex>) {
        if matches!(self.state, IndexState::Ready(_) | IndexState::Failed(_)) {
            warn!("phonetic index already settled, ignoring load result");
            return;
        }
        self.state = match result {
            Ok(index) => {
                info!(words = index.len(), "phonetic index ready");
                IndexState::Ready(index)
            }
            Err(e) => {
                warn!(error = %e, "phonetic index unavailable, using category fallback");
                IndexState::Failed(e.to_string())
            }
        };
    }

    pub fn load_from_path(&mut self, path: &Path) {
        self.begin_loading();
        self.finish_loading(load_index(path));
    }

    /// Up to `distractor_count` distinct words other than `target`.
    ///
    /// Never fails: a missing index, a word missing from it, or thin pools
    /// all degrade to category-based picks, and a target that is not in the
    /// vocabulary yields an empty list.
    pub fn select_distractors<R: Rng + ?Sized>(
        &self,
        target: &str,
        mastery: Option<f64>,
        vocabulary: &[VocabularyEntry],
        rng: &mut R,
    ) -> Vec<String> {
        let bundle = self.index().and_then(|index| index.get(target));
        let tier = MasteryTier::from_level(mastery, &self.config);

        let mut candidates = match bundle {
            Some(bundle) => match phonetic_candidates(target, bundle, tier, &self.config) {
                Some(candidates) => {
                    debug!(word = target, ?tier, pool = candidates.len(), "phonetic distractors");
                    candidates
                }
                None => {
                    debug!(word = target, ?tier, "phonetic pool too small, falling back");
                    fallback_candidates(target, Some(bundle.length), vocabulary, &self.config)
                }
            },
            None => {
                debug!(word = target, ready = self.is_ready(), "no phonetic entry, falling back");
                fallback_candidates(target, None, vocabulary, &self.config)
            }
        };

        candidates.shuffle(rng);
        candidates.truncate(self.config.distractor_count);
        candidates
    }

    /// [`select_distractors`](Self::select_distractors) with the thread RNG.
    pub fn select_distractors_random(
        &self,
        target: &str,
        mastery: Option<f64>,
        vocabulary: &[VocabularyEntry],
    ) -> Vec<String> {
        self.select_distractors(target, mastery, vocabulary, &mut rand::thread_rng())
    }
}

impl Default for DistractorEngine {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}
