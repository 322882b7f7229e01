pub mod enrichment;
pub mod lifecycle;

use std::collections::BTreeMap;

use serde::Serialize;

pub use self::lifecycle::SessionLifecycle;
use crate::{
    catalog::VocabCatalog,
    config::{
        EngineConfig,
        DEFAULT_CONTRAST_THRESHOLD,
        DEFAULT_ROOT_SUGGESTION_LIMIT,
    },
    core::{
        distance,
        utils::{
            shares_root,
            RootCharSet,
            RootChars,
        },
        VocabularyItem,
    },
    learner::LearnerState,
};

/// A proposed batch of new words plus their annotations. Nothing here is persisted.
///
/// Words without contrasts or related words have no key in the maps.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Session {
    pub new_words: Vec<VocabularyItem>,
    pub contrastive_pairs: BTreeMap<u32, Vec<VocabularyItem>>, // new id -> learned look-alikes
    pub root_suggestions: BTreeMap<u32, Vec<VocabularyItem>>,  // new id -> words sharing a character
}

impl Session {
    /// An empty session means the queue is exhausted.
    pub fn is_empty(&self) -> bool {
        self.new_words.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.new_words.iter().map(|word| word.id).collect()
    }

    pub fn contrasts_for(&self, id: u32) -> &[VocabularyItem] {
        self.contrastive_pairs.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn roots_for(&self, id: u32) -> &[VocabularyItem] {
        self.root_suggestions.get(&id).map(Vec::as_slice).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPlanner {
    pub contrast_threshold: usize,
    pub root_suggestion_limit: usize,
    pub root_chars: RootChars,
}

impl Default for SessionPlanner {
    fn default() -> Self {
        Self {
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            root_suggestion_limit: DEFAULT_ROOT_SUGGESTION_LIMIT,
            root_chars: RootChars::All,
        }
    }
}

impl From<&EngineConfig> for SessionPlanner {
    fn from(config: &EngineConfig) -> Self {
        Self {
            contrast_threshold: config.contrast_threshold,
            root_suggestion_limit: config.root_suggestion_limit,
            root_chars: config.root_chars,
        }
    }
}

impl SessionPlanner {
    /// Builds a session from the front of the queue. Pure: the same catalog and
    /// state always give the same session.
    pub fn propose(
        &self,
        catalog: &VocabCatalog,
        state: &LearnerState,
        batch_size: usize,
    ) -> Session {
        let mut session = Session::default();

        for id in state.next_batch(batch_size) {
            let Some(new_word) = catalog.get(id) else {
                continue;
            };
            session.new_words.push(new_word.clone());

            let contrasts = self.contrasts(new_word, catalog, state);
            if !contrasts.is_empty() {
                session.contrastive_pairs.insert(id, contrasts);
            }

            let roots = self.roots(new_word, catalog);
            if !roots.is_empty() {
                session.root_suggestions.insert(id, roots);
            }
        }

        session
    }

    /// Learned words whose reading is within the threshold, in learned order.
    fn contrasts(
        &self,
        new_word: &VocabularyItem,
        catalog: &VocabCatalog,
        state: &LearnerState,
    ) -> Vec<VocabularyItem> {
        state
            .learned()
            .iter()
            .filter_map(|&id| catalog.get(id))
            .filter(|learned| {
                distance::within(&new_word.kana, &learned.kana, self.contrast_threshold)
            })
            .cloned()
            .collect()
    }

    /// First matches in catalog order, not ranked by overlap.
    fn roots(&self, new_word: &VocabularyItem, catalog: &VocabCatalog) -> Vec<VocabularyItem> {
        let chars = new_word.word.root_chars(self.root_chars);
        if chars.is_empty() {
            return Vec::new();
        }

        catalog
            .iter()
            .filter(|other| other.id != new_word.id)
            .filter(|other| shares_root(&chars, &other.word, self.root_chars))
            .take(self.root_suggestion_limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::{
        catalog::{
            BuiltinSeed,
            SeedCatalog,
        },
        persistence::Storage,
    };

    fn setup(dir: &std::path::Path) -> (VocabCatalog, LearnerState) {
        let catalog = VocabCatalog::from_items(BuiltinSeed.seed().unwrap()).unwrap();
        let state = LearnerState::load(&catalog, &Storage::new(dir), "state.json").unwrap();
        (catalog, state)
    }

    #[test]
    fn test_first_session_has_roots_but_no_contrasts() {
        let dir = tempdir().unwrap();
        let (catalog, state) = setup(dir.path());

        let session = SessionPlanner::default().propose(&catalog, &state, 5);
        // 学校, 先生, 世界, 仕事, 会社
        assert_eq!(session.ids(), vec![13, 30, 5, 26, 7]);
        assert!(session.contrastive_pairs.is_empty());

        // 会社 shares 会 or 社 with 機会, 議会, 社会 first in catalog order
        let roots: Vec<u32> = session.roots_for(7).iter().map(|w| w.id).collect();
        assert_eq!(roots, vec![1, 3, 8]);
    }

    #[test]
    fn test_contrasts_follow_learned_order() {
        let dir = tempdir().unwrap();
        let (catalog, mut state) = setup(dir.path());

        // 機械 and 理解 learned; 機会 (きかい) is next
        state.commit(&[4, 2], &catalog).unwrap();
        let state_ids = state.queue().to_vec();
        let position = state_ids.iter().position(|&id| id == 1).unwrap();

        let session = SessionPlanner::default().propose(&catalog, &state, position + 1);
        let contrasts: Vec<u32> = session.contrasts_for(1).iter().map(|w| w.id).collect();
        assert_eq!(contrasts, vec![4, 2]);
    }

    #[test]
    fn test_word_without_matches_has_no_keys() {
        let catalog = VocabCatalog::from_items(vec![
            VocabularyItem::new(1, "猫", "ねこ", "cat", "N5", 1),
            VocabularyItem::new(2, "犬", "いぬ", "dog", "N5", 2),
        ])
        .unwrap();
        let dir = tempdir().unwrap();
        let state = LearnerState::load(&catalog, &Storage::new(dir.path()), "state.json").unwrap();

        let session = SessionPlanner::default().propose(&catalog, &state, 5);
        assert_eq!(session.new_words.len(), 2);
        assert!(session.contrastive_pairs.is_empty());
        assert!(session.root_suggestions.is_empty());
        assert!(session.roots_for(1).is_empty());
    }

    #[test]
    fn test_options_change_annotations() {
        let dir = tempdir().unwrap();
        let (catalog, mut state) = setup(dir.path());
        state.commit(&[5], &catalog).unwrap(); // 世界 せかい

        // 正解 せいかい is one insertion away from せかい
        let planner = SessionPlanner { root_suggestion_limit: 1, ..SessionPlanner::default() };
        let session = planner.propose(&catalog, &state, 30);
        assert_eq!(session.contrasts_for(6).len(), 1);
        assert!(session.root_suggestions.values().all(|roots| roots.len() <= 1));

        let strict = SessionPlanner { contrast_threshold: 0, ..SessionPlanner::default() };
        let session = strict.propose(&catalog, &state, 30);
        assert!(session.contrasts_for(6).is_empty());
    }

    #[test]
    fn test_propose_is_pure() {
        let dir = tempdir().unwrap();
        let (catalog, mut state) = setup(dir.path());
        state.commit(&[13, 30], &catalog).unwrap();
        let before = state.data().clone();

        let planner = SessionPlanner::default();
        let first = planner.propose(&catalog, &state, 5);
        let second = planner.propose(&catalog, &state, 5);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert_eq!(state.data(), &before);
    }
}
