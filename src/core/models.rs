use serde::{
    Deserialize,
    Serialize,
};

/// A single catalog entry. Identity is `id`; entries are never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyItem {
    pub id: u32,         // Unique, positive
    pub word: String,    // Surface form, usually kanji
    pub kana: String,    // Reading in kana
    pub meaning: String, // English gloss
    pub level: String,   // Proficiency tag such as "N3"
    pub rank: i64,       // Lower is more important
}

impl VocabularyItem {
    pub fn new(id: u32, word: &str, kana: &str, meaning: &str, level: &str, rank: i64) -> Self {
        VocabularyItem {
            id,
            word: word.to_string(),
            kana: kana.to_string(),
            meaning: meaning.to_string(),
            level: level.to_string(),
            rank,
        }
    }
}

/// Queue and learned counts, as shown on a progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub queued: usize,
    pub learned: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.queued == 0
    }
}
