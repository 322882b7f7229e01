use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use wana_kana::IsJapaneseChar;

/// Which characters of a surface form count when looking for shared roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootChars {
    /// Every character, kana included
    #[default]
    All,
    KanjiOnly,
}

impl RootChars {
    fn accepts(&self, c: char) -> bool {
        match self {
            RootChars::All => true,
            RootChars::KanjiOnly => c.is_kanji(),
        }
    }
}

pub trait RootCharSet {
    fn root_chars(&self, filter: RootChars) -> HashSet<char>;
}

impl RootCharSet for str {
    fn root_chars(&self, filter: RootChars) -> HashSet<char> {
        self.chars().filter(|c| filter.accepts(*c)).collect()
    }
}

/// Implement the trait for `String` by forwarding the method to `str`
impl RootCharSet for String {
    fn root_chars(&self, filter: RootChars) -> HashSet<char> {
        self.as_str().root_chars(filter)
    }
}

/// True when the two words have at least one root character in common.
pub fn shares_root(chars: &HashSet<char>, other_word: &str, filter: RootChars) -> bool {
    other_word.chars().any(|c| filter.accepts(c) && chars.contains(&c))
}
