//! Display data for a proposed session.
//!
//! Sentences and romanization come from outside collaborators; nothing produced
//! here is stored or checked against the learner state.

use serde::Serialize;
use wana_kana::{
    ConvertJapanese,
    IsJapaneseChar,
    IsJapaneseStr,
};

use super::Session;
use crate::core::VocabularyItem;

pub trait Transliterate {
    fn transliterate(&self, text: &str) -> String;
}

pub trait SentenceSource {
    fn sentences(&self, word: &str) -> Vec<String>;
}

/// Romanizes kana runs with wana_kana and leaves everything else untouched,
/// joining runs with spaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct RomajiTransliterator;

impl Transliterate for RomajiTransliterator {
    fn transliterate(&self, text: &str) -> String {
        let mut runs: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_is_kana: Option<bool> = None;

        for c in text.chars() {
            let is_kana = c.is_kana();
            if current_is_kana.is_some_and(|k| k != is_kana) {
                runs.push(std::mem::take(&mut current));
            }
            current_is_kana = Some(is_kana);
            current.push(c);
        }
        if !current.is_empty() {
            runs.push(current);
        }

        runs.iter()
            .map(|run| if run.as_str().is_kana() { run.as_str().to_romaji() } else { run.clone() })
            .filter(|run| !run.trim().is_empty())
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Three fixed example sentences per word.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateSentences;

impl SentenceSource for TemplateSentences {
    fn sentences(&self, word: &str) -> Vec<String> {
        vec![
            format!("これは「{}」を使った例文です。", word),
            format!("「{}」はとても重要です。", word),
            format!("私は「{}」が好きです。", word),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExampleSentence {
    pub text: String,
    pub romanized: String,
}

/// One new word with everything a front end shows next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCard {
    pub item: VocabularyItem,
    pub examples: Vec<ExampleSentence>,
    pub contrasts: Vec<VocabularyItem>,
    pub roots: Vec<VocabularyItem>,
}

pub fn enrich(
    session: &Session,
    sentences: &dyn SentenceSource,
    transliterator: &dyn Transliterate,
) -> Vec<WordCard> {
    session
        .new_words
        .iter()
        .map(|item| WordCard {
            item: item.clone(),
            examples: sentences
                .sentences(&item.word)
                .into_iter()
                .map(|text| {
                    let romanized = transliterator.transliterate(&text);
                    ExampleSentence { text, romanized }
                })
                .collect(),
            contrasts: session.contrasts_for(item.id).to_vec(),
            roots: session.roots_for(item.id).to_vec(),
        })
        .collect()
}
