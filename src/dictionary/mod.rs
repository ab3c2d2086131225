use std::collections::BTreeSet;

use crate::{error::GameError, utils::corpus::RAW_CORPUS};

/// Shortest word the bank accepts
pub const MIN_WORD_LEN: usize = 4;
/// Longest word the bank accepts
pub const MAX_WORD_LEN: usize = 7;

/// Immutable set of unique lowercase words, 4 to 7 letters long.
///
/// Words are kept sorted so a seeded RNG picks the same word on every run.
#[derive(Debug, Clone)]
pub struct VocabularyBank {
    words: Vec<String>,
}

impl VocabularyBank {
    /// Build the bank from the embedded corpus
    pub fn load() -> Result<Self, GameError> {
        Self::from_corpus(RAW_CORPUS)
    }

    /// Build a bank from any whitespace separated corpus.
    ///
    /// Fails when no word survives the length filter.
    pub fn from_corpus(raw: &str) -> Result<Self, GameError> {
        let words: BTreeSet<String> = raw
            .split_whitespace()
            .map(str::to_lowercase)
            .filter(|word| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.chars().count()))
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyVocabulary {
                min: MIN_WORD_LEN,
                max: MAX_WORD_LEN,
            });
        }

        tracing::info!("Loaded {} words into vocabulary bank", words.len());

        Ok(Self {
            words: words.into_iter().collect(),
        })
    }

    /// Words whose length is one of `lengths`
    pub fn words_of_length(&self, lengths: &[usize]) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| lengths.contains(&word.chars().count()))
            .map(String::as_str)
            .collect()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    /// Get the number of words in the bank
    pub fn len(&self) -> usize {
        self.words.len()
    }
}
