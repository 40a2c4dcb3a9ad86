// ============================================================
// Layer 4 — Vocabulary
// ============================================================
// Two steps:
//
//   VocabCounter  → one sequential scan over every annotation text
//                   value, question text and answer choice,
//                   counting word frequencies
//   Vocabulary    → words seen more than `min_count` times, indexed
//                   1..=V in lexicographic order; 0 is "UNK"
//
// Frequency only decides membership. Ordering is alphabetical so
// the same corpus and threshold always give the same mapping.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::data::tokenizer::tokenize;
use crate::domain::error::PreproError;

pub const UNK_WORD: &str = "UNK";
pub const UNK_ID: u32 = 0;

#[derive(Debug, Clone, Default)]
pub struct VocabCounter {
    counts: HashMap<String, usize>,
}

impl VocabCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&mut self, word: &str) {
        *self.counts.entry(word.to_string()).or_insert(0) += 1;
    }

    /// Tokenise `text` and count every token.
    pub fn count_text(&mut self, text: &str) {
        for word in tokenize(text) {
            self.count(&word);
        }
    }

    #[cfg(test)]
    pub fn frequency(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Keep words with frequency strictly greater than `min_count`.
    pub fn build(&self, min_count: usize) -> Result<Vocabulary, PreproError> {
        let mut kept: Vec<&str> = self
            .counts
            .iter()
            .filter(|&(_, &n)| n > min_count)
            .map(|(word, _)| word.as_str())
            .collect();

        if kept.is_empty() {
            return Err(PreproError::DegenerateVocabulary { min_count });
        }

        kept.sort_unstable();

        let mut index: BTreeMap<String, u32> = kept
            .into_iter()
            .zip(1u32..)
            .map(|(word, id)| (word.to_string(), id))
            .collect();
        index.insert(UNK_WORD.to_string(), UNK_ID);

        Ok(Vocabulary { index })
    }
}

/// Immutable word → index mapping. Serialises as a flat JSON object;
/// read back through `from_index` so the UNK sentinel is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Vocabulary {
    index: BTreeMap<String, u32>,
}

impl Vocabulary {
    /// Wrap a mapping read from disk. It must carry the UNK sentinel.
    pub fn from_index(index: BTreeMap<String, u32>) -> Result<Self, PreproError> {
        match index.get(UNK_WORD) {
            Some(&UNK_ID) => Ok(Self { index }),
            _ => Err(PreproError::MissingUnknownToken),
        }
    }

    /// Index of `word`, or `UNK_ID` when it is not in the vocabulary.
    pub fn get(&self, word: &str) -> u32 {
        self.index.get(word).copied().unwrap_or(UNK_ID)
    }

    pub fn lookup<S: AsRef<str>>(&self, words: &[S]) -> Vec<u32> {
        words.iter().map(|w| self.get(w.as_ref())).collect()
    }

    /// Tokenise and index in one step.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.lookup(&tokenize(text))
    }

    /// Number of entries, UNK included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[cfg(test)]
    pub fn as_map(&self) -> &BTreeMap<String, u32> {
        &self.index
    }
}
