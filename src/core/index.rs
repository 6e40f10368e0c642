//! Dense word ids
//!
//! Maps every vocabulary word to a small integer so feedback lookups are a
//! single table index.

use super::Word;
use rustc_hash::FxHashMap;

/// Bijective word ↔ id mapping, ids assigned in insertion order
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: Vec<Word>,
    ids: FxHashMap<Word, usize>,
}

impl WordIndex {
    /// Build an index over `words`
    ///
    /// Repeated words keep the id of their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use wordle_lookahead::core::{Word, WordIndex};
    ///
    /// let words = ["crane", "slate", "crane"].map(|w| Word::new(w).unwrap());
    /// let index = WordIndex::build(words);
    ///
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.id(&Word::new("slate").unwrap()), Some(1));
    /// ```
    pub fn build(words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = Self::default();
        for word in words {
            if index.ids.contains_key(&word) {
                continue;
            }
            index.ids.insert(word.clone(), index.words.len());
            index.words.push(word);
        }
        index
    }

    #[inline]
    #[must_use]
    pub fn id(&self, word: &Word) -> Option<usize> {
        self.ids.get(word).copied()
    }

    /// Word for an id
    ///
    /// # Panics
    /// Panics if `id >= self.len()`
    #[inline]
    #[must_use]
    pub fn word(&self, id: usize) -> &Word {
        &self.words[id]
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn ids_follow_insertion_order() {
        let index = WordIndex::build(words(&["trace", "crane", "slate"]));
        assert_eq!(index.len(), 3);
        for (id, word) in index.words().iter().enumerate() {
            assert_eq!(index.id(word), Some(id));
            assert_eq!(index.word(id), word);
        }
        assert_eq!(index.word(0).text(), "trace");
    }

    #[test]
    fn duplicates_keep_first_id() {
        let index = WordIndex::build(words(&["crane", "slate", "crane", "trace"]));
        assert_eq!(index.len(), 3);
        assert_eq!(index.id(&Word::new("crane").unwrap()), Some(0));
        assert_eq!(index.id(&Word::new("trace").unwrap()), Some(2));
    }

    #[test]
    fn missing_word_has_no_id() {
        let index = WordIndex::build(words(&["crane"]));
        assert_eq!(index.id(&Word::new("slate").unwrap()), None);
        assert!(WordIndex::build(Vec::new()).is_empty());
    }
}
