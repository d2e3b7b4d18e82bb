//! Lexicon index
//!
//! Groups dictionary words by length. Every bucket is sorted and free of
//! duplicates, which is the input contract of the pair discovery engine.

pub mod loader;

pub use loader::{LexiconError, load_from_file};

use crate::config::WordLengths;
use crate::core::Word;
use tracing::debug;

/// Length-bucketed, sorted word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    lengths: WordLengths,
    buckets: Vec<Vec<Word>>,
}

impl Lexicon {
    /// Create an empty lexicon
    #[must_use]
    pub fn new(lengths: WordLengths) -> Self {
        Self {
            lengths,
            buckets: vec![Vec::new(); lengths.span()],
        }
    }

    /// Build a lexicon from raw strings
    ///
    /// Entries are trimmed and case-folded. Blank entries, entries with
    /// anything other than ASCII letters, and entries outside the length
    /// bounds are skipped.
    ///
    /// # Examples
    /// ```
    /// use split_decisions::config::WordLengths;
    /// use split_decisions::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["Sinew", "screw", "it", "sinew"], WordLengths::default());
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("SCREW"));
    /// assert!(!lexicon.contains("it"));
    /// ```
    pub fn from_words<I, S>(words: I, lengths: WordLengths) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new(lengths);
        let mut skipped = 0usize;

        for raw in words {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }
            match Word::new(raw) {
                Ok(word) if lengths.contains(word.len()) => {
                    lexicon.buckets[word.len() - lengths.min()].push(word);
                }
                _ => skipped += 1,
            }
        }

        for bucket in &mut lexicon.buckets {
            bucket.sort_unstable();
            bucket.dedup();
        }

        debug!(words = lexicon.len(), skipped, "built lexicon");
        lexicon
    }

    #[inline]
    #[must_use]
    pub const fn lengths(&self) -> WordLengths {
        self.lengths
    }

    /// Sorted words of one length; empty for lengths outside the bounds
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[Word] {
        if self.lengths.contains(length) {
            &self.buckets[length - self.lengths.min()]
        } else {
            &[]
        }
    }

    /// Check membership by binary search within the word's length bucket
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let folded = word.trim().to_ascii_lowercase();
        self.bucket(folded.len())
            .binary_search_by(|w| w.text().cmp(&folded))
            .is_ok()
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Iterate over every word, shortest bucket first
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.buckets.iter().flatten()
    }

    /// Words in either lexicon, within this lexicon's length bounds
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for word in other.iter() {
            if self.lengths.contains(word.len()) {
                merged.buckets[word.len() - self.lengths.min()].push(word.clone());
            }
        }
        for bucket in &mut merged.buckets {
            bucket.sort_unstable();
            bucket.dedup();
        }
        merged
    }

    /// Words present in both lexicons
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            lengths: self.lengths,
            buckets: self
                .buckets
                .iter()
                .map(|bucket| {
                    bucket
                        .iter()
                        .filter(|word| other.contains(word.text()))
                        .cloned()
                        .collect()
                })
                .collect(),
        }
    }

    /// Consume the lexicon into `(length, sorted words)` buckets
    pub(crate) fn into_buckets(self) -> impl Iterator<Item = (usize, Vec<Word>)> {
        self.lengths.iter().zip(self.buckets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::from_words(words.iter(), WordLengths::default())
    }

    #[test]
    fn buckets_sorted_and_deduplicated() {
        let lex = lexicon(&["screw", "Sinew", "anew", "sinew", "SCREW", "bat"]);

        let five: Vec<&str> = lex.bucket(5).iter().map(Word::text).collect();
        assert_eq!(five, vec!["screw", "sinew"]);
        assert_eq!(lex.bucket(4).len(), 1);
        assert_eq!(lex.bucket(3).len(), 1);
        assert_eq!(lex.len(), 4);
    }

    #[test]
    fn skips_invalid_and_out_of_range() {
        let lex = lexicon(&["", "  ", "it", "don't", "abcdefghijklm", "crane"]);
        assert_eq!(lex.len(), 1);
        assert!(lex.bucket(13).is_empty());
        assert!(lex.bucket(2).is_empty());
    }

    #[test]
    fn respects_custom_bounds() {
        let lengths = WordLengths::new(4, 5).unwrap();
        let lex = Lexicon::from_words(["bat", "anew", "sinew", "sinews"], lengths);
        assert_eq!(lex.len(), 2);
        assert!(!lex.contains("bat"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let lex = lexicon(&["sinew"]);
        assert!(lex.contains("sinew"));
        assert!(lex.contains("SiNeW"));
        assert!(!lex.contains("screw"));
        assert!(!lex.contains(""));
    }

    #[test]
    fn union_and_intersection() {
        let large = lexicon(&["sinew", "screw", "anew"]);
        let small = lexicon(&["screw", "bat"]);

        let union = large.union(&small);
        assert_eq!(union.len(), 4);
        assert!(union.contains("bat"));

        let both = large.intersection(&small);
        assert_eq!(both.len(), 1);
        assert!(both.contains("screw"));
    }

    #[test]
    fn empty_lexicon() {
        let lex = Lexicon::new(WordLengths::default());
        assert!(lex.is_empty());
        assert_eq!(lex.iter().count(), 0);
        assert_eq!(lex.into_buckets().count(), 10);
    }
}
