//! Pair discovery command
//!
//! Runs the discovery engine over two dictionaries and summarises the result.

use crate::config::WordLengths;
use crate::core::{SplitPair, Usability};
use crate::discovery::PairFinder;
use crate::lexicon::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Pair counts for one word length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthCounts {
    pub pairs: usize,
    pub usable: usize,
}

/// Result of a discovery run
pub struct DiscoveryResult {
    pub pairs: Vec<SplitPair>,
    pub reference_words: usize,
    pub usable_words: usize,
    pub usable_pairs: usize,
    /// Pairs with exactly one usable word
    pub one_word_pairs: usize,
    pub by_length: FxHashMap<usize, LengthCounts>,
    pub lengths: WordLengths,
    pub duration: Duration,
}

/// Spinner shown while a pipeline stage runs
pub(crate) fn stage_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Discover every pair in `reference`, flagging usable ones
pub fn discover_pairs(reference: &Lexicon, usable: &Lexicon, lengths: WordLengths) -> DiscoveryResult {
    let start = Instant::now();
    let spinner = stage_spinner("Discovering split pairs");

    let merged = reference.union(usable);
    let reference_words = merged.len();
    let pairs = PairFinder::new(lengths).find_merged_pairs(merged, usable);

    spinner.finish_and_clear();

    let mut by_length: FxHashMap<usize, LengthCounts> = FxHashMap::default();
    let (mut usable_pairs, mut one_word_pairs) = (0, 0);
    for pair in &pairs {
        let counts = by_length.entry(pair.shape().length()).or_default();
        counts.pairs += 1;
        match pair.usability() {
            Usability::BothWords => {
                counts.usable += 1;
                usable_pairs += 1;
            }
            Usability::OneWord => one_word_pairs += 1,
            Usability::Neither => {}
        }
    }

    DiscoveryResult {
        usable_pairs,
        one_word_pairs,
        pairs,
        reference_words,
        usable_words: usable.len(),
        by_length,
        lengths,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_counts() {
        let lengths = WordLengths::default();
        let reference = Lexicon::from_words(
            ["sinew", "screw", "tines", "tcres", "cat", "cup", "anew"],
            lengths,
        );
        let usable = Lexicon::from_words(["sinew", "screw", "cat"], lengths);

        let result = discover_pairs(&reference, &usable, lengths);

        assert_eq!(result.pairs.len(), 3);
        assert_eq!(result.usable_pairs, 1);
        assert_eq!(result.one_word_pairs, 1);
        assert_eq!(result.reference_words, 7);
        assert_eq!(result.usable_words, 3);
        assert_eq!(result.by_length[&5], LengthCounts { pairs: 2, usable: 1 });
        assert_eq!(result.by_length[&3], LengthCounts { pairs: 1, usable: 0 });
        assert!(!result.by_length.contains_key(&4));
    }

    #[test]
    fn intersected_usable_list_narrows_usability() {
        let lengths = WordLengths::default();
        let reference = Lexicon::from_words(["sinew", "screw", "cat", "cup"], lengths);
        let usable = Lexicon::from_words(["sinew", "screw", "cat", "cup"], lengths);
        let common = Lexicon::from_words(["sinew", "cat", "cup", "dog"], lengths);

        let result = discover_pairs(&reference, &usable.intersection(&common), lengths);

        assert_eq!(result.usable_words, 3);
        assert_eq!(result.usable_pairs, 1);
        assert_eq!(result.one_word_pairs, 1);
        assert_eq!(result.by_length[&3], LengthCounts { pairs: 1, usable: 1 });
    }

    #[test]
    fn discovery_on_empty_dictionaries() {
        let lengths = WordLengths::default();
        let empty = Lexicon::new(lengths);

        let result = discover_pairs(&empty, &empty, lengths);
        assert!(result.pairs.is_empty());
        assert_eq!(result.usable_pairs, 0);
        assert!(result.by_length.is_empty());
    }
}
