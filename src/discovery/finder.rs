//! Rotation-based pair discovery
//!
//! Comparing every word against every other word is quadratic per split
//! position. Instead each length bucket is sorted so that the split window
//! sits at the end of every word: candidates then share their first `l - 2`
//! letters and appear next to each other, and a short forward sweep finds
//! them. Rotating every word right by one letter and re-sorting moves the
//! window one position towards the front of the original word.

use crate::config::WordLengths;
use crate::core::{Shape, SplitPair, Usability, Word};
use crate::lexicon::Lexicon;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Finds every split-decision pair in a dictionary
pub struct PairFinder {
    lengths: WordLengths,
}

impl PairFinder {
    #[must_use]
    pub const fn new(lengths: WordLengths) -> Self {
        Self { lengths }
    }

    /// Discover all pairs in `reference`, flagging those made of usable words
    ///
    /// Usable words missing from `reference` are added to it first. The
    /// result is sorted in prompt order: length, split index, split letters,
    /// then solution.
    ///
    /// # Examples
    /// ```
    /// use split_decisions::config::WordLengths;
    /// use split_decisions::discovery::PairFinder;
    /// use split_decisions::lexicon::Lexicon;
    ///
    /// let lengths = WordLengths::default();
    /// let reference = Lexicon::from_words(["sinew", "screw", "anew"], lengths);
    /// let usable = Lexicon::from_words(["sinew", "screw"], lengths);
    ///
    /// let pairs = PairFinder::new(lengths).find_pairs(&reference, &usable);
    /// assert_eq!(pairs.len(), 1);
    /// assert_eq!(pairs[0].to_string(), "s(in/cr)ew");
    /// assert!(pairs[0].usable());
    /// ```
    #[must_use]
    pub fn find_pairs(&self, reference: &Lexicon, usable: &Lexicon) -> Vec<SplitPair> {
        self.find_merged_pairs(reference.union(usable), usable)
    }

    /// Discover all pairs in a reference lexicon that already holds every
    /// usable word
    ///
    /// The lexicon is consumed as the rotation buffer.
    #[must_use]
    pub fn find_merged_pairs(&self, merged: Lexicon, usable: &Lexicon) -> Vec<SplitPair> {
        let started = Instant::now();

        let buckets: Vec<(usize, Vec<Word>)> = merged
            .into_buckets()
            .filter(|(length, _)| self.lengths.contains(*length))
            .collect();

        let mut pairs: Vec<SplitPair> = buckets
            .into_par_iter()
            .flat_map_iter(|(length, words)| {
                let bucket_started = Instant::now();
                let bucket_size = words.len();
                let found = find_bucket_pairs(length, words, usable.bucket(length));
                debug!(
                    length,
                    words = bucket_size,
                    pairs = found.len(),
                    elapsed_ms = bucket_started.elapsed().as_millis(),
                    "searched length bucket"
                );
                found
            })
            .collect();

        pairs.par_sort_unstable();

        info!(
            pairs = pairs.len(),
            usable = pairs.iter().filter(|p| p.usable()).count(),
            elapsed_ms = started.elapsed().as_millis(),
            "pair discovery complete"
        );
        pairs
    }
}

/// Find the pairs within one sorted, duplicate-free bucket of `length`-letter words
///
/// `usable` must be sorted. The bucket is consumed as the rotation buffer.
fn find_bucket_pairs(length: usize, words: Vec<Word>, usable: &[Word]) -> Vec<SplitPair> {
    let mut pairs = Vec::new();
    if words.len() < 2 || length < 3 {
        return pairs;
    }
    debug_assert!(words.iter().all(|w| w.len() == length));
    debug_assert!(words.windows(2).all(|w| w[0] < w[1]));

    let mut rotated: Vec<Box<[u8]>> = words.iter().map(|w| Box::from(w.bytes())).collect();
    drop(words);

    let prefix = length - 2;
    let last_rotation = length - 2;

    for rotation in 0..=last_rotation {
        let shape = Shape::new(length, last_rotation - rotation);

        for (i, base) in rotated.iter().enumerate() {
            for next in &rotated[i + 1..] {
                // Sorted order: once the shared prefix breaks it stays broken
                if base[..prefix] != next[..prefix] {
                    break;
                }
                // Differing at only one of the two letters means a narrower
                // split, which another rotation does not catch either
                if base[prefix] != next[prefix] && base[prefix + 1] != next[prefix + 1] {
                    pairs.push(unrotated_pair(next, base, rotation, shape, usable));
                }
            }
        }

        if rotation < last_rotation {
            for word in &mut rotated {
                word.rotate_right(1);
            }
            rotated.sort_unstable();
        }
    }

    pairs
}

/// Undo `rotation` right-rotations and build the pair
///
/// `later` sorts after `earlier`, so its split comes first in the pair.
fn unrotated_pair(
    later: &[u8],
    earlier: &[u8],
    rotation: usize,
    shape: Shape,
    usable: &[Word],
) -> SplitPair {
    let restore = |rotated: &[u8]| -> Vec<u8> {
        let mut word = rotated.to_vec();
        word.rotate_left(rotation);
        word
    };
    let word1 = restore(later);
    let word2 = restore(earlier);

    let is_usable = |word: &[u8]| usable.binary_search_by(|w| w.bytes().cmp(word)).is_ok();
    let usability = Usability::from_words(is_usable(&word1), is_usable(&word2));

    SplitPair::from_parts(ascii_string(&word1), ascii_string(&word2), shape, usability)
}

fn ascii_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
