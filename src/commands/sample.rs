//! Pair sampling command
//!
//! Picks usable pairs for a board designer to look at, either at random or
//! ranked by a rough "interest" heuristic.

use crate::core::SplitPair;
use rand::seq::IndexedRandom;

/// How sampled pairs are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Uniformly random usable pairs
    #[default]
    Random,
    /// Highest interest score first
    Interesting,
}

const VOWELS: &[u8] = b"aeiouy";

/// Longest runs of consonants and of vowels in a word
fn letter_runs(word: &str) -> (u32, u32) {
    let (mut consonants, mut vowels) = (0u32, 0u32);
    let (mut longest_consonants, mut longest_vowels) = (0u32, 0u32);
    for letter in word.bytes() {
        if VOWELS.contains(&letter) {
            vowels += 1;
            consonants = 0;
        } else {
            consonants += 1;
            vowels = 0;
        }
        longest_consonants = longest_consonants.max(consonants);
        longest_vowels = longest_vowels.max(vowels);
    }
    (longest_consonants, longest_vowels)
}

/// Heuristic score of how interesting a pair is to solve
///
/// Starts at 1.0. Three-letter words and plurals are nudged down; long
/// consonant clusters and vowel runs are nudged up.
///
/// # Examples
/// ```
/// use split_decisions::commands::interest_score;
/// use split_decisions::core::SplitPair;
///
/// let plain = SplitPair::new("cat", "cup").unwrap();
/// let cluster = SplitPair::new("sinew", "screw").unwrap();
/// assert!(interest_score(&cluster) > interest_score(&plain));
/// ```
#[must_use]
pub fn interest_score(pair: &SplitPair) -> f64 {
    let mut score = 1.0;

    if pair.shape().length() == 3 {
        score *= 0.9;
    }
    if pair.word1().ends_with('s') || pair.word2().ends_with('s') {
        score *= 0.95;
    }

    let (c1, v1) = letter_runs(pair.word1());
    let (c2, v2) = letter_runs(pair.word2());
    let consonants = c1.max(c2);
    let vowels = v1.max(v2);

    if consonants >= 3 {
        score *= 0.8 + f64::from(consonants) * 0.1;
    }
    if vowels >= 2 {
        score *= 0.85 + f64::from(vowels) * 0.1;
    }
    score
}

/// Choose up to `count` usable pairs, returned as indices into `pairs`
#[must_use]
pub fn sample_pairs(pairs: &[SplitPair], count: usize, mode: SampleMode) -> Vec<usize> {
    let usable: Vec<usize> = pairs
        .iter()
        .enumerate()
        .filter(|(_, p)| p.usable())
        .map(|(id, _)| id)
        .collect();

    match mode {
        SampleMode::Random => usable
            .choose_multiple(&mut rand::rng(), count)
            .copied()
            .collect(),
        SampleMode::Interesting => {
            let mut scored: Vec<(f64, usize)> = usable
                .into_iter()
                .map(|id| (interest_score(&pairs[id]), id))
                .collect();
            scored.sort_by(|(s1, id1), (s2, id2)| s2.total_cmp(s1).then(id1.cmp(id2)));
            scored.into_iter().take(count).map(|(_, id)| id).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(notation: &str, usable: bool) -> SplitPair {
        notation.parse::<SplitPair>().unwrap().with_usable(usable)
    }

    #[test]
    fn letter_runs_counts() {
        assert_eq!(letter_runs("screw"), (3, 1));
        assert_eq!(letter_runs("queue"), (1, 4));
        assert_eq!(letter_runs("rhythm"), (3, 1));
    }

    #[test]
    fn score_penalties() {
        let short = pair("c(up/at)", true);
        assert!((interest_score(&short) - 0.9).abs() < 1e-9);

        let plural = pair("t(in/cr)es", true);
        assert!((interest_score(&plural) - 0.95 * 1.1).abs() < 1e-9);
    }

    #[test]
    fn score_rewards_clusters() {
        let cluster = pair("s(in/cr)ew", true);
        assert!((interest_score(&cluster) - 1.1).abs() < 1e-9);

        let vowels = pair("b(ea/ro)d", true);
        // "bead" has a two-vowel run
        assert!((interest_score(&vowels) - 1.05).abs() < 1e-9);
    }

    #[test]
    fn sample_only_usable() {
        let pairs = vec![
            pair("c(up/at)", false),
            pair("s(in/cr)ew", true),
            pair("b(on/it)e", true),
        ];

        let sampled = sample_pairs(&pairs, 10, SampleMode::Random);
        assert_eq!(sampled.len(), 2);
        assert!(sampled.iter().all(|&id| pairs[id].usable()));

        assert_eq!(sample_pairs(&pairs, 1, SampleMode::Random).len(), 1);
        assert!(sample_pairs(&pairs, 0, SampleMode::Random).is_empty());
    }

    #[test]
    fn sample_interesting_ranked() {
        let pairs = vec![
            pair("c(up/at)", true),
            pair("s(in/cr)ew", true),
            pair("b(on/it)e", true),
        ];
        let ranked = sample_pairs(&pairs, 2, SampleMode::Interesting);
        let shown: Vec<String> = ranked.iter().map(|&id| pairs[id].to_string()).collect();
        assert_eq!(shown, vec!["s(in/cr)ew", "b(on/it)e"]);
    }
}
