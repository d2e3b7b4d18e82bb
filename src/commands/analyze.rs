//! Prompt analysis command
//!
//! Groups discovered pairs by prompt and computes mistakeables and
//! constraints.

use super::discover::stage_spinner;
use crate::ambiguity::{AmbiguityFinder, PairAnalysis, group_by_prompt};
use crate::config::{AnalysisPolicy, WordLengths};
use crate::core::{SplitPair, Usability};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of analysing a prompt-sorted pair list
pub struct AnalysisResult {
    pub analyses: Vec<PairAnalysis>,
    pub groups: usize,
    pub ambiguous_groups: usize,
    pub largest_group: usize,
    /// Group size -> number of groups of that size
    pub group_sizes: FxHashMap<usize, usize>,
    /// Constraint size -> number of analysed pairs whose minimal constraints have that size
    pub constraint_sizes: FxHashMap<usize, usize>,
    pub unconstrained: usize,
    pub policy: AnalysisPolicy,
    pub min_usability: Usability,
    pub duration: Duration,
}

/// Analyse every prompt group of `pairs`
///
/// `pairs` must be in prompt order, as returned by discovery. Pairs reaching
/// `min_usability` count as usable under `policy`.
#[must_use]
pub fn analyze_pairs(
    pairs: &[SplitPair],
    lengths: WordLengths,
    policy: AnalysisPolicy,
    min_usability: Usability,
) -> AnalysisResult {
    let start = Instant::now();
    let spinner = stage_spinner("Analysing prompt groups");

    let groups = group_by_prompt(pairs);
    let mut group_sizes: FxHashMap<usize, usize> = FxHashMap::default();
    for group in &groups {
        *group_sizes.entry(group.len()).or_insert(0) += 1;
    }

    let analyses = AmbiguityFinder::new(lengths, policy)
        .with_min_usability(min_usability)
        .analyze_groups(&groups);

    spinner.finish_and_clear();

    let mut constraint_sizes: FxHashMap<usize, usize> = FxHashMap::default();
    let mut unconstrained = 0;
    for analysis in &analyses {
        match analysis.constraints().first() {
            Some(constraint) => *constraint_sizes.entry(constraint.len()).or_insert(0) += 1,
            None => unconstrained += 1,
        }
    }

    AnalysisResult {
        groups: groups.len(),
        ambiguous_groups: groups.iter().filter(|g| g.len() > 1).count(),
        largest_group: groups.iter().map(|g| g.len()).max().unwrap_or(0),
        analyses,
        group_sizes,
        constraint_sizes,
        unconstrained,
        policy,
        min_usability,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_pairs(notations: &[&str]) -> Vec<SplitPair> {
        let mut pairs: Vec<SplitPair> = notations.iter().map(|p| p.parse().unwrap()).collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn analysis_statistics() {
        let pairs = sorted_pairs(&[
            "s(in/cr)ew",
            "s(in/cr)aw",
            "s(in/cr)ow",
            "c(up/at)",
            "t(in/cr)ab",
            "t(in/cr)an",
            "c(in/cr)ab",
        ]);
        let result = analyze_pairs(
            &pairs,
            WordLengths::default(),
            AnalysisPolicy::All,
            Usability::BothWords,
        );

        assert_eq!(result.groups, 2);
        assert_eq!(result.ambiguous_groups, 1);
        assert_eq!(result.largest_group, 6);
        assert_eq!(result.group_sizes[&1], 1);
        assert_eq!(result.group_sizes[&6], 1);
        assert_eq!(result.analyses.len(), 7);
        assert_eq!(result.constraint_sizes[&0], 1);
        assert_eq!(result.unconstrained, 0);
        assert_eq!(result.constraint_sizes.values().sum::<usize>(), 7);
    }

    #[test]
    fn analysis_respects_policy() {
        let pairs = sorted_pairs(&["s(in/cr)ew", "s(in/cr)aw"]);
        let result = analyze_pairs(
            &pairs,
            WordLengths::default(),
            AnalysisPolicy::AnnotateUsable,
            Usability::BothWords,
        );

        assert_eq!(result.groups, 1);
        assert!(result.analyses.is_empty());
        assert_eq!(result.policy, AnalysisPolicy::AnnotateUsable);
    }

    #[test]
    fn analysis_with_one_usable_word() {
        let mut pairs = vec![
            "s(in/cr)ew"
                .parse::<SplitPair>()
                .unwrap()
                .with_usability(Usability::OneWord),
            "s(in/cr)aw".parse::<SplitPair>().unwrap(),
        ];
        pairs.sort();
        let result = analyze_pairs(
            &pairs,
            WordLengths::default(),
            AnalysisPolicy::UsableOnly,
            Usability::OneWord,
        );

        assert_eq!(result.analyses.len(), 1);
        assert!(!result.analyses[0].is_ambiguous());
        assert_eq!(result.min_usability, Usability::OneWord);
    }

    #[test]
    fn analysis_of_nothing() {
        let result = analyze_pairs(
            &[],
            WordLengths::default(),
            AnalysisPolicy::All,
            Usability::BothWords,
        );
        assert_eq!(result.groups, 0);
        assert_eq!(result.largest_group, 0);
        assert!(result.analyses.is_empty());
    }
}
