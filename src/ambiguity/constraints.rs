//! Mistakeable letters and minimal constraints
//!
//! Pairs that share a prompt look identical on a blank board. For each pair
//! this module finds the letters a player could wrongly write at every
//! solution position, and the smallest sets of solution positions which,
//! once revealed, rule out every prompt-mate.

use super::combinations::Combinations;
use super::grouping::{PromptGroup, group_by_prompt};
use crate::config::{AnalysisPolicy, WordLengths};
use crate::core::{LetterSet, SplitPair, Usability};
use rayon::prelude::*;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Groups larger than this are reported; constraint search grows with group size
const LARGE_GROUP: usize = 64;

/// A set of solution positions, stored as a bit per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    positions: u16,
    width: u8,
}

impl Constraint {
    /// The empty constraint over a solution of `width` letters
    #[must_use]
    pub const fn empty(width: usize) -> Self {
        Self {
            positions: 0,
            width: width as u8,
        }
    }

    /// Build from position indices
    ///
    /// # Panics
    /// Panics if a position lies outside `0..width`.
    #[must_use]
    pub fn from_positions(positions: &[usize], width: usize) -> Self {
        let mut constraint = Self::empty(width);
        for &position in positions {
            assert!(position < width, "position {position} outside solution of {width}");
            constraint.positions |= 1 << position;
        }
        constraint
    }

    /// Raw position bits, bit `p` for solution position `p`
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.positions
    }

    /// Solution length the constraint ranges over
    #[inline]
    #[must_use]
    pub const fn width(self) -> usize {
        self.width as usize
    }

    /// Number of positions to reveal
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.positions.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.positions == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < 16 && self.positions & (1 << position) != 0
    }

    /// Positions in ascending order
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..self.width()).filter(move |&p| self.contains(p))
    }

    /// Whether revealing these positions tells two solutions apart
    #[inline]
    #[must_use]
    pub const fn separates(self, differences: u16) -> bool {
        self.positions & differences != 0
    }
}

/// Renders one digit per solution position, e.g. `010`
impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for position in 0..self.width() {
            f.write_str(if self.contains(position) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Disambiguation metadata for one pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairAnalysis {
    pair_id: usize,
    mistakeables: Vec<LetterSet>,
    constraints: Vec<Constraint>,
}

impl PairAnalysis {
    /// Index of the analysed pair in the slice given to the finder
    #[inline]
    #[must_use]
    pub const fn pair_id(&self) -> usize {
        self.pair_id
    }

    /// Letters other prompt-mates place at each solution position
    ///
    /// One entry per position up to the longest word length; entries past the
    /// solution are empty.
    #[inline]
    #[must_use]
    pub fn mistakeables(&self) -> &[LetterSet] {
        &self.mistakeables
    }

    /// Every minimal distinguishing position set, in lexicographic order
    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Whether any prompt-mate could be confused with this pair
    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.mistakeables.iter().any(|set| !set.is_empty())
    }
}

/// Computes mistakeables and constraints for every prompt group
pub struct AmbiguityFinder {
    lengths: WordLengths,
    policy: AnalysisPolicy,
    min_usability: Usability,
}

impl AmbiguityFinder {
    /// Finder treating pairs with both words usable as usable
    #[must_use]
    pub const fn new(lengths: WordLengths, policy: AnalysisPolicy) -> Self {
        Self {
            lengths,
            policy,
            min_usability: Usability::BothWords,
        }
    }

    /// Lowest usability the policy treats as usable
    #[must_use]
    pub const fn with_min_usability(mut self, min_usability: Usability) -> Self {
        self.min_usability = min_usability;
        self
    }

    fn is_usable(&self, pair: &SplitPair) -> bool {
        pair.usability() >= self.min_usability
    }

    /// Analyse prompt-sorted pairs
    ///
    /// Results are ordered by pair id. Which pairs take part and which are
    /// annotated follows the finder's `AnalysisPolicy`.
    ///
    /// # Examples
    /// ```
    /// use split_decisions::ambiguity::AmbiguityFinder;
    /// use split_decisions::config::{AnalysisPolicy, WordLengths};
    /// use split_decisions::core::SplitPair;
    ///
    /// let mut pairs: Vec<SplitPair> = ["s(in/cr)ew", "s(in/cr)aw"]
    ///     .iter()
    ///     .map(|p| p.parse().unwrap())
    ///     .collect();
    /// pairs.sort();
    ///
    /// let finder = AmbiguityFinder::new(WordLengths::default(), AnalysisPolicy::All);
    /// let analyses = finder.analyze(&pairs);
    /// assert_eq!(analyses.len(), 2);
    /// assert_eq!(analyses[0].constraints()[0].to_string(), "010");
    /// ```
    #[must_use]
    pub fn analyze(&self, pairs: &[SplitPair]) -> Vec<PairAnalysis> {
        self.analyze_groups(&group_by_prompt(pairs))
    }

    /// Analyse prompt groups already built by `group_by_prompt`
    #[must_use]
    pub fn analyze_groups(&self, groups: &[PromptGroup<'_>]) -> Vec<PairAnalysis> {
        let started = Instant::now();

        let analyses: Vec<PairAnalysis> = groups
            .par_iter()
            .flat_map_iter(|group| self.analyze_group(group))
            .collect();

        info!(
            groups = groups.len(),
            ambiguous_groups = groups.iter().filter(|g| g.len() > 1).count(),
            analysed = analyses.len(),
            elapsed_ms = started.elapsed().as_millis(),
            "prompt analysis complete"
        );
        analyses
    }

    /// Analyse a single prompt group
    ///
    /// # Panics
    /// Panics if the group is empty, its word length lies outside the
    /// finder's bounds, or a member's solution length disagrees with its
    /// shape.
    #[must_use]
    pub fn analyze_group(&self, group: &PromptGroup<'_>) -> Vec<PairAnalysis> {
        assert!(!group.is_empty(), "prompt group {} has no members", group.prompt());
        let length = group.prompt().shape().length();
        assert!(
            self.lengths.contains(length),
            "prompt group {} has {length}-letter words, outside {}..={}",
            group.prompt(),
            self.lengths.min(),
            self.lengths.max()
        );

        let width = group.prompt().shape().solution_len();
        let competitors: Vec<(usize, &[u8])> = group
            .iter()
            .filter(|(_, pair)| self.policy.competes(self.is_usable(pair)))
            .map(|(id, pair)| {
                assert_eq!(
                    pair.solution().len(),
                    width,
                    "solution of {pair} does not match its shape"
                );
                (id, pair.solution().as_bytes())
            })
            .collect();

        if competitors.len() > LARGE_GROUP {
            warn!(
                prompt = %group.prompt(),
                size = competitors.len(),
                "large prompt group"
            );
        }

        group
            .iter()
            .filter(|(_, pair)| {
                let usable = self.is_usable(pair);
                self.policy.competes(usable) && self.policy.annotates(usable)
            })
            .map(|(id, pair)| self.analyze_member(id, pair, &competitors, width))
            .collect()
    }

    fn analyze_member(
        &self,
        id: usize,
        pair: &SplitPair,
        competitors: &[(usize, &[u8])],
        width: usize,
    ) -> PairAnalysis {
        let solution = pair.solution().as_bytes();
        let mut mistakeables = vec![LetterSet::EMPTY; self.lengths.max()];
        let mut differences = Vec::with_capacity(competitors.len().saturating_sub(1));

        for &(other_id, other) in competitors {
            if other_id == id {
                continue;
            }
            let mut diff = 0u16;
            for (position, (&mine, &theirs)) in solution.iter().zip(other).enumerate() {
                if mine != theirs {
                    mistakeables[position].insert(theirs);
                    diff |= 1 << position;
                }
            }
            differences.push(diff);
        }

        let constraints = minimal_constraints(&differences, width);
        if constraints.is_empty() {
            warn!(%pair, "pair shares its solution with a prompt-mate and cannot be constrained");
        } else {
            debug!(
                %pair,
                size = constraints[0].len(),
                count = constraints.len(),
                "constrained pair"
            );
        }

        PairAnalysis {
            pair_id: id,
            mistakeables,
            constraints,
        }
    }
}

/// Every smallest position set that intersects each difference mask
///
/// No competitors gives the single empty constraint. A zero mask (a
/// competitor with the same solution) can never be separated, giving none.
fn minimal_constraints(differences: &[u16], width: usize) -> Vec<Constraint> {
    if differences.is_empty() {
        return vec![Constraint::empty(width)];
    }
    if differences.contains(&0) {
        return Vec::new();
    }

    for size in 1..=width {
        let found: Vec<Constraint> = Combinations::new(width, size)
            .map(|positions| Constraint::from_positions(&positions, width))
            .filter(|candidate| differences.iter().all(|&diff| candidate.separates(diff)))
            .collect();
        if !found.is_empty() {
            return found;
        }
    }

    unreachable!("revealing every position separates any differing solutions")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_pairs(notations: &[&str]) -> Vec<SplitPair> {
        let mut pairs: Vec<SplitPair> = notations.iter().map(|p| p.parse().unwrap()).collect();
        pairs.sort();
        pairs
    }

    fn finder(policy: AnalysisPolicy) -> AmbiguityFinder {
        AmbiguityFinder::new(WordLengths::default(), policy)
    }

    fn shown(constraints: &[Constraint]) -> Vec<String> {
        constraints.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn constraint_basics() {
        let constraint = Constraint::from_positions(&[0, 2], 4);
        assert_eq!(constraint.len(), 2);
        assert_eq!(constraint.width(), 4);
        assert_eq!(constraint.bits(), 0b101);
        assert_eq!(constraint.positions().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(constraint.to_string(), "1010");
        assert!(Constraint::empty(3).is_empty());
        assert_eq!(Constraint::empty(3).to_string(), "000");
    }

    #[test]
    #[should_panic(expected = "outside solution")]
    fn constraint_rejects_out_of_range() {
        let _ = Constraint::from_positions(&[3], 3);
    }

    #[test]
    fn singleton_group_is_unambiguous() {
        let pairs = sorted_pairs(&["s(in/cr)ew"]);
        let analyses = finder(AnalysisPolicy::All).analyze(&pairs);

        assert_eq!(analyses.len(), 1);
        let analysis = &analyses[0];
        assert_eq!(analysis.pair_id(), 0);
        assert_eq!(analysis.mistakeables().len(), 12);
        assert!(analysis.mistakeables().iter().all(|m| m.is_empty()));
        assert!(!analysis.is_ambiguous());
        assert_eq!(analysis.constraints(), &[Constraint::empty(3)]);
    }

    #[test]
    fn sew_saw_sow() {
        let pairs = sorted_pairs(&["s(in/cr)ew", "s(in/cr)aw", "s(in/cr)ow"]);
        let analyses = finder(AnalysisPolicy::All).analyze(&pairs);
        assert_eq!(analyses.len(), 3);

        for analysis in &analyses {
            let pair = &pairs[analysis.pair_id()];
            let own = pair.solution().as_bytes()[1];
            let expected: LetterSet = b"aeo".iter().copied().filter(|&l| l != own).collect();

            assert!(analysis.mistakeables()[0].is_empty());
            assert_eq!(analysis.mistakeables()[1], expected);
            assert!(analysis.mistakeables()[2].is_empty());
            assert_eq!(shown(analysis.constraints()), vec!["010"]);
        }
    }

    #[test]
    fn ties_are_all_kept() {
        // calculating / calculation: the last two positions both separate
        let pairs = sorted_pairs(&["c(al/ir)culating", "c(al/ir)culation"]);
        let analyses = finder(AnalysisPolicy::All).analyze(&pairs);

        for analysis in &analyses {
            assert_eq!(shown(analysis.constraints()), vec!["000000010", "000000001"]);
        }
    }

    #[test]
    fn needs_two_positions() {
        // "tab" is only told apart from "tan" at 2 and from "cab" at 0
        let pairs = sorted_pairs(&["t(in/cr)ab", "t(in/cr)an", "c(in/cr)ab"]);
        let analyses = finder(AnalysisPolicy::All).analyze(&pairs);

        let tab = analyses
            .iter()
            .find(|a| pairs[a.pair_id()].solution() == "tab")
            .unwrap();
        assert_eq!(shown(tab.constraints()), vec!["101"]);
        assert_eq!(tab.mistakeables()[0].to_string(), "c");
        assert_eq!(tab.mistakeables()[1].to_string(), "-");
        assert_eq!(tab.mistakeables()[2].to_string(), "n");

        let tan = analyses
            .iter()
            .find(|a| pairs[a.pair_id()].solution() == "tan")
            .unwrap();
        // "tan" differs from "cab" at 0 and 2, from "tab" only at 2
        assert_eq!(shown(tan.constraints()), vec!["001"]);
    }

    #[test]
    fn pair_ids_cover_every_pair() {
        let pairs = sorted_pairs(&["b(on/it)e", "s(in/cr)ew", "s(in/cr)aw", "c(up/at)"]);
        let analyses = finder(AnalysisPolicy::All).analyze(&pairs);
        let ids: Vec<usize> = analyses.iter().map(PairAnalysis::pair_id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn annotate_usable_keeps_unusable_competitors() {
        let mut pairs = vec![
            "s(in/cr)ew".parse::<SplitPair>().unwrap().with_usable(true),
            "s(in/cr)aw".parse::<SplitPair>().unwrap(),
        ];
        pairs.sort();

        let analyses = finder(AnalysisPolicy::AnnotateUsable).analyze(&pairs);
        assert_eq!(analyses.len(), 1);
        assert_eq!(pairs[analyses[0].pair_id()].solution(), "sew");
        assert_eq!(shown(analyses[0].constraints()), vec!["010"]);
    }

    #[test]
    fn usable_only_drops_unusable_competitors() {
        let mut pairs = vec![
            "s(in/cr)ew".parse::<SplitPair>().unwrap().with_usable(true),
            "s(in/cr)aw".parse::<SplitPair>().unwrap(),
        ];
        pairs.sort();

        let analyses = finder(AnalysisPolicy::UsableOnly).analyze(&pairs);
        assert_eq!(analyses.len(), 1);
        assert!(!analyses[0].is_ambiguous());
        assert_eq!(analyses[0].constraints(), &[Constraint::empty(3)]);
    }

    #[test]
    fn one_usable_word_meets_lowered_threshold() {
        let mut pairs = vec![
            "s(in/cr)ew"
                .parse::<SplitPair>()
                .unwrap()
                .with_usability(Usability::OneWord),
            "s(in/cr)aw".parse::<SplitPair>().unwrap(),
        ];
        pairs.sort();

        let strict = finder(AnalysisPolicy::AnnotateUsable).analyze(&pairs);
        assert!(strict.is_empty());

        let lenient = finder(AnalysisPolicy::AnnotateUsable)
            .with_min_usability(Usability::OneWord)
            .analyze(&pairs);
        assert_eq!(lenient.len(), 1);
        assert_eq!(pairs[lenient[0].pair_id()].solution(), "sew");
        assert_eq!(shown(lenient[0].constraints()), vec!["010"]);
    }

    #[test]
    #[should_panic(expected = "outside 3..=5")]
    fn rejects_words_longer_than_bounds() {
        let pairs = sorted_pairs(&["cal(cu/ib)rate", "cal(cu/ib)rats"]);
        let lengths = WordLengths::new(3, 5).unwrap();
        let _ = AmbiguityFinder::new(lengths, AnalysisPolicy::All).analyze(&pairs);
    }

    #[test]
    fn minimal_constraints_edge_cases() {
        assert_eq!(minimal_constraints(&[], 4), vec![Constraint::empty(4)]);
        assert!(minimal_constraints(&[0b10, 0], 4).is_empty());
        assert_eq!(
            minimal_constraints(&[0b0011, 0b0110], 4),
            vec![Constraint::from_positions(&[1], 4)]
        );
        assert_eq!(
            minimal_constraints(&[0b0001, 0b1000], 4),
            vec![Constraint::from_positions(&[0, 3], 4)]
        );
    }
}
