//! Prompt grouping
//!
//! Pairs sorted in prompt order are partitioned into maximal runs that share
//! a prompt. Grouping uses the ordered split pair: `-(in/cr)--` and
//! `-(cr/in)--` are different prompts. Discovery always emits one
//! orientation per word pair, so swapped splits only arise from pairs built
//! by hand.

use crate::core::{Prompt, SplitPair};
use std::ops::Range;

/// A maximal run of pairs sharing one prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptGroup<'a> {
    prompt: Prompt,
    offset: usize,
    members: &'a [SplitPair],
}

impl<'a> PromptGroup<'a> {
    #[inline]
    #[must_use]
    pub const fn prompt(&self) -> Prompt {
        self.prompt
    }

    /// Members in within-group order
    #[inline]
    #[must_use]
    pub const fn members(&self) -> &'a [SplitPair] {
        self.members
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Stable ids of the members: their indices in the grouped slice
    #[inline]
    #[must_use]
    pub const fn ids(&self) -> Range<usize> {
        self.offset..self.offset + self.members.len()
    }

    /// Members paired with their stable ids
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'a SplitPair)> {
        self.ids().zip(self.members)
    }
}

/// Partition prompt-sorted pairs into prompt groups
///
/// # Panics
/// Debug builds panic if `pairs` is not sorted by prompt.
///
/// # Examples
/// ```
/// use split_decisions::ambiguity::group_by_prompt;
/// use split_decisions::core::SplitPair;
///
/// let mut pairs: Vec<SplitPair> = ["s(in/cr)ew", "t(in/cr)es", "(sw/ex)am"]
///     .iter()
///     .map(|p| p.parse().unwrap())
///     .collect();
/// pairs.sort();
///
/// let groups = group_by_prompt(&pairs);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[1].len(), 2);
/// assert_eq!(groups[1].ids(), 1..3);
/// ```
#[must_use]
pub fn group_by_prompt(pairs: &[SplitPair]) -> Vec<PromptGroup<'_>> {
    debug_assert!(
        pairs.windows(2).all(|w| w[0].prompt() <= w[1].prompt()),
        "pairs must be sorted by prompt before grouping"
    );

    let mut offset = 0;
    pairs
        .chunk_by(|a, b| a.prompt() == b.prompt())
        .map(|members| {
            let group = PromptGroup {
                prompt: members[0].prompt(),
                offset,
                members,
            };
            offset += members.len();
            group
        })
        .collect()
}
