//! Lexicographic "choose k of n" generator
//!
//! Yields every ascending `k`-tuple of indices below `n`, in lexicographic
//! order. The generator is iterative and lazy; clone it before consuming to
//! replay the sequence.

use std::iter::FusedIterator;

/// Iterator over `k`-combinations of `0..n`
///
/// # Examples
/// ```
/// use split_decisions::ambiguity::Combinations;
///
/// let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(
///     combos,
///     vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![1, 2], vec![1, 3], vec![2, 3]]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// Combinations of `k` indices drawn from `0..n`
    ///
    /// `k == 0` yields a single empty combination; `k > n` yields nothing.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Advance `indices` to the next combination in place
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

impl FusedIterator for Combinations {}
