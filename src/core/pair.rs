//! Split-decision word pairs and their prompts
//!
//! A pair such as SINEW / SCREW is written `s(in/cr)ew`: the letters outside
//! the parentheses are the solution, the two splits are the choices shown on
//! the board. The prompt `-(in/cr)--` is all a player sees before solving.

use super::{LetterSet, Shape, Usability, Word, WordError};
use crate::config::WordLengths;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for pairs that break the split-decision rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("words have different lengths ({0} and {1})")]
    LengthMismatch(usize, usize),
    #[error("words must differ at exactly two adjacent letters")]
    NotSplit,
    #[error("malformed pair notation '{0}', expected e.g. s(in/cr)ew")]
    Notation(String),
}

/// Split-decision word pair
///
/// `word1` and `word2` agree everywhere except the two-letter split window,
/// where they differ at both letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitPair {
    word1: String,
    word2: String,
    shape: Shape,
    solution: String,
    usability: Usability,
}

impl SplitPair {
    /// Build a pair from two words, locating the split window
    ///
    /// # Errors
    /// Returns `PairError` if either word is invalid, the lengths differ, or
    /// the words do not differ at exactly one adjacent two-letter window.
    ///
    /// # Examples
    /// ```
    /// use split_decisions::core::SplitPair;
    ///
    /// let pair = SplitPair::new("sinew", "screw").unwrap();
    /// assert_eq!(pair.split1(), "in");
    /// assert_eq!(pair.split2(), "cr");
    /// assert_eq!(pair.solution(), "sew");
    /// assert_eq!(pair.to_string(), "s(in/cr)ew");
    ///
    /// assert!(SplitPair::new("sinew", "siney").is_err());
    /// ```
    pub fn new(word1: &str, word2: &str) -> Result<Self, PairError> {
        let word1 = Word::new(word1)?;
        let word2 = Word::new(word2)?;

        if word1.len() != word2.len() {
            return Err(PairError::LengthMismatch(word1.len(), word2.len()));
        }

        let diffs: Vec<usize> = word1
            .bytes()
            .iter()
            .zip(word2.bytes())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();

        let [first, second] = diffs[..] else {
            return Err(PairError::NotSplit);
        };
        if second != first + 1 {
            return Err(PairError::NotSplit);
        }
        let shape = Shape::try_new(word1.len(), first).ok_or(PairError::NotSplit)?;

        Ok(Self::from_parts(
            word1.text().to_string(),
            word2.text().to_string(),
            shape,
            Usability::Neither,
        ))
    }

    /// Assemble a pair whose invariants the caller already guarantees
    pub(crate) fn from_parts(
        word1: String,
        word2: String,
        shape: Shape,
        usability: Usability,
    ) -> Self {
        debug_assert_eq!(word1.len(), shape.length());
        debug_assert_eq!(word2.len(), shape.length());

        let index = shape.index();
        let mut solution = String::with_capacity(shape.solution_len());
        solution.push_str(&word1[..index]);
        solution.push_str(&word1[index + 2..]);

        debug_assert_eq!(word1[..index], word2[..index]);
        debug_assert_eq!(word1[index + 2..], word2[index + 2..]);
        debug_assert!(
            word1.as_bytes()[index] != word2.as_bytes()[index]
                && word1.as_bytes()[index + 1] != word2.as_bytes()[index + 1]
        );

        Self {
            word1,
            word2,
            shape,
            solution,
            usability,
        }
    }

    /// Same pair marked usable in both words, or in neither
    #[must_use]
    pub fn with_usable(self, usable: bool) -> Self {
        self.with_usability(if usable {
            Usability::BothWords
        } else {
            Usability::Neither
        })
    }

    /// Same pair with its usability replaced
    #[must_use]
    pub fn with_usability(mut self, usability: Usability) -> Self {
        self.usability = usability;
        self
    }

    #[inline]
    #[must_use]
    pub fn word1(&self) -> &str {
        &self.word1
    }

    #[inline]
    #[must_use]
    pub fn word2(&self) -> &str {
        &self.word2
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Split letters of `word1`
    #[inline]
    #[must_use]
    pub fn split1(&self) -> &str {
        let index = self.shape.index();
        &self.word1[index..index + 2]
    }

    /// Split letters of `word2`
    #[inline]
    #[must_use]
    pub fn split2(&self) -> &str {
        let index = self.shape.index();
        &self.word2[index..index + 2]
    }

    /// Shared letters before the split
    #[inline]
    #[must_use]
    pub fn before(&self) -> &str {
        &self.word1[..self.shape.index()]
    }

    /// Shared letters after the split
    #[inline]
    #[must_use]
    pub fn after(&self) -> &str {
        &self.word1[self.shape.index() + 2..]
    }

    /// Letters the player must supply, in board order without the split
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// Whether both words belong to the usable vocabulary
    #[inline]
    #[must_use]
    pub const fn usable(&self) -> bool {
        matches!(self.usability, Usability::BothWords)
    }

    /// How many of the two words belong to the usable vocabulary
    #[inline]
    #[must_use]
    pub const fn usability(&self) -> Usability {
        self.usability
    }

    /// The player-visible key this pair shares with its prompt-mates
    #[must_use]
    pub fn prompt(&self) -> Prompt {
        let index = self.shape.index();
        let w1 = self.word1.as_bytes();
        let w2 = self.word2.as_bytes();
        Prompt {
            shape: self.shape,
            split1: [w1[index], w1[index + 1]],
            split2: [w2[index], w2[index + 1]],
        }
    }
}

impl Ord for SplitPair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prompt()
            .cmp(&other.prompt())
            .then_with(|| self.solution.cmp(&other.solution))
            .then_with(|| self.usability.cmp(&other.usability))
    }
}

impl PartialOrd for SplitPair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SplitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}/{}){}",
            self.before(),
            self.split1(),
            self.split2(),
            self.after()
        )
    }
}

impl FromStr for SplitPair {
    type Err = PairError;

    /// Parse `before(split1/split2)after` notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = || PairError::Notation(s.to_string());
        let s = s.trim();

        let (before, rest) = s.split_once('(').ok_or_else(notation)?;
        let (splits, after) = rest.split_once(')').ok_or_else(notation)?;
        let (split1, split2) = splits.split_once('/').ok_or_else(notation)?;

        if split1.len() != 2 || split2.len() != 2 {
            return Err(notation());
        }

        let pair = Self::new(
            &format!("{before}{split1}{after}"),
            &format!("{before}{split2}{after}"),
        )?;
        if pair.shape.index() != before.len() {
            return Err(PairError::NotSplit);
        }
        Ok(pair)
    }
}

/// Prompt key: shape plus the ordered pair of split choices
///
/// Ordering follows `(length, index, split1, split2)`, which is also the
/// order of `Shape::id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prompt {
    shape: Shape,
    split1: [u8; 2],
    split2: [u8; 2],
}

impl Prompt {
    #[inline]
    #[must_use]
    pub const fn shape(self) -> Shape {
        self.shape
    }

    #[inline]
    #[must_use]
    pub fn shape_id(self, lengths: WordLengths) -> u16 {
        self.shape.id(lengths)
    }

    /// Letters offered in each split column
    ///
    /// The first set holds both choices for the first split letter, the
    /// second set both choices for the second.
    #[must_use]
    pub fn letter_sets(self) -> [LetterSet; 2] {
        [
            [self.split1[0], self.split2[0]].into_iter().collect(),
            [self.split1[1], self.split2[1]].into_iter().collect(),
        ]
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let after = self.shape.length() - self.shape.index() - 2;
        write!(
            f,
            "{}({}{}/{}{}){}",
            "-".repeat(self.shape.index()),
            char::from(self.split1[0]),
            char::from(self.split1[1]),
            char::from(self.split2[0]),
            char::from(self.split2[1]),
            "-".repeat(after)
        )
    }
}
