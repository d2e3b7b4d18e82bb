//! Graded usability of a pair
//!
//! Counts how many of a pair's two words belong to the usable vocabulary.

use std::fmt;

/// How many words of a pair are usable, ordered from none to both
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum,
)]
pub enum Usability {
    #[default]
    Neither,
    OneWord,
    BothWords,
}

impl Usability {
    /// Usability of a pair from the membership of its two words
    ///
    /// # Examples
    /// ```
    /// use split_decisions::core::Usability;
    ///
    /// assert_eq!(Usability::from_words(true, false), Usability::OneWord);
    /// assert_eq!(Usability::from_words(true, true).count(), 2);
    /// ```
    #[must_use]
    pub const fn from_words(first: bool, second: bool) -> Self {
        match (first, second) {
            (true, true) => Self::BothWords,
            (false, false) => Self::Neither,
            _ => Self::OneWord,
        }
    }

    /// Number of usable words, 0 to 2
    #[inline]
    #[must_use]
    pub const fn count(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Usability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Neither => "neither",
            Self::OneWord => "one word",
            Self::BothWords => "both words",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usability_from_words() {
        assert_eq!(Usability::from_words(false, false), Usability::Neither);
        assert_eq!(Usability::from_words(false, true), Usability::OneWord);
        assert_eq!(Usability::from_words(true, false), Usability::OneWord);
        assert_eq!(Usability::from_words(true, true), Usability::BothWords);
    }

    #[test]
    fn usability_counts_are_ordered() {
        assert_eq!(Usability::Neither.count(), 0);
        assert_eq!(Usability::OneWord.count(), 1);
        assert_eq!(Usability::BothWords.count(), 2);
        assert!(Usability::OneWord < Usability::BothWords);
    }
}
