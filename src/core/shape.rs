//! Pair shape: word length plus split position
//!
//! The split window covers `index..index + 2`, so a word of length `l` has
//! `l - 1` possible shapes.

use crate::config::WordLengths;
use std::fmt;

/// Where on the board a split sits
///
/// Ordered by length, then index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape {
    length: u8,
    index: u8,
}

impl Shape {
    /// Create a shape
    ///
    /// # Panics
    /// Panics if the split window does not fit inside the word or the word
    /// leaves no solution letter.
    #[must_use]
    pub const fn new(length: usize, index: usize) -> Self {
        match Self::try_new(length, index) {
            Some(shape) => shape,
            None => panic!("split window must lie inside a word of at least 3 letters"),
        }
    }

    /// Create a shape, returning `None` when the window does not fit
    #[must_use]
    pub const fn try_new(length: usize, index: usize) -> Option<Self> {
        if length < 3 || length > u8::MAX as usize || index + 2 > length {
            return None;
        }
        Some(Self {
            length: length as u8,
            index: index as u8,
        })
    }

    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.length as usize
    }

    /// Offset of the first split letter
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Number of solution letters (everything outside the split)
    #[inline]
    #[must_use]
    pub const fn solution_len(self) -> usize {
        self.length as usize - 2
    }

    /// Dense integer id over every shape of the configured lengths
    ///
    /// Shapes of shorter words come first; a word of length `m` owns `m - 1`
    /// consecutive ids. With a minimum length of 3 the ids run
    /// `0,1 | 2,3,4 | 5,6,7,8 | ...`.
    ///
    /// # Examples
    /// ```
    /// use split_decisions::config::WordLengths;
    /// use split_decisions::core::Shape;
    ///
    /// let lengths = WordLengths::default();
    /// assert_eq!(Shape::new(3, 0).id(lengths), 0);
    /// assert_eq!(Shape::new(4, 0).id(lengths), 2);
    /// assert_eq!(Shape::new(5, 1).id(lengths), 6);
    /// ```
    ///
    /// # Panics
    /// Panics if the shape's length lies outside `lengths`.
    #[must_use]
    pub fn id(self, lengths: WordLengths) -> u16 {
        assert!(
            lengths.contains(self.length()),
            "shape length {} outside {}..={}",
            self.length(),
            lengths.min(),
            lengths.max()
        );
        let k = self.length() - lengths.min();
        let preceding = k * (lengths.min() - 1) + k * k.saturating_sub(1) / 2;
        (preceding + self.index()) as u16
    }
}

/// Renders as `-(..)--`: one dash per solution letter around the split
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let after = self.length() - self.index() - 2;
        write!(f, "{}(..){}", "-".repeat(self.index()), "-".repeat(after))
    }
}
