//! Letter membership sets
//!
//! A `LetterSet` holds any subset of the 26 Latin letters as a bit mask,
//! bit 0 for `a` through bit 25 for `z`.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Set of lowercase Latin letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Singleton set for an ASCII letter (either case)
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[inline]
    #[must_use]
    pub const fn of(letter: u8) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            lower @ b'a'..=b'z' => Some(Self(1 << (lower - b'a'))),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Add a letter; non-letters are ignored
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if let Some(single) = Self::of(letter) {
            self.0 |= single.0;
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        Self::of(letter).is_some_and(|single| self.0 & single.0 != 0)
    }

    /// Letters in alphabetical order, lowercase
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..26u8)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| char::from(b'a' + i))
    }
}

impl BitOr for LetterSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LetterSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Empty sets render as `-`
impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for letter in self.letters() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
