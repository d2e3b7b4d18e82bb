//! Dictionary word representation
//!
//! A `Word` is a case-folded, lowercase ASCII letter sequence. Length bounds
//! are a lexicon concern and are not checked here.

use std::fmt;
use thiserror::Error;

/// A lowercase dictionary word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if the trimmed text is empty, contains non-ASCII
    /// characters, or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use split_decisions::core::Word;
    ///
    /// let word = Word::new("Sinew").unwrap();
    /// assert_eq!(word.text(), "sinew");
    ///
    /// assert!(Word::new("sin ew").is_err());
    /// assert!(Word::new("s1new").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if !trimmed.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: trimmed.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
