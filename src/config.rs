//! Run configuration
//!
//! Word length bounds and the analysis policy are explicit values passed into
//! the engines rather than process-wide state.

use thiserror::Error;

/// Shortest word length that still leaves a solution letter beside the split.
pub const MIN_WORD_LENGTH: usize = 3;

/// Default longest word length.
pub const MAX_WORD_LENGTH: usize = 12;

/// Hard ceiling on word length. Solution positions are tracked in 16-bit sets.
pub const LENGTH_CEILING: usize = 16;

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum word length must be at least {MIN_WORD_LENGTH}, got {0}")]
    MinTooSmall(usize),
    #[error("maximum word length must be at most {LENGTH_CEILING}, got {0}")]
    MaxTooLarge(usize),
    #[error("minimum word length {min} exceeds maximum {max}")]
    Inverted { min: usize, max: usize },
}

/// Inclusive word length bounds accepted anywhere in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordLengths {
    min: usize,
    max: usize,
}

impl WordLengths {
    /// Create validated length bounds
    ///
    /// # Errors
    /// Returns `ConfigError` if `min < 3`, `max > 16`, or `min > max`.
    ///
    /// # Examples
    /// ```
    /// use split_decisions::config::WordLengths;
    ///
    /// let lengths = WordLengths::new(4, 8).unwrap();
    /// assert!(lengths.contains(5));
    /// assert!(!lengths.contains(9));
    ///
    /// assert!(WordLengths::new(2, 8).is_err());
    /// ```
    pub const fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min < MIN_WORD_LENGTH {
            return Err(ConfigError::MinTooSmall(min));
        }
        if max > LENGTH_CEILING {
            return Err(ConfigError::MaxTooLarge(max));
        }
        if min > max {
            return Err(ConfigError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Check whether a word of `length` letters is accepted
    #[inline]
    #[must_use]
    pub const fn contains(self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }

    /// Number of distinct accepted lengths
    #[inline]
    #[must_use]
    pub const fn span(self) -> usize {
        self.max - self.min + 1
    }

    /// Iterate over every accepted length, shortest first
    pub fn iter(self) -> impl Iterator<Item = usize> {
        self.min..=self.max
    }
}

impl Default for WordLengths {
    fn default() -> Self {
        Self {
            min: MIN_WORD_LENGTH,
            max: MAX_WORD_LENGTH,
        }
    }
}

/// How usability interacts with prompt analysis
///
/// A pair counts as usable here when its `Usability` reaches the analysis
/// threshold. Unusable pairs are real words a player could think of, so by
/// default they still compete inside their prompt group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AnalysisPolicy {
    /// Every pair competes and every pair is annotated
    #[default]
    All,
    /// Every pair competes; only usable pairs are annotated
    AnnotateUsable,
    /// Unusable pairs are dropped from their groups before analysis
    UsableOnly,
}

impl AnalysisPolicy {
    /// Whether a pair with the given usability takes part in its group
    #[inline]
    #[must_use]
    pub const fn competes(self, usable: bool) -> bool {
        match self {
            Self::All | Self::AnnotateUsable => true,
            Self::UsableOnly => usable,
        }
    }

    /// Whether a pair with the given usability receives analysis output
    #[inline]
    #[must_use]
    pub const fn annotates(self, usable: bool) -> bool {
        match self {
            Self::All => true,
            Self::AnnotateUsable | Self::UsableOnly => usable,
        }
    }
}
