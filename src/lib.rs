//! Split Decisions
//!
//! Word pair discovery and prompt disambiguation for "split decisions"
//! puzzles: two equal-length words that agree everywhere except a two-letter
//! split window.
//!
//! # Quick Start
//!
//! ```rust
//! use split_decisions::ambiguity::AmbiguityFinder;
//! use split_decisions::config::{AnalysisPolicy, WordLengths};
//! use split_decisions::discovery::PairFinder;
//! use split_decisions::lexicon::Lexicon;
//!
//! let lengths = WordLengths::default();
//! let reference = Lexicon::from_words(["sinew", "screw", "sinaw", "scraw"], lengths);
//! let usable = Lexicon::from_words(["sinew", "screw"], lengths);
//!
//! let pairs = PairFinder::new(lengths).find_pairs(&reference, &usable);
//! assert_eq!(pairs.len(), 2);
//!
//! let analyses = AmbiguityFinder::new(lengths, AnalysisPolicy::All).analyze(&pairs);
//! for analysis in &analyses {
//!     println!("{} {:?}", pairs[analysis.pair_id()], analysis.constraints());
//! }
//! ```

// Word length bounds and analysis policy
pub mod config;

// Core domain types
pub mod core;

// Dictionaries
pub mod lexicon;

// Pair discovery engine
pub mod discovery;

// Prompt grouping, mistakeables and constraints
pub mod ambiguity;

// Command implementations
pub mod commands;

// Terminal output and export
pub mod output;
