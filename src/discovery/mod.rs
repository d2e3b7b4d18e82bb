//! Pair discovery
//!
//! Finds every split-decision word pair in a length-bucketed dictionary.

mod finder;

pub use finder::PairFinder;
