//! Core domain types for split-decision puzzles
//!
//! Pure value types: words, letter sets, shapes, pairs, prompts and usability.

mod letters;
mod pair;
mod shape;
mod usability;
mod word;

pub use letters::LetterSet;
pub use pair::{PairError, Prompt, SplitPair};
pub use shape::Shape;
pub use usability::Usability;
pub use word::{Word, WordError};
