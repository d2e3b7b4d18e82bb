//! Prompt ambiguity analysis
//!
//! Groups pairs by prompt, then works out which letters could be mistaken
//! for the solution and which revealed positions pin each pair down.

mod combinations;
mod constraints;
mod grouping;

pub use combinations::Combinations;
pub use constraints::{AmbiguityFinder, Constraint, PairAnalysis};
pub use grouping::{PromptGroup, group_by_prompt};
