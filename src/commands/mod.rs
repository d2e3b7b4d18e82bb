//! Command implementations

pub mod analyze;
pub mod discover;
pub mod prompt;
pub mod sample;

pub use analyze::{AnalysisResult, analyze_pairs};
pub use discover::{DiscoveryResult, LengthCounts, discover_pairs};
pub use prompt::{PromptMember, PromptResult, lookup_prompt};
pub use sample::{SampleMode, interest_score, sample_pairs};
