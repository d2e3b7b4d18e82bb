//! Terminal output formatting and export
//!
//! Display utilities for CLI results, plus CSV writers for pairs and their
//! analysis.

pub mod display;
pub mod export;
pub mod formatters;

pub use display::{
    highlight_pair, print_analysis_result, print_discovery_result, print_prompt_results,
    print_sample,
};
pub use export::{write_analysis_csv, write_pairs_csv};
