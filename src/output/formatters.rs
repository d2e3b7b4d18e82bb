//! Formatting utilities for terminal and export output

use crate::ambiguity::Constraint;
use crate::core::LetterSet;

/// Mistakeable letters of the solution positions, e.g. `[-, ao, -]`
#[must_use]
pub fn mistakeables_text(mistakeables: &[LetterSet], width: usize) -> String {
    let cells: Vec<String> = mistakeables
        .iter()
        .take(width)
        .map(ToString::to_string)
        .collect();
    format!("[{}]", cells.join(", "))
}

/// Mistakeable letters as a single space-separated field, e.g. `- ao -`
#[must_use]
pub fn mistakeables_field(mistakeables: &[LetterSet], width: usize) -> String {
    mistakeables
        .iter()
        .take(width)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Constraint bit strings, e.g. `[010, 001]`
#[must_use]
pub fn constraints_text(constraints: &[Constraint]) -> String {
    format!("[{}]", constraints_field(constraints, ", "))
}

/// Constraint bit strings joined by `separator`
#[must_use]
pub fn constraints_field(constraints: &[Constraint], separator: &str) -> String {
    constraints
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
