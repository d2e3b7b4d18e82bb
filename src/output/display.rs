//! Display functions for command results

use super::formatters::{constraints_text, create_progress_bar, mistakeables_text};
use crate::ambiguity::PairAnalysis;
use crate::commands::{AnalysisResult, DiscoveryResult, PromptResult};
use crate::core::{SplitPair, Usability};
use colored::Colorize;
use rustc_hash::FxHashMap;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Pair notation with the split window highlighted
#[must_use]
pub fn highlight_pair(pair: &SplitPair) -> String {
    format!(
        "{}({}/{}){}",
        pair.before(),
        pair.split1().bright_yellow().bold(),
        pair.split2().bright_yellow().bold(),
        pair.after()
    )
}

/// Print the result of pair discovery
pub fn print_discovery_result(result: &DiscoveryResult) {
    banner("SPLIT PAIR DISCOVERY");

    println!("\n📚 {}", "Dictionaries:".bright_cyan().bold());
    println!("   Reference words:  {}", result.reference_words);
    println!("   Usable words:     {}", result.usable_words);
    println!(
        "   Word lengths:     {}..={}",
        result.lengths.min(),
        result.lengths.max()
    );

    println!("\n📊 {}", "Pairs:".bright_cyan().bold());
    println!(
        "   Total:            {}",
        format!("{}", result.pairs.len()).bright_yellow().bold()
    );
    println!(
        "   Usable:           {}",
        format!("{}", result.usable_pairs).green()
    );
    println!("   One usable word:  {}", result.one_word_pairs);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let largest = result.by_length.values().map(|c| c.pairs).max().unwrap_or(0);
    println!("\n📈 {}", "By length:".bright_cyan().bold());
    for length in result.lengths.iter() {
        if let Some(counts) = result.by_length.get(&length) {
            let bar = create_progress_bar(counts.pairs, largest, 30);
            println!(
                "   {length:2}: {} {:7} ({} usable)",
                bar.green(),
                counts.pairs,
                counts.usable
            );
        }
    }
}

fn print_distribution(label: &str, distribution: &FxHashMap<usize, usize>) {
    let mut rows: Vec<(usize, usize)> = distribution.iter().map(|(&k, &v)| (k, v)).collect();
    rows.sort_unstable();
    let largest = rows.iter().map(|&(_, count)| count).max().unwrap_or(0);

    println!("\n📈 {}", label.bright_cyan().bold());
    for (size, count) in rows {
        let bar = create_progress_bar(count, largest, 30);
        println!("   {size:3}: {} {count}", bar.green());
    }
}

/// Print the statistics of a prompt analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    banner("PROMPT ANALYSIS");

    println!("\n📊 {}", "Groups:".bright_cyan().bold());
    println!("   Prompt groups:    {}", result.groups);
    println!(
        "   Ambiguous:        {}",
        format!("{}", result.ambiguous_groups).bright_yellow().bold()
    );
    println!("   Largest group:    {}", result.largest_group);
    println!("   Analysed pairs:   {}", result.analyses.len());
    if result.unconstrained > 0 {
        println!(
            "   Unconstrained:    {}",
            format!("{}", result.unconstrained).red()
        );
    }
    println!(
        "   Policy:           {:?} (usable = {})",
        result.policy, result.min_usability
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    print_distribution("Group sizes:", &result.group_sizes);
    print_distribution("Constraint sizes:", &result.constraint_sizes);
}

fn print_pair_line(pair: &SplitPair, analysis: Option<&PairAnalysis>, marker: &str) {
    let usable = match pair.usability() {
        Usability::BothWords => "usable".green(),
        Usability::OneWord => "one usable".yellow(),
        Usability::Neither => "reference".bright_black(),
    };
    println!(
        "{marker} {:<20} {} {}",
        highlight_pair(pair),
        pair.solution().bright_white(),
        usable
    );

    if let Some(analysis) = analysis {
        let width = pair.shape().solution_len();
        println!(
            "     mistakeables {}",
            mistakeables_text(analysis.mistakeables(), width)
        );
        println!(
            "     constraints  {}",
            constraints_text(analysis.constraints()).bright_yellow()
        );
    }
}

/// Print every prompt group matched by a lookup
pub fn print_prompt_results(results: &[PromptResult]) {
    for result in results {
        banner(&format!("PROMPT {}", result.prompt));
        println!();
        for member in &result.members {
            let marker = if member.matched { "  ▶" } else { "   " };
            print_pair_line(&member.pair, member.analysis.as_ref(), marker);
        }
    }
}

/// Print sampled pairs with their analysis
pub fn print_sample(ids: &[usize], pairs: &[SplitPair], analyses: &[PairAnalysis]) {
    banner("SAMPLED PAIRS");
    println!();

    if ids.is_empty() {
        println!("   {}", "No usable pairs".red());
        return;
    }

    let by_id: FxHashMap<usize, &PairAnalysis> =
        analyses.iter().map(|a| (a.pair_id(), a)).collect();
    for &id in ids {
        if let Some(pair) = pairs.get(id) {
            print_pair_line(pair, by_id.get(&id).copied(), "   ");
        }
    }
}
