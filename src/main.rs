//! Split Decisions - CLI
//!
//! Discovers split-decision word pairs in a dictionary and computes the
//! mistakeable letters and minimal constraints of every prompt group.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use split_decisions::{
    commands::{
        DiscoveryResult, SampleMode, analyze_pairs, discover_pairs, lookup_prompt, sample_pairs,
    },
    config::{AnalysisPolicy, WordLengths},
    core::Usability,
    lexicon::{Lexicon, load_from_file},
    output::{
        print_analysis_result, print_discovery_result, print_prompt_results, print_sample,
        write_analysis_csv, write_pairs_csv,
    },
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "split_decisions",
    about = "Split Decisions word pair discovery and prompt disambiguation",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Shortest word length considered
    #[arg(long, global = true, default_value_t = split_decisions::config::MIN_WORD_LENGTH)]
    min_length: usize,

    /// Longest word length considered
    #[arg(long, global = true, default_value_t = split_decisions::config::MAX_WORD_LENGTH)]
    max_length: usize,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

/// Dictionary files shared by every subcommand
#[derive(Args)]
struct Dictionaries {
    /// Reference dictionary, one word per line
    reference: PathBuf,

    /// Usable dictionary, one word per line
    usable: PathBuf,

    /// Keep only usable words also listed in this file
    #[arg(long)]
    intersect: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover every split pair and summarise or export them
    Pairs {
        #[command(flatten)]
        dictionaries: Dictionaries,

        /// Write pairs as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only export pairs made of usable words
        #[arg(long)]
        usable_only: bool,
    },

    /// Group pairs by prompt and compute mistakeables and constraints
    Constraints {
        #[command(flatten)]
        dictionaries: Dictionaries,

        /// Which pairs compete in, and are annotated by, the analysis
        #[arg(short, long, value_enum, default_value_t = AnalysisPolicy::All)]
        policy: AnalysisPolicy,

        /// How many words of a pair must be usable for the policy to count it
        #[arg(long, value_enum, default_value_t = Usability::BothWords)]
        min_usability: Usability,

        /// Write analysed pairs as CSV to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the prompt group of a pair (e.g. "s(in/cr)ew") or word
    Prompt {
        #[command(flatten)]
        dictionaries: Dictionaries,

        /// Pair notation or a single word
        query: String,
    },

    /// Print usable analysed pairs
    Sample {
        #[command(flatten)]
        dictionaries: Dictionaries,

        /// Number of pairs to print
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Rank by interest score instead of sampling at random
        #[arg(long)]
        interesting: bool,
    },
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn load_dictionaries(dictionaries: &Dictionaries, lengths: WordLengths) -> Result<(Lexicon, Lexicon)> {
    let reference = load_from_file(&dictionaries.reference, lengths)
        .context("Failed to load reference dictionary")?;
    let mut usable =
        load_from_file(&dictionaries.usable, lengths).context("Failed to load usable dictionary")?;
    if let Some(path) = &dictionaries.intersect {
        let filter = load_from_file(path, lengths)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        usable = usable.intersection(&filter);
    }
    info!(
        reference = reference.len(),
        usable = usable.len(),
        "loaded dictionaries"
    );
    Ok((reference, usable))
}

fn discover(dictionaries: &Dictionaries, lengths: WordLengths) -> Result<DiscoveryResult> {
    let (reference, usable) = load_dictionaries(dictionaries, lengths)?;
    Ok(discover_pairs(&reference, &usable, lengths))
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let lengths = WordLengths::new(cli.min_length, cli.max_length)?;

    match cli.command {
        Commands::Pairs {
            dictionaries,
            output,
            usable_only,
        } => run_pairs_command(&dictionaries, lengths, output.as_deref(), usable_only),
        Commands::Constraints {
            dictionaries,
            policy,
            min_usability,
            output,
        } => run_constraints_command(
            &dictionaries,
            lengths,
            policy,
            min_usability,
            output.as_deref(),
        ),
        Commands::Prompt {
            dictionaries,
            query,
        } => run_prompt_command(&dictionaries, lengths, &query),
        Commands::Sample {
            dictionaries,
            count,
            interesting,
        } => {
            let mode = if interesting {
                SampleMode::Interesting
            } else {
                SampleMode::Random
            };
            run_sample_command(&dictionaries, lengths, count, mode)
        }
    }
}

fn run_pairs_command(
    dictionaries: &Dictionaries,
    lengths: WordLengths,
    output: Option<&Path>,
    usable_only: bool,
) -> Result<()> {
    let result = discover(dictionaries, lengths)?;
    print_discovery_result(&result);

    if let Some(path) = output {
        let rows = write_pairs_csv(
            create_output(path)?,
            result.pairs.iter().filter(|p| !usable_only || p.usable()),
            lengths,
        )
        .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nWrote {rows} pairs to {}", path.display());
    }
    Ok(())
}

fn run_constraints_command(
    dictionaries: &Dictionaries,
    lengths: WordLengths,
    policy: AnalysisPolicy,
    min_usability: Usability,
    output: Option<&Path>,
) -> Result<()> {
    let discovery = discover(dictionaries, lengths)?;
    let result = analyze_pairs(&discovery.pairs, lengths, policy, min_usability);
    print_analysis_result(&result);

    if let Some(path) = output {
        let rows = write_analysis_csv(
            create_output(path)?,
            &discovery.pairs,
            &result.analyses,
            lengths,
        )
        .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nWrote {rows} analysed pairs to {}", path.display());
    }
    Ok(())
}

fn run_prompt_command(dictionaries: &Dictionaries, lengths: WordLengths, query: &str) -> Result<()> {
    let discovery = discover(dictionaries, lengths)?;
    let analysis = analyze_pairs(
        &discovery.pairs,
        lengths,
        AnalysisPolicy::All,
        Usability::BothWords,
    );
    let results =
        lookup_prompt(query, &discovery.pairs, &analysis.analyses).map_err(|e| anyhow::anyhow!(e))?;
    print_prompt_results(&results);
    Ok(())
}

fn run_sample_command(
    dictionaries: &Dictionaries,
    lengths: WordLengths,
    count: usize,
    mode: SampleMode,
) -> Result<()> {
    let discovery = discover(dictionaries, lengths)?;
    let analysis = analyze_pairs(
        &discovery.pairs,
        lengths,
        AnalysisPolicy::AnnotateUsable,
        Usability::BothWords,
    );
    let ids = sample_pairs(&discovery.pairs, count, mode);
    print_sample(&ids, &discovery.pairs, &analysis.analyses);
    Ok(())
}
