//! Delimited export of pairs and their analysis

use super::formatters::{constraints_field, mistakeables_field};
use crate::ambiguity::PairAnalysis;
use crate::config::WordLengths;
use crate::core::SplitPair;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct PairRecord<'a> {
    word1: &'a str,
    word2: &'a str,
    split1: &'a str,
    split2: &'a str,
    shape_id: u16,
    shape_index: usize,
    shape_length: usize,
    solution: &'a str,
    usable: bool,
    usability: u8,
}

impl<'a> PairRecord<'a> {
    fn new(pair: &'a SplitPair, lengths: WordLengths) -> Self {
        Self {
            word1: pair.word1(),
            word2: pair.word2(),
            split1: pair.split1(),
            split2: pair.split2(),
            shape_id: pair.prompt().shape_id(lengths),
            shape_index: pair.shape().index(),
            shape_length: pair.shape().length(),
            solution: pair.solution(),
            usable: pair.usable(),
            usability: pair.usability().count(),
        }
    }
}

#[derive(Serialize)]
struct AnalysisRecord<'a> {
    word1: &'a str,
    word2: &'a str,
    split1: &'a str,
    split2: &'a str,
    shape_id: u16,
    shape_index: usize,
    shape_length: usize,
    solution: &'a str,
    usable: bool,
    usability: u8,
    mistakeables: String,
    constraints: String,
}

/// Write one CSV row per pair
///
/// `lengths` numbers the shapes in the `shape_id` column.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails
///
/// # Panics
/// Panics if a pair's length lies outside `lengths`.
pub fn write_pairs_csv<'a, W, I>(
    writer: W,
    pairs: I,
    lengths: WordLengths,
) -> Result<usize, csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a SplitPair>,
{
    let mut csv = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for pair in pairs {
        csv.serialize(PairRecord::new(pair, lengths))?;
        rows += 1;
    }
    csv.flush()?;
    Ok(rows)
}

/// Write one CSV row per analysed pair
///
/// `analyses` must have been computed from `pairs`; analyses whose pair id
/// falls outside `pairs` are skipped.
///
/// # Errors
///
/// Returns an error if serialization or the underlying writer fails
///
/// # Panics
/// Panics if a pair's length lies outside `lengths`.
pub fn write_analysis_csv<W: Write>(
    writer: W,
    pairs: &[SplitPair],
    analyses: &[PairAnalysis],
    lengths: WordLengths,
) -> Result<usize, csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for analysis in analyses {
        let Some(pair) = pairs.get(analysis.pair_id()) else {
            continue;
        };
        let width = pair.shape().solution_len();
        let base = PairRecord::new(pair, lengths);
        csv.serialize(AnalysisRecord {
            word1: base.word1,
            word2: base.word2,
            split1: base.split1,
            split2: base.split2,
            shape_id: base.shape_id,
            shape_index: base.shape_index,
            shape_length: base.shape_length,
            solution: base.solution,
            usable: base.usable,
            usability: base.usability,
            mistakeables: mistakeables_field(analysis.mistakeables(), width),
            constraints: constraints_field(analysis.constraints(), "|"),
        })?;
        rows += 1;
    }
    csv.flush()?;
    Ok(rows)
}
