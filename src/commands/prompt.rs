//! Prompt lookup command
//!
//! Shows every pair sharing a prompt with a given pair or word, together
//! with their analysis.

use crate::ambiguity::{PairAnalysis, group_by_prompt};
use crate::core::{Prompt, SplitPair, Word};
use rustc_hash::FxHashMap;

/// One member of a looked-up prompt group
pub struct PromptMember {
    pub pair: SplitPair,
    pub analysis: Option<PairAnalysis>,
    /// Whether this member matched the query
    pub matched: bool,
}

/// A prompt group touched by the query
pub struct PromptResult {
    pub prompt: Prompt,
    pub members: Vec<PromptMember>,
}

/// Find the prompt groups containing a pair or word
///
/// `query` is either pair notation such as `s(in/cr)ew` or a single word, in
/// which case every pair built from that word is looked up.
///
/// # Errors
///
/// Returns an error if:
/// - The query is neither valid pair notation nor a valid word
/// - No discovered pair matches the query
pub fn lookup_prompt(
    query: &str,
    pairs: &[SplitPair],
    analyses: &[PairAnalysis],
) -> Result<Vec<PromptResult>, String> {
    let is_match: Box<dyn Fn(&SplitPair) -> bool> = if query.contains('(') {
        let wanted: SplitPair = query.parse().map_err(|e| format!("Invalid pair: {e}"))?;
        // Either orientation names the same pair
        Box::new(move |pair: &SplitPair| {
            (pair.word1() == wanted.word1() && pair.word2() == wanted.word2())
                || (pair.word1() == wanted.word2() && pair.word2() == wanted.word1())
        })
    } else {
        let word = Word::new(query).map_err(|e| format!("Invalid word: {e}"))?;
        Box::new(move |pair: &SplitPair| pair.word1() == word.text() || pair.word2() == word.text())
    };

    let by_id: FxHashMap<usize, &PairAnalysis> =
        analyses.iter().map(|a| (a.pair_id(), a)).collect();

    let results: Vec<PromptResult> = group_by_prompt(pairs)
        .into_iter()
        .filter(|group| group.members().iter().any(|pair| is_match(pair)))
        .map(|group| PromptResult {
            prompt: group.prompt(),
            members: group
                .iter()
                .map(|(id, pair)| PromptMember {
                    pair: pair.clone(),
                    analysis: by_id.get(&id).map(|&a| a.clone()),
                    matched: is_match(pair),
                })
                .collect(),
        })
        .collect();

    if results.is_empty() {
        return Err(format!("No split pair matches '{query}'"));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambiguity::AmbiguityFinder;
    use crate::config::{AnalysisPolicy, WordLengths};

    fn fixture() -> (Vec<SplitPair>, Vec<PairAnalysis>) {
        let mut pairs: Vec<SplitPair> = ["s(in/cr)ew", "s(in/cr)aw", "b(on/it)e", "b(it/an)e"]
            .iter()
            .map(|p| p.parse().unwrap())
            .collect();
        pairs.sort();
        let analyses = AmbiguityFinder::new(WordLengths::default(), AnalysisPolicy::All).analyze(&pairs);
        (pairs, analyses)
    }

    #[test]
    fn lookup_by_notation() {
        let (pairs, analyses) = fixture();
        let results = lookup_prompt("s(in/cr)ew", &pairs, &analyses).unwrap();

        assert_eq!(results.len(), 1);
        let group = &results[0];
        assert_eq!(group.prompt.to_string(), "-(in/cr)--");
        assert_eq!(group.members.len(), 2);
        assert_eq!(group.members.iter().filter(|m| m.matched).count(), 1);
        assert!(group.members.iter().all(|m| m.analysis.is_some()));
    }

    #[test]
    fn lookup_by_swapped_notation() {
        let (pairs, analyses) = fixture();
        let results = lookup_prompt("s(cr/in)ew", &pairs, &analyses).unwrap();
        assert_eq!(results[0].prompt.to_string(), "-(in/cr)--");
    }

    #[test]
    fn lookup_by_word_finds_every_prompt() {
        let (pairs, analyses) = fixture();
        let results = lookup_prompt("BITE", &pairs, &analyses).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.members.iter().any(|m| m.matched)));
    }

    #[test]
    fn lookup_errors() {
        let (pairs, analyses) = fixture();
        assert!(lookup_prompt("zebra", &pairs, &analyses).is_err());
        assert!(lookup_prompt("s(in/c)ew", &pairs, &analyses).is_err());
        assert!(lookup_prompt("not a word", &pairs, &analyses).is_err());
    }
}
