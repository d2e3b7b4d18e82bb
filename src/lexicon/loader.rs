//! Word list loading
//!
//! Dictionaries are plain text files with one word per line.

use super::Lexicon;
use crate::config::WordLengths;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load a lexicon from a file
///
/// Invalid and out-of-range lines are skipped, as in `Lexicon::from_words`.
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use split_decisions::config::WordLengths;
/// use split_decisions::lexicon::load_from_file;
///
/// let lexicon = load_from_file("data/dictionary.txt", WordLengths::default()).unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, lengths: WordLengths) -> Result<Lexicon, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Lexicon::from_words(content.lines(), lengths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_words_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Sinew\nscrew\n\nit\ncan't\nsinew\r").unwrap();

        let lex = load_from_file(file.path(), WordLengths::default()).unwrap();

        assert_eq!(lex.len(), 2);
        assert!(lex.contains("sinew"));
        assert!(lex.contains("screw"));
    }

    #[test]
    fn empty_file_gives_empty_lexicon() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let lex = load_from_file(file.path(), WordLengths::default()).unwrap();
        assert!(lex.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_from_file(&missing, WordLengths::default()).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
