//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::WORDS;
use crate::core::Word;
use crate::error::GameError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A source of candidate answers
pub trait WordSource {
    /// Load normalized five-letter candidate words
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or yields no valid words.
    fn load_candidates(&self) -> Result<Vec<Word>, GameError>;
}

/// Word list read from a newline-delimited text file
#[derive(Debug, Clone)]
pub struct FileWordList {
    path: PathBuf,
}

impl FileWordList {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWordList {
    fn load_candidates(&self) -> Result<Vec<Word>, GameError> {
        load_from_file(&self.path)
    }
}

/// The vocabulary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordList;

impl WordSource for EmbeddedWordList {
    fn load_candidates(&self) -> Result<Vec<Word>, GameError> {
        let words = words_from_slice(WORDS);
        if words.is_empty() {
            return Err(GameError::EmptyVocabulary);
        }
        Ok(words)
    }
}

/// Load words from a file
///
/// Lines are trimmed and lowercased; blank lines and entries that are not
/// five letters are skipped.
///
/// # Errors
///
/// - `GameError::WordList` if the file cannot be read
/// - `GameError::EmptyVocabulary` if no valid word remains
///
/// # Examples
/// ```no_run
/// use word_guess::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let words = words_from_slice(&entries);

    let skipped = entries.len() - words.len();
    if skipped > 0 {
        debug!(skipped, path = %path.display(), "Skipped invalid word list entries");
    }

    if words.is_empty() {
        return Err(GameError::EmptyVocabulary);
    }

    debug!(count = words.len(), path = %path.display(), "Loaded word list");
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use word_guess::wordlists::loader::words_from_slice;
/// use word_guess::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        assert!(words_from_slice(&[]).is_empty());
    }

    #[test]
    fn load_from_file_normalizes_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Crane\n\n  slate  \nnope\nIRATE").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(GameError::WordList { .. })));
    }

    #[test]
    fn load_from_empty_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\n\nabc\n").unwrap();

        assert!(matches!(
            load_from_file(file.path()),
            Err(GameError::EmptyVocabulary)
        ));
    }

    #[test]
    fn file_source_loads_candidates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        let source = FileWordList::new(file.path());
        assert_eq!(source.load_candidates().unwrap().len(), 2);
    }

    #[test]
    fn embedded_source_matches_const() {
        let words = EmbeddedWordList.load_candidates().unwrap();
        assert_eq!(words.len(), WORDS.len());
    }
}
