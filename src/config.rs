//! Runtime configuration
//!
//! Assembled by the binary from command-line flags and their environment
//! variable fallbacks.

use crate::core::Word;
use crate::error::GameError;
use crate::scores::FileScoreStore;
use crate::wordlists::{EmbeddedWordList, FileWordList, WordSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::Level;

/// Default location of the score file, relative to the working directory
pub const DEFAULT_SCORES_PATH: &str = "data/scores.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Custom word list; the embedded list is used when unset
    pub words_path: Option<PathBuf>,
    pub scores_path: PathBuf,
    /// Seed for reproducible answer selection
    pub seed: Option<u64>,
    /// Number of `-v` flags given
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: None,
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            seed: None,
            verbosity: 0,
        }
    }
}

impl Config {
    /// Log level for the given verbosity: warn, info, then debug
    #[must_use]
    pub const fn log_level(&self) -> Level {
        match self.verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Load the configured vocabulary
    ///
    /// # Errors
    ///
    /// Returns an error if the custom word list is missing or has no valid words.
    pub fn load_vocabulary(&self) -> Result<Vec<Word>, GameError> {
        match &self.words_path {
            Some(path) => FileWordList::new(path).load_candidates(),
            None => EmbeddedWordList.load_candidates(),
        }
    }

    #[must_use]
    pub fn score_store(&self) -> FileScoreStore {
        FileScoreStore::new(&self.scores_path)
    }

    /// Random source for answer selection, seeded when a seed is configured
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS_COUNT;
    use rand::Rng;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.words_path.is_none());
        assert_eq!(config.scores_path, PathBuf::from("data/scores.txt"));
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn verbosity_raises_log_level() {
        let info = Config {
            verbosity: 1,
            ..Config::default()
        };
        assert_eq!(info.log_level(), Level::INFO);

        let debug = Config {
            verbosity: 3,
            ..Config::default()
        };
        assert_eq!(debug.log_level(), Level::DEBUG);
    }

    #[test]
    fn embedded_vocabulary_by_default() {
        let words = Config::default().load_vocabulary().unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
    }

    #[test]
    fn custom_vocabulary_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        let config = Config {
            words_path: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        assert_eq!(config.load_vocabulary().unwrap().len(), 2);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = Config {
            seed: Some(1234),
            ..Config::default()
        };
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
