//! Error taxonomy for the game core and its storage collaborators

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while starting rounds, submitting guesses, or touching storage
///
/// `InvalidLength` and `InvalidCharacters` are recoverable: the round is left
/// untouched and the player may try again. `ScorePersistence` is reported
/// alongside a win and never undoes it.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("The word list is empty")]
    EmptyVocabulary,
    #[error("Guesses must be exactly 5 letters long (got {0})")]
    InvalidLength(usize),
    #[error("Guesses must contain only letters")]
    InvalidCharacters,
    #[error("The round is already finished; start a new round")]
    RoundAlreadyFinished,
    #[error("Failed to record score")]
    ScorePersistence(#[source] io::Error),
    #[error("Failed to read word list {}", path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to access score file {}", path.display())]
    ScoreStore {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid score on line {line}: {content:?}")]
    CorruptScore { line: usize, content: String },
}

impl GameError {
    /// True for errors the player can fix by submitting a different guess
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidLength(_) | Self::InvalidCharacters)
    }
}
