//! Score persistence
//!
//! Scores are stored as plain text, one integer (1-6) per line, in the order
//! the rounds were won.

use crate::error::GameError;
use crate::game::MAX_ATTEMPTS;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Attempt count at which a round was won (1..=6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Create a score, rejecting values outside 1..=6
    #[must_use]
    pub const fn new(attempts: u8) -> Option<Self> {
        if attempts >= 1 && attempts <= MAX_ATTEMPTS {
            Some(Self(attempts))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persistent ordered sequence of past scores
pub trait ScoreStore {
    /// Append one score to the end of the sequence
    ///
    /// # Errors
    ///
    /// Returns `GameError::ScorePersistence` if the score cannot be written.
    fn append_score(&mut self, score: Score) -> Result<(), GameError>;

    /// Load every recorded score in the order they were appended
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or is corrupt.
    fn load_scores(&self) -> Result<Vec<Score>, GameError>;

    /// Remove every recorded score
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be cleared.
    fn clear_scores(&mut self) -> Result<(), GameError>;
}

/// Parse newline-delimited scores, ignoring blank lines
///
/// # Errors
///
/// Returns `GameError::CorruptScore` for the first line that is not an
/// integer in 1..=6 (lines are numbered from 1).
pub fn parse_scores(content: &str) -> Result<Vec<Score>, GameError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let trimmed = line.trim();
            trimmed
                .parse::<u8>()
                .ok()
                .and_then(Score::new)
                .ok_or_else(|| GameError::CorruptScore {
                    line: i + 1,
                    content: trimmed.to_string(),
                })
        })
        .collect()
}

/// Whether the file is empty or its last byte is a newline
fn ends_with_newline(file: &mut fs::File) -> io::Result<bool> {
    let len = file.metadata()?.len();
    if len == 0 {
        return Ok(true);
    }
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Score store backed by a text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn store_error(&self, source: io::Error) -> GameError {
        GameError::ScoreStore {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileScoreStore {
    fn append_score(&mut self, score: Score) -> Result<(), GameError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(GameError::ScorePersistence)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(GameError::ScorePersistence)?;
        if !ends_with_newline(&mut file).map_err(GameError::ScorePersistence)? {
            writeln!(file).map_err(GameError::ScorePersistence)?;
        }
        writeln!(file, "{score}").map_err(GameError::ScorePersistence)?;

        debug!(score = score.value(), path = %self.path.display(), "Recorded score");
        Ok(())
    }

    fn load_scores(&self) -> Result<Vec<Score>, GameError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => parse_scores(&content),
            // No wins recorded yet
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.store_error(e)),
        }
    }

    fn clear_scores(&mut self) -> Result<(), GameError> {
        match fs::File::create(&self.path) {
            Ok(_) => {
                info!(path = %self.path.display(), "Cleared scores");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.store_error(e)),
        }
    }
}

/// In-memory score store
///
/// With `failing()` every append fails, which exercises the
/// persistence-warning path without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    scores: Vec<Score>,
    fail_appends: bool,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            scores: Vec::new(),
            fail_appends: true,
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn append_score(&mut self, score: Score) -> Result<(), GameError> {
        if self.fail_appends {
            return Err(GameError::ScorePersistence(io::Error::other(
                "score store is read-only",
            )));
        }
        self.scores.push(score);
        Ok(())
    }

    fn load_scores(&self) -> Result<Vec<Score>, GameError> {
        Ok(self.scores.clone())
    }

    fn clear_scores(&mut self) -> Result<(), GameError> {
        self.scores.clear();
        Ok(())
    }
}
