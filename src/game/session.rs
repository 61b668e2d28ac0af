//! Game session: the current round plus score recording

use super::round::{EvaluatedGuess, Outcome, Round};
use crate::core::Word;
use crate::error::GameError;
use crate::scores::{Score, ScoreDistribution, ScoreStore};
use rand::Rng;
use tracing::warn;

/// Outcome of one accepted guess, plus any non-fatal persistence failure
#[derive(Debug)]
pub struct Turn {
    pub evaluated: EvaluatedGuess,
    /// Set when the round was won but the score could not be recorded
    pub warning: Option<GameError>,
}

/// Drives rounds over a fixed vocabulary and records wins
///
/// A session owns its round exclusively; drive it from a single thread.
pub struct Session<S: ScoreStore, R: Rng> {
    vocabulary: Vec<Word>,
    store: S,
    rng: R,
    round: Round,
}

impl<S: ScoreStore, R: Rng> Session<S, R> {
    /// Create a session and start its first round
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyVocabulary` if `vocabulary` is empty.
    pub fn new(vocabulary: Vec<Word>, store: S, mut rng: R) -> Result<Self, GameError> {
        let round = Round::start(&vocabulary, &mut rng)?;
        Ok(Self {
            vocabulary,
            store,
            rng,
            round,
        })
    }

    /// Replace the current round with a fresh one
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyVocabulary` if the vocabulary is empty.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        self.round = Round::start(&self.vocabulary, &mut self.rng)?;
        Ok(())
    }

    /// Submit a guess to the current round, recording the score on a win
    ///
    /// A failed score write never undoes the win; it is logged and returned
    /// in `Turn::warning`.
    ///
    /// # Errors
    ///
    /// Returns the round's validation or `RoundAlreadyFinished` error.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Turn, GameError> {
        let evaluated = self.round.submit_guess(raw)?;

        let warning = evaluated
            .score()
            .and_then(|score| self.store.append_score(score).err())
            .inspect(|e| warn!(error = %e, "Win not recorded"));

        Ok(Turn { evaluated, warning })
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        self.round.outcome()
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    /// Load every recorded score
    ///
    /// # Errors
    ///
    /// Returns the store's read error.
    pub fn scores(&self) -> Result<Vec<Score>, GameError> {
        self.store.load_scores()
    }

    /// Summarize recorded scores
    ///
    /// # Errors
    ///
    /// Returns the store's read error.
    pub fn distribution(&self) -> Result<ScoreDistribution, GameError> {
        Ok(ScoreDistribution::from_scores(&self.store.load_scores()?))
    }

    /// Erase every recorded score
    ///
    /// # Errors
    ///
    /// Returns the store's write error.
    pub fn clear_scores(&mut self) -> Result<(), GameError> {
        self.store.clear_scores()
    }
}
