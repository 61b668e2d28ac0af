//! Round state machine
//!
//! A round binds one answer and accepts guesses until it is won or the
//! attempts run out:
//!
//! ```text
//!   InProgress ──correct guess──▶ Won(attempts)
//!       │
//!       └──6th wrong guess──▶ Lost(answer)
//! ```
//!
//! Terminal states reject every further submission.

use super::selector::choose_answer;
use crate::core::{Feedback, Word};
use crate::error::GameError;
use crate::scores::Score;
use rand::Rng;
use tracing::{debug, info};

/// Maximum number of guesses per round
pub const MAX_ATTEMPTS: u8 = 6;

/// Round outcome as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won { attempts: u8 },
    Lost { answer: Word },
}

impl Outcome {
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of submitting a valid guess to an active round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatedGuess {
    pub guess: Word,
    pub feedback: Feedback,
    /// Attempt count after this guess (1..=6)
    pub attempts: u8,
    pub outcome: Outcome,
}

impl EvaluatedGuess {
    /// Score to record, present only when this guess won the round
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        match self.outcome {
            Outcome::Won { attempts } => Score::new(attempts),
            _ => None,
        }
    }
}

/// A single round of the game
#[derive(Debug, Clone)]
pub struct Round {
    answer: Word,
    attempts: Vec<Attempt>,
    outcome: Outcome,
}

impl Round {
    /// Start a round with an answer drawn from `vocabulary`
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyVocabulary` if `vocabulary` is empty.
    pub fn start<R: Rng + ?Sized>(vocabulary: &[Word], rng: &mut R) -> Result<Self, GameError> {
        let answer = choose_answer(vocabulary, rng)?.clone();
        debug!(candidates = vocabulary.len(), "Started new round");
        Ok(Self::with_answer(answer))
    }

    /// Start a round with a fixed answer
    #[must_use]
    pub const fn with_answer(answer: Word) -> Self {
        Self {
            answer,
            attempts: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Submit raw player text as the next guess
    ///
    /// A finished round rejects every submission. Otherwise the text is
    /// validated first; an invalid guess leaves the round untouched and does
    /// not consume an attempt.
    ///
    /// # Errors
    ///
    /// - `GameError::RoundAlreadyFinished` if the round is won or lost
    /// - `GameError::InvalidLength` / `GameError::InvalidCharacters` for bad input
    pub fn submit_guess(&mut self, raw: &str) -> Result<EvaluatedGuess, GameError> {
        if self.outcome.is_finished() {
            return Err(GameError::RoundAlreadyFinished);
        }

        let guess = Word::new(raw)?;
        let feedback = Feedback::classify(&guess, &self.answer);

        self.attempts.push(Attempt {
            guess: guess.clone(),
            feedback,
        });
        let attempts = self.attempt_count();

        if guess == self.answer {
            info!(attempts, "Round won");
            self.outcome = Outcome::Won { attempts };
        } else if attempts >= MAX_ATTEMPTS {
            info!(answer = %self.answer, "Round lost");
            self.outcome = Outcome::Lost {
                answer: self.answer.clone(),
            };
        } else {
            debug!(attempts, feedback = %feedback, "Guess evaluated");
        }

        Ok(EvaluatedGuess {
            guess,
            feedback,
            attempts,
            outcome: self.outcome.clone(),
        })
    }

    #[must_use]
    pub const fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Number of accepted guesses so far (0..=6)
    #[must_use]
    pub fn attempt_count(&self) -> u8 {
        // Never exceeds MAX_ATTEMPTS
        self.attempts.len() as u8
    }

    /// Accepted guesses in submission order; index i renders into slot i
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        MAX_ATTEMPTS - self.attempt_count()
    }

    /// The answer, revealed only once the round is finished
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        self.outcome.is_finished().then_some(&self.answer)
    }
}
