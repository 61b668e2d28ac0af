//! Guess check command
//!
//! Scores a single guess against a chosen answer without starting a round.

use crate::core::{Feedback, Word};
use crate::error::GameError;

/// Result of checking a guess
pub struct CheckResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: Feedback,
}

/// Validate both words and classify the guess
///
/// # Errors
///
/// Returns the validation error of whichever word is invalid, guess first.
pub fn check_guess(guess: &str, answer: &str) -> Result<CheckResult, GameError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;
    let feedback = Feedback::classify(&guess, &answer);

    Ok(CheckResult {
        guess,
        answer,
        feedback,
    })
}
