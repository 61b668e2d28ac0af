//! Random answer selection

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick an answer uniformly at random from the vocabulary
///
/// The vocabulary is left untouched; the only side effect is consuming
/// entropy from `rng`.
///
/// # Errors
///
/// Returns `GameError::EmptyVocabulary` if `vocabulary` is empty.
pub fn choose_answer<'a, R: Rng + ?Sized>(
    vocabulary: &'a [Word],
    rng: &mut R,
) -> Result<&'a Word, GameError> {
    vocabulary.choose(rng).ok_or(GameError::EmptyVocabulary)
}
