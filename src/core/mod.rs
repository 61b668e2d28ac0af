//! Core domain types for the word game
//!
//! Pure, dependency-light types: validated words and per-letter feedback.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterResult};
pub use word::{WORD_LENGTH, Word};
