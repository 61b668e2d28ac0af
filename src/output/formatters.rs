//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult, Word};
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its classification
#[must_use]
pub fn letter_tile(letter: char, result: LetterResult) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match result {
        LetterResult::Exact => tile.white().bold().on_green(),
        LetterResult::Present => tile.black().bold().on_yellow(),
        LetterResult::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.results())
        .map(|(c, &r)| letter_tile(c, r).to_string())
        .collect()
}

/// Placeholder row for an attempt slot not yet used
#[must_use]
pub fn empty_row() -> String {
    " _ ".repeat(5).bright_black().to_string()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = (value * width).checked_div(max).unwrap_or(0).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
