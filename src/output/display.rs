//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, empty_row};
use crate::core::{Feedback, Word};
use crate::game::{MAX_ATTEMPTS, Outcome, Round};
use crate::scores::ScoreDistribution;
use colored::Colorize;

/// Authorship line shown in the banner and the TUI header
pub const CREDITS: &str = "By: Michael Rutherford | Copyright 2022";

/// Print the feedback for a single guess against a known answer
pub fn print_check_result(guess: &Word, answer: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.text().to_uppercase().bright_white().bold(),
        answer.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", colored_guess(guess, feedback));
    println!("  {}  {}\n", feedback.to_emoji(), feedback);
}

/// Print every attempt slot of a round, filled or not
pub fn print_board(round: &Round) {
    println!();
    for slot in 0..usize::from(MAX_ATTEMPTS) {
        let label = format!("{}/{MAX_ATTEMPTS}", slot + 1).bright_black();
        match round.attempts().get(slot) {
            Some(attempt) => println!(
                "  {label}  {}",
                colored_guess(&attempt.guess, &attempt.feedback)
            ),
            None => println!("  {label}  {}", empty_row()),
        }
    }
    println!();
}

/// Print the end-of-round banner
pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::InProgress => {}
        Outcome::Won { attempts } => {
            println!("{}", "═".repeat(40).bright_cyan());
            println!(
                "  {} {}",
                "Correct!".bright_green().bold(),
                format!("{attempts}/{MAX_ATTEMPTS}").bright_cyan().bold()
            );
            println!("{}", "═".repeat(40).bright_cyan());
        }
        Outcome::Lost { answer } => {
            println!("{}", "═".repeat(40).bright_red());
            println!(
                "  Correct answer: {}",
                answer.text().to_uppercase().bright_yellow().bold()
            );
            println!("{}", "═".repeat(40).bright_red());
        }
    }
}

/// Print the score distribution as horizontal bars
pub fn print_distribution(dist: &ScoreDistribution) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SCORE DISTRIBUTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if dist.is_empty() {
        println!("\n   No wins recorded yet.\n");
        return;
    }

    println!("\n   Wins:        {}", dist.total().to_string().bright_yellow());
    if let Some(mean) = dist.mean() {
        println!("   Average:     {mean:.2} guesses");
    }
    if let Some(mode) = dist.mode() {
        println!("   Most common: {mode}");
    }
    println!();

    let max = dist.max_count();
    for (attempts, count) in dist.iter() {
        let bar = create_progress_bar(count, max, 40);
        println!("   {attempts}: {} {count:4}", bar.green());
    }
    println!();
}
