//! Word Guess
//!
//! A Wordle-style word guessing game: a hidden five-letter answer, six
//! guesses, and per-letter feedback after each one.
//!
//! # Quick Start
//!
//! ```rust
//! use word_guess::core::Word;
//! use word_guess::game::{Outcome, Round};
//!
//! let mut round = Round::with_answer(Word::new("crane").unwrap());
//!
//! let evaluated = round.submit_guess("slate").unwrap();
//! assert_eq!(evaluated.attempts, 1);
//! println!("{}", evaluated.feedback.to_emoji());
//!
//! let evaluated = round.submit_guess("crane").unwrap();
//! assert_eq!(evaluated.outcome, Outcome::Won { attempts: 2 });
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Rounds and sessions
pub mod game;

// Score recording and statistics
pub mod scores;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;
