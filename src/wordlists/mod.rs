//! Word lists for answer selection
//!
//! Provides the embedded vocabulary and loaders for custom word list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{EmbeddedWordList, FileWordList, WordSource};
