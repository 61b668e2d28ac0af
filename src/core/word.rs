//! Five-letter word representation
//!
//! A `Word` is the validated form of both answers and guesses.

use crate::error::GameError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated five-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Validate and normalize raw player input
    ///
    /// Surrounding whitespace is trimmed and the text lowercased, then two
    /// rules are checked in order: the length must be exactly 5 characters,
    /// and every character must be an ASCII letter.
    ///
    /// Letters outside ASCII (`crème`) are deliberately rejected rather than
    /// treated as alphabetic: every answer is ASCII, so such a guess could
    /// only waste an attempt.
    ///
    /// # Errors
    /// - `GameError::InvalidLength` if the trimmed text is not 5 characters
    /// - `GameError::InvalidCharacters` if any character is not a letter
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::Word;
    ///
    /// let word = Word::new(" Crane ").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("ab").is_err());
    /// assert!(Word::new("ab12c").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, GameError> {
        let text = raw.trim().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(GameError::InvalidLength(len));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(GameError::InvalidCharacters);
        }

        // All five characters are ASCII, so the byte length is five as well
        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| GameError::InvalidLength(text.len()))?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Count how many times each letter occurs
    ///
    /// Built fresh on every call; classification consumes the counts.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap().text(), "crane");
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  slate\n").unwrap().text(), "slate");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new("ab"), Err(GameError::InvalidLength(2))));
        assert!(matches!(
            Word::new("toolong"),
            Err(GameError::InvalidLength(7))
        ));
        assert!(matches!(Word::new(""), Err(GameError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("ab12c"),
            Err(GameError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("cr ne"),
            Err(GameError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("cran!"),
            Err(GameError::InvalidCharacters)
        ));
    }

    #[test]
    fn length_is_checked_before_characters() {
        // Both rules fail; length is reported
        assert!(matches!(Word::new("1234"), Err(GameError::InvalidLength(4))));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters but one is non-ASCII
        assert!(matches!(
            Word::new("café!"),
            Err(GameError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("crème"),
            Err(GameError::InvalidCharacters)
        ));
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b'e'), Some(&2));
        assert_eq!(counts.get(&b'z'), None);
    }

    #[test]
    fn word_letter_counts_all_same() {
        let counts = Word::new("aaaaa").unwrap().letter_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'a'), Some(&5));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
