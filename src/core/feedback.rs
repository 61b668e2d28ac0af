//! Per-letter feedback for an evaluated guess
//!
//! Each position of a guess is classified as:
//! - `Exact` (letter in the correct position)
//! - `Present` (letter in the answer, wrong position)
//! - `Absent` (letter not in the answer, or all its occurrences already credited)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    Exact,
    Present,
    Absent,
}

impl LetterResult {
    /// Single-character code used in compact output (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one result per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterResult; WORD_LENGTH]);

impl Feedback {
    /// All exact (the guess is the answer)
    pub const SOLVED: Self = Self([LetterResult::Exact; WORD_LENGTH]);

    /// Classify `guess` against `answer`
    ///
    /// Duplicate letters are resolved against a letter-frequency count of the
    /// answer, so a letter occurring N times in the answer is credited at most
    /// N times across the guess.
    ///
    /// # Algorithm
    /// 1. Exact pass: mark position matches and consume those letters
    /// 2. Present pass: mark remaining letters that still have budget left
    /// 3. Absent pass: everything unclassified
    ///
    /// # Examples
    /// ```
    /// use word_guess::core::{Feedback, LetterResult::*, Word};
    ///
    /// let guess = Word::new("lotto").unwrap();
    /// let answer = Word::new("allot").unwrap();
    ///
    /// let feedback = Feedback::classify(&guess, &answer);
    /// assert_eq!(feedback.results(), &[Present, Present, Present, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, answer: &Word) -> Self {
        let mut result: [Option<LetterResult>; WORD_LENGTH] = [None; WORD_LENGTH];
        let mut remaining = answer.letter_counts();

        // Exact pass
        for (slot, (&g, &a)) in result
            .iter_mut()
            .zip(guess.chars().iter().zip(answer.chars()))
        {
            if g == a {
                *slot = Some(LetterResult::Exact);
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Present pass
        for (slot, &g) in result.iter_mut().zip(guess.chars()) {
            if slot.is_none()
                && let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                *slot = Some(LetterResult::Present);
                *count -= 1;
            }
        }

        // Absent pass
        Self(result.map(|slot| slot.unwrap_or(LetterResult::Absent)))
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    #[must_use]
    pub fn count(&self, kind: LetterResult) -> usize {
        self.0.iter().filter(|&&r| r == kind).count()
    }

    /// Convert feedback to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.0 {
            write!(f, "{}", r.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterResult::{Absent, Exact, Present};
    use super::*;

    fn classify(guess: &str, answer: &str) -> Feedback {
        Feedback::classify(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn all_absent() {
        let feedback = classify("abcde", "fghij");
        assert_eq!(feedback.results(), &[Absent; 5]);
        assert_eq!(feedback.count(Absent), 5);
    }

    #[test]
    fn guessing_the_answer_is_all_exact() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "allot"] {
            let feedback = classify(word, word);
            assert_eq!(feedback, Feedback::SOLVED);
            assert!(feedback.is_solved());
        }
    }

    #[test]
    fn repeated_guess_letters_limited_by_answer_count() {
        // Answer has two l's, one o, one t; the second t and o get nothing
        let feedback = classify("lotto", "allot");
        assert_eq!(
            feedback.results(),
            &[Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_present() {
        // ROBOT vs FLOOR: first O is yellow, second O is green
        let feedback = classify("robot", "floor");
        assert_eq!(
            feedback.results(),
            &[Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn exact_consumes_budget_before_present_pass() {
        // One e in the answer, matched exactly at position 4; earlier e's are absent
        let feedback = classify("eerie", "crane");
        assert_eq!(feedback.results(), &[Absent, Absent, Present, Absent, Exact]);
    }

    #[test]
    fn duplicate_letters_in_answer_both_credited() {
        // SPEED vs ERASE: both E's are yellow
        let feedback = classify("speed", "erase");
        assert_eq!(
            feedback.results(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn classic_example() {
        let feedback = classify("crane", "slate");
        assert_eq!(feedback.results(), &[Absent, Absent, Exact, Absent, Exact]);
    }

    #[test]
    fn frequency_map_is_rebuilt_per_guess() {
        let answer = Word::new("abbot").unwrap();
        let guess = Word::new("bobby").unwrap();
        let first = Feedback::classify(&guess, &answer);
        let second = Feedback::classify(&guess, &answer);
        assert_eq!(first, second);
    }

    #[test]
    fn credited_count_matches_min_of_occurrences() {
        let words = [
            "allot", "lotto", "abbot", "bobby", "speed", "erase", "eerie", "crane", "aaaaa",
            "llama", "sassy", "geese", "robot", "floor",
        ];

        for guess_text in words {
            for answer_text in words {
                let guess = Word::new(guess_text).unwrap();
                let answer = Word::new(answer_text).unwrap();
                let feedback = Feedback::classify(&guess, &answer);

                for letter in b'a'..=b'z' {
                    let in_guess = guess.chars().iter().filter(|&&c| c == letter).count();
                    let in_answer = answer.chars().iter().filter(|&&c| c == letter).count();
                    let credited = guess
                        .chars()
                        .iter()
                        .zip(feedback.results())
                        .filter(|&(&c, &r)| c == letter && r != Absent)
                        .count();
                    assert_eq!(
                        credited,
                        in_guess.min(in_answer),
                        "letter {} in {guess_text} vs {answer_text}",
                        letter as char
                    );
                }
            }
        }
    }

    #[test]
    fn emoji_and_code_rendering() {
        let feedback = classify("robot", "floor");
        assert_eq!(feedback.to_emoji(), "🟨🟨⬜🟩⬜");
        assert_eq!(feedback.to_string(), "YY-G-");
    }
}
