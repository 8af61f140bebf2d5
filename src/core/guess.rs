//! Player input classification
//!
//! Turns one raw line of player input into a quit request, a single lowercase
//! letter, or a rejection reason.

use std::fmt;

/// Keyword that ends the session, matched case-insensitively
pub const QUIT_KEYWORD: &str = "quit";

/// Why a raw input was not accepted as a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Input contains something other than ASCII letters (or is empty)
    NotAlphabetic,
    /// Input is alphabetic but longer than one letter
    NotSingleCharacter,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAlphabetic => write!(f, "not alphabetic"),
            Self::NotSingleCharacter => write!(f, "not single character"),
        }
    }
}

/// Classified player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    Quit,
    Letter(u8),
    Invalid(InvalidReason),
}

impl Guess {
    /// Classify a raw input line
    ///
    /// The alphabetic check runs before the length check, so `"12"` is
    /// reported as not alphabetic rather than too long.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Guess, InvalidReason};
    ///
    /// assert_eq!(Guess::parse("E"), Guess::Letter(b'e'));
    /// assert_eq!(Guess::parse("QuIt"), Guess::Quit);
    /// assert_eq!(Guess::parse("ab"), Guess::Invalid(InvalidReason::NotSingleCharacter));
    /// assert_eq!(Guess::parse("1"), Guess::Invalid(InvalidReason::NotAlphabetic));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(QUIT_KEYWORD) {
            return Self::Quit;
        }

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Self::Invalid(InvalidReason::NotAlphabetic);
        }

        match raw.as_bytes() {
            [letter] => Self::Letter(letter.to_ascii_lowercase()),
            _ => Self::Invalid(InvalidReason::NotSingleCharacter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letter_lowercases() {
        assert_eq!(Guess::parse("a"), Guess::Letter(b'a'));
        assert_eq!(Guess::parse("Z"), Guess::Letter(b'z'));
    }

    #[test]
    fn parse_quit_any_case() {
        assert_eq!(Guess::parse("quit"), Guess::Quit);
        assert_eq!(Guess::parse("QUIT"), Guess::Quit);
        assert_eq!(Guess::parse("Quit"), Guess::Quit);
    }

    #[test]
    fn parse_quit_with_padding_is_not_quit() {
        assert_eq!(
            Guess::parse(" quit"),
            Guess::Invalid(InvalidReason::NotAlphabetic)
        );
    }

    #[test]
    fn parse_multiple_letters() {
        assert_eq!(
            Guess::parse("ab"),
            Guess::Invalid(InvalidReason::NotSingleCharacter)
        );
        assert_eq!(
            Guess::parse("quits"),
            Guess::Invalid(InvalidReason::NotSingleCharacter)
        );
    }

    #[test]
    fn parse_non_alphabetic() {
        assert_eq!(
            Guess::parse("1"),
            Guess::Invalid(InvalidReason::NotAlphabetic)
        );
        assert_eq!(
            Guess::parse("12"),
            Guess::Invalid(InvalidReason::NotAlphabetic)
        );
        assert_eq!(
            Guess::parse("a1"),
            Guess::Invalid(InvalidReason::NotAlphabetic)
        );
        assert_eq!(
            Guess::parse(""),
            Guess::Invalid(InvalidReason::NotAlphabetic)
        );
        assert_eq!(
            Guess::parse("é"),
            Guess::Invalid(InvalidReason::NotAlphabetic)
        );
    }

    #[test]
    fn invalid_reason_display() {
        assert_eq!(InvalidReason::NotAlphabetic.to_string(), "not alphabetic");
        assert_eq!(
            InvalidReason::NotSingleCharacter.to_string(),
            "not single character"
        );
    }
}
