//! Target word representation
//!
//! A `TargetWord` stores the word to be guessed along with an index of its
//! interior letters (every position except the first and the last).

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Shortest word that still has an interior to guess
pub const MIN_WORD_LEN: usize = 3;

/// A lowercase ASCII word with interior letter position tracking
///
/// The first and last letters are always shown to the player, so only the
/// interior positions take part in guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    text: String,
    interior_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid target words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must have at least {min} letters, got {0}", min = MIN_WORD_LEN)]
    TooShort(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl TargetWord {
    /// Create a new target word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is below [`MIN_WORD_LEN`]
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::TargetWord;
    ///
    /// let word = TargetWord::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    ///
    /// assert!(TargetWord::new("hi").is_err());
    /// assert!(TargetWord::new("he11o").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        let bytes = text.as_bytes();
        let mut interior_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in bytes.iter().enumerate().take(bytes.len() - 1).skip(1) {
            interior_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            interior_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: construction rejects short words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `position` is the first or last letter
    #[inline]
    #[must_use]
    pub fn is_edge(&self, position: usize) -> bool {
        position == 0 || position + 1 == self.len()
    }

    /// Check if a letter occurs anywhere in the interior
    #[inline]
    #[must_use]
    pub fn interior_has(&self, letter: u8) -> bool {
        self.interior_positions.contains_key(&letter)
    }

    /// Get all interior positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear in the interior.
    #[inline]
    pub fn interior_positions_of(&self, letter: u8) -> &[usize] {
        self.interior_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Distinct letters of the interior
    pub fn interior_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.interior_positions.keys().copied()
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
