//! Word catalogs
//!
//! A catalog is the finite list of candidate words a session draws from. It
//! is built offline from a frequency corpus ([`builder`]), stored as a JSON
//! array ([`loader`]), or taken from the list compiled into the binary.

pub mod builder;
mod embedded;
pub mod loader;

use crate::core::TargetWord;
use rand::Rng;
use rand::prelude::IndexedRandom;

pub use builder::{BuildConfig, BuildError, BuildReport, ParseErrorKind, WordCatalogBuilder};
pub use embedded::{DEFAULT_CATALOG, DEFAULT_CATALOG_COUNT};
pub use loader::{CatalogError, CatalogFile, load_from_file};

/// Ordered, immutable list of candidate target words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateWordList {
    words: Vec<TargetWord>,
}

impl CandidateWordList {
    /// Build a list from already validated words, keeping their order
    #[must_use]
    pub fn new(words: Vec<TargetWord>) -> Self {
        Self { words }
    }

    /// Convert strings to a list, skipping entries that are not valid targets
    ///
    /// # Examples
    /// ```
    /// use hangman::catalog::CandidateWordList;
    ///
    /// let list = CandidateWordList::from_words(["crane", "ok", "sl4te", "slate"]);
    /// assert_eq!(list.texts(), vec!["crane", "slate"]);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| TargetWord::new(w.as_ref()).ok())
            .collect();
        Self { words }
    }

    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DEFAULT_CATALOG)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in catalog order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[TargetWord] {
        &self.words
    }

    /// Words as string slices, in catalog order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words().iter().map(TargetWord::text).collect()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.text() == word)
    }

    /// Pick a word uniformly at random, or `None` if the list is empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&TargetWord> {
        self.words.choose(rng)
    }
}
