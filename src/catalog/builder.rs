//! Offline catalog preparation
//!
//! Turns a raw `word,frequency` corpus into a ranked catalog: words shorter
//! than the configured minimum are dropped, the rest are ordered by
//! descending frequency and the list is cut to a fixed size.

use super::{CandidateWordList, CatalogFile};
use crate::core::{MIN_WORD_LEN, TargetWord};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, trace};

/// What was wrong with a corpus line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// No `,` between word and frequency.
    #[error("missing ',' separator")]
    MissingSeparator,
    /// Frequency is not a non-negative integer.
    #[error("invalid frequency '{0}'")]
    InvalidFrequency(String),
}

/// Errors that can occur while building a catalog
#[derive(Debug, Error)]
pub enum BuildError {
    /// Malformed corpus line (1-based line number).
    #[error("corpus line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    /// Corpus file could not be opened.
    #[error("failed to open corpus {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the corpus stream failed.
    #[error("failed to read corpus: {0}")]
    Read(#[from] io::Error),

    /// Catalog output could not be written.
    #[error("failed to write catalog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog could not be serialized.
    #[error("failed to serialize catalog {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Builder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
    /// Shortest word kept in the catalog
    pub min_word_len: usize,
    /// Maximum number of words in the catalog
    pub total_words: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            min_word_len: 5,
            total_words: 2000,
        }
    }
}

/// Counters collected during a build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Non-blank corpus lines parsed
    pub parsed: usize,
    /// Words that passed the length and alphabet filter
    pub eligible: usize,
    /// Words in the final catalog
    pub kept: usize,
}

/// Ranks a frequency corpus into a [`CandidateWordList`]
#[derive(Debug, Clone, Copy)]
pub struct WordCatalogBuilder {
    config: BuildConfig,
}

impl WordCatalogBuilder {
    /// Create a builder
    ///
    /// A minimum length below [`MIN_WORD_LEN`] is raised to it, since shorter
    /// words have no interior letters to guess.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        let min_word_len = config.min_word_len.max(MIN_WORD_LEN);
        if min_word_len != config.min_word_len {
            debug!(
                requested = config.min_word_len,
                min_word_len, "raised minimum word length"
            );
        }
        Self {
            config: BuildConfig {
                min_word_len,
                ..config
            },
        }
    }

    #[must_use]
    pub fn config(&self) -> BuildConfig {
        self.config
    }

    /// Build a catalog from a corpus file
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Open`] if the file cannot be opened, otherwise
    /// see [`build_from_reader`](Self::build_from_reader).
    pub fn build_from_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(CandidateWordList, BuildReport), BuildError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BuildError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.build_from_reader(BufReader::new(file))
    }

    /// Build a catalog from `word,frequency` lines
    ///
    /// Blank lines are skipped. Ties in frequency keep their corpus order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Parse`] on the first malformed line and
    /// [`BuildError::Read`] if the stream fails.
    ///
    /// # Examples
    /// ```
    /// use hangman::catalog::{BuildConfig, WordCatalogBuilder};
    ///
    /// let corpus = "apple,10\nkiwi,99\nmelon,30\n\ngrape,30\n";
    /// let builder = WordCatalogBuilder::new(BuildConfig { min_word_len: 5, total_words: 2 });
    /// let (catalog, _) = builder.build_from_reader(corpus.as_bytes()).unwrap();
    /// assert_eq!(catalog.texts(), vec!["melon", "grape"]);
    /// ```
    pub fn build_from_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<(CandidateWordList, BuildReport), BuildError> {
        let mut report = BuildReport::default();
        let mut entries: Vec<(String, u64)> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let (word, frequency) = parse_line(&line).map_err(|kind| BuildError::Parse {
                line: idx + 1,
                kind,
            })?;
            report.parsed += 1;

            if self.is_eligible(&word) {
                entries.push((word, frequency));
            } else {
                trace!(word = %word, "dropped by filter");
            }
        }
        report.eligible = entries.len();

        // Stable: equal frequencies keep corpus order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(self.config.total_words);

        let words: Vec<TargetWord> = entries
            .into_iter()
            .filter_map(|(word, _)| TargetWord::new(word).ok())
            .collect();
        report.kept = words.len();

        info!(
            parsed = report.parsed,
            eligible = report.eligible,
            kept = report.kept,
            "built catalog"
        );
        Ok((CandidateWordList::new(words), report))
    }

    fn is_eligible(&self, word: &str) -> bool {
        word.len() >= self.config.min_word_len && word.bytes().all(|b| b.is_ascii_lowercase())
    }

    /// Write a catalog as a JSON array of words
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Write`] on I/O failure and
    /// [`BuildError::Serialize`] if encoding fails.
    pub fn save<P: AsRef<Path>>(catalog: &CandidateWordList, path: P) -> Result<(), BuildError> {
        let path = path.as_ref();
        let write_err = |source| BuildError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &CatalogFile::from(catalog)).map_err(|source| {
            BuildError::Serialize {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.flush().map_err(write_err)?;

        debug!(path = %path.display(), words = catalog.len(), "saved catalog");
        Ok(())
    }
}

/// Split one corpus line into a lowercased word and its frequency
fn parse_line(line: &str) -> Result<(String, u64), ParseErrorKind> {
    let (word, frequency) = line
        .split_once(',')
        .ok_or(ParseErrorKind::MissingSeparator)?;

    let frequency = frequency.trim();
    let frequency = frequency
        .parse::<u64>()
        .map_err(|_| ParseErrorKind::InvalidFrequency(frequency.to_string()))?;

    Ok((word.trim().to_lowercase(), frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(corpus: &str, min_word_len: usize, total_words: usize) -> Vec<String> {
        let builder = WordCatalogBuilder::new(BuildConfig {
            min_word_len,
            total_words,
        });
        let (catalog, _) = builder.build_from_reader(corpus.as_bytes()).unwrap();
        catalog.texts().into_iter().map(String::from).collect()
    }

    #[test]
    fn parse_line_valid() {
        assert_eq!(parse_line("hello,42"), Ok(("hello".to_string(), 42)));
        assert_eq!(parse_line("Hello, 42 "), Ok(("hello".to_string(), 42)));
    }

    #[test]
    fn parse_line_missing_separator() {
        assert_eq!(parse_line("hello 42"), Err(ParseErrorKind::MissingSeparator));
    }

    #[test]
    fn parse_line_invalid_frequency() {
        assert_eq!(
            parse_line("hello,lots"),
            Err(ParseErrorKind::InvalidFrequency("lots".to_string()))
        );
        assert_eq!(
            parse_line("hello,-3"),
            Err(ParseErrorKind::InvalidFrequency("-3".to_string()))
        );
        // A second comma ends up in the frequency field
        assert_eq!(
            parse_line("hello,1,2"),
            Err(ParseErrorKind::InvalidFrequency("1,2".to_string()))
        );
    }

    #[test]
    fn filters_by_length_and_sorts_by_frequency() {
        let corpus = "the,900\nabout,100\npeople,300\nwould,200\n";
        assert_eq!(build(corpus, 5, 10), vec!["people", "would", "about"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let corpus = "melon,5\napple,7\ngrape,5\nlemon,5\n";
        assert_eq!(build(corpus, 5, 10), vec!["apple", "melon", "grape", "lemon"]);
    }

    #[test]
    fn truncates_after_filtering() {
        let corpus = "a,1000\nbb,999\nfirst,30\nsecond,20\nthird,10\n";
        assert_eq!(build(corpus, 5, 2), vec!["first", "second"]);
    }

    #[test]
    fn skips_blank_lines_and_crlf() {
        let corpus = "\napple,3\r\n\r\n   \ngrape,4\n";
        assert_eq!(build(corpus, 5, 10), vec!["grape", "apple"]);
    }

    #[test]
    fn drops_non_alphabetic_words() {
        let corpus = "don't,50\nx-ray,40\nhello,30\n";
        assert_eq!(build(corpus, 5, 10), vec!["hello"]);
    }

    #[test]
    fn lowercases_words() {
        assert_eq!(build("HELLO,3\n", 5, 10), vec!["hello"]);
    }

    #[test]
    fn parse_error_reports_line_number() {
        let builder = WordCatalogBuilder::new(BuildConfig::default());
        let err = builder
            .build_from_reader("apple,1\n\nbroken\n".as_bytes())
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::Parse {
                line: 3,
                kind: ParseErrorKind::MissingSeparator
            }
        ));
        assert_eq!(err.to_string(), "corpus line 3: missing ',' separator");
    }

    #[test]
    fn invalid_frequency_message_names_value() {
        let builder = WordCatalogBuilder::new(BuildConfig::default());
        let err = builder
            .build_from_reader("apple,lots\n".as_bytes())
            .unwrap_err();
        assert_eq!(err.to_string(), "corpus line 1: invalid frequency 'lots'");
    }

    #[test]
    fn minimum_length_is_raised_to_three() {
        let builder = WordCatalogBuilder::new(BuildConfig {
            min_word_len: 1,
            total_words: 10,
        });
        assert_eq!(builder.config().min_word_len, MIN_WORD_LEN);
        assert_eq!(build("ab,9\nabc,1\n", 1, 10), vec!["abc"]);
    }

    #[test]
    fn report_counts_stages() {
        let builder = WordCatalogBuilder::new(BuildConfig {
            min_word_len: 5,
            total_words: 1,
        });
        let (_, report) = builder
            .build_from_reader("the,9\napple,3\ngrape,4\n".as_bytes())
            .unwrap();
        assert_eq!(
            report,
            BuildReport {
                parsed: 3,
                eligible: 2,
                kept: 1
            }
        );
    }

    #[test]
    fn empty_corpus_builds_empty_catalog() {
        assert!(build("", 5, 10).is_empty());
    }
}
