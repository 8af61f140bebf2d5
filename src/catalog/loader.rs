//! Catalog file loading
//!
//! A catalog file is a JSON array of lowercase words, as written by
//! [`WordCatalogBuilder::save`](super::WordCatalogBuilder::save).

use super::CandidateWordList;
use crate::core::TargetWord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file missing or unreadable.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog content is not a JSON array of strings.
    #[error("malformed catalog {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk catalog layout: a bare JSON array of words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogFile {
    pub words: Vec<String>,
}

impl From<&CandidateWordList> for CatalogFile {
    fn from(catalog: &CandidateWordList) -> Self {
        Self {
            words: catalog
                .words()
                .iter()
                .map(|word| word.text().to_owned())
                .collect(),
        }
    }
}

/// Load a catalog from a JSON file
///
/// The file is opened, read in full and closed before this returns. Entries
/// that are not valid target words are skipped with a warning.
///
/// # Errors
///
/// Returns [`CatalogError::Read`] if the file cannot be opened or read, and
/// [`CatalogError::Malformed`] if it is not a JSON array of strings.
///
/// # Examples
/// ```no_run
/// use hangman::catalog::load_from_file;
///
/// let catalog = load_from_file("data/preprocessed_words.json").unwrap();
/// println!("Loaded {} words", catalog.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CandidateWordList, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = load_from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            CatalogError::Read {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            CatalogError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    debug!(path = %path.display(), words = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parse a catalog from any JSON source
///
/// # Errors
///
/// Returns the underlying `serde_json` error if the input is not a JSON
/// array of strings.
pub fn load_from_reader<R: Read>(reader: R) -> Result<CandidateWordList, serde_json::Error> {
    let CatalogFile { words: raw } = serde_json::from_reader(reader)?;
    let total = raw.len();

    let words: Vec<TargetWord> = raw
        .into_iter()
        .filter_map(|entry| match TargetWord::new(entry.as_str()) {
            Ok(word) if word.text() == entry => Some(word),
            Ok(_) => {
                warn!(entry = %entry, "skipping catalog entry that is not lowercase");
                None
            }
            Err(e) => {
                warn!(entry = %entry, error = %e, "skipping invalid catalog entry");
                None
            }
        })
        .collect();

    if words.len() < total {
        warn!(skipped = total - words.len(), "catalog contained invalid entries");
    }

    Ok(CandidateWordList::new(words))
}
