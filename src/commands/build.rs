//! Catalog build command
//!
//! Runs the [`WordCatalogBuilder`] over a corpus file with a progress bar and
//! writes the resulting catalog.

use crate::catalog::{BuildConfig, BuildError, BuildReport, WordCatalogBuilder};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Build a catalog from `corpus` and save it to `output`
///
/// # Errors
///
/// Returns an error if the corpus cannot be read or parsed, or if the
/// catalog cannot be written.
pub fn run_build(corpus: &Path, output: &Path, config: BuildConfig) -> Result<BuildReport> {
    let file = File::open(corpus).map_err(|source| BuildError::Open {
        path: corpus.to_path_buf(),
        source,
    })?;
    let total_bytes = file.metadata().map(|m| m.len()).unwrap_or_default();

    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} | {msg}")
            .context("invalid progress template")?
            .progress_chars("█▓▒░"),
    );
    pb.set_message("ranking corpus");

    let builder = WordCatalogBuilder::new(config);
    let result = builder.build_from_reader(BufReader::new(pb.wrap_read(file)));
    pb.finish_and_clear();
    let (catalog, report) = result?;

    WordCatalogBuilder::save(&catalog, output)?;
    info!(
        corpus = %corpus.display(),
        output = %output.display(),
        words = report.kept,
        "catalog written"
    );
    Ok(report)
}
