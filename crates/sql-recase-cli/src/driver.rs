//! File and directory driver.
//!
//! Loads each file whole, runs the rewriter over the buffer once, and
//! overwrites the file in place. Directories are swept with an explicit
//! to-visit stack so the total file count is known before processing
//! starts, which feeds the progress display. Files are processed strictly
//! sequentially; the first I/O failure aborts the run.

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use miette::{IntoDiagnostic, Result, WrapErr};

use sql_recase::StatementRewriter;

/// Process one named file with a single-slot progress bar.
pub fn process_single(rewriter: &StatementRewriter, path: &Path) -> Result<()> {
    let progress = file_progress_bar(1);
    process_file(rewriter, path, &progress)?;
    progress.finish();
    Ok(())
}

/// Process every file under `dir`, sequentially.
pub fn process_directory(rewriter: &StatementRewriter, dir: &Path) -> Result<()> {
    let files = collect_files(dir)?;
    let progress = file_progress_bar(files.len() as u64);

    for file in &files {
        process_file(rewriter, file, &progress)?;
    }

    progress.finish();
    Ok(())
}

/// Rewrite a single file in place and tick the progress bar.
fn process_file(rewriter: &StatementRewriter, path: &Path, progress: &ProgressBar) -> Result<()> {
    tracing::debug!("Processing file '{}'", path.display());

    let data = std::fs::read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;

    let outcome = rewriter.rewrite(&data);

    std::fs::write(path, &outcome.text)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    progress.inc(1);
    tracing::info!(
        keywords = outcome.keywords_matched,
        regions = outcome.regions,
        "Processed file {}",
        path.display()
    );
    Ok(())
}

/// Collect every regular file under `dir`, at any depth.
///
/// Iterative traversal with an explicit stack; order is not significant.
fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut to_visit = vec![dir.to_path_buf()];

    while let Some(current) = to_visit.pop() {
        tracing::debug!("Scanning directory '{}'", current.display());
        let entries = std::fs::read_dir(&current)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read directory {}", current.display()))?;

        for entry in entries {
            let entry = entry
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to read directory {}", current.display()))?;
            let path = entry.path();
            if path.is_dir() {
                to_visit.push(path);
            } else {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Progress bar showing `files processed / total files`.
fn file_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len}")
            .expect("Failed to create progress bar template")
            .progress_chars("#>-"),
    );
    bar
}
