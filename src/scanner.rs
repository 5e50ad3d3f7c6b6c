//! Size collection for the paths given on the command line.
//!
//! Each input path is measured once, sequentially and in input order. A
//! path that cannot be found is recorded as missing and left out of the
//! entries; everything else becomes a [`FileEntry`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::RunConfig,
    entry::{Entries, FileEntry},
    utils::{calculate_dir_size, size_on_disk},
};

/// Result of measuring a single input path.
#[derive(Debug)]
pub enum Collected {
    /// The path exists and was measured.
    Entry(FileEntry),

    /// The path does not exist (or its metadata cannot be read at all).
    Missing(PathBuf),
}

/// Everything collected for one invocation.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Measured paths, in input order
    pub entries: Entries,

    /// Paths that could not be found, in input order
    pub missing: Vec<PathBuf>,
}

/// Measure a single path.
///
/// Symbolic links given directly are followed. Regular files (and anything
/// else that is not a directory) report their own length and allocation.
/// Directories report the sums over every file below them; files that
/// cannot be measured are attached to the entry as skips.
#[must_use]
pub fn measure_path(path: &Path) -> Collected {
    let Ok(metadata) = fs::metadata(path) else {
        return Collected::Missing(path.to_path_buf());
    };

    if metadata.is_dir() {
        let size = calculate_dir_size(path);
        let entry = FileEntry::new(path, size.logical, size.on_disk, true);
        Collected::Entry(entry.with_skipped(size.skipped))
    } else {
        Collected::Entry(FileEntry::new(
            path,
            metadata.len(),
            size_on_disk(&metadata),
            false,
        ))
    }
}

/// Measure every path in order.
#[must_use]
pub fn scan_paths(paths: &[PathBuf]) -> ScanResult {
    let mut entries = Vec::with_capacity(paths.len());
    let mut missing = Vec::new();

    for path in paths {
        match measure_path(path) {
            Collected::Entry(entry) => entries.push(entry),
            Collected::Missing(path) => missing.push(path),
        }
    }

    ScanResult {
        entries: entries.into(),
        missing,
    }
}

/// Measure the configured paths and apply the configured ordering.
#[must_use]
pub fn collect(config: &RunConfig) -> ScanResult {
    let mut result = scan_paths(&config.paths);

    if config.sort {
        result.entries.sort_by_size();
    }

    result
}
