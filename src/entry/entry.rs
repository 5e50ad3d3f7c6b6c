//! Core entry data structure.
//!
//! A [`FileEntry`] is built once for every input path that exists and is
//! never modified afterwards.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::utils::Skip;

/// The measured sizes of one input path.
#[derive(Clone, Debug, Serialize)]
pub struct FileEntry {
    /// Base name of the path as given on the command line
    ///
    /// Falls back to the full argument when the path has no final component
    /// (for example `..` or `/`).
    pub name: String,

    /// Absolute path of the entry
    pub path: PathBuf,

    /// Logical size in bytes
    ///
    /// For a directory this is the sum of the sizes of all files below it.
    pub size: u64,

    /// Allocated size in bytes
    pub size_on_disk: u64,

    /// Whether the entry is a directory
    pub is_dir: bool,

    /// Files below a directory entry that could not be measured
    pub skipped: Vec<Skip>,
}

impl FileEntry {
    /// Create an entry for `path`, deriving its display name and absolute path.
    #[must_use]
    pub fn new(path: &Path, size: u64, size_on_disk: u64, is_dir: bool) -> Self {
        Self {
            name: display_name(path),
            path: absolute_path(path),
            size,
            size_on_disk,
            is_dir,
            skipped: Vec::new(),
        }
    }

    /// Attach the files skipped while measuring this entry.
    #[must_use]
    pub fn with_skipped(mut self, skipped: Vec<Skip>) -> Self {
        self.skipped = skipped;
        self
    }
}

/// Absolute form of `path` with `.` and `..` resolved lexically.
///
/// Symlinks are left as they are.
fn absolute_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();

    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    normalized
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
