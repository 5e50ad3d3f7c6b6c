//! Size measurement utilities.
//!
//! This module measures the logical and on-disk size of single files and
//! walks directory trees to aggregate them. Failures on individual files
//! inside a tree never abort a walk; they are recorded as [`FileOutcome::Skipped`]
//! so callers can report or count them.

use std::{
    fs::{self, Metadata},
    path::{Path, PathBuf},
};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

/// Size of the allocation blocks reported by `st_blocks`.
pub const BLOCK_SIZE: u64 = 512;

/// A file that could not be measured during a directory walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Skip {
    /// Path of the file (or unreadable directory) that was left out
    pub path: PathBuf,

    /// Human-readable reason, usually the underlying I/O error
    pub reason: String,
}

/// Result of measuring one entry found while walking a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was measured and contributes to the totals.
    Counted {
        /// Byte length of the file
        logical: u64,
        /// Storage actually allocated for the file
        on_disk: u64,
    },

    /// The file could not be measured and is left out of the totals.
    Skipped(Skip),
}

/// Aggregated sizes of everything below a directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirSize {
    /// Sum of the logical sizes of all counted files
    pub logical: u64,

    /// Sum of the on-disk sizes of all counted files
    pub on_disk: u64,

    /// Number of files that contributed to the sums
    pub files: usize,

    /// Files that were left out, in walk order
    pub skipped: Vec<Skip>,
}

impl DirSize {
    /// Fold a single file outcome into the running totals.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Counted { logical, on_disk } => {
                self.logical = self.logical.saturating_add(logical);
                self.on_disk = self.on_disk.saturating_add(on_disk);
                self.files += 1;
            }
            FileOutcome::Skipped(skip) => self.skipped.push(skip),
        }
    }
}

/// Storage allocated for a file, in bytes.
///
/// On Unix this is the number of 512-byte blocks times [`BLOCK_SIZE`]. Other
/// platforms do not expose a block count, so the logical length is used.
#[cfg(unix)]
#[must_use]
pub fn size_on_disk(metadata: &Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;

    metadata.blocks().saturating_mul(BLOCK_SIZE)
}

/// Storage allocated for a file, in bytes.
///
/// This platform does not expose a block count, so the logical length is used.
#[cfg(not(unix))]
#[must_use]
pub fn size_on_disk(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Calculate the logical and on-disk size of a directory and all its contents.
///
/// Traverses the tree with `walkdir` without following symbolic links, so
/// symlinked sub-directories are neither descended into nor counted, which
/// also rules out cycles. A symlink that points at a file is counted with
/// the sizes of its target. Directories themselves add nothing; only the
/// files inside them do.
#[must_use]
pub fn calculate_dir_size(path: &Path) -> DirSize {
    let mut size = DirSize::default();

    for entry in WalkDir::new(path).follow_links(false) {
        let outcome = match entry {
            Ok(entry) => measure_entry(&entry),
            Err(err) => Some(FileOutcome::Skipped(Skip {
                path: err.path().unwrap_or(path).to_path_buf(),
                reason: err.to_string(),
            })),
        };

        if let Some(outcome) = outcome {
            size.record(outcome);
        }
    }

    size
}

/// Measure one walked entry, or `None` if it is not a file.
fn measure_entry(entry: &DirEntry) -> Option<FileOutcome> {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return None;
    }

    let metadata = if file_type.is_symlink() {
        fs::metadata(entry.path()).map_err(|e| e.to_string())
    } else {
        entry.metadata().map_err(|e| e.to_string())
    };

    match metadata {
        Ok(metadata) if metadata.is_dir() => None,
        Ok(metadata) => Some(FileOutcome::Counted {
            logical: metadata.len(),
            on_disk: size_on_disk(&metadata),
        }),
        Err(reason) => Some(FileOutcome::Skipped(Skip {
            path: entry.path().to_path_buf(),
            reason,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_file(path: &Path, len: usize) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, vec![b'x'; len]).unwrap();
    }

    #[test]
    fn test_record_counts_and_skips() {
        let mut size = DirSize::default();
        size.record(FileOutcome::Counted {
            logical: 10,
            on_disk: 512,
        });
        size.record(FileOutcome::Skipped(Skip {
            path: PathBuf::from("gone"),
            reason: "No such file or directory".to_string(),
        }));
        size.record(FileOutcome::Counted {
            logical: 5,
            on_disk: 0,
        });

        assert_eq!(size.logical, 15);
        assert_eq!(size.on_disk, 512);
        assert_eq!(size.files, 2);
        assert_eq!(size.skipped.len(), 1);
        assert_eq!(size.skipped[0].path, PathBuf::from("gone"));
    }

    #[test]
    fn test_record_saturates() {
        let mut size = DirSize {
            logical: u64::MAX - 1,
            ..DirSize::default()
        };
        size.record(FileOutcome::Counted {
            logical: 10,
            on_disk: 0,
        });
        assert_eq!(size.logical, u64::MAX);
    }

    #[test]
    fn test_calculate_dir_size_sums_nested_files() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("a.bin"), 100);
        create_file(&tmp.path().join("sub").join("b.bin"), 200);
        create_file(&tmp.path().join("sub").join("deep").join("c.bin"), 4096);

        let size = calculate_dir_size(tmp.path());

        assert_eq!(size.logical, 4396);
        assert_eq!(size.files, 3);
        assert!(size.skipped.is_empty());
    }

    #[test]
    fn test_calculate_dir_size_empty_dir() {
        let tmp = TempDir::new().unwrap();
        let size = calculate_dir_size(tmp.path());

        assert_eq!(size, DirSize::default());
    }

    #[cfg(unix)]
    #[test]
    fn test_size_on_disk_counts_blocks() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data.bin");
        create_file(&path, 4096);

        let metadata = fs::metadata(&path).unwrap();
        assert_eq!(size_on_disk(&metadata) % BLOCK_SIZE, 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_calculate_dir_size_skips_broken_symlink() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("real.bin"), 64);
        std::os::unix::fs::symlink(tmp.path().join("missing"), tmp.path().join("dangling"))
            .unwrap();

        let size = calculate_dir_size(tmp.path());

        assert_eq!(size.logical, 64);
        assert_eq!(size.files, 1);
        assert_eq!(size.skipped.len(), 1);
        assert_eq!(size.skipped[0].path, tmp.path().join("dangling"));
    }

    #[cfg(unix)]
    #[test]
    fn test_calculate_dir_size_does_not_follow_dir_symlinks() {
        let tmp = TempDir::new().unwrap();
        create_file(&tmp.path().join("inner").join("file.bin"), 300);
        // A link back to the root would loop forever if followed.
        std::os::unix::fs::symlink(tmp.path(), tmp.path().join("inner").join("loop")).unwrap();

        let size = calculate_dir_size(tmp.path());

        assert_eq!(size.logical, 300);
        assert_eq!(size.files, 1);
        assert!(size.skipped.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_calculate_dir_size_counts_file_symlink_target() {
        let tmp = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        create_file(&outside.path().join("target.bin"), 1000);
        std::os::unix::fs::symlink(outside.path().join("target.bin"), tmp.path().join("link"))
            .unwrap();

        let size = calculate_dir_size(tmp.path());

        assert_eq!(size.logical, 1000);
        assert_eq!(size.files, 1);
    }
}
