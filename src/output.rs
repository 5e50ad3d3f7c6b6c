//! Structured JSON output for scripting and piping.
//!
//! When the `-json` flag is passed, these structures are serialized to
//! stdout as a single JSON object, replacing all human-readable output.
//! Missing paths are listed in the document instead of being printed as
//! error lines, and the total is always included.

use serde::Serialize;

use crate::{
    config::RunConfig,
    entry::FileEntry,
    scanner::ScanResult,
    units::{Unit, format_size},
    utils::Skip,
};

/// Top-level JSON output emitted when `-json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// Measured paths, in display order.
    pub entries: Vec<JsonEntry>,

    /// Paths that could not be found, in input order.
    pub missing: Vec<String>,

    /// Aggregated sizes across all entries.
    pub total: JsonTotal,

    /// Unit suggested instead of the forced one, or `null`.
    pub recommendation: Option<Unit>,
}

/// A single measured path in the JSON output.
#[derive(Debug, Serialize)]
pub struct JsonEntry {
    /// Base name of the path
    pub name: String,

    /// Absolute path
    pub path: String,

    /// Whether the path is a directory
    pub is_dir: bool,

    /// Logical size in bytes
    pub size: u64,

    /// Allocated size in bytes
    pub size_on_disk: u64,

    /// Logical size in the display unit (e.g. `"2 KiB"`)
    pub size_formatted: String,

    /// Allocated size in the display unit
    pub size_on_disk_formatted: String,

    /// Files below a directory that could not be measured
    pub skipped: Vec<Skip>,
}

/// Aggregated sizes.
#[derive(Debug, Serialize)]
pub struct JsonTotal {
    /// Sum of the logical sizes in bytes
    pub size: u64,

    /// Sum of the allocated sizes in bytes
    pub size_on_disk: u64,

    /// Total logical size in the total unit
    pub size_formatted: String,

    /// Number of files skipped across all entries
    pub skipped_count: usize,
}

impl JsonOutput {
    /// Build the JSON document for a finished scan.
    #[must_use]
    pub fn from_scan(result: &ScanResult, config: &RunConfig) -> Self {
        let entries = &result.entries;
        let total_size = entries.get_total_size();

        Self {
            entries: entries
                .iter()
                .map(|entry| JsonEntry::from_entry(entry, config.forced_unit))
                .collect(),
            missing: result
                .missing
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            total: JsonTotal {
                size: total_size,
                size_on_disk: entries.get_total_size_on_disk(),
                size_formatted: format_size(total_size, config.total_line_unit()),
                skipped_count: entries.skipped_count(),
            },
            recommendation: entries.recommendation(config.forced_unit),
        }
    }
}

impl JsonEntry {
    /// Convert a `FileEntry` into a `JsonEntry`, formatting sizes in `forced`
    /// or the best unit.
    #[must_use]
    pub fn from_entry(entry: &FileEntry, forced: Option<Unit>) -> Self {
        Self {
            name: entry.name.clone(),
            path: entry.path.display().to_string(),
            is_dir: entry.is_dir,
            size: entry.size,
            size_on_disk: entry.size_on_disk,
            size_formatted: format_size(entry.size, forced),
            size_on_disk_formatted: format_size(entry.size_on_disk, forced),
            skipped: entry.skipped.clone(),
        }
    }
}
