//! Human-readable table output.
//!
//! Every function here builds a `String` so the layout can be tested; the
//! binary decides where it is printed. Colours come from `colored` and are
//! controlled globally through [`crate::config::ColorMode::apply`].
//!
//! # Output Format
//!
//! ```text
//! File       |       Size       |       Size on Disk       |       Path
//! ----------------------------------------------------------------------
//! Error: 'ghost.txt' not found
//! notes.txt       |       2 KiB       |       4 KiB       |       /home/me/notes.txt
//! src       |       4.29296875 KiB       |       16 KiB       |       /home/me/src   This is a directory
//! ----------------------------------------------------------------------
//! Total size: 6.29296875 KiB
//! ```

use std::path::Path;

use colored::Colorize;

use crate::{
    config::RunConfig,
    entry::{Entries, FileEntry},
    scanner::ScanResult,
    units::{Unit, format_size},
};

/// Separator placed around the `|` between columns.
pub const SPACE: &str = "       ";

/// Width of the horizontal rules.
pub const RULE_WIDTH: usize = 130;

/// Annotation appended to directory rows.
pub const DIRECTORY_NOTE: &str = "This is a directory";

/// The column heading followed by a rule.
#[must_use]
pub fn render_header() -> String {
    let heading = format!("File{SPACE}|{SPACE}Size{SPACE}|{SPACE}Size on Disk{SPACE}|{SPACE}Path");
    format!("{}\n{}\n", heading.bold(), "-".repeat(RULE_WIDTH))
}

/// The inline error for a path that does not exist.
#[must_use]
pub fn render_missing(path: &Path) -> String {
    format!("Error: '{}' not found", path.display())
        .red()
        .bold()
        .to_string()
}

/// One table row; sizes use `forced` when given, the best unit otherwise.
#[must_use]
pub fn render_row(entry: &FileEntry, forced: Option<Unit>) -> String {
    let note = if entry.is_dir {
        format!("   {}", DIRECTORY_NOTE.purple())
    } else {
        String::new()
    };

    format!(
        "{name}{SPACE}|{SPACE}{size}{SPACE}|{SPACE}{disk}{SPACE}|{SPACE}{path}{note}",
        name = entry.name,
        size = format_size(entry.size, forced),
        disk = format_size(entry.size_on_disk, forced),
        path = entry.path.display(),
    )
}

/// A rule followed by the total line.
#[must_use]
pub fn render_total(total_bytes: u64, unit: Option<Unit>) -> String {
    format!(
        "{}\n{}\n",
        "-".repeat(RULE_WIDTH),
        format!("Total size: {}", format_size(total_bytes, unit)).cyan()
    )
}

/// Suggestion to use `unit` instead of the forced one.
#[must_use]
pub fn render_recommendation(unit: Unit) -> String {
    format!(
        "\n{}\n",
        format!("Recommendation: use {unit} for these files")
            .red()
            .bold()
    )
}

/// The complete report written to stdout.
///
/// Missing-path errors come right after the heading, in input order,
/// followed by the rows in the order of `result.entries`. The total is
/// printed when `config.total` is set; the recommendation whenever a forced
/// unit differs from the best unit for the total size.
#[must_use]
pub fn render_report(result: &ScanResult, config: &RunConfig) -> String {
    let mut out = render_header();

    for path in &result.missing {
        out.push_str(&render_missing(path));
        out.push('\n');
    }

    for entry in &result.entries {
        out.push_str(&render_row(entry, config.forced_unit));
        out.push('\n');
    }

    if config.total {
        out.push_str(&render_total(
            result.entries.get_total_size(),
            config.total_line_unit(),
        ));
    }

    if let Some(unit) = result.entries.recommendation(config.forced_unit) {
        out.push_str(&render_recommendation(unit));
    }

    out
}

/// Per-entry listing of files left out of directory sizes.
///
/// Returns an empty string when nothing was skipped.
#[must_use]
pub fn render_skipped(entries: &Entries) -> String {
    let mut out = String::new();

    for entry in entries.iter().filter(|e| !e.skipped.is_empty()) {
        let heading = format!(
            "Skipped {} file(s) under {}",
            entry.skipped.len(),
            entry.path.display()
        );
        out.push_str(&format!("{}\n", heading.yellow()));

        for skip in &entry.skipped {
            out.push_str(&format!("  {}: {}\n", skip.path.display(), skip.reason));
        }
    }

    out
}
