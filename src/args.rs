//! Token-level argument parsing.
//!
//! The command line is not a conventional flag grammar: paths may be grouped
//! in square brackets (`[a.txt b.txt]`), flags use a single dash
//! (`-sort`, `-tunit:GiB`), and a trailing unit name (`MiB`) forces the
//! display unit. This module turns the raw tokens into an [`Invocation`].
//!
//! Brackets are purely cosmetic. They are tracked by a two-state scanner and
//! never validated, so unbalanced brackets are accepted as they come.

use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;

use crate::units::Unit;

/// Flag that sorts rows by size, largest first.
pub const SORT_FLAG: &str = "-sort";
/// Flag that prints the total after the table.
pub const TOTAL_FLAG: &str = "-total";
/// Prefix of the flag selecting the unit of the total line.
pub const TOTAL_UNIT_PREFIX: &str = "-tunit:";
/// Flag that switches the output to JSON.
pub const JSON_FLAG: &str = "-json";
/// Flag that lists files skipped while walking directories.
pub const VERBOSE_FLAG: &str = "-verbose";
/// Flag that disables ANSI colours.
pub const NO_COLOR_FLAG: &str = "-nocolor";

const HELP_FLAGS: [&str; 2] = ["-help", "--help"];
const VERSION_FLAGS: [&str; 2] = ["-version", "--version"];

/// What the user asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments at all.
    NoArguments,

    /// `-help` or `--help` appeared somewhere.
    Help,

    /// `-version` or `--version` appeared somewhere.
    Version,

    /// A normal run over at least one path.
    Run(CliOptions),
}

/// Options taken from the command line, before config-file defaults apply.
#[derive(Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CliOptions {
    /// `-sort` was given
    pub sort: bool,

    /// `-total` was given
    pub total: bool,

    /// Unit from `-tunit:<unit>`
    pub total_unit: Option<Unit>,

    /// Trailing unit token that forces the display unit
    pub forced_unit: Option<Unit>,

    /// `-json` was given
    pub json: bool,

    /// `-verbose` was given
    pub verbose: bool,

    /// `-nocolor` was given
    pub no_color: bool,

    /// Paths to measure, in input order; never empty
    pub paths: Vec<PathBuf>,
}

/// Parse the raw argument tokens (without the program name).
///
/// Help takes priority over everything else, then version. Presence flags
/// are recognised anywhere in the token list, including inside brackets.
///
/// # Errors
///
/// Returns an error if:
/// - A `-tunit:` flag names an unknown unit
/// - No paths remain once flags and the trailing unit are removed
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Invocation> {
    let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

    if tokens.is_empty() {
        return Ok(Invocation::NoArguments);
    }
    if tokens.iter().any(|t| HELP_FLAGS.contains(t)) {
        return Ok(Invocation::Help);
    }
    if tokens.iter().any(|t| VERSION_FLAGS.contains(t)) {
        return Ok(Invocation::Version);
    }

    let has = |flag: &str| tokens.contains(&flag);
    let total_unit = parse_total_unit(&tokens)?;

    let mut paths = scan_paths(&tokens);
    let forced_unit = take_forced_unit(&mut paths);

    if paths.is_empty() {
        bail!("no files specified. Use brackets [file1 file2].");
    }

    Ok(Invocation::Run(CliOptions {
        sort: has(SORT_FLAG),
        total: has(TOTAL_FLAG) || total_unit.is_some(),
        total_unit,
        forced_unit,
        json: has(JSON_FLAG),
        verbose: has(VERBOSE_FLAG),
        no_color: has(NO_COLOR_FLAG),
        paths: paths.into_iter().map(PathBuf::from).collect(),
    }))
}

/// The unit of the last `-tunit:` flag, if any.
///
/// Only the text between the first and second `:` is used as the unit name.
fn parse_total_unit(tokens: &[&str]) -> Result<Option<Unit>> {
    let mut unit = None;

    for token in tokens {
        if let Some(rest) = token.strip_prefix(TOTAL_UNIT_PREFIX) {
            let name = rest.split(':').next().unwrap_or_default();
            unit = Some(name.parse::<Unit>()?);
        }
    }

    Ok(unit)
}

/// Collect path tokens with an inside/outside bracket scanner.
///
/// A token starting with `[` enters the bracket state and a token ending
/// with `]` leaves it; both markers are stripped. Outside brackets only
/// tokens not starting with `-` are paths. Inside brackets every token is a
/// path. A bare `[` or `]` leaves an empty path, which is later reported as
/// not found.
fn scan_paths<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    let mut inside = false;
    let mut paths = Vec::new();

    for &token in tokens {
        let mut token = token;

        if let Some(rest) = token.strip_prefix('[') {
            inside = true;
            token = rest;
        }
        if let Some(rest) = token.strip_suffix(']') {
            inside = false;
            token = rest;
        }

        if !token.starts_with('-') || inside {
            paths.push(token);
        }
    }

    paths
}

/// Remove and return the last path if it names a unit.
fn take_forced_unit(paths: &mut Vec<&str>) -> Option<Unit> {
    let unit = paths.last()?.parse::<Unit>().ok()?;
    paths.pop();
    Some(unit)
}

/// The text printed for `-help`.
#[must_use]
pub fn usage() -> String {
    format!(
        "\
{usage}
  fsize [files] [unit] [options]

{examples}
  fsize [file.txt file2.png] MiB -sort -total
  fsize [dir1 dir2 file.txt] KiB -tunit:GiB
  fsize -help

{options}
  -sort           Sort files/directories from largest to smallest
  -total          Show total size at the end
  -tunit:<unit>   Show total size in another unit (forces total even if -total not used)
  -json           Print the report as JSON
  -verbose        List files that could not be measured inside directories
  -nocolor        Disable colored output
  -version        Show the version
  -help           Show this help menu

{units}
  B, KiB, MiB, GiB, TiB
",
        usage = "Usage:".bold(),
        examples = "Examples:".bold(),
        options = "Options:".bold(),
        units = "Units:".bold(),
    )
}
