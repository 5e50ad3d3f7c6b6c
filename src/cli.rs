//! Command-line entry definition.
//!
//! The grammar of `fsize` (bracketed path groups, single-dash flags, a
//! trailing unit token) is interpreted by [`fsize::args`]. Clap is only used
//! to collect the raw tokens, so its own help and version flags are disabled
//! and every token, dash-prefixed or not, reaches the scanner untouched.

use clap::Parser;

/// Raw command line of the `fsize` binary.
#[derive(Debug, Parser)]
#[command(name = "fsize")]
#[command(about = "Report logical and on-disk sizes of files and directories")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Paths, unit and options, in any order
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub tokens: Vec<String>,
}
