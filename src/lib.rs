//! # fsize
//!
//! Report the logical and on-disk sizes of files and directories.
//!
//! The library holds everything the `fsize` binary does, split into small
//! single-purpose modules:
//!
//! - [`args`] - token-level command-line parsing (brackets, `-sort`, `-tunit:<unit>`, ...)
//! - [`config`] - config-file defaults and the resolved [`RunConfig`]
//! - [`scanner`] - measures every input path, in input order
//! - [`entry`] - measured entries, sorting and totals
//! - [`units`] - binary units, conversion and number formatting
//! - [`table`] - the human-readable table
//! - [`output`] - the JSON document
//! - [`utils`] - filesystem measuring helpers
//!
//! ## Usage
//!
//! ```bash
//! fsize [notes.txt src] -sort -total
//! fsize [dir1 dir2 file.txt] KiB -tunit:GiB
//! ```

pub mod args;
pub mod config;
pub mod entry;
pub mod output;
pub mod scanner;
pub mod table;
pub mod units;
pub mod utils;

pub use config::{OutputOptions, RunConfig};
pub use units::{Unit, UnknownUnit};
