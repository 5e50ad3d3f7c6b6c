//! # fsize
//!
//! Report logical and on-disk sizes of files and directories.
//!
//! Paths are given as plain arguments or grouped in brackets. A trailing
//! unit name forces the display unit for every row; flags add sorting and a
//! total line.
//!
//! ## Usage
//!
//! ```bash
//! # Sizes in the best unit for each row
//! fsize notes.txt src
//!
//! # Everything in MiB, largest first, with a total
//! fsize [file.txt file2.png] MiB -sort -total
//!
//! # Rows in KiB, total in GiB
//! fsize [dir1 dir2 file.txt] KiB -tunit:GiB
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use fsize::{
    RunConfig,
    args::{Invocation, parse_tokens, usage},
    config::{ColorMode, FileConfig},
    output::JsonOutput,
    scanner::collect,
    table::{render_report, render_skipped},
};
use std::process::exit;

/// Entry point for the fsize application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err}", "Error:".red().bold());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses the tokens, then either prints help, the version or the "no
/// arguments" notice, or resolves the configuration and prints the report.
///
/// # Errors
///
/// Returns errors for an unknown unit, an empty path list, or a failure to
/// serialize the JSON output.
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    ColorMode::Auto.apply();

    match parse_tokens(&args.tokens)? {
        Invocation::NoArguments => {
            println!("{}\n", "Use 'fsize -help' to learn more.".red());
            Ok(())
        }
        Invocation::Help => {
            print!("{}", usage());
            Ok(())
        }
        Invocation::Version => {
            println!("fsize {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Invocation::Run(options) => {
            let file_config = load_config(options.json);
            let config = RunConfig::resolve(options, &file_config)?;
            config.output.color.apply();
            run(&config)
        }
    }
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

/// Measure the paths and print the report in the configured format.
fn run(config: &RunConfig) -> Result<()> {
    let result = collect(config);

    if config.output.json {
        let output = JsonOutput::from_scan(&result, config);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_report(&result, config));
    }

    if config.output.verbose {
        eprint!("{}", render_skipped(&result.entries));
    }

    Ok(())
}
