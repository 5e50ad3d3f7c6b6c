//! The resolved configuration of one invocation.
//!
//! A [`RunConfig`] merges the command-line options with the config-file
//! defaults. It is built once and only read afterwards.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::{args::CliOptions, units::Unit};

use super::file::{ColorMode, FileConfig};

/// Presentation options that do not change what is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Emit JSON instead of the table
    pub json: bool,

    /// List files skipped inside directories
    pub verbose: bool,

    /// When to colour the output
    pub color: ColorMode,
}

/// Everything needed to produce the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Sort rows by logical size, largest first
    pub sort: bool,

    /// Print the total after the table
    pub total: bool,

    /// Unit used for every displayed size
    pub forced_unit: Option<Unit>,

    /// Unit of the total line, overriding `forced_unit` there
    pub total_unit: Option<Unit>,

    /// Paths to measure, in input order; never empty
    pub paths: Vec<PathBuf>,

    /// Presentation options
    pub output: OutputOptions,
}

impl RunConfig {
    /// Merge command-line options with the config file.
    ///
    /// - **sort**, **total**, **verbose**: command-line flag `||` config value `||` `false`
    /// - **`forced_unit`**, **`total_unit`**: command line > config > none
    /// - **total** is implied whenever a total unit is set
    /// - **color**: `-nocolor` > config > `auto`
    ///
    /// # Errors
    ///
    /// Returns an error if the config file names an unknown unit.
    pub fn resolve(cli: CliOptions, config: &FileConfig) -> Result<Self> {
        let forced_unit = match cli.forced_unit {
            Some(unit) => Some(unit),
            None => parse_config_unit(config.unit.as_deref())?,
        };
        let total_unit = match cli.total_unit {
            Some(unit) => Some(unit),
            None => parse_config_unit(config.total_unit.as_deref())?,
        };

        let color = if cli.no_color {
            ColorMode::Never
        } else {
            config.color.unwrap_or_default()
        };

        Ok(Self {
            sort: cli.sort || config.sort.unwrap_or(false),
            total: cli.total || config.total.unwrap_or(false) || total_unit.is_some(),
            forced_unit,
            total_unit,
            paths: cli.paths,
            output: OutputOptions {
                json: cli.json,
                verbose: cli.verbose || config.verbose.unwrap_or(false),
                color,
            },
        })
    }

    /// Unit used for the total line, or `None` to pick the best unit.
    #[must_use]
    pub fn total_line_unit(&self) -> Option<Unit> {
        self.total_unit.or(self.forced_unit)
    }
}

fn parse_config_unit(name: Option<&str>) -> Result<Option<Unit>> {
    name.map(|name| {
        name.parse::<Unit>()
            .map_err(|e| anyhow!("invalid unit in config file: {e}"))
    })
    .transpose()
}
