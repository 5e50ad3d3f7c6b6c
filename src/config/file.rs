//! Configuration file support for persistent defaults.
//!
//! This module loads defaults from a TOML file located at
//! `~/.config/fsize/config.toml` (or the platform-specific equivalent).
//! Values from the file act as defaults that command-line tokens override.
//!
//! # Layering
//!
//! The precedence order is: **command line > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! sort = true
//! total = true
//! unit = "MiB"        # forced display unit when none is given
//! total_unit = "GiB"  # unit of the total line, implies total
//! verbose = false
//! color = "auto"      # auto, always or never
//! ```

use std::{io::IsTerminal, path::PathBuf};

use serde::Deserialize;

/// When to emit ANSI colour codes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,

    /// Always colour
    Always,

    /// Never colour
    Never,
}

impl ColorMode {
    /// Whether colour should be used for this mode in the current environment.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }

    /// Apply the mode to the process-wide `colored` switch.
    pub fn apply(self) {
        colored::control::set_override(self.enabled());
    }
}

/// Configuration file structure.
///
/// All fields are `Option<T>` so we can tell which values the file sets and
/// layer them under the command line.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Sort rows by size by default
    pub sort: Option<bool>,

    /// Show the total by default
    pub total: Option<bool>,

    /// Default forced display unit (e.g. `"MiB"`)
    pub unit: Option<String>,

    /// Default unit of the total line (e.g. `"GiB"`)
    pub total_unit: Option<String>,

    /// List skipped files by default
    pub verbose: Option<bool>,

    /// Colour mode
    pub color: Option<ColorMode>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The file lives at `<config_dir>/fsize/config.toml`, where
    /// `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fsize").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.sort.is_none());
        assert!(config.total.is_none());
        assert!(config.unit.is_none());
        assert!(config.total_unit.is_none());
        assert!(config.verbose.is_none());
        assert!(config.color.is_none());
    }

    #[test]
    fn test_color_mode_enabled() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
        assert_eq!(ColorMode::default(), ColorMode::Auto);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
sort = true
total = false
unit = "MiB"
total_unit = "GiB"
verbose = true
color = "never"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.sort, Some(true));
        assert_eq!(config.total, Some(false));
        assert_eq!(config.unit, Some("MiB".to_string()));
        assert_eq!(config.total_unit, Some("GiB".to_string()));
        assert_eq!(config.verbose, Some(true));
        assert_eq!(config.color, Some(ColorMode::Never));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: FileConfig = toml::from_str("total = true\n").unwrap();

        assert_eq!(config.total, Some(true));
        assert!(config.sort.is_none());
        assert!(config.unit.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.sort.is_none());
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        assert!(toml::from_str::<FileConfig>("color = \"sometimes\"").is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(toml::from_str::<FileConfig>("threads = 4").is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(toml::from_str::<FileConfig>("sort = [").is_err());
        assert!(toml::from_str::<FileConfig>("sort = \"yes\"").is_err());
    }

    #[test]
    fn test_config_path_ends_with_expected_components() {
        if let Some(path) = FileConfig::config_path() {
            assert!(path.ends_with("fsize/config.toml"));
        }
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = FileConfig::load_from(&tmp.path().join("config.toml")).unwrap();

        assert!(config.sort.is_none());
    }

    #[test]
    fn test_load_from_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "sort = true\nunit = \"KiB\"\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();

        assert_eq!(config.sort, Some(true));
        assert_eq!(config.unit, Some("KiB".to_string()));
    }

    #[test]
    fn test_load_from_reports_parse_errors_with_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "sort = [").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
        assert!(err.to_string().contains("config.toml"));
    }
}
