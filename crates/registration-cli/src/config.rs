// File: src/config.rs
// Purpose: Configuration parsing from registration.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "registration.toml";

/// Replay configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// How the text renderer draws the form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Character drawn in place of each masked password character
    #[serde(default = "default_mask_char")]
    pub mask_char: char,

    /// Initial state of the password visibility toggle
    #[serde(default)]
    pub show_password: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// tracing filter directive; RUST_LOG takes precedence
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_mask_char() -> char {
    '*'
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mask_char: default_mask_char(),
            show_password: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.mask_char, '*');
        assert!(!config.display.show_password);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.display.mask_char, '*');
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_partial_config() {
        let toml = r##"
            [display]
            mask_char = "#"
            show_password = true
        "##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.display.mask_char, '#');
        assert!(config.display.show_password);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_whitespace_only_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registration.toml");
        fs::write(&path, "  \n\t\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.display.mask_char, '*');
        assert!(!config.display.show_password);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registration.toml");
        fs::write(&path, "[log]\nfilter = \"debug\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.log.filter, "debug");
        assert_eq!(config.display.mask_char, '*');
    }

    #[test]
    fn test_malformed_file_reports_parse_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registration.toml");
        fs::write(&path, "[display]\nmask_char = \"too long\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse config file"), "{}", message);
    }

    #[test]
    fn test_unreadable_path_reports_read_context() {
        let dir = tempfile::tempdir().unwrap();

        // A directory exists but cannot be read as a file
        let err = Config::load(dir.path()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to read config file"), "{}", message);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("does/not/exist/registration.toml").unwrap();
        assert_eq!(config.log.filter, "info");
    }
}
