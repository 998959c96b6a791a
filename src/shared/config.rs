//! Application Configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Result, ShowboxError};

// ============================================================================
// FILE CONFIGURATION (showbox.toml)
// ============================================================================

/// Configuration loaded from showbox.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowboxConfig {
    /// Dialog window settings
    #[serde(default)]
    pub dialog: DialogSection,

    /// Log file settings
    #[serde(default)]
    pub logging: LoggingSection,

    /// Report output settings
    #[serde(default)]
    pub output: OutputSection,
}

/// `[dialog]` section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DialogSection {
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,

    /// Text shown by the "About" button; no button when absent
    #[serde(default)]
    pub about: Option<String>,

    /// Whether the dialog may be resized
    #[serde(default)]
    pub resizable: bool,
}

impl Default for DialogSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            about: None,
            resizable: false,
        }
    }
}

fn default_title() -> String {
    "showbox".to_string()
}

/// `[logging]` section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Whether to write a log file at all
    #[serde(default)]
    pub enabled: bool,

    /// Log file path (defaults to the local data dir)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[output]` section
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: ReportFormat,
}

/// How reports are written to the output stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One `name=value` line per widget
    #[default]
    Lines,
    /// A JSON array of `{name, value}` entries per report
    Json,
}

impl ShowboxConfig {
    /// Find showbox.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        let candidates = [
            dirs::config_dir().map(|p| p.join("showbox").join("showbox.toml")),
            Some(PathBuf::from("showbox.toml")),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from the standard locations, returning defaults if
    /// no file is found or it cannot be read
    pub fn load() -> Self {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path).unwrap_or_else(|e| {
                crate::log!("Failed to load {:?}: {}, using defaults", path, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Merge with command-line arguments (program name already stripped).
    ///
    /// Recognized: `--title T`, `--about T`, `--resizable`, `--json`,
    /// `--log PATH`. `--config` is consumed by [`config_path_from_args`].
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--title" => self.dialog.title = expect_value(&mut iter, arg)?,
                "--about" => self.dialog.about = Some(expect_value(&mut iter, arg)?),
                "--resizable" => self.dialog.resizable = true,
                "--json" => self.output.format = ReportFormat::Json,
                "--log" => {
                    self.logging.enabled = true;
                    self.logging.path = Some(PathBuf::from(expect_value(&mut iter, arg)?));
                }
                "--config" => {
                    expect_value(&mut iter, arg)?;
                }
                other => {
                    return Err(ShowboxError::Usage(format!("unknown argument '{}'", other)));
                }
            }
        }
        Ok(self)
    }

    /// Log file to open, if logging is enabled
    pub fn log_path(&self) -> Option<PathBuf> {
        if !self.logging.enabled {
            return None;
        }
        Some(
            self.logging
                .path
                .clone()
                .unwrap_or_else(crate::log::default_log_path),
        )
    }
}

/// Extract the value of `--config PATH` from the argument list
pub fn config_path_from_args(args: &[String]) -> Option<PathBuf> {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}

fn expect_value<'a>(iter: &mut impl Iterator<Item = &'a String>, flag: &str) -> Result<String> {
    iter.next()
        .cloned()
        .ok_or_else(|| ShowboxError::Usage(format!("{} requires a value", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = ShowboxConfig::default();
        assert_eq!(config.dialog.title, "showbox");
        assert_eq!(config.dialog.about, None);
        assert!(!config.dialog.resizable);
        assert_eq!(config.output.format, ReportFormat::Lines);
        assert_eq!(config.log_path(), None);
    }

    #[test]
    fn test_parse_partial_file() {
        let config = ShowboxConfig::parse(
            r#"
            [dialog]
            title = "Setup"
            resizable = true

            [output]
            format = "json"
        "#,
        )
        .unwrap();

        assert_eq!(config.dialog.title, "Setup");
        assert!(config.dialog.resizable);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_load_from_path() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[logging]").unwrap();
        writeln!(temp_file, "enabled = true").unwrap();
        writeln!(temp_file, "path = \"/tmp/sb.log\"").unwrap();
        temp_file.flush().unwrap();

        let config = ShowboxConfig::load_from_path(temp_file.path()).unwrap();
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/sb.log")));
    }

    #[test]
    fn test_bad_file_is_error() {
        let err = ShowboxConfig::parse("[dialog\ntitle = 1").unwrap_err();
        assert!(matches!(err, ShowboxError::ConfigParse(_)));
    }

    #[test]
    fn test_with_args() {
        let config = ShowboxConfig::default()
            .with_args(&args(&[
                "--title",
                "Hello",
                "--resizable",
                "--json",
                "--config",
                "x.toml",
            ]))
            .unwrap();
        assert_eq!(config.dialog.title, "Hello");
        assert!(config.dialog.resizable);
        assert_eq!(config.output.format, ReportFormat::Json);

        let err = ShowboxConfig::default()
            .with_args(&args(&["--title"]))
            .unwrap_err();
        assert!(matches!(err, ShowboxError::Usage(_)));

        let err = ShowboxConfig::default()
            .with_args(&args(&["--bogus"]))
            .unwrap_err();
        assert!(matches!(err, ShowboxError::Usage(_)));
    }

    #[test]
    fn test_config_path_from_args() {
        assert_eq!(
            config_path_from_args(&args(&["--json", "--config", "a.toml"])),
            Some(PathBuf::from("a.toml"))
        );
        assert_eq!(config_path_from_args(&args(&["--json"])), None);
    }
}
