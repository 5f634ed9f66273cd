//! Core configuration types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DisplayConfig, WriterConfig};
use crate::error::LogError;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directive (e.g. "info", "verity_validator=debug,warn")
    pub level: String,

    /// Output format
    pub format: Format,

    /// Output destination
    pub writer: WriterConfig,

    /// What each line shows
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Info.to_string(),
            format: Format::Compact,
            writer: WriterConfig::Stderr,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_level(mut self, level: impl fmt::Display) -> Self {
        self.level = level.to_string();
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_writer(mut self, writer: WriterConfig) -> Self {
        self.writer = writer;
        self
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Multi-line, human-readable
    Pretty,
    /// One line per event
    Compact,
    /// One JSON object per event
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        })
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(LogError::UnknownFormat(s.to_string())),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("trace", Level::Trace)]
    #[case("DEBUG", Level::Debug)]
    #[case(" info ", Level::Info)]
    #[case("warning", Level::Warn)]
    #[case("error", Level::Error)]
    fn parses_levels(#[case] input: &str, #[case] expected: Level) {
        assert_eq!(input.parse::<Level>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!("loud".parse::<Level>(), Err(LogError::UnknownLevel(_))));
        assert!(matches!("xml".parse::<Format>(), Err(LogError::UnknownFormat(_))));
    }

    #[test]
    fn format_display_parses_back() {
        for format in [Format::Pretty, Format::Compact, Format::Json] {
            assert_eq!(format.to_string().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.writer, WriterConfig::Stderr);
    }
}
