//! Preset configurations

use super::{Config, DisplayConfig, Format, Level, WriterConfig};

impl Config {
    /// Reads the environment.
    ///
    /// The filter comes from `VERITY_LOG`, then `RUST_LOG`, then `info`.
    /// `VERITY_LOG_FORMAT` picks the format; an unknown value keeps the
    /// default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(level) = var("VERITY_LOG").or_else(|| var("RUST_LOG")) {
            config.level = level;
        }
        if let Some(format) = var("VERITY_LOG_FORMAT").and_then(|f| f.parse().ok()) {
            config.format = format;
        }
        config.display.apply_vars(&var);
        config
    }

    /// Debug level, pretty output with source locations.
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: Level::Debug.to_string(),
            format: Format::Pretty,
            writer: WriterConfig::Stderr,
            display: DisplayConfig {
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Info level, JSON lines without colors.
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::Info.to_string(),
            format: Format::Json,
            writer: WriterConfig::Stderr,
            display: DisplayConfig {
                source: false,
                colors: false,
                ..DisplayConfig::default()
            },
        }
    }

    /// Trace level, compact and timeless, for test output.
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: Level::Trace.to_string(),
            format: Format::Compact,
            writer: WriterConfig::Stderr,
            display: DisplayConfig {
                time: false,
                colors: false,
                ..DisplayConfig::default()
            },
        }
    }
}
