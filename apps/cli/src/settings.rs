//! Layered CLI settings.
//!
//! Sources, later ones winning:
//! 1. built-in defaults
//! 2. `verity.toml` in the working directory, or the `--config` file
//! 3. `VERITY_LOG_LEVEL`, `VERITY_LOG_FORMAT` and `VERITY_JSON`
//! 4. command-line flags

use std::path::Path;

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format as _, Serialized, Toml};
use serde::{Deserialize, Serialize};
use verity_log::Format;

use crate::cli::Cli;

const DEFAULT_FILE: &str = "verity.toml";
const ENV_KEYS: [&str; 3] = ["log_level", "log_format", "json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub log_format: Format,
    pub json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: Format::Compact,
            json: false,
        }
    }
}

/// Flag values; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_format: Option<Format>,
    #[serde(skip_serializing_if = "Option::is_none")]
    json: Option<bool>,
}

impl From<&Cli> for Overrides {
    fn from(cli: &Cli) -> Self {
        Self {
            log_level: cli.log_level.clone(),
            log_format: cli.log_format,
            json: cli.json.then_some(true),
        }
    }
}

impl Settings {
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let figment = Self::layers(cli.config.as_deref())?
            .merge(Env::prefixed("VERITY_").only(&ENV_KEYS))
            .merge(Serialized::defaults(Overrides::from(cli)));
        Self::extract(&figment)
    }

    /// Defaults plus the settings file.
    fn layers(config: Option<&Path>) -> anyhow::Result<Figment> {
        let defaults = Figment::from(Serialized::defaults(Self::default()));
        match config {
            Some(path) => {
                anyhow::ensure!(
                    path.is_file(),
                    "settings file {} does not exist",
                    path.display()
                );
                Ok(defaults.merge(Toml::file(path)))
            }
            None => Ok(defaults.merge(Toml::file(DEFAULT_FILE))),
        }
    }

    fn extract(figment: &Figment) -> anyhow::Result<Self> {
        figment.extract().context("invalid settings")
    }

    /// The logger configuration: environment display toggles with these
    /// settings' filter and format.
    pub fn log_config(&self) -> verity_log::Config {
        verity_log::Config::from_env()
            .with_level(&self.log_level)
            .with_format(self.log_format)
    }
}
