use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given. It may be absent.
pub const DEFAULT_CONFIG: &str = "pascha.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaschaConfig {
    /// Calculation defaults.
    #[serde(default)]
    pub calculation: CalculationToml,

    /// Output presentation.
    #[serde(default)]
    pub display: DisplayToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculationToml {
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_output_calendar")]
    pub output_calendar: String,
    #[serde(default)]
    pub byzantine: bool,
}

impl Default for CalculationToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            output_calendar: default_output_calendar(),
            byzantine: false,
        }
    }
}

fn default_method() -> String {
    "julian".to_string()
}
fn default_output_calendar() -> String {
    "julian".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_pascha_name")]
    pub pascha_name: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_date_separator")]
    pub date_separator: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            pascha_name: default_pascha_name(),
            date_format: default_date_format(),
            date_separator: default_date_separator(),
        }
    }
}

fn default_pascha_name() -> String {
    "Pascha".to_string()
}
fn default_date_format() -> String {
    "YMD".to_string()
}
fn default_date_separator() -> String {
    "/".to_string()
}

impl PaschaConfig {
    /// Parses a config from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// Loads the config.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG`] is read
    /// from the working directory if present, else defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        };
        if !required && !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Self::from_toml(&toml_str)
            .with_context(|| format!("invalid config file: {}", path.display()))
    }
}
