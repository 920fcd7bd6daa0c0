//! Configuration file support for nuget-dependants.
//!
//! Provides YAML-based configuration through `nuget-dependants.config.yml`
//! files, and the merge of file values with command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::outbound::network::DEFAULT_TIMEOUT_SECS;
use crate::application::dto::{OutputFormat, DEFAULT_MAX_PAGES};
use crate::dependants::services::DEFAULT_FEED_URL;
use crate::shared::error::DependantsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nuget-dependants.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub feed_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_pages: Option<usize>,
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|message| DependantsError::Validation {
            message: format!("Invalid config: format: {}", message),
        })?;
    }
    if let Some(url) = &config.feed_url {
        validate_feed_url(url)?;
    }
    if config.timeout_secs == Some(0) {
        return Err(validation("Invalid config: timeout_secs must be greater than 0"));
    }
    if config.max_pages == Some(0) {
        return Err(validation("Invalid config: max_pages must be greater than 0"));
    }
    Ok(())
}

fn validate_feed_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(validation(&format!(
            "Feed URL must start with http:// or https://: {}",
            url
        )));
    }
    Ok(())
}

fn validation(message: &str) -> anyhow::Error {
    DependantsError::Validation {
        message: message.to_string(),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub feed_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_pages: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub feed_url: String,
    pub timeout: Duration,
    pub max_pages: usize,
    pub format: OutputFormat,
    pub output_dir: PathBuf,
}

impl Settings {
    /// Merge command-line overrides, the config file and built-in defaults
    /// (in that order of precedence).
    pub fn resolve(overrides: &SettingsOverrides, config: Option<&ConfigFile>) -> Result<Self> {
        let feed_url = overrides
            .feed_url
            .clone()
            .or_else(|| config.and_then(|c| c.feed_url.clone()))
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());
        validate_feed_url(&feed_url)?;

        let timeout_secs = overrides
            .timeout_secs
            .or_else(|| config.and_then(|c| c.timeout_secs))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(validation("Timeout must be greater than 0"));
        }

        let max_pages = overrides
            .max_pages
            .or_else(|| config.and_then(|c| c.max_pages))
            .unwrap_or(DEFAULT_MAX_PAGES);
        if max_pages == 0 {
            return Err(validation("Page limit must be greater than 0"));
        }

        let format = match overrides.format {
            Some(format) => format,
            None => match config.and_then(|c| c.format.as_deref()) {
                Some(format) => OutputFormat::from_str(format)
                    .map_err(|message| DependantsError::Validation { message })?,
                None => OutputFormat::default(),
            },
        };

        let output_dir = overrides
            .output_dir
            .clone()
            .or_else(|| config.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            feed_url,
            timeout: Duration::from_secs(timeout_secs),
            max_pages,
            format,
            output_dir,
        })
    }

    /// Default report location: `<output_dir>/<target>-dependants.<ext>`
    pub fn default_output_path(&self, target: &str) -> PathBuf {
        self.output_dir.join(format!(
            "{}-dependants.{}",
            target,
            self.format.file_extension()
        ))
    }
}
