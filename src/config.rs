//! Configuration file support for transitive-deps.
//!
//! Reads `transitive-deps.config.yml` next to the analysed project, or the
//! file passed with `--config`. Command-line flags always win over values
//! loaded here.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::dependency_classification::services::DependencyFilter;
use crate::shared::security::read_checked_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "transitive-deps.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// `tree` or `json`
    pub format: Option<String>,
    /// Regular expression selecting package ids
    pub filter: Option<String>,
    /// Report direct dependencies too
    pub all: Option<bool>,
    /// Print provenance chains
    pub chains: Option<bool>,
    /// Colorize tree output
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, if set.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|value| {
                OutputFormat::from_str(value).map_err(|e| {
                    anyhow::anyhow!(
                        "Invalid config: {}\n\n💡 Hint: Set 'format' to \"tree\" or \"json\".",
                        e
                    )
                })
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked_file(path, "config file").with_context(|| {
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

    tracing::debug!(path = %config_path.display(), "loading discovered config file");
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;
    if let Some(pattern) = config.filter.as_deref() {
        DependencyFilter::new(Some(pattern), false).context("Invalid config: 'filter'")?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
