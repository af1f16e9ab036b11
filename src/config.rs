//! Configuration file support.
//!
//! Optional YAML settings in `oscal-component.config.yml`. Values given on
//! the command line always win over the file.

use anyhow::{bail, Context};
use oscal_component_gen::application::dto::OutputFormat;
use oscal_component_gen::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "oscal-component.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub store_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings after merging CLI flags over the config file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub store_dir: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        cli_output: Option<PathBuf>,
        cli_store_dir: Option<PathBuf>,
        config: Option<ConfigFile>,
    ) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (cli_format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => parse_format(value)?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            format,
            output: cli_output.or(config.output),
            store_dir: cli_store_dir.or(config.store_dir),
        })
    }
}

fn parse_format(value: &str) -> Result<OutputFormat> {
    value.parse::<OutputFormat>().map_err(|e| {
        anyhow::anyhow!(
            "Invalid config: {}\n\n💡 Hint: Set 'format' to \"yaml\" or \"json\".",
            e
        )
    })
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

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(format) = config.format.as_deref() {
        parse_format(format)?;
    }
    if let Some(store_dir) = &config.store_dir {
        if store_dir.as_os_str().is_empty() {
            bail!(
                "Invalid config: store_dir must not be empty.\n\n\
                 💡 Hint: Remove the key or point it at a directory."
            );
        }
    }
    Ok(())
}

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
