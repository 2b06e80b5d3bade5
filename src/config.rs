//! Tool configuration.
//!
//! Settings are layered, later layers overriding earlier ones:
//!
//! ```text
//! stock defaults  →  config file (~/.bicsv.toml or --config)  →  BICSV_* env vars
//! ```
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! delimiter = ","   # Field delimiter for the generated table (single ASCII char)
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Environment
//!
//! | Variable | Key |
//! |----------|-----|
//! | `BICSV_DELIMITER` | `delimiter` |

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".bicsv.toml";

/// Environment variables that overlay config keys.
const ENV_KEYS: &[(&str, &str)] = &[("BICSV_DELIMITER", "delimiter")];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration.
///
/// All fields have defaults; config files need only list what they override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BicsvConfig {
    /// Field delimiter for the output table. Fixed per deployment.
    pub delimiter: char,
}

impl Default for BicsvConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl BicsvConfig {
    /// Validate config values are usable by the table writer.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = self.delimiter;
        if !d.is_ascii() {
            return Err(ConfigError::Validation(format!(
                "delimiter must be a single ASCII character, got {d:?}"
            )));
        }
        if matches!(d, '"' | '\r' | '\n') {
            return Err(ConfigError::Validation(format!(
                "delimiter cannot be {d:?}"
            )));
        }
        Ok(())
    }

    /// The delimiter as the byte the CSV writer expects.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        self.validate()?;
        u8::try_from(self.delimiter).map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Where the config file comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Default location. A missing file means "use defaults".
    Default(PathBuf),
    /// Passed via `--config`. A missing file is an error.
    Explicit(PathBuf),
    /// No home directory and no `--config`.
    None,
}

impl ConfigSource {
    /// Resolve the config source from an optional `--config` path.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        match explicit {
            Some(path) => Self::Explicit(path.to_path_buf()),
            None => match dirs::home_dir() {
                Some(home) => Self::Default(home.join(DEFAULT_CONFIG_FILE)),
                None => Self::None,
            },
        }
    }
}

/// A resolved config plus the file it was read from, if any.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BicsvConfig,
    pub file: Option<PathBuf>,
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(BicsvConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Build an overlay table from `BICSV_*` variables, looked up through `lookup`.
///
/// Each value is checked against the config schema on its own, so a bad value
/// is reported under its variable name rather than as a TOML parse error.
/// Returns `Ok(None)` when none of the variables are set.
pub fn env_overlay(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Option<toml::Value>, ConfigError> {
    let mut table = toml::map::Map::new();
    for (var, key) in ENV_KEYS {
        let Some(value) = lookup(var) else {
            continue;
        };
        let mut single = toml::map::Map::new();
        single.insert((*key).to_string(), toml::Value::String(value.clone()));
        let invalid = |reason: String| ConfigError::Validation(format!("{var}={value:?}: {reason}"));
        let parsed: BicsvConfig = merge_toml(stock_defaults_value(), toml::Value::Table(single))
            .try_into()
            .map_err(|e: toml::de::Error| invalid(e.message().to_string()))?;
        if let Err(ConfigError::Validation(reason)) = parsed.validate() {
            return Err(invalid(reason));
        }
        table.insert((*key).to_string(), toml::Value::String(value));
    }
    if table.is_empty() {
        Ok(None)
    } else {
        Ok(Some(toml::Value::Table(table)))
    }
}

/// Apply overlays in order onto `base`, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = Option<toml::Value>>,
) -> Result<BicsvConfig, ConfigError> {
    let merged = overlays.into_iter().flatten().fold(base, merge_toml);
    let config: BicsvConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `source`, overlaying variables from `lookup`.
pub fn load_config_with_env(
    source: &ConfigSource,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LoadedConfig, ConfigError> {
    let (file_layer, file) = match source {
        ConfigSource::Explicit(path) => match load_raw_config(path)? {
            Some(value) => (Some(value), Some(path.clone())),
            None => return Err(ConfigError::NotFound(path.clone())),
        },
        ConfigSource::Default(path) => {
            let value = load_raw_config(path)?;
            let file = value.as_ref().map(|_| path.clone());
            (value, file)
        }
        ConfigSource::None => (None, None),
    };
    let env_layer = env_overlay(lookup)?;
    let config = resolve_config(stock_defaults_value(), [file_layer, env_layer])?;
    Ok(LoadedConfig { config, file })
}

/// Load config from `source`, overlaying the process environment.
pub fn load_config(source: &ConfigSource) -> Result<LoadedConfig, ConfigError> {
    load_config_with_env(source, |var| std::env::var(var).ok())
}
