use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::case::Locale;

pub const CONFIG_FILENAME: &str = ".recase.json";
pub const GLOBAL_CONFIG_DIR: &str = "recase";
pub const GLOBAL_CONFIG_FILENAME: &str = "config.json";

#[derive(Debug)]
pub enum ConfigError {
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidJson { path, source } => {
                write!(f, "invalid JSON in {}: {}", path.display(), source)
            }
            ConfigError::IoError { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidJson { source, .. } => Some(source),
            ConfigError::IoError { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Style example used when `convert` is run without `--style`
    pub default_style: Option<String>,
    /// Locale for case mapping
    pub locale: Locale,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Emit JSON instead of plain text by default
    pub json: bool,
}

/// Returns the path to the global config file, if the platform config dir exists.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_CONFIG_DIR).join(GLOBAL_CONFIG_FILENAME))
}

/// Reads a JSON file as a `serde_json::Value`. Returns empty `{}` if the file doesn't exist.
fn load_json_file(path: &Path) -> Result<Value, ConfigError> {
    if !path.exists() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Recursively merges two JSON values. Objects merge key-by-key; arrays and scalars
/// in `overlay` replace whatever is in `base`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => deep_merge(base_val, overlay_val),
                    None => overlay_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Loads and merges global + local config files, then deserializes into `Config`.
/// Global config errors are logged and skipped; local config errors propagate.
pub fn load_and_merge(
    global_path: Option<&Path>,
    local_path: &Path,
) -> Result<Config, ConfigError> {
    let global_value = match global_path {
        Some(path) => match load_json_file(path) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load global config, skipping");
                Value::Object(serde_json::Map::new())
            }
        },
        None => Value::Object(serde_json::Map::new()),
    };

    let local_value = load_json_file(local_path)?;
    let merged = deep_merge(global_value, local_value);

    serde_json::from_value(merged).map_err(|e| ConfigError::InvalidJson {
        path: local_path.to_path_buf(),
        source: e,
    })
}

impl Config {
    /// Loads the config for `dir` (usually the current working directory),
    /// layered over the global config.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let local_path = dir.join(CONFIG_FILENAME);
        load_and_merge(global_config_path().as_deref(), &local_path)
    }
}
