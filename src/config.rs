//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing default file is not an error; defaults apply.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, EndpointConfig, OverlapPolicy, UiConfig};

use crate::error::SuggesterError;

const APP_DIR: &str = "career-suggester";
const CONFIG_FILE: &str = "config.toml";

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// With `Some(path)` the file must exist. With `None` the default location
/// is tried and silently skipped when absent.
pub fn load_config(path: Option<&Path>) -> Result<Config, SuggesterError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, SuggesterError> {
    let content = fs::read_to_string(path).map_err(|source| SuggesterError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| SuggesterError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
