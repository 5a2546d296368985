use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for career-suggester
#[derive(Debug, Error)]
pub enum SuggesterError {
    #[error("Could not read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
