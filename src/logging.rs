//! File logging
//!
//! The terminal is owned by the TUI, so log records go to a file.
//! The filter comes from `RUST_LOG` and defaults to `info`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};

use crate::error::SuggesterError;

const APP_DIR: &str = "career-suggester";
const LOG_FILE: &str = "career-suggester.log";

/// Default log file location, if the platform has a cache directory
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Install the global logger, appending to `path` (or the default location)
///
/// Returns the path written to. With no usable path nothing is installed.
pub fn init(path: Option<&Path>) -> Result<Option<PathBuf>, SuggesterError> {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    Ok(Some(path))
}
