use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::{Error, Result};

/// Sends `tracing` output to `path` so it does not tear the terminal UI.
pub fn init_file_logging(path: &Path, level: Level) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io("create log directory", e))?;
    }
    let file = File::create(path).map_err(|e| Error::io("open log file", e))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_thread_names(true)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
