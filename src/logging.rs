//! File logging
//!
//! The terminal belongs to the game while it runs, so log records go to a
//! file instead of stdout or stderr.

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Route the `log` macros to `path`, truncating any previous contents
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_records_reach_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake.log");

        init(&path, LevelFilter::Info).unwrap();
        log::info!("logger smoke test");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logger smoke test"));
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("snake.log");

        let err = init(&path, LevelFilter::Info).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
