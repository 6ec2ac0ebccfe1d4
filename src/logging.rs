use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Installs the global file subscriber. `RUST_LOG` wins over the configured
/// level. Returns the file being written, or `None` when no log path could
/// be resolved and logging stays off.
pub fn init(config: &Config, override_path: Option<PathBuf>) -> AppResult<Option<PathBuf>> {
    let Some(path) = override_path.or_else(|| config.log_path()) else {
        return Ok(None);
    };

    let file = open_log_file(&path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))
        .map_err(|source| {
            AppError::invalid_argument(format!(
                "invalid log level {:?}: {source}",
                config.log.level
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|source| {
            AppError::invalid_argument(format!("failed to install log subscriber: {source}"))
        })?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(Some(path))
}

fn open_log_file(path: &Path) -> AppResult<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| {
            AppError::io_with_context(
                source,
                format!("failed to create log directory: {}", parent.display()),
            )
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::open_log_file;

    #[test]
    fn open_log_file_creates_missing_parent_dirs() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("mshelf_log_{}_{}", process::id(), nanos));
        let path = dir.join("nested").join("mshelf.log");

        open_log_file(&path).expect("log file should open");
        assert!(path.is_file());

        fs::remove_dir_all(&dir).expect("temp dir should be removed");
    }
}
