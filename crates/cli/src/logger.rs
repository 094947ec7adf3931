use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use toc_config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;

/// Environment variable specifying the log file.
pub const LOG_PATH_ENV: &str = "MDTOC_LOG_PATH";

/// Log files larger than this are removed before logging starts.
const MAX_LOG_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Picks the log file: `--log`, then [`LOG_PATH_ENV`], then the config.
fn log_path(log: Option<PathBuf>, log_config: &LogConfig) -> Option<PathBuf> {
    log.or_else(|| std::env::var(LOG_PATH_ENV).ok().map(PathBuf::from))
        .or_else(|| log_config.log_file.as_ref().map(PathBuf::from))
}

/// Installs the global file logger if a log file is specified.
///
/// Stdout and stderr are reserved for the toc and the heading diagnostics, so
/// nothing is logged unless a log file is found. The returned guard must be
/// kept alive until the end of the program to flush the pending records.
pub fn init(log: Option<PathBuf>, log_config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let Some(log_path) = log_path(log, log_config) else {
        return Ok(None);
    };

    if let Ok(metadata) = std::fs::metadata(&log_path) {
        if log_path.is_file() && metadata.len() > MAX_LOG_FILE_SIZE {
            std::fs::remove_file(&log_path)?;
        }
    }

    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("no file name in {log_path:?}"))?;

    let directory = log_path
        .parent()
        .map(|dir| {
            if dir.as_os_str().is_empty() {
                Path::new(".")
            } else {
                dir
            }
        })
        .ok_or_else(|| anyhow!("{log_path:?} has no parent"))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let max_level = log_config
        .max_level
        .parse()
        .unwrap_or(tracing::Level::DEBUG);

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_line_number(true)
        .with_writer(non_blocking)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(Some(guard))
}
