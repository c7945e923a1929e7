//! Tracing setup for the CLI: append to `wxr.log` in the state dir, else stderr.
//!
//! The filter comes from `WXR_LOG` (same syntax as `RUST_LOG`).

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WXR_LOG";
const DEFAULT_FILTER: &str = "warn,wxr_core=info,wxr=info";

fn resolver_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `<state dir>/wxr.log`, e.g. `~/.local/state/wxr/wxr.log`.
pub fn log_path() -> Result<PathBuf> {
    Ok(crate::config::state_dir()?.join("wxr.log"))
}

fn open_log(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Send resolver and fetch events to the log file next to the demo cache.
/// Errors if the file can't be opened or a subscriber is already set; callers
/// then use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    let file = open_log(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(resolver_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {e}"))?;

    tracing::info!(log = %path.display(), "wxr resolver session started");
    Ok(())
}

pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(resolver_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
