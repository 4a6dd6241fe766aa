//! Tracing setup. The terminal belongs to the UI, so logs only go to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` wins over the configured filter, which wins over `info`.
pub fn filter_directive(configured: Option<&str>) -> String {
    pick_filter(std::env::var("RUST_LOG").ok().as_deref(), configured)
}

fn pick_filter(from_env: Option<&str>, configured: Option<&str>) -> String {
    from_env
        .filter(|value| !value.trim().is_empty())
        .or(configured)
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install file logging and return the file in use.
///
/// An `explicit` path (`--log-file` or config `log_file`) must be usable. The
/// data-dir `fallback` is skipped when it cannot be opened.
pub fn setup(
    explicit: Option<&Path>,
    fallback: Option<&Path>,
    configured_filter: Option<&str>,
) -> Result<Option<PathBuf>> {
    let opened = match (explicit, fallback) {
        (Some(path), _) => Some((path, open_log_file(path)?)),
        (None, Some(path)) => open_log_file(path).ok().map(|file| (path, file)),
        (None, None) => None,
    };
    let Some((path, file)) = opened else {
        return Ok(None);
    };
    initialize(file, configured_filter)?;
    Ok(Some(path.to_path_buf()))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

fn initialize(log_file: File, configured_filter: Option<&str>) -> Result<()> {
    let directive = filter_directive(configured_filter);
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .context("install tracing subscriber")?;

    Ok(())
}
