//! Tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file. The filter
//! comes from `RUST_LOG` and defaults to `info`.

use std::io;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber writing to `log_file`.
pub fn init_tracing(log_file: &Path) -> io::Result<()> {
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    let file_name = log_file
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log file has no file name"))?;

    std::fs::create_dir_all(&dir)?;
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(&dir)
        .map_err(io::Error::other)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::debug!(path = %log_file.display(), "tracing initialized");
    Ok(())
}
