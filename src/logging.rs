//! Tracing initialization
//!
//! Events always go to stderr so they never interleave with the menu on
//! stdout. When a log file is configured, a second layer appends the same
//! events to it as an observational record of the session; the file is
//! never read back.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Returns a `WorkerGuard` that must stay alive for the process lifetime
/// when a file layer is active, so buffered lines are flushed on exit.
///
/// If the log directory cannot be created, falls back to stderr-only
/// logging with a warning rather than aborting the session.
pub fn setup_logging(log_level: &str, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let Some(path) = log_file else {
        init_stderr_only(log_level);
        return None;
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    let filename = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(crate::env::DEFAULT_LOG_FILE_NAME));

    // Ensure the directory exists before tracing-appender tries to open it
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!(
            "warn: could not create log directory '{}': {e} - falling back to stderr",
            dir.display()
        );
        init_stderr_only(log_level);
        return None;
    }

    // A single append-only file, not a rolling set
    let appender = tracing_appender::rolling::never(dir, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Some(guard)
}

fn init_stderr_only(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}
