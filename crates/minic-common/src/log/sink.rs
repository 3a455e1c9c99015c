//! Default subscriber for [`log_common`](super::log_common) events.
//!
//! Hosts that already run their own `tracing` subscriber do not need this;
//! the events will show up there under target [`LOG_TARGET`].

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use tracing::{debug, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::LOG_TARGET;
use crate::config::LogConfig;
use crate::error::LogError;

pub type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

/// Build a subscriber writing to stderr and/or a log file.
///
/// File output goes through a background writer thread, which keeps lines
/// from concurrent callers whole. Keep the returned guard alive for as long
/// as logging should reach the file; dropping it flushes what is pending.
pub fn build_subscriber(
    config: &LogConfig,
) -> Result<(BoxedSubscriber, Option<WorkerGuard>), LogError> {
    let filter = build_filter(config);

    let stderr_layer = config
        .stderr
        .then(|| fmt::layer().with_writer(io::stderr).with_ansi(config.ansi));

    let (file_layer, guard) = match &config.file {
        Some(path) => {
            let file = open_log_file(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    let subscriber: BoxedSubscriber = Box::new(
        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .with(filter),
    );

    Ok((subscriber, guard))
}

/// Build the subscriber and install it as the process-wide default.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, LogError> {
    let (subscriber, guard) = build_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LogError::AlreadyInitialized)?;
    debug!(target: LOG_TARGET, level = %config.level, file = ?config.file, "Logging initialized");
    Ok(guard)
}

/// `RUST_LOG` wins when allowed and set; otherwise only our target is
/// enabled, at the configured level.
fn build_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    EnvFilter::new(format!("{}={}", LOG_TARGET, config.level.as_filter()))
}

fn open_log_file(path: &Path) -> Result<File, LogError> {
    let sink_err = |source| LogError::FileSink {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(sink_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(sink_err)
}
