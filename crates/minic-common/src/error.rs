use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    #[error("Invalid log level tag: {0}")]
    InvalidTag(u8),

    #[error("Cannot open log file {}: {source}", path.display())]
    FileSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("A global logger is already installed")]
    AlreadyInitialized,
}
