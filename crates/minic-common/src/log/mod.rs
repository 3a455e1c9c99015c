//! Leveled logging for the compiler.
//!
//! Messages are emitted as [`tracing`] events with target [`LOG_TARGET`].
//! Whatever subscriber the host installs decides where they go; [`sink`]
//! builds the default one (stderr plus an optional file).
//!
//! Call sites normally use [`minic_log!`](crate::minic_log), which prefixes
//! the message with the invoking `file:line`:
//!
//! ```no_run
//! use minic_common::{minic_log, LOG_ERROR};
//!
//! let name = "main";
//! minic_log!(LOG_ERROR, "function {} redefined", name);
//! // -> "src/semantic.rs:42 function main redefined"
//! ```

pub mod sink;

use std::fmt::{self, Write};
use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::error::LogError;

pub use sink::{build_subscriber, init_logging};

/// Target attached to every event emitted by [`log_common`].
pub const LOG_TARGET: &str = "minic";

/// Upper bound, in bytes, of one composed log message including its prefix.
pub const MAX_LOG_MESSAGE_LEN: usize = 1024;

/// Message severity. The discriminants are the numeric tags
/// `DEBUG = 0`, `INFO = 1`, `ERROR = 2`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Debug = 0,
    Info = 1,
    Error = 2,
}

pub const LOG_DEBUG: LogLevel = LogLevel::Debug;
pub const LOG_INFO: LogLevel = LogLevel::Info;
pub const LOG_ERROR: LogLevel = LogLevel::Error;

impl LogLevel {
    /// Directive name understood by `EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LogError;

    fn try_from(tag: u8) -> Result<Self, LogError> {
        match tag {
            0 => Ok(LogLevel::Debug),
            1 => Ok(LogLevel::Info),
            2 => Ok(LogLevel::Error),
            _ => Err(LogError::InvalidTag(tag)),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> tracing::Level {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Emit an already formatted message at `level`.
///
/// Never fails: with no subscriber installed the event is dropped, and
/// write errors stay inside the subscriber.
pub fn log_common(level: LogLevel, content: &str) {
    match level {
        LogLevel::Debug => debug!(target: LOG_TARGET, "{}", content),
        LogLevel::Info => info!(target: LOG_TARGET, "{}", content),
        LogLevel::Error => error!(target: LOG_TARGET, "{}", content),
    }
}

/// Format `args` behind a `file:line` prefix of the caller and emit it.
///
/// Prefer [`minic_log!`](crate::minic_log), which builds `args` for you.
#[track_caller]
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) {
    let caller = Location::caller();
    let message = compose_message(caller.file(), caller.line(), args);
    log_common(level, &message);
}

/// Build `"{file}:{line} {message}"`, cut to [`MAX_LOG_MESSAGE_LEN`] bytes.
pub fn compose_message(file: &str, line: u32, args: fmt::Arguments<'_>) -> String {
    let mut buf = BoundedBuf::new(MAX_LOG_MESSAGE_LEN);
    // BoundedBuf never reports an error
    let _ = write!(buf, "{}:{} {}", file, line, args);
    buf.into_string()
}

/// `fmt::Write` sink that silently drops everything past `cap` bytes.
struct BoundedBuf {
    buf: String,
    cap: usize,
    full: bool,
}

impl BoundedBuf {
    fn new(cap: usize) -> Self {
        Self {
            buf: String::new(),
            cap,
            full: false,
        }
    }

    fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Write for BoundedBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.full {
            return Ok(());
        }
        let room = self.cap - self.buf.len();
        if s.len() <= room {
            self.buf.push_str(s);
        } else {
            let mut end = room;
            while !s.is_char_boundary(end) {
                end -= 1;
            }
            self.buf.push_str(&s[..end]);
            self.full = true;
        }
        Ok(())
    }
}

/// Log with a `file:line` prefix naming the invocation site.
///
/// Takes a [`LogLevel`] followed by `format!`-style arguments.
#[macro_export]
macro_rules! minic_log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log::log($level, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! minic_debug {
    ($($arg:tt)+) => {
        $crate::minic_log!($crate::log::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! minic_info {
    ($($arg:tt)+) => {
        $crate::minic_log!($crate::log::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! minic_error {
    ($($arg:tt)+) => {
        $crate::minic_log!($crate::log::LogLevel::Error, $($arg)+)
    };
}
