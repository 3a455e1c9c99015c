//! Common utilities shared by the MiniC compiler front end.
//!
//! This crate is a leaf: nothing in it depends on the rest of the compiler.
//!
//! ## Modules
//!
//! - [`convert`] - Numeric-to-text conversion
//! - [`chars`] - ASCII character classification used by the lexer
//! - [`text`] - Whitespace trimming
//! - [`log`] - Leveled logging with call-site `file:line` prefixes
//! - [`config`] - Log sink configuration
//!
//! ```no_run
//! use minic_common::{int2str, is_letter_underline, minic_log, trim, LOG_INFO};
//!
//! assert_eq!(int2str(42), "42");
//! assert!(is_letter_underline('_'));
//! assert_eq!(trim("  int  "), "int");
//!
//! minic_log!(LOG_INFO, "parsed {} functions", 3);
//! ```

pub mod chars;
pub mod config;
pub mod convert;
pub mod error;
pub mod log;
pub mod text;

pub use chars::{
    is_digital, is_letter, is_letter_digital, is_letter_digital_underline, is_letter_underline,
};
pub use config::LogConfig;
pub use convert::{double2str, int2str};
pub use error::LogError;
pub use log::{log_common, LogLevel, LOG_DEBUG, LOG_ERROR, LOG_INFO, MAX_LOG_MESSAGE_LEN};
pub use text::trim;
