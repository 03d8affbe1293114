//! Logging utilities.
//!
//! Everything in rowpaint logs through the `log` facade. This module only
//! installs an `env_logger` backend for hosts and tests that want one.

mod init;

pub use init::{init_logging, LoggingConfig};
