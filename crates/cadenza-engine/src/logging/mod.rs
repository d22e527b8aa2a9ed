//! Logging utilities.
//!
//! Centralizes logger initialization behind the standard `log` facade so
//! the rest of the workspace never names a backend.

mod init;

pub use init::{init_logging, LoggingConfig};
