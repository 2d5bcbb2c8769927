//! Development tools for Arco.
//!
//! This crate bootstraps structured logging for binaries and test suites.

pub mod logging;

pub use logging::{LogFormat, LoggingConfig, LoggingError, init_from_env, init_logging};
