//! Common types and utilities for simaka
//!
//! This crate carries the ambient pieces shared by the codec, the CLI and the
//! integration tests: the workspace error type, `tracing` setup with hex dump
//! helpers, and the YAML tool configuration.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ToolConfig, DEFAULT_METHOD, KNOWN_METHODS, METHOD_ALIASES};
pub use error::Error;
pub use logging::{
    format_hex_compact, format_hex_dump, init_logging, init_logging_with_filter,
    log_eap_message, parse_hex, Direction, HexDump, LogLevel,
};
