//! Logging infrastructure for simaka
//!
//! Configurable logging on top of the `tracing` crate, an EAP message logging
//! helper, and hex formatting used both in log output and by the CLI.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::error::Error;

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level, includes hex dumps of every decoded buffer
    Trace,
    /// Debug level
    Debug,
    /// Info level (default)
    #[default]
    Info,
    /// Warn level, decode failures are reported here
    Warn,
    /// Error level
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(Error::Config(format!("unknown log level: {s}"))),
        }
    }
}

/// Initialize the tracing subscriber with the specified log level.
///
/// Call once at startup. `RUST_LOG` takes precedence over `level` when set.
/// Calling it a second time is a no-op rather than a panic, so tests and the
/// CLI can both call it freely.
///
/// # Example
///
/// ```
/// use simaka_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.to_string());
}

/// Initialize logging with a custom filter string.
///
/// # Example
///
/// ```
/// use simaka_common::logging::init_logging_with_filter;
///
/// // Default to warn, but show every decode in the codec crate
/// init_logging_with_filter("warn,simaka_eap=trace");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}

/// Direction of an EAP message relative to the local peer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Received from the server
    Rx,
    /// Sent to the server
    Tx,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Rx => f.write_str("RX"),
            Direction::Tx => f.write_str("TX"),
        }
    }
}

/// Log an EAP message at debug level, with the raw bytes at trace level.
///
/// # Arguments
///
/// * `method` - EAP method name (e.g. "EAP-SIM", "EAP-AKA'")
/// * `direction` - Message direction
/// * `description` - Short description, usually the subtype name
/// * `data` - Raw message bytes
///
/// # Example
///
/// ```
/// use simaka_common::logging::{log_eap_message, Direction};
///
/// log_eap_message("EAP-AKA", Direction::Rx, "Challenge", &[0x01, 0x00, 0x00]);
/// ```
pub fn log_eap_message(method: &str, direction: Direction, description: &str, data: &[u8]) {
    tracing::debug!(
        method,
        direction = %direction,
        description,
        len = data.len(),
        "{} {} {}",
        direction,
        method,
        description
    );
    tracing::trace!(method, hex = %HexDump(data), "{} payload", method);
}

/// Wrapper that displays a byte slice as lowercase hex
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Parse a hex string, ignoring whitespace and an optional `0x` prefix.
///
/// # Example
///
/// ```
/// use simaka_common::logging::parse_hex;
///
/// assert_eq!(parse_hex("0x0e 00 00").unwrap(), vec![0x0e, 0x00, 0x00]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, Error> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(compact)?)
}

/// Format bytes as a hex dump with offset, hex, and ASCII columns.
///
/// # Example
///
/// ```
/// use simaka_common::logging::format_hex_dump;
///
/// let dump = format_hex_dump(b"Hello, World!");
/// assert!(dump.starts_with("00000000  48 65 6c 6c"));
/// assert!(dump.ends_with("|Hello, World!|"));
/// ```
pub fn format_hex_dump(data: &[u8]) -> String {
    if data.is_empty() {
        return String::from("(empty)");
    }

    let mut lines = Vec::with_capacity(data.len().div_ceil(16));
    for (row, chunk) in data.chunks(16).enumerate() {
        let mut line = String::with_capacity(78);
        let _ = write!(line, "{:08x}  ", row * 16);

        for column in 0..16 {
            if column == 8 {
                line.push(' ');
            }
            match chunk.get(column) {
                Some(byte) => {
                    let _ = write!(line, "{byte:02x} ");
                }
                None => line.push_str("   "),
            }
        }

        line.push_str(" |");
        line.extend(chunk.iter().map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        }));
        line.push('|');
        lines.push(line);
    }

    lines.join("\n")
}

/// Format bytes as a compact hex string with optional grouping.
///
/// # Example
///
/// ```
/// use simaka_common::logging::format_hex_compact;
///
/// let data = [0x12, 0x34, 0x56, 0x78];
/// assert_eq!(format_hex_compact(&data, 0), "12345678");
/// assert_eq!(format_hex_compact(&data, 2), "1234 5678");
/// ```
pub fn format_hex_compact(data: &[u8], group_size: usize) -> String {
    if group_size == 0 {
        return hex::encode(data);
    }

    data.chunks(group_size)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}
