//! Tool configuration
//!
//! The `simaka` command line tool reads an optional YAML file describing how
//! it should log and which EAP method to assume when none is given on the
//! command line.
//!
//! ```yaml
//! log_level: debug
//! default_method: aka-prime
//! hex_dump: true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::logging::LogLevel;

/// Method assumed when neither the command line nor the file names one.
pub const DEFAULT_METHOD: &str = "aka";

/// Canonical method names accepted in `default_method`.
pub const KNOWN_METHODS: [&str; 3] = ["sim", "aka", "aka-prime"];

/// Alternative spellings, the same set the `--method` flag accepts.
pub const METHOD_ALIASES: [&str; 5] = ["eap-sim", "eap-aka", "aka'", "eap-aka'", "eap-aka-prime"];

/// Configuration of the `simaka` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Log level, overridden by `RUST_LOG` when set
    #[serde(default)]
    pub log_level: LogLevel,
    /// EAP method used to interpret bare type data
    #[serde(default = "default_method")]
    pub default_method: String,
    /// Print a hex dump of the input before decoding
    #[serde(default)]
    pub hex_dump: bool,
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_method: default_method(),
            hex_dump: false,
        }
    }
}

impl ToolConfig {
    /// Parses a configuration from a YAML string and validates it.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Example
    /// ```
    /// use simaka_common::ToolConfig;
    /// use simaka_common::logging::LogLevel;
    ///
    /// let config = ToolConfig::from_yaml("log_level: debug\ndefault_method: sim\n").unwrap();
    /// assert_eq!(config.log_level, LogLevel::Debug);
    /// assert_eq!(config.default_method, "sim");
    /// assert!(!config.hex_dump);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a YAML file.
    ///
    /// # Example
    /// ```no_run
    /// use simaka_common::ToolConfig;
    ///
    /// let config = ToolConfig::from_yaml_file("config/simaka.yaml").unwrap();
    /// ```
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serializes the configuration to a YAML string.
    pub fn to_yaml(&self) -> Result<String, Error> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that `default_method` names a supported method.
    pub fn validate(&self) -> Result<(), Error> {
        let method = self.default_method.trim().to_ascii_lowercase();
        let method = method.as_str();
        if KNOWN_METHODS.contains(&method) || METHOD_ALIASES.contains(&method) {
            Ok(())
        } else {
            Err(Error::Config(format!(
                "unknown default_method '{}', expected one of {}",
                self.default_method,
                KNOWN_METHODS.join(", ")
            )))
        }
    }
}
