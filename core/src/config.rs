//! Dispatcher configuration.
//!
//! Controls how strictly parse diagnostics are treated and which tokens
//! request help. This configures the framework itself; flag values are
//! only ever read from the argument vector.
//!
//! # Example YAML
//!
//! ```yaml
//! strictness: strict
//! help_flags:
//!   - help
//!   - --help
//!   - -h
//!   - -?
//! ```

use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How the dispatcher treats flags that could not be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Skip what cannot be bound and run the handler anyway.
    #[default]
    Lenient,
    /// Refuse to run the handler when a value failed to coerce or a
    /// required argument has no value.
    Strict,
}

/// Settings for the `flagset-cli` dispatcher.
///
/// # Examples
///
/// ```
/// use flagset_core::{ParserConfig, Strictness};
///
/// let config = ParserConfig::from_yaml_str("strictness: strict\n").unwrap();
/// assert_eq!(config.strictness, Strictness::Strict);
/// assert!(config.is_help_flag("--help"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub strictness: Strictness,
    /// Tokens that request help when given in place of a subcommand.
    pub help_flags: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::Lenient,
            help_flags: vec!["help".to_string(), "--help".to_string(), "-h".to_string()],
        }
    }
}

impl ParserConfig {
    /// Parses configuration from a YAML string. Missing fields take their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the text is not valid configuration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    pub fn is_help_flag(&self, token: &str) -> bool {
        self.help_flags.iter().any(|flag| flag == token)
    }
}
