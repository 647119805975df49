//! Error types for flag registration, lookup and configuration loading.
//!
//! Parse-time problems are not errors: they are reported as
//! [`ParseDiagnostic`](crate::ParseDiagnostic)s and never stop a scan.

use thiserror::Error;

use crate::ValueType;

/// Errors raised while registering flags or reading their values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
    /// The alias is already claimed by another group in the argument set.
    #[error("alias already in use: {0}")]
    DuplicateAlias(String),

    /// The alias does not start with a letter or contains characters other
    /// than letters, digits, `_` and `-`.
    #[error("invalid alias name: \"{0}\"")]
    InvalidAliasName(String),

    /// An alias group must contain at least one alias.
    #[error("alias group cannot be empty")]
    EmptyAliasGroup,

    /// No value has been set for the alias, neither by default nor by parsing.
    #[error("key not available: {0}")]
    KeyNotFound(String),

    /// A value of the wrong type was written to a group.
    #[error("type mismatch: group holds {expected} values, got {found}")]
    TypeMismatch {
        expected: ValueType,
        found: ValueType,
    },

    /// The group id does not belong to this registry.
    #[error("unknown alias group: #{0}")]
    UnknownGroup(usize),

    /// Two subcommands share a name, or a subcommand uses a reserved name.
    #[error("duplicate subcommand: {0}")]
    DuplicateSubcommand(String),
}

/// Errors that can occur while loading a [`ParserConfig`](crate::ParserConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`FlagError`].
pub type Result<T> = std::result::Result<T, FlagError>;
