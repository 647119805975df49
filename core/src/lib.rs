//! Typed, alias-grouped command-line flags.
//!
//! This crate is the parsing engine behind `flagset`:
//!
//! - [`AliasRegistry`] — groups of aliases bound to one [`ValueType`],
//!   a token scanner that coerces values and typed getters.
//! - [`ArgumentSet`] — the required arguments and defaulted parameters of
//!   one subcommand, with alias validation across both.
//! - [`ParserConfig`] — dispatcher settings loadable from YAML.
//!
//! Accepted flag forms are `-x v`, `--x v`, `-x=v`, `--x=v` and a bare
//! `-x` / `--x`, which switches a boolean on. Every alias of a group reads
//! the same value, and the last occurrence on the command line wins.
//! Tokens that cannot be bound are skipped and reported in a
//! [`ParseReport`]; parsing itself never fails.
//!
//! # Example
//!
//! ```
//! use flagset_core::*;
//!
//! let mut args = ArgumentSet::new();
//! args.add_str_arg(&["name", "n"], "who to greet").unwrap();
//! args.add_int_param(&["times", "t"], "how many greetings", 1).unwrap();
//! args.add_bool_param(&["shout"], "upper-case the greeting", false).unwrap();
//!
//! let report = args.parse(&["--name=ferris", "-t", "3", "--shout"]);
//! assert!(report.is_clean());
//! assert_eq!(args.get_str("n").unwrap(), "ferris");
//! assert_eq!(args.get_int("times").unwrap(), 3);
//! assert!(args.get_bool("shout").unwrap());
//! ```

mod args;
mod config;
mod error;
mod registry;
mod scan;
mod types;
mod validate;

pub use args::ArgumentSet;
pub use config::{ParserConfig, Strictness};
pub use error::{ConfigError, FlagError, Result};
pub use registry::{AliasGroup, AliasRegistry, GroupId};
pub use scan::{ParseDiagnostic, ParseReport};
pub use types::{Value, ValueType};
pub use validate::{alias_is_valid, validate_alias};
