//! Argument set coordinator.
//!
//! An [`ArgumentSet`] pairs two [`AliasRegistry`] instances for one
//! subcommand: required arguments, which have no default, and parameters,
//! which are seeded with a default at registration. Aliases are validated
//! against the naming rule and kept unique across both registries.
//!
//! # Example
//!
//! ```
//! use flagset_core::{ArgumentSet, FlagError};
//!
//! let mut args = ArgumentSet::new();
//! args.add_int_arg(&["first", "f"], "first operand").unwrap();
//! args.add_int_param(&["scale"], "multiplier", 1).unwrap();
//!
//! // Aliases are unique across required arguments and parameters.
//! assert_eq!(
//!     args.add_bool_param(&["f"], "clash", false),
//!     Err(FlagError::DuplicateAlias("f".to_string()))
//! );
//!
//! args.parse(&["-f", "20"]);
//! assert_eq!(args.get_int("first").unwrap(), 20);
//! assert_eq!(args.get_int("scale").unwrap(), 1);
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::error::{FlagError, Result};
use crate::registry::{AliasGroup, AliasRegistry};
use crate::scan::{ParseDiagnostic, ParseReport};
use crate::validate::validate_alias;
use crate::{Value, ValueType};

/// Required arguments and defaulted parameters of one subcommand.
#[derive(Debug, Clone, Default)]
pub struct ArgumentSet {
    required: AliasRegistry,
    params: AliasRegistry,
}

impl ArgumentSet {
    /// Creates an argument set with no flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the required arguments.
    pub fn required(&self) -> &AliasRegistry {
        &self.required
    }

    /// Registry holding the parameters.
    pub fn parameters(&self) -> &AliasRegistry {
        &self.params
    }

    /// Returns `true` if `alias` is claimed by a required argument or a
    /// parameter.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.required.has_alias(alias) || self.params.has_alias(alias)
    }

    /// Checks that every alias is well formed and unused.
    fn check_aliases<S: AsRef<str>>(&self, aliases: &[S]) -> Result<()> {
        if aliases.is_empty() {
            return Err(FlagError::EmptyAliasGroup);
        }
        for alias in aliases.iter().map(AsRef::as_ref) {
            validate_alias(alias)?;
        }
        let mut seen = HashSet::new();
        for alias in aliases.iter().map(AsRef::as_ref) {
            if self.has_alias(alias) || !seen.insert(alias) {
                return Err(FlagError::DuplicateAlias(alias.to_string()));
            }
        }
        Ok(())
    }

    /// Adds a required argument. Looking it up fails until a parse sets it.
    ///
    /// # Errors
    ///
    /// - [`FlagError::InvalidAliasName`] if an alias breaks the naming rule.
    /// - [`FlagError::DuplicateAlias`] if an alias is already in use.
    /// - [`FlagError::EmptyAliasGroup`] if `aliases` is empty.
    ///
    /// The argument set is unchanged on error.
    pub fn add_required<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        value_type: ValueType,
    ) -> Result<()> {
        self.check_aliases(aliases)?;
        self.required.register(aliases, doc, value_type)?;
        Ok(())
    }

    /// Adds a parameter whose type is that of `default`, and seeds it with
    /// `default` so lookups succeed without parsing.
    ///
    /// # Errors
    ///
    /// Same as [`add_required`](Self::add_required).
    pub fn add_parameter_with_default<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: impl Into<Value>,
    ) -> Result<()> {
        let default = default.into();
        self.check_aliases(aliases)?;
        let id = self.params.register(aliases, doc, default.value_type())?;
        self.params.set(id, default)
    }

    /// Adds a required integer argument.
    pub fn add_int_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.add_required(aliases, doc, ValueType::Integer)
    }

    /// Adds a required float argument.
    pub fn add_float_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.add_required(aliases, doc, ValueType::Float)
    }

    /// Adds a required string argument.
    pub fn add_str_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.add_required(aliases, doc, ValueType::String)
    }

    /// Adds a required boolean argument.
    pub fn add_bool_arg<S: AsRef<str>>(&mut self, aliases: &[S], doc: &str) -> Result<()> {
        self.add_required(aliases, doc, ValueType::Boolean)
    }

    /// Adds a integer parameter seeded with `default`.
    pub fn add_int_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: i64,
    ) -> Result<()> {
        self.add_parameter_with_default(aliases, doc, default)
    }

    /// Adds a float parameter seeded with `default`.
    pub fn add_float_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: f64,
    ) -> Result<()> {
        self.add_parameter_with_default(aliases, doc, default)
    }

    /// Adds a string parameter seeded with `default`.
    pub fn add_str_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: &str,
    ) -> Result<()> {
        self.add_parameter_with_default(aliases, doc, default)
    }

    /// Adds a boolean parameter seeded with `default`.
    pub fn add_bool_param<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        default: bool,
    ) -> Result<()> {
        self.add_parameter_with_default(aliases, doc, default)
    }

    /// Scans the flag tokens of one invocation into both registries.
    ///
    /// `tokens` starts after the program and subcommand names. The merged
    /// report lists every value that failed to coerce, and a label as
    /// unrecognized only when neither registry knows it.
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> ParseReport {
        let required = self.required.parse(tokens);
        let params = self.params.parse(tokens);

        let unknown_to_params: HashSet<&str> = params.unrecognized_labels().collect();
        let mut merged = ParseReport::default();
        for diagnostic in &required.diagnostics {
            let keep = match diagnostic {
                ParseDiagnostic::InvalidValue { .. } => true,
                ParseDiagnostic::UnrecognizedLabel { label } => {
                    unknown_to_params.contains(label.as_str())
                        && !merged.diagnostics.contains(diagnostic)
                }
            };
            if keep {
                merged.diagnostics.push(diagnostic.clone());
            }
        }
        merged
            .diagnostics
            .extend(params.invalid_values().cloned());

        debug!(
            tokens = tokens.len(),
            diagnostics = merged.diagnostics.len(),
            "Parsed argument set"
        );
        merged
    }

    /// Parses a whole process argument vector, skipping the program name
    /// and the subcommand name.
    pub fn parse_process_args<S: AsRef<str>>(&mut self, argv: &[S]) -> ParseReport {
        self.parse(argv.get(2..).unwrap_or_default())
    }

    /// Required groups that still have no value.
    pub fn missing_required(&self) -> Vec<&AliasGroup> {
        self.required
            .groups()
            .iter()
            .filter(|group| group.value().is_none())
            .collect()
    }

    /// Value bound to `alias` in either registry, required first.
    pub fn get(&self, alias: &str) -> Option<&Value> {
        self.required.get(alias).or_else(|| self.params.get(alias))
    }

    /// Integer value of `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::KeyNotFound`] if no integer value is available.
    pub fn get_int(&self, alias: &str) -> Result<i64> {
        self.required
            .get_int(alias)
            .or_else(|_| self.params.get_int(alias))
    }

    /// Float value of `alias`, required arguments first.
    pub fn get_float(&self, alias: &str) -> Result<f64> {
        self.required
            .get_float(alias)
            .or_else(|_| self.params.get_float(alias))
    }

    /// String value of `alias`, required arguments first.
    pub fn get_str(&self, alias: &str) -> Result<&str> {
        self.required
            .get_str(alias)
            .or_else(|_| self.params.get_str(alias))
    }

    /// Boolean value of `alias`, required arguments first.
    pub fn get_bool(&self, alias: &str) -> Result<bool> {
        self.required
            .get_bool(alias)
            .or_else(|_| self.params.get_bool(alias))
    }

    /// Renders the `ARGUMENTS` and `OPTIONS` sections, omitting a section
    /// with no entries.
    pub fn help_text(&self) -> String {
        let mut out = String::new();
        let arguments = self.required.help_text();
        if !arguments.is_empty() {
            out.push_str(&format!("ARGUMENTS\n{arguments}\n\n"));
        }
        let options = self.params.help_text();
        if !options.is_empty() {
            out.push_str(&format!("OPTIONS\n{options}\n\n"));
        }
        out
    }
}
