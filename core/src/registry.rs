//! Typed alias registry.
//!
//! A registry owns a list of alias groups. Each group has one or more
//! aliases, a documentation string, a bound [`ValueType`] and at most one
//! [`Value`]. Aliases resolve to their group through a single index, so a
//! write through any alias is a write to the whole group and every alias of
//! a group always reads the same value.
//!
//! # Example
//!
//! ```
//! use flagset_core::{AliasRegistry, ValueType};
//!
//! let mut registry = AliasRegistry::new();
//! registry.register(&["count", "n"], "how many", ValueType::Integer).unwrap();
//! registry.register(&["verbose", "v"], "chatty output", ValueType::Boolean).unwrap();
//!
//! let report = registry.parse(&["--count=3", "-v"]);
//! assert!(report.is_clean());
//! assert_eq!(registry.get_int("n").unwrap(), 3);
//! assert!(registry.get_bool("verbose").unwrap());
//! ```

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::error::{FlagError, Result};
use crate::scan::{BindError, ParseReport, scan};
use crate::{Value, ValueType};

/// Position of a group in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One logical argument: its aliases, documentation, type and value.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasGroup {
    aliases: Vec<String>,
    doc: String,
    value_type: ValueType,
    value: Option<Value>,
}

impl AliasGroup {
    /// Aliases in registration order.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Description shown in help output.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Type every value of this group must have.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Current value, if a default was set or a parse bound one.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Aliases rendered the way help output lists them: ` --a, --b`.
    pub fn flag_list(&self) -> String {
        self.aliases
            .iter()
            .map(|alias| format!(" --{alias}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Registry of alias groups for one namespace (required arguments or
/// parameters) of a subcommand.
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    groups: Vec<AliasGroup>,
    index: HashMap<String, GroupId>,
    /// Documentation entries in display order. A description registered
    /// twice keeps only its latest group.
    menu: Vec<(String, GroupId)>,
}

impl AliasRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `alias` belongs to any group.
    pub fn has_alias(&self, alias: &str) -> bool {
        self.index.contains_key(alias)
    }

    /// Number of registered groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no group has been registered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All groups in registration order.
    pub fn groups(&self) -> &[AliasGroup] {
        &self.groups
    }

    /// Group with the given id.
    pub fn group(&self, id: GroupId) -> Option<&AliasGroup> {
        self.groups.get(id.0)
    }

    /// Id of the group `alias` belongs to.
    pub fn group_of(&self, alias: &str) -> Option<GroupId> {
        self.index.get(alias).copied()
    }

    /// Registers a new alias group bound to `value_type`.
    ///
    /// Registration is all-or-nothing: on error the registry is unchanged.
    ///
    /// # Errors
    ///
    /// - [`FlagError::EmptyAliasGroup`] if `aliases` is empty.
    /// - [`FlagError::DuplicateAlias`] if an alias is already registered or
    ///   appears twice in `aliases`.
    pub fn register<S: AsRef<str>>(
        &mut self,
        aliases: &[S],
        doc: &str,
        value_type: ValueType,
    ) -> Result<GroupId> {
        if aliases.is_empty() {
            return Err(FlagError::EmptyAliasGroup);
        }

        let mut seen = HashSet::new();
        for alias in aliases.iter().map(AsRef::as_ref) {
            if self.has_alias(alias) || !seen.insert(alias) {
                return Err(FlagError::DuplicateAlias(alias.to_string()));
            }
        }

        let id = GroupId(self.groups.len());
        let aliases: Vec<String> = aliases.iter().map(|a| a.as_ref().to_string()).collect();
        for alias in &aliases {
            self.index.insert(alias.clone(), id);
        }
        debug!(aliases = ?aliases, %value_type, "Registered alias group");

        self.menu.retain(|(existing, _)| existing != doc);
        self.menu.push((doc.to_string(), id));
        self.groups.push(AliasGroup {
            aliases,
            doc: doc.to_string(),
            value_type,
            value: None,
        });

        Ok(id)
    }

    /// Writes `value` to every alias of the group.
    ///
    /// # Errors
    ///
    /// - [`FlagError::UnknownGroup`] if `id` is not from this registry.
    /// - [`FlagError::TypeMismatch`] if `value` does not match the group's
    ///   bound type.
    pub fn set(&mut self, id: GroupId, value: Value) -> Result<()> {
        let group = self
            .groups
            .get_mut(id.0)
            .ok_or(FlagError::UnknownGroup(id.0))?;
        if group.value_type != value.value_type() {
            return Err(FlagError::TypeMismatch {
                expected: group.value_type,
                found: value.value_type(),
            });
        }
        group.value = Some(value);
        Ok(())
    }

    /// Tries to bind `raw` to the group `label` belongs to.
    fn bind(&mut self, label: &str, raw: &str) -> std::result::Result<(), BindError> {
        let id = self.group_of(label).ok_or(BindError::Unrecognized)?;
        let group = &mut self.groups[id.0];
        let value = group
            .value_type
            .coerce(raw)
            .ok_or(BindError::InvalidValue(group.value_type))?;
        group.value = Some(value);
        Ok(())
    }

    /// Scans flag tokens and stores every value that binds.
    ///
    /// `tokens` starts after the program and subcommand names. The scan
    /// never fails: unknown labels and values that do not coerce are
    /// skipped and listed in the returned [`ParseReport`]. Later
    /// occurrences overwrite earlier ones, including across calls.
    pub fn parse<S: AsRef<str>>(&mut self, tokens: &[S]) -> ParseReport {
        scan(tokens, |label, raw| self.bind(label, raw))
    }

    /// Value bound to `alias`, if any.
    pub fn get(&self, alias: &str) -> Option<&Value> {
        self.group_of(alias)
            .and_then(|id| self.groups[id.0].value.as_ref())
    }

    /// Integer value of `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::KeyNotFound`] if the alias has no integer value.
    pub fn get_int(&self, alias: &str) -> Result<i64> {
        self.get(alias)
            .and_then(Value::as_int)
            .ok_or_else(|| FlagError::KeyNotFound(alias.to_string()))
    }

    pub fn get_float(&self, alias: &str) -> Result<f64> {
        self.get(alias)
            .and_then(Value::as_float)
            .ok_or_else(|| FlagError::KeyNotFound(alias.to_string()))
    }

    pub fn get_str(&self, alias: &str) -> Result<&str> {
        self.get(alias)
            .and_then(Value::as_str)
            .ok_or_else(|| FlagError::KeyNotFound(alias.to_string()))
    }

    pub fn get_bool(&self, alias: &str) -> Result<bool> {
        self.get(alias)
            .and_then(Value::as_bool)
            .ok_or_else(|| FlagError::KeyNotFound(alias.to_string()))
    }

    /// Renders one line per documentation entry: the aliases, a tab, then
    /// the description.
    pub fn help_text(&self) -> String {
        self.menu
            .iter()
            .map(|(doc, id)| format!("{}\t{doc}\n", self.groups[id.0].flag_list()))
            .collect()
    }
}
