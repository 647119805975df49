//! Alias naming rule.
//!
//! An alias is valid when it is non-empty, starts with a letter and
//! continues with letters, decimal digits, `_` or `-`. Unicode letters and
//! digits are accepted.
//!
//! # Examples
//!
//! ```
//! use flagset_core::{alias_is_valid, validate_alias, FlagError};
//!
//! assert!(alias_is_valid("dry-run"));
//! assert!(alias_is_valid("n_2"));
//! assert!(!alias_is_valid("-v"));
//! assert_eq!(
//!     validate_alias("2fast"),
//!     Err(FlagError::InvalidAliasName("2fast".to_string()))
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FlagError, Result};

static ALIAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}[\p{L}\p{Nd}_-]*$").expect("static regex must compile"));

/// Returns `true` if `name` satisfies the alias naming rule.
pub fn alias_is_valid(name: &str) -> bool {
    ALIAS_RE.is_match(name)
}

/// Checks a single alias against the naming rule.
///
/// # Errors
///
/// Returns [`FlagError::InvalidAliasName`] when the rule is not satisfied.
pub fn validate_alias(name: &str) -> Result<()> {
    if alias_is_valid(name) {
        Ok(())
    } else {
        Err(FlagError::InvalidAliasName(name.to_string()))
    }
}
