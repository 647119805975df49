//! Token scanner.
//!
//! Walks the flag tokens of one invocation with a cursor and hands every
//! `(label, value)` candidate to a binder. The scanner knows nothing about
//! types; the binder decides whether a candidate is accepted, and the
//! answer drives how far the cursor moves:
//!
//! | Token shape        | Candidate value         | Cursor advance            |
//! |--------------------|-------------------------|---------------------------|
//! | `-x=v`, `--x=v`    | `v`                     | 1                         |
//! | `-x`, `--x` + next | the next token          | 2 if accepted, else 1     |
//! | `-x` at the end    | `""`                    | 1                         |
//! | no leading dash    | none (token is skipped) | 1                         |

use thiserror::Error;
use tracing::debug;

use crate::ValueType;

/// Why a binder rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindError {
    /// No alias group knows the label.
    Unrecognized,
    /// The label is known but the value does not coerce to its type.
    InvalidValue(ValueType),
}

/// A non-fatal problem noticed during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDiagnostic {
    /// A flag token whose label is not registered.
    #[error("unrecognized flag: {label}")]
    UnrecognizedLabel { label: String },

    /// A value that does not parse as the group's bound type.
    #[error("invalid {expected} value for {label}: \"{value}\"")]
    InvalidValue {
        label: String,
        value: String,
        expected: ValueType,
    },
}

impl ParseDiagnostic {
    /// Label the diagnostic refers to.
    pub fn label(&self) -> &str {
        match self {
            ParseDiagnostic::UnrecognizedLabel { label }
            | ParseDiagnostic::InvalidValue { label, .. } => label,
        }
    }
}

/// Outcome of one scan over a token vector.
///
/// A scan always completes; the report only lists what could not be bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ParseReport {
    /// `true` when every flag token was bound.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Labels that no alias group claimed.
    pub fn unrecognized_labels(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter().filter_map(|d| match d {
            ParseDiagnostic::UnrecognizedLabel { label } => Some(label.as_str()),
            _ => None,
        })
    }

    /// Values that failed to coerce.
    pub fn invalid_values(&self) -> impl Iterator<Item = &ParseDiagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, ParseDiagnostic::InvalidValue { .. }))
    }

    pub fn has_invalid_values(&self) -> bool {
        self.invalid_values().next().is_some()
    }

    fn record(&mut self, label: &str, value: &str, result: Result<(), BindError>) {
        match result {
            Ok(()) => {}
            Err(BindError::Unrecognized) => {
                debug!(label, "Ignoring unrecognized flag");
                self.diagnostics.push(ParseDiagnostic::UnrecognizedLabel {
                    label: label.to_string(),
                });
            }
            Err(BindError::InvalidValue(expected)) => {
                debug!(label, value, %expected, "Flag value did not coerce");
                self.diagnostics.push(ParseDiagnostic::InvalidValue {
                    label: label.to_string(),
                    value: value.to_string(),
                    expected,
                });
            }
        }
    }
}

/// A token that starts with a dash marker, split into label and value.
#[derive(Debug, PartialEq, Eq)]
struct FlagToken<'a> {
    label: &'a str,
    inline: Option<&'a str>,
}

/// Splits a token into label and inline value.
///
/// Returns `None` for tokens without a leading `-`. The whole dash run is
/// stripped whatever its length, so `---x` yields the label `x`: runs
/// longer than `--` are not skipped as non-flags. An empty text after `=`
/// counts as no inline value.
fn split_flag(token: &str) -> Option<FlagToken<'_>> {
    let rest = token.trim_start_matches('-');
    if rest.len() == token.len() {
        return None;
    }
    Some(match rest.split_once('=') {
        Some((label, value)) if !value.is_empty() => FlagToken {
            label,
            inline: Some(value),
        },
        Some((label, _)) => FlagToken {
            label,
            inline: None,
        },
        None => FlagToken {
            label: rest,
            inline: None,
        },
    })
}

/// Scans `tokens` left to right, offering every candidate to `bind`.
pub(crate) fn scan<S, B>(tokens: &[S], mut bind: B) -> ParseReport
where
    S: AsRef<str>,
    B: FnMut(&str, &str) -> Result<(), BindError>,
{
    let mut report = ParseReport::default();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let token = tokens[cursor].as_ref();
        let Some(flag) = split_flag(token) else {
            debug!(token, "Skipping non-flag token");
            cursor += 1;
            continue;
        };

        match (flag.inline, tokens.get(cursor + 1)) {
            (Some(value), _) => {
                report.record(flag.label, value, bind(flag.label, value));
                cursor += 1;
            }
            (None, Some(next)) => {
                let next = next.as_ref();
                match bind(flag.label, next) {
                    Ok(()) => cursor += 2,
                    Err(err) => {
                        report.record(flag.label, next, Err(err));
                        cursor += 1;
                    }
                }
            }
            (None, None) => {
                report.record(flag.label, "", bind(flag.label, ""));
                cursor += 1;
            }
        }
    }

    report
}
