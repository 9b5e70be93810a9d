//! Adapters from external directive representations to [`Directive`]s
//!
//! Two representations are accepted:
//!
//! - text lines: `Include: <pattern>` / `Exclude: <pattern>`
//! - configuration records: `{ "copy": "<pattern>" }` style single-key maps,
//!   or explicit `{ "verb": "Include", "pattern": "<pattern>" }` records
//!
//! Blank entries are ignored. What happens to anything else that is not a
//! valid directive is decided by the [`DirectivePolicy`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::{Directive, Error, Result, Verb};

/// What to do with an entry that is not a valid directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectivePolicy {
    /// Abort on the first invalid entry
    #[default]
    Strict,
    /// Log a warning naming the entry and carry on without it
    Tolerant,
}

impl DirectivePolicy {
    fn handle(self, err: Error) -> Result<()> {
        match self {
            Self::Strict => Err(err),
            Self::Tolerant => {
                warn!("{err}; ignoring it");
                Ok(())
            }
        }
    }
}

fn invalid(line: usize, text: impl Into<String>, reason: impl Into<String>) -> Error {
    Error::InvalidDirective {
        line,
        text: text.into(),
        reason: reason.into(),
    }
}

/// Parse a single text line.
///
/// Returns `Ok(None)` for a blank line. `line_no` is only used to label
/// errors. The verb keyword is case-sensitive and must be followed by a
/// colon; whitespace around the pattern is insignificant.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Directive>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    for verb in [Verb::Include, Verb::Exclude] {
        let Some(rest) = trimmed
            .strip_prefix(verb.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
        else {
            continue;
        };

        let pattern = rest.trim();
        if pattern.is_empty() {
            return Err(invalid(line_no, trimmed, "directive has no pattern"));
        }
        return Ok(Some(Directive::new(verb, pattern)));
    }

    Err(invalid(
        line_no,
        trimmed,
        "unknown directive, expected `Include: <pattern>` or `Exclude: <pattern>`",
    ))
}

/// Parse newline-separated directives, numbering lines from 1.
pub fn parse_lines(text: &str, policy: DirectivePolicy) -> Result<Vec<Directive>> {
    let mut directives = Vec::new();

    for (index, line) in text.lines().enumerate() {
        match parse_line(index + 1, line) {
            Ok(Some(directive)) => directives.push(directive),
            Ok(None) => {}
            Err(err) => policy.handle(err)?,
        }
    }

    Ok(directives)
}

/// A directive as written in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveRecord {
    /// `{ "verb": "Include", "pattern": "snippets" }`
    Explicit { verb: Verb, pattern: String },
    /// `{ "copy": "snippets" }`; must hold exactly one key
    Keyed(BTreeMap<String, String>),
}

impl DirectiveRecord {
    /// Build the single-key form, e.g. `keyed("skip", "workspace*")`.
    pub fn keyed(key: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::Keyed(BTreeMap::from([(key.into(), pattern.into())]))
    }

    /// Convert to a directive. `Ok(None)` means the record has an empty
    /// pattern and is skipped.
    pub fn to_directive(&self, entry: usize) -> Result<Option<Directive>> {
        let (verb, pattern) = match self {
            Self::Explicit { verb, pattern } => (*verb, pattern),
            Self::Keyed(map) => {
                let mut entries = map.iter();
                let (key, pattern) = match (entries.next(), entries.next()) {
                    (Some(only), None) => only,
                    _ => {
                        return Err(invalid(
                            entry,
                            self.to_string(),
                            "a directive record must have exactly one key",
                        ));
                    }
                };
                let verb = Verb::from_config_key(key).ok_or_else(|| {
                    invalid(
                        entry,
                        self.to_string(),
                        format!("unknown action {key:?}, expected include, exclude, copy or skip"),
                    )
                })?;
                (verb, pattern)
            }
        };

        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Ok(None);
        }
        Ok(Some(Directive::new(verb, pattern)))
    }
}

impl From<&Directive> for DirectiveRecord {
    fn from(directive: &Directive) -> Self {
        let key = match directive.verb {
            Verb::Include => "include",
            Verb::Exclude => "exclude",
        };
        Self::keyed(key, directive.pattern.clone())
    }
}

impl std::fmt::Display for DirectiveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit { verb, pattern } => {
                write!(f, "{{verb: {verb}, pattern: {pattern:?}}}")
            }
            Self::Keyed(map) => {
                let fields: Vec<String> = map.iter().map(|(k, v)| format!("{k}: {v:?}")).collect();
                write!(f, "{{{}}}", fields.join(", "))
            }
        }
    }
}

/// Convert configuration records, numbering entries from 1.
pub fn parse_records(records: &[DirectiveRecord], policy: DirectivePolicy) -> Result<Vec<Directive>> {
    let mut directives = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match record.to_directive(index + 1) {
            Ok(Some(directive)) => directives.push(directive),
            Ok(None) => {}
            Err(err) => policy.handle(err)?,
        }
    }

    Ok(directives)
}
