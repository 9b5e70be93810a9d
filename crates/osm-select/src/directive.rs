//! Selection directives

use serde::{Deserialize, Serialize};

/// What a directive does with the files its pattern expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    /// Add every expanded file to the selection
    Include,
    /// Remove every expanded file from the selection
    Exclude,
}

impl Verb {
    /// The keyword used in text directives (`Include: ...`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "Include",
            Self::Exclude => "Exclude",
        }
    }

    /// Map a configuration record key to a verb.
    ///
    /// Accepts `include` / `exclude` and the older `copy` / `skip` aliases.
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key {
            "include" | "copy" => Some(Self::Include),
            "exclude" | "skip" => Some(Self::Exclude),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `(verb, pattern)` step of a selection.
///
/// `pattern` is relative to the resolution root and names a file, a
/// directory, or a glob expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Directive {
    pub verb: Verb,
    pub pattern: String,
}

impl Directive {
    pub fn new(verb: Verb, pattern: impl Into<String>) -> Self {
        Self {
            verb,
            pattern: pattern.into(),
        }
    }

    pub fn include(pattern: impl Into<String>) -> Self {
        Self::new(Verb::Include, pattern)
    }

    pub fn exclude(pattern: impl Into<String>) -> Self {
        Self::new(Verb::Exclude, pattern)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.verb, self.pattern)
    }
}
