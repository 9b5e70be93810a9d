//! Vault Settings Manager configuration
//!
//! The configuration is an immutable value: it is loaded (or defaulted)
//! once and then passed by reference to whatever needs it.

use osm_select::{Directive, DirectivePolicy, DirectiveRecord, SortOrder, parse_records};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    ///
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    /// - `.yaml`, `.yml` -> YAML
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self::from_name(&extension).ok_or(Error::UnsupportedFormat { extension })
    }

    /// Look a format up by name (`json`, `toml`, `yaml` or `yml`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which settings files to manage, and how to treat the directive list.
///
/// `files_to_copy` is required in configuration files; the other fields
/// default to strict parsing and case-sensitive listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsmConfig {
    /// What to do with entries of `files_to_copy` that are not directives
    #[serde(default)]
    pub directive_policy: DirectivePolicy,

    /// Presentation order for listings
    #[serde(default)]
    pub sort_order: SortOrder,

    /// Ordered directive list, applied top to bottom
    pub files_to_copy: Vec<DirectiveRecord>,
}

impl Default for OsmConfig {
    /// The standard vault settings selection.
    fn default() -> Self {
        let files_to_copy = [
            ("copy", "README.md"),
            ("copy", "config"),
            ("copy", "*.json"),
            ("skip", "app.json"),
            ("skip", "core-plugins*"),
            ("skip", "workspace*"),
            ("skip", "command-palette.json"),
            ("copy", "plugins"),
            ("skip", "plugins/auto-note-mover"),
            ("copy", "snippets"),
            ("copy", "themes"),
        ]
        .into_iter()
        .map(|(key, pattern)| DirectiveRecord::keyed(key, pattern))
        .collect();

        Self {
            directive_policy: DirectivePolicy::default(),
            sort_order: SortOrder::default(),
            files_to_copy,
        }
    }
}

impl OsmConfig {
    /// Load a configuration file, detecting the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), %format, "Loading configuration");
        Self::parse_from(&content, format, path)
    }

    /// Load `path` if given, otherwise use the built-in default.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("Using built-in default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration content in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        Self::parse_from(content, format, Path::new("<inline>"))
    }

    fn parse_from(content: &str, format: ConfigFormat, path: &Path) -> Result<Self> {
        let parsed = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.as_str().into(),
            message,
        })
    }

    /// Render the configuration in the given format.
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        let rendered = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        };

        rendered.map_err(|message| Error::ConfigSerialize {
            format: format.as_str().into(),
            message,
        })
    }

    /// Return a copy with the directive policy replaced.
    pub fn with_policy(mut self, policy: DirectivePolicy) -> Self {
        self.directive_policy = policy;
        self
    }

    /// Convert `files_to_copy` into directives under the configured policy.
    pub fn directives(&self) -> Result<Vec<Directive>> {
        Ok(parse_records(&self.files_to_copy, self.directive_policy)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("osm.json", ConfigFormat::Json)]
    #[case("osm.toml", ConfigFormat::Toml)]
    #[case("osm.yaml", ConfigFormat::Yaml)]
    #[case("OSM.YML", ConfigFormat::Yaml)]
    fn format_from_extension(#[case] file: &str, #[case] expected: ConfigFormat) {
        assert_eq!(ConfigFormat::from_path(Path::new(file)).unwrap(), expected);
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = ConfigFormat::from_path(Path::new("osm.config")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "config"));
    }

    #[test]
    fn default_directives_parse_strictly() {
        let directives = OsmConfig::default().directives().unwrap();
        assert_eq!(directives.len(), 11);
        assert_eq!(directives[0], Directive::include("README.md"));
        assert_eq!(directives[3], Directive::exclude("app.json"));
    }

    #[rstest]
    #[case(ConfigFormat::Json)]
    #[case(ConfigFormat::Toml)]
    #[case(ConfigFormat::Yaml)]
    fn default_renders_and_parses_back(#[case] format: ConfigFormat) {
        let config = OsmConfig::default();
        let rendered = config.render(format).unwrap();
        assert_eq!(OsmConfig::parse(&rendered, format).unwrap(), config);
    }

    #[test]
    fn missing_files_to_copy_is_parse_error() {
        let err = OsmConfig::parse(r#"{ "directive_policy": "tolerant" }"#, ConfigFormat::Json)
            .unwrap_err();
        match err {
            Error::ConfigParse { format, message, .. } => {
                assert_eq!(format, "JSON");
                assert!(message.contains("files_to_copy"), "got: {message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn policy_and_sort_order_parse() {
        let config = OsmConfig::parse(
            r#"
directive_policy = "tolerant"
sort_order = "case-insensitive"
files_to_copy = [{ copy = "snippets" }, { rename = "x" }]
"#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.directive_policy, DirectivePolicy::Tolerant);
        assert_eq!(config.sort_order, SortOrder::CaseInsensitive);
        assert_eq!(config.directives().unwrap(), vec![Directive::include("snippets")]);
        assert!(config.with_policy(DirectivePolicy::Strict).directives().is_err());
    }
}
