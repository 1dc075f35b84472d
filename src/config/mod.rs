// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the scale lookup tool.
//!
//! Settings are read from YAML, or TOML when the file ends in `.toml`.
//! Every field has a default, so an empty file is a valid configuration.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{ScaleName, TheoryError};

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "THEORY_CONFIG";

/// Lookup settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TheoryConfig {
    /// Scale used when no scale words are given
    #[serde(default = "default_scale")]
    pub default_scale: String,
    /// Alternate scale names, applied after title casing
    #[serde(default = "default_aliases")]
    pub scale_aliases: BTreeMap<String, String>,
    /// Log level when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// List only popular scales when a name does not resolve
    #[serde(default)]
    pub popular_only: bool,
}

fn default_scale() -> String {
    ScaleName::Major.name().to_string()
}
fn default_aliases() -> BTreeMap<String, String> {
    let minor = ScaleName::NaturalMinor.name().to_string();
    BTreeMap::from([("Minor".to_string(), minor.clone()), ("Min".to_string(), minor)])
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TheoryConfig {
    fn default() -> Self {
        Self {
            default_scale: default_scale(),
            scale_aliases: default_aliases(),
            log_level: default_log_level(),
            popular_only: false,
        }
    }
}

impl TheoryConfig {
    /// Load a configuration file, TOML for `.toml` and YAML otherwise
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);
        let config = if is_toml {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        };
        config.with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse a configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse a configuration from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Turn command line words into a catalog scale name.
    ///
    /// Words are title cased and joined with single spaces. No words
    /// means the default scale. Aliases are applied before the lookup.
    pub fn resolve_scale_name<S: AsRef<str>>(&self, words: &[S]) -> Result<ScaleName, TheoryError> {
        let titled = words
            .iter()
            .map(|w| title_case(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let name = if titled.is_empty() {
            self.default_scale.clone()
        } else {
            titled
        };
        let name = self.scale_aliases.get(&name).cloned().unwrap_or(name);
        ScaleName::from_name(&name)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    fn suffixed(suffix: &str) -> NamedTempFile {
        Builder::new().suffix(suffix).tempfile().unwrap()
    }

    #[test]
    fn test_default_values() {
        let config = TheoryConfig::from_yaml("").unwrap();
        assert_eq!(config, TheoryConfig::default());
        assert_eq!(config.default_scale, "Major");
        assert_eq!(config.log_level, "warn");
        assert!(!config.popular_only);
        assert_eq!(config.scale_aliases.get("Min"), Some(&"Natural Minor".to_string()));
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
default_scale: "Dorian"
log_level: debug
popular_only: true
scale_aliases:
  Pent: "Minor Pentatonic"
"#;
        let config = TheoryConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.default_scale, "Dorian");
        assert_eq!(config.log_level, "debug");
        assert!(config.popular_only);
        assert_eq!(config.scale_aliases.len(), 1);
        assert_eq!(config.resolve_scale_name(&["pent"]), Ok(ScaleName::MinorPentatonic));
        assert_eq!(config.resolve_scale_name::<&str>(&[]), Ok(ScaleName::Dorian));
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
default_scale = "Blues"

[scale_aliases]
Gypsy = "Hungarian Minor"
"#;
        let config = TheoryConfig::from_toml(text).unwrap();
        assert_eq!(config.default_scale, "Blues");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.resolve_scale_name(&["gypsy"]), Ok(ScaleName::HungarianMinor));
    }

    #[test]
    fn test_resolve_scale_name() {
        let config = TheoryConfig::default();
        assert_eq!(config.resolve_scale_name::<&str>(&[]), Ok(ScaleName::Major));
        assert_eq!(config.resolve_scale_name(&["minor"]), Ok(ScaleName::NaturalMinor));
        assert_eq!(config.resolve_scale_name(&["Min"]), Ok(ScaleName::NaturalMinor));
        assert_eq!(config.resolve_scale_name(&["harmonic", "minor"]), Ok(ScaleName::HarmonicMinor));
        assert_eq!(
            config.resolve_scale_name(&["bogus"]),
            Err(TheoryError::UnknownScale("Bogus".to_string()))
        );
    }

    #[test]
    fn test_load_by_extension() {
        let mut yaml_file = suffixed(".yaml");
        writeln!(yaml_file, "default_scale: Lydian").unwrap();
        let config = TheoryConfig::load(yaml_file.path()).unwrap();
        assert_eq!(config.default_scale, "Lydian");

        let mut toml_file = suffixed(".toml");
        writeln!(toml_file, "default_scale = \"Locrian\"").unwrap();
        let config = TheoryConfig::load(toml_file.path()).unwrap();
        assert_eq!(config.default_scale, "Locrian");
    }

    #[test]
    fn test_load_errors() {
        assert!(TheoryConfig::load("/nonexistent/theory.yaml").is_err());

        let mut bad = suffixed(".toml");
        writeln!(bad, "default_scale = [").unwrap();
        let err = TheoryConfig::load(bad.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid config file"));
    }

    #[test]
    fn test_round_trip() {
        let mut original = TheoryConfig::default();
        original.default_scale = "Phrygian".to_string();
        original.popular_only = true;

        let file = suffixed(".yml");
        original.save(file.path()).unwrap();
        let parsed = TheoryConfig::load(file.path()).unwrap();
        assert_eq!(original, parsed);
    }
}
