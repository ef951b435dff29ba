//! CLI configuration
//!
//! Loaded from a YAML file passed with `--config`. Every field is optional;
//! command-line flags override whatever the file sets.

use crate::error::{Error, Result};
use crate::initialisms::MatchEngine;
use crate::names::Variant;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How `convert` prints its results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned row per name
    #[default]
    Text,
    /// JSON array of name objects
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Settings for the `initialisms` binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Variant columns to print in text mode, in order
    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,

    /// Matcher engine used by the normalizer
    #[serde(default)]
    pub engine: MatchEngine,
}

fn default_variants() -> Vec<Variant> {
    vec![
        Variant::Pascal,
        Variant::LowerCamel,
        Variant::Lower,
        Variant::Snake,
        Variant::SnakeStripped,
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            variants: default_variants(),
            engine: MatchEngine::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_norway::from_str(yaml)?;
        if config.variants.is_empty() {
            return Err(Error::Config("variants must not be empty".into()));
        }
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}
