//! Error types for initialisms

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Initialisms errors
///
/// Name conversion itself never fails; these cover building a rule engine,
/// loading configuration and driving the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Rule compile error for '{rule}': {source}")]
    RuleCompile {
        rule: &'static str,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
