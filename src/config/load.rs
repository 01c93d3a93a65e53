//! Configuration loading from files.
//!
//! This module handles reading and parsing configuration files.

use std::path::Path;

use super::{ConfigError, SiteConfig};

impl SiteConfig {
    /// Load the config from the command line argument, defaulting to `config.json`
    pub fn load_from_arg(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = config_file.unwrap_or(Path::new("config.json"));
        let config_file = if config_file.is_relative() {
            std::env::current_dir()
                .map_err(ConfigError::CwdFailure)?
                .join(config_file)
        } else {
            config_file.to_path_buf()
        };

        Self::load_from_file(&config_file)
    }

    /// Load the config from a file path
    pub(crate) fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::from_json(&content)
    }

    /// Parse a config from JSON text.
    ///
    /// Syntax errors and shape errors are reported separately: the former
    /// come straight from the JSON parser, the latter go through
    /// [`format_config_error`] to pick up usage hints.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(content)?;

        if !value.is_object() {
            return Err(ConfigError::Validation(
                "config must be a JSON object, not a scalar or array".to_string(),
            ));
        }

        serde_json::from_value::<SiteConfig>(value)
            .map_err(|e| ConfigError::Validation(format_config_error(e)))
    }
}

/// Format a config deserialization error with helpful context
fn format_config_error(e: serde_json::Error) -> String {
    let msg = e.to_string();

    // Check for common issues and provide specific guidance
    if msg.contains("missing field `articles`") {
        return "invalid config: 'articles' list is required\n\nExample:\n  \"articles\": [\n    { \"source\": \"hello.md\", \"title\": \"Hello\" }\n  ]".to_string();
    }
    if msg.contains("missing field `topics`") {
        return "invalid config: 'topics' list is required\n\nExample:\n  \"topics\": [\"news\", \"guides\"]".to_string();
    }
    if msg.contains("missing field `source`") {
        return "invalid config: each article needs a 'source' field with its Markdown path".to_string();
    }
    if msg.contains("missing field `title`") {
        return "invalid config: each article needs a 'title' field".to_string();
    }

    format!("invalid config: {msg}")
}
