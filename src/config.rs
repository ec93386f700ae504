//! Pipeline configuration for quill.
//!
//! The config is an opaque value the prompt-family factory threads through
//! to family constructors. Families hold it for future template tuning but
//! no current template consults it; the pipeline around quill (retriever,
//! LLM caller) is the real consumer.
//!
//! Unknown fields in the YAML are silently ignored for forward
//! compatibility.

use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration threaded through to prompt families.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model identifier the pipeline will send prompts to (informational).
    pub smart_llm: String,

    /// Sampling temperature the pipeline uses for prompt completions.
    pub temperature: f64,

    /// Default number of search results the retriever fetches per query.
    pub max_search_results: u32,

    /// Default output language for report prompts.
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smart_llm: default_smart_llm(),
            temperature: default_temperature(),
            max_search_results: default_max_search_results(),
            language: default_language(),
        }
    }
}

fn default_smart_llm() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f64 {
    0.4
}

fn default_max_search_results() -> u32 {
    5
}

fn default_language() -> String {
    "english".to_string()
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config YAML file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(QuillError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            QuillError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return an error on invalid values.
    ///
    /// Validation rules:
    /// - `temperature` must be within `0.0..=2.0`
    /// - `max_search_results` must be positive
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(QuillError::UserError(format!(
                "config validation failed: temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }

        if self.max_search_results == 0 {
            return Err(QuillError::UserError(
                "config validation failed: max_search_results must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.smart_llm, "gpt-4o");
        assert_eq!(config.max_search_results, 5);
        assert_eq!(config.language, "english");
    }

    #[test]
    fn from_yaml_applies_field_defaults() {
        let config = Config::from_yaml("smart_llm: claude-sonnet\n").unwrap();
        assert_eq!(config.smart_llm, "claude-sonnet");
        assert_eq!(config.temperature, 0.4);
        assert_eq!(config.language, "english");
    }

    #[test]
    fn from_yaml_ignores_unknown_fields() {
        let config = Config::from_yaml("language: spanish\nfuture_field: 42\n").unwrap();
        assert_eq!(config.language, "spanish");
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let config = Config {
            temperature: 3.5,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn validate_rejects_zero_search_results() {
        let config = Config {
            max_search_results: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
