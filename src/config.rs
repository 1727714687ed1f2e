use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Prompt behavior configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PromptConfig {
    /// Text shown before reading the name
    #[serde(default = "default_prompt_text")]
    pub text: String,

    /// Whether the prompt is shown at all
    #[serde(default = "default_prompt_enabled")]
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: PromptConfig::default(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: default_prompt_text(),
            enabled: default_prompt_enabled(),
        }
    }
}

// Default functions for serde
fn default_prompt_text() -> String {
    "Enter your name: ".to_string()
}
fn default_prompt_enabled() -> bool {
    true
}

impl Config {
    /// Load configuration from file, or use defaults if not found
    pub fn load() -> Result<Self> {
        // Try to load from config.yaml in current directory
        let config_path = Path::new("config.yaml");

        if config_path.exists() {
            let contents = fs::read_to_string(config_path)
                .context("Failed to read config.yaml")?;
            let config: Config = serde_yaml::from_str(&contents)
                .context("Failed to parse config.yaml")?;
            Ok(config)
        } else {
            // Use defaults if no config file exists
            Ok(Config::default())
        }
    }

    /// Load configuration from a specific file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.prompt.text, "Enter your name: ");
        assert!(config.prompt.enabled);
    }

    #[test]
    fn test_parse_overrides_prompt_text() {
        let yaml = "prompt:\n  text: \"Name? \"\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.prompt.text, "Name? ");
        // Unspecified fields fall back to defaults
        assert!(config.prompt.enabled);
    }

    #[test]
    fn test_parse_empty_document_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.prompt.text, "Enter your name: ");
        assert!(config.prompt.enabled);
    }

    #[test]
    fn test_parse_disables_prompt() {
        let yaml = "prompt:\n  enabled: false\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.prompt.enabled);
        assert_eq!(config.prompt.text, "Enter your name: ");
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let err = Config::load_from(Path::new("/nonexistent/greeter-config.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
