//! envscaffold configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::discovery::DEFAULT_PATTERN;

/// Default text removed from an example file name to name its output
pub const DEFAULT_EXAMPLE_SUFFIX: &str = ".example";

/// Main envscaffold configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Apply the root `.gitignore` during discovery
    pub gitignore: bool,

    /// Discovery glob, relative to the root
    pub pattern: String,

    /// Extra ignore entries in gitignore syntax; applied even with gitignore off
    pub ignore: Vec<String>,

    /// Removed from the example file name to derive the output name
    #[serde(rename = "example-suffix")]
    pub example_suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gitignore: true,
            pattern: DEFAULT_PATTERN.to_string(),
            ignore: Vec::new(),
            example_suffix: DEFAULT_EXAMPLE_SUFFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .envscaffold.yml
        let local_config = PathBuf::from(".envscaffold.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/envscaffold/envscaffold.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("envscaffold").join("envscaffold.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.gitignore);
        assert_eq!(config.pattern, "**/.env.example");
        assert!(config.ignore.is_empty());
        assert_eq!(config.example_suffix, ".example");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
gitignore: false
pattern: "**/.env.*.example"
ignore:
  - vendor/
  - "*.bak"
example-suffix: ".sample"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert!(!config.gitignore);
        assert_eq!(config.pattern, "**/.env.*.example");
        assert_eq!(config.ignore, vec!["vendor/".to_string(), "*.bak".to_string()]);
        assert_eq!(config.example_suffix, ".sample");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
ignore:
  - fixtures
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.ignore, vec!["fixtures".to_string()]);

        // Defaults for unspecified
        assert!(config.gitignore);
        assert_eq!(config.pattern, "**/.env.example");
        assert_eq!(config.example_suffix, ".example");
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("custom.yml");
        fs::write(&path, "gitignore: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.gitignore);
    }

    #[test]
    fn test_load_explicit_path_missing_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.yml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("missing.yml"));
    }
}
