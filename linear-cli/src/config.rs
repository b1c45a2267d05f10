// ABOUTME: Configuration file loading, validation, and hierarchical merging for Linear CLI
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{Context, Result, anyhow};
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::filters::{FilterDefaults, parse_newer_than};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    /// Team key applied when --team is not given
    #[serde(default)]
    pub default_team: Option<String>,
    #[serde(default, deserialize_with = "validate_format")]
    pub preferred_format: Option<String>,
    /// Base URL of the Linear API (the GraphQL path is appended)
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub default_limit: Option<i32>,
    /// Time window applied when --newer-than is not given
    #[serde(default)]
    pub default_newer_than: Option<String>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths.iter().map(|p| p.as_str()).collect::<Vec<_>>())
    }

    /// Load configuration from specific file paths, lowest precedence first
    pub fn load_from_paths(paths: &[&str]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            if !Path::new(path).is_file() {
                continue;
            }
            log::debug!("Loading config from {}", path);
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Get standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<String> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir
                .join(".config")
                .join("linear-cli")
                .join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(config_home)
                .join("linear-cli")
                .join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(
                current_dir
                    .join("linear-cli.toml")
                    .to_string_lossy()
                    .to_string(),
            );
        }

        paths.dedup();
        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            default_team: other.default_team.or(self.default_team),
            preferred_format: other.preferred_format.or(self.preferred_format),
            api_url: other.api_url.or(self.api_url),
            default_limit: other.default_limit.or(self.default_limit),
            default_newer_than: other.default_newer_than.or(self.default_newer_than),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.default_limit {
            if limit < 1 {
                return Err(anyhow!("default_limit must be at least 1, got {}", limit));
            }
        }

        if let Some(ref url) = self.api_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!(
                    "api_url must start with http:// or https://, got '{}'",
                    url
                ));
            }
        }

        if let Some(ref window) = self.default_newer_than {
            parse_newer_than(window, Utc::now()).context("Invalid default_newer_than")?;
        }

        Ok(())
    }

    pub fn wants_json(&self) -> bool {
        self.preferred_format.as_deref() == Some("json")
    }

    pub fn filter_defaults(&self) -> FilterDefaults {
        FilterDefaults {
            team: self.default_team.clone(),
            newer_than: self.default_newer_than.clone(),
        }
    }
}

// Custom deserializer for format validation
fn validate_format<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value: Option<String> = Option::deserialize(deserializer)?;

    match value.as_deref() {
        None | Some("table") | Some("json") => Ok(value),
        Some(format) => Err(D::Error::custom(format!(
            "Invalid format '{}'. Must be one of: table, json",
            format
        ))),
    }
}
