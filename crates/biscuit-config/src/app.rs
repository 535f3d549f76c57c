//! Dashboard configuration schema and loading.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use biscuit_sim::{peer, USER_ACTOR};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "BISCUIT_CONFIG";

/// Dashboard configuration loaded from `biscuit.toml`.
///
/// Every field has a default, so a missing or empty file yields a fully
/// usable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    /// Display name for the office dog.
    pub pet_name: String,
    /// Colleague names eligible to appear in the activity feed.
    pub colleagues: Vec<String>,
    /// Fixed seed for colleague activity; random when absent.
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pet_name: "Biscuit".to_string(),
            colleagues: peer::default_roster(),
            seed: None,
        }
    }
}

impl AppConfig {
    /// Parse and validate configuration TOML.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).context("failed to parse configuration TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid configuration at {}", path.display()))
    }

    /// Validate field constraints beyond what the schema enforces.
    pub fn validate(&self) -> Result<()> {
        validate_nonempty("pet_name", &self.pet_name)?;
        validate_roster("colleagues", &self.colleagues)?;
        Ok(())
    }
}

/// Where the configuration file lives.
///
/// `BISCUIT_CONFIG` overrides the platform config directory. Returns `None`
/// only when the platform has no config directory and no override is set.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("biscuit").join("biscuit.toml"))
}

/// Load the dashboard configuration, falling back to defaults when no file
/// exists. A file that exists but fails to parse or validate is an error.
pub fn load() -> Result<AppConfig> {
    let Some(path) = config_path() else {
        return Ok(AppConfig::default());
    };
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    AppConfig::from_path(&path)
}

fn validate_nonempty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        bail!("{field} must not be empty");
    }
    Ok(())
}

fn validate_roster(field: &str, names: &[String]) -> Result<()> {
    if names.is_empty() {
        bail!("{field} must not be empty");
    }
    let mut seen = BTreeSet::new();
    for name in names {
        if name.trim().is_empty() {
            bail!("{field} entries must not be empty");
        }
        if name.trim() != name {
            bail!("{field} entry {name:?} has leading or trailing whitespace");
        }
        if name == USER_ACTOR {
            bail!("{field} must not contain the reserved name {USER_ACTOR:?}");
        }
        if !seen.insert(name.as_str()) {
            bail!("{field} contains duplicate entry {name:?}");
        }
    }
    Ok(())
}
