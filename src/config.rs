//! Option overrides stored in a TOML file
//!
//! ```toml
//! [options]
//! Hash = 256
//! Threads = 4
//! SyzygyPath = "/srv/syzygy"
//! "Analysis Contempt" = "White"
//! ```

use crate::options::{OptionKind, OptionValue, OptionsRegistry};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A single option value as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::Int(v) => write!(f, "{}", v),
            ConfigValue::Float(v) => write!(f, "{}", v),
            ConfigValue::Text(v) => f.write_str(v),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Option name to value; names match case-insensitively when applied
    #[serde(default)]
    pub options: BTreeMap<String, ConfigValue>,
}

impl EngineConfig {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("uci-options")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".uci-options")
        };

        Ok(config_dir.join("options.toml"))
    }

    /// Load overrides from the default location, or none if the file is absent
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("No option overrides at {:?}, using engine defaults", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading option overrides from: {:?}", path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: EngineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        debug!("Loaded {} option overrides", config.options.len());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(dir) = config_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", dir))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!("Saving option overrides to: {:?}", path);

        let content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        info!("Saved {} option overrides", self.options.len());
        Ok(())
    }

    /// Assign every override through the registry, returning how many took
    ///
    /// Hooks run exactly as for a GUI `setoption`. Unknown names, buttons and
    /// values the option refuses are skipped with a warning.
    pub fn apply(&self, registry: &mut OptionsRegistry) -> usize {
        let mut applied = 0;

        for (name, value) in &self.options {
            let assignable = registry.get(name).is_some_and(|setting| {
                setting.index().is_some() && setting.kind() != OptionKind::Button
            });
            if !assignable {
                warn!("Skipping config option '{}': not a valued engine option", name);
                continue;
            }

            match registry.set(name, &value.to_string()) {
                Ok(()) => applied += 1,
                Err(err) => warn!("Skipping config option '{}': {}", name, err),
            }
        }

        debug!("Applied {}/{} option overrides", applied, self.options.len());
        applied
    }

    /// Capture the current value of every valued option
    ///
    /// Buttons and empty strings are left out since neither can be assigned
    /// back.
    pub fn from_registry(registry: &OptionsRegistry) -> Self {
        let options = registry
            .list_all()
            .into_iter()
            .filter_map(|(name, setting)| {
                let value = match setting.value() {
                    OptionValue::Boolean { current, .. } => ConfigValue::Bool(*current),
                    OptionValue::Spin { current, .. } if current.fract() == 0.0 => {
                        ConfigValue::Int(*current as i64)
                    }
                    OptionValue::Spin { current, .. } => ConfigValue::Float(*current),
                    OptionValue::Text { current, .. } | OptionValue::Combo { current, .. } => {
                        if current.is_empty() {
                            return None;
                        }
                        ConfigValue::Text(current.clone())
                    }
                    OptionValue::Button => return None,
                };
                Some((name.to_string(), value))
            })
            .collect();

        Self { options }
    }

    /// Names in this config that the registry does not know, or that name a
    /// button
    pub fn unknown_options<'a>(&'a self, registry: &OptionsRegistry) -> Vec<&'a str> {
        self.options
            .keys()
            .filter(|name| {
                registry.get(name).is_none_or(|setting| {
                    setting.index().is_none() || setting.kind() == OptionKind::Button
                })
            })
            .map(String::as_str)
            .collect()
    }
}
