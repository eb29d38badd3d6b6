//! Policy configuration persistence
//!
//! Stores the default field policy in `~/.config/textgate/policy.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{HardLineBreaks, LineOracle, MonospaceWrap, StylePolicy};

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Policy applied to new fields
    pub policy: StylePolicy,
    /// Soft-wrap width in columns; hard line breaks only when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_columns: Option<usize>,
}

/// Line oracle selected by an [`EngineConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredOracle {
    HardLineBreaks(HardLineBreaks),
    Monospace(MonospaceWrap),
}

impl LineOracle for ConfiguredOracle {
    fn visual_line_count(&self, text: &str) -> usize {
        match self {
            Self::HardLineBreaks(oracle) => oracle.visual_line_count(text),
            Self::Monospace(oracle) => oracle.visual_line_count(text),
        }
    }
}

impl EngineConfig {
    /// Load config from the default location, or return defaults if it is
    /// missing or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config = serde_yaml::from_str(content).context("Invalid policy YAML")?;
        Ok(config)
    }

    /// Save config to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Build the line oracle this config describes
    pub fn oracle(&self) -> ConfiguredOracle {
        match self.wrap_columns {
            Some(columns) => ConfiguredOracle::Monospace(MonospaceWrap::new(columns)),
            None => ConfiguredOracle::HardLineBreaks(HardLineBreaks),
        }
    }
}
