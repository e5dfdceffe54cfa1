//! Docking configuration persistence
//!
//! Stores preferences in `~/.config/docking/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::icon::TAB_ICON_SIZE;
use crate::node::DockingMode;

/// Settings shared by every placeholder created through one toolkit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockingConfig {
    /// Mode handed to widgets whose placeholder has no tree node
    #[serde(default)]
    pub default_docking_mode: DockingMode,

    /// Edge length tab icons are scaled down to
    #[serde(default = "default_tab_icon_size")]
    pub tab_icon_size: u32,

    /// Whether new placeholders show their header
    #[serde(default = "default_show_headers")]
    pub show_headers: bool,
}

fn default_tab_icon_size() -> u32 {
    TAB_ICON_SIZE
}

fn default_show_headers() -> bool {
    true
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            default_docking_mode: DockingMode::default(),
            tab_icon_size: default_tab_icon_size(),
            show_headers: default_show_headers(),
        }
    }
}

impl DockingConfig {
    /// Load config from disk, or return defaults if not found
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
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
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
}
