//! Tip settings persistence

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::model::TipConfiguration;

/// Where the tip configuration is kept between sessions
pub trait TipSettingsStore {
    /// Load the stored configuration
    fn load(&self) -> Result<TipConfiguration>;
    /// Replace the stored configuration
    fn save(&mut self, config: &TipConfiguration) -> Result<()>;
}

/// Stores the configuration as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonTipSettingsStore {
    path: PathBuf,
}

impl JsonTipSettingsStore {
    /// File name used inside the data directory
    pub const FILE_NAME: &'static str = "tip_settings.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TipSettingsStore for JsonTipSettingsStore {
    /// A missing file yields the default configuration
    fn load(&self) -> Result<TipConfiguration> {
        if !self.path.exists() {
            return Ok(TipConfiguration::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let config: TipConfiguration = serde_json::from_str(&content)?;
        Ok(config)
    }

    fn save(&mut self, config: &TipConfiguration) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        info!("Saved tip settings to {:?}", self.path);
        Ok(())
    }
}

/// Keeps the configuration in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryTipSettingsStore {
    config: TipConfiguration,
    saves: usize,
}

impl MemoryTipSettingsStore {
    pub fn new(config: TipConfiguration) -> Self {
        Self { config, saves: 0 }
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl TipSettingsStore for MemoryTipSettingsStore {
    fn load(&self) -> Result<TipConfiguration> {
        Ok(self.config.clone())
    }

    fn save(&mut self, config: &TipConfiguration) -> Result<()> {
        self.config = config.clone();
        self.saves += 1;
        Ok(())
    }
}
