//! Storage Layer
//!
//! Loads creator snapshots and persists tip settings as JSON files.

pub mod snapshot;
pub mod tip_settings;

use anyhow::Result;
use std::path::PathBuf;

pub use snapshot::load_snapshot;
pub use tip_settings::{JsonTipSettingsStore, MemoryTipSettingsStore, TipSettingsStore};

fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "creatordashboard", "CreatorDashboard")
        .ok_or_else(|| anyhow::anyhow!("Could not determine project directories"))
}

/// Get the application data directory
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = project_dirs()?.data_dir().to_path_buf();
    std::fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = project_dirs()?.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}
