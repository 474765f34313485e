//! Creator Dashboard - summary of a creator's shows, tips and profile
//!
//! A desktop dashboard that displays a creator data snapshot and lets the
//! creator configure how fans tip them.

mod config;
mod dashboard;
mod format;
mod model;
mod navigation;
mod shared;
mod storage;

use anyhow::Result;
use clap::Parser;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::model::mock::sample_snapshot;
use crate::model::CreatorSnapshot;
use crate::shared::SharedAppState;
use crate::storage::{JsonTipSettingsStore, MemoryTipSettingsStore, TipSettingsStore};

/// Creator Dashboard
#[derive(Parser, Debug)]
#[command(name = "creator-dashboard")]
#[command(about = "Dashboard for a creator's shows, tips and tip settings")]
struct Args {
    /// Creator snapshot JSON to display (built-in sample data when omitted)
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Tip settings JSON file to load from and save to
    #[arg(short, long)]
    tip_settings: Option<PathBuf>,

    /// Configuration file (defaults to config.toml in the config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Creator Dashboard starting...");

    let config = load_or_create_config(args.config.as_deref());

    let snapshot = load_creator_snapshot(args.snapshot.as_ref().or(config.data.snapshot_path.as_ref()))?;
    info!(
        "Loaded snapshot for @{} ({} shows, {} tips)",
        snapshot.profile.username,
        snapshot.shows.len(),
        snapshot.recent_tips.len()
    );

    let tip_store = open_tip_store(args.tip_settings.or_else(|| config.data.tip_settings_path.clone()));
    let tip_settings = tip_store.load().unwrap_or_else(|e| {
        warn!("Failed to load tip settings, using defaults: {:#}", e);
        Default::default()
    });

    let shared_state = Arc::new(RwLock::new(SharedAppState::new(config, snapshot, tip_settings)));

    // Run the dashboard (blocking)
    if let Err(e) = dashboard::app::run_dashboard(shared_state, tip_store) {
        tracing::error!("Dashboard error: {}", e);
    }

    info!("Creator Dashboard shutdown complete");

    Ok(())
}

/// Load configuration from file, writing the defaults when none exists yet
fn load_or_create_config(explicit: Option<&Path>) -> AppConfig {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match storage::get_config_dir() {
            Ok(dir) => dir.join("config.toml"),
            Err(e) => {
                warn!("No config directory ({}), using default configuration", e);
                return AppConfig::default();
            }
        },
    };

    if config_path.exists() {
        match config::load_config(&config_path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", config_path);
                return config;
            }
            Err(e) => warn!("Ignoring invalid configuration {:?}: {}", config_path, e),
        }
        return AppConfig::default();
    }

    let config = AppConfig::default();
    match config::save_config(&config, &config_path) {
        Ok(()) => info!("Wrote default configuration to {:?}", config_path),
        Err(e) => warn!("Could not write default configuration: {}", e),
    }
    config
}

/// Load the snapshot from `path`, or fall back to the sample data
fn load_creator_snapshot(path: Option<&PathBuf>) -> Result<CreatorSnapshot> {
    match path {
        Some(path) => {
            let snapshot = storage::load_snapshot(path)?;
            info!("Loaded creator snapshot from {:?}", path);
            Ok(snapshot)
        }
        None => {
            info!("No snapshot given, using sample data");
            Ok(sample_snapshot())
        }
    }
}

/// Pick the tip settings store: explicit path, then the data directory,
/// then memory only
fn open_tip_store(path: Option<PathBuf>) -> Box<dyn TipSettingsStore> {
    let path = match path {
        Some(path) => path,
        None => match storage::get_data_dir() {
            Ok(dir) => dir.join(JsonTipSettingsStore::FILE_NAME),
            Err(e) => {
                warn!("No data directory ({}), tip settings will not persist", e);
                return Box::new(MemoryTipSettingsStore::default());
            }
        },
    };

    info!("Tip settings file: {:?}", path);
    Box::new(JsonTipSettingsStore::new(path))
}
