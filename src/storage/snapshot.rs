//! Creator snapshot loading

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::CreatorSnapshot;

/// Load a creator snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<CreatorSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {:?}", path))?;
    let snapshot: CreatorSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Invalid snapshot {:?}", path))?;
    Ok(snapshot)
}
