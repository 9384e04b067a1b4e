use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default daily goal (tasks completed per day)
pub const DEFAULT_DAILY_GOAL: u32 = 5;

/// App metadata stored in meta.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    #[serde(default = "default_daily_goal")]
    pub daily_goal: u32,
}

fn default_daily_goal() -> u32 {
    DEFAULT_DAILY_GOAL
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            daily_goal: DEFAULT_DAILY_GOAL,
        }
    }
}

/// Load app metadata from meta.json. Missing or malformed files fall back
/// to defaults.
pub fn load_metadata<P: AsRef<Path>>(path: P) -> AppMetadata {
    let path = path.as_ref();

    if !path.exists() {
        return AppMetadata::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => AppMetadata::default(),
    }
}

/// Save app metadata to meta.json
pub fn save_metadata<P: AsRef<Path>>(path: P, metadata: &AppMetadata) -> Result<()> {
    let json = serde_json::to_string_pretty(metadata)?;
    super::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = load_metadata(&meta_path);
        assert_eq!(metadata.daily_goal, DEFAULT_DAILY_GOAL);
    }

    #[test]
    fn test_load_malformed_metadata_defaults() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");
        super::super::atomic_write(&meta_path, "not json").unwrap();

        let metadata = load_metadata(&meta_path);
        assert_eq!(metadata.daily_goal, DEFAULT_DAILY_GOAL);
    }

    #[test]
    fn test_save_and_load_metadata() {
        let temp_dir = tempdir().unwrap();
        let meta_path = temp_dir.path().join("meta.json");

        let metadata = AppMetadata { daily_goal: 8 };
        save_metadata(&meta_path, &metadata).unwrap();

        let loaded = load_metadata(&meta_path);
        assert_eq!(loaded.daily_goal, 8);
    }
}
