use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Hosts every fresh install starts with.
pub const DEFAULT_PINNED_HOSTS: [&str; 2] = ["mobile.twitter.com", "m.facebook.com"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub pinned_hosts: Vec<String>,
    pub https_only: bool,
    pub restore_session: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pinned_hosts: DEFAULT_PINNED_HOSTS.iter().map(|h| h.to_string()).collect(),
            https_only: true,
            restore_session: true,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("[Settings] Failed to parse settings: {}, returning defaults", e);
                Self::default()
            }),
            Err(e) => {
                warn!("[Settings] Failed to read file: {}, returning defaults", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp_path = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write to tmp, then rename, so a crash never leaves a half-written file.
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pinned_hosts, vec!["mobile.twitter.com", "m.facebook.com"]);
        assert!(settings.https_only);
        assert!(settings.restore_session);
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            pinned_hosts: vec!["example.com".to_string()],
            https_only: false,
            restore_session: false,
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path), settings);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"https_only": false}"#).unwrap();

        let settings = Settings::load(&path);
        assert!(!settings.https_only);
        assert_eq!(settings.pinned_hosts.len(), 2);
    }

    #[test]
    fn test_corrupt_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
