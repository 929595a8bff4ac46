// Session snapshot file - encoded tab model written atomically.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::modules::tabs::TabsModel;
use crate::settings::Settings;

/// Session snapshot file holding the encoded tab model.
#[derive(Debug, Clone)]
pub struct TabsStore {
    path: PathBuf,
}

impl TabsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when there is no snapshot or it holds no tab list.
    pub fn load(&self) -> Result<Option<TabsModel>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let model = TabsModel::decode(&json)?;
        match &model {
            Some(m) => info!("[TabsStore] Restored {} tabs from {:?}", m.count(), self.path),
            None => warn!("[TabsStore] No tab list in {:?}", self.path),
        }
        Ok(model)
    }

    /// Restores the last session, or starts empty when restoring is turned off
    /// or the snapshot is unusable.
    pub fn restore(&self, settings: &Settings) -> TabsModel {
        if !settings.restore_session {
            return TabsModel::new();
        }
        match self.load() {
            Ok(model) => model.unwrap_or_default(),
            Err(e) => {
                warn!("[TabsStore] Failed to restore session: {}", e);
                TabsModel::new()
            }
        }
    }

    pub fn save(&self, model: &TabsModel) -> Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = model.encode()?;

        // Atomic write: tmp + rename
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, &self.path)?;

        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
