// Persisted form of the tab model.
// Older builds wrote tabs without ids under `tabs`/`currentIndex`; current builds
// write `tabs2`/`currentIndex2`. Both are read, only the current keys are written.

use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::modules::tabs::TabsModel;
use crate::state::Tab;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TabsArchive {
    #[serde(rename = "tabs", default, skip_serializing_if = "Option::is_none")]
    pub legacy_tabs: Option<Vec<Tab>>,
    #[serde(rename = "tabs2", default, skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<Tab>>,
    #[serde(rename = "currentIndex", default, skip_serializing_if = "Option::is_none")]
    pub legacy_index: Option<i64>,
    #[serde(
        rename = "currentIndex2",
        default,
        deserialize_with = "lenient_index",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_index: Option<i64>,
}

// A selection that isn't an integer is dropped rather than failing the whole
// session restore.
fn lenient_index<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64()))
}

impl From<&TabsModel> for TabsArchive {
    fn from(model: &TabsModel) -> Self {
        Self {
            legacy_tabs: None,
            tabs: Some(model.tabs().to_vec()),
            legacy_index: None,
            current_index: model.current_index().and_then(|i| i64::try_from(i).ok()),
        }
    }
}

impl TabsArchive {
    /// Rebuilds the model, or `None` when neither key holds a tab list.
    pub fn into_model(self) -> Option<TabsModel> {
        let (tabs, from_legacy) = match (self.legacy_tabs, self.tabs) {
            (Some(legacy), _) if !legacy.is_empty() => (legacy, true),
            (_, Some(tabs)) => (tabs, false),
            _ => return None,
        };

        // The index comes from the same schema as the list. Only the legacy
        // index is clamped; a bad current index is dropped and `with_tabs`
        // falls back to a valid selection.
        let legacy_index = self.legacy_index.map(|i| clamp_legacy_index(i, tabs.len()));
        let current_index = if from_legacy {
            legacy_index
        } else {
            match self.current_index {
                Some(stored) => usize::try_from(stored).ok().or_else(|| {
                    warn!("[TabsArchive] Ignoring current index {}", stored);
                    legacy_index
                }),
                None => legacy_index,
            }
        };

        debug!(
            "[TabsArchive] Restored {} tabs (legacy: {}), current index {:?}",
            tabs.len(),
            from_legacy,
            current_index
        );
        Some(TabsModel::with_tabs(tabs, current_index))
    }
}

fn clamp_legacy_index(stored: i64, count: usize) -> usize {
    match usize::try_from(stored) {
        Ok(index) if index < count => index,
        _ => {
            warn!("[TabsArchive] Legacy index {} out of range for {} tabs, using 0", stored, count);
            0
        }
    }
}

impl TabsModel {
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&TabsArchive::from(self))?)
    }

    /// `Ok(None)` means there was nothing to restore; malformed input is an error.
    pub fn decode(json: &str) -> Result<Option<TabsModel>> {
        let archive: TabsArchive = serde_json::from_str(json)?;
        Ok(archive.into_model())
    }
}
