// Shared state structs to avoid circular dependencies.
// These are used by the tab model, the archive and the pinned-site page,
// and can be tested independently.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;
use uuid::Uuid;

/// Stable identity of a tab. Tabs are compared by id, never by content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

// Legacy tabs were persisted before they carried an id; they get a fresh one.
impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub title: Option<String>,
    pub url: Url,
}

impl Link {
    pub fn new(title: Option<String>, url: Url) -> Self {
        Self { title, url }
    }
}

fn viewed_by_default() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tab {
    #[serde(default, rename = "uid")]
    pub id: TabId,
    pub link: Option<Link>,
    #[serde(default = "viewed_by_default")]
    pub viewed: bool,
}

impl Tab {
    /// A tab opened in the foreground; the user has already seen it.
    pub fn new(link: Option<Link>) -> Self {
        Self {
            id: TabId::new(),
            link,
            viewed: true,
        }
    }

    /// A tab opened in the background, counted as unread until shown.
    pub fn unviewed(link: Option<Link>) -> Self {
        Self {
            viewed: false,
            ..Self::new(link)
        }
    }

    pub fn mark_viewed(&mut self) {
        self.viewed = true;
    }

    pub fn url(&self) -> Option<&Url> {
        self.link.as_ref().map(|l| &l.url)
    }
}
