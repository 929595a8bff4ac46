// Pinned Tabs Library Entry Point
// Exposes the tab model and the pinned-site store so a host UI can drive them
// and they can be tested independently.

pub mod error;
pub mod settings;

// Shared state
pub mod state;

// Pure logic modules (no UI imports)
pub mod modules;

pub use error::{BrowserError, Result};
pub use modules::pinned_site::{pinned_site_url, PinnedSitePage};
pub use modules::pinned_sites::PinnedSiteStore;
pub use modules::tabs::{Selection, TabsModel};
pub use modules::tabs_archive::TabsArchive;
pub use modules::tabs_store::TabsStore;
pub use settings::Settings;
pub use state::{Link, Tab, TabId};
