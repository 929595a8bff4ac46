// Module exports for pure logic
pub mod pinned_site;         // Pinned-site page (link-preview tab)
pub mod pinned_sites;        // MRU store of pinned hosts
pub mod tabs;                // Tab collection model
pub mod tabs_archive;        // Legacy/current persisted format
pub mod tabs_store;          // Session snapshot file
