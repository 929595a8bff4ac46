// Pinned hosts, most recently used first.

use log::debug;
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::settings::{Settings, DEFAULT_PINNED_HOSTS};

static SHARED: Lazy<Mutex<PinnedSiteStore>> = Lazy::new(|| Mutex::new(PinnedSiteStore::new()));

/// Unique hostnames ordered by recency. Hosts are taken as `Option<&str>` so a
/// `Url::host_str()` can be passed straight through; `None` is always a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedSiteStore {
    hosts: Vec<String>,
}

impl Default for PinnedSiteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PinnedSiteStore {
    pub fn new() -> Self {
        Self::with_hosts(DEFAULT_PINNED_HOSTS)
    }

    /// Seeds the store in the given order, keeping the first of any duplicates.
    pub fn with_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self { hosts: Vec::new() };
        for host in hosts {
            let host = host.into();
            if !store.hosts.contains(&host) {
                store.hosts.push(host);
            }
        }
        store
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_hosts(settings.pinned_hosts.iter().cloned())
    }

    /// Process-wide store. Lock it for every access; there is one writer at a time.
    pub fn shared() -> &'static Mutex<PinnedSiteStore> {
        &SHARED
    }

    pub fn count(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    pub fn is_pinned(&self, host: Option<&str>) -> bool {
        host.is_some_and(|h| self.hosts.iter().any(|p| p == h))
    }

    /// Puts `host` at the front, removing any earlier occurrence.
    pub fn pin(&mut self, host: Option<&str>) {
        let Some(host) = host else { return };
        self.unpin(Some(host));
        self.hosts.insert(0, host.to_string());
        debug!("[PinnedSites] Pinned {}", host);
    }

    /// Marks `host` as just used.
    pub fn touch(&mut self, host: Option<&str>) {
        self.pin(host);
    }

    pub fn unpin(&mut self, host: Option<&str>) {
        let Some(host) = host else { return };
        if let Some(index) = self.hosts.iter().position(|p| p == host) {
            self.hosts.remove(index);
        }
    }

    /// # Panics
    /// If `index >= self.count()`.
    pub fn pinned_site(&self, index: usize) -> &str {
        assert!(
            index < self.hosts.len(),
            "pinned site index {} out of bounds for {} hosts",
            index,
            self.hosts.len()
        );
        &self.hosts[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use url::Url;

    #[test]
    fn test_seeded_hosts() {
        let store = PinnedSiteStore::new();
        assert_eq!(store.hosts(), ["mobile.twitter.com", "m.facebook.com"]);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_pin_then_touch_orders_by_recency() {
        let mut store = PinnedSiteStore::new();

        store.pin(Some("example.com"));
        assert_eq!(store.hosts(), ["example.com", "mobile.twitter.com", "m.facebook.com"]);
        assert_eq!(store.count(), 3);

        store.touch(Some("m.facebook.com"));
        assert_eq!(store.hosts(), ["m.facebook.com", "example.com", "mobile.twitter.com"]);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_repin_does_not_duplicate() {
        let mut store = PinnedSiteStore::new();
        store.pin(Some("m.facebook.com"));
        assert_eq!(store.count(), 2);
        assert_eq!(store.pinned_site(0), "m.facebook.com");
        assert!(store.is_pinned(Some("m.facebook.com")));
    }

    #[test]
    fn test_unpin() {
        let mut store = PinnedSiteStore::new();
        store.unpin(Some("mobile.twitter.com"));
        assert!(!store.is_pinned(Some("mobile.twitter.com")));
        assert_eq!(store.count(), 1);

        store.unpin(Some("never-pinned.com"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_none_host_is_noop() {
        let mut store = PinnedSiteStore::new();
        store.pin(None);
        store.touch(None);
        store.unpin(None);
        assert_eq!(store, PinnedSiteStore::new());
        assert!(!store.is_pinned(None));
    }

    #[rstest]
    #[case("https://m.facebook.com/home", true)]
    #[case("https://facebook.com/", false)]
    #[case("data:text/plain,hello", false)]
    fn test_is_pinned_from_url(#[case] url: &str, #[case] expected: bool) {
        let store = PinnedSiteStore::new();
        let url = Url::parse(url).unwrap();
        assert_eq!(store.is_pinned(url.host_str()), expected);
    }

    #[test]
    fn test_with_hosts_drops_duplicates() {
        let store = PinnedSiteStore::with_hosts(["a.com", "b.com", "a.com"]);
        assert_eq!(store.hosts(), ["a.com", "b.com"]);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            pinned_hosts: vec!["news.ycombinator.com".to_string()],
            ..Settings::default()
        };
        let store = PinnedSiteStore::from_settings(&settings);
        assert_eq!(store.hosts(), ["news.ycombinator.com"]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pinned_site_out_of_bounds_panics() {
        PinnedSiteStore::new().pinned_site(2);
    }

    #[test]
    fn test_shared_store_is_single_instance() {
        assert!(std::ptr::eq(PinnedSiteStore::shared(), PinnedSiteStore::shared()));

        PinnedSiteStore::shared().lock().unwrap().pin(Some("shared.example.com"));
        let mut store = PinnedSiteStore::shared().lock().unwrap();
        assert!(store.is_pinned(Some("shared.example.com")));
        store.unpin(Some("shared.example.com"));
    }
}
