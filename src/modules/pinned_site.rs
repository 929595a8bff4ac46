// Pinned-site page logic - no UI imports allowed.
// A pinned site is shown as a mini browser holding a single link-preview tab
// pointed at the host's root.

use log::info;
use url::Url;

use crate::error::{BrowserError, Result};
use crate::settings::Settings;
use crate::state::{Link, Tab};

/// Root URL for a pinned host. Only a bare host (optionally with a port) is
/// accepted; anything carrying a path, query or credentials is rejected.
pub fn pinned_site_url(host: &str, https_only: bool) -> Result<Url> {
    let trimmed = host.trim();
    let invalid = || BrowserError::InvalidHost(host.to_string());

    if trimmed.is_empty() || trimmed.contains(['/', '?', '#', '@', ' ']) {
        return Err(invalid());
    }

    let scheme = if https_only { "https" } else { "http" };
    let url = Url::parse(&format!("{}://{}", scheme, trimmed)).map_err(|_| invalid())?;
    if url.host().is_none() {
        return Err(invalid());
    }
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct PinnedSitePage {
    host: String,
    https_only: bool,
    tab: Tab,
}

impl PinnedSitePage {
    pub fn open(host: &str, settings: &Settings) -> Result<Self> {
        let url = pinned_site_url(host, settings.https_only)?;
        info!("[PinnedSite] Opening {}", url);
        Ok(Self {
            host: host.trim().to_string(),
            https_only: settings.https_only,
            tab: Tab::new(Some(Link::new(None, url))),
        })
    }

    /// Shown in the navigation bar.
    pub fn title(&self) -> &str {
        &self.host
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn tab(&self) -> &Tab {
        &self.tab
    }

    /// Pinned pages never join the tab list; their tab is a preview.
    pub fn is_link_preview(&self) -> bool {
        true
    }

    /// Re-targets the page at another pinned host. The tab keeps its id.
    /// On error the page is left untouched.
    pub fn set_host(&mut self, host: &str) -> Result<()> {
        let url = pinned_site_url(host, self.https_only)?;
        info!("[PinnedSite] Reloading {} -> {}", self.host, url);
        self.host = host.trim().to_string();
        self.tab.link = Some(Link::new(None, url));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mobile.twitter.com", true, "https://mobile.twitter.com/")]
    #[case("m.facebook.com", false, "http://m.facebook.com/")]
    #[case("  example.com ", true, "https://example.com/")]
    #[case("localhost:8080", false, "http://localhost:8080/")]
    #[case("127.0.0.1", true, "https://127.0.0.1/")]
    fn test_pinned_site_url(#[case] host: &str, #[case] https_only: bool, #[case] expected: &str) {
        assert_eq!(pinned_site_url(host, https_only).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("example.com/path")]
    #[case("user@example.com")]
    #[case("exa mple.com")]
    #[case("example.com?q=1")]
    fn test_invalid_hosts(#[case] host: &str) {
        assert!(matches!(
            pinned_site_url(host, true),
            Err(BrowserError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_open_builds_preview_tab() {
        let page = PinnedSitePage::open("m.facebook.com", &Settings::default()).unwrap();
        assert_eq!(page.title(), "m.facebook.com");
        assert!(page.is_link_preview());

        let link = page.tab().link.as_ref().unwrap();
        assert_eq!(link.url.as_str(), "https://m.facebook.com/");
        assert!(link.title.is_none());
    }

    #[test]
    fn test_set_host_reloads_same_tab() {
        let mut page = PinnedSitePage::open("m.facebook.com", &Settings::default()).unwrap();
        let id = page.tab().id;

        page.set_host("mobile.twitter.com").unwrap();

        assert_eq!(page.title(), "mobile.twitter.com");
        assert_eq!(page.tab().id, id);
        assert_eq!(page.tab().url().unwrap().as_str(), "https://mobile.twitter.com/");
    }

    #[test]
    fn test_set_invalid_host_leaves_page() {
        let mut page = PinnedSitePage::open("m.facebook.com", &Settings::default()).unwrap();
        assert!(page.set_host("").is_err());
        assert_eq!(page.host(), "m.facebook.com");
        assert_eq!(page.tab().url().unwrap().as_str(), "https://m.facebook.com/");
    }
}
