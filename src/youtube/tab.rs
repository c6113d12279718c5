//! Active browser tab collaborator and target URL resolution.

use thiserror::Error;
use url::Url;

/// Environment variable carrying the URL of the currently displayed page.
pub const TAB_URL_ENV: &str = "SUMMARIZER_TAB_URL";

/// Read-only view of the page the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTab {
    pub url: String,
}

impl ActiveTab {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn is_watch_page(&self) -> bool {
        is_watch_page(&self.url)
    }
}

/// Source of the active tab. Never mutates the tab.
pub trait TabSource {
    fn active_tab(&self) -> Option<ActiveTab>;
}

/// A tab fixed at construction, e.g. from `--tab-url`.
#[derive(Debug, Clone, Default)]
pub struct FixedTab(Option<ActiveTab>);

impl FixedTab {
    pub fn new(url: Option<String>) -> Self {
        Self(
            url.filter(|u| !u.trim().is_empty())
                .map(|u| ActiveTab::new(u.trim())),
        )
    }
}

impl TabSource for FixedTab {
    fn active_tab(&self) -> Option<ActiveTab> {
        self.0.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Not a YouTube video page.")]
    NotYoutubePage,
}

/// True for `youtube.com/watch` pages on any youtube.com subdomain.
pub fn is_watch_page(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };
    let youtube_host = host == "youtube.com" || host.ends_with(".youtube.com");
    youtube_host && parsed.path() == "/watch"
}

/// Pick the URL to summarize: explicit input first, then the active tab.
pub fn resolve_video_url(explicit: &str, tab: Option<&ActiveTab>) -> Result<String, ResolveError> {
    let explicit = explicit.trim();
    if !explicit.is_empty() {
        return Ok(explicit.to_string());
    }

    match tab {
        Some(tab) if tab.is_watch_page() => Ok(tab.url.clone()),
        _ => Err(ResolveError::NotYoutubePage),
    }
}
