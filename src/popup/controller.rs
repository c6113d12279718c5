//! Tab-aware YouTube summarization flow.
//!
//! Resolves a watch URL (explicit input or the active tab), shows the
//! oEmbed title when available, and runs the youtube summarize cycle.

use crate::api::{StatusMarker, SummaryClient, SummaryRequest, SummaryResult};
use crate::youtube::{extract_video_id, resolve_video_url, OembedClient, TabSource};

use super::surface::PopupSurface;

pub const STATUS_FETCHING: &str = "Fetching video info...";
pub const STATUS_SUMMARIZING: &str = "Summarizing... (please wait)";
const TITLE_MARKER: &str = "🎥";

pub struct PopupController<T, S> {
    client: SummaryClient,
    oembed: OembedClient,
    tabs: T,
    surface: S,
    analyze_mood: bool,
}

impl<T: TabSource, S: PopupSurface> PopupController<T, S> {
    pub fn new(client: SummaryClient, oembed: OembedClient, tabs: T, surface: S) -> Self {
        Self {
            client,
            oembed,
            tabs,
            surface,
            analyze_mood: false,
        }
    }

    /// Request mood intervals along with the summary.
    pub fn with_mood_analysis(mut self, enabled: bool) -> Self {
        self.analyze_mood = enabled;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Popup opened. Summarizes right away when the active tab is a watch
    /// page; otherwise does nothing and returns `None`.
    pub async fn on_open(&mut self) -> Option<SummaryResult> {
        let tab = self.tabs.active_tab().filter(|tab| tab.is_watch_page())?;
        tracing::info!(url = %tab.url, "Auto-summarizing active tab");

        self.fetch_video_title(&tab.url).await;
        Some(self.perform_summarization(&tab.url).await)
    }

    /// Summarize button. `explicit_input` is the URL text field.
    ///
    /// Returns `None` when no YouTube URL could be resolved.
    pub async fn on_summarize(&mut self, explicit_input: &str) -> Option<SummaryResult> {
        self.surface.set_output("");
        self.surface.set_status(STATUS_FETCHING);

        let tab = self.tabs.active_tab();
        let video_url = match resolve_video_url(explicit_input, tab.as_ref()) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(error = %err, tab = ?tab.map(|t| t.url), "Could not resolve video URL");
                self.surface
                    .set_status(&format!("{} {}", StatusMarker::Failure.glyph(), err));
                return None;
            }
        };

        self.fetch_video_title(&video_url).await;
        Some(self.perform_summarization(&video_url).await)
    }

    /// Show the video title if it can be looked up. Failures only clear the
    /// title region.
    pub async fn fetch_video_title(&mut self, video_url: &str) -> Option<String> {
        let Some(id) = extract_video_id(video_url) else {
            self.surface.set_title(None);
            return None;
        };

        match self.oembed.fetch_title(&id).await {
            Ok(title) => {
                self.surface
                    .set_title(Some(&format!("{} {}", TITLE_MARKER, title)));
                Some(title)
            }
            Err(err) => {
                tracing::warn!(video_id = %id, error = %err, "Error fetching title");
                self.surface.set_title(None);
                None
            }
        }
    }

    /// Run one youtube summarization and render the outcome.
    pub async fn perform_summarization(&mut self, video_url: &str) -> SummaryResult {
        self.surface.set_output("");
        self.surface.set_status(STATUS_SUMMARIZING);

        let request = SummaryRequest::youtube(video_url, self.analyze_mood);
        let result = self.client.summarize(&request, None).await;

        self.surface.set_status(&result.status_line());
        self.surface.set_output(result.output_text());
        result
    }
}
