use regex::Regex;
use std::fmt;

/// Length of every YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

/// An 11-character YouTube video id (`[A-Za-z0-9_-]{11}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Validate `candidate` as a video id.
    pub fn parse(candidate: &str) -> Option<Self> {
        let valid = candidate.len() == VIDEO_ID_LEN
            && candidate
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        valid.then(|| Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch page for this id.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from any supported YouTube URL shape.
///
/// Formats: youtube.com/watch?v=ID, youtu.be/ID, youtube.com/embed/ID,
/// youtube.com/v/ID, then any `v=ID` query parameter.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    if url.is_empty() {
        return None;
    }

    let patterns = [
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([a-zA-Z0-9_-]{11})",
        r"youtube\.com/v/([a-zA-Z0-9_-]{11})",
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(caps) = re.captures(url) {
                if let Some(m) = caps.get(1) {
                    return VideoId::parse(m.as_str());
                }
            }
        }
    }

    // Loose fallback: whatever follows the first `v=`, up to the next `&`.
    let (_, rest) = url.split_once("v=")?;
    let candidate = rest.split('&').next().unwrap_or_default();
    VideoId::parse(candidate)
}
