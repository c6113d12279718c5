//! Request-side types shared by both controllers.

use std::path::PathBuf;

/// Largest PDF the client will send (10 MiB).
pub const MAX_PDF_BYTES: u64 = 10 * 1024 * 1024;

/// The three mutually exclusive kinds of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    #[default]
    Text,
    Pdf,
    Youtube,
}

impl InputMode {
    pub const ALL: [InputMode; 3] = [InputMode::Text, InputMode::Pdf, InputMode::Youtube];

    /// Stable identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::Pdf => "pdf",
            InputMode::Youtube => "youtube",
        }
    }

    /// Label shown on the mode tabs.
    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Text => "Text",
            InputMode::Pdf => "PDF",
            InputMode::Youtube => "YouTube",
        }
    }

    /// Backend path relative to the configured base URL.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            InputMode::Text => "/summarize/text",
            InputMode::Pdf => "/summarize/pdf",
            InputMode::Youtube => "/summarize/youtube",
        }
    }
}

/// A PDF picked by the user. The bytes are read only when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl PdfFile {
    /// Size in KiB, rounded to the nearest whole number.
    pub fn size_kb(&self) -> u64 {
        (self.size + 512) / 1024
    }
}

/// One outbound summarization call, tagged by input mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryRequest {
    Text(String),
    Pdf(PdfFile),
    Youtube {
        video_url: String,
        analyze_mood: bool,
    },
}

impl SummaryRequest {
    pub fn youtube(video_url: impl Into<String>, analyze_mood: bool) -> Self {
        SummaryRequest::Youtube {
            video_url: video_url.into(),
            analyze_mood,
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            SummaryRequest::Text(_) => InputMode::Text,
            SummaryRequest::Pdf(_) => InputMode::Pdf,
            SummaryRequest::Youtube { .. } => InputMode::Youtube,
        }
    }
}
