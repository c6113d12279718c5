//! State for the summarization form.

use crate::api::{InputMode, PdfFile, SummaryRequest, SummaryResult};
use crate::ui::mvi::UiState;

/// Lifecycle of the single request a form may have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Requesting,
    Settled,
}

/// Transient message shown above the summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Warning(message) => message,
        }
    }
}

/// Form state: one active mode selecting over three retained buffers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub mode: InputMode,
    pub text: String,
    pub file: Option<PdfFile>,
    pub youtube_url: String,
    pub phase: RequestPhase,
    /// Upload percentage, only non-zero while a PDF is being sent.
    pub progress: u8,
    pub result: Option<SummaryResult>,
    pub notice: Option<Notice>,
}

impl UiState for FormState {}

/// Whether `state` holds usable input for `mode`.
pub fn validate(mode: InputMode, state: &FormState) -> bool {
    match mode {
        InputMode::Text => !state.text.trim().is_empty(),
        InputMode::Pdf => state.file.is_some(),
        InputMode::Youtube => !state.youtube_url.trim().is_empty(),
    }
}

impl FormState {
    pub fn is_loading(&self) -> bool {
        self.phase == RequestPhase::Requesting
    }

    pub fn is_input_valid(&self) -> bool {
        validate(self.mode, self)
    }

    /// The summarize trigger is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && self.is_input_valid()
    }

    /// Request for the active mode, or `None` when its input is invalid.
    pub fn request(&self, analyze_mood: bool) -> Option<SummaryRequest> {
        if !self.is_input_valid() {
            return None;
        }
        let request = match self.mode {
            InputMode::Text => SummaryRequest::Text(self.text.clone()),
            InputMode::Pdf => SummaryRequest::Pdf(self.file.clone()?),
            InputMode::Youtube => SummaryRequest::youtube(self.youtube_url.clone(), analyze_mood),
        };
        Some(request)
    }

    /// Summary of the last successful request.
    pub fn summary(&self) -> Option<&str> {
        self.result.as_ref().and_then(SummaryResult::summary)
    }
}
