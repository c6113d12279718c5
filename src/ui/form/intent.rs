//! Intents for the summarization form.

use crate::api::{InputMode, PdfFile, SummaryResult};
use crate::ui::mvi::Intent;

use super::state::Notice;

/// Intents that can be dispatched to the form.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Select the active input mode. Other buffers are kept.
    SwitchMode(InputMode),

    /// Typed character for the active text buffer.
    InsertChar(char),

    /// Pasted text for the active text buffer.
    InsertStr(String),

    /// Delete the last character of the active text buffer.
    Backspace,

    SetText(String),

    SetYoutubeUrl(String),

    /// A PDF passed the size guard.
    FileSelected(PdfFile),

    /// A PDF failed selection; the buffered file is cleared.
    FileRejected {
        /// User-facing reason.
        reason: String,
    },

    /// User removed the selected PDF.
    RemoveFile,

    /// Summarize pressed with invalid input.
    SubmitRejected,

    /// Summarize pressed with valid input; a request is going out.
    Submit,

    /// Upload progress for the in-flight request.
    Progress(u8),

    /// The in-flight request finished, whatever the outcome.
    Settled(SummaryResult),

    Notify(Notice),

    DismissNotice,

    /// Reset every buffer, the result, and progress.
    ClearAll,
}

impl Intent for FormIntent {}
