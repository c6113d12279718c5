//! Clipboard access for copying summaries.

use arboard::Clipboard;

/// Anything a summary can be copied into.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Open the system clipboard. Fails on headless sessions.
    pub fn new() -> Result<Self, arboard::Error> {
        let clipboard = Clipboard::new()?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSink for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| format!("Failed to set clipboard text: {}", e))
    }
}

/// Stand-in used when no system clipboard is available.
pub struct NoClipboard {
    reason: String,
}

impl NoClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ClipboardSink for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), String> {
        Err(format!("Clipboard unavailable: {}", self.reason))
    }
}

/// System clipboard if it opens, otherwise a sink that reports why not.
pub fn system_clipboard() -> Box<dyn ClipboardSink> {
    match ClipboardHandler::new() {
        Ok(handler) => Box::new(handler),
        Err(err) => {
            tracing::warn!(error = %err, "System clipboard unavailable");
            Box::new(NoClipboard::new(err.to_string()))
        }
    }
}
